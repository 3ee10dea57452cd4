//! Smooth in-page navigation to landing sections.
//!
//! Section links scroll the viewport so the target lands a fixed offset below
//! the top (clearing the sticky header) instead of jumping. On first load a
//! URL fragment triggers the same scroll after a short delay so late-rendered
//! sections have a position to scroll to.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Distance in pixels between the viewport top and a scrolled-to section.
pub const DEFAULT_SECTION_OFFSET: f64 = 80.0;

/// Delay before honoring the URL fragment on load.
pub const INITIAL_HASH_DELAY_MS: u64 = 100;

/// Document/viewport operations the navigation helper needs.
pub trait Viewport {
    /// Top edge of the element with `id`, relative to the viewport top.
    fn section_top(&self, id: &str) -> Option<f64>;
    fn scroll_y(&self) -> f64;
    /// Animated scroll to an absolute document offset.
    fn smooth_scroll_to(&self, top: f64);
    /// Raw `location.hash`, including the leading `#`.
    fn location_hash(&self) -> Option<String>;
}

/// Absolute scroll position that places a section `offset` px below the top.
#[must_use]
pub fn scroll_target(section_top: f64, scroll_y: f64, offset: f64) -> f64 {
    (section_top + scroll_y - offset).max(0.0)
}

/// Strip the leading `#` from a location hash. Empty fragments yield `None`.
#[must_use]
pub fn fragment_id(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    (!id.is_empty()).then_some(id)
}

/// Scroll `viewport` to section `id`. Returns `false` (and does nothing) when
/// the section does not exist.
pub fn scroll_to_section_in(viewport: &impl Viewport, id: &str, offset: f64) -> bool {
    let Some(top) = viewport.section_top(id) else {
        return false;
    };
    viewport.smooth_scroll_to(scroll_target(top, viewport.scroll_y(), offset));
    true
}

/// Section named by the current URL fragment, if any.
pub fn initial_hash_section(viewport: &impl Viewport) -> Option<String> {
    let hash = viewport.location_hash()?;
    fragment_id(&hash).map(str::to_owned)
}

/// Scroll the browser window to section `id` with the default offset.
pub fn scroll_to_section(id: &str) -> bool {
    scroll_to_section_with_offset(id, DEFAULT_SECTION_OFFSET)
}

pub fn scroll_to_section_with_offset(id: &str, offset: f64) -> bool {
    #[cfg(feature = "hydrate")]
    {
        scroll_to_section_in(&BrowserViewport, id, offset)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, offset);
        false
    }
}

/// If the page loaded with a fragment, scroll to it after
/// `INITIAL_HASH_DELAY_MS`. No-op without a fragment or outside the browser.
pub fn handle_initial_hash_navigation() {
    #[cfg(feature = "hydrate")]
    {
        let Some(id) = initial_hash_section(&BrowserViewport) else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(INITIAL_HASH_DELAY_MS)).await;
            if !scroll_to_section(&id) {
                log::debug!("initial fragment #{id} has no matching section");
            }
        });
    }
}

/// The live `window`/`document`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

#[cfg(feature = "hydrate")]
impl Viewport for BrowserViewport {
    fn section_top(&self, id: &str) -> Option<f64> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }

    fn scroll_y(&self) -> f64 {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    fn location_hash(&self) -> Option<String> {
        web_sys::window()?.location().hash().ok()
    }
}
