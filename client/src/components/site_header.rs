//! Sticky landing header with section links and the theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::util::navigation::scroll_to_section;

/// `(section id, link label)` for the header navigation.
pub const NAV_SECTIONS: [(&str, &str); 3] = [("features", "Features"), ("pricing", "Pricing"), ("contact", "Contact")];

/// Anchor that smooth-scrolls to `id`, falling back to a plain fragment jump
/// when the section is not on the page.
#[component]
fn SectionLink(id: &'static str, class: &'static str, children: Children) -> impl IntoView {
    view! {
        <a
            href=format!("#{id}")
            class=class
            on:click=move |ev: leptos::ev::MouseEvent| {
                if scroll_to_section(id) {
                    ev.prevent_default();
                }
            }
        >
            {children()}
        </a>
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <SectionLink id="home" class="site-header__brand">
                "Atrium"
            </SectionLink>
            <nav class="site-header__nav">
                {NAV_SECTIONS
                    .into_iter()
                    .map(|(id, label)| {
                        view! {
                            <SectionLink id=id class="site-header__link">
                                {label}
                            </SectionLink>
                        }
                    })
                    .collect_view()}
            </nav>
            <span class="site-header__spacer"></span>
            <ThemeToggle/>
        </header>
    }
}
