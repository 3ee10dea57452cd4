//! Header button cycling the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `ThemeState` snapshot for its label and forwards clicks to the
//! controller installed by `App`. Before hydration there is no controller and
//! clicks do nothing.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::app::ThemeSlot;
use crate::state::theme::{ThemePreference, ThemeState};

fn toggle_icon(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::Light => "☀",
        ThemePreference::Dark => "☾",
        ThemePreference::System => "◐",
    }
}

fn toggle_title(preference: ThemePreference) -> String {
    let next = preference.next();
    format!("Theme: {} (switch to {})", preference.as_str(), next.as_str())
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let controller = expect_context::<ThemeSlot>();

    let on_click = move |_| {
        controller.with_value(|slot| {
            if let Some(controller) = slot {
                controller.toggle();
            }
        });
    };

    view! {
        <button
            class="btn theme-toggle"
            on:click=on_click
            title=move || toggle_title(theme.get().preference)
            aria-label=move || toggle_title(theme.get().preference)
        >
            {move || toggle_icon(theme.get().preference)}
        </button>
    }
}
