//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::landing::LandingPage;
use crate::state::theme::ThemeState;
use crate::util::theme_controller::ThemeController;

/// Theme controller slot shared through context. Empty until hydration
/// installs the browser controller; dropping the slot releases the OS
/// color-scheme subscription.
pub type ThemeSlot = StoredValue<Option<ThemeController>, LocalStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    let controller: ThemeSlot = StoredValue::new_local(None);

    provide_context(theme);
    provide_context(controller);

    // Effects only run in the browser, after hydration, so the server render
    // and the first client render agree on the default theme state.
    Effect::new(move |_| {
        install_theme_controller(controller, theme);
        crate::util::navigation::handle_initial_hash_navigation();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/atrium.css"/>
        <Title text="Atrium"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}

fn install_theme_controller(slot: ThemeSlot, theme: RwSignal<ThemeState>) {
    #[cfg(feature = "hydrate")]
    {
        if slot.with_value(Option::is_some) {
            return;
        }
        let controller = ThemeController::browser();
        theme.set(controller.state());
        controller.on_change(move |state| theme.set(state));
        slot.set_value(Some(controller));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (slot, theme);
    }
}
