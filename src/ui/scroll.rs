//! Scroll reset on navigation
//!
//! The router keeps the scroll position across client-side navigations;
//! this effect jumps back to the top whenever the path changes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        let _path = location.pathname.get();
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = leptos::web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    });

    ()
}
