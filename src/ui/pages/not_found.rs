//! Not found page component
//!
//! A 404 page displayed when a route is not matched.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::locale::use_locale_context;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let locale_ctx = use_locale_context();

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center p-4 text-center">
            <div class="w-24 h-24 mb-6 bg-orange-500/10 rounded-full flex items-center justify-center">
                <Icon name=icons::TARGET class="w-12 h-12 text-orange-400"/>
            </div>

            <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>

            <h2 class="text-2xl font-semibold text-white mb-2">
                {move || locale_ctx.t("notFound.title")}
            </h2>

            <p class="text-gray-400 mb-8 max-w-md">
                {move || locale_ctx.t("notFound.text")}
            </p>

            <A href="/" attr:class="btn-base btn-primary">
                {move || locale_ctx.t("notFound.btnHome")}
            </A>
        </div>
    }
}
