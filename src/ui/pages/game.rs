//! "The game" page (route `/el-juego`)

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::locale::use_locale_context;

/// Explainer sections, as (icon, title key, content key)
const SECTIONS: [(&str, &str, &str); 3] = [
    (icons::TARGET, "elJuego.whatIs.title", "elJuego.whatIs.content"),
    (
        icons::GAMEPAD,
        "elJuego.howWorks.title",
        "elJuego.howWorks.content",
    ),
    (icons::SHIELD, "elJuego.rules.title", "elJuego.rules.content"),
];

#[component]
pub fn GamePage() -> impl IntoView {
    let locale_ctx = use_locale_context();

    view! {
        <div class="pt-24 pb-16 max-w-4xl mx-auto px-4">
            <h1 class="text-4xl font-bold text-white text-center mb-2">
                {move || locale_ctx.t("elJuego.title")}
            </h1>
            <p class="text-gray-400 text-center mb-12">
                {move || locale_ctx.t("elJuego.subtitle")}
            </p>

            <div class="space-y-8">
                {SECTIONS.map(|(icon, title_key, content_key)| view! {
                    <section class="card">
                        <div class="flex items-center gap-3 mb-3">
                            <Icon name=icon class="w-6 h-6 text-orange-400"/>
                            <h2 class="text-xl font-semibold text-white">
                                {move || locale_ctx.t(title_key)}
                            </h2>
                        </div>
                        <p class="text-gray-300 leading-relaxed">
                            {move || locale_ctx.t(content_key)}
                        </p>
                    </section>
                }).collect_view()}
            </div>

            <div class="mt-16 text-center">
                <h2 class="text-2xl font-bold text-white mb-2">
                    {move || locale_ctx.t("elJuego.ctaTitle")}
                </h2>
                <p class="text-gray-400 mb-6">
                    {move || locale_ctx.t("elJuego.ctaDesc")}
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <A href="/precios" attr:class="btn-base btn-primary">
                        {move || locale_ctx.t("elJuego.btnPrices")}
                    </A>
                    <A href="/contacto" attr:class="btn-base btn-secondary">
                        {move || locale_ctx.t("elJuego.btnContact")}
                    </A>
                </div>
            </div>
        </div>
    }
}
