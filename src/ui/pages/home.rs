//! Landing page (route `/`)

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::locale::use_locale_context;

/// Feature cards of the welcome section, as (icon, title key, text key)
const FEATURES: [(&str, &str, &str); 4] = [
    (icons::ZAP, "home.features.techTitle", "home.features.techDesc"),
    (
        icons::USERS,
        "home.features.everyoneTitle",
        "home.features.everyoneDesc",
    ),
    (
        icons::TROPHY,
        "home.features.competitionTitle",
        "home.features.competitionDesc",
    ),
    (
        icons::SHIELD,
        "home.features.securityTitle",
        "home.features.securityDesc",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let locale_ctx = use_locale_context();

    view! {
        // Hero
        <section class="min-h-screen flex flex-col items-center justify-center text-center px-4 bg-gradient-to-b from-black via-gray-900 to-black">
            <h1 class="text-5xl md:text-7xl font-extrabold text-white">
                {move || locale_ctx.t("home.heroTitle")}
                <span class="block text-orange-500">
                    {move || locale_ctx.t("home.heroTitleS")}
                </span>
            </h1>
            <p class="mt-6 max-w-2xl text-lg text-gray-300">
                {move || locale_ctx.t("home.heroSubtitle")}
            </p>
            <div class="mt-10 flex flex-col sm:flex-row gap-4">
                <A href="/reserva" attr:class="btn-base btn-primary btn-lg">
                    {move || locale_ctx.t("home.ctaReserve")}
                </A>
                <A href="/el-juego" attr:class="btn-base btn-secondary btn-lg">
                    {move || locale_ctx.t("home.ctaDiscover")}
                </A>
            </div>
        </section>

        // Welcome + features
        <section class="py-20 max-w-6xl mx-auto px-4 text-center">
            <h2 class="text-3xl font-bold text-white mb-4">
                {move || locale_ctx.t("home.welcomeTitle")}
            </h2>
            <p class="max-w-3xl mx-auto text-gray-400 mb-12">
                {move || locale_ctx.t("home.welcomeDesc")}
            </p>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {FEATURES.map(|(icon, title_key, desc_key)| view! {
                    <div class="card text-center">
                        <div class="w-12 h-12 mx-auto mb-4 rounded-full bg-orange-500/10 flex items-center justify-center">
                            <Icon name=icon class="w-6 h-6 text-orange-400"/>
                        </div>
                        <h3 class="text-white font-semibold mb-2">
                            {move || locale_ctx.t(title_key)}
                        </h3>
                        <p class="text-sm text-gray-400">
                            {move || locale_ctx.t(desc_key)}
                        </p>
                    </div>
                }).collect_view()}
            </div>
        </section>

        // Final call to action
        <section class="py-20 text-center bg-gradient-to-r from-orange-600/20 via-black to-orange-600/20">
            <h2 class="text-3xl font-bold text-white mb-4">
                {move || locale_ctx.t("home.finalTitle")}
            </h2>
            <p class="text-gray-300 mb-8">
                {move || locale_ctx.t("home.finalSubtitle")}
            </p>
            <A href="/reserva" attr:class="btn-base btn-primary btn-lg">
                {move || locale_ctx.t("navigation.reservaYa")}
            </A>
        </section>
    }
}
