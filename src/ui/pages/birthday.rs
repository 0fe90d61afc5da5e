//! Birthdays page (route `/cumpleanos`)

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::common::button::Button;
use crate::ui::icon::{Icon, icons};
use crate::ui::locale::use_locale_context;
use crate::ui::notifications::use_notice_manager;

/// Contents of the birthday package, as (icon, catalog key)
const INCLUDED: [(&str, &str); 6] = [
    (icons::CLOCK, "cumpleanos.included.room"),
    (icons::USERS, "cumpleanos.included.kids"),
    (icons::GAMEPAD, "cumpleanos.included.games"),
    (icons::SPARKLES, "cumpleanos.included.decoration"),
    (icons::CAKE, "cumpleanos.included.cake"),
    (icons::CAMERA, "cumpleanos.included.photos"),
];

#[component]
pub fn BirthdayPage() -> impl IntoView {
    let locale_ctx = use_locale_context();
    let notices = use_notice_manager();

    let on_reserve = Callback::new(move |_| {
        notices.info(locale_ctx.t("wip.title"), locale_ctx.t("wip.desc"));
    });

    view! {
        <div class="pt-24 pb-16 max-w-5xl mx-auto px-4">
            <h1 class="text-4xl font-bold text-white text-center mb-2">
                {move || locale_ctx.t("cumpleanos.title")}
            </h1>
            <p class="text-gray-400 text-center mb-12">
                {move || locale_ctx.t("cumpleanos.subtitle")}
            </p>

            // Package card
            <div class="card border-orange-500 text-center mb-12">
                <Icon name=icons::GIFT class="w-10 h-10 text-orange-400 mx-auto mb-3"/>
                <h2 class="text-2xl font-bold text-white">
                    {move || locale_ctx.t("cumpleanos.packageTitle")}
                </h2>
                <div class="my-4">
                    <span class="text-4xl font-bold text-orange-400">"199€"</span>
                    <span class="text-sm text-gray-400 ml-2">
                        {move || locale_ctx.t("cumpleanos.kidsIncluded")}
                    </span>
                </div>
                <p class="text-sm text-gray-400 mb-6">
                    {move || locale_ctx.t("cumpleanos.extraChild")}
                </p>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 mb-8 text-left">
                    {INCLUDED.map(|(icon, key)| view! {
                        <div class="flex items-center gap-3 text-sm text-gray-300">
                            <Icon name=icon class="w-5 h-5 text-orange-400"/>
                            {move || locale_ctx.t(key)}
                        </div>
                    }).collect_view()}
                </div>

                <Button on_click=on_reserve icon=icons::CAKE>
                    {move || locale_ctx.t("cumpleanos.btnReserve")}
                </Button>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <section class="card">
                    <h2 class="text-xl font-semibold text-white mb-3">
                        {move || locale_ctx.t("cumpleanos.descriptionTitle")}
                    </h2>
                    <p class="text-gray-300 mb-4">
                        {move || locale_ctx.t("cumpleanos.descriptionText")}
                    </p>
                    <ul class="space-y-2">
                        {move || locale_ctx.t_list("cumpleanos.featuresList").into_iter().map(|line| view! {
                            <li class="flex items-start gap-2 text-sm text-gray-300">
                                <Icon name=icons::CHECK class="w-4 h-4 text-orange-400 mt-0.5"/>
                                {line}
                            </li>
                        }).collect_view()}
                    </ul>
                </section>

                <div class="space-y-8">
                    <section class="card">
                        <h2 class="text-xl font-semibold text-white mb-3">
                            {move || locale_ctx.t("cumpleanos.agesTitle")}
                        </h2>
                        <p class="text-gray-300">
                            {move || locale_ctx.t("cumpleanos.agesDesc")}
                        </p>
                    </section>

                    <section class="card">
                        <h2 class="text-xl font-semibold text-white mb-3">
                            {move || locale_ctx.t("cumpleanos.infoTitle")}
                        </h2>
                        <ul class="space-y-2">
                            {move || locale_ctx.t_list("cumpleanos.infoList").into_iter().map(|line| view! {
                                <li class="flex items-start gap-2 text-sm text-gray-300">
                                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4 text-orange-400 mt-0.5"/>
                                    {line}
                                </li>
                            }).collect_view()}
                        </ul>
                    </section>
                </div>
            </div>

            <div class="mt-16 text-center">
                <h2 class="text-2xl font-bold text-white mb-2">
                    {move || locale_ctx.t("cumpleanos.doubtsTitle")}
                </h2>
                <p class="text-gray-400 mb-6">
                    {move || locale_ctx.t("cumpleanos.doubtsText")}
                </p>
                <A href="/contacto" attr:class="btn-base btn-secondary">
                    {move || locale_ctx.t("cumpleanos.btnContact")}
                </A>
            </div>
        </div>
    }
}
