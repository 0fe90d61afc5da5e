//! Blog page (route `/blog`)
//!
//! Post cards are placeholders until the blog backend lands; reading a
//! post and subscribing to the newsletter both emit the
//! work-in-progress notice.

use leptos::prelude::*;

use crate::ui::common::button::{Button, ButtonVariant};
use crate::ui::locale::use_locale_context;
use crate::ui::notifications::use_notice_manager;

/// Placeholder posts, as (date, title, excerpt)
const POSTS: [(&str, &str, &str); 3] = [
    (
        "2026-07-12",
        "5 tácticas para dominar la arena",
        "Cubrirse no es esconderse: aprende a moverte entre obstáculos y a leer el minimapa de tu equipo.",
    ),
    (
        "2026-06-03",
        "Torneo de verano: los resultados",
        "Más de 120 jugadores compitieron durante dos fines de semana. Estos son los equipos que subieron al podio.",
    ),
    (
        "2026-05-18",
        "Cómo organizar un team building que funcione",
        "Las claves que hemos aprendido tras cientos de eventos de empresa en nuestra arena.",
    ),
];

#[component]
pub fn BlogPage() -> impl IntoView {
    let locale_ctx = use_locale_context();
    let notices = use_notice_manager();
    let newsletter_email = RwSignal::new(String::new());

    let on_wip = Callback::new(move |_| {
        notices.info(locale_ctx.t("wip.title"), locale_ctx.t("wip.desc"));
    });

    view! {
        <div class="pt-24 pb-16 max-w-5xl mx-auto px-4">
            <h1 class="text-4xl font-bold text-white text-center mb-2">
                {move || locale_ctx.t("blog.title")}
            </h1>
            <p class="text-gray-400 text-center mb-12">
                {move || locale_ctx.t("blog.subtitle")}
            </p>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {POSTS.map(|(date, title, excerpt)| view! {
                    <article class="card flex flex-col">
                        <time class="text-xs text-orange-400 mb-2">{date}</time>
                        <h2 class="text-lg font-semibold text-white mb-2">{title}</h2>
                        <p class="text-sm text-gray-400 flex-1 mb-4">{excerpt}</p>
                        <Button variant=ButtonVariant::Ghost on_click=on_wip>
                            {move || locale_ctx.t("blog.readMore")}
                        </Button>
                    </article>
                }).collect_view()}
            </div>

            // Newsletter
            <div class="card mt-12 text-center">
                <h2 class="text-xl font-semibold text-white mb-2">
                    {move || locale_ctx.t("blog.newsletterTitle")}
                </h2>
                <p class="text-gray-400 mb-6">
                    {move || locale_ctx.t("blog.newsletterText")}
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-3 max-w-md mx-auto">
                    <input
                        type="email"
                        class="input-base flex-1"
                        placeholder=move || locale_ctx.t("blog.emailPlaceholder")
                        prop:value=move || newsletter_email.get()
                        on:input=move |ev| newsletter_email.set(event_target_value(&ev))
                    />
                    <Button on_click=on_wip>
                        {move || locale_ctx.t("blog.btnSubscribe")}
                    </Button>
                </div>
            </div>
        </div>
    }
}
