//! Site footer with the testimonial carousel

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::locale::use_locale_context;

/// Player reviews shown in the carousel, one at a time
const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "Carlos M.",
        "¡Increíble experiencia! Vinimos con la empresa y acabamos repitiendo con la familia.",
    ),
    (
        "Sophie L.",
        "Best laser tag arena I've played in. The maze is huge and the staff is fantastic.",
    ),
    (
        "Andrea R.",
        "El cumpleaños de mi hijo fue un éxito total. Los monitores se encargaron de todo.",
    ),
];

#[component]
pub fn Footer() -> impl IntoView {
    let locale_ctx = use_locale_context();
    let current = RwSignal::new(0usize);

    let previous = move |_| {
        current.update(|index| {
            *index = index
                .checked_sub(1)
                .unwrap_or(TESTIMONIALS.len() - 1);
        });
    };
    let next = move |_| {
        current.update(|index| {
            *index = (*index + 1) % TESTIMONIALS.len();
        });
    };

    view! {
        <footer class="bg-black border-t border-orange-500/20 text-gray-300">
            // Testimonials
            <div class="max-w-4xl mx-auto px-4 py-12 text-center">
                <h3 class="text-xl font-semibold text-white mb-6">
                    {move || locale_ctx.t("footer.testimonialsTitle")}
                </h3>
                <div class="flex items-center justify-center gap-4">
                    <button
                        class="text-gray-500 hover:text-orange-400 transition-colors"
                        on:click=previous
                    >
                        <Icon name=icons::CHEVRON_LEFT class="w-6 h-6"/>
                    </button>
                    {move || {
                        let (author, quote) = TESTIMONIALS[current.get()];
                        view! {
                            <blockquote class="max-w-xl">
                                <div class="flex justify-center gap-1 mb-2 text-orange-400">
                                    {(0..5).map(|_| view! {
                                        <Icon name=icons::STAR class="w-4 h-4"/>
                                    }).collect_view()}
                                </div>
                                <p class="italic text-gray-300">{format!("\u{201c}{quote}\u{201d}")}</p>
                                <footer class="mt-2 text-sm text-orange-400">{author}</footer>
                            </blockquote>
                        }
                    }}
                    <button
                        class="text-gray-500 hover:text-orange-400 transition-colors"
                        on:click=next
                    >
                        <Icon name=icons::CHEVRON_RIGHT class="w-6 h-6"/>
                    </button>
                </div>
            </div>

            // Link columns
            <div class="max-w-6xl mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-4 gap-8 border-t border-orange-500/10">
                <div>
                    <h4 class="text-white font-semibold mb-3">
                        {move || locale_ctx.t("footer.aboutTitle")}
                    </h4>
                    <p class="text-sm">{move || locale_ctx.t("footer.aboutDesc")}</p>
                </div>

                <div>
                    <h4 class="text-white font-semibold mb-3">
                        {move || locale_ctx.t("footer.quickLinks")}
                    </h4>
                    <ul class="space-y-2 text-sm">
                        <li><A href="/el-juego" attr:class="hover:text-orange-400">{move || locale_ctx.t("navigation.elJuego")}</A></li>
                        <li><A href="/precios" attr:class="hover:text-orange-400">{move || locale_ctx.t("navigation.precios")}</A></li>
                        <li><A href="/cumpleanos" attr:class="hover:text-orange-400">{move || locale_ctx.t("navigation.cumpleanos")}</A></li>
                        <li><A href="/faq" attr:class="hover:text-orange-400">{move || locale_ctx.t("navigation.faq")}</A></li>
                        <li><A href="/reserva" attr:class="hover:text-orange-400">{move || locale_ctx.t("navigation.reservaYa")}</A></li>
                    </ul>
                </div>

                <div>
                    <h4 class="text-white font-semibold mb-3">
                        {move || locale_ctx.t("footer.contactTitle")}
                    </h4>
                    <ul class="space-y-2 text-sm">
                        <li class="flex items-center gap-2">
                            <Icon name=icons::MAP_PIN class="w-4 h-4 text-orange-400"/>
                            "Calle del Láser, 123, Marbella"
                        </li>
                        <li class="flex items-center gap-2">
                            <Icon name=icons::PHONE class="w-4 h-4 text-orange-400"/>
                            "+34 952 000 000"
                        </li>
                        <li class="flex items-center gap-2">
                            <Icon name=icons::MAIL class="w-4 h-4 text-orange-400"/>
                            "info@tigerlasertag.com"
                        </li>
                    </ul>
                    <div class="flex gap-3 mt-4">
                        <a href="https://facebook.com" class="hover:text-orange-400" aria-label="Facebook">
                            <Icon name=icons::FACEBOOK class="w-5 h-5"/>
                        </a>
                        <a href="https://instagram.com" class="hover:text-orange-400" aria-label="Instagram">
                            <Icon name=icons::INSTAGRAM class="w-5 h-5"/>
                        </a>
                        <a href="https://twitter.com" class="hover:text-orange-400" aria-label="Twitter">
                            <Icon name=icons::TWITTER class="w-5 h-5"/>
                        </a>
                        <a href="https://youtube.com" class="hover:text-orange-400" aria-label="YouTube">
                            <Icon name=icons::YOUTUBE class="w-5 h-5"/>
                        </a>
                    </div>
                </div>

                <div>
                    <h4 class="text-white font-semibold mb-3">
                        {move || locale_ctx.t("footer.hoursTitle")}
                    </h4>
                    <p class="text-sm whitespace-pre-line">
                        {move || locale_ctx.t("footer.hoursDesc")}
                    </p>
                </div>
            </div>

            <div class="border-t border-orange-500/10 py-4 text-center text-xs text-gray-500">
                {move || locale_ctx.t("footer.copyright")}
            </div>
        </footer>
    }
}
