//! Top navigation bar
//!
//! Desktop link row plus a collapsible mobile menu and the language
//! switcher. The active route is highlighted by the router.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::i18n::Locale;
use crate::ui::icon::{Icon, icons};
use crate::ui::locale::use_locale_context;

/// Main site routes shown in the navigation, as (path, catalog key)
const NAV_LINKS: [(&str, &str); 6] = [
    ("/el-juego", "navigation.elJuego"),
    ("/precios", "navigation.precios"),
    ("/cumpleanos", "navigation.cumpleanos"),
    ("/faq", "navigation.faq"),
    ("/blog", "navigation.blog"),
    ("/contacto", "navigation.contacto"),
];

#[component]
pub fn Navigation() -> impl IntoView {
    let locale_ctx = use_locale_context();
    let mobile_open = RwSignal::new(false);

    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-black/80 backdrop-blur border-b border-orange-500/20">
            <nav class="max-w-6xl mx-auto flex items-center justify-between px-4 h-16">
                <A href="/" attr:class="flex items-center gap-2 text-xl font-bold text-white">
                    <Icon name=icons::TARGET class="w-7 h-7 text-orange-500"/>
                    "Tiger Laser Tag"
                </A>

                // Desktop links
                <div class="hidden lg:flex items-center gap-6">
                    {NAV_LINKS.map(|(path, key)| view! {
                        <A
                            href=path
                            attr:class="text-sm text-gray-300 hover:text-orange-400 transition-colors"
                        >
                            {move || locale_ctx.t(key)}
                        </A>
                    }).collect_view()}

                    <LanguageMenu/>

                    <A
                        href="/reserva"
                        attr:class="btn-base btn-primary btn-sm"
                    >
                        {move || locale_ctx.t("navigation.reservaYa")}
                    </A>
                </div>

                // Mobile menu toggle
                <button
                    class="lg:hidden text-gray-300 hover:text-white"
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() {
                        view! { <Icon name=icons::X class="w-6 h-6"/> }.into_any()
                    } else {
                        view! { <Icon name=icons::MENU class="w-6 h-6"/> }.into_any()
                    }}
                </button>
            </nav>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="lg:hidden border-t border-orange-500/20 bg-black/95 px-4 py-4 flex flex-col gap-3">
                    {NAV_LINKS.map(|(path, key)| view! {
                        <A
                            href=path
                            attr:class="text-gray-300 hover:text-orange-400 transition-colors"
                            on:click=move |_| mobile_open.set(false)
                        >
                            {move || locale_ctx.t(key)}
                        </A>
                    }).collect_view()}

                    <A
                        href="/reserva"
                        attr:class="btn-base btn-primary"
                        on:click=move |_| mobile_open.set(false)
                    >
                        {move || locale_ctx.t("navigation.reservaYa")}
                    </A>

                    <LanguageMenu/>
                </div>
            </Show>
        </header>
    }
}

/// Dropdown to pick the site language, with flag and native name
#[component]
fn LanguageMenu() -> impl IntoView {
    let locale_ctx = use_locale_context();
    let open = RwSignal::new(false);

    view! {
        <div class="relative">
            <button
                class="flex items-center gap-1.5 text-sm text-gray-300 hover:text-white transition-colors"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {move || {
                    let locale = locale_ctx.locale.get();
                    view! {
                        <img
                            src=format!("/flags/{}.svg", locale.flag_code())
                            class="w-5 h-4 rounded-sm"
                            alt=locale.as_str()
                        />
                        <span>{locale.as_str().to_uppercase()}</span>
                    }
                }}
                <Icon name=icons::CHEVRON_DOWN class="w-4 h-4"/>
            </button>

            <Show when=move || open.get()>
                <div class="absolute right-0 mt-2 w-40 rounded-lg border border-orange-500/20 bg-black/95 shadow-lg py-1 z-50">
                    {Locale::ALL.map(|locale| view! {
                        <button
                            class="w-full flex items-center gap-2 px-3 py-2 text-sm text-gray-300 hover:bg-orange-500/10 hover:text-white"
                            on:click=move |_| {
                                locale_ctx.set_locale(locale);
                                open.set(false);
                            }
                        >
                            <img
                                src=format!("/flags/{}.svg", locale.flag_code())
                                class="w-5 h-4 rounded-sm"
                                alt=locale.as_str()
                            />
                            {locale.label()}
                        </button>
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
