//! FAQ page (route `/faq`)
//!
//! Accordion with at most one open entry; clicking the open entry
//! closes it.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::locale::use_locale_context;

#[component]
pub fn FaqPage() -> impl IntoView {
    let locale_ctx = use_locale_context();
    let open_index = RwSignal::new(None::<usize>);

    view! {
        <div class="pt-24 pb-16 max-w-3xl mx-auto px-4">
            <h1 class="text-4xl font-bold text-white text-center mb-2">
                {move || locale_ctx.t("faq.title")}
            </h1>
            <p class="text-gray-400 text-center mb-12">
                {move || locale_ctx.t("faq.subtitle")}
            </p>

            <div class="space-y-3">
                {move || {
                    locale_ctx.t_qa("faq.questions").into_iter().enumerate().map(|(index, entry)| {
                        let is_open = move || open_index.get() == Some(index);

                        view! {
                            <div class="card p-0 overflow-hidden">
                                <button
                                    class="w-full flex items-center justify-between gap-4 px-5 py-4 text-left text-white font-medium hover:bg-orange-500/5 transition-colors"
                                    on:click=move |_| {
                                        open_index.update(|open| {
                                            *open = if *open == Some(index) { None } else { Some(index) };
                                        });
                                    }
                                >
                                    {entry.q.clone()}
                                    <span
                                        class="shrink-0 transition-transform"
                                        class:rotate-180=is_open
                                    >
                                        <Icon name=icons::CHEVRON_DOWN class="w-5 h-5 text-orange-400"/>
                                    </span>
                                </button>
                                <Show when=is_open>
                                    <p class="px-5 pb-4 text-sm text-gray-300">
                                        {entry.a.clone()}
                                    </p>
                                </Show>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>

            <div class="mt-16 text-center">
                <h2 class="text-2xl font-bold text-white mb-2">
                    {move || locale_ctx.t("faq.notFoundTitle")}
                </h2>
                <p class="text-gray-400 mb-6">
                    {move || locale_ctx.t("faq.notFoundText")}
                </p>
                <A href="/contacto" attr:class="btn-base btn-primary">
                    {move || locale_ctx.t("faq.btnContact")}
                </A>
            </div>
        </div>
    }
}
