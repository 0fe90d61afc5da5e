//! Prices page (route `/precios`)
//!
//! Package cards built from the catalogs; prices themselves are fixed
//! and language-independent. The per-package booking buttons are not
//! wired to the booking flow yet and emit the work-in-progress notice.

use leptos::prelude::*;

use crate::ui::common::button::{Button, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::locale::use_locale_context;
use crate::ui::notifications::use_notice_manager;

struct Package {
    id: &'static str,
    price: &'static str,
    per_person: bool,
    highlighted: bool,
}

const PACKAGES: [Package; 5] = [
    Package {
        id: "basic",
        price: "12€",
        per_person: true,
        highlighted: false,
    },
    Package {
        id: "standard",
        price: "18€",
        per_person: true,
        highlighted: false,
    },
    Package {
        id: "premium",
        price: "25€",
        per_person: true,
        highlighted: true,
    },
    Package {
        id: "group",
        price: "150€",
        per_person: false,
        highlighted: false,
    },
    Package {
        id: "vip",
        price: "300€",
        per_person: false,
        highlighted: false,
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    let locale_ctx = use_locale_context();
    let notices = use_notice_manager();

    let on_reserve = Callback::new(move |_| {
        notices.info(locale_ctx.t("wip.title"), locale_ctx.t("wip.desc"));
    });

    view! {
        <div class="pt-24 pb-16 max-w-6xl mx-auto px-4">
            <h1 class="text-4xl font-bold text-white text-center mb-2">
                {move || locale_ctx.t("precios.title")}
            </h1>
            <p class="text-gray-400 text-center mb-12">
                {move || locale_ctx.t("precios.subtitle")}
            </p>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {PACKAGES.map(|package| {
                    let name_key = format!("precios.packages.{}.name", package.id);
                    let features_key = format!("precios.packages.{}.features", package.id);
                    let card_class = if package.highlighted {
                        "card border-orange-500 relative"
                    } else {
                        "card relative"
                    };

                    view! {
                        <div class=card_class>
                            {package.highlighted.then(|| view! {
                                <span class="absolute -top-3 left-1/2 -translate-x-1/2 bg-orange-500 text-black text-xs font-semibold px-3 py-1 rounded-full">
                                    {move || locale_ctx.t("precios.common.premiumLabel")}
                                </span>
                            })}
                            <h2 class="text-lg font-semibold text-white mb-1">
                                {
                                    let name_key = name_key.clone();
                                    move || locale_ctx.t(&name_key)
                                }
                            </h2>
                            <div class="mb-4">
                                <span class="text-3xl font-bold text-orange-400">{package.price}</span>
                                {package.per_person.then(|| view! {
                                    <span class="text-sm text-gray-400 ml-1">
                                        {move || locale_ctx.t("precios.common.perPerson")}
                                    </span>
                                })}
                            </div>
                            <ul class="space-y-2 mb-6">
                                {
                                    let features_key = features_key.clone();
                                    move || locale_ctx.t_list(&features_key).into_iter().map(|feature| view! {
                                        <li class="flex items-start gap-2 text-sm text-gray-300">
                                            <Icon name=icons::CHECK class="w-4 h-4 text-orange-400 mt-0.5"/>
                                            {feature}
                                        </li>
                                    }).collect_view()
                                }
                            </ul>
                            <Button
                                variant=if package.highlighted { ButtonVariant::Primary } else { ButtonVariant::Secondary }
                                on_click=on_reserve
                                class="w-full".to_owned()
                            >
                                {move || locale_ctx.t("precios.common.btnReserve")}
                            </Button>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="card mt-12">
                <h2 class="text-lg font-semibold text-white mb-4">
                    {move || locale_ctx.t("precios.infoTitle")}
                </h2>
                <ul class="space-y-2">
                    {move || locale_ctx.t_list("precios.infoList").into_iter().map(|line| view! {
                        <li class="flex items-start gap-2 text-sm text-gray-300">
                            <Icon name=icons::ALERT_CIRCLE class="w-4 h-4 text-orange-400 mt-0.5"/>
                            {line}
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
