//! Contact page (route `/contacto`)
//!
//! Contact form next to the venue's contact details. Submission goes
//! through the shared flow with an immediate transport: feedback toasts
//! appear without a processing state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::form::{ContactForm, Subject};
use crate::core::submission::{SimulatedTransport, SubmitError, Submission, Transport};
use crate::ui::common::button::Button;
use crate::ui::common::form::{FormField, SelectField, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::locale::use_locale_context;
use crate::ui::notifications::use_notice_manager;

#[component]
pub fn ContactPage() -> impl IntoView {
    let locale_ctx = use_locale_context();
    let notices = use_notice_manager();
    let submission = RwSignal::new(Submission::<ContactForm>::new());

    let on_submit = Callback::new(move |_| {
        let started = submission
            .try_update(|s| s.begin())
            .unwrap_or(Err(SubmitError::InFlight));

        match started {
            Err(SubmitError::InFlight) => return,
            Err(SubmitError::Invalid(_)) => {
                notices.error(
                    locale_ctx.t("reserva.errorTitle"),
                    locale_ctx.t("reserva.errorDesc"),
                );
                return;
            }
            Ok(()) => {}
        }

        spawn_local(async move {
            let form = submission.with_untracked(|s| s.form.clone());
            let submitter = form.name.clone();

            let result = SimulatedTransport::immediate().send(&form).await;
            submission.update(|s| s.finish(&result));

            match result {
                Ok(()) => notices.success(
                    locale_ctx.t("reserva.successTitle"),
                    locale_ctx.t_with("reserva.successDesc", &[("name", &submitter)]),
                ),
                Err(_) => notices.error(
                    locale_ctx.t("reserva.transportErrorTitle"),
                    locale_ctx.t("reserva.transportErrorDesc"),
                ),
            }
        });
    });

    view! {
        <div class="pt-24 pb-16 max-w-6xl mx-auto px-4">
            <h1 class="text-4xl font-bold text-white text-center mb-2">
                {move || locale_ctx.t("contacto.title")}
            </h1>
            <p class="text-gray-400 text-center mb-12">
                {move || locale_ctx.t("contacto.subtitle")}
            </p>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-10">
                // Form column
                <div class="card">
                    <h2 class="text-xl font-semibold text-white mb-6">
                        {move || locale_ctx.t("contacto.formTitle")}
                    </h2>

                    <div class="space-y-4">
                        <FormField
                            label=Signal::derive(move || locale_ctx.t("contacto.name"))
                            icon=icons::USER
                            value=Signal::derive(move || submission.with(|s| s.form.name.clone()))
                            on_input=Callback::new(move |value| {
                                submission.update(|s| s.edit(|form| form.name = value));
                            })
                        />
                        <FormField
                            label=Signal::derive(move || locale_ctx.t("contacto.email"))
                            input_type="email"
                            icon=icons::MAIL
                            value=Signal::derive(move || submission.with(|s| s.form.email.clone()))
                            on_input=Callback::new(move |value| {
                                submission.update(|s| s.edit(|form| form.email = value));
                            })
                        />
                        <FormField
                            label=Signal::derive(move || locale_ctx.t("contacto.phone"))
                            input_type="tel"
                            icon=icons::PHONE
                            value=Signal::derive(move || submission.with(|s| s.form.phone.clone()))
                            on_input=Callback::new(move |value| {
                                submission.update(|s| s.edit(|form| form.phone = value));
                            })
                        />
                        {move || {
                            let options = Subject::ALL
                                .iter()
                                .map(|subject| {
                                    (subject.as_str().to_owned(), locale_ctx.t(&subject.label_key()))
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <SelectField
                                    label=Signal::derive(move || locale_ctx.t("contacto.subject"))
                                    options=options
                                    value=Signal::derive(move || {
                                        submission.with(|s| s.form.subject.as_str().to_owned())
                                    })
                                    on_change=Callback::new(move |value: String| {
                                        submission.update(|s| {
                                            s.edit(|form| form.subject = Subject::from_str(&value));
                                        });
                                    })
                                />
                            }
                        }}
                        <TextAreaField
                            label=Signal::derive(move || locale_ctx.t("contacto.message"))
                            rows=5
                            value=Signal::derive(move || submission.with(|s| s.form.message.clone()))
                            on_input=Callback::new(move |value| {
                                submission.update(|s| s.edit(|form| form.message = value));
                            })
                        />

                        <Button
                            on_click=on_submit
                            icon=icons::SEND
                            class="w-full".to_owned()
                        >
                            {move || locale_ctx.t("contacto.btnSend")}
                        </Button>
                    </div>
                </div>

                // Info column
                <div class="space-y-6">
                    <div class="card">
                        <h2 class="text-xl font-semibold text-white mb-4">
                            {move || locale_ctx.t("contacto.infoTitle")}
                        </h2>
                        <ul class="space-y-4 text-gray-300">
                            <li class="flex items-start gap-3">
                                <Icon name=icons::MAP_PIN class="w-5 h-5 text-orange-400 mt-0.5"/>
                                <div>
                                    <div class="text-white font-medium">
                                        {move || locale_ctx.t("contacto.addressTitle")}
                                    </div>
                                    <p class="whitespace-pre-line text-sm">
                                        {move || locale_ctx.t("contacto.address")}
                                    </p>
                                </div>
                            </li>
                            <li class="flex items-center gap-3">
                                <Icon name=icons::PHONE class="w-5 h-5 text-orange-400"/>
                                "+34 952 000 000"
                            </li>
                            <li class="flex items-center gap-3">
                                <Icon name=icons::MAIL class="w-5 h-5 text-orange-400"/>
                                "info@tigerlasertag.com"
                            </li>
                        </ul>
                    </div>

                    <div class="card">
                        <h2 class="text-xl font-semibold text-white mb-4">
                            {move || locale_ctx.t("contacto.mapTitle")}
                        </h2>
                        <div class="h-48 rounded-lg bg-gray-800 flex items-center justify-center text-gray-500 text-sm">
                            {move || locale_ctx.t("contacto.mapPlaceholder")}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
