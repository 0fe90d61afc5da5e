//! Booking page (route `/reserva`)
//!
//! The booking form runs the same submission flow as the contact page
//! but through the delayed transport, so the confirm button shows a
//! processing state while the send is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::form::{BookingForm, TIME_SLOTS};
use crate::core::submission::{SimulatedTransport, SubmitError, Submission, Transport};
use crate::ui::common::button::Button;
use crate::ui::common::form::{FormField, SelectField, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::locale::use_locale_context;
use crate::ui::notifications::use_notice_manager;

#[component]
pub fn BookingPage() -> impl IntoView {
    let locale_ctx = use_locale_context();
    let notices = use_notice_manager();
    let submission = RwSignal::new(Submission::<BookingForm>::new());

    let in_progress = Signal::derive(move || submission.with(|s| s.in_progress));

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

            let transport =
                SimulatedTransport::with_delay(SimulatedTransport::BOOKING_DELAY_MS);
            let result = transport.send(&form).await;
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
        <div class="pt-24 pb-16 max-w-3xl mx-auto px-4">
            <h1 class="text-4xl font-bold text-white text-center mb-2">
                {move || locale_ctx.t("reserva.title")}
            </h1>
            <p class="text-gray-400 text-center mb-12">
                {move || locale_ctx.t("reserva.subtitle")}
            </p>

            <div class="card space-y-8">
                <section>
                    <h2 class="text-lg font-semibold text-white mb-4">
                        {move || locale_ctx.t("reserva.contactData")}
                    </h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <FormField
                            label=Signal::derive(move || locale_ctx.t("reserva.name"))
                            icon=icons::USER
                            value=Signal::derive(move || submission.with(|s| s.form.name.clone()))
                            on_input=Callback::new(move |value| {
                                submission.update(|s| s.edit(|form| form.name = value));
                            })
                        />
                        <FormField
                            label=Signal::derive(move || locale_ctx.t("reserva.email"))
                            input_type="email"
                            icon=icons::MAIL
                            value=Signal::derive(move || submission.with(|s| s.form.email.clone()))
                            on_input=Callback::new(move |value| {
                                submission.update(|s| s.edit(|form| form.email = value));
                            })
                        />
                        <FormField
                            label=Signal::derive(move || locale_ctx.t("reserva.phone"))
                            input_type="tel"
                            icon=icons::PHONE
                            value=Signal::derive(move || submission.with(|s| s.form.phone.clone()))
                            on_input=Callback::new(move |value| {
                                submission.update(|s| s.edit(|form| form.phone = value));
                            })
                        />
                    </div>
                </section>

                <section>
                    <h2 class="text-lg font-semibold text-white mb-4">
                        {move || locale_ctx.t("reserva.details")}
                    </h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <FormField
                            label=Signal::derive(move || locale_ctx.t("reserva.date"))
                            input_type="date"
                            icon=icons::CALENDAR
                            value=Signal::derive(move || submission.with(|s| s.form.date.clone()))
                            on_input=Callback::new(move |value| {
                                submission.update(|s| s.edit(|form| form.date = value));
                            })
                        />
                        {move || {
                            let mut options = vec![(String::new(), "--:--".to_owned())];
                            options.extend(
                                TIME_SLOTS
                                    .iter()
                                    .map(|slot| ((*slot).to_owned(), (*slot).to_owned())),
                            );
                            view! {
                                <SelectField
                                    label=Signal::derive(move || locale_ctx.t("reserva.time"))
                                    icon=icons::CLOCK
                                    options=options
                                    value=Signal::derive(move || {
                                        submission.with(|s| s.form.time.clone())
                                    })
                                    on_change=Callback::new(move |value| {
                                        submission.update(|s| s.edit(|form| form.time = value));
                                    })
                                />
                            }
                        }}
                        <FormField
                            label=Signal::derive(move || locale_ctx.t("reserva.participants"))
                            input_type="number"
                            icon=icons::USERS
                            min="1"
                            max="30"
                            value=Signal::derive(move || {
                                submission.with(|s| s.form.participants.clone())
                            })
                            on_input=Callback::new(move |value| {
                                submission.update(|s| s.edit(|form| form.participants = value));
                            })
                        />
                    </div>
                    <div class="mt-4">
                        <TextAreaField
                            label=Signal::derive(move || locale_ctx.t("reserva.notes"))
                            placeholder=Signal::derive(move || locale_ctx.t("reserva.notesPlaceholder"))
                            value=Signal::derive(move || submission.with(|s| s.form.notes.clone()))
                            on_input=Callback::new(move |value| {
                                submission.update(|s| s.edit(|form| form.notes = value));
                            })
                        />
                    </div>
                </section>

                {move || {
                    let loading = in_progress.get();
                    view! {
                        <Button
                            on_click=on_submit
                            loading=loading
                            icon=icons::CHECK_CIRCLE
                            class="w-full".to_owned()
                        >
                            {if loading {
                                locale_ctx.t("reserva.processing")
                            } else {
                                locale_ctx.t("reserva.btnConfirm")
                            }}
                        </Button>
                    }
                }}

                <p class="flex items-center gap-2 text-xs text-gray-500">
                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                    {move || locale_ctx.t("reserva.warning")}
                </p>
            </div>
        </div>
    }
}
