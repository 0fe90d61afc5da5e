#[cfg(test)]
mod tests {
    use crate::core::form::{
        BookingForm, ContactForm, FormModel, Subject, TIME_SLOTS, ValidationError, validate,
    };
    use crate::core::i18n::{Locale, lookup, lookup_with, list, qa_list};
    use crate::core::notice::{Notice, NoticeKind};
    use crate::core::submission::{
        SimulatedTransport, SubmitError, SubmitOutcome, Submission, Transport, TransportError,
    };

    fn filled_contact() -> ContactForm {
        ContactForm {
            name: "Laura".into(),
            email: "laura@example.com".into(),
            phone: String::new(),
            subject: Subject::General,
            message: "Hola, ¿tenéis hueco el sábado?".into(),
        }
    }

    fn filled_booking() -> BookingForm {
        BookingForm {
            name: "Marco".into(),
            email: "marco@example.com".into(),
            phone: "+34 600 000 000".into(),
            date: "2026-09-05".into(),
            time: "18:00".into(),
            participants: "8".into(),
            notes: String::new(),
        }
    }

    /// Transport that always fails, for the failure paths.
    struct BrokenTransport;

    impl<F: FormModel> Transport<F> for BrokenTransport {
        async fn send(&self, _form: &F) -> Result<(), TransportError> {
            Err(TransportError::Unavailable)
        }
    }

    // ===== Validation =====

    #[test]
    fn test_contact_form_valid_when_required_filled() {
        assert!(validate(&filled_contact()).is_ok());
    }

    #[test]
    fn test_contact_form_phone_is_optional() {
        let mut form = filled_contact();
        form.phone = String::new();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_contact_form_rejects_empty_required_fields() {
        for clear in [
            (|f: &mut ContactForm| f.name.clear()) as fn(&mut ContactForm),
            |f| f.email.clear(),
            |f| f.message.clear(),
        ] {
            let mut form = filled_contact();
            clear(&mut form);
            assert_eq!(
                validate(&form),
                Err(ValidationError::MissingRequiredFields)
            );
        }
    }

    #[test]
    fn test_booking_form_valid_when_required_filled() {
        assert!(validate(&filled_booking()).is_ok());
    }

    #[test]
    fn test_booking_form_notes_are_optional() {
        let mut form = filled_booking();
        form.notes = String::new();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_booking_form_rejects_each_empty_required_field() {
        for clear in [
            (|f: &mut BookingForm| f.name.clear()) as fn(&mut BookingForm),
            |f| f.email.clear(),
            |f| f.phone.clear(),
            |f| f.date.clear(),
            |f| f.time.clear(),
            |f| f.participants.clear(),
        ] {
            let mut form = filled_booking();
            clear(&mut form);
            assert_eq!(
                validate(&form),
                Err(ValidationError::MissingRequiredFields)
            );
        }
    }

    #[test]
    fn test_empty_forms_are_invalid() {
        assert!(validate(&ContactForm::default()).is_err());
        assert!(validate(&BookingForm::default()).is_err());
    }

    #[test]
    fn test_validate_is_repeatable() {
        let form = filled_booking();
        assert_eq!(validate(&form), validate(&form));
    }

    // ===== Subjects and time slots =====

    #[test]
    fn test_subject_round_trip() {
        for subject in Subject::ALL {
            assert_eq!(Subject::from_str(subject.as_str()), subject);
        }
    }

    #[test]
    fn test_subject_defaults_to_general() {
        assert_eq!(Subject::default(), Subject::General);
        assert_eq!(Subject::from_str("nonsense"), Subject::General);
    }

    #[test]
    fn test_subject_label_keys_resolve() {
        for subject in Subject::ALL {
            let label = lookup(Locale::Es, &subject.label_key());
            assert_ne!(label, subject.label_key(), "missing label for {subject:?}");
        }
    }

    #[test]
    fn test_time_slots_cover_opening_hours() {
        assert_eq!(TIME_SLOTS.first(), Some(&"16:00"));
        assert_eq!(TIME_SLOTS.last(), Some(&"22:00"));
        assert_eq!(TIME_SLOTS.len(), 7);
    }

    // ===== Submission state machine =====

    #[test]
    fn test_begin_rejects_invalid_form_without_raising_flag() {
        let mut submission = Submission::<ContactForm>::new();
        let result = submission.begin();

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert!(!submission.in_progress);
    }

    #[test]
    fn test_begin_raises_flag_on_valid_form() {
        let mut submission = Submission::new();
        submission.form = filled_booking();

        assert!(submission.begin().is_ok());
        assert!(submission.in_progress);
    }

    #[test]
    fn test_begin_refuses_reentry_while_in_progress() {
        let mut submission = Submission::new();
        submission.form = filled_booking();
        submission.begin().unwrap();

        assert_eq!(submission.begin(), Err(SubmitError::InFlight));
        // The running attempt is untouched
        assert!(submission.in_progress);
        assert_eq!(submission.form, filled_booking());
    }

    #[test]
    fn test_finish_success_resets_all_fields() {
        let mut submission = Submission::new();
        submission.form = filled_booking();
        submission.form.notes = "cumpleaños sorpresa".into();
        submission.begin().unwrap();

        submission.finish(&Ok(()));

        assert!(!submission.in_progress);
        assert_eq!(submission.form, BookingForm::default());
    }

    #[test]
    fn test_finish_failure_keeps_visitor_input() {
        let mut submission = Submission::new();
        submission.form = filled_booking();
        submission.begin().unwrap();

        submission.finish(&Err(TransportError::Timeout));

        assert!(!submission.in_progress);
        assert_eq!(submission.form, filled_booking());
    }

    #[test]
    fn test_edit_mutates_fields_in_place() {
        let mut submission = Submission::<ContactForm>::new();
        submission.edit(|form| form.name = "Laura".into());
        submission.edit(|form| form.subject = Subject::Birthday);

        assert_eq!(submission.form.name, "Laura");
        assert_eq!(submission.form.subject, Subject::Birthday);
    }

    #[tokio::test]
    async fn test_submit_success_reports_submitter_and_resets() {
        let mut submission = Submission::new();
        submission.form = filled_contact();

        let outcome = submission.submit(&SimulatedTransport::immediate()).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Sent {
                submitter: "Laura".into()
            }
        );
        assert_eq!(submission.form, ContactForm::default());
        assert!(!submission.in_progress);
    }

    #[tokio::test]
    async fn test_submit_invalid_keeps_partial_input() {
        let mut submission = Submission::<BookingForm>::new();
        submission.edit(|form| form.name = "Marco".into());

        let outcome = submission.submit(&SimulatedTransport::immediate()).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Invalid(ValidationError::MissingRequiredFields)
        );
        assert_eq!(submission.form.name, "Marco");
        assert!(!submission.in_progress);
    }

    #[tokio::test]
    async fn test_submit_transport_failure_keeps_input_for_retry() {
        let mut submission = Submission::new();
        submission.form = filled_booking();

        let outcome = submission.submit(&BrokenTransport).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(TransportError::Unavailable)
        );
        assert_eq!(submission.form, filled_booking());
        assert!(!submission.in_progress);

        // The same attempt can go through once the transport recovers
        let outcome = submission.submit(&SimulatedTransport::immediate()).await;
        assert!(matches!(outcome, SubmitOutcome::Sent { .. }));
    }

    #[tokio::test]
    async fn test_submit_with_configured_delay() {
        let mut submission = Submission::new();
        submission.form = filled_booking();

        let outcome = submission
            .submit(&SimulatedTransport::with_delay(10))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Sent { .. }));
    }

    // ===== Translations =====

    #[test]
    fn test_lookup_returns_localised_text() {
        assert_eq!(lookup(Locale::Es, "navigation.faq"), "FAQ");
        assert_eq!(lookup(Locale::En, "navigation.precios"), "Prices");
        assert_eq!(lookup(Locale::Fr, "navigation.precios"), "Tarifs");
        assert_eq!(lookup(Locale::De, "navigation.precios"), "Preise");
    }

    #[test]
    fn test_lookup_unknown_key_returns_key() {
        assert_eq!(lookup(Locale::Es, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_lookup_with_interpolates_name() {
        let text = lookup_with(Locale::En, "reserva.successDesc", &[("name", "Marco")]);
        assert!(text.contains("Marco"));
        assert!(!text.contains("{{name}}"));
    }

    #[test]
    fn test_list_resolves_arrays() {
        let features = list(Locale::Es, "precios.packages.basic.features");
        assert!(!features.is_empty());

        let info = list(Locale::De, "precios.infoList");
        assert_eq!(info.len(), 4);
    }

    #[test]
    fn test_list_unknown_key_is_empty() {
        assert!(list(Locale::Es, "no.such.list").is_empty());
    }

    #[test]
    fn test_qa_list_parses_faq_entries() {
        for locale in Locale::ALL {
            let questions = qa_list(locale, "faq.questions");
            assert_eq!(questions.len(), 8, "faq size differs for {locale:?}");
            for entry in &questions {
                assert!(!entry.q.is_empty());
                assert!(!entry.a.is_empty());
            }
        }
    }

    #[test]
    fn test_catalogs_share_the_booking_keys() {
        for locale in Locale::ALL {
            for key in [
                "reserva.errorTitle",
                "reserva.errorDesc",
                "reserva.successTitle",
                "reserva.successDesc",
                "reserva.processing",
            ] {
                assert_ne!(lookup(locale, key), key, "{locale:?} misses {key}");
            }
        }
    }

    #[test]
    fn test_locale_round_trip_and_fallback() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_str(locale.as_str()), locale);
        }
        assert_eq!(Locale::from_str("pt"), Locale::Es);
        assert_eq!(Locale::default(), Locale::Es);
    }

    // ===== Notices =====

    #[test]
    fn test_error_notices_stay_until_dismissed() {
        let notice = Notice::error("Error", "Por favor, completa todos los campos.");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.auto_dismiss_ms, None);
    }

    #[test]
    fn test_transient_notices_auto_dismiss() {
        assert!(Notice::success("ok", "done").auto_dismiss_ms.is_some());
        assert!(Notice::info("hi", "there").auto_dismiss_ms.is_some());
        assert!(Notice::warning("eh", "careful").auto_dismiss_ms.is_some());
    }
}
