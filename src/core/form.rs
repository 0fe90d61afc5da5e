//! Form state for the contact and booking pages
//!
//! Each page owns one form instance: created empty on mount, mutated
//! field-by-field while the visitor types, reset to empty after a
//! successful submission. Validation is deliberately coarse: a form is
//! valid when every required field is non-empty, nothing more.

use serde::{Deserialize, Serialize};

/// Hour slots the arena can be booked for, on the hour.
pub const TIME_SLOTS: [&str; 7] = [
    "16:00", "17:00", "18:00", "19:00", "20:00", "21:00", "22:00",
];

/// Validation failure for a form submission
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// At least one required field is empty. Which one is intentionally
    /// not reported; the toast asks the visitor to complete the form.
    #[error("missing required fields")]
    MissingRequiredFields,
}

/// Common surface of the site's forms: which values must be filled in
/// for a submission to proceed, and whose name goes into the success
/// message.
pub trait FormModel: Default + Clone {
    /// Values of the required fields, in display order.
    fn required_values(&self) -> Vec<&str>;

    /// Name used to personalise the success notification.
    fn submitter_name(&self) -> &str;
}

/// Check that every required field of the form is non-empty.
///
/// Pure and synchronous; calling it twice on the same state yields the
/// same result.
pub fn validate<F: FormModel>(form: &F) -> Result<(), ValidationError> {
    if form.required_values().iter().any(|value| value.is_empty()) {
        Err(ValidationError::MissingRequiredFields)
    } else {
        Ok(())
    }
}

/// Subject options of the contact form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Subject {
    #[default]
    General,
    Booking,
    Birthday,
    Corporate,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::General,
        Subject::Booking,
        Subject::Birthday,
        Subject::Corporate,
        Subject::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::General => "general",
            Subject::Booking => "booking",
            Subject::Birthday => "birthday",
            Subject::Corporate => "corporate",
            Subject::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "booking" => Subject::Booking,
            "birthday" => Subject::Birthday,
            "corporate" => Subject::Corporate,
            "other" => Subject::Other,
            _ => Subject::General,
        }
    }

    /// Catalog key of the localised option label.
    pub fn label_key(&self) -> String {
        format!("contacto.subjects.{}", self.as_str())
    }
}

/// State of the contact form (route `/contacto`)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: Subject,
    pub message: String,
}

impl FormModel for ContactForm {
    fn required_values(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.message]
    }

    fn submitter_name(&self) -> &str {
        &self.name
    }
}

/// State of the booking form (route `/reserva`)
///
/// Date, time and participants stay plain strings: the inputs constrain
/// them (date picker, slot select, number min/max) and nothing past the
/// emptiness check is enforced here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub participants: String,
    pub notes: String,
}

impl FormModel for BookingForm {
    fn required_values(&self) -> Vec<&str> {
        vec![
            &self.name,
            &self.email,
            &self.phone,
            &self.date,
            &self.time,
            &self.participants,
        ]
    }

    fn submitter_name(&self) -> &str {
        &self.name
    }
}
