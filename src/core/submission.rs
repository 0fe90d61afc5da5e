//! Submission state machine shared by the contact and booking forms
//!
//! One [`Submission`] per form instance. A submit attempt runs
//! validate -> send -> notify -> reset: invalid forms are rejected before
//! the in-progress flag is ever set, a transport failure keeps the
//! visitor's input intact, and only a confirmed send resets the form.
//! The flag also guards against a second submit starting while one is
//! already running.

use super::form::{FormModel, ValidationError, validate};

/// Failure of the sending step.
///
/// The site currently ships a simulated transport that never produces
/// these, but the seam is real: a backend integration plugs in behind
/// [`Transport`] and reports through this type.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("the booking service did not respond in time")]
    Timeout,
    #[error("the booking service is unavailable")]
    Unavailable,
}

/// Why a submit attempt did not start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Another submission on this form is still running.
    #[error("a submission is already in progress")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Terminal (or non-) result of one submit attempt. The caller shows
/// exactly one notification for `Sent`, `Invalid` and `Failed`; an
/// `InFlight` attempt never started and stays silent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was sent; carries the submitter's name for the success
    /// message, captured before the form was reset.
    Sent { submitter: String },
    Invalid(ValidationError),
    Failed(TransportError),
    InFlight,
}

/// Delivery seam for a validated form.
pub trait Transport<F: FormModel> {
    fn send(&self, form: &F) -> impl Future<Output = Result<(), TransportError>>;
}

/// Stand-in transport: waits its configured delay, then succeeds.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedTransport {
    delay_ms: u32,
}

impl SimulatedTransport {
    /// Delay the booking form shows its processing state for.
    pub const BOOKING_DELAY_MS: u32 = 1500;

    pub const fn with_delay(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    /// Completes on the next tick, as the contact form does.
    pub const fn immediate() -> Self {
        Self { delay_ms: 0 }
    }
}

impl<F: FormModel> Transport<F> for SimulatedTransport {
    async fn send(&self, _form: &F) -> Result<(), TransportError> {
        if self.delay_ms > 0 {
            sleep_ms(self.delay_ms).await;
        }
        Ok(())
    }
}

async fn sleep_ms(_ms: u32) {
    #[cfg(feature = "ssr")]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(_ms))).await;

    #[cfg(not(feature = "ssr"))]
    gloo_timers::future::TimeoutFuture::new(_ms).await;
}

/// Current field values plus the in-progress flag of one form instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission<F: FormModel> {
    pub form: F,
    pub in_progress: bool,
}

impl<F: FormModel> Submission<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace-in-place edit of a field while the visitor types.
    pub fn edit(&mut self, apply: impl FnOnce(&mut F)) {
        apply(&mut self.form);
    }

    /// Start a submit attempt: refuse re-entry, validate, and only then
    /// raise the in-progress flag. An invalid form leaves both the flag
    /// and the field values untouched.
    pub fn begin(&mut self) -> Result<(), SubmitError> {
        if self.in_progress {
            return Err(SubmitError::InFlight);
        }
        validate(&self.form)?;
        self.in_progress = true;
        Ok(())
    }

    /// Settle the attempt started by [`begin`](Self::begin). Success
    /// resets every field, optional ones included; a transport failure
    /// keeps the visitor's input so it can be resubmitted. Either way
    /// the in-progress flag clears.
    pub fn finish(&mut self, result: &Result<(), TransportError>) {
        if result.is_ok() {
            self.form = F::default();
        }
        self.in_progress = false;
    }

    /// Full attempt against a transport: begin, send, finish.
    pub async fn submit<T: Transport<F>>(&mut self, transport: &T) -> SubmitOutcome {
        match self.begin() {
            Err(SubmitError::InFlight) => return SubmitOutcome::InFlight,
            Err(SubmitError::Invalid(reason)) => return SubmitOutcome::Invalid(reason),
            Ok(()) => {}
        }

        let submitter = self.form.submitter_name().to_owned();
        let result = transport.send(&self.form).await;
        self.finish(&result);

        match result {
            Ok(()) => SubmitOutcome::Sent { submitter },
            Err(error) => SubmitOutcome::Failed(error),
        }
    }
}
