//! Contact form submission.
//!
//! [`EnquiryForm`] owns the form contents and a small state machine:
//!
//! ```text
//! Idle -> Submitting -> Succeeded -> Idle     (form cleared, success notice)
//! Idle -> Submitting -> Failed    -> Idle     (form kept, error notice)
//! ```
//!
//! State changes are broadcast through a [`watch`] channel, so a renderer
//! can follow them without polling. Only one submission may be in flight.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::sync::watch;

use mortar_client::EnquirySink;
use mortar_core::types::{EnquiryField, EnquiryRecord};
use mortar_core::{Error, Result};

/// Shown after the service accepted an enquiry.
pub const SUCCESS_NOTICE: &str = "Message sent successfully!";

/// Shown when the service could not be reached or failed on its side.
pub const FAILURE_NOTICE: &str = "Failed to send message. Please try again.";

/// Shown when the service refused the enquiry itself (a 4xx answer).
pub const REJECTED_NOTICE: &str = "Failed to send message. Please check your details.";

// ============================================================================
// SubmissionState
// ============================================================================

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    /// Ready for input.
    Idle,
    /// A request is in flight.
    Submitting,
    /// The last request was accepted.
    Succeeded,
    /// The last request failed.
    Failed,
}

impl SubmissionState {
    /// Returns `true` while a request is in flight.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Submitting => write!(f, "submitting"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

// ============================================================================
// Notice
// ============================================================================

/// Kind of banner shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// Green banner.
    Success,
    /// Red banner.
    Error,
}

/// Banner text shown under the form until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Banner kind.
    pub kind: NoticeKind,
    /// Banner text.
    pub message: String,
}

impl Notice {
    fn success() -> Self {
        Self {
            kind: NoticeKind::Success,
            message: SUCCESS_NOTICE.to_string(),
        }
    }

    /// Error banner for a failed delivery. Only failures that may clear up
    /// on their own invite the visitor to try again as-is.
    fn failure(error: &Error) -> Self {
        let message = if error.is_retryable() {
            FAILURE_NOTICE
        } else {
            REJECTED_NOTICE
        };
        Self {
            kind: NoticeKind::Error,
            message: message.to_string(),
        }
    }
}

// ============================================================================
// EnquiryForm
// ============================================================================

/// The contact form and its submission pipeline.
pub struct EnquiryForm<S> {
    sink: S,
    form: Mutex<EnquiryRecord>,
    notice: Mutex<Option<Notice>>,
    trail: Mutex<Vec<SubmissionState>>,
    tx: watch::Sender<SubmissionState>,
}

impl<S: EnquirySink> EnquiryForm<S> {
    /// Empty form delivering to `sink`. Initial state is
    /// [`SubmissionState::Idle`].
    pub fn new(sink: S) -> Self {
        let (tx, _rx) = watch::channel(SubmissionState::Idle);
        Self {
            sink,
            form: Mutex::new(EnquiryRecord::default()),
            notice: Mutex::new(None),
            trail: Mutex::new(Vec::new()),
            tx,
        }
    }

    /// Current state.
    pub fn state(&self) -> SubmissionState {
        *self.tx.borrow()
    }

    /// Subscribe to state changes.
    ///
    /// A [`watch`] receiver only holds the latest value. `Succeeded` is
    /// followed by `Idle` in the same step, so a subscriber sees the success
    /// as `Submitting -> Idle` with a success [`Notice`] in place. Use
    /// [`transitions`](Self::transitions) for the full sequence.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.tx.subscribe()
    }

    /// Every state entered since creation, oldest first.
    pub fn transitions(&self) -> Vec<SubmissionState> {
        lock(&self.trail).clone()
    }

    /// Snapshot of the form contents.
    pub fn form(&self) -> EnquiryRecord {
        lock(&self.form).clone()
    }

    /// Update one field.
    pub fn set_field(&self, field: EnquiryField, value: impl Into<String>) {
        lock(&self.form).set(field, value);
    }

    /// Banner currently shown, if any.
    pub fn notice(&self) -> Option<Notice> {
        lock(&self.notice).clone()
    }

    /// Close the banner. A failed form goes back to idle.
    pub fn dismiss(&self) {
        lock(&self.notice).take();
        let reset = self.tx.send_if_modified(|state| {
            if *state == SubmissionState::Failed {
                *state = SubmissionState::Idle;
                true
            } else {
                false
            }
        });
        if reset {
            self.record(SubmissionState::Failed, SubmissionState::Idle);
        }
    }

    /// Submit the current form contents.
    ///
    /// Blank fields are rejected before any request is made, as is a second
    /// submit while one is in flight. On success the form is cleared, unless
    /// it was edited while the request was in flight: those edits were never
    /// sent and are kept. On failure the form is kept so the visitor can
    /// resubmit right away.
    pub async fn submit(&self) -> Result<()> {
        if self.state().is_in_flight() {
            return Err(Error::SubmissionInFlight);
        }

        let enquiry = self.form();
        enquiry.validate()?;

        let mut previous = SubmissionState::Idle;
        let claimed = self.tx.send_if_modified(|state| {
            if state.is_in_flight() {
                return false;
            }
            previous = *state;
            *state = SubmissionState::Submitting;
            true
        });
        if !claimed {
            return Err(Error::SubmissionInFlight);
        }
        self.record(previous, SubmissionState::Submitting);
        lock(&self.notice).take();

        match self.sink.submit_enquiry(&enquiry).await {
            Ok(()) => {
                {
                    let mut form = lock(&self.form);
                    if *form == enquiry {
                        *form = EnquiryRecord::default();
                    }
                }
                *lock(&self.notice) = Some(Notice::success());
                self.transition(SubmissionState::Succeeded);
                self.transition(SubmissionState::Idle);
                Ok(())
            }
            Err(e) => {
                if e.is_user_facing() {
                    tracing::warn!(error = %e, "Enquiry submission failed");
                } else {
                    tracing::error!(error = %e, "Enquiry sink failed unexpectedly");
                }
                *lock(&self.notice) = Some(Notice::failure(&e));
                self.transition(SubmissionState::Failed);
                Err(e)
            }
        }
    }

    fn transition(&self, next: SubmissionState) {
        let previous = self.tx.send_replace(next);
        self.record(previous, next);
    }

    fn record(&self, from: SubmissionState, to: SubmissionState) {
        tracing::info!("Enquiry {from} → {to}");
        lock(&self.trail).push(to);
    }
}

impl<S> fmt::Debug for EnquiryForm<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnquiryForm")
            .field("state", &*self.tx.borrow())
            .field("notice", &*lock(&self.notice))
            .finish()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_state_display() {
        assert_eq!(SubmissionState::Idle.to_string(), "idle");
        assert_eq!(SubmissionState::Submitting.to_string(), "submitting");
        assert_eq!(SubmissionState::Succeeded.to_string(), "succeeded");
        assert_eq!(SubmissionState::Failed.to_string(), "failed");
    }

    #[test]
    fn test_only_submitting_is_in_flight() {
        assert!(SubmissionState::Submitting.is_in_flight());
        assert!(!SubmissionState::Idle.is_in_flight());
        assert!(!SubmissionState::Failed.is_in_flight());
    }

    #[test]
    fn test_notice_texts() {
        assert_eq!(Notice::success().message, "Message sent successfully!");
        let notice = Notice::failure(&Error::unreachable("/enquiry", "connection reset"));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, FAILURE_NOTICE);
    }

    #[test]
    fn test_failure_notice_follows_error_class() {
        for status in [500, 502, 503, 408, 429] {
            let notice = Notice::failure(&Error::unreachable_status("/enquiry", status));
            assert_eq!(notice.message, FAILURE_NOTICE, "status {status}");
        }
        for status in [400, 404, 422] {
            let notice = Notice::failure(&Error::unreachable_status("/enquiry", status));
            assert_eq!(notice.message, REJECTED_NOTICE, "status {status}");
        }
        let notice = Notice::failure(&Error::malformed("/enquiry", "bad body"));
        assert_eq!(notice.message, REJECTED_NOTICE);
    }
}
