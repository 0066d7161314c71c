//! Prediction form submission.
//!
//! `SubmissionHandler` owns one submit cycle: suppress the browser's default
//! navigation, mark the form busy, send the field values to the prediction
//! service, render the outcome, and restore the submit control. It never
//! touches the document directly; the page hands it a [`PredictionClient`]
//! and a [`SubmissionView`] at construction time.

pub mod client;
pub mod view;

use shared_types::{FormInput, PredictionResponse};
use std::future::Future;
use std::rc::Rc;

pub use client::{ClientError, HttpPredictionClient, PredictReply};
pub use view::{use_prediction_view, FormSubmission, PredictionViewModel};

/// Submit control label while a request is in flight.
pub const BUSY_LABEL: &str = "ANALYZING...";

/// Notice shown when no usable response was obtained.
pub const GENERIC_NOTICE: &str = "An unexpected error occurred.";

/// Sends form input to a prediction backend.
///
/// `Ok` means the service answered, successfully or not; `Err` means no
/// usable answer was obtained.
#[allow(async_fn_in_trait)]
pub trait PredictionClient {
    async fn predict(&self, input: &FormInput) -> Result<PredictReply, ClientError>;
}

/// The page elements a submission drives.
pub trait SubmissionView {
    /// Current submit control label.
    fn submit_label(&self) -> String;
    fn set_submit_label(&self, label: &str);
    fn set_submit_disabled(&self, disabled: bool);
    fn set_result_visible(&self, visible: bool);
    /// Write the prediction and confidence display regions.
    fn set_result_text(&self, prediction: &str, confidence: &str);
    /// Blocking notice to the user.
    fn notify(&self, message: &str);
}

/// A user-initiated form submission.
pub trait SubmitEvent {
    /// Suppress the browser's default form navigation.
    fn prevent_default(&self);
    /// Snapshot of the form's fields, keyed by `name`.
    fn fields(&self) -> FormInput;
}

/// How a submission settled.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Displayed(PredictionResponse),
    Rejected(String),
    Failed,
}

/// Busy state for the lifetime of one request.
///
/// Engaging swaps in the busy label, disables the submit control, and hides
/// the result area. Dropping restores the label and re-enables the control,
/// on every exit path.
struct BusyGuard<'a, V: SubmissionView> {
    view: &'a V,
    original_label: String,
}

impl<'a, V: SubmissionView> BusyGuard<'a, V> {
    fn engage(view: &'a V) -> Self {
        let original_label = view.submit_label();
        view.set_submit_label(BUSY_LABEL);
        view.set_submit_disabled(true);
        view.set_result_visible(false);
        Self {
            view,
            original_label,
        }
    }
}

impl<V: SubmissionView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_label(&self.original_label);
        self.view.set_submit_disabled(false);
    }
}

pub struct SubmissionHandler<C, V> {
    client: C,
    view: V,
}

impl<C: PredictionClient, V: SubmissionView> SubmissionHandler<C, V> {
    pub fn new(client: C, view: V) -> Self {
        Self { client, view }
    }

    /// Start one submission from an event callback.
    ///
    /// The default navigation is suppressed before this returns, so it never
    /// depends on when the returned future is first polled. No timeout
    /// applies: if the request never settles the control stays disabled.
    pub fn submit<E: SubmitEvent>(
        self: Rc<Self>,
        event: E,
    ) -> impl Future<Output = SubmissionOutcome> {
        event.prevent_default();
        async move { self.run(&event).await }
    }

    async fn run(&self, event: &impl SubmitEvent) -> SubmissionOutcome {
        let _busy = BusyGuard::engage(&self.view);
        let input = event.fields();

        match self.client.predict(&input).await {
            Ok(PredictReply::Accepted(response)) => {
                self.view
                    .set_result_text(&response.prediction, &response.confidence.to_string());
                self.view.set_result_visible(true);
                SubmissionOutcome::Displayed(response)
            }
            Ok(PredictReply::Rejected { status, error }) => {
                tracing::warn!(status, error = %error, "Prediction rejected");
                self.view.notify(&format!("Error: {error}"));
                SubmissionOutcome::Rejected(error)
            }
            Err(e) => {
                tracing::error!(error = %e, "Prediction request failed");
                self.view.notify(GENERIC_NOTICE);
                SubmissionOutcome::Failed
            }
        }
    }
}
