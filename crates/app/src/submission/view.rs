use dioxus::prelude::*;
use shared_types::FormInput;

use super::{SubmissionView, SubmitEvent};

/// Signals backing the prediction page. Cheap to copy into handlers.
#[derive(Clone, Copy)]
pub struct PredictionViewModel {
    pub submit_label: Signal<String>,
    pub submitting: Signal<bool>,
    pub result_visible: Signal<bool>,
    pub prediction: Signal<String>,
    pub confidence: Signal<String>,
}

/// Create the page's view signals with `label` on the submit control.
pub fn use_prediction_view(label: &'static str) -> PredictionViewModel {
    PredictionViewModel {
        submit_label: use_signal(|| label.to_string()),
        submitting: use_signal(|| false),
        result_visible: use_signal(|| false),
        prediction: use_signal(String::new),
        confidence: use_signal(String::new),
    }
}

impl SubmissionView for PredictionViewModel {
    fn submit_label(&self) -> String {
        self.submit_label.peek().clone()
    }

    fn set_submit_label(&self, label: &str) {
        let mut submit_label = self.submit_label;
        submit_label.set(label.to_string());
    }

    fn set_submit_disabled(&self, disabled: bool) {
        let mut submitting = self.submitting;
        submitting.set(disabled);
    }

    fn set_result_visible(&self, visible: bool) {
        let mut result_visible = self.result_visible;
        result_visible.set(visible);
    }

    fn set_result_text(&self, prediction: &str, confidence: &str) {
        let (mut p, mut c) = (self.prediction, self.confidence);
        p.set(prediction.to_string());
        c.set(confidence.to_string());
    }

    fn notify(&self, message: &str) {
        // JSON string literal doubles as a safely escaped JS string.
        let literal = serde_json::Value::from(message).to_string();
        document::eval(&format!("alert({literal});"));
    }
}

/// A Dioxus form submit event paired with the form's field values.
pub struct FormSubmission {
    event: FormEvent,
    values: Signal<FormInput>,
}

impl FormSubmission {
    pub fn new(event: FormEvent, values: Signal<FormInput>) -> Self {
        Self { event, values }
    }
}

impl SubmitEvent for FormSubmission {
    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn fields(&self) -> FormInput {
        self.values.peek().clone()
    }
}
