use crate::submission::{
    use_prediction_view, FormSubmission, HttpPredictionClient, PredictionViewModel,
    SubmissionHandler,
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdWine;
use dioxus_free_icons::Icon;
use shared_types::{FormInput, WINE_FEATURES};
use std::rc::Rc;

const SUBMIT_LABEL: &str = "PREDICT CULTIVAR";

/// Prediction form: 13 chemical properties in, cultivar and confidence out.
///
/// Element ids match the page contract (`predictionForm`, `submitBtn`,
/// `resultArea`, `predictionResult`, `confidenceResult`).
#[component]
pub fn Predict() -> Element {
    let view = use_prediction_view(SUBMIT_LABEL);
    let mut values = use_signal(FormInput::new);

    let handler = use_hook(|| {
        Rc::new(SubmissionHandler::new(
            HttpPredictionClient::new(&crate::api_base()),
            view,
        ))
    });

    let handle_submit = move |evt: FormEvent| {
        let submission = handler.clone().submit(FormSubmission::new(evt, values));
        async move {
            submission.await;
        }
    };

    let PredictionViewModel {
        submit_label,
        submitting,
        result_visible,
        prediction,
        confidence,
    } = view;

    rsx! {
        div { class: "predict-page",
            header { class: "predict-header",
                Icon { icon: LdWine, width: 36, height: 36 }
                h1 { "Wine Cultivar Prediction" }
                p { class: "predict-subtitle",
                    "Predicts the wine cultivar from its chemical properties using a Naive Bayes model."
                }
            }

            form { id: "predictionForm", class: "predict-form", onsubmit: handle_submit,
                div { class: "predict-grid",
                    for feature in WINE_FEATURES {
                        div { key: "{feature.name}", class: "predict-field",
                            label { r#for: feature.name, "{feature.label}" }
                            input {
                                id: feature.name,
                                name: feature.name,
                                r#type: "number",
                                step: "any",
                                required: true,
                                value: values.read().get(feature.name).unwrap_or_default().to_string(),
                                oninput: move |e: FormEvent| values.write().insert(feature.name, e.value()),
                            }
                        }
                    }
                }
                button {
                    id: "submitBtn",
                    r#type: "submit",
                    class: "predict-submit",
                    disabled: submitting(),
                    "{submit_label}"
                }
            }

            div {
                id: "resultArea",
                class: if result_visible() { "predict-result" } else { "predict-result hidden" },
                div { class: "predict-result-row",
                    span { class: "predict-result-label", "Prediction" }
                    strong { id: "predictionResult", "{prediction}" }
                }
                div { class: "predict-result-row",
                    span { class: "predict-result-label", "Confidence" }
                    strong { id: "confidenceResult", "{confidence}" }
                }
            }
        }
    }
}
