#[cfg(test)]
mod common;

#[cfg(test)]
mod predict_tests;

#[cfg(test)]
mod predict_error_tests;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod training_pipeline_tests;
