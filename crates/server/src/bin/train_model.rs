//! Fit the Gaussian Naive Bayes model and write it to the configured path.
//!
//! Usage: `train-model [DATASET.csv]`. Without an argument the UCI Wine
//! dataset is downloaded (`WINE_DATA_URL` overrides the source).

use server::training::{self, TrainingError};

#[tokio::main]
async fn main() -> Result<(), TrainingError> {
    let data = match std::env::args().nth(1) {
        Some(path) => {
            println!("Reading dataset from {path}...");
            std::fs::read_to_string(&path)
                .map_err(|source| TrainingError::Read { path, source })?
        }
        None => {
            let url = std::env::var("WINE_DATA_URL")
                .unwrap_or_else(|_| training::WINE_DATA_URL.to_string());
            println!("Downloading Wine dataset from {url}...");
            training::download_dataset(&url).await?
        }
    };

    let samples = training::parse_dataset(&data);
    let model = training::fit(&samples)?;
    println!(
        "Fitted {} samples across classes {:?}",
        samples.len(),
        model.class_ids().collect::<Vec<_>>()
    );

    let path = server::config::model_path();
    model.save(&path)?;
    println!("Model saved to {}", path.display());
    Ok(())
}
