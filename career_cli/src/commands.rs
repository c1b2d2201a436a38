/// Bodies of the non-interactive commands
use crate::report;
use anyhow::{Context, Result};
use career_core::config::load_or_default;
use career_core::{Classifier, Recommender, SkillVector};
use std::path::Path;

/// Reads the optional config file, then both artifacts it names.
pub fn load_recommender(config_path: impl AsRef<Path>) -> Result<Recommender> {
    let config_path = config_path.as_ref();
    let config = load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    Recommender::from_config(&config).context("Failed to load recommendation model")
}

/// Runs one submission and renders it as text or pretty JSON.
///
/// A rejected submission comes back as the `RecommendError` itself.
pub fn recommend_output<C: Classifier>(
    recommender: &Recommender<C>,
    ratings: &str,
    json: bool,
) -> Result<String> {
    let vector = SkillVector::parse_list(ratings).context("Invalid --ratings list")?;

    let recommendation = recommender.recommend(&vector)?;

    if json {
        Ok(serde_json::to_string_pretty(&recommendation)? + "\n")
    } else {
        Ok(report::recommendation_text(&recommendation))
    }
}
