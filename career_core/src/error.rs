use std::path::PathBuf;

/// Failure to load a classifier or label encoder artifact. Fatal at startup.
#[derive(thiserror::Error, Debug)]
pub enum ArtifactError {
    #[error("Artifact file not found: `{}`", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read artifact `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse artifact `{}`: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid artifact `{}`: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },

    #[error("Classifier predicts {classifier} classes but the label encoder holds {encoder}")]
    ClassCountMismatch { classifier: usize, encoder: usize },
}

/// Rejections and failures of a single submission
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RecommendError {
    #[error("You selected 'Not Interested' for all skills. Please update your inputs to get a meaningful career recommendation.")]
    AllSkillsZero,

    #[error("Most of your skills are marked 'Poor' or 'Not Interested' ({ready} of {total} at Beginner or above, {:.0}% required). Please review them to receive an accurate recommendation.", .threshold * 100.0)]
    InsufficientReadiness {
        ready: usize,
        total: usize,
        threshold: f64,
    },

    #[error("Input shape mismatch: expected {expected} skill ratings, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Predicted class index {0} has no label in the encoder")]
    UnknownClass(usize),
}

impl RecommendError {
    /// Validation rejections are shown as warnings, everything else as errors.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            RecommendError::AllSkillsZero | RecommendError::InsufficientReadiness { .. }
        )
    }
}
