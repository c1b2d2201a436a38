//! Recommendation Resolver
//!
//! Holds the classifier, label encoder and asset resolver loaded at startup
//! and runs one submission through validate -> predict -> decode -> assets.
//! Everything here is read-only after construction.

use crate::assets::{AssetResolver, ResolvedAssets};
use crate::classifier::{Classifier, TreeEnsemble};
use crate::config::Config;
use crate::error::{ArtifactError, RecommendError};
use crate::label_encoder::LabelEncoder;
use crate::types::{CareerLabel, SkillVector};
use crate::validator::{self, DEFAULT_READINESS_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub label: CareerLabel,
    /// Share of skills rated Beginner or above
    pub readiness: f64,
    /// Serialized as top-level `image` and `roadmap` fields
    #[serde(flatten)]
    pub assets: ResolvedAssets,
}

impl Recommendation {
    pub fn success_message(&self) -> String {
        format!("Recommended Career Role: {}", self.label)
    }

    pub fn roadmap_intro(&self) -> String {
        format!("Here is a roadmap for becoming a {}.", self.label)
    }
}

pub struct Recommender<C: Classifier = TreeEnsemble> {
    classifier: C,
    encoder: LabelEncoder,
    assets: AssetResolver,
    readiness_threshold: f64,
}

impl Recommender<TreeEnsemble> {
    /// Loads both artifacts named in the config. Any failure is fatal.
    pub fn from_config(config: &Config) -> Result<Self, ArtifactError> {
        let classifier = TreeEnsemble::load(&config.model_path)?;
        let encoder = LabelEncoder::load(&config.encoder_path)?;
        let assets = AssetResolver::new(&config.asset_dir, config.asset_map());

        Ok(Self::new(classifier, encoder, assets)?
            .with_readiness_threshold(config.readiness_threshold))
    }
}

impl<C: Classifier> Recommender<C> {
    pub fn new(
        classifier: C,
        encoder: LabelEncoder,
        assets: AssetResolver,
    ) -> Result<Self, ArtifactError> {
        if classifier.n_classes() != encoder.len() {
            return Err(ArtifactError::ClassCountMismatch {
                classifier: classifier.n_classes(),
                encoder: encoder.len(),
            });
        }

        Ok(Self {
            classifier,
            encoder,
            assets,
            readiness_threshold: DEFAULT_READINESS_THRESHOLD,
        })
    }

    pub fn with_readiness_threshold(mut self, threshold: f64) -> Self {
        self.readiness_threshold = threshold;
        self
    }

    pub fn readiness_threshold(&self) -> f64 {
        self.readiness_threshold
    }

    pub fn encoder(&self) -> &LabelEncoder {
        &self.encoder
    }

    pub fn assets(&self) -> &AssetResolver {
        &self.assets
    }

    /// Predicts and decodes a label for an already-validated vector.
    pub fn resolve(&self, vector: &SkillVector) -> Result<CareerLabel, RecommendError> {
        let expected = self.classifier.n_features();
        if vector.len() != expected {
            return Err(RecommendError::ShapeMismatch {
                expected,
                actual: vector.len(),
            });
        }

        let index = self.classifier.predict(&vector.as_features());
        let label = self
            .encoder
            .decode(index)
            .cloned()
            .ok_or(RecommendError::UnknownClass(index))?;

        log::debug!("Predicted class {} -> {}", index, label);
        Ok(label)
    }

    /// Full submission flow: validation gate, inference, asset lookup.
    pub fn recommend(&self, vector: &SkillVector) -> Result<Recommendation, RecommendError> {
        validator::validate(vector, self.readiness_threshold)?;
        let label = self.resolve(vector)?;
        let assets = self.assets.resolve(&label);

        log::info!("Recommended '{}'", label);
        Ok(Recommendation {
            readiness: validator::readiness_ratio(vector),
            label,
            assets,
        })
    }
}
