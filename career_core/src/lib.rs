// Core of the career recommender: skill ratings, the submission gate, the
// tree-ensemble classifier, label decoding and display asset lookup.

mod artifact;

pub mod assets;
pub mod classifier;
pub mod config;
pub mod error;
pub mod label_encoder;
pub mod recommender;
pub mod types;
pub mod validator;

pub use assets::{AssetKind, AssetMap, AssetResolver, AssetStatus, ResolvedAssets};
pub use classifier::{Classifier, ModelKind, TreeEnsemble};
pub use config::Config;
pub use error::{ArtifactError, RecommendError};
pub use label_encoder::LabelEncoder;
pub use recommender::{Recommendation, Recommender};
pub use types::{CareerLabel, SkillRating, SkillVector, CAREER_LABELS, SKILL_COLUMNS, SKILL_COUNT};

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
