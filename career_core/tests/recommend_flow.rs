/// End-to-end tests: artifacts on disk -> Recommender -> recommendation

use career_core::classifier::{ModelArtifact, ModelKind, TreeArtifact};
use career_core::{
    AssetStatus, Config, LabelEncoder, RecommendError, Recommender, SkillRating, SkillVector,
    ArtifactError, CAREER_LABELS, SKILL_COUNT,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CYBER_SECURITY: i64 = 3;
const DATA_SCIENCE: i64 = 14;

fn one_hot(encoder: &LabelEncoder, label: &str) -> Vec<f64> {
    let mut row = vec![0.0; encoder.len()];
    row[encoder.encode(label).unwrap()] = 10.0;
    row
}

/// Data Science > 4.5 -> Data Scientist,
/// else Cyber Security > 4.5 -> Cyber Security Specialist,
/// else Software Developer
fn model_artifact(encoder: &LabelEncoder) -> ModelArtifact {
    let n = encoder.len();
    ModelArtifact {
        kind: ModelKind::DecisionTree,
        n_features: SKILL_COUNT,
        n_classes: n,
        trees: vec![TreeArtifact {
            feature: vec![DATA_SCIENCE, CYBER_SECURITY, -2, -2, -2],
            threshold: vec![4.5, 4.5, -2.0, -2.0, -2.0],
            left: vec![1, 2, -1, -1, -1],
            right: vec![4, 3, -1, -1, -1],
            value: vec![
                vec![1.0; n],
                vec![1.0; n],
                one_hot(encoder, "Software Developer"),
                one_hot(encoder, "Cyber Security Specialist"),
                one_hot(encoder, "Data Scientist"),
            ],
        }],
    }
}

fn write_artifacts(dir: &Path) -> Config {
    let _ = env_logger::builder().is_test(true).try_init();

    let encoder = LabelEncoder::fit(CAREER_LABELS).unwrap();
    let model_path = dir.join("model.json");
    let encoder_path = dir.join("encoder.json");

    fs::write(
        &model_path,
        serde_json::to_string(&model_artifact(&encoder)).unwrap(),
    )
    .unwrap();
    fs::write(
        &encoder_path,
        serde_json::to_string(&encoder.to_artifact()).unwrap(),
    )
    .unwrap();

    Config {
        model_path,
        encoder_path,
        asset_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn test_all_excellent_recommends_data_scientist() {
    let dir = TempDir::new().unwrap();
    let recommender = Recommender::from_config(&write_artifacts(dir.path())).unwrap();

    let result = recommender
        .recommend(&SkillVector::uniform(SkillRating::Excellent))
        .unwrap();

    assert_eq!(result.label.as_str(), "Data Scientist");
    assert_eq!(result.readiness, 1.0);
    // No image files were written
    assert_eq!(result.assets.image, AssetStatus::Unavailable);
    assert_eq!(result.assets.roadmap, AssetStatus::Unavailable);
}

#[test]
fn test_second_split_branches() {
    let dir = TempDir::new().unwrap();
    let recommender = Recommender::from_config(&write_artifacts(dir.path())).unwrap();

    let mut vector = SkillVector::uniform(SkillRating::Average);
    let result = recommender.recommend(&vector).unwrap();
    assert_eq!(result.label.as_str(), "Software Developer");

    vector.set(CYBER_SECURITY as usize, SkillRating::Professional);
    let result = recommender.recommend(&vector).unwrap();
    assert_eq!(result.label.as_str(), "Cyber Security Specialist");
}

#[test]
fn test_roadmap_file_is_probed() {
    let dir = TempDir::new().unwrap();
    let config = write_artifacts(dir.path());
    image::RgbImage::new(12, 7)
        .save(dir.path().join("RDataScientist.png"))
        .unwrap();
    fs::rename(
        dir.path().join("RDataScientist.png"),
        dir.path().join("RDataScientist.jpg"),
    )
    .unwrap();

    let recommender = Recommender::from_config(&config).unwrap();
    let result = recommender
        .recommend(&SkillVector::uniform(SkillRating::Professional))
        .unwrap();

    // Content sniffing finds the PNG despite the .jpg name
    assert!(matches!(
        result.assets.roadmap,
        AssetStatus::Available {
            width: 12,
            height: 7,
            ..
        }
    ));
    assert_eq!(result.assets.image, AssetStatus::Unavailable);
}

#[test]
fn test_validation_runs_before_inference() {
    let dir = TempDir::new().unwrap();
    let recommender = Recommender::from_config(&write_artifacts(dir.path())).unwrap();

    assert_eq!(
        recommender.recommend(&SkillVector::uniform(SkillRating::NotInterested)),
        Err(RecommendError::AllSkillsZero)
    );
}

#[test]
fn test_missing_model_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        model_path: dir.path().join("absent.json"),
        ..write_artifacts(dir.path())
    };

    assert!(matches!(
        Recommender::from_config(&config),
        Err(ArtifactError::NotFound { .. })
    ));
}

#[test]
fn test_corrupt_encoder_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = write_artifacts(dir.path());
    fs::write(&config.encoder_path, "classes = nope").unwrap();

    let err = Recommender::from_config(&config).err().unwrap();
    assert!(matches!(err, ArtifactError::Json { .. }));
    assert!(err.to_string().contains("encoder.json"));
}

#[test]
fn test_encoder_smaller_than_model_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = write_artifacts(dir.path());
    fs::write(&config.encoder_path, r#"{"classes": ["Data Scientist"]}"#).unwrap();

    assert!(matches!(
        Recommender::from_config(&config),
        Err(ArtifactError::ClassCountMismatch { encoder: 1, .. })
    ));
}
