use crate::artifact::read_json;
use crate::error::ArtifactError;
use crate::types::CareerLabel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// On-disk form: the fitted class list, index = encoded value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderArtifact {
    pub classes: Vec<String>,
}

/// Bidirectional mapping between class indices and career labels
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<CareerLabel>,
    index: HashMap<String, usize>,
}

impl LabelEncoder {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let artifact: EncoderArtifact = read_json(path)?;
        let encoder =
            Self::from_classes(artifact.classes).map_err(|reason| ArtifactError::Invalid {
                path: path.to_path_buf(),
                reason,
            })?;

        log::info!(
            "Loaded label encoder with {} classes from {}",
            encoder.len(),
            path.display()
        );
        Ok(encoder)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ArtifactError> {
        let path = PathBuf::from("<memory>");
        let artifact: EncoderArtifact =
            serde_json::from_str(json).map_err(|source| ArtifactError::Json {
                path: path.clone(),
                source,
            })?;
        Self::from_classes(artifact.classes).map_err(|reason| ArtifactError::Invalid { path, reason })
    }

    /// Builds an encoder from an already-ordered class list.
    pub fn from_classes(classes: Vec<String>) -> Result<Self, String> {
        if classes.is_empty() {
            return Err("label encoder has no classes".to_string());
        }

        let mut index = HashMap::with_capacity(classes.len());
        for (i, class) in classes.iter().enumerate() {
            if index.insert(class.clone(), i).is_some() {
                return Err(format!("duplicate class '{}'", class));
            }
        }

        let classes: Vec<CareerLabel> = classes.into_iter().map(CareerLabel::new).collect();
        for unknown in classes.iter().filter(|c| !c.is_known()) {
            log::warn!("Label encoder class '{}' is outside the known role set", unknown);
        }

        Ok(Self { classes, index })
    }

    /// Sorted, de-duplicated class list, the same order a fitted encoder uses.
    pub fn fit<'a>(labels: impl IntoIterator<Item = &'a str>) -> Result<Self, String> {
        let mut classes: Vec<String> = labels.into_iter().map(str::to_string).collect();
        classes.sort();
        classes.dedup();
        Self::from_classes(classes)
    }

    pub fn encode(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn decode(&self, index: usize) -> Option<&CareerLabel> {
        self.classes.get(index)
    }

    pub fn classes(&self) -> &[CareerLabel] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn to_artifact(&self) -> EncoderArtifact {
        EncoderArtifact {
            classes: self.classes.iter().map(|c| c.as_str().to_string()).collect(),
        }
    }
}
