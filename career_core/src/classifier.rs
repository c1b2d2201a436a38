//! Tree-ensemble classifier
//!
//! Loads a decision tree or random forest exported as JSON in the array
//! layout scikit-learn uses for fitted trees (`feature`, `threshold`,
//! `children_left`, `children_right`, `value`) and predicts a class index
//! from a feature row.

use crate::artifact::read_json;
use crate::error::ArtifactError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Marker for "no child" in the exported child arrays
const LEAF: i64 = -1;

/// Anything that maps a feature row to a class index
pub trait Classifier {
    /// Number of features the model was trained on
    fn n_features(&self) -> usize;

    /// Number of classes the model can predict
    fn n_classes(&self) -> usize;

    /// Predicted class index. Callers check the row length first.
    fn predict(&self, features: &[f32]) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    DecisionTree,
    RandomForest,
}

/// On-disk form of one fitted tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeArtifact {
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub left: Vec<i64>,
    pub right: Vec<i64>,
    /// Per-node class counts (or weights)
    pub value: Vec<Vec<f64>>,
}

/// On-disk form of the whole model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub kind: ModelKind,
    pub n_features: usize,
    pub n_classes: usize,
    pub trees: Vec<TreeArtifact>,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        distribution: Vec<f64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn from_artifact(
        tree: TreeArtifact,
        n_features: usize,
        n_classes: usize,
    ) -> Result<Self, String> {
        let count = tree.left.len();
        if count == 0 {
            return Err("tree has no nodes".to_string());
        }
        if [
            tree.feature.len(),
            tree.threshold.len(),
            tree.right.len(),
            tree.value.len(),
        ]
        .iter()
        .any(|&len| len != count)
        {
            return Err(format!(
                "tree arrays disagree in length (left has {} nodes)",
                count
            ));
        }

        let mut nodes = Vec::with_capacity(count);
        for idx in 0..count {
            let (left, right) = (tree.left[idx], tree.right[idx]);

            if left == LEAF || right == LEAF {
                if left != right {
                    return Err(format!("node {} has exactly one child", idx));
                }
                let row = &tree.value[idx];
                if row.len() != n_classes {
                    return Err(format!(
                        "leaf {} has {} class values, expected {}",
                        idx,
                        row.len(),
                        n_classes
                    ));
                }
                nodes.push(Node::Leaf {
                    distribution: normalize(row),
                });
                continue;
            }

            // Children always come after their parent, which rules out cycles
            let child = |c: i64| -> Result<usize, String> {
                usize::try_from(c)
                    .ok()
                    .filter(|&c| c > idx && c < count)
                    .ok_or_else(|| format!("node {} has invalid child {}", idx, c))
            };
            let feature = usize::try_from(tree.feature[idx])
                .ok()
                .filter(|&f| f < n_features)
                .ok_or_else(|| {
                    format!("node {} splits on invalid feature {}", idx, tree.feature[idx])
                })?;

            nodes.push(Node::Split {
                feature,
                threshold: tree.threshold[idx],
                left: child(left)?,
                right: child(right)?,
            });
        }

        Ok(Self { nodes })
    }

    fn leaf_distribution(&self, features: &[f32]) -> &[f64] {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { distribution } => return distribution,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = features.get(*feature).copied().unwrap_or(0.0);
                    idx = if f64::from(x) <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

fn normalize(row: &[f64]) -> Vec<f64> {
    let total: f64 = row.iter().sum();
    if total > 0.0 {
        row.iter().map(|v| v / total).collect()
    } else {
        row.to_vec()
    }
}

/// Decision tree or random forest loaded from a JSON artifact
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEnsemble {
    kind: ModelKind,
    n_features: usize,
    n_classes: usize,
    trees: Vec<Tree>,
}

impl TreeEnsemble {
    /// Loads and validates a model artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let artifact: ModelArtifact = read_json(path)?;
        let model = Self::from_artifact(artifact).map_err(|reason| ArtifactError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;

        log::info!(
            "Loaded {:?} with {} tree(s), {} features, {} classes from {}",
            model.kind,
            model.trees.len(),
            model.n_features,
            model.n_classes,
            path.display()
        );
        Ok(model)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ArtifactError> {
        let path = PathBuf::from("<memory>");
        let artifact: ModelArtifact =
            serde_json::from_str(json).map_err(|source| ArtifactError::Json {
                path: path.clone(),
                source,
            })?;
        Self::from_artifact(artifact).map_err(|reason| ArtifactError::Invalid { path, reason })
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, String> {
        if artifact.n_features == 0 {
            return Err("model declares zero features".to_string());
        }
        if artifact.n_classes == 0 {
            return Err("model declares zero classes".to_string());
        }
        match (artifact.kind, artifact.trees.len()) {
            (_, 0) => return Err("model has no trees".to_string()),
            (ModelKind::DecisionTree, n) if n != 1 => {
                return Err(format!("decision_tree must hold exactly one tree, found {}", n))
            }
            _ => {}
        }

        let trees = artifact
            .trees
            .into_iter()
            .enumerate()
            .map(|(i, tree)| {
                Tree::from_artifact(tree, artifact.n_features, artifact.n_classes)
                    .map_err(|e| format!("tree {}: {}", i, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            kind: artifact.kind,
            n_features: artifact.n_features,
            n_classes: artifact.n_classes,
            trees,
        })
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Mean of the per-tree leaf distributions
    pub fn predict_proba(&self, features: &[f32]) -> Vec<f64> {
        let mut sum = vec![0.0; self.n_classes];
        for tree in &self.trees {
            for (acc, p) in sum.iter_mut().zip(tree.leaf_distribution(features)) {
                *acc += p;
            }
        }
        let n = self.trees.len() as f64;
        sum.iter_mut().for_each(|p| *p /= n);
        sum
    }
}

impl Classifier for TreeEnsemble {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Arg-max of `predict_proba`; ties go to the lowest index.
    fn predict(&self, features: &[f32]) -> usize {
        let proba = self.predict_proba(features);
        let mut best = 0;
        for (i, p) in proba.iter().enumerate().skip(1) {
            if *p > proba[best] {
                best = i;
            }
        }
        best
    }
}
