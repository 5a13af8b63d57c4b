use super::artifact::read_json_artifact;
use super::predictor::DefaultClassifier;
use crate::domain::errors::{ArtifactError, InferenceError};
use crate::domain::ml::Inference;
use crate::domain::ml::feature_registry::check_feature_names;
use serde::Deserialize;
use std::path::Path;

const ARTIFACT: &str = "classifier";
const LEAF: i64 = -1;

/// One decision tree in parallel-array form.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeArtifact {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    /// Per-node class weights (counts or fractions)
    pub value: Vec<Vec<f64>>,
}

/// On-disk form of a fitted random forest classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct ForestArtifact {
    pub n_features: usize,
    pub classes: Vec<i64>,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub trees: Vec<TreeArtifact>,
}

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        default_probability: f64,
    },
}

#[derive(Debug, Clone)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn from_artifact(idx: usize, t: TreeArtifact, n_features: usize) -> Result<Self, String> {
        let n = t.children_left.len();
        if n == 0 {
            return Err(format!("tree {} has no nodes", idx));
        }
        if t.children_right.len() != n
            || t.feature.len() != n
            || t.threshold.len() != n
            || t.value.len() != n
        {
            return Err(format!("tree {} has arrays of different lengths", idx));
        }

        let mut nodes = Vec::with_capacity(n);
        for i in 0..n {
            let (left, right) = (t.children_left[i], t.children_right[i]);
            let weights = &t.value[i];
            if weights.len() != 2 {
                return Err(format!(
                    "tree {} node {} has {} class weights, expected 2",
                    idx,
                    i,
                    weights.len()
                ));
            }
            if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(format!("tree {} node {} has invalid class weights", idx, i));
            }

            if left == LEAF && right == LEAF {
                let total = weights[0] + weights[1];
                if total <= 0.0 {
                    return Err(format!("tree {} leaf {} has zero weight", idx, i));
                }
                nodes.push(Node::Leaf {
                    default_probability: weights[1] / total,
                });
                continue;
            }

            // Children strictly after their parent keeps traversal acyclic
            let in_range = |c: i64| c > i as i64 && (c as usize) < n;
            if !in_range(left) || !in_range(right) {
                return Err(format!(
                    "tree {} node {} has invalid children ({}, {})",
                    idx, i, left, right
                ));
            }
            let feature = t.feature[i];
            if feature < 0 || feature as usize >= n_features {
                return Err(format!(
                    "tree {} node {} splits on unknown feature {}",
                    idx, i, feature
                ));
            }
            if !t.threshold[i].is_finite() {
                return Err(format!("tree {} node {} has non-finite threshold", idx, i));
            }

            nodes.push(Node::Split {
                feature: feature as usize,
                threshold: t.threshold[i],
                left: left as usize,
                right: right as usize,
            });
        }

        Ok(Self { nodes })
    }

    fn default_probability(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf {
                    default_probability,
                } => return *default_probability,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    // Thresholds were learned on f32 inputs
                    let x = features[*feature] as f32 as f64;
                    idx = if x <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

/// Random forest for binary default classification.
///
/// Probability is the mean of per-tree leaf class fractions; the predicted
/// class is the one with the higher mean probability (non-default on ties).
#[derive(Debug, Clone)]
pub struct ForestClassifier {
    trees: Vec<Tree>,
    n_features: usize,
}

impl ForestClassifier {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let artifact: ForestArtifact = read_json_artifact(ARTIFACT, path)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ForestArtifact) -> Result<Self, ArtifactError> {
        let invalid = |reason: String| ArtifactError::Invalid {
            artifact: ARTIFACT,
            reason,
        };

        if artifact.classes != [0, 1] {
            return Err(invalid(format!(
                "classes must be [0, 1], got {:?}",
                artifact.classes
            )));
        }
        if artifact.n_features == 0 {
            return Err(invalid("n_features is zero".to_string()));
        }
        if artifact.trees.is_empty() {
            return Err(invalid("forest has no trees".to_string()));
        }
        if let Some(names) = &artifact.feature_names {
            check_feature_names(names).map_err(invalid)?;
        }

        let n_features = artifact.n_features;
        let trees = artifact
            .trees
            .into_iter()
            .enumerate()
            .map(|(idx, t)| Tree::from_artifact(idx, t, n_features))
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;

        Ok(Self { trees, n_features })
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl DefaultClassifier for ForestClassifier {
    fn predict(&self, features: &[f64]) -> Result<Inference, InferenceError> {
        if features.len() != self.n_features {
            return Err(InferenceError::FeatureCount {
                expected: self.n_features,
                actual: features.len(),
            });
        }
        // Splits compare in f32; beyond f32::MAX a value would saturate to infinity
        if let Some(index) = features.iter().position(|v| v.abs() > f32::MAX as f64) {
            return Err(InferenceError::OutOfRange { index });
        }

        let sum: f64 = self
            .trees
            .iter()
            .map(|t| t.default_probability(features))
            .sum();
        let default_probability = sum / self.trees.len() as f64;

        Ok(Inference {
            class: u8::from(default_probability > 1.0 - default_probability),
            default_probability,
        })
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn name(&self) -> &str {
        "Random Forest Classifier"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
