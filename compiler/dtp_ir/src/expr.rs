//! Semantic expressions assembled from the frames of one sentence.

use serde::{Deserialize, Serialize};

use crate::Frame;

/// Antecedent and consequent frames found in a sentence.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct SemanticExpression {
    #[serde(default)]
    pub antecedents: Vec<Frame>,
    #[serde(default)]
    pub consequents: Vec<Frame>,
    /// Sentence text as the producing stage rendered it.
    #[serde(default)]
    pub token_text: String,
}

impl SemanticExpression {
    pub fn has_frames(&self) -> bool {
        !self.antecedents.is_empty() || !self.consequents.is_empty()
    }
}
