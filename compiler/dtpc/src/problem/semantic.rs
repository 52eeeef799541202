//! Semantic expression contexts.

use dtp_ir::SemanticExpression;
use serde::{Deserialize, Serialize};

/// A sentence produced no expression with a consequent.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct SemanticExpressionContext {
    pub message: String,
    pub semantic_expression: SemanticExpression,
}

impl SemanticExpressionContext {
    pub fn new(message: impl Into<String>, semantic_expression: SemanticExpression) -> Self {
        SemanticExpressionContext {
            message: message.into(),
            semantic_expression,
        }
    }
}
