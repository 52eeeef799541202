//! IR building contexts.

use dtp_ir::{Frame, SemanticExpression};
use serde::{Deserialize, Serialize};

/// A consequent frame whose name and description are not supported.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct IrConsequentContext {
    pub message: String,
    pub frame: Frame,
    pub name: String,
    pub description: String,
}

impl IrConsequentContext {
    pub fn new(
        message: impl Into<String>,
        frame: Frame,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        IrConsequentContext {
            message: message.into(),
            frame,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A compound or temporal operator the IR builder cannot handle.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct IrCompoundContext {
    pub message: String,
    pub shape: CompoundShape,
}

impl IrCompoundContext {
    pub fn new(message: impl Into<String>, shape: CompoundShape) -> Self {
        IrCompoundContext {
            message: message.into(),
            shape,
        }
    }
}

/// Which frames the IR builder could point at when a compound failed.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "case", rename_all = "snake_case")]
pub enum CompoundShape {
    /// The operator itself is unknown.
    UnsupportedOperator,

    /// A temporal operator in `problem_frame` is unknown.
    UnsupportedTemporal { problem_frame: Frame },

    /// The frames are combined in a way no compound supports.
    UnsupportedConfiguration { other_frames: Vec<Frame> },

    /// `problem_frame` starts with the operator that should join `other_frames`.
    LeadingOperator {
        problem_frame: Frame,
        other_frames: Vec<Frame>,
    },
}

impl CompoundShape {
    /// Pick the shape from the optional frames a producer has at hand.
    pub fn from_parts(problem_frame: Option<Frame>, other_frames: Option<Vec<Frame>>) -> Self {
        match (problem_frame, other_frames) {
            (None, None) => CompoundShape::UnsupportedOperator,
            (Some(problem_frame), None) => CompoundShape::UnsupportedTemporal { problem_frame },
            (None, Some(other_frames)) => CompoundShape::UnsupportedConfiguration { other_frames },
            (Some(problem_frame), Some(other_frames)) => CompoundShape::LeadingOperator {
                problem_frame,
                other_frames,
            },
        }
    }
}

/// An IR property is missing one of its sides.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct IrPropertyContext {
    pub message: String,
    pub name: String,
    pub property: String,
}

impl IrPropertyContext {
    pub fn new(
        message: impl Into<String>,
        name: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        IrPropertyContext {
            message: message.into(),
            name: name.into(),
            property: property.into(),
        }
    }
}

/// IR building failed for a whole expression or a single frame.
///
/// Both parts are optional and independent.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct IrContext {
    pub message: String,
    #[serde(default)]
    pub semantic_expression: Option<SemanticExpression>,
    #[serde(default)]
    pub problem_frame: Option<Frame>,
}

impl IrContext {
    pub fn new(message: impl Into<String>) -> Self {
        IrContext {
            message: message.into(),
            ..IrContext::default()
        }
    }

    #[must_use]
    pub fn with_semantic_expression(mut self, semantic_expression: SemanticExpression) -> Self {
        self.semantic_expression = Some(semantic_expression);
        self
    }

    #[must_use]
    pub fn with_problem_frame(mut self, problem_frame: Frame) -> Self {
        self.problem_frame = Some(problem_frame);
        self
    }
}
