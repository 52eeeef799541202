//! Structured Warning Contexts
//!
//! This module separates failure data from rendering. A [`Context`] describes
//! why a pipeline stage gave up on a sentence, while [`crate::reporting`]
//! turns it into a user-facing diagnostic.
//!
//! Every context variant has exactly one renderer in [`crate::reporting`], and
//! the renderer's `match` is exhaustive.
//!
//! # Design
//!
//! Contexts are grouped by the pipeline stage that produces them:
//! - [`tokenize`]: tokenizer and serializer
//! - [`bit_access`]: bit-access normalization
//! - [`frame`]: frame finding
//! - [`semantic`]: semantic expression construction
//! - [`ir`]: IR building
//!
//! Sub-cases that producers used to encode as nullable fields (the frame
//! finder's lookahead, the IR compound's frame combination) are enums of
//! their own, so renderers branch by pattern matching.
//!
//! # Wire format
//!
//! Contexts are stored as JSON with a `kind` tag:
//!
//! ```text
//! { "kind": "ir_property", "message": "...", "name": "clock", "property": "" }
//! ```
//!
//! A tag this build does not know deserializes to [`Context::Unrecognized`].

pub mod bit_access;
pub mod frame;
pub mod ir;
pub mod semantic;
pub mod tokenize;

pub use bit_access::{BitAccessNormalizerContext, BitAccessNormalizerFinderContext};
pub use frame::{FrameFinderContext, FrameSearch};
pub use ir::{CompoundShape, IrCompoundContext, IrConsequentContext, IrContext, IrPropertyContext};
pub use semantic::SemanticExpressionContext;
pub use tokenize::{SerializerContext, TokenizerContext};

use std::fmt;

use dtp_diagnostic::ErrorCode;
use serde::{Deserialize, Serialize};

/// Generate `From<T> for Context` implementation.
macro_rules! impl_from_context {
    ($source:ty => $variant:path) => {
        impl From<$source> for Context {
            fn from(c: $source) -> Self {
                $variant(c)
            }
        }
    };
}

/// A warning with no structured detail beyond its message.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct GenericContext {
    pub message: String,
}

impl GenericContext {
    pub fn new(message: impl Into<String>) -> Self {
        GenericContext {
            message: message.into(),
        }
    }
}

/// Why a pipeline stage failed to fully process a sentence.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Context {
    Generic(GenericContext),
    Tokenizer(TokenizerContext),
    Serializer(SerializerContext),
    FrameFinder(FrameFinderContext),
    BitAccessNormalizerFinder(BitAccessNormalizerFinderContext),
    BitAccessNormalizer(BitAccessNormalizerContext),
    SemanticExpression(SemanticExpressionContext),
    IrConsequent(IrConsequentContext),
    IrCompound(IrCompoundContext),
    IrProperty(IrPropertyContext),
    Ir(IrContext),

    /// Produced by a pipeline newer than this build. Carries no data.
    #[serde(other)]
    Unrecognized,
}

impl Context {
    /// Classify this context.
    pub fn kind(&self) -> ContextKind {
        match self {
            Context::Generic(_) => ContextKind::Generic,
            Context::Tokenizer(_) => ContextKind::Tokenizer,
            Context::Serializer(_) => ContextKind::Serializer,
            Context::FrameFinder(_) => ContextKind::FrameFinder,
            Context::BitAccessNormalizerFinder(_) => ContextKind::BitAccessNormalizerFinder,
            Context::BitAccessNormalizer(_) => ContextKind::BitAccessNormalizer,
            Context::SemanticExpression(_) => ContextKind::SemanticExpression,
            Context::IrConsequent(_) => ContextKind::IrConsequent,
            Context::IrCompound(_) => ContextKind::IrCompound,
            Context::IrProperty(_) => ContextKind::IrProperty,
            Context::Ir(_) => ContextKind::Ir,
            Context::Unrecognized => ContextKind::Unrecognized,
        }
    }

    /// The message authored by the producing stage.
    ///
    /// `None` only for [`Context::Unrecognized`], whose payload was dropped.
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            Context::Generic(c) => &c.message,
            Context::Tokenizer(c) => &c.message,
            Context::Serializer(c) => &c.message,
            Context::FrameFinder(c) => &c.message,
            Context::BitAccessNormalizerFinder(c) => &c.message,
            Context::BitAccessNormalizer(c) => &c.message,
            Context::SemanticExpression(c) => &c.message,
            Context::IrConsequent(c) => &c.message,
            Context::IrCompound(c) => &c.message,
            Context::IrProperty(c) => &c.message,
            Context::Ir(c) => &c.message,
            Context::Unrecognized => return None,
        };
        Some(message)
    }
}

impl_from_context!(GenericContext => Context::Generic);
impl_from_context!(TokenizerContext => Context::Tokenizer);
impl_from_context!(SerializerContext => Context::Serializer);
impl_from_context!(FrameFinderContext => Context::FrameFinder);
impl_from_context!(BitAccessNormalizerFinderContext => Context::BitAccessNormalizerFinder);
impl_from_context!(BitAccessNormalizerContext => Context::BitAccessNormalizer);
impl_from_context!(SemanticExpressionContext => Context::SemanticExpression);
impl_from_context!(IrConsequentContext => Context::IrConsequent);
impl_from_context!(IrCompoundContext => Context::IrCompound);
impl_from_context!(IrPropertyContext => Context::IrProperty);
impl_from_context!(IrContext => Context::Ir);

/// Tag of a [`Context`] variant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ContextKind {
    Generic,
    Tokenizer,
    Serializer,
    FrameFinder,
    BitAccessNormalizerFinder,
    BitAccessNormalizer,
    SemanticExpression,
    IrConsequent,
    IrCompound,
    IrProperty,
    Ir,
    Unrecognized,
}

impl ContextKind {
    /// Every kind a renderer exists for.
    pub const KNOWN: &'static [ContextKind] = &[
        ContextKind::Generic,
        ContextKind::Tokenizer,
        ContextKind::Serializer,
        ContextKind::FrameFinder,
        ContextKind::BitAccessNormalizerFinder,
        ContextKind::BitAccessNormalizer,
        ContextKind::SemanticExpression,
        ContextKind::IrConsequent,
        ContextKind::IrCompound,
        ContextKind::IrProperty,
        ContextKind::Ir,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContextKind::Generic => "Generic",
            ContextKind::Tokenizer => "Tokenizer",
            ContextKind::Serializer => "Serializer",
            ContextKind::FrameFinder => "FrameFinder",
            ContextKind::BitAccessNormalizerFinder => "BitAccessNormalizerFinder",
            ContextKind::BitAccessNormalizer => "BitAccessNormalizer",
            ContextKind::SemanticExpression => "SemanticExpression",
            ContextKind::IrConsequent => "IRConsequent",
            ContextKind::IrCompound => "IRCompound",
            ContextKind::IrProperty => "IRProperty",
            ContextKind::Ir => "IR",
            ContextKind::Unrecognized => "Unrecognized",
        }
    }

    /// Diagnostic code used when explaining this kind.
    pub fn code(self) -> ErrorCode {
        match self {
            ContextKind::Generic => ErrorCode::E0001,
            ContextKind::Tokenizer => ErrorCode::E1001,
            ContextKind::Serializer => ErrorCode::E1002,
            ContextKind::BitAccessNormalizerFinder => ErrorCode::E2001,
            ContextKind::BitAccessNormalizer => ErrorCode::E2002,
            ContextKind::FrameFinder => ErrorCode::E3001,
            ContextKind::SemanticExpression => ErrorCode::E4001,
            ContextKind::Ir => ErrorCode::E5001,
            ContextKind::IrProperty => ErrorCode::E5002,
            ContextKind::IrCompound => ErrorCode::E5003,
            ContextKind::IrConsequent => ErrorCode::E5004,
            ContextKind::Unrecognized => ErrorCode::E9001,
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded pipeline failure, attached to the sentence it occurred in.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Warning {
    pub context: Context,
}

impl Warning {
    pub fn new(context: impl Into<Context>) -> Self {
        Warning {
            context: context.into(),
        }
    }

    pub fn kind(&self) -> ContextKind {
        self.context.kind()
    }
}
