//! Inputs - data handed over by the processing pipeline
//!
//! Two JSON files feed the explainer: the mapping tables (a [`Mappings`]) and
//! a project dump listing every sentence with the warnings recorded for it.

use std::path::{Path, PathBuf};

use dtp_ir::Mappings;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::problem::Warning;

/// Failure to load an input file.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Whether a sentence was prose or a source comment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceKind {
    Comment,
    #[default]
    NonComment,
}

/// One processed sentence.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Sentence {
    pub id: u32,
    #[serde(default)]
    pub kind: SentenceKind,
    pub text: String,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

impl Sentence {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Sentence {
            id,
            kind: SentenceKind::NonComment,
            text: text.into(),
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: SentenceKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_warning(mut self, warning: Warning) -> Self {
        self.warnings.push(warning);
        self
    }

    pub fn is_comment(&self) -> bool {
        self.kind == SentenceKind::Comment
    }
}

/// Every sentence of a processed document.
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub sentences: Vec<Sentence>,
}

impl Project {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Project { sentences }
    }

    pub fn warning_count(&self) -> usize {
        self.sentences.iter().map(|s| s.warnings.len()).sum()
    }
}

pub fn load_project(path: &Path) -> Result<Project, ProjectError> {
    read_json(path)
}

pub fn load_mappings(path: &Path) -> Result<Mappings, ProjectError> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ProjectError> {
    let text = std::fs::read_to_string(path).map_err(|source| ProjectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ProjectError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
