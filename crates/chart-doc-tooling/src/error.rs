//! # Error Types
//!
//! Unified error for the generation pipeline. Each stage keeps its own error
//! enum; this type lets callers propagate any of them with `?`.

use std::path::PathBuf;

use thiserror::Error;

use crate::document::DocumentError;
use crate::schema::SchemaError;
use crate::template_engine::EngineError;
use crate::values::ValuesError;

/// Pipeline result type
pub type DocGenResult<T> = Result<T, DocGenError>;

#[derive(Debug, Error)]
pub enum DocGenError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Values(#[from] ValuesError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Template(#[from] EngineError),
}

impl DocGenError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
