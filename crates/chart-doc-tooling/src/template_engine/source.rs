//! Locating the template text: a file on disk or the embedded fallback.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::EngineError;

/// Conventional template filename looked up when none is configured.
pub const DEFAULT_TEMPLATE_FILE: &str = "readme.tera";

/// README template compiled into the binary.
pub const EMBEDDED_TEMPLATE: &str = include_str!("../../templates/readme.tera");

/// Where the document template text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    File { path: PathBuf, contents: String },
    Embedded,
}

impl TemplateSource {
    /// Read the template at `path`, falling back to the embedded template when
    /// the file does not exist. Any other read failure is an error.
    pub fn locate(path: &Path) -> Result<Self, EngineError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "Loaded document template");
                Ok(Self::File {
                    path: path.to_path_buf(),
                    contents,
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    path = %path.display(),
                    "Template not found, using the embedded README template"
                );
                Ok(Self::Embedded)
            }
            Err(e) => Err(EngineError::Read {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    pub fn contents(&self) -> &str {
        match self {
            Self::File { contents, .. } => contents,
            Self::Embedded => EMBEDDED_TEMPLATE,
        }
    }

    /// Human-readable origin, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::File { path, .. } => path.display().to_string(),
            Self::Embedded => "<embedded readme template>".to_string(),
        }
    }
}
