//! Tera-backed document template.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tera::{Context, Tera};

use super::source::TemplateSource;

const TEMPLATE_NAME: &str = "document";

/// A parsed document template ready to render.
#[derive(Debug)]
pub struct DocumentTemplate {
    tera: Tera,
    origin: String,
}

impl DocumentTemplate {
    pub fn parse(source: &TemplateSource) -> Result<Self, EngineError> {
        let origin = source.describe();
        let mut tera = Tera::default();
        // Tables carry `<code>` markup and HTML entities that must pass through.
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, source.contents())
            .map_err(|e| EngineError::Parse {
                template: origin.clone(),
                source: e,
            })?;

        Ok(Self { tera, origin })
    }

    /// Locate and parse the template at `path` (embedded fallback when absent).
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        Self::parse(&TemplateSource::locate(path)?)
    }

    pub fn embedded() -> Result<Self, EngineError> {
        Self::parse(&TemplateSource::Embedded)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Render with `context`, which must be a JSON object.
    pub fn render(&self, context: &Value) -> Result<String, EngineError> {
        let context = Context::from_serialize(context).map_err(|e| EngineError::Render {
            template: self.origin.clone(),
            source: e,
        })?;

        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| EngineError::Render {
                template: self.origin.clone(),
                source: e,
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("template parse error in '{template}': {source}")]
    Parse {
        template: String,
        source: tera::Error,
    },
    #[error("render error for '{template}': {source}")]
    Render {
        template: String,
        source: tera::Error,
    },
}
