//! Runtime template engine for the rendered document.
//!
//! Uses Tera for template rendering. A user-supplied template file is used
//! when it exists; otherwise the README template embedded in this crate is
//! the fallback.

mod engine;
mod source;

pub use engine::{DocumentTemplate, EngineError};
pub use source::{TemplateSource, DEFAULT_TEMPLATE_FILE, EMBEDDED_TEMPLATE};
