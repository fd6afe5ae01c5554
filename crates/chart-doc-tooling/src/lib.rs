//! Parameter reference generation for chart values.
//!
//! Turns a chart's values document (and, optionally, the JSON Schema that
//! describes it) into a flat list of dotted-path parameters, renders that list
//! as a markdown table and substitutes it into a document template.
//!
//! # Modules
//!
//! - [`parameters`]: The flat parameter list and its merge rule
//! - [`values`]: Values document → parameter list
//! - [`schema`]: JSON Schema → parameter list, with `$ref` resolution and a cycle guard
//! - [`table`]: Parameter list → markdown table with escaped defaults
//! - [`example`]: `--set` example derivation from the parameter list
//! - [`document`]: Doc-info and chart descriptor decoding, final render context
//! - [`template_engine`]: Tera-based document template with an embedded fallback
//!
//! # Pipeline
//!
//! ```no_run
//! use chart_doc_tooling::{document, schema, template_engine, values};
//!
//! # fn main() -> chart_doc_tooling::DocGenResult<()> {
//! let from_values = values::load_from_values(b"image:\n  tag: v1\n")?;
//! let from_schema = schema::load_from_json_schema(
//!     br#"{"type":"object","properties":{"image":{"type":"object","properties":{"tag":{"default":"latest","description":"Image tag"}}}}}"#,
//! )?;
//! let parameters = from_schema.merge(&from_values);
//!
//! let doc = document::DocInfo::from_slice(b"project:\n  name: demo\n")?;
//! let chart = document::ChartInfo::from_slice(b"name: demo\nversion: 1.0.0\n")?;
//! let template = template_engine::DocumentTemplate::embedded()?;
//!
//! let rendered = document::render_document(doc, &chart, &parameters, &template, &[])?;
//! print!("{rendered}");
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod example;
pub mod parameters;
pub mod schema;
pub mod table;
pub mod template_engine;
pub mod values;

pub use error::{DocGenError, DocGenResult};
pub use parameters::{Parameter, ParameterList};
