//! Markdown table rendering of a parameter list.
//!
//! Rows follow the list's lexicographic key order so regenerated documents
//! diff cleanly. Defaults are made safe for a table cell: `|` becomes
//! `&#124;`, newlines become `&#13;&#10;`, and the whole value is wrapped in
//! `<code>` so it renders monospace even across the escaped line breaks.

mod writer;

use crate::parameters::ParameterList;
pub use writer::TableWriter;

/// Fixed column headings.
pub const HEADER: [&str; 3] = ["Parameter", "Description", "Default"];

const PIPE_ENTITY: &str = "&#124;";
const LINE_BREAK_ENTITY: &str = "&#13;&#10;";

/// One rendered row of the parameter table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub description: String,
    /// Escaped, `<code>`-wrapped default.
    pub default: String,
}

/// Table rows in deterministic (lexicographic) order.
pub fn rows(parameters: &ParameterList) -> Vec<TableRow> {
    parameters
        .iter()
        .map(|parameter| TableRow {
            name: parameter.name.clone(),
            description: parameter.description.clone(),
            default: escape_default(&parameter.default),
        })
        .collect()
}

/// Escape a default value for a markdown table cell and wrap it in `<code>`.
pub fn escape_default(default: &str) -> String {
    let escaped = default
        .replace('|', PIPE_ENTITY)
        .replace('\n', LINE_BREAK_ENTITY);
    format!("<code>{escaped}</code>")
}

/// Render the full parameter table as one text block.
pub fn render_table(parameters: &ParameterList) -> String {
    let mut table = TableWriter::new(&HEADER);
    for row in rows(parameters) {
        table.append(vec![row.name, row.description, row.default]);
    }
    table.render()
}
