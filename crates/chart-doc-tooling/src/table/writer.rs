//! Plain-text table layout with `|` borders.
//!
//! Left and right borders only, no top or bottom rule, a dashed separator
//! under the header. Headings are centred; cells are left-aligned unless they
//! look numeric. Cells containing newlines span several physical lines.

use unicode_width::UnicodeWidthStr;

const SEPARATOR: char = '|';
const RULE: char = '-';

#[derive(Debug, Clone, Default)]
pub struct TableWriter {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
    Center,
}

impl TableWriter {
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing trailing cells render empty; extra cells are dropped.
    pub fn append(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        self.render_row(&mut out, &self.header, &widths, Some(Align::Center));
        render_rule(&mut out, &widths);
        for row in &self.rows {
            self.render_row(&mut out, row, &widths, None);
        }

        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| max_line_width(h)).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(max_line_width(cell));
            }
        }
        widths
    }

    fn render_row(&self, out: &mut String, cells: &[String], widths: &[usize], align: Option<Align>) {
        let lines: Vec<Vec<&str>> = (0..widths.len())
            .map(|column| {
                cells
                    .get(column)
                    .map(|cell| cell.split('\n').collect())
                    .unwrap_or_else(|| vec![""])
            })
            .collect();
        let height = lines.iter().map(Vec::len).max().unwrap_or(1);

        for line in 0..height {
            out.push(SEPARATOR);
            for (column, width) in widths.iter().enumerate() {
                let text = lines[column].get(line).copied().unwrap_or("");
                let align = align.unwrap_or_else(|| default_alignment(text));
                out.push(' ');
                out.push_str(&pad(text, *width, align));
                out.push(' ');
                out.push(SEPARATOR);
            }
            out.push('\n');
        }
    }
}

fn render_rule(out: &mut String, widths: &[usize]) {
    out.push(SEPARATOR);
    for width in widths {
        out.extend(std::iter::repeat(RULE).take(width + 2));
        out.push(SEPARATOR);
    }
    out.push('\n');
}

fn max_line_width(cell: &str) -> usize {
    cell.split('\n').map(UnicodeWidthStr::width).max().unwrap_or(0)
}

fn default_alignment(text: &str) -> Align {
    if is_numeric(text) {
        Align::Right
    } else {
        Align::Left
    }
}

/// `-?digits[.digits]`
fn is_numeric(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(text.width());
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_detection() {
        assert!(is_numeric("80"));
        assert!(is_numeric("-1"));
        assert!(is_numeric("1.5"));
        assert!(is_numeric("3."));
        assert!(!is_numeric(""));
        assert!(!is_numeric("-"));
        assert!(!is_numeric(".5"));
        assert!(!is_numeric("v1"));
        assert!(!is_numeric("1.2.3"));
    }

    #[test]
    fn test_numeric_cells_are_right_aligned() {
        let mut table = TableWriter::new(&["Name", "Count"]);
        table.append(vec!["alpha".to_string(), "7".to_string()]);

        assert_eq!(
            table.render(),
            "| Name  | Count |\n|-------|-------|\n| alpha |     7 |\n"
        );
    }

    #[test]
    fn test_multiline_cell_spans_lines() {
        let mut table = TableWriter::new(&["Key", "Description"]);
        table.append(vec!["tls".to_string(), "first\nsecond line".to_string()]);

        assert_eq!(
            table.render(),
            "\
| Key | Description |
|-----|-------------|
| tls | first       |
|     | second line |
"
        );
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        let mut table = TableWriter::new(&["K"]);
        table.append(vec!["日本".to_string()]);

        assert_eq!(table.render(), "|  K   |\n|------|\n| 日本 |\n");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = TableWriter::new(&["A", "B"]);
        table.append(vec!["x".to_string()]);

        assert_eq!(table.render(), "| A | B |\n|---|---|\n| x |   |\n");
    }
}
