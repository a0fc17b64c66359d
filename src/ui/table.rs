//! Elastic tab-stop tables for plain-text output.
//!
//! Every column except the last is padded to its widest cell plus a fixed
//! gap, so rows line up without any border characters. The last column is
//! written as-is, leaving no trailing whitespace.

use console::measure_text_width;

/// Gap between columns.
const COLUMN_PADDING: usize = 1;

/// A column-aligned text table.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: &[&str]) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| clean_cell(s)).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: &[&str]) {
        let row: Vec<String> = row.iter().map(|s| clean_cell(s)).collect();

        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
            }
        }

        self.rows.push(row);
    }

    /// Render the header and rows, one newline-terminated line each.
    pub fn render(&self) -> String {
        let mut output = self.render_row(&self.headers);

        for row in &self.rows {
            output.push_str(&self.render_row(row));
        }

        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::new();
        let last = self.column_widths.len().saturating_sub(1);

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            s.push_str(cell);
            if i < last {
                let fill = width - measure_text_width(cell) + COLUMN_PADDING;
                s.push_str(&" ".repeat(fill));
            }
        }

        s.push('\n');
        s
    }
}

/// Flatten a cell onto one line: tabs, newlines, and other control
/// characters each become a single space.
fn clean_cell(cell: &str) -> String {
    cell.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
