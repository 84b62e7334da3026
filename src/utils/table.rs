//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        let columns = headers
            .into_iter()
            .map(|h| {
                let header = h.into();
                let width = header.width();
                Column { header, width }
            })
            .collect();

        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Missing trailing cells render as blanks; widths grow to fit.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.width());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            push_padded(&mut out, &col.header, col.width);
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                push_padded(&mut out, cell, col.width);
            }
            out.push('\n');
        }

        out
    }
}

/// Left-align by display width, so station names with accents or CJK
/// characters keep the columns straight.
fn push_padded(out: &mut String, s: &str, width: usize) {
    out.push_str(s);
    let pad = width.saturating_sub(s.width());
    out.extend(std::iter::repeat_n(' ', pad + 1));
}
