//! Table rendering utilities for CLI outputs.

use crate::utils::colors::RESET;

pub struct Column {
    pub header: String,
    pub width: usize,
    /// Upper bound for the column; longer cells are cut with "…".
    pub max_width: Option<usize>,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: header.chars().count(),
            max_width: None,
        }
    }

    pub fn max(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    /// Optional ANSI color applied to the whole line of each row.
    row_colors: Vec<Option<&'static str>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            row_colors: Vec::new(),
        }
    }

    /// Add a row, widening columns to fit it (up to their maximum).
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            let len = cell.chars().count();
            let len = col.max_width.map_or(len, |m| len.min(m));
            col.width = col.width.max(len);
        }
        self.rows.push(row);
        self.row_colors.push(None);
    }

    pub fn add_colored_row(&mut self, row: Vec<String>, color: &'static str) {
        self.add_row(row);
        if let Some(last) = self.row_colors.last_mut() {
            *last = Some(color);
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&format!("{} ", "-".repeat(col.width)));
        }
        out.push('\n');

        // Rows
        for (row, color) in self.rows.iter().zip(&self.row_colors) {
            if let Some(c) = color {
                out.push_str(c);
            }
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&format!("{:<width$} ", fit(cell, col.width), width = col.width));
            }
            if color.is_some() {
                out.push_str(RESET);
            }
            out.push('\n');
        }

        out
    }
}

fn fit(cell: &str, width: usize) -> String {
    if cell.chars().count() <= width {
        return cell.to_string();
    }
    let mut s: String = cell.chars().take(width.saturating_sub(1)).collect();
    s.push('…');
    s
}
