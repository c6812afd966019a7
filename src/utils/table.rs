//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
    pub right: bool,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            right: false,
        }
    }

    /// Right-aligned column, for amounts and counts
    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            right: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.push_line(&mut out, &header);

        let total_width: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"-".repeat(total_width.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            self.push_line(&mut out, row);
        }

        out
    }

    fn push_line(&self, out: &mut String, cells: &[String]) {
        let mut line = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            if col.right {
                line.push_str(&format!("{:>width$} ", cell, width = col.width));
            } else {
                line.push_str(&format!("{:<width$} ", cell, width = col.width));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}
