//! Output formatting helpers for human-readable and JSON output.

use mappath::doc::Value;

use crate::cli::OutputArg;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Human => OutputFormat::Human,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// Renders one value.
///
/// Human output prints strings bare and containers as JSON so they stay
/// unambiguous.
pub fn render(value: &Value, format: OutputFormat) -> Result<String, serde_json::Error> {
    match (format, value) {
        (OutputFormat::Human, Value::Map(_) | Value::List(_)) => serde_json::to_string_pretty(value),
        (OutputFormat::Human, scalar) => Ok(scalar.to_string()),
        (OutputFormat::Json, _) => serde_json::to_string(value),
    }
}

/// Format a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length. Returns no
/// lines when there are no rows.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }

    // Calculate column widths (max of header and all row values)
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(align_row(headers.iter().copied(), &widths));
    for row in rows {
        lines.push(align_row(row.iter().map(String::as_str), &widths));
    }
    lines
}

fn align_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
