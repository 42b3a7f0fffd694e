//! Shared XLSX specification models and error types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Excel number format code, e.g. `@` for text.
    pub num_format: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            num_format: other
                .num_format
                .clone()
                .or_else(|| self.num_format.clone()),
        }
    }
}

/// Normalized cell value during conversion/write pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumCellValue {
    /// Missing/blank value.
    None,
    /// Text value.
    String(String),
}

impl EnumCellValue {
    /// Build from optional text; `None` stays blank.
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            Some(val) => Self::String(val.to_string()),
            None => Self::None,
        }
    }

    /// Display text, empty for blank cells.
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "",
            Self::String(val) => val,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Autofit rule for columns that carry no explicit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumAutofitColumnsRule {
    /// Leave the column at Excel's default width.
    None,
    /// Infer width from header cells only (default).
    #[default]
    Header,
    /// Infer width from body cells only.
    Body,
    /// Infer width from both header and body cells.
    All,
}

/// Autofit policy for per-sheet write call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecAutofitCellsPolicy {
    /// Autofit width inference rule.
    pub rule_columns: EnumAutofitColumnsRule,
    /// Max body rows inspected when body-based inference is active.
    pub height_body_inferred_max: Option<usize>,
    /// Minimum final width.
    pub width_cell_min: usize,
    /// Maximum final width.
    pub width_cell_max: usize,
    /// Width padding added after inference.
    pub width_cell_padding: usize,
}

impl Default for SpecAutofitCellsPolicy {
    fn default() -> Self {
        Self {
            rule_columns: EnumAutofitColumnsRule::Header,
            height_body_inferred_max: Some(20_000),
            width_cell_min: 8,
            width_cell_max: 60,
            width_cell_padding: 2,
        }
    }
}

/// Writer-wide options controlling output handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxWriteOptions {
    /// Create the destination directory on close when it does not exist.
    pub if_create_parent_dir: bool,
}

impl Default for SpecXlsxWriteOptions {
    fn default() -> Self {
        Self {
            if_create_parent_dir: true,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-write call report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecXlsxReport {
    /// Actual unique sheet name in workbook.
    pub sheet_name: String,
    /// Number of data rows written below the header.
    pub n_rows_data: usize,
    /// Number of columns written.
    pub n_cols: usize,
    /// Final width applied per column; `None` keeps Excel's default.
    pub widths_by_col: Vec<Option<f64>>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }

    /// Header row plus data rows.
    pub fn n_rows_total(&self) -> usize {
        self.n_rows_data + 1
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} sheet={} rows={} cols={} warnings={}",
            self.sheet_name,
            self.n_rows_total(),
            self.n_cols,
            self.warnings.len()
        )
    }
}

impl fmt::Display for SpecXlsxReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[XLSX]"))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Failures raised by [`crate::writer::XlsxWriter`].
#[derive(Debug, Error)]
pub enum XlsxWriteError {
    /// Table shape or header labels are unusable.
    #[error("{0}")]
    InvalidTable(String),
    /// Autofit or width options are out of range.
    #[error("{0}")]
    InvalidPolicy(String),
    /// Table does not fit in one Excel worksheet.
    #[error("Excel limit exceeded: {rows} rows x {cols} columns does not fit one worksheet")]
    RowLimitExceeded {
        /// Total rows including the header.
        rows: usize,
        /// Total columns.
        cols: usize,
    },
    /// Write attempted after the workbook was flushed.
    #[error("Cannot write after close().")]
    WriterClosed,
    /// Underlying workbook serializer failed.
    #[error("xlsx write error: {0}")]
    Backend(#[from] rust_xlsxwriter::XlsxError),
    /// In-memory frame access failed.
    #[error("frame access error: {0}")]
    Frame(#[from] polars::prelude::PolarsError),
    /// Destination directory could not be prepared.
    #[error("Failed to initialize destination {}: {message}", .path.display())]
    DestinationInitFailed {
        /// Directory that failed initialization.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Destination file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        /// File being written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_right_side_values() {
        let fmt_base = SpecCellFormat {
            num_format: Some("@".to_string()),
            bold: Some(false),
            ..Default::default()
        };
        let fmt_merged = fmt_base.with_(SpecCellFormat {
            bold: Some(true),
            font_size: Some(12),
            ..Default::default()
        });

        assert_eq!(fmt_merged.num_format.as_deref(), Some("@"));
        assert_eq!(fmt_merged.bold, Some(true));
        assert_eq!(fmt_merged.font_size, Some(12));
    }

    #[test]
    fn report_format_counts_header_row() {
        let mut report = SpecXlsxReport {
            sheet_name: "Sheet1".to_string(),
            n_rows_data: 2,
            n_cols: 1,
            widths_by_col: vec![Some(15.0)],
            warnings: vec![],
        };
        report.warn("Duplicate identifier");

        assert_eq!(
            report.to_string(),
            "[XLSX] sheet=Sheet1 rows=3 cols=1 warnings=1"
        );
    }
}
