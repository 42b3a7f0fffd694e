//! Records, table schemas and error types of the sample generators.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conf::{
    C_HEADER_ROSTER, C_HEADER_WORD, C_TAG_SEPARATOR, N_WIDTH_ROSTER, N_WIDTH_WORD,
    TUP_COLUMNS_EXTENDED,
};

////////////////////////////////////////////////////////////////////////////////
// #region Records

/// Tags of a vocabulary entry: one label or an ordered list of labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumTagsValue {
    /// Scalar label, written unchanged.
    One(String),
    /// Ordered labels; null elements are skipped when folded.
    Many(Vec<Option<String>>),
}

impl EnumTagsValue {
    /// Fold into the text of one cell; `None` means a blank cell.
    pub fn fold(&self, separator: &str) -> Option<String> {
        match self {
            Self::One(val) => Some(val.clone()),
            Self::Many(l_items) => {
                let l_present: Vec<&str> = l_items.iter().flatten().map(String::as_str).collect();
                if l_present.is_empty() {
                    None
                } else {
                    Some(l_present.join(separator))
                }
            }
        }
    }
}

/// One enriched vocabulary word.
///
/// Only `word` is conventionally filled; every other field may be absent and
/// is then written as a blank cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecVocabularyEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub tags: Option<EnumTagsValue>,
    #[serde(default, alias = "imagePath")]
    pub image: Option<String>,
}

impl SpecVocabularyEntry {
    /// Entry with only the identifying word set.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    /// Cells in extended column order.
    pub fn to_row(&self) -> Vec<Option<String>> {
        vec![
            Some(self.word.clone()),
            self.phonetic.clone(),
            self.definition.clone(),
            self.example.clone(),
            self.tags.as_ref().and_then(|tags| tags.fold(C_TAG_SEPARATOR)),
            self.image.clone(),
        ]
    }
}

/// One record rendered as one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumRecord {
    /// Roster name or bare word.
    Text(String),
    /// Structured vocabulary entry.
    Entry(SpecVocabularyEntry),
}

impl From<&str> for EnumRecord {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<SpecVocabularyEntry> for EnumRecord {
    fn from(value: SpecVocabularyEntry) -> Self {
        Self::Entry(value)
    }
}

/// One class and its student names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRoster {
    pub class_name: String,
    pub names: Vec<String>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Tables

/// Fixed column layouts of the generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumTableSchema {
    /// Single `姓名` column.
    Roster,
    /// Single `单词` column.
    WordList,
    /// Six vocabulary columns starting with `单词`.
    Extended,
}

impl EnumTableSchema {
    /// Ordered `(label, width)` pairs.
    pub fn columns(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::Roster => vec![(C_HEADER_ROSTER, N_WIDTH_ROSTER)],
            Self::WordList => vec![(C_HEADER_WORD, N_WIDTH_WORD)],
            Self::Extended => TUP_COLUMNS_EXTENDED.to_vec(),
        }
    }

    fn derive_row(&self, record: &EnumRecord) -> Vec<Option<String>> {
        match (self, record) {
            (Self::Roster | Self::WordList, EnumRecord::Text(val)) => vec![Some(val.clone())],
            (Self::Roster | Self::WordList, EnumRecord::Entry(entry)) => {
                vec![Some(entry.word.clone())]
            }
            (Self::Extended, EnumRecord::Text(val)) => {
                let mut l_row = vec![None; TUP_COLUMNS_EXTENDED.len()];
                l_row[0] = Some(val.clone());
                l_row
            }
            (Self::Extended, EnumRecord::Entry(entry)) => entry.to_row(),
        }
    }
}

/// Header, rows and width hints of one output sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecSampleTable {
    header: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    column_widths: BTreeMap<usize, f64>,
    sheet_name: Option<String>,
}

impl SpecSampleTable {
    /// Empty table with the given header.
    ///
    /// Labels must be non-empty and unique; every later row must have exactly
    /// one field per label.
    pub fn new(
        header: Vec<String>,
        column_widths: BTreeMap<usize, f64>,
    ) -> Result<Self, SampleError> {
        if header.is_empty() {
            return Err(SampleError::InvalidTable(
                "Header must have at least one label.".to_string(),
            ));
        }
        if header.iter().any(|c_label| c_label.trim().is_empty()) {
            return Err(SampleError::InvalidTable(format!(
                "Header labels must be non-empty: {header:?}"
            )));
        }
        if header.iter().collect::<BTreeSet<_>>().len() != header.len() {
            return Err(SampleError::InvalidTable(format!(
                "Header labels must be unique: {header:?}"
            )));
        }
        if let Some(n_idx) = column_widths.keys().find(|n_idx| **n_idx >= header.len()) {
            return Err(SampleError::InvalidTable(format!(
                "Width hint for column {n_idx} but header has {} labels.",
                header.len()
            )));
        }
        Ok(Self {
            header,
            rows: Vec::new(),
            column_widths,
            sheet_name: None,
        })
    }

    /// Build a table of `schema` with one row per record, in order.
    pub fn from_records<'a, I>(schema: EnumTableSchema, records: I) -> Result<Self, SampleError>
    where
        I: IntoIterator<Item = &'a EnumRecord>,
    {
        let l_columns = schema.columns();
        let mut table = Self::new(
            l_columns.iter().map(|(c_label, _)| c_label.to_string()).collect(),
            l_columns
                .iter()
                .enumerate()
                .map(|(n_idx, (_, n_width))| (n_idx, *n_width))
                .collect(),
        )?;
        for record in records {
            table.push_row(schema.derive_row(record))?;
        }
        Ok(table)
    }

    /// Append one row in header order.
    pub fn push_row(&mut self, row: Vec<Option<String>>) -> Result<(), SampleError> {
        if row.len() != self.header.len() {
            return Err(SampleError::InvalidTable(format!(
                "Row {} has {} fields but header has {} labels.",
                self.rows.len(),
                row.len(),
                self.header.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Rename the sheet; the default is `Sheet1`.
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = Some(sheet_name.into());
        self
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn column_widths(&self) -> &BTreeMap<usize, f64> {
        &self.column_widths
    }

    pub fn sheet_name(&self) -> Option<&str> {
        self.sheet_name.as_deref()
    }

    /// Values of one column in row order.
    pub fn column_values(&self, n_idx_col: usize) -> Vec<Option<String>> {
        self.rows
            .iter()
            .map(|l_row| l_row.get(n_idx_col).cloned().flatten())
            .collect()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Outcome

/// Outcome of one written file.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecWriteSummary {
    /// File that was written.
    pub path: PathBuf,
    /// Data rows below the header.
    pub n_rows_data: usize,
    /// Non-fatal warnings, e.g. repeated identifiers.
    pub warnings: Vec<String>,
}

impl fmt::Display for SpecWriteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows={} warnings={}",
            self.path.display(),
            self.n_rows_data + 1,
            self.warnings.len()
        )
    }
}

/// Failures of the sample generators.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Spreadsheet backend was compiled out.
    #[error("Missing dependency {name}; install with: {install_hint}")]
    MissingDependency {
        /// Backend name.
        name: String,
        /// Command that makes the backend available.
        install_hint: String,
    },
    /// Header or row shape is inconsistent.
    #[error("{0}")]
    InvalidTable(String),
    /// Vocabulary dataset file could not be read or parsed.
    #[error("Failed to load dataset {}: {message}", .path.display())]
    DatasetLoad {
        /// Dataset file.
        path: PathBuf,
        /// Underlying error text.
        message: String,
    },
    /// Workbook could not be written.
    #[cfg(feature = "xlsx")]
    #[error(transparent)]
    Xlsx(#[from] drawkit_io_xlsx::XlsxWriteError),
    /// Console output failed.
    #[error("console output error: {0}")]
    Output(#[from] std::io::Error),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
