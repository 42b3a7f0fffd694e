//! `drawkit_samples` v1:
//! Sample roster and vocabulary spreadsheet generators.
//!
//! Module layout:
//! - `conf`    : schemas, file names and console constants
//! - `spec`    : records, tables and errors
//! - `dataset` : embedded sample data and TOML loading
//! - `export`  : single-file workbook export (`xlsx` feature)
//! - `console` : generator flows and console lines
//! - `cli`     : command-line arguments
//! - `logging` : tracing subscriber setup
pub mod cli;
pub mod conf;
pub mod console;
pub mod dataset;
pub mod export;
pub mod logging;
pub mod spec;

pub use export::write_table_xlsx;
pub use spec::{
    EnumRecord, EnumTableSchema, EnumTagsValue, SampleError, SpecRoster, SpecSampleTable,
    SpecVocabularyEntry, SpecWriteSummary,
};
