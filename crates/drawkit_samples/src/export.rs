//! Single-file table export.
//!
//! The spreadsheet backend is the `xlsx` cargo feature. Builds without it keep
//! the same entry point and report [`SampleError::MissingDependency`]; run
//! `cargo test -p drawkit_samples --no-default-features` to exercise that build.

use std::path::Path;

use crate::conf::{C_BACKEND_INSTALL_HINT, C_BACKEND_NAME};
use crate::spec::{SampleError, SpecSampleTable, SpecWriteSummary};

/// Error reported when the spreadsheet backend is compiled out.
pub fn derive_missing_backend_error() -> SampleError {
    SampleError::MissingDependency {
        name: C_BACKEND_NAME.to_string(),
        install_hint: C_BACKEND_INSTALL_HINT.to_string(),
    }
}

#[cfg(feature = "xlsx")]
mod backend {
    use std::path::Path;

    use drawkit_io_xlsx::{SpecXlsxSheetWriteOptions, XlsxWriteError, XlsxWriter};
    use polars::prelude::{Column, DataFrame, NamedFrom, Series};
    use tracing::info;

    use crate::spec::{SampleError, SpecSampleTable, SpecWriteSummary};

    fn derive_dataframe(table: &SpecSampleTable) -> Result<DataFrame, SampleError> {
        let l_columns: Vec<Column> = table
            .header()
            .iter()
            .enumerate()
            .map(|(n_idx_col, c_label)| {
                Column::from(Series::new(
                    c_label.as_str().into(),
                    table.column_values(n_idx_col),
                ))
            })
            .collect();
        Ok(DataFrame::new(l_columns).map_err(XlsxWriteError::from)?)
    }

    pub(super) fn write(
        table: &SpecSampleTable,
        path_file_out: &Path,
    ) -> Result<SpecWriteSummary, SampleError> {
        let df_table = derive_dataframe(table)?;
        let options = SpecXlsxSheetWriteOptions {
            sheet_name: table.sheet_name().map(ToString::to_string),
            column_widths: table.column_widths().clone(),
            col_identifier: Some(0),
            ..Default::default()
        };

        let mut writer = XlsxWriter::with_defaults(path_file_out);
        let report = writer.write_sheet(&df_table, &options)?;
        writer.close()?;

        info!(path = %path_file_out.display(), "{report}");

        Ok(SpecWriteSummary {
            path: writer.file_out().to_path_buf(),
            n_rows_data: report.n_rows_data,
            warnings: report.warnings,
        })
    }
}

/// Write `table` as a single-sheet workbook at `path_file_out`.
///
/// Row 1 is the bold header; rows 2..N+1 hold the records. The parent
/// directory is created when missing and an existing file is replaced whole.
#[cfg(feature = "xlsx")]
pub fn write_table_xlsx(
    table: &SpecSampleTable,
    path_file_out: &Path,
) -> Result<SpecWriteSummary, SampleError> {
    backend::write(table, path_file_out)
}

/// Write `table` as a single-sheet workbook at `path_file_out`.
///
/// This build has no spreadsheet backend; nothing is written.
#[cfg(not(feature = "xlsx"))]
pub fn write_table_xlsx(
    _table: &SpecSampleTable,
    _path_file_out: &Path,
) -> Result<SpecWriteSummary, SampleError> {
    Err(derive_missing_backend_error())
}


#[cfg(all(test, not(feature = "xlsx")))]
mod tests_without_backend {
    use std::collections::BTreeMap;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_backend_writes_nothing() {
        let tmp = TempDir::new().expect("tmp");
        let path_out = tmp.path().join("data").join("out.xlsx");
        let table = SpecSampleTable::new(vec!["单词".to_string()], BTreeMap::new()).expect("table");

        let err = write_table_xlsx(&table, &path_out).unwrap_err();
        assert!(matches!(err, SampleError::MissingDependency { .. }));
        assert!(!tmp.path().join("data").exists());
    }
}

#[cfg(test)]
mod tests_missing_backend {
    use super::*;

    #[test]
    fn missing_backend_error_names_backend_and_install_hint() {
        match derive_missing_backend_error() {
            SampleError::MissingDependency { name, install_hint } => {
                assert_eq!(name, "rust_xlsxwriter");
                assert!(install_hint.contains("--features xlsx"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
