//! XLSX writer kernel that converts an in-memory frame into workbook output.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::{AnyValue, Column, DataFrame};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::{debug, info, warn};

use crate::conf::{
    EnumFmtKey, N_LEN_EXCEL_SHEET_NAME_MAX, N_WIDTH_EXCEL_COLUMN_MAX,
    derive_default_xlsx_format, derive_default_xlsx_write_options,
};
use crate::spec::{
    EnumAutofitColumnsRule, EnumCellValue, SpecAutofitCellsPolicy, SpecCellFormat,
    SpecXlsxReport, SpecXlsxWriteOptions, XlsxWriteError,
};
use crate::util::{
    collect_identifier_warnings, sanitize_sheet_name, validate_sheet_extent,
    validate_unique_columns,
};

/// Per-sheet call options.
#[derive(Default, Debug, Clone)]
pub struct SpecXlsxSheetWriteOptions {
    /// Sheet name; `None` keeps the default `Sheet<n>` naming.
    pub sheet_name: Option<String>,
    /// Explicit display widths by zero-based column index.
    pub column_widths: BTreeMap<usize, f64>,
    /// Column whose values identify a row; blank/repeated values are reported.
    pub col_identifier: Option<usize>,
    /// Autofit policy for columns without an explicit width.
    pub policy_autofit: SpecAutofitCellsPolicy,
}

/// Stateful workbook writer.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    fmt_text: SpecCellFormat,
    fmt_header: SpecCellFormat,
    write_options: SpecXlsxWriteOptions,
    set_sheet_names_existing: BTreeSet<String>,
    l_reports: Vec<SpecXlsxReport>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path and format/options presets.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called,
    /// so nothing touches the destination before then. Blank body cells are
    /// only stored when `fmt_text` carries some formatting, as the default
    /// preset does.
    pub fn new(
        path_file_out: PathBuf,
        fmt_text: SpecCellFormat,
        fmt_header: SpecCellFormat,
        write_options: SpecXlsxWriteOptions,
    ) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            fmt_text,
            fmt_header,
            write_options,
            set_sheet_names_existing: BTreeSet::new(),
            l_reports: Vec::new(),
            if_closed: false,
        }
    }

    /// Create writer with the default presets from [`crate::conf`].
    pub fn with_defaults(path_file_out: impl Into<PathBuf>) -> Self {
        Self::new(
            path_file_out.into(),
            derive_default_xlsx_format(EnumFmtKey::Text),
            derive_default_xlsx_format(EnumFmtKey::Header),
            derive_default_xlsx_write_options(),
        )
    }

    /// Return output file path.
    pub fn file_out(&self) -> &Path {
        &self.path_file_out
    }

    /// Return immutable snapshot of per-sheet write reports.
    pub fn report(&self) -> Vec<SpecXlsxReport> {
        self.l_reports.clone()
    }

    /// Flush workbook to disk. Idempotent.
    ///
    /// The serialized workbook is staged next to the destination and renamed
    /// over it, so an existing file is either fully replaced or left intact.
    pub fn close(&mut self) -> Result<(), XlsxWriteError> {
        if self.if_closed {
            return Ok(());
        }
        let v_buf = self.workbook.save_to_buffer()?;

        if self.write_options.if_create_parent_dir {
            prepare_parent_dir(&self.path_file_out)?;
        }
        write_file_replacing(&self.path_file_out, &v_buf)?;

        self.if_closed = true;
        info!(
            path = %self.path_file_out.display(),
            bytes = v_buf.len(),
            sheets = self.l_reports.len(),
            "workbook saved"
        );
        Ok(())
    }

    /// Write one sheet from an in-memory frame.
    ///
    /// Column names become the bold header row; each frame row becomes one
    /// worksheet row below it. Every cell is converted before the worksheet is
    /// created, so a failing conversion leaves the workbook untouched.
    pub fn write_sheet(
        &mut self,
        df_data: &DataFrame,
        options: &SpecXlsxSheetWriteOptions,
    ) -> Result<SpecXlsxReport, XlsxWriteError> {
        if self.if_closed {
            return Err(XlsxWriteError::WriterClosed);
        }
        validate_policy_autofit(&options.policy_autofit)?;

        let l_colnames_df: Vec<String> = df_data
            .get_column_names_str()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        validate_unique_columns(&l_colnames_df)?;

        let n_width_df = l_colnames_df.len();
        let n_height_df = df_data.height();
        validate_sheet_extent(n_height_df, n_width_df)?;
        validate_column_widths(&options.column_widths, n_width_df)?;

        let mut l_values_by_col = Vec::with_capacity(n_width_df);
        for col in df_data.get_columns() {
            l_values_by_col.push(derive_column_values(col)?);
        }

        let mut report = SpecXlsxReport {
            n_rows_data: n_height_df,
            n_cols: n_width_df,
            ..Default::default()
        };

        if let Some(n_idx_col_identifier) = options.col_identifier {
            let Some(l_values_identifier) = l_values_by_col.get(n_idx_col_identifier) else {
                return Err(XlsxWriteError::InvalidTable(format!(
                    "col_identifier={n_idx_col_identifier} is out of range for {n_width_df} columns."
                )));
            };
            for c_warning in collect_identifier_warnings(
                &l_colnames_df[n_idx_col_identifier],
                l_values_identifier,
            ) {
                warn!(warning = %c_warning, "identifier check");
                report.warn(c_warning);
            }
        }

        let l_widths_by_col = plan_column_widths(
            &l_colnames_df,
            &l_values_by_col,
            &options.column_widths,
            &options.policy_autofit,
        );

        let sheet_name_requested = match &options.sheet_name {
            Some(name) => sanitize_sheet_name(name, "_"),
            None => format!("Sheet{}", self.l_reports.len() + 1),
        };
        let sheet_name_unique = self.derive_unique_sheet_name(&sheet_name_requested);

        let fmt_header = derive_rust_xlsx_format(&self.fmt_header);
        let fmt_text = derive_rust_xlsx_format(&self.fmt_text);

        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&sheet_name_unique)?;

        write_header(worksheet, &l_colnames_df, &fmt_header)?;
        for (n_idx_col, l_values) in l_values_by_col.iter().enumerate() {
            for (n_idx_row, value) in l_values.iter().enumerate() {
                write_cell_with_format(worksheet, n_idx_row + 1, n_idx_col, value, &fmt_text)?;
            }
        }
        for (n_idx_col, width) in l_widths_by_col.iter().enumerate() {
            if let Some(n_width) = width {
                worksheet.set_column_width(cast_col_num(n_idx_col)?, *n_width)?;
            }
        }

        debug!(
            sheet = %sheet_name_unique,
            rows = n_height_df,
            cols = n_width_df,
            widths = ?l_widths_by_col,
            "sheet written"
        );

        report.sheet_name = sheet_name_unique;
        report.widths_by_col = l_widths_by_col;
        self.l_reports.push(report.clone());
        Ok(report)
    }

    fn derive_unique_sheet_name(&mut self, name: &str) -> String {
        if !self.set_sheet_names_existing.contains(name) {
            self.set_sheet_names_existing.insert(name.to_string());
            return name.to_string();
        }

        let base_name: String = name
            .chars()
            .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
            .collect();

        let mut n_idx = 2usize;
        loop {
            let candidate: String = format!("{base_name}__{n_idx}")
                .chars()
                .take(N_LEN_EXCEL_SHEET_NAME_MAX)
                .collect();
            if !self.set_sheet_names_existing.contains(&candidate) {
                self.set_sheet_names_existing.insert(candidate.clone());
                return candidate;
            }
            n_idx += 1;
        }
    }
}

/// Estimate displayed width units for one normalized cell value.
///
/// Used by autofit inference logic.
pub fn estimate_width_len(value: &EnumCellValue) -> usize {
    match value {
        EnumCellValue::None => 0,
        EnumCellValue::String(s) => estimate_unicode_string_width(s),
    }
}

fn estimate_unicode_string_width(s: &str) -> usize {
    let n_ascii = s.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = s.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}

/// Resolve the final width of every column.
///
/// Explicit widths win; remaining columns follow the autofit policy, and
/// `EnumAutofitColumnsRule::None` leaves them at Excel's default (`None`).
pub fn plan_column_widths(
    colnames: &[String],
    values_by_col: &[Vec<EnumCellValue>],
    column_widths: &BTreeMap<usize, f64>,
    policy_autofit: &SpecAutofitCellsPolicy,
) -> Vec<Option<f64>> {
    let n_min = usize::max(1, policy_autofit.width_cell_min);
    let n_max = usize::min(
        N_WIDTH_EXCEL_COLUMN_MAX as usize,
        usize::max(n_min, policy_autofit.width_cell_max),
    );
    let n_pad = policy_autofit.width_cell_padding;
    let n_rows_inspected_max = policy_autofit.height_body_inferred_max.unwrap_or(usize::MAX);

    colnames
        .iter()
        .enumerate()
        .map(|(n_idx_col, c_name)| {
            if let Some(n_width) = column_widths.get(&n_idx_col) {
                return Some(*n_width);
            }

            let n_width_header = estimate_unicode_string_width(c_name);
            let n_width_body = values_by_col
                .get(n_idx_col)
                .map(|l_values| {
                    l_values
                        .iter()
                        .take(n_rows_inspected_max)
                        .map(estimate_width_len)
                        .max()
                        .unwrap_or(0)
                })
                .unwrap_or(0);

            let n_width_recorded = match policy_autofit.rule_columns {
                EnumAutofitColumnsRule::None => return None,
                EnumAutofitColumnsRule::Header => n_width_header,
                EnumAutofitColumnsRule::Body => n_width_body,
                EnumAutofitColumnsRule::All => usize::max(n_width_header, n_width_body),
            };
            Some(usize::min(n_max, usize::max(n_min, n_width_recorded + n_pad)) as f64)
        })
        .collect()
}

fn validate_policy_autofit(policy_autofit: &SpecAutofitCellsPolicy) -> Result<(), XlsxWriteError> {
    if policy_autofit.width_cell_min == 0 {
        return Err(XlsxWriteError::InvalidPolicy(
            "policy_autofit.width_cell_min must be >= 1.".to_string(),
        ));
    }
    if policy_autofit.width_cell_max < policy_autofit.width_cell_min {
        return Err(XlsxWriteError::InvalidPolicy(
            "policy_autofit.width_cell_max must be >= policy_autofit.width_cell_min.".to_string(),
        ));
    }
    Ok(())
}

fn validate_column_widths(
    column_widths: &BTreeMap<usize, f64>,
    width_df: usize,
) -> Result<(), XlsxWriteError> {
    for (n_idx_col, n_width) in column_widths {
        if *n_idx_col >= width_df {
            return Err(XlsxWriteError::InvalidPolicy(format!(
                "column_widths has index {n_idx_col} but the table has {width_df} columns."
            )));
        }
        if !n_width.is_finite() || *n_width <= 0.0 || *n_width > N_WIDTH_EXCEL_COLUMN_MAX {
            return Err(XlsxWriteError::InvalidPolicy(format!(
                "column_widths[{n_idx_col}]={n_width} must be in (0, {N_WIDTH_EXCEL_COLUMN_MAX}]."
            )));
        }
    }
    Ok(())
}

fn derive_column_values(col: &Column) -> Result<Vec<EnumCellValue>, XlsxWriteError> {
    let mut l_values = Vec::with_capacity(col.len());
    for n_idx_row in 0..col.len() {
        l_values.push(EnumCellValue::from_option(
            derive_text_from_any_value(col.get(n_idx_row)?).as_deref(),
        ));
    }
    Ok(l_values)
}

fn derive_text_from_any_value(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(val) => Some(val.to_string()),
        AnyValue::StringOwned(val) => Some(val.to_string()),
        AnyValue::Boolean(val) => Some(if val { "True" } else { "False" }.to_string()),
        other => Some(other.to_string()),
    }
}

fn write_header(
    worksheet: &mut Worksheet,
    colnames: &[String],
    fmt_header: &Format,
) -> Result<(), XlsxWriteError> {
    for (col_idx, cell_value) in colnames.iter().enumerate() {
        if cell_value.is_empty() {
            worksheet.write_blank(0, cast_col_num(col_idx)?, fmt_header)?;
        } else {
            worksheet.write_string_with_format(0, cast_col_num(col_idx)?, cell_value, fmt_header)?;
        }
    }
    Ok(())
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: &Format,
) -> Result<(), XlsxWriteError> {
    match value {
        EnumCellValue::String(val) if !val.is_empty() => {
            worksheet.write_string_with_format(
                cast_row_num(row_idx)?,
                cast_col_num(col_idx)?,
                val,
                format,
            )?;
        }
        _ => {
            worksheet.write_blank(cast_row_num(row_idx)?, cast_col_num(col_idx)?, format)?;
        }
    }
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.as_str());
    }

    format
}

fn prepare_parent_dir(path_file_out: &Path) -> Result<(), XlsxWriteError> {
    let Some(path_dir_parent) = path_file_out
        .parent()
        .filter(|path| !path.as_os_str().is_empty())
    else {
        return Ok(());
    };
    fs::create_dir_all(path_dir_parent).map_err(|err| XlsxWriteError::DestinationInitFailed {
        path: path_dir_parent.to_path_buf(),
        message: err.to_string(),
    })
}

fn write_file_replacing(path_file_out: &Path, v_buf: &[u8]) -> Result<(), XlsxWriteError> {
    let path_file_staging = derive_staging_path(path_file_out);
    if let Err(err) = fs::write(&path_file_staging, v_buf) {
        let _ = fs::remove_file(&path_file_staging);
        return Err(XlsxWriteError::Io {
            path: path_file_staging,
            source: err,
        });
    }
    if let Err(err) = fs::rename(&path_file_staging, path_file_out) {
        let _ = fs::remove_file(&path_file_staging);
        return Err(XlsxWriteError::Io {
            path: path_file_out.to_path_buf(),
            source: err,
        });
    }
    Ok(())
}

fn derive_staging_path(path_file_out: &Path) -> PathBuf {
    let c_name = path_file_out
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "workbook.xlsx".to_string());
    path_file_out.with_file_name(format!(".{c_name}.partial"))
}

fn cast_row_num(value: usize) -> Result<u32, XlsxWriteError> {
    u32::try_from(value)
        .map_err(|_| XlsxWriteError::InvalidTable(format!("row index overflow: {value}")))
}

fn cast_col_num(value: usize) -> Result<u16, XlsxWriteError> {
    u16::try_from(value)
        .map_err(|_| XlsxWriteError::InvalidTable(format!("column index overflow: {value}")))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use polars::prelude::{Column, DataFrame, NamedFrom, Series};
    use tempfile::TempDir;

    use super::*;

    fn build_frame(l_cols: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
        DataFrame::new(
            l_cols
                .into_iter()
                .map(|(name, values)| Column::from(Series::new(name.into(), values)))
                .collect(),
        )
        .expect("frame")
    }

    fn read_grid(path: &Path) -> Vec<Vec<String>> {
        let book = umya_spreadsheet::reader::xlsx::read(path).expect("read xlsx");
        let sheet = book.get_sheet(&0).expect("first sheet");
        let n_rows = sheet.get_highest_row();
        let n_cols = sheet.get_highest_column();
        (1..=n_rows)
            .map(|n_row| {
                (1..=n_cols)
                    .map(|n_col| sheet.get_value((n_col, n_row)))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn write_sheet_writes_header_and_rows_in_order() {
        let tmp = TempDir::new().expect("tmp");
        let path_out = tmp.path().join("roster.xlsx");

        let df = build_frame(vec![("姓名", vec![Some("张三"), Some("李四")])]);
        let mut writer = XlsxWriter::with_defaults(&path_out);
        let report = writer
            .write_sheet(&df, &SpecXlsxSheetWriteOptions::default())
            .expect("write sheet");
        writer.close().expect("close");

        assert_eq!(report.sheet_name, "Sheet1");
        assert_eq!(report.n_rows_total(), 3);
        assert_eq!(
            read_grid(&path_out),
            vec![
                vec!["姓名".to_string()],
                vec!["张三".to_string()],
                vec!["李四".to_string()],
            ]
        );
    }

    #[test]
    fn write_sheet_header_is_bold_and_width_hint_applied() {
        let tmp = TempDir::new().expect("tmp");
        let path_out = tmp.path().join("words.xlsx");

        let df = build_frame(vec![("单词", vec![Some("apple")])]);
        let mut writer = XlsxWriter::with_defaults(&path_out);
        writer
            .write_sheet(
                &df,
                &SpecXlsxSheetWriteOptions {
                    column_widths: BTreeMap::from([(0, 20.0)]),
                    ..Default::default()
                },
            )
            .expect("write sheet");
        writer.close().expect("close");

        let book = umya_spreadsheet::reader::xlsx::read(&path_out).expect("read xlsx");
        let sheet = book.get_sheet(&0).expect("first sheet");
        let cell_header = sheet.get_cell("A1").expect("header cell");
        let font = cell_header.get_style().get_font().expect("header font");
        let if_bold: bool = font.get_bold().clone();
        assert!(if_bold);

        let column = sheet.get_column_dimension("A").expect("column A");
        let n_width: f64 = column.get_width().clone();
        assert!((n_width - 20.0).abs() < 1.0, "width was {n_width}");
    }

    #[test]
    fn write_sheet_missing_values_are_blank() {
        let tmp = TempDir::new().expect("tmp");
        let path_out = tmp.path().join("vocab.xlsx");

        let df = build_frame(vec![
            ("单词", vec![Some("apple"), Some("pear")]),
            ("音标", vec![Some(""), None]),
            ("释义", vec![None, Some("梨")]),
        ]);
        let mut writer = XlsxWriter::with_defaults(&path_out);
        writer
            .write_sheet(&df, &SpecXlsxSheetWriteOptions::default())
            .expect("write sheet");
        writer.close().expect("close");

        let l_grid = read_grid(&path_out);
        assert_eq!(l_grid.len(), 3);
        assert_eq!(l_grid[1], vec!["apple", "", ""]);
        assert_eq!(l_grid[2], vec!["pear", "", "梨"]);
    }

    #[test]
    fn write_sheet_keeps_rows_whose_cells_are_all_blank() {
        let tmp = TempDir::new().expect("tmp");
        let path_out = tmp.path().join("blank_rows.xlsx");

        let df = build_frame(vec![("姓名", vec![Some("张三"), Some(""), None])]);
        let mut writer = XlsxWriter::with_defaults(&path_out);
        let report = writer
            .write_sheet(
                &df,
                &SpecXlsxSheetWriteOptions {
                    col_identifier: Some(0),
                    ..Default::default()
                },
            )
            .expect("write sheet");
        writer.close().expect("close");

        assert_eq!(report.warnings.len(), 1);
        assert_eq!(
            read_grid(&path_out),
            vec![
                vec!["姓名".to_string()],
                vec!["张三".to_string()],
                vec![String::new()],
                vec![String::new()],
            ]
        );
    }

    #[test]
    fn close_overwrites_existing_file() {
        let tmp = TempDir::new().expect("tmp");
        let path_out = tmp.path().join("again.xlsx");
        let df = build_frame(vec![("姓名", vec![Some("张三"), Some("李四")])]);

        for _ in 0..2 {
            let mut writer = XlsxWriter::with_defaults(&path_out);
            writer
                .write_sheet(&df, &SpecXlsxSheetWriteOptions::default())
                .expect("write sheet");
            writer.close().expect("close");
        }

        assert_eq!(read_grid(&path_out).len(), 3);
        assert!(!tmp.path().join(".again.xlsx.partial").exists());
    }

    #[test]
    fn close_creates_missing_parent_directory() {
        let tmp = TempDir::new().expect("tmp");
        let path_out = tmp.path().join("data/nested/out.xlsx");
        let df = build_frame(vec![("单词", vec![Some("cat")])]);

        let mut writer = XlsxWriter::with_defaults(&path_out);
        writer
            .write_sheet(&df, &SpecXlsxSheetWriteOptions::default())
            .expect("write sheet");
        writer.close().expect("close");
        assert!(path_out.is_file());
    }

    #[test]
    fn close_fails_when_parent_is_a_file() {
        let tmp = TempDir::new().expect("tmp");
        let path_blocker = tmp.path().join("data");
        std::fs::write(&path_blocker, b"not a dir").expect("write blocker");
        let path_out = path_blocker.join("out.xlsx");

        let df = build_frame(vec![("单词", vec![Some("cat")])]);
        let mut writer = XlsxWriter::with_defaults(&path_out);
        writer
            .write_sheet(&df, &SpecXlsxSheetWriteOptions::default())
            .expect("write sheet");

        let err = writer.close().unwrap_err();
        assert!(matches!(err, XlsxWriteError::DestinationInitFailed { .. }));
        assert!(!path_out.exists());
    }

    #[test]
    fn close_without_parent_dir_leaves_no_staging_file() {
        let tmp = TempDir::new().expect("tmp");
        let path_out = tmp.path().join("missing").join("out.xlsx");
        let df = build_frame(vec![("单词", vec![Some("cat")])]);

        let mut writer = XlsxWriter::new(
            path_out.clone(),
            derive_default_xlsx_format(EnumFmtKey::Text),
            derive_default_xlsx_format(EnumFmtKey::Header),
            SpecXlsxWriteOptions {
                if_create_parent_dir: false,
            },
        );
        writer
            .write_sheet(&df, &SpecXlsxSheetWriteOptions::default())
            .expect("write sheet");

        let err = writer.close().unwrap_err();
        assert!(matches!(err, XlsxWriteError::Io { .. }));
        assert!(!path_out.exists());
        assert!(!tmp.path().join("missing").join(".out.xlsx.partial").exists());
        assert!(!tmp.path().join("missing").exists());
    }

    #[test]
    fn write_after_close_is_rejected() {
        let tmp = TempDir::new().expect("tmp");
        let df = build_frame(vec![("单词", vec![Some("cat")])]);
        let mut writer = XlsxWriter::with_defaults(tmp.path().join("closed.xlsx"));
        writer
            .write_sheet(&df, &SpecXlsxSheetWriteOptions::default())
            .expect("write sheet");
        writer.close().expect("close");
        writer.close().expect("close is idempotent");

        let err = writer
            .write_sheet(&df, &SpecXlsxSheetWriteOptions::default())
            .unwrap_err();
        assert!(matches!(err, XlsxWriteError::WriterClosed));
    }

    #[test]
    fn write_sheet_rejects_out_of_range_width_hint() {
        let tmp = TempDir::new().expect("tmp");
        let df = build_frame(vec![("单词", vec![Some("cat")])]);
        let mut writer = XlsxWriter::with_defaults(tmp.path().join("bad.xlsx"));

        let err = writer
            .write_sheet(
                &df,
                &SpecXlsxSheetWriteOptions {
                    column_widths: BTreeMap::from([(3, 10.0)]),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, XlsxWriteError::InvalidPolicy(_)));
        assert!(writer.report().is_empty());
    }

    #[test]
    fn write_sheet_reports_identifier_warnings_without_failing() {
        let tmp = TempDir::new().expect("tmp");
        let df = build_frame(vec![("姓名", vec![Some("张三"), Some("张三"), None])]);
        let mut writer = XlsxWriter::with_defaults(tmp.path().join("dup.xlsx"));

        let report = writer
            .write_sheet(
                &df,
                &SpecXlsxSheetWriteOptions {
                    col_identifier: Some(0),
                    ..Default::default()
                },
            )
            .expect("write sheet");
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.n_rows_data, 3);
    }

    #[test]
    fn unique_sheet_names_and_sanitizing() {
        let tmp = TempDir::new().expect("tmp");
        let df = build_frame(vec![("单词", vec![Some("cat")])]);
        let mut writer = XlsxWriter::with_defaults(tmp.path().join("multi.xlsx"));
        let options = SpecXlsxSheetWriteOptions {
            sheet_name: Some("词表/一".to_string()),
            ..Default::default()
        };

        let report_first = writer.write_sheet(&df, &options).expect("first");
        let report_second = writer.write_sheet(&df, &options).expect("second");
        assert_eq!(report_first.sheet_name, "词表_一");
        assert_eq!(report_second.sheet_name, "词表_一__2");
    }

    #[test]
    fn plan_column_widths_prefers_hints_then_autofit() {
        let l_colnames = vec!["单词".to_string(), "example".to_string()];
        let l_values = vec![
            vec![EnumCellValue::String("apple".to_string())],
            vec![EnumCellValue::String("I eat an apple every day.".to_string())],
        ];
        let dict_widths = BTreeMap::from([(0, 20.0)]);

        let l_widths_header = plan_column_widths(
            &l_colnames,
            &l_values,
            &dict_widths,
            &SpecAutofitCellsPolicy::default(),
        );
        assert_eq!(l_widths_header, vec![Some(20.0), Some(9.0)]);

        let l_widths_body = plan_column_widths(
            &l_colnames,
            &l_values,
            &dict_widths,
            &SpecAutofitCellsPolicy {
                rule_columns: EnumAutofitColumnsRule::Body,
                ..Default::default()
            },
        );
        assert_eq!(l_widths_body, vec![Some(20.0), Some(27.0)]);

        let l_widths_none = plan_column_widths(
            &l_colnames,
            &l_values,
            &BTreeMap::new(),
            &SpecAutofitCellsPolicy {
                rule_columns: EnumAutofitColumnsRule::None,
                ..Default::default()
            },
        );
        assert_eq!(l_widths_none, vec![None, None]);
    }

    #[test]
    fn estimate_width_counts_cjk_wider() {
        assert_eq!(estimate_width_len(&EnumCellValue::None), 0);
        assert_eq!(
            estimate_width_len(&EnumCellValue::String("ab".to_string())),
            2
        );
        assert_eq!(
            estimate_width_len(&EnumCellValue::String("张三".to_string())),
            3
        );
    }
}
