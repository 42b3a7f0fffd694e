//! `drawkit_io_xlsx` v1:
//! Single-file XLSX table writer used by the sample generators.
//!
//! Module layout:
//! - `conf`   : constants and default presets
//! - `spec`   : specs/models/options/errors
//! - `util`   : pure helper functions
//! - `writer` : workbook writer kernel
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_NUM_FORMAT_TEXT, EnumFmtKey, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX,
    N_NROWS_EXCEL_MAX, N_WIDTH_EXCEL_COLUMN_MAX, TUP_EXCEL_ILLEGAL, derive_default_xlsx_format,
    derive_default_xlsx_formats, derive_default_xlsx_write_options,
};
pub use spec::{
    EnumAutofitColumnsRule, EnumCellValue, SpecAutofitCellsPolicy, SpecCellFormat,
    SpecXlsxReport, SpecXlsxWriteOptions, XlsxWriteError,
};
pub use util::{
    collect_identifier_warnings, sanitize_sheet_name, validate_sheet_extent,
    validate_unique_columns,
};
pub use writer::{SpecXlsxSheetWriteOptions, XlsxWriter, estimate_width_len, plan_column_widths};
