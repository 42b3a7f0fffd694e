//! XLSX constants and default preset factories.

use std::collections::BTreeMap;

use crate::spec::{SpecCellFormat, SpecXlsxWriteOptions};

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];
/// Excel hard cap for a single column width.
pub const N_WIDTH_EXCEL_COLUMN_MAX: f64 = 255.0;

/// Excel number format code for text cells.
pub const C_NUM_FORMAT_TEXT: &str = "@";
/// Header font size used by the sample files.
pub const N_FONT_SIZE_HEADER: i64 = 12;

/// Canonical format preset keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumFmtKey {
    /// Generic body cell format.
    Text,
    /// Header cell format.
    Header,
}

impl EnumFmtKey {
    /// Key used in [`derive_default_xlsx_formats`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Header => "header",
        }
    }
}

/// Build default named format presets used by [`crate::writer::XlsxWriter`].
///
/// Body cells use the text number format, so blank cells are still stored
/// and every data row keeps its place in the sheet. The header is bold at
/// size 12.
pub fn derive_default_xlsx_formats() -> BTreeMap<String, SpecCellFormat> {
    let cfg_base_fmt_spec = SpecCellFormat {
        num_format: Some(C_NUM_FORMAT_TEXT.to_string()),
        ..Default::default()
    };

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(EnumFmtKey::Text.as_str().to_string(), cfg_base_fmt_spec.clone());
    dict_fmt.insert(
        EnumFmtKey::Header.as_str().to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            font_size: Some(N_FONT_SIZE_HEADER),
            ..Default::default()
        }),
    );

    dict_fmt
}

/// Look up one default preset by key.
pub fn derive_default_xlsx_format(key: EnumFmtKey) -> SpecCellFormat {
    derive_default_xlsx_formats()
        .remove(key.as_str())
        .unwrap_or_default()
}

/// Build default write options.
pub fn derive_default_xlsx_write_options() -> SpecXlsxWriteOptions {
    SpecXlsxWriteOptions::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header_preset_is_bold_size_12() {
        let fmt_header = derive_default_xlsx_format(EnumFmtKey::Header);
        assert_eq!(fmt_header.bold, Some(true));
        assert_eq!(fmt_header.font_size, Some(12));

        let fmt_text = derive_default_xlsx_format(EnumFmtKey::Text);
        assert_eq!(fmt_text.num_format.as_deref(), Some("@"));
        assert_eq!(fmt_text.bold, None);
    }
}
