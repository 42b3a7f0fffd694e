//! Stateless helper utilities used by the XLSX writer kernel.

use std::collections::{BTreeMap, BTreeSet};

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
use crate::spec::{EnumCellValue, XlsxWriteError};

////////////////////////////////////////////////////////////////////////////////
// #region TableValidation

/// Validate that `columns` has no duplicated names.
pub fn validate_unique_columns(columns: &[String]) -> Result<(), XlsxWriteError> {
    if columns.len() == columns.iter().collect::<BTreeSet<_>>().len() {
        return Ok(());
    }

    let mut dict_pos: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (n_idx, c_name) in columns.iter().enumerate() {
        dict_pos.entry(c_name).or_default().push(n_idx);
    }

    let c_msg = dict_pos
        .iter()
        .filter_map(|(c_name, l_pos)| {
            if l_pos.len() > 1 {
                Some(format!(
                    "{c_name:?} x{} at indices {:?}",
                    l_pos.len(),
                    l_pos
                ))
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("; ");

    Err(XlsxWriteError::InvalidTable(format!(
        "Duplicate column names detected: {c_msg}"
    )))
}

/// Reject tables that cannot be written to a single worksheet.
pub fn validate_sheet_extent(n_rows_data: usize, n_cols: usize) -> Result<(), XlsxWriteError> {
    if n_cols == 0 {
        return Err(XlsxWriteError::InvalidTable(
            "Table must have at least one column.".to_string(),
        ));
    }
    let n_rows_total = n_rows_data.saturating_add(1);
    if n_rows_total > N_NROWS_EXCEL_MAX || n_cols > N_NCOLS_EXCEL_MAX {
        return Err(XlsxWriteError::RowLimitExceeded {
            rows: n_rows_total,
            cols: n_cols,
        });
    }
    Ok(())
}

/// Collect non-fatal warnings for blank or repeated identifier values.
///
/// Identifiers are never rejected; the caller decides whether to surface them.
pub fn collect_identifier_warnings<'a, I>(column_name: &str, values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a EnumCellValue>,
{
    let mut l_rows_blank = Vec::new();
    let mut dict_rows_by_value: BTreeMap<&str, Vec<usize>> = BTreeMap::new();

    for (n_idx_row, value) in values.into_iter().enumerate() {
        let c_text = value.as_str().trim();
        if c_text.is_empty() {
            l_rows_blank.push(n_idx_row);
            continue;
        }
        dict_rows_by_value.entry(c_text).or_default().push(n_idx_row);
    }

    let mut l_warnings = Vec::new();
    if !l_rows_blank.is_empty() {
        l_warnings.push(format!(
            "Blank identifier in column {column_name:?} at data rows {l_rows_blank:?}"
        ));
    }
    for (c_text, l_rows) in dict_rows_by_value {
        if l_rows.len() > 1 {
            l_warnings.push(format!(
                "Duplicate identifier {c_text:?} in column {column_name:?} at data rows {l_rows:?}"
            ));
        }
    }
    l_warnings
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_unique_columns_reports_positions() {
        let l_cols = vec!["单词".to_string(), "音标".to_string(), "单词".to_string()];
        let err = validate_unique_columns(&l_cols).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Duplicate column names detected: \"单词\" x2 at indices [0, 2]"
        );
    }

    #[test]
    fn test_validate_sheet_extent_limits() {
        assert!(validate_sheet_extent(50, 6).is_ok());
        assert!(validate_sheet_extent(0, 1).is_ok());
        assert!(matches!(
            validate_sheet_extent(0, 0),
            Err(XlsxWriteError::InvalidTable(_))
        ));
        assert!(matches!(
            validate_sheet_extent(N_NROWS_EXCEL_MAX, 1),
            Err(XlsxWriteError::RowLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_collect_identifier_warnings_blank_and_duplicates() {
        let l_values = vec![
            EnumCellValue::String("张三".to_string()),
            EnumCellValue::String(" ".to_string()),
            EnumCellValue::String("张三".to_string()),
            EnumCellValue::None,
        ];
        let l_warnings = collect_identifier_warnings("姓名", &l_values);
        assert_eq!(
            l_warnings,
            vec![
                "Blank identifier in column \"姓名\" at data rows [1, 3]".to_string(),
                "Duplicate identifier \"张三\" in column \"姓名\" at data rows [0, 2]".to_string(),
            ]
        );
    }

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("二一班/名单?", "_"), "二一班_名单_");
        assert_eq!(sanitize_sheet_name("   ", "_"), "Sheet");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40), "_").len(), 31);
    }
}
