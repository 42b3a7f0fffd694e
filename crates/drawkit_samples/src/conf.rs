//! Sample schemas, output locations and console constants.

/// Directory the generators write into unless `--output-dir` is given.
pub const C_DIR_OUTPUT_DEFAULT: &str = "data";

/// Roster header label.
pub const C_HEADER_ROSTER: &str = "姓名";
/// Roster column width.
pub const N_WIDTH_ROSTER: f64 = 15.0;

/// Word-list header label.
pub const C_HEADER_WORD: &str = "单词";
/// Word-list column width.
pub const N_WIDTH_WORD: f64 = 20.0;

/// Extended vocabulary columns `(label, width)` in write order.
pub const TUP_COLUMNS_EXTENDED: [(&str, f64); 6] = [
    ("单词", 20.0),
    ("音标", 18.0),
    ("释义", 36.0),
    ("例句", 48.0),
    ("标签", 24.0),
    ("图片", 30.0),
];

/// Separator used when folding vocabulary tags into one cell.
pub const C_TAG_SEPARATOR: &str = ", ";

/// Output file name of the common word list.
pub const C_FILE_WORD_LIST: &str = "单词列表.xlsx";
/// Output file name of the extended vocabulary list.
pub const C_FILE_VOCABULARY: &str = "单词详情.xlsx";
/// Output file extension of roster files.
pub const C_EXT_XLSX: &str = "xlsx";

/// Name of the spreadsheet backend reported when it is compiled out.
pub const C_BACKEND_NAME: &str = "rust_xlsxwriter";
/// Remediation printed when the backend is compiled out.
pub const C_BACKEND_INSTALL_HINT: &str = "cargo install --path crates/drawkit_samples --features xlsx";
