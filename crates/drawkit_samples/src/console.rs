//! Generator flows and the user-facing console lines they print.
//!
//! Each flow builds its tables, writes one file per table and prints one
//! `✓ 已创建: <path>` line per file followed by a summary and usage hints.
//! Output goes to any [`Write`] so the flows can be driven from tests.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::conf::{C_EXT_XLSX, C_FILE_VOCABULARY, C_FILE_WORD_LIST};
use crate::export::write_table_xlsx;
use crate::spec::{
    EnumRecord, EnumTableSchema, SampleError, SpecRoster, SpecSampleTable, SpecVocabularyEntry,
    SpecWriteSummary,
};

fn write_one(
    table: &SpecSampleTable,
    path_file_out: &Path,
    out: &mut impl Write,
) -> Result<SpecWriteSummary, SampleError> {
    let summary = write_table_xlsx(table, path_file_out)?;
    debug!(%summary, "table written");
    writeln!(out, "✓ 已创建: {}", summary.path.display())?;
    Ok(summary)
}

/// Write one roster file per class into `dir_output`.
pub fn write_rosters(
    dir_output: &Path,
    rosters: &[SpecRoster],
    out: &mut impl Write,
) -> Result<Vec<SpecWriteSummary>, SampleError> {
    let mut l_summaries = Vec::with_capacity(rosters.len());
    for roster in rosters {
        let l_records: Vec<EnumRecord> = roster
            .names
            .iter()
            .map(|c_name| EnumRecord::Text(c_name.clone()))
            .collect();
        let table = SpecSampleTable::from_records(EnumTableSchema::Roster, &l_records)?;
        let path_file_out = dir_output.join(format!("{}.{C_EXT_XLSX}", roster.class_name));
        l_summaries.push(write_one(&table, &path_file_out, out)?);
    }

    writeln!(out)?;
    writeln!(out, "✅ 所有示例Excel文件创建完成！")?;
    writeln!(out)?;
    writeln!(out, "使用方法：")?;
    for roster in rosters {
        writeln!(
            out,
            "  - {}: index.html?class={}",
            roster.class_name, roster.class_name
        )?;
    }
    writeln!(out)?;
    writeln!(out, "提示：请使用本地服务器打开网页，而不是直接双击HTML文件")?;
    Ok(l_summaries)
}

/// Write the plain word list into `dir_output`.
pub fn write_word_list(
    dir_output: &Path,
    words: &[String],
    out: &mut impl Write,
) -> Result<SpecWriteSummary, SampleError> {
    let l_records: Vec<EnumRecord> = words
        .iter()
        .map(|c_word| EnumRecord::Text(c_word.clone()))
        .collect();
    let table = SpecSampleTable::from_records(EnumTableSchema::WordList, &l_records)?;
    let summary = write_one(&table, &dir_output.join(C_FILE_WORD_LIST), out)?;

    writeln!(out)?;
    writeln!(out, "✅ 单词列表Excel文件创建完成！")?;
    writeln!(out)?;
    writeln!(out, "共 {} 个单词", words.len())?;
    print_upload_hint(out)?;
    Ok(summary)
}

/// Write the extended vocabulary list into `dir_output`.
pub fn write_vocabulary(
    dir_output: &Path,
    entries: &[SpecVocabularyEntry],
    out: &mut impl Write,
) -> Result<SpecWriteSummary, SampleError> {
    let l_records: Vec<EnumRecord> = entries.iter().cloned().map(EnumRecord::Entry).collect();
    let table = SpecSampleTable::from_records(EnumTableSchema::Extended, &l_records)?;
    let summary = write_one(&table, &dir_output.join(C_FILE_VOCABULARY), out)?;

    writeln!(out)?;
    writeln!(out, "✅ 单词详情Excel文件创建完成！")?;
    writeln!(out)?;
    writeln!(
        out,
        "共 {} 个单词（含音标、释义、例句、标签、图片列）",
        entries.len()
    )?;
    print_upload_hint(out)?;
    Ok(summary)
}

fn print_upload_hint(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "使用方法：")?;
    writeln!(out, "  打开网页后，上传此文件作为单词列表")
}

/// Print the failure lines for `err`.
///
/// A missing backend gets the install instruction; everything else gets one
/// generic error line.
pub fn report_failure(err: &SampleError, out: &mut impl Write) -> std::io::Result<()> {
    match err {
        SampleError::MissingDependency { name, install_hint } => {
            writeln!(out, "❌ 错误：未安装 {name} 库")?;
            writeln!(out)?;
            writeln!(out, "请先安装依赖：")?;
            writeln!(out, "  {install_hint}")
        }
        other => writeln!(out, "❌ 错误：{other}"),
    }
}
