// =====================
// Markdownテーブル出力
// =====================

use std::fs;
use std::path::Path;

use crate::error::RosterError;
use crate::roster::ShiftRecord;

/// 既定の列順
pub const ROSTER_COLUMNS: [&str; 4] = ["date", "weekday", "volunteers", "notes"];

/// ロスターをMarkdownのパイプテーブル文字列にする
///
/// ヘッダ行、"---" の区切り行、レコード行の順で、各行は "|" 連結かつ
/// 改行終端です（末尾の改行を含む）。セル内の "|" はエスケープしません。
/// 空のロスターはヘッダ行と区切り行だけになります。
pub fn render_table(records: &[ShiftRecord], columns: &[&str]) -> String {
    let mut text = String::new();

    text.push_str(&columns.join("|"));
    text.push('\n');
    text.push_str(&vec!["---"; columns.len()].join("|"));
    text.push('\n');

    for record in records {
        let row: Vec<&str> = columns.iter().map(|c| field(record, c)).collect();
        text.push_str(&row.join("|"));
        text.push('\n');
    }

    text
}

/// ロスターをMarkdownとしてファイルへ書き出す
///
/// 親ディレクトリが無ければ再帰的に作成し、既存ファイルは上書きします。
pub fn write_table(
    records: &[ShiftRecord],
    columns: &[&str],
    path: &Path,
) -> Result<(), RosterError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, render_table(records, columns))?;
    Ok(())
}

// 列名に対応するフィールドを取り出す。未知の列は空セル扱い
fn field<'a>(record: &'a ShiftRecord, column: &str) -> &'a str {
    match column {
        "date" => &record.date,
        "weekday" => &record.weekday,
        "volunteers" => &record.volunteers,
        "notes" => &record.notes,
        _ => "",
    }
}
