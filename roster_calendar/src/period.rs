// =====================
// 期間ラベル
// =====================

use chrono::NaiveDate;

use crate::error::RosterError;
use crate::roster::ShiftRecord;

/// 既定のラベル形式（例: "202101"）
pub const DEFAULT_PERIOD_FORMAT: &str = "YYYYMM";

/// ロスター先頭の日付から期間ラベルを作る
///
/// 出力ファイル名 `roster_{YYYYMM}` の命名に使います。
/// format には YYYY / MM / DD のトークンが使え、それ以外の文字は
/// そのまま残ります。ロスターが空の場合はエラーです。
pub fn period_label(records: &[ShiftRecord], format: &str) -> Result<String, RosterError> {
    let first = records.first().ok_or(RosterError::EmptyRoster)?;
    let date = NaiveDate::parse_from_str(&first.date, "%Y-%m-%d")?;

    // "%" はstrftimeの指定子開始になってしまうため先にエスケープする
    let strftime = format
        .replace('%', "%%")
        .replace("YYYY", "%Y")
        .replace("MM", "%m")
        .replace("DD", "%d");

    Ok(date.format(&strftime).to_string())
}
