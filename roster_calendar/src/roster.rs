// =====================
// ロスター生成ロジック
// =====================

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// 当番表の1行分のレコード
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShiftRecord {
    /// "YYYY-MM-DD" 形式の日付
    pub date: String,
    /// 日付から導出した曜日名（例: "Sunday"）
    pub weekday: String,
    /// 担当者名を " & " で連結した表示文字列
    pub volunteers: String,
    /// 備考。通常は空、会議該当日のみ注記が入る
    pub notes: String,
}

/// スタッフ会議の指定（曜日・第何週・開始時刻・終了時刻）
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSpec {
    pub weekday: String,
    /// 1始まりの週序数（第n週）
    pub week_ordinal: u32,
    pub start_time: String,
    pub end_time: String,
}

/// 月間ロスターを生成する
///
/// 月初から翌月初までの半開区間 [1日, 翌月1日) を1日ずつ走査し、
/// 曜日名が volunteers_by_weekday のキーに含まれる日だけレコード化します。
/// 28/29/30/31日の月いずれも区間の終端で吸収され、12月は翌年1月へ繰り上がります。
///
/// meeting が指定された場合、曜日が一致しかつ日付dが
/// 7*(week_ordinal-1) <= d <= 7*week_ordinal を満たすレコードの備考に
/// "Staff meeting {開始}--{終了}" を書き込みます。
/// week_ordinal=1 のとき下限は0になり d<=7 がすべて該当しますが、
/// これは元仕様どおりの境界であり修正対象ではありません。
pub fn build_roster(
    year: i32,
    month: u32,
    volunteers_by_weekday: &HashMap<String, Vec<String>>,
    meeting: Option<&MeetingSpec>,
) -> Result<Vec<ShiftRecord>, RosterError> {
    // 月初日の取得が年月の妥当性チェックを兼ねる
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(RosterError::InvalidCalendarInput { year, month })?;

    // 区間終端: 翌月1日（12月の場合は翌年1月1日）
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(RosterError::InvalidCalendarInput { year, month })?;

    let mut records = Vec::new();
    let mut date = first_day;
    while date < next_month_first {
        let weekday = weekday_name(date.weekday());
        if let Some(names) = volunteers_by_weekday.get(weekday) {
            let notes = match meeting {
                Some(m) if m.weekday == weekday && in_meeting_window(date.day(), m.week_ordinal) => {
                    format!("Staff meeting {}--{}", m.start_time, m.end_time)
                }
                _ => String::new(),
            };

            records.push(ShiftRecord {
                date: date.format("%Y-%m-%d").to_string(),
                weekday: weekday.to_string(),
                volunteers: names.join(" & "),
                notes,
            });
        }
        date += Duration::days(1);
    }

    Ok(records)
}

/// 月を7日幅の窓に区切ったとき、day が第 week_ordinal 窓に入るか
///
///  week_ordinal: 1      2       3       4       5
///  day:          0..=7  7..=14  14..=21 21..=28 28..=35
///
/// 窓の両端は重なりますが、曜日フィルタ後は同一曜日が7日窓内に
/// 2回現れることはないため、該当日は月内に高々1日です。
fn in_meeting_window(day: u32, week_ordinal: u32) -> bool {
    let lower = 7 * week_ordinal.saturating_sub(1);
    let upper = 7 * week_ordinal;
    lower <= day && day <= upper
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
