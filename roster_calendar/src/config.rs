use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::roster::MeetingSpec;

// ==========================================
// 1. 担当割り当て定義
// ==========================================

/// ロスター設定ファイルのルート (JSON)
///
/// volunteers は曜日名をキーに、担当者名リストを値に持ちます。
/// 担当者名にはプレースホルダ（"?" など）をそのまま入れられます。
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")] // JSONの camelCase を Rustの snake_case に対応させる
pub struct JsonRosterConfig {
    pub year: i32,
    pub month: u32,
    pub volunteers: HashMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting: Option<JsonMeeting>,
}

// ==========================================
// 2. 会議定義
// ==========================================

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonMeeting {
    pub weekday: String,
    pub week_ordinal: u32,
    pub start: String,
    pub end: String,
}

impl JsonRosterConfig {
    /// 会議定義をロジックに渡せる形へ変換する
    pub fn meeting_spec(&self) -> Option<MeetingSpec> {
        self.meeting.as_ref().map(|m| MeetingSpec {
            weekday: m.weekday.clone(),
            week_ordinal: m.week_ordinal,
            start_time: m.start.clone(),
            end_time: m.end.clone(),
        })
    }
}
