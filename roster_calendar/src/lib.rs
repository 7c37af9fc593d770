// =====================
// roster_calendar
// =====================
//
// 月間ボランティアロスターの生成とMarkdown出力を行うライブラリです。
// データは一方向にしか流れません:
//   設定 -> build_roster -> Vec<ShiftRecord> -> render_table -> テキスト/ファイル

pub mod config;
pub mod error;
pub mod markdown;
pub mod period;
pub mod roster;

pub use error::RosterError;
pub use roster::{build_roster, MeetingSpec, ShiftRecord};
