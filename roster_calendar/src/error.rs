use thiserror::Error;

/// ロスター生成・出力で発生するエラー
#[derive(Debug, Error)]
pub enum RosterError {
    /// 不正な年月エラー
    #[error("不正な年月です: {year}年{month}月")]
    InvalidCalendarInput { year: i32, month: u32 },

    /// 空ロスターエラー（ラベルの元になる日付が無い）
    #[error("ロスターが空のため期間ラベルを作成できません")]
    EmptyRoster,

    /// レコードの日付が解析できないエラー
    #[error("日付の解析に失敗しました: {0}")]
    InvalidDate(#[from] chrono::format::ParseError),

    /// ファイル書き込みエラー
    #[error("ファイルの書き込みに失敗しました: {0}")]
    Io(#[from] std::io::Error),
}
