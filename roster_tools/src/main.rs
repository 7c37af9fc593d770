use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::PathBuf;

use roster_calendar::config::JsonRosterConfig;
use roster_calendar::markdown::{render_table, write_table, ROSTER_COLUMNS};
use roster_calendar::period::{period_label, DEFAULT_PERIOD_FORMAT};
use roster_calendar::build_roster;

// 引数を構造体として定義します
#[derive(Parser)]
#[command(name = "roster_tools")]
#[command(version = "0.1.0")]
#[command(about = "月間ボランティアロスターを生成してMarkdownで出力します", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 設定ファイルから当番表を生成します
    Generate {
        /// ロスター設定ファイル (JSON)
        file: PathBuf,

        /// 出力ディレクトリ（省略時は標準出力へ表を出します）
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn generate(file: PathBuf, out: Option<PathBuf>) -> Result<(), String> {
    let text = fs::read_to_string(&file)
        .map_err(|e| format!("ファイル '{}' を読めませんでした: {}", file.display(), e))?;

    let config: JsonRosterConfig = serde_json::from_str(&text)
        .map_err(|e| format!("ファイルが形式に沿っていません: {}", e))?;

    let roster = build_roster(
        config.year,
        config.month,
        &config.volunteers,
        config.meeting_spec().as_ref(),
    )
    .map_err(|e| e.to_string())?;

    info!(
        "{}年{}月: {}件のシフトを生成しました",
        config.year,
        config.month,
        roster.len()
    );

    if let Some(dir) = out {
        // 出力名は roster_{YYYYMM}.md
        let label = period_label(&roster, DEFAULT_PERIOD_FORMAT).map_err(|e| e.to_string())?;
        let path = dir.join(format!("roster_{}.md", label));

        write_table(&roster, &ROSTER_COLUMNS, &path).map_err(|e| e.to_string())?;
        info!("'{}' へ書き込みました", path.display());
    } else {
        print!("{}", render_table(&roster, &ROSTER_COLUMNS));
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = Cli::parse();

    // パターンマッチで分岐処理
    let result = match args.command {
        Commands::Generate { file, out } => generate(file, out),
    };

    if let Err(message) = result {
        eprintln!("エラー: {}", message);
        std::process::exit(1);
    }
}
