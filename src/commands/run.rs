//! dlb run コマンド
//!
//! TUI でリストを編集し、送信された値を標準出力に書き出す。

use super::source_args::SourceArgs;
use clap::Parser;
use dlb::widget::{Outcome, Submission};

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output the submission in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let widget = args.source.build_widget().await.map_err(|e| super::describe(&e))?;

    match dlb::tui::run(widget).map_err(|e| e.to_string())? {
        Outcome::Submitted(submission) => {
            println!("{}", format_submission(&submission, args.json)?);
            Ok(())
        }
        Outcome::Cancelled => Err("cancelled".to_string()),
    }
}

/// 送信値を出力形式に整形
fn format_submission(submission: &Submission, json: bool) -> Result<String, String> {
    if json {
        serde_json::to_string_pretty(submission).map_err(|e| e.to_string())
    } else {
        Ok(submission.values.join("\n"))
    }
}
