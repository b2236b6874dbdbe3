use crate::cli::{Cli, Command};
use dlb::error::DlbError;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Run(args) => run::run(args).await,
        Command::Show(args) => show::run(args).await,
    }
}

/// エラーメッセージに対処のヒントを添える
pub(crate) fn describe(err: &DlbError) -> String {
    if err.is_config_error() {
        format!("{err}\nhint: check --config, $DLB_CONFIG and the command-line options")
    } else if err.is_retryable() {
        format!("{err}\nhint: the source may be temporarily unavailable, try again")
    } else {
        err.to_string()
    }
}

mod source_args;

pub mod run;
pub mod show;
