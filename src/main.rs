mod cli;
mod commands;

use clap::Parser;
use owo_colors::OwoColorize;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = dlb::logging::init(cli.log_file.as_deref()) {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
