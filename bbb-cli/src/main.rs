//! BBB CLI - Command line tool for inspecting the biodiversity sample dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bbb-cli",
    version,
    about = "Belly button biodiversity dataset toolkit"
)]
struct Cli {
    /// Dataset location: an http(s) URL or a local JSON file
    #[arg(short, long, global = true, default_value = bbb_data::DATA_URL)]
    source: String,

    #[command(subcommand)]
    command: bbb_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("cli: dataset source {}", cli.source);
    bbb_cmd::run(&cli.source, cli.command)
        .await
        .inspect_err(|e| log::error!("cli: command failed: {:#}", e))
}
