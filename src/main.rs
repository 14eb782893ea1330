mod cli;
mod commands;
mod error;
mod filetime;
mod models;
mod output;

use anyhow::Context;
use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    // Диагностика уходит в stderr, в stdout - только результат
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let stdout = std::io::stdout();
    commands::convert::run(&cli.value, cli.ordering, cli.json, stdout.lock())
        .with_context(|| format!("failed to convert FILETIME value {}", cli.value))
}
