use clap::{Parser, Subcommand};
use colored::Colorize;
use once_cell::sync::Lazy;

mod commands;
mod config;
mod platform_info;

/// Time sorting algorithms against the same random dataset
#[derive(Parser)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Run(commands::run::RunArgs),
    List(commands::list::ListArgs),
}

static CMD_ARGS: Lazy<Cli> = Lazy::new(|| {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    Cli::parse()
});

fn main() -> anyhow::Result<()> {
    let cli = &*CMD_ARGS;
    env_logger::init();
    let result = match &cli.command {
        Commands::Run(cmd) => cmd.run(),
        Commands::List(cmd) => cmd.run(),
    };
    if let Err(err) = result {
        eprintln!("❌ {}: {}", "ERROR".red().bold(), err.to_string().red());
        std::process::exit(1);
    }
    Ok(())
}
