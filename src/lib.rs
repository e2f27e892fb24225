//! helpmeter library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;
pub mod widget;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Vote { .. } => cli::commands::vote::handle(&cli.command, cfg),
        Commands::Register { .. } => cli::commands::register::handle(&cli.command, cfg),
        Commands::Posts => cli::commands::posts::handle(cfg),
        Commands::Counts { .. } => cli::commands::counts::handle(&cli.command, cfg),
        Commands::Years => cli::commands::years::handle(cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Top { .. } => cli::commands::top::handle(&cli.command, cfg),
        Commands::Recent { .. } => cli::commands::recent::handle(&cli.command, cfg),
        Commands::Widget { .. } => cli::commands::widget::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once; the --db flag overrides the stored path.
    let mut cfg = Config::load();

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
