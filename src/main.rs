mod cli;
mod logging;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use std::path::Path;
use std::process;
use tracing::{error, info};

use cli::{Cli, Commands};
use media_triage::inbox::{self, InboxBackup};
use media_triage::{config, drive, purge, walker, ConsoleReporter, PurgeList};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let config = match config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("[FATAL] Failed to load config.json: {}", err);
            process::exit(1);
        }
    };

    match args.command {
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
        Some(Commands::Run) | None => {
            if let Err(err) = run_triage(&config) {
                error!("[FATAL] {:#}", err);
                process::exit(1);
            }
        }
    }
}

/// One full triage pass. Returns Err only from the fatal startup tier;
/// once the run is underway every failure is logged and isolated to its
/// own unit of work.
fn run_triage(config: &config::AppConfig) -> anyhow::Result<()> {
    config::validate_paths(config)?;
    let paths = config::initialize(config).context("preparing runtime folders")?;

    let drives = drive::discover();

    info!("Importing from external drives");
    let backup = InboxBackup::new(&paths.inbox);
    let mut purge_list = PurgeList::new();
    for drive in &drives {
        walker::import(drive, &backup, &mut purge_list);
    }

    let root_files = inbox::gather_root_files(&paths.root);
    info!("Loose files detected: {}", root_files.len());
    inbox::move_to_inbox(&root_files);
    inbox::refill_from_inbox();
    inbox::recover_failed_copies();

    finalize_purge(&purge_list, &paths.logs);

    info!("=== Triage Completed ===");
    Ok(())
}

/// Checkpoint the candidate list to disk, then delete. Failures past the
/// startup tier never fail the run.
fn finalize_purge(purge_list: &PurgeList, logs_dir: &Path) {
    if purge_list.is_empty() {
        return;
    }

    show_deletion_summary(purge_list);

    let log_path = match purge::write_deletion_log(purge_list, logs_dir) {
        Ok(path) => path,
        Err(err) => {
            // No checkpoint written means nothing gets deleted.
            error!("Failed to write deletion log: {}", err);
            return;
        }
    };

    match purge::execute_deletions(&log_path, &ConsoleReporter::new()) {
        Ok(stats) if stats.failed > 0 => {
            info!(
                "{} folders could not be deleted, see the debug log",
                stats.failed
            );
        }
        Ok(_) => {}
        Err(err) => error!("Failed to execute deletions: {}", err),
    }
}

fn show_deletion_summary(purge_list: &PurgeList) {
    println!("{}", "=".repeat(30).red());
    println!("{}", " FOLDERS MARKED FOR DELETION ".red().bold());
    println!("{}", "=".repeat(30).red());
    for folder in purge_list.paths() {
        println!("  {}", folder.display().to_string().red());
    }
}
