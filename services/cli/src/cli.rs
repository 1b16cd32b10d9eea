use crate::commands::{
    run_demo, run_export, run_fields, run_import, run_reset, run_results, run_set, run_share,
    ExportArgs, ImportArgs, ResultsArgs, SetArgs, ShareArgs,
};
use clap::{Parser, Subcommand};
use jobcompare::config::AppConfig;
use jobcompare::error::AppError;
use jobcompare::sharing::{ComparisonSession, FileStore};
use jobcompare::telemetry;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "jobcompare",
    about = "Compare two job offers across weighted dimensions and share the result",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the comparison for a share link or the saved offers (default command)
    Results(ResultsArgs),
    /// Replace the saved offers with the sample comparison
    Demo,
    /// Set one field of the saved comparison, e.g. `set a_salary 125000`
    Set(SetArgs),
    /// List every recognized field with its saved value
    Fields,
    /// Load a JSON document exported earlier
    Import(ImportArgs),
    /// Write the saved comparison as a JSON document
    Export(ExportArgs),
    /// Forget the saved comparison
    Reset,
    /// Print a share link for the saved comparison
    Share(ShareArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Results(ResultsArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, store = %config.storage.path.display(), "configuration loaded");

    let store = Arc::new(FileStore::new(config.storage.path.clone()));
    let session = ComparisonSession::new(store, config.sharing.results_url.clone());

    let output = match command {
        Command::Results(args) => run_results(&session, args)?,
        Command::Demo => run_demo(&session)?,
        Command::Set(args) => run_set(&session, args)?,
        Command::Fields => run_fields(&session)?,
        Command::Import(args) => run_import(&session, args)?,
        Command::Export(args) => run_export(&session, args)?,
        Command::Reset => run_reset(&session)?,
        Command::Share(args) => run_share(&session, args)?,
    };

    println!("{output}");
    Ok(())
}
