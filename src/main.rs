use anyhow::{Context, Result};
use clap::Parser;
use contactbook::cli::{self, Cli};
use contactbook::{util, App, Config, Database};
use std::fs::{self, OpenOptions};
use std::process::ExitCode;
use std::sync::Mutex;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (~/.contactbook/logs/contactbook.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = Config::load();
    if let Some(database) = cli.database {
        config = config.with_database_path(database);
    }

    let db = Database::open(config.database_path.clone()).with_context(|| {
        format!(
            "Failed to open contact database at {}",
            config.database_path.display()
        )
    })?;
    let mut app = App::new(&db);

    let stdout = std::io::stdout();
    let ok = cli::execute(cli.command, &mut app, &config, &mut stdout.lock()).await?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
