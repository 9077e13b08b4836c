use std::io::{self, IsTerminal};
use std::process::ExitCode;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use lexidex::cli::args::Args;
use lexidex::cli::session::{OutputFormat, QuerySession};
use lexidex::core::config::Config;
use lexidex::core::database::Database;
use lexidex::core::error::Result;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lexidex=info")),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "lexidex failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if args.max_documents.is_some() {
        config.max_documents = args.max_documents;
    }
    if args.parallel {
        config.parallel_ingest = true;
    }

    let (db, report) = Database::open(config, &args.files)?;
    info!(
        documents = report.indexed.len(),
        skipped = report.skipped.len(),
        words = db.index().len(),
        "index ready"
    );

    let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };
    let stdout = io::stdout();

    if args.stats {
        let stats = serde_json::to_string_pretty(db.stats())?;
        println!("{}", stats);
    }

    let mut session = QuerySession::new(&db, stdout.lock(), format);
    let summary = if args.queries.is_empty() {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        session = session.with_prompt(interactive);
        session.run(stdin.lock())?
    } else {
        session.run_terms(&args.queries)?
    };

    info!(answered = summary.answered, rejected = summary.rejected, "session closed");
    Ok(())
}
