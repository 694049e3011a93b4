//! Server entrypoint for quizserve
//!
//! This is the composition root: it parses arguments, loads configuration,
//! builds the repository from seed data, and wires the use cases into the
//! HTTP routes using dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use quiz_application::{GetQuestionUseCase, SubmitAnswerUseCase};
use quiz_domain::QuestionRepository;
use quiz_infrastructure::{load_seed_file, ConfigLoader, InMemoryQuestionRepository};
use quiz_presentation::quiz_routes;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quizserve", about = "Multiple-choice quiz server", version)]
struct Cli {
    /// Path to a TOML config file (overrides discovered configs)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Socket address to bind, e.g. 127.0.0.1:3030
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// JSON seed file with the question set
    #[arg(long)]
    seed_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log errors only
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else {
        match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting quizserve");

    // Load config, then apply CLI overrides
    let mut config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to load configuration")?;

    if let Some(addr) = cli.addr {
        config.server.addr = addr;
    }
    if let Some(seed_file) = cli.seed_file {
        config.data.seed_file = Some(seed_file);
    }

    // === Dependency Injection ===
    // Build the repository from seed data
    let repository: Arc<dyn QuestionRepository> = match &config.data.seed_file {
        Some(path) => {
            let records = load_seed_file(path)
                .with_context(|| format!("failed to load seed file {}", path.display()))?;
            Arc::new(
                InMemoryQuestionRepository::from_records(records)
                    .context("seed data contains an invalid question record")?,
            )
        }
        None => {
            info!("no seed file configured, using built-in sample questions");
            Arc::new(InMemoryQuestionRepository::with_sample_questions())
        }
    };

    // Create use cases with the injected repository
    let get_question = Arc::new(GetQuestionUseCase::new(repository.clone()));
    let submit_answer = Arc::new(SubmitAnswerUseCase::new(repository));

    let routes = quiz_routes(get_question, submit_answer);

    info!("listening on {}", config.server.addr);
    warp::serve(routes).run(config.server.addr).await;

    Ok(())
}
