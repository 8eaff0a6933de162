//! DocQA CLI Entry Point
//!
//! - `docqa signup` / `docqa login` / `docqa logout` - manage the session
//! - `docqa status` - show the service URL and session state
//! - `docqa upload <file>` - upload a PDF
//! - `docqa ask <question>` - ask one question
//! - `docqa chat` - interactive questions with history

use docqa::cli::{self, Cli};
use docqa::{DocqaConfig, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load .env before parsing so clap sees DOCQA_* variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let out = cli.output();

    if let Err(e) = run(cli).await {
        out.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = DocqaConfig::load(cli.config.as_deref())?
        .with_overrides(cli.api_url.clone(), cli.token_file.clone());

    init_tracing(&config.logging.level, cli.verbose);

    cli::execute(cli, config).await
}

fn init_tracing(level: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { level };
        EnvFilter::try_new(format!("docqa={level},docqa_core={level}"))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
