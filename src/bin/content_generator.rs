//! Sends the six demonstration prompts and prints the responses.
//!
//! Credentials come from the environment, optionally seeded from a `.env`
//! file:
//!
//! ```bash
//! export OPENAI_API_KEY=your_api_key_here
//! cargo run --bin content-generator
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ai_client::showcase::{self, numbered_catalog};
use ai_client::{AiClient, ClientConfig, ProviderKind};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "content-generator", version, about)]
struct Cli {
    /// Environment file loaded before reading configuration; a missing file is ignored
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Provider to use instead of AI_PROVIDER (openai, anthropic, google)
    #[arg(long)]
    provider: Option<ProviderKind>,

    /// Model to use instead of the provider's default
    #[arg(long)]
    model: Option<String>,

    /// Run only the example with this number (1-6)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    only: Option<u8>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The env file may set RUST_LOG, so it is read before logging starts
    let env_loaded = load_env_file(&cli.env_file);

    // Logs go to stderr so they never mix with the generated content
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let result = match env_loaded {
        Ok(loaded) => {
            if loaded {
                tracing::debug!(path = %cli.env_file.display(), "Loaded environment file");
            }
            run(cli).await
        }
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

/// Load `path` into the process environment. A missing file is not an error.
fn load_env_file(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

fn failure_message(error: &dyn std::error::Error) -> String {
    format!("Error: {error}")
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ClientConfig::from_env()?;
    if let Some(kind) = cli.provider {
        config = config.with_preferred_provider(kind);
    }
    if let Some(model) = cli.model {
        // Applies to whichever provider is resolved
        for kind in ProviderKind::ALL {
            config = config.with_default_model(kind, model.clone());
        }
    }

    let client = AiClient::new(config)?;
    let examples: Vec<_> = numbered_catalog()
        .into_iter()
        .filter(|(number, _)| cli.only.map_or(true, |only| *number == usize::from(only)))
        .collect();

    showcase::run(&client, &examples, &mut io::stdout().lock()).await?;
    Ok(())
}
