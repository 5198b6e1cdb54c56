use std::fmt::Display;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use motiv_client::{OpenAiCompleter, ReqwestFetcher, ScraperExtractor};
use motiv_core::config::{CompletionConfig, DEFAULT_BASE_URL, DEFAULT_KEY_PREFIX, DEFAULT_MODEL};
use motiv_core::error::AppError;
use motiv_core::models::{ExtractedContent, GeneratedLetter};
use motiv_core::pipeline::{LetterService, fetch_and_extract, report};

#[derive(Parser)]
#[command(
    name = "motiv",
    version,
    about = "Write a motivation letter from a company's web page"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a page and generate a motivation letter from its content
    Write {
        /// Company page to read
        url: String,

        /// LLM model to use (e.g., "gpt-4o-mini")
        #[arg(short, long, env = "MOTIV_MODEL", default_value = DEFAULT_MODEL)]
        model: String,

        /// OpenAI-compatible API base URL
        #[arg(short, long, env = "MOTIV_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// API key (reads from OPENAI_API_KEY env var if not provided)
        #[arg(short, long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Prefix a valid API key must start with
        #[arg(long, env = "MOTIV_KEY_PREFIX", default_value = DEFAULT_KEY_PREFIX)]
        key_prefix: String,

        /// Replace the built-in system instruction
        #[arg(long)]
        system_prompt: Option<String>,
    },

    /// Fetch a page and print the title and text that would be sent to the model
    Extract {
        /// Page to read
        url: String,
    },
}

/// Title header followed by the body text, as printed by `motiv extract`.
struct ExtractView(ExtractedContent);

impl Display for ExtractView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Title: {}\n\n{}", self.0.title, self.0.body_text)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env if present
    let _ = dotenvy::dotenv();

    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    let succeeded = match cli.command {
        Commands::Write {
            url,
            model,
            base_url,
            api_key,
            key_prefix,
            system_prompt,
        } => {
            let config = CompletionConfig::new(api_key)
                .with_model(model)
                .with_base_url(base_url)
                .with_key_prefix(key_prefix);
            let result = cmd_write(&url, &config, system_prompt).await;
            print_outcome(&result)
        }
        Commands::Extract { url } => {
            let result = cmd_extract(&url).await.map(ExtractView);
            print_outcome(&result)
        }
    };

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("motiv=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn print_outcome<T: Display>(result: &Result<T, AppError>) -> bool {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    report(result, &mut stdout.lock(), &mut stderr.lock()).unwrap_or(false)
}

async fn cmd_write(
    url: &str,
    config: &CompletionConfig,
    system_prompt: Option<String>,
) -> Result<GeneratedLetter, AppError> {
    // Key problems surface here, before any request leaves the machine.
    let completer = OpenAiCompleter::new(config)?;
    let fetcher = ReqwestFetcher::new()?;

    let service = LetterService::new(
        fetcher,
        ScraperExtractor::new(),
        completer,
        config.model.clone(),
    );
    let service = match system_prompt {
        Some(p) => service.with_system_prompt(p),
        None => service,
    };

    service.write_letter(url).await
}

async fn cmd_extract(url: &str) -> Result<ExtractedContent, AppError> {
    let fetcher = ReqwestFetcher::new()?;
    fetch_and_extract(&fetcher, &ScraperExtractor::new(), url).await
}
