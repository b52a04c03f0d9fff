// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use nl_sentiment::{
    Config, Credentials, CredentialsConfig, Document, LanguageServiceClient, SentimentAnalyzer, Validator,
    output,
    utils::logging::{format_error, format_info, format_success, init_logger},
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "nl_sentiment")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Document sentiment analysis with the Google Cloud Natural Language API", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(flatten)]
    auth: AuthArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct AuthArgs {
    /// Service account JSON key (overrides config and GOOGLE_APPLICATION_CREDENTIALS)
    #[arg(long, global = true, value_name = "PATH")]
    credentials: Option<PathBuf>,

    #[arg(long, global = true, env = "NL_SENTIMENT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

impl AuthArgs {
    /// `--credentials` names one key file and drops every other source,
    /// including an api key picked up from the environment.
    fn apply(self, credentials: &mut CredentialsConfig) {
        match (self.credentials, self.api_key) {
            (Some(path), _) => {
                credentials.file = Some(path);
                credentials.api_key = None;
                credentials.access_token = None;
            }
            (None, Some(key)) => credentials.api_key = Some(key),
            (None, None) => {}
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the sentiment of a piece of text
    Analyze {
        /// Text to analyze, or "-" to read stdin
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Treat the input as HTML instead of plain text
        #[arg(long)]
        html: bool,

        /// ISO-639-1 language hint, e.g. "en"
        #[arg(short, long, value_name = "CODE")]
        language: Option<String>,

        #[arg(long)]
        json: bool,

        #[arg(short, long, requires = "json")]
        pretty: bool,

        /// Also print per-sentence sentiment
        #[arg(short, long)]
        sentences: bool,
    },

    /// Resolve credentials and report their source without calling the API
    Credentials,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);
    if !cli.color {
        colored::control::set_override(false);
    }

    let mut config = load_config(&cli.config)?;
    cli.auth.apply(&mut config.credentials);

    match cli.command {
        Commands::Analyze {
            text,
            file,
            html,
            language,
            json,
            pretty,
            sentences,
        } => {
            let text = read_input(text.as_deref(), file.as_deref())?;
            let mut document = if html {
                Document::html(text)
            } else {
                Document::plain_text(text)
            };
            if let Some(code) = language {
                Validator::validate_language_code(&code)?;
                document = document.with_language(code);
            }
            cmd_analyze(&config, document, json, pretty, sentences).await?;
        }
        Commands::Credentials => {
            cmd_credentials(&config)?;
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        info!("Loading configuration from: {}", path.display());
        return Config::load(Some(path)).context("Failed to load configuration");
    }

    warn!(
        "Config file {} not found, using built-in defaults and environment",
        path.display()
    );
    Config::load(None).context("Failed to load configuration")
}

fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some("-"), _) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            Ok(buf)
        }
        (Some(text), _) => Ok(text.to_string()),
        (None, Some(path)) => {
            Validator::validate_file_path(path)?;
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        (None, None) => bail!("Provide TEXT or --file"),
    }
}

async fn cmd_analyze(
    config: &Config,
    document: Document,
    json: bool,
    pretty: bool,
    sentences: bool,
) -> Result<()> {
    // Reject empty input before touching credentials or the network.
    Validator::validate_text_not_empty(&document.content)?;

    info!(
        "Analyzing: {}",
        Validator::truncate_text(&document.content, 60)
    );

    let credentials = Credentials::resolve(&config.credentials, Credentials::env_path())
        .context("Failed to resolve credentials")?;
    let client = LanguageServiceClient::connect(&config.service, credentials)
        .await
        .context("Failed to create Natural Language client")?;

    let analyzer = SentimentAnalyzer::new(client)
        .with_slow_request_threshold(config.service.slow_request_threshold());

    let text = document.content.clone();
    let analysis = analyzer
        .analyze_document(document)
        .await
        .context("Sentiment analysis failed")?;

    if json {
        println!("{}", output::render_json(&text, &analysis, pretty)?);
        return Ok(());
    }

    println!("{}", output::render_text(&text, &analysis.document_sentiment));

    if sentences && !analysis.sentences.is_empty() {
        println!();
        println!("{}", output::render_sentences(&analysis.sentences));
    }

    Ok(())
}

fn cmd_credentials(config: &Config) -> Result<()> {
    if let Some(path) = Credentials::env_path() {
        println!(
            "{}",
            format_info(&format!(
                "GOOGLE_APPLICATION_CREDENTIALS={}",
                path.display()
            ))
        );
    }

    match Credentials::resolve(&config.credentials, Credentials::env_path()) {
        Ok(credentials) => {
            println!(
                "{}",
                format_success(&format!("Using {}", credentials.describe()))
            );
            Ok(())
        }
        Err(e) => {
            println!("{}", format_error(&e.to_string()));
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn resolved_credentials(args: &[&str]) -> CredentialsConfig {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut credentials = CredentialsConfig {
            file: None,
            api_key: Some("AIzaCONFIGKEY".to_string()),
            access_token: Some("ya29.config".to_string()),
        };
        cli.auth.apply(&mut credentials);
        credentials
    }

    #[test]
    fn test_credentials_flag_overrides_api_key() {
        let credentials = resolved_credentials(&[
            "nl_sentiment",
            "--color",
            "false",
            "credentials",
            "--credentials",
            "/tmp/key.json",
            "--api-key",
            "AIzaENVKEY9999",
        ]);

        assert_eq!(credentials.file.as_deref(), Some(Path::new("/tmp/key.json")));
        assert!(credentials.api_key.is_none());
        assert!(credentials.access_token.is_none());
    }

    #[test]
    fn test_api_key_flag_applies_without_credentials_flag() {
        let credentials =
            resolved_credentials(&["nl_sentiment", "--api-key", "AIzaFLAGKEY", "credentials"]);

        assert_eq!(credentials.api_key.as_deref(), Some("AIzaFLAGKEY"));
        assert!(credentials.file.is_none());
    }

    #[test]
    fn test_analyze_requires_text_or_file() {
        assert!(Cli::try_parse_from(["nl_sentiment", "analyze"]).is_err());
        assert!(
            Cli::try_parse_from(["nl_sentiment", "analyze", "hi", "--file", "x.txt"]).is_err()
        );
        assert!(Cli::try_parse_from(["nl_sentiment", "analyze", "hi", "--pretty"]).is_err());
    }

    #[test]
    fn test_load_config_keeps_environment_and_surfaces_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");

        // SAFETY: only test in this binary touching NL_SENTIMENT__SERVICE__* variables.
        unsafe { std::env::set_var("NL_SENTIMENT__SERVICE__TIMEOUT_SECS", "0") };
        let result = load_config(&missing);
        unsafe { std::env::set_var("NL_SENTIMENT__SERVICE__TIMEOUT_SECS", "7") };
        let overridden = load_config(&missing);
        unsafe { std::env::remove_var("NL_SENTIMENT__SERVICE__TIMEOUT_SECS") };

        assert!(result.is_err());
        assert_eq!(overridden.unwrap().service.timeout_secs, 7);

        let present = temp.path().join("nl.toml");
        fs::write(&present, "[service]\ntimeout_secs = 3\n").unwrap();
        assert_eq!(load_config(&present).unwrap().service.timeout_secs, 3);
    }
}
