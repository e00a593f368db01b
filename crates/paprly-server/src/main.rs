//! Paprly Server - Entry Point

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paprly_server::{config::Config, server::PaprlyServer};

#[derive(Parser, Debug)]
#[command(name = "paprly-server")]
#[command(about = "Summarization and arXiv search backend for Paprly")]
#[command(version)]
struct Cli {
    /// HTTP server port
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// arXiv Atom API endpoint
    #[arg(long, env = "ARXIV_API_URL")]
    arxiv_api_url: Option<String>,

    /// Summarization inference endpoint
    #[arg(long, env = "SUMMARIZER_URL")]
    summarizer_url: Option<String>,

    /// Bearer token for the summarization endpoint
    #[arg(long, env = "SUMMARIZER_API_TOKEN", hide_env_values = true)]
    summarizer_token: Option<String>,

    /// Origin allowed through CORS (e.g., http://localhost:3000)
    #[arg(long, env = "CORS_ORIGIN")]
    cors_origin: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the environment configuration.
    fn apply(self, mut config: Config) -> Config {
        if self.summarizer_token.is_some() {
            config.summarizer_token = self.summarizer_token;
        }
        if let Some(url) = self.arxiv_api_url {
            config.arxiv_api_url = url;
        }
        if let Some(url) = self.summarizer_url {
            config.summarizer_url = url;
        }
        if let Some(origin) = self.cors_origin {
            config.cors_origin = origin;
        }
        config
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Paprly server");

    let port = cli.port;
    let config = cli.apply(Config::from_env()?);
    tracing::debug!(?config, "Loaded configuration");

    let server = PaprlyServer::new(&config)?;
    server.run_http(port).await
}
