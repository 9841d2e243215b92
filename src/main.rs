use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use mindmeter::cli::{self, Cli};
use mindmeter::client::ApiClient;
use mindmeter_config::{ApiConfig, SessionConfig};
use mindmeter_core::Error;
use mindmeter_session::{FileStore, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=warn", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let api_config = ApiConfig::from_env();
    let session_config = SessionConfig::from_env();
    let session = Session::new(Arc::new(FileStore::open(&session_config.session_file)));
    let client = ApiClient::new(api_config, session)?;

    if let Err(e) = cli::run(cli, client, session_config).await {
        eprintln!("❌ {e}");
        if let Some(status) = e.downcast_ref::<Error>().and_then(Error::status)
            && status == 401
        {
            eprintln!("   Run `mindmeter login` or `mindmeter guest` to start a new session.");
        }
        std::process::exit(1);
    }

    Ok(())
}
