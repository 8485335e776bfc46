use anyhow::{Context, Result};
use kong_admin::dispatch::handle_line;
use kong_admin::{HttpTransport, KongConfig, PluginResource};
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env for local dev (if present)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = KongConfig::load().context("failed to load configuration")?;

    // stdout carries replies, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("kong_admin={}", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if dotenv_loaded {
        tracing::info!("Loaded .env");
    }
    tracing::info!("Using Kong admin API at {}", config.admin.base_url);

    let transport = HttpTransport::new(&config.admin).context("failed to build HTTP transport")?;
    let plugins = PluginResource::new(Arc::new(transport));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => break, // EOF
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                tracing::debug!("Received: {}", line);
                let reply = handle_line(&plugins, line).await;
                let reply_json = serde_json::to_string(&reply)?;
                tracing::debug!("Sending: {}", reply_json);

                stdout.write_all(reply_json.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
            Err(e) => {
                tracing::error!("Error reading from stdin: {}", e);
                break;
            }
        }
    }

    tracing::info!("kong-admin shutting down");
    Ok(())
}
