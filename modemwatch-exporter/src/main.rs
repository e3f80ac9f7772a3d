//! Prometheus exporter for cable modem status metrics.
//!
//! The exporter follows the multi-target pattern: it holds no device
//! address of its own. Prometheus passes the device to scrape as a
//! `target` query parameter on each request, so one exporter process can
//! serve any number of modems.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{error, info};

use modemwatch_adapters::arris::ArrisClient;

mod duration;
mod exposition;
mod handler;

use handler::HandlerConfig;

#[derive(Parser, Debug)]
#[command(name = "modemwatch-exporter")]
#[command(about = "Prometheus exporter for cable modem status metrics")]
struct Args {
    /// Address to listen on for scrape requests
    #[arg(short, long, default_value = "0.0.0.0:9393")]
    listen: String,

    /// Path to serve metrics on
    #[arg(long, default_value = "/metrics")]
    metrics_path: String,

    /// Device request timeout (e.g., "5s", "500ms"); "0s" disables it
    #[arg(short, long, default_value = "5s")]
    timeout: String,

    /// Fetch one device's status, print it as JSON, and exit
    #[arg(short, long, conflicts_with_all = ["listen", "metrics_path"])]
    dump: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let timeout = duration::parse_duration(&args.timeout)
        .with_context(|| format!("invalid --timeout value {:?}", args.timeout))?;

    // Handle dump mode (non-serving)
    if let Some(ref target) = args.dump {
        return dump_target(target, timeout).await;
    }

    let config = HandlerConfig {
        metrics_path: args.metrics_path,
        timeout,
    };

    serve(&args.listen, config).await
}

/// Fetch one device's status and print it as pretty JSON
async fn dump_target(target: &str, timeout: Duration) -> Result<()> {
    let endpoint = format!("http://{}", handler::resolve_target(target));
    let client = ArrisClient::builder()
        .endpoint(endpoint)
        .timeout(timeout)
        .build();

    let status = client
        .status()
        .await
        .with_context(|| format!("failed to scrape device {:?}", target))?;

    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}

/// Run the scrape server until the process is terminated
async fn serve(listen: &str, config: HandlerConfig) -> Result<()> {
    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("invalid listen address {:?}", listen))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("serving metrics at http://{}{}", addr, config.metrics_path);

    loop {
        let (stream, remote) = listener.accept().await?;
        let io = TokioIo::new(stream);

        let config = config.clone();

        tokio::spawn(async move {
            let service = service_fn(move |req: Request<hyper::body::Incoming>| {
                let config = config.clone();

                async move { handler::handle(req, &config).await }
            });

            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                error!("connection error from {}: {}", remote, e);
            }
        });
    }
}
