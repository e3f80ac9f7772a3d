//! HTTP request handling for the scrape server.
//!
//! Routing is deliberately small: the metrics path runs a scrape of the
//! device named by the `target` query parameter, the index redirects to
//! the metrics path, and health probes answer OK.

use std::convert::Infallible;
use std::time::Duration;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use tracing::warn;

use modemwatch_adapters::arris::ArrisClient;

use crate::exposition;

/// Port assumed when a target does not name one.
const DEFAULT_DEVICE_PORT: u16 = 80;

/// Per-process handler settings.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Path for the metrics endpoint (e.g., "/metrics")
    pub metrics_path: String,
    /// Device request timeout; zero disables it
    pub timeout: Duration,
}

/// Route one request.
pub async fn handle<B>(
    req: Request<B>,
    config: &HandlerConfig,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path();

    if path == config.metrics_path {
        serve_scrape(req.uri().query(), config).await
    } else if path == "/" {
        Ok(Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header("Location", config.metrics_path.as_str())
            .body(Full::new(Bytes::new()))
            .unwrap())
    } else if path == "/health" || path == "/healthz" {
        Ok(text_response(StatusCode::OK, "OK"))
    } else {
        Ok(text_response(StatusCode::NOT_FOUND, "Not Found"))
    }
}

/// Scrape the requested device and render its metrics.
async fn serve_scrape(
    query: Option<&str>,
    config: &HandlerConfig,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let Some(target) = target_from_query(query) else {
        return Ok(text_response(
            StatusCode::BAD_REQUEST,
            "missing target parameter",
        ));
    };

    let client = ArrisClient::builder()
        .endpoint(format!("http://{}", resolve_target(&target)))
        .timeout(config.timeout)
        .build();

    match client.status().await {
        Ok(status) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "text/plain; version=0.0.4; charset=utf-8")
            .body(Full::new(Bytes::from(exposition::render_status(&status))))
            .unwrap()),
        Err(e) => {
            warn!("scrape of {:?} failed: {}", target, e);
            Ok(text_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to scrape device {:?}: {}", target, e),
            ))
        }
    }
}

/// Extract the `target` query parameter. An empty value counts as absent.
fn target_from_query(query: Option<&str>) -> Option<String> {
    let query = query?;

    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .find(|(key, _)| key == "target")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Resolve a scrape target to a host:port authority.
///
/// Targets may be a hostname, IPv4 address, or IPv6 address, with or
/// without a port. Bare IPv6 addresses are bracketed; port 80 is assumed
/// when absent.
pub fn resolve_target(target: &str) -> String {
    if target.starts_with('[') {
        // Bracketed IPv6, with or without a port.
        if let Some(end) = target.rfind(']') {
            if target[end + 1..].starts_with(':') {
                return target.to_string();
            }
        }
        return format!("{}:{}", target, DEFAULT_DEVICE_PORT);
    }

    // A bare IPv6 address carries multiple colons and needs brackets.
    if target.matches(':').count() > 1 {
        return format!("[{}]:{}", target, DEFAULT_DEVICE_PORT);
    }

    match target.split_once(':') {
        Some(_) => target.to_string(),
        None => format!("{}:{}", target, DEFAULT_DEVICE_PORT),
    }
}

fn text_response(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(Full::new(body.into()))
        .unwrap()
}
