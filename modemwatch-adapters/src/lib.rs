//! # modemwatch-adapters
//!
//! Device adapters for collecting status snapshots from cable modems.
//!
//! This crate provides ready-to-use clients that scrape a modem's
//! management interface and convert it to the modemwatch snapshot types.
//!
//! ## Supported Devices
//!
//! - **Arris Touchstone** (`arris` feature, on by default) - Decodes the
//!   HTML status page served at `/cgi-bin/status_cgi` into per-channel
//!   radio statistics, interface state, and uptime
//!
//! ## Quick Start (Arris)
//!
//! ```rust,no_run
//! use modemwatch_adapters::arris::ArrisClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ArrisClient::builder()
//!         .endpoint("http://192.168.100.1")
//!         .build();
//!
//!     // Fetch and decode a snapshot
//!     let status = client.status().await?;
//!
//!     println!("uptime: {:?}", status.uptime);
//!     for channel in &status.downstream {
//!         println!("{}: {} dBmV", channel.name, channel.power);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;

#[cfg(feature = "arris")]
pub mod arris;

pub use error::{AdapterError, ParseError};

// Re-export types for convenience
pub use modemwatch_types::{
    DownstreamChannel, MacAddress, NetworkInterface, Status, UpstreamChannel,
};
