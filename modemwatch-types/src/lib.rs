//! # modemwatch-types
//!
//! Core types describing the health of a cable modem. This crate defines the
//! snapshot schema shared by the modemwatch adapters and exporter: per-channel
//! radio statistics, network interface state, and system uptime.
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: Core types work without any serialization framework
//! - **Optional serialization**: Enable the `serde` feature as needed
//! - **No I/O, no parsing**: Decoding a device's status page lives in the
//!   adapter crates; this crate is plain data
//!
//! ## Features
//!
//! - `serde`: JSON/etc. serialization via serde
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use modemwatch_types::{DownstreamChannel, Status};
//!
//! let status = Status::builder()
//!     .downstream(DownstreamChannel {
//!         name: "Downstream 1".to_string(),
//!         id: 85,
//!         frequency: 591.0,
//!         power: -2.4,
//!         snr: 38.983,
//!         modulation: "256QAM".to_string(),
//!         octets: 152_963_833,
//!         corrected: 1270,
//!         uncorrectable: 321,
//!     })
//!     .uptime(Duration::from_secs(618_120))
//!     .build();
//!
//! assert_eq!(status.downstream.len(), 1);
//! assert_eq!(status.uptime.as_secs(), 618_120);
//! ```

mod channel;
mod interface;
mod mac;
mod status;

pub use channel::*;
pub use interface::*;
pub use mac::*;
pub use status::*;
