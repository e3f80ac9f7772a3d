//! Status - a point-in-time view of modem health.

use std::time::Duration;

use crate::{DownstreamChannel, NetworkInterface, UpstreamChannel};

/// A point-in-time snapshot of cable modem health.
///
/// This is the top-level type produced by one decode of a device's status
/// page. A snapshot is built once per parse and owned entirely by the
/// caller; nothing mutates it afterwards.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
///
/// use modemwatch_types::{NetworkInterface, Status};
///
/// let status = Status::builder()
///     .interface(NetworkInterface {
///         name: "CABLE".to_string(),
///         provisioned: true,
///         up: true,
///         speed: "n/a".to_string(),
///         mac: "44:e1:37:a0:15:0a".parse().unwrap(),
///     })
///     .uptime(Duration::from_secs(3600))
///     .build();
///
/// assert!(status.interface("CABLE").unwrap().up);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status {
    /// Downstream channel table.
    pub downstream: Vec<DownstreamChannel>,

    /// Upstream channel table.
    pub upstream: Vec<UpstreamChannel>,

    /// Network interface table.
    pub interfaces: Vec<NetworkInterface>,

    /// Time since the modem booted. Zero if the page carried no uptime row.
    pub uptime: Duration,
}

impl Status {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing snapshots.
    pub fn builder() -> StatusBuilder {
        StatusBuilder::new()
    }

    /// Check if the snapshot carries no channels and no interfaces.
    pub fn is_empty(&self) -> bool {
        self.downstream.is_empty() && self.upstream.is_empty() && self.interfaces.is_empty()
    }

    /// Look up a downstream channel by name.
    pub fn downstream_channel(&self, name: &str) -> Option<&DownstreamChannel> {
        self.downstream.iter().find(|c| c.name == name)
    }

    /// Look up an upstream channel by name.
    pub fn upstream_channel(&self, name: &str) -> Option<&UpstreamChannel> {
        self.upstream.iter().find(|c| c.name == name)
    }

    /// Look up a network interface by name.
    pub fn interface(&self, name: &str) -> Option<&NetworkInterface> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    /// Total octets received across all downstream channels.
    pub fn total_octets(&self) -> u64 {
        self.downstream.iter().map(|c| c.octets).sum()
    }
}

/// Builder for constructing `Status` instances.
#[derive(Debug, Default)]
pub struct StatusBuilder {
    downstream: Vec<DownstreamChannel>,
    upstream: Vec<UpstreamChannel>,
    interfaces: Vec<NetworkInterface>,
    uptime: Duration,
}

impl StatusBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a downstream channel.
    pub fn downstream(mut self, channel: DownstreamChannel) -> Self {
        self.downstream.push(channel);
        self
    }

    /// Add an upstream channel.
    pub fn upstream(mut self, channel: UpstreamChannel) -> Self {
        self.upstream.push(channel);
        self
    }

    /// Add a network interface.
    pub fn interface(mut self, interface: NetworkInterface) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Set the system uptime.
    pub fn uptime(mut self, uptime: Duration) -> Self {
        self.uptime = uptime;
        self
    }

    /// Build the snapshot.
    pub fn build(self) -> Status {
        Status {
            downstream: self.downstream,
            upstream: self.upstream,
            interfaces: self.interfaces,
            uptime: self.uptime,
        }
    }
}
