//! Network interface state.

use crate::MacAddress;

/// Status of a single device network interface.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkInterface {
    /// Interface name as reported by the device, e.g. "LAN Port 1".
    pub name: String,

    /// Whether the interface is provisioned.
    pub provisioned: bool,

    /// Whether the link is up.
    pub up: bool,

    /// Link speed label as reported, or "n/a" when the device reports none.
    pub speed: String,

    /// Interface hardware address.
    pub mac: MacAddress,
}
