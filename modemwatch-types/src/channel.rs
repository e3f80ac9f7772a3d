//! Per-channel radio statistics.

/// Status of a single downstream (receive) channel.
///
/// The three symbol counters are monotonic on the device and reset on
/// reboot; consumers should treat them as counters, not gauges.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DownstreamChannel {
    /// Channel name as reported by the device, e.g. "Downstream 1".
    pub name: String,

    /// Downstream channel id (DCID).
    pub id: u32,

    /// Center frequency in MHz.
    pub frequency: f64,

    /// Receive power level in dBmV.
    pub power: f64,

    /// Signal-to-noise ratio in dB.
    pub snr: f64,

    /// Modulation scheme, e.g. "256QAM".
    pub modulation: String,

    /// Total octets received on this channel.
    pub octets: u64,

    /// Symbols corrected by forward error correction.
    pub corrected: u64,

    /// Symbols that could not be corrected.
    pub uncorrectable: u64,
}

/// Status of a single upstream (transmit) channel.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpstreamChannel {
    /// Channel name as reported by the device, e.g. "Upstream 1".
    pub name: String,

    /// Upstream channel id (UCID).
    pub id: u32,

    /// Center frequency in MHz. Zero when the device reports the channel
    /// as not applicable.
    pub frequency: f64,

    /// Transmit power level in dBmV. Zero when not applicable.
    pub power: f64,

    /// DOCSIS channel type, e.g. "DOCSIS2.0 (ATDMA)".
    pub channel_type: String,

    /// Symbol rate in kSym/s. Zero when not applicable.
    pub symbol_rate: u32,

    /// Modulation scheme, e.g. "64QAM".
    pub modulation: String,
}
