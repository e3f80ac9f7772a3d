//! Hardware (MAC) address representation.
//!
//! The status page reports interface hardware addresses as hex octet text.
//! `MacAddress` keeps them as raw bytes and round-trips the textual form.

use std::fmt;
use std::str::FromStr;

/// A 6-byte hardware (MAC) address.
///
/// Parses from colon- or dash-separated hex octets and displays in the
/// canonical lowercase colon-separated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// Create from raw octets.
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Get the raw octets.
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl From<MacAddress> for [u8; 6] {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

impl FromStr for MacAddress {
    type Err = ParseMacAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sep = if s.contains(':') {
            ':'
        } else if s.contains('-') {
            '-'
        } else {
            return Err(ParseMacAddressError::new(s));
        };

        let mut octets = [0u8; 6];
        let mut parts = s.split(sep);

        for octet in octets.iter_mut() {
            let part = parts.next().ok_or_else(|| ParseMacAddressError::new(s))?;
            if part.len() != 2 {
                return Err(ParseMacAddressError::new(s));
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| ParseMacAddressError::new(s))?;
        }

        if parts.next().is_some() {
            return Err(ParseMacAddressError::new(s));
        }

        Ok(Self(octets))
    }
}

/// Error returned when a hardware address fails to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMacAddressError {
    input: String,
}

impl ParseMacAddressError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseMacAddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hardware address: {:?}", self.input)
    }
}

impl std::error::Error for ParseMacAddressError {}

#[cfg(feature = "serde")]
impl serde::Serialize for MacAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MacAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
