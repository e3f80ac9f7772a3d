//! Error types for adapters.

use thiserror::Error;

use modemwatch_types::ParseMacAddressError;

/// Errors produced while decoding a status document.
///
/// Decoding is all-or-nothing: the first failing section aborts the parse,
/// and the error names the section and field that failed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A table group contained no usable rows at all.
    #[error("no status rows available to parse")]
    EmptyGroup,

    /// A recognized section header had no data rows under it.
    #[error("no {section} rows available to parse")]
    NoRows {
        /// Section the header announced.
        section: &'static str,
    },

    /// A row had the wrong number of tokens for its section.
    #[error("incorrect number of row fields for {section}: got {found}, expected {expected}")]
    RowArity {
        /// Section being decoded.
        section: &'static str,
        /// Token count the section requires.
        expected: usize,
        /// Token count the row actually had.
        found: usize,
    },

    /// A numeric field failed to parse.
    #[error("invalid {field} in {section} row: {value:?}")]
    InvalidNumber {
        /// Section being decoded.
        section: &'static str,
        /// Field within the row.
        field: &'static str,
        /// Offending cell text.
        value: String,
    },

    /// A "value unit" cell did not split into exactly a value and a unit.
    #[error("malformed {field} in {section} row: {value:?}")]
    MalformedValueUnit {
        /// Section being decoded.
        section: &'static str,
        /// Field within the row.
        field: &'static str,
        /// Offending cell text.
        value: String,
    },

    /// The uptime row did not match the "D d: H h: M m" shape.
    #[error("malformed uptime: {value:?}")]
    MalformedUptime {
        /// Offending row text.
        value: String,
    },

    /// An interface hardware address failed to parse.
    #[error(transparent)]
    InvalidMac {
        #[from]
        source: ParseMacAddressError,
    },
}

/// Errors that can occur when collecting status from a device.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Connection failed.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("request timed out")]
    Timeout,

    /// The device responded but its status page failed to decode.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(feature = "arris")]
impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AdapterError::Timeout
        } else if err.is_connect() {
            AdapterError::Connection(err.to_string())
        } else {
            AdapterError::Http(err.to_string())
        }
    }
}
