//! Adapter for Arris Touchstone cable modems.
//!
//! These devices expose an HTML status page rather than a machine-readable
//! API, so the adapter is one part HTTP client and two parts page parser:
//! [`extract`] recovers rows of text tokens from the markup and [`decode`]
//! turns recognized row groups into typed records.
//!
//! ```rust,no_run
//! use modemwatch_adapters::arris::ArrisClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArrisClient::builder()
//!     .endpoint("http://192.168.100.1")
//!     .build();
//!
//! let status = client.status().await?;
//! println!("uptime: {:?}", status.uptime);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod decode;
pub mod extract;

pub use client::{ArrisClient, ArrisClientBuilder};
pub use decode::SectionKind;
pub use extract::{Row, RowGroup};

use modemwatch_types::Status;
use scraper::Html;

use crate::error::ParseError;

/// Parse a status page document into a [`Status`].
///
/// Markup recovery never fails; any section that fails to decode aborts the
/// whole parse, so a returned `Status` is complete or absent, never partial.
pub fn parse_status(document: &str) -> Result<Status, ParseError> {
    let html = Html::parse_document(document);

    let mut status = Status::default();
    for group in extract::row_groups(&html) {
        decode::apply(&mut status, &group)?;
    }

    Ok(status)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const STATUS_PAGE: &str = include_str!("../../testdata/status.html");

    #[test]
    fn parses_captured_status_page() {
        let status = parse_status(STATUS_PAGE).unwrap();

        assert_eq!(status.downstream.len(), 4);
        assert_eq!(status.upstream.len(), 3);
        assert_eq!(status.interfaces.len(), 3);
        assert_eq!(status.uptime, Duration::from_secs(618_120));
    }

    #[test]
    fn captured_downstream_channels() {
        let status = parse_status(STATUS_PAGE).unwrap();

        let first = &status.downstream[0];
        assert_eq!(first.name, "Downstream 1");
        assert_eq!(first.id, 85);
        assert_eq!(first.frequency, 591.0);
        assert_eq!(first.power, -2.4);
        assert_eq!(first.snr, 38.983);
        assert_eq!(first.modulation, "256QAM");
        assert_eq!(first.octets, 152_963_833);
        assert_eq!(first.corrected, 1270);
        assert_eq!(first.uncorrectable, 321);

        let last = &status.downstream[3];
        assert_eq!(last.name, "Downstream 4");
        assert_eq!(last.id, 88);
        assert_eq!(last.frequency, 609.0);
    }

    #[test]
    fn captured_upstream_channels() {
        let status = parse_status(STATUS_PAGE).unwrap();

        let first = &status.upstream[0];
        assert_eq!(first.name, "Upstream 1");
        assert_eq!(first.id, 4);
        assert_eq!(first.frequency, 35.6);
        assert_eq!(first.power, 46.8);
        assert_eq!(first.channel_type, "DOCSIS2.0 (ATDMA)");
        assert_eq!(first.symbol_rate, 5120);
        assert_eq!(first.modulation, "64QAM");

        // The unbonded channel reports sentinels for every numeric cell.
        let idle = &status.upstream[2];
        assert_eq!(idle.frequency, 0.0);
        assert_eq!(idle.power, 0.0);
        assert_eq!(idle.symbol_rate, 0);
        assert_eq!(idle.modulation, "----");
    }

    #[test]
    fn captured_interfaces() {
        let status = parse_status(STATUS_PAGE).unwrap();

        let lan = &status.interfaces[0];
        assert_eq!(lan.name, "LAN Port 1");
        assert!(lan.provisioned);
        assert!(lan.up);
        assert_eq!(lan.speed, "1000 (Full)");
        assert_eq!(lan.mac.to_string(), "44:e1:37:a0:15:08");

        let cable = &status.interfaces[1];
        assert_eq!(cable.speed, "n/a");

        // MAC octets render lowercase regardless of the page's casing.
        let mta = &status.interfaces[2];
        assert!(!mta.provisioned);
        assert!(!mta.up);
        assert_eq!(mta.mac.to_string(), "44:e1:37:a0:15:09");
    }

    #[test]
    fn captured_page_lookup_by_name() {
        let status = parse_status(STATUS_PAGE).unwrap();

        assert!(status.downstream_channel("Downstream 2").is_some());
        assert!(status.upstream_channel("Upstream 3").is_some());
        assert!(status.interface("CABLE").is_some());
        assert!(status.interface("does not exist").is_none());
    }

    #[test]
    fn document_with_only_unknown_sections_is_empty() {
        let status = parse_status(
            "<html><body><table><tbody>
               <tr><td>Help</td><td>Contact</td></tr>
             </tbody></table></body></html>",
        )
        .unwrap();

        assert!(status.is_empty());
        assert_eq!(status.uptime, Duration::ZERO);
    }

    #[test]
    fn document_without_tables_is_empty() {
        let status = parse_status("<html><body><p>Nothing here.</p></body></html>").unwrap();
        assert!(status.is_empty());
    }

    #[test]
    fn malformed_section_aborts_the_parse() {
        // Downstream rows carry nine tokens; this one carries three.
        let err = parse_status(
            "<html><body><table>
               <tr><td><b>DCID</b></td><td><b>Freq</b></td></tr>
               <tr><td>CH1</td><td>1</td><td>591.0 MHz</td></tr>
             </table></body></html>",
        )
        .unwrap_err();

        assert!(matches!(err, ParseError::RowArity { .. }));
    }

    #[test]
    fn table_with_only_blank_cells_aborts_the_parse() {
        let err = parse_status(
            "<html><body><table>
               <tr><td>&nbsp;</td><td>&nbsp;</td></tr>
             </table></body></html>",
        )
        .unwrap_err();

        assert!(matches!(err, ParseError::EmptyGroup));
    }
}
