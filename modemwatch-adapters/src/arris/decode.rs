//! Section decoding: classification and typed record extraction.
//!
//! Each [`RowGroup`] is classified by the first token of its first row and
//! decoded into one of four record kinds, enforcing exact token-count and
//! format rules per kind. Groups with an unrecognized first token are
//! skipped without error; everything else is all-or-nothing.

use std::str::FromStr;
use std::time::Duration;

use modemwatch_types::{DownstreamChannel, NetworkInterface, Status, UpstreamChannel};

use crate::arris::extract::{Row, RowGroup};
use crate::error::ParseError;

/// The section shapes a status page can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Downstream channel table.
    Downstream,
    /// Upstream channel table.
    Upstream,
    /// System information table; the uptime row lives here.
    SystemInfo,
    /// Network interface table.
    Interfaces,
    /// Anything else; skipped without error.
    Unknown,
}

/// First-token-of-first-row classification table.
///
/// Kept as data so a future section is one entry here plus a decoder.
const SECTION_HEADERS: &[(&str, SectionKind)] = &[
    ("DCID", SectionKind::Downstream),
    ("UCID", SectionKind::Upstream),
    ("System Uptime:", SectionKind::SystemInfo),
    ("Interface Name", SectionKind::Interfaces),
];

impl SectionKind {
    /// Classify a group by the first token of its first row.
    pub fn classify(token: &str) -> Self {
        SECTION_HEADERS
            .iter()
            .find(|(header, _)| *header == token)
            .map(|(_, kind)| *kind)
            .unwrap_or(SectionKind::Unknown)
    }

    /// Whether the classifying row is a column-name header rather than data.
    ///
    /// The system info table is classified by its uptime row, which itself
    /// carries data.
    fn skips_header_row(self) -> bool {
        !matches!(self, SectionKind::SystemInfo | SectionKind::Unknown)
    }

    /// Section name used in error messages.
    fn name(self) -> &'static str {
        match self {
            SectionKind::Downstream => "downstream",
            SectionKind::Upstream => "upstream",
            SectionKind::SystemInfo => "system",
            SectionKind::Interfaces => "interface",
            SectionKind::Unknown => "unknown",
        }
    }
}

/// Decode one row group into `status`.
///
/// Recognized sections append their records to the matching collection;
/// unrecognized sections contribute nothing. The first malformed row aborts
/// the group with an error naming the failed check.
pub fn apply(status: &mut Status, group: &RowGroup) -> Result<(), ParseError> {
    let Some(first) = group.rows.first().and_then(|row| row.first()) else {
        return Err(ParseError::EmptyGroup);
    };

    let kind = SectionKind::classify(first);
    let rows: &[Row] = if kind.skips_header_row() {
        &group.rows[1..]
    } else {
        &group.rows
    };

    // A recognized header with nothing under it means the device rendered
    // a section we cannot account for.
    if rows.is_empty() && kind != SectionKind::Unknown {
        return Err(ParseError::NoRows {
            section: kind.name(),
        });
    }

    match kind {
        SectionKind::Downstream => decode_downstream(status, rows),
        SectionKind::Upstream => decode_upstream(status, rows),
        SectionKind::SystemInfo => decode_system(status, rows),
        SectionKind::Interfaces => decode_interfaces(status, rows),
        SectionKind::Unknown => Ok(()),
    }
}

/// Token count of a downstream data row.
const DOWNSTREAM_FIELDS: usize = 9;

/// Token count of an upstream data row.
const UPSTREAM_FIELDS: usize = 7;

/// Token count of an interface data row.
const INTERFACE_FIELDS: usize = 5;

/// Sentinel the device reports for not-applicable upstream values.
const UPSTREAM_NA: &str = "----";

/// Sentinel the device reports for interfaces without a speed.
const SPEED_NA: &str = "-----";

/// Label introducing the uptime row within the system info table.
const UPTIME_LABEL: &str = "System Uptime:";

/// Literal meaning "provisioned" in the interface table.
const PROVISIONED: &str = "Enabled";

/// Literal meaning "link up" in the interface table.
const LINK_UP: &str = "Up";

fn decode_downstream(status: &mut Status, rows: &[Row]) -> Result<(), ParseError> {
    for row in rows {
        if row.len() != DOWNSTREAM_FIELDS {
            return Err(ParseError::RowArity {
                section: "downstream",
                expected: DOWNSTREAM_FIELDS,
                found: row.len(),
            });
        }

        status.downstream.push(DownstreamChannel {
            name: row[0].clone(),
            id: parse_uint(&row[1], "downstream", "channel id")?,
            frequency: parse_value_unit(&row[2], "downstream", "frequency", None)?,
            power: parse_value_unit(&row[3], "downstream", "power", None)?,
            snr: parse_value_unit(&row[4], "downstream", "SNR", None)?,
            modulation: row[5].clone(),
            octets: parse_uint(&row[6], "downstream", "octets")?,
            corrected: parse_uint(&row[7], "downstream", "corrected")?,
            uncorrectable: parse_uint(&row[8], "downstream", "uncorrectable")?,
        });
    }

    Ok(())
}

fn decode_upstream(status: &mut Status, rows: &[Row]) -> Result<(), ParseError> {
    for row in rows {
        if row.len() != UPSTREAM_FIELDS {
            return Err(ParseError::RowArity {
                section: "upstream",
                expected: UPSTREAM_FIELDS,
                found: row.len(),
            });
        }

        let symbol_rate =
            parse_value_unit(&row[5], "upstream", "symbol rate", Some(UPSTREAM_NA))?;

        status.upstream.push(UpstreamChannel {
            name: row[0].clone(),
            id: parse_uint(&row[1], "upstream", "channel id")?,
            frequency: parse_value_unit(&row[2], "upstream", "frequency", Some(UPSTREAM_NA))?,
            power: parse_value_unit(&row[3], "upstream", "power", Some(UPSTREAM_NA))?,
            channel_type: row[4].clone(),
            // Truncate to whole kSym/s.
            symbol_rate: symbol_rate as u32,
            modulation: row[6].clone(),
        });
    }

    Ok(())
}

fn decode_system(status: &mut Status, rows: &[Row]) -> Result<(), ParseError> {
    for row in rows {
        // Other system rows (time and date, CM status, ...) are
        // intentionally unrecognized.
        if row.first().is_some_and(|token| token == UPTIME_LABEL) {
            status.uptime = decode_uptime(row)?;
        }
    }

    Ok(())
}

/// Decode an uptime row of the form `["System Uptime:", "7 d: 3 h: 42 m"]`.
fn decode_uptime(row: &Row) -> Result<Duration, ParseError> {
    if row.len() != 2 {
        return Err(ParseError::MalformedUptime {
            value: row.join(" "),
        });
    }

    // The duration token splits into six fields with the day, hour, and
    // minute values at the even positions.
    let fields: Vec<&str> = row[1].split_whitespace().collect();
    if fields.len() != 6 {
        return Err(ParseError::MalformedUptime {
            value: row[1].clone(),
        });
    }

    let mut parts = [0u64; 3];
    for (part, n) in parts.iter_mut().zip([0, 2, 4]) {
        *part = fields[n].parse().map_err(|_| ParseError::MalformedUptime {
            value: row[1].clone(),
        })?;
    }

    let [days, hours, minutes] = parts;
    Ok(Duration::from_secs((days * 24 + hours) * 3600 + minutes * 60))
}

fn decode_interfaces(status: &mut Status, rows: &[Row]) -> Result<(), ParseError> {
    for row in rows {
        if row.len() != INTERFACE_FIELDS {
            return Err(ParseError::RowArity {
                section: "interface",
                expected: INTERFACE_FIELDS,
                found: row.len(),
            });
        }

        let speed = if row[3] == SPEED_NA {
            "n/a".to_string()
        } else {
            row[3].clone()
        };

        status.interfaces.push(NetworkInterface {
            name: row[0].clone(),
            provisioned: row[1] == PROVISIONED,
            up: row[2] == LINK_UP,
            speed,
            mac: row[4].parse()?,
        });
    }

    Ok(())
}

/// Parse an unsigned integer cell.
fn parse_uint<T>(value: &str, section: &'static str, field: &'static str) -> Result<T, ParseError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    value.parse().map_err(|_| ParseError::InvalidNumber {
        section,
        field,
        value: value.to_string(),
    })
}

/// Decode a "value unit" cell, e.g. "591.000 MHz".
///
/// The cell must split on whitespace into exactly a value and a unit; the
/// unit is discarded. When `sentinel` matches the value field, the cell
/// reads as zero. Both channel decoders share this step.
fn parse_value_unit(
    cell: &str,
    section: &'static str,
    field: &'static str,
    sentinel: Option<&str>,
) -> Result<f64, ParseError> {
    let fields: Vec<&str> = cell.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(ParseError::MalformedValueUnit {
            section,
            field,
            value: cell.to_string(),
        });
    }

    let value = if sentinel == Some(fields[0]) {
        "0.0"
    } else {
        fields[0]
    };

    value.parse().map_err(|_| ParseError::InvalidNumber {
        section,
        field,
        value: cell.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(tokens: &[&str]) -> Row {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn group(rows: &[&[&str]]) -> RowGroup {
        RowGroup {
            rows: rows.iter().map(|r| row(r)).collect(),
        }
    }

    fn decode(group: &RowGroup) -> Result<Status, ParseError> {
        let mut status = Status::default();
        apply(&mut status, group)?;
        Ok(status)
    }

    const DOWNSTREAM_HEADER: &[&str] = &[
        "DCID",
        "Freq",
        "Power",
        "SNR",
        "Modulation",
        "Octets",
        "Correcteds",
        "Uncorrectables",
    ];

    const UPSTREAM_HEADER: &[&str] = &[
        "UCID",
        "Freq",
        "Power",
        "Channel Type",
        "Symbol Rate",
        "Modulation",
    ];

    const INTERFACE_HEADER: &[&str] = &[
        "Interface Name",
        "Provisioned",
        "State",
        "Speed (Mbps)",
        "MAC address",
    ];

    #[test]
    fn classification_table() {
        assert_eq!(SectionKind::classify("DCID"), SectionKind::Downstream);
        assert_eq!(SectionKind::classify("UCID"), SectionKind::Upstream);
        assert_eq!(
            SectionKind::classify("System Uptime:"),
            SectionKind::SystemInfo
        );
        assert_eq!(
            SectionKind::classify("Interface Name"),
            SectionKind::Interfaces
        );
        assert_eq!(SectionKind::classify("Foo"), SectionKind::Unknown);
        // Exact match only; no case folding or trimming beyond extraction.
        assert_eq!(SectionKind::classify("dcid"), SectionKind::Unknown);
        assert_eq!(SectionKind::classify("System Uptime"), SectionKind::Unknown);
    }

    #[test]
    fn downstream_row_decodes_losslessly() {
        let status = decode(&group(&[
            DOWNSTREAM_HEADER,
            &[
                "CH1", "1", "591.0 MHz", "2.1 dBmV", "38.5 dB", "QAM256", "123456", "10", "0",
            ],
        ]))
        .unwrap();

        assert_eq!(status.downstream.len(), 1);
        let channel = &status.downstream[0];
        assert_eq!(channel.name, "CH1");
        assert_eq!(channel.id, 1);
        assert_eq!(channel.frequency, 591.0);
        assert_eq!(channel.power, 2.1);
        assert_eq!(channel.snr, 38.5);
        assert_eq!(channel.modulation, "QAM256");
        assert_eq!(channel.octets, 123_456);
        assert_eq!(channel.corrected, 10);
        assert_eq!(channel.uncorrectable, 0);
    }

    #[test]
    fn downstream_negative_power_parses() {
        let status = decode(&group(&[
            DOWNSTREAM_HEADER,
            &[
                "Downstream 1",
                "85",
                "591.000 MHz",
                "-2.4 dBmV",
                "38.983 dB",
                "256QAM",
                "152963833",
                "1270",
                "321",
            ],
        ]))
        .unwrap();

        assert_eq!(status.downstream[0].power, -2.4);
        assert_eq!(status.downstream[0].frequency, 591.0);
    }

    #[test]
    fn downstream_wrong_arity() {
        let err = decode(&group(&[
            DOWNSTREAM_HEADER,
            &["CH1", "1", "591.0 MHz", "2.1 dBmV"],
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            ParseError::RowArity {
                section: "downstream",
                expected: 9,
                found: 4,
            }
        ));
    }

    #[test]
    fn downstream_bad_integer() {
        let err = decode(&group(&[
            DOWNSTREAM_HEADER,
            &[
                "CH1", "one", "591.0 MHz", "2.1 dBmV", "38.5 dB", "QAM256", "123456", "10", "0",
            ],
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            ParseError::InvalidNumber {
                field: "channel id",
                ..
            }
        ));
    }

    #[test]
    fn downstream_malformed_value_unit() {
        // Missing unit.
        let err = decode(&group(&[
            DOWNSTREAM_HEADER,
            &[
                "CH1", "1", "591.0", "2.1 dBmV", "38.5 dB", "QAM256", "123456", "10", "0",
            ],
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedValueUnit {
                field: "frequency",
                ..
            }
        ));

        // Extra fields.
        let err = decode(&group(&[
            DOWNSTREAM_HEADER,
            &[
                "CH1", "1", "591.0 MHz x", "2.1 dBmV", "38.5 dB", "QAM256", "123456", "10", "0",
            ],
        ]))
        .unwrap_err();
        assert!(matches!(err, ParseError::MalformedValueUnit { .. }));
    }

    #[test]
    fn downstream_unparseable_value_field() {
        let err = decode(&group(&[
            DOWNSTREAM_HEADER,
            &[
                "CH1", "1", "x MHz", "2.1 dBmV", "38.5 dB", "QAM256", "123456", "10", "0",
            ],
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            ParseError::InvalidNumber {
                field: "frequency",
                ..
            }
        ));
    }

    #[test]
    fn upstream_row_decodes() {
        let status = decode(&group(&[
            UPSTREAM_HEADER,
            &[
                "Upstream 1",
                "4",
                "35.600 MHz",
                "46.8 dBmV",
                "DOCSIS2.0 (ATDMA)",
                "5120 kSym/s",
                "64QAM",
            ],
        ]))
        .unwrap();

        assert_eq!(status.upstream.len(), 1);
        let channel = &status.upstream[0];
        assert_eq!(channel.name, "Upstream 1");
        assert_eq!(channel.id, 4);
        assert_eq!(channel.frequency, 35.6);
        assert_eq!(channel.power, 46.8);
        assert_eq!(channel.channel_type, "DOCSIS2.0 (ATDMA)");
        assert_eq!(channel.symbol_rate, 5120);
        assert_eq!(channel.modulation, "64QAM");
    }

    #[test]
    fn upstream_sentinel_reads_as_zero() {
        let status = decode(&group(&[
            UPSTREAM_HEADER,
            &[
                "Upstream 3",
                "6",
                "---- MHz",
                "---- dBmV",
                "UNKNOWN",
                "---- kSym/s",
                "----",
            ],
        ]))
        .unwrap();

        let channel = &status.upstream[0];
        assert_eq!(channel.frequency, 0.0);
        assert_eq!(channel.power, 0.0);
        assert_eq!(channel.symbol_rate, 0);
        // Modulation is not a value-unit cell; the sentinel stays verbatim.
        assert_eq!(channel.modulation, "----");
    }

    #[test]
    fn upstream_symbol_rate_truncates() {
        let status = decode(&group(&[
            UPSTREAM_HEADER,
            &[
                "Upstream 1",
                "4",
                "35.600 MHz",
                "46.8 dBmV",
                "DOCSIS2.0 (ATDMA)",
                "2560.9 kSym/s",
                "64QAM",
            ],
        ]))
        .unwrap();

        assert_eq!(status.upstream[0].symbol_rate, 2560);
    }

    #[test]
    fn upstream_wrong_arity() {
        let err = decode(&group(&[UPSTREAM_HEADER, &["Upstream 1", "4"]])).unwrap_err();

        assert!(matches!(
            err,
            ParseError::RowArity {
                section: "upstream",
                expected: 7,
                found: 2,
            }
        ));
    }

    #[test]
    fn uptime_decodes_exactly() {
        let status = decode(&group(&[&["System Uptime:", "2 d: 3 h: 15 m"]])).unwrap();

        // 2 days + 3 hours + 15 minutes = 2955 minutes.
        assert_eq!(status.uptime, Duration::from_secs(2955 * 60));
    }

    #[test]
    fn uptime_zero_components() {
        let status = decode(&group(&[&["System Uptime:", "0 d: 0 h: 0 m"]])).unwrap();
        assert_eq!(status.uptime, Duration::ZERO);
    }

    #[test]
    fn system_group_ignores_other_rows() {
        let status = decode(&group(&[
            &["System Uptime:", "1 d: 0 h: 0 m"],
            &["Time and Date:", "Thu 2026-08-20 11:22:33"],
            &["CM Status:", "OPERATIONAL"],
        ]))
        .unwrap();

        assert_eq!(status.uptime, Duration::from_secs(24 * 3600));
        assert!(status.is_empty());
    }

    #[test]
    fn uptime_wrong_row_arity() {
        let err = decode(&group(&[&["System Uptime:", "1 d: 0 h: 0 m", "extra"]])).unwrap_err();
        assert!(matches!(err, ParseError::MalformedUptime { .. }));
    }

    #[test]
    fn uptime_wrong_field_count() {
        let err = decode(&group(&[&["System Uptime:", "1 d: 0 h:"]])).unwrap_err();
        assert!(matches!(err, ParseError::MalformedUptime { .. }));
    }

    #[test]
    fn uptime_bad_number() {
        let err = decode(&group(&[&["System Uptime:", "x d: 0 h: 0 m"]])).unwrap_err();
        assert!(matches!(err, ParseError::MalformedUptime { .. }));
    }

    #[test]
    fn interface_row_decodes() {
        let status = decode(&group(&[
            INTERFACE_HEADER,
            &["LAN Port 1", "Enabled", "Up", "1000 (Full)", "44:e1:37:a0:15:08"],
        ]))
        .unwrap();

        let interface = &status.interfaces[0];
        assert_eq!(interface.name, "LAN Port 1");
        assert!(interface.provisioned);
        assert!(interface.up);
        assert_eq!(interface.speed, "1000 (Full)");
        assert_eq!(interface.mac.to_string(), "44:e1:37:a0:15:08");
    }

    #[test]
    fn interface_booleans_are_exact_literals() {
        let status = decode(&group(&[
            INTERFACE_HEADER,
            &["A", "Enabled", "Up", "100", "00:00:00:00:00:01"],
            &["B", "enabled", "up", "100", "00:00:00:00:00:02"],
            &["C", "Disabled", "Down", "100", "00:00:00:00:00:03"],
            &["D", "ENABLED", "UP", "100", "00:00:00:00:00:04"],
        ]))
        .unwrap();

        assert!(status.interfaces[0].provisioned && status.interfaces[0].up);
        assert!(!status.interfaces[1].provisioned && !status.interfaces[1].up);
        assert!(!status.interfaces[2].provisioned && !status.interfaces[2].up);
        assert!(!status.interfaces[3].provisioned && !status.interfaces[3].up);
    }

    #[test]
    fn interface_speed_sentinel_maps_to_na() {
        let status = decode(&group(&[
            INTERFACE_HEADER,
            &["CABLE", "Enabled", "Up", "-----", "44:e1:37:a0:15:0a"],
        ]))
        .unwrap();

        assert_eq!(status.interfaces[0].speed, "n/a");
    }

    #[test]
    fn interface_bad_mac_aborts() {
        let err = decode(&group(&[
            INTERFACE_HEADER,
            &["LAN Port 1", "Enabled", "Up", "1000 (Full)", "not-a-mac"],
        ]))
        .unwrap_err();

        assert!(matches!(err, ParseError::InvalidMac { .. }));
    }

    #[test]
    fn interface_wrong_arity() {
        let err = decode(&group(&[INTERFACE_HEADER, &["LAN Port 1", "Enabled"]])).unwrap_err();

        assert!(matches!(
            err,
            ParseError::RowArity {
                section: "interface",
                expected: 5,
                found: 2,
            }
        ));
    }

    #[test]
    fn recognized_header_with_no_rows_is_an_error() {
        let err = decode(&group(&[DOWNSTREAM_HEADER])).unwrap_err();
        assert!(matches!(
            err,
            ParseError::NoRows {
                section: "downstream",
            }
        ));

        let err = decode(&group(&[INTERFACE_HEADER])).unwrap_err();
        assert!(matches!(
            err,
            ParseError::NoRows {
                section: "interface",
            }
        ));
    }

    #[test]
    fn unknown_header_is_skipped() {
        let status = decode(&group(&[
            &["Foo", "Bar"],
            &["anything", "at", "all"],
        ]))
        .unwrap();

        assert!(status.is_empty());
        assert_eq!(status.uptime, Duration::ZERO);
    }

    #[test]
    fn empty_group_is_an_error() {
        let err = decode(&RowGroup::default()).unwrap_err();
        assert!(matches!(err, ParseError::EmptyGroup));
    }

    #[test]
    fn groups_accumulate_into_one_status() {
        let mut status = Status::default();

        apply(
            &mut status,
            &group(&[
                DOWNSTREAM_HEADER,
                &[
                    "CH1", "1", "591.0 MHz", "2.1 dBmV", "38.5 dB", "QAM256", "123456", "10", "0",
                ],
            ]),
        )
        .unwrap();
        apply(
            &mut status,
            &group(&[&["System Uptime:", "0 d: 2 h: 43 m"]]),
        )
        .unwrap();

        assert_eq!(status.downstream.len(), 1);
        assert_eq!(status.uptime, Duration::from_secs(2 * 3600 + 43 * 60));
    }
}
