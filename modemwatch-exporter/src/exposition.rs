//! Prometheus text exposition rendering.
//!
//! Renders a [`Status`] in the text-based exposition format (version
//! 0.0.4). Each family carries its HELP and TYPE comments followed by one
//! sample per channel or interface, labeled by name.

use modemwatch_types::Status;

/// Render a status snapshot in Prometheus exposition format.
pub fn render_status(status: &Status) -> String {
    let mut output = String::new();

    output.push_str("# HELP modem_uptime_seconds Device uptime in seconds.\n");
    output.push_str("# TYPE modem_uptime_seconds gauge\n");
    output.push_str(&format!(
        "modem_uptime_seconds {}\n",
        status.uptime.as_secs()
    ));

    output.push_str(
        "# HELP modem_downstream_power_dbmv Current power level for the downstream connection in dBmV.\n",
    );
    output.push_str("# TYPE modem_downstream_power_dbmv gauge\n");
    for channel in &status.downstream {
        output.push_str(&format!(
            "modem_downstream_power_dbmv{{name=\"{}\"}} {}\n",
            escape_label_value(&channel.name),
            channel.power
        ));
    }

    output.push_str("# HELP modem_downstream_bytes_total Number of downstream bytes total.\n");
    output.push_str("# TYPE modem_downstream_bytes_total counter\n");
    for channel in &status.downstream {
        output.push_str(&format!(
            "modem_downstream_bytes_total{{name=\"{}\"}} {}\n",
            escape_label_value(&channel.name),
            channel.octets
        ));
    }

    output.push_str(
        "# HELP modem_downstream_corrected_symbols_total Number of downstream corrected symbols total.\n",
    );
    output.push_str("# TYPE modem_downstream_corrected_symbols_total counter\n");
    for channel in &status.downstream {
        output.push_str(&format!(
            "modem_downstream_corrected_symbols_total{{name=\"{}\"}} {}\n",
            escape_label_value(&channel.name),
            channel.corrected
        ));
    }

    output.push_str(
        "# HELP modem_downstream_uncorrectable_symbols_total Number of downstream uncorrectable symbols total.\n",
    );
    output.push_str("# TYPE modem_downstream_uncorrectable_symbols_total counter\n");
    for channel in &status.downstream {
        output.push_str(&format!(
            "modem_downstream_uncorrectable_symbols_total{{name=\"{}\"}} {}\n",
            escape_label_value(&channel.name),
            channel.uncorrectable
        ));
    }

    output.push_str(
        "# HELP modem_upstream_power_dbmv Current power level for the upstream connection in dBmV.\n",
    );
    output.push_str("# TYPE modem_upstream_power_dbmv gauge\n");
    for channel in &status.upstream {
        output.push_str(&format!(
            "modem_upstream_power_dbmv{{name=\"{}\"}} {}\n",
            escape_label_value(&channel.name),
            channel.power
        ));
    }

    output.push_str(
        "# HELP modem_upstream_symbols_per_second Current symbol rate for the upstream connection in symbols per second.\n",
    );
    output.push_str("# TYPE modem_upstream_symbols_per_second gauge\n");
    for channel in &status.upstream {
        // Devices report kSym/s.
        output.push_str(&format!(
            "modem_upstream_symbols_per_second{{name=\"{}\"}} {}\n",
            escape_label_value(&channel.name),
            u64::from(channel.symbol_rate) * 1000
        ));
    }

    output.push_str("# HELP modem_interface_info Information about a network interface.\n");
    output.push_str("# TYPE modem_interface_info gauge\n");
    for interface in &status.interfaces {
        output.push_str(&format!(
            "modem_interface_info{{name=\"{}\",speed=\"{}\",mac=\"{}\"}} 1\n",
            escape_label_value(&interface.name),
            escape_label_value(&interface.speed),
            interface.mac
        ));
    }

    output.push_str(
        "# HELP modem_interface_provisioned Whether or not a network interface is provisioned (0 - false, 1 - true).\n",
    );
    output.push_str("# TYPE modem_interface_provisioned gauge\n");
    for interface in &status.interfaces {
        output.push_str(&format!(
            "modem_interface_provisioned{{name=\"{}\"}} {}\n",
            escape_label_value(&interface.name),
            u8::from(interface.provisioned)
        ));
    }

    output.push_str(
        "# HELP modem_interface_up Whether or not a network interface is up (0 - false, 1 - true).\n",
    );
    output.push_str("# TYPE modem_interface_up gauge\n");
    for interface in &status.interfaces {
        output.push_str(&format!(
            "modem_interface_up{{name=\"{}\"}} {}\n",
            escape_label_value(&interface.name),
            u8::from(interface.up)
        ));
    }

    output
}

/// Escape a label value for Prometheus format.
/// Backslash, double-quote, and newline must be escaped.
fn escape_label_value(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
