//! Text rendering of the dashboard panel.
//!
//! Output depends only on the arguments, so identical inputs always produce
//! byte-identical text.

use std::fmt::Write;

use crate::format::{bytes_to_gb, format_uptime, pad_to_width};
use crate::system::host::HostInfo;
use crate::system::snapshot::Snapshot;

/// Columns between the left and right border.
pub const INNER_WIDTH: usize = 40;
const HOST_VALUE_WIDTH: usize = 25;
const TITLE: &str = "SYSTEM MONITOR";
const TITLE_INDENT: usize = 11;
const METRIC_LABEL_WIDTH: usize = 16;

pub fn render(snapshot: &Snapshot, host: &HostInfo, quit_key: &str) -> String {
    let mut out = String::new();
    border(&mut out, '╔', '╗');
    row(&mut out, &format!("{:TITLE_INDENT$}{TITLE}", ""));
    border(&mut out, '╠', '╣');

    if host.fields.any() {
        if host.fields.username {
            host_row(&mut out, "User:", &host.username);
        }
        if host.fields.hostname {
            host_row(&mut out, "Hostname:", &host.hostname);
        }
        if host.fields.os {
            host_row(&mut out, "OS:", &host.os);
        }
        if host.fields.uptime {
            host_row(&mut out, "Uptime:", &format_uptime(snapshot.uptime_secs));
        }
        border(&mut out, '╠', '╣');
    }

    metric_row(
        &mut out,
        "CPU Usage:",
        &format!("{:6.2}%", snapshot.cpu_percent),
    );
    border(&mut out, '╠', '╣');
    metric_row(
        &mut out,
        "RAM Total:",
        &format!("{:6.2} GB", bytes_to_gb(snapshot.memory_total)),
    );
    metric_row(
        &mut out,
        "RAM Used:",
        &format!(
            "{:6.2} GB ({:5.1}%)",
            bytes_to_gb(snapshot.memory_used),
            snapshot.memory_used_percent
        ),
    );
    metric_row(
        &mut out,
        "RAM Available:",
        &format!("{:6.2} GB", bytes_to_gb(snapshot.memory_available)),
    );
    border(&mut out, '╚', '╝');

    let _ = write!(out, "\nPress '{quit_key}' to quit.\n");
    out
}

fn border(out: &mut String, left: char, right: char) {
    out.push(left);
    out.extend(std::iter::repeat_n('═', INNER_WIDTH));
    out.push(right);
    out.push('\n');
}

fn row(out: &mut String, content: &str) {
    out.push('║');
    out.push_str(&pad_to_width(content, INNER_WIDTH));
    out.push('║');
    out.push('\n');
}

fn metric_row(out: &mut String, label: &str, value: &str) {
    row(out, &format!("  {label:<METRIC_LABEL_WIDTH$}{value}"));
}

fn host_row(out: &mut String, label: &str, value: &str) {
    row(
        out,
        &format!("  {label:<12}{} ", pad_to_width(value, HOST_VALUE_WIDTH)),
    );
}
