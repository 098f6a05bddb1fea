use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else {
        format!("{hours}h {minutes}m")
    }
}

pub fn friendly_os_name(os: &str) -> String {
    match os {
        "darwin" | "macos" => "macOS".to_string(),
        "linux" => "Linux".to_string(),
        "windows" => "Windows".to_string(),
        other => other.to_string(),
    }
}

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// Truncates or right-pads `s` so it occupies exactly `width` terminal columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = truncate_unicode(s, width);
    let filled = out.width();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(filled)));
    out
}
