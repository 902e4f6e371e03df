//! Human-readable renderings of byte counts and durations for the results
//! table.

const BYTE_UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Format a byte count using binary prefixes and one decimal place,
/// e.g. `1536` → `"1.5KB"`. Values below one kilobyte are printed as-is.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{}B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // The unit is picked on the rounded value so that e.g. 1023.96KB
    // prints as 1.0MB rather than 1024.0KB.
    let mut shown = round_tenth(value);
    if shown >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        unit += 1;
        shown = round_tenth(value / 1024.0);
    }
    format!("{:.1}{}", shown, BYTE_UNITS[unit])
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format seconds as a clock-style duration, e.g. `5400` → `"1h30m0s"`.
/// Leading zero components are dropped.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}
