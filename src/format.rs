// Human-readable byte magnitudes

/// Units below the PB cap, each 1024 times the previous one.
const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];
const CAP_UNIT: &str = "PB";
const STEP: f64 = 1024.0;

/// Format a byte count as `<value> <unit>` with one decimal, e.g. `1.0 KB`.
///
/// The unit is the smallest one in bytes..PB for which the scaled value is
/// below 1024; anything at or above 1024 TB is shown in PB.
pub fn format_bytes(n: u64) -> String {
    format_magnitude(n as f64)
}

/// Format a per-second rate, e.g. `1.0 MB/s`. Negative rates (counter reset
/// under the passthrough rollover policy) keep their sign: `-512.0 bytes/s`.
pub fn format_rate(bytes_per_sec: f64) -> String {
    let sign = if bytes_per_sec < 0.0 { "-" } else { "" };
    format!("{}{}/s", sign, format_magnitude(bytes_per_sec.abs()))
}

/// Format a CPU percentage, e.g. `12.5%`.
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

fn format_magnitude(mut value: f64) -> String {
    for unit in UNITS {
        if value < STEP {
            return format!("{:.1} {}", value, unit);
        }
        value /= STEP;
    }
    format!("{:.1} {}", value, CAP_UNIT)
}
