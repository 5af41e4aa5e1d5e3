//! Human-readable formatting helpers
//!
//! Provides consistent display formatting across VendHub tools. User-facing
//! unit labels are Russian, matching the back-office UI language.

/// Duration format selection thresholds (seconds)
const MINUTE: u64 = 60;
const HOUR: u64 = 3600;

/// Format an estimated duration for display.
///
/// - Under a minute: whole seconds (`45 сек`)
/// - Under an hour: minutes, rounded half-up (`90` → `2 мин`)
/// - Otherwise: hours, rounded half-up (`7200` → `2 ч`)
///
/// # Examples
///
/// ```
/// use vendhub_common::format::format_duration;
///
/// assert_eq!(format_duration(45), "45 сек");
/// assert_eq!(format_duration(90), "2 мин");
/// assert_eq!(format_duration(7200), "2 ч");
/// ```
pub fn format_duration(seconds: u64) -> String {
    if seconds < MINUTE {
        format!("{} сек", seconds)
    } else if seconds < HOUR {
        format!("{} мин", div_round(seconds, MINUTE))
    } else {
        format!("{} ч", div_round(seconds, HOUR))
    }
}

/// Integer division rounded half-up
fn div_round(value: u64, divisor: u64) -> u64 {
    (value + divisor / 2) / divisor
}

/// Format bytes for human-readable display
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
