//! Formatting helpers for presenting flow metrics.

/// Truncate a label to `max_chars` characters, appending `...` when cut.
/// Counts characters, not bytes: template names are CJK.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

/// Round half away from zero at one decimal. `{:.1}` alone rounds ties to
/// even and would print 6.25 as "6.2"; the dashboard always rounds up.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Render an hour count as `5.5小时`, or `1天6.3小时` once it crosses a day
/// (whole days floored, remainder to one decimal). Callers guarantee a
/// non-negative input.
pub fn format_duration(hours: f64) -> String {
    if hours < 24.0 {
        format!("{:.1}小时", round_tenth(hours))
    } else {
        let days = (hours / 24.0).floor() as u64;
        let remaining = round_tenth(hours % 24.0);
        format!("{days}天{remaining:.1}小时")
    }
}

/// Thousands-separated count for the stat tiles.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// One-decimal percentage, e.g. `12.3%`.
pub fn format_share(pct: f64) -> String {
    format!("{:.1}%", round_tenth(pct))
}

/// Completion percentage, or the `n/a` sentinel when the rate is undefined
/// (nothing initiated).
pub fn format_completion(rate: Option<f64>) -> String {
    match rate {
        Some(pct) => format!("{:.1}%", round_tenth(pct)),
        None => "n/a".to_string(),
    }
}
