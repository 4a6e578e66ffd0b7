//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// One decimal, the way totals are reported.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

/// Hours as "02h 30m".
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    format!("{:02}h {:02}m", h, m)
}

pub fn study_mark(is_study: bool) -> &'static str {
    if is_study { "📖" } else { "" }
}
