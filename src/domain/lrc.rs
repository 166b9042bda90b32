/// Format a start time in seconds as an LRC timestamp, `[MM:SS.CC]`.
///
/// Minutes are not wrapped into hours; a two-hour mark renders as `[120:00.00]`.
/// Hundredths are truncated, not rounded, so `65.256` becomes `[01:05.25]`.
/// Callers only pass non-negative values.
pub fn format_timestamp(seconds: f64) -> String {
    let whole = seconds as u64;
    let minutes = whole / 60;
    let secs = whole % 60;
    let centis = ((seconds - whole as f64) * 100.0) as u64;
    format!("[{:02}:{:02}.{:02}]", minutes, secs, centis)
}
