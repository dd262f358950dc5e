//! Fixed-width time rendering shared by every component.
//!
//! Minutes are never wrapped into hours: 100 minutes renders as `100:00`.

/// Render whole seconds as `MM:SS`.
pub fn format_seconds(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Render milliseconds as `MM:SS.CC` with centisecond resolution.
///
/// Sub-centisecond remainders are truncated, not rounded.
pub fn format_milliseconds(ms: u64) -> String {
    let total_secs = ms / 1000;
    let centis = (ms % 1000) / 10;
    format!("{}.{:02}", format_seconds(total_secs), centis)
}
