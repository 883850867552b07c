// src/normalize/duration.rs

/// "MM:SS" → seconds. Exactly two `:`-separated base-10 integers, total ≥ 0.
/// Anything else is "unknown" (`None`).
pub fn parse_duration_secs(text: &str) -> Option<u64> {
    let parts: Vec<&str> = text.trim().split(':').collect();
    let [minutes, seconds] = parts.as_slice() else { return None };

    let minutes: i64 = minutes.trim().parse().ok()?;
    let seconds: i64 = seconds.trim().parse().ok()?;
    let total = minutes.checked_mul(60)?.checked_add(seconds)?;

    // negative totals are unknown, not clamped
    u64::try_from(total).ok()
}

/// "MM:SS" → milliseconds (XSPF unit).
pub fn parse_duration(text: &str) -> Option<u64> {
    parse_duration_secs(text)?.checked_mul(1000)
}
