//! Auction countdown formatting.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Label shown once an auction's end time has passed.
pub const ENDED_LABEL: &str = "Ended";

/// Format a remaining duration as `"{d}D: {h}H : {m}M : {s}S"`.
pub fn format_remaining(remaining_ms: i64) -> String {
    if remaining_ms <= 0 {
        return ENDED_LABEL.to_owned();
    }
    let days = remaining_ms / DAY_MS;
    let hours = (remaining_ms % DAY_MS) / HOUR_MS;
    let minutes = (remaining_ms % HOUR_MS) / MINUTE_MS;
    let seconds = (remaining_ms % MINUTE_MS) / SECOND_MS;
    format!("{days}D: {hours}H : {minutes}M : {seconds}S")
}

/// Milliseconds from `now_ms` until `end_ms`, floored at zero.
#[allow(clippy::cast_possible_truncation)]
pub fn remaining_ms(end_ms: f64, now_ms: f64) -> i64 {
    if !end_ms.is_finite() || !now_ms.is_finite() {
        return 0;
    }
    (end_ms - now_ms).max(0.0) as i64
}

/// Current wall-clock time in epoch milliseconds (browser only).
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Parse an ISO-8601 timestamp into epoch milliseconds (browser only).
pub fn parse_timestamp_ms(iso: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let ms = js_sys::Date::parse(iso);
        if ms.is_nan() { None } else { Some(ms) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = iso;
        None
    }
}

/// Countdown label for an auction ending at `end_date`.
///
/// Empty when the timestamp cannot be parsed (always the case during SSR);
/// the browser fills it in on the first tick.
pub fn countdown_label(end_date: &str) -> String {
    parse_timestamp_ms(end_date).map_or_else(String::new, |end| format_remaining(remaining_ms(end, now_ms())))
}
