/// Minimum wall-clock spacing between refresh passes while on Wi-Fi.
pub const WIFI_INTERVAL_MS: i64 = 30_000;

/// Minimum spacing on any other network class.
pub const DEFAULT_INTERVAL_MS: i64 = 300_000;

/// What the throttle gate decided about one trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// The interval has not elapsed yet; leave everything untouched.
    NotDue,

    /// The interval elapsed, but the display is off; skip the work and
    /// leave the throttle clock untouched.
    ScreenOff,

    /// Run the fetch-and-render pass and advance the throttle clock.
    Refresh,
}

/// Interval to wait between passes for the current network class.
pub fn refresh_interval_ms(wifi: bool) -> i64 {
    if wifi {
        WIFI_INTERVAL_MS
    } else {
        DEFAULT_INTERVAL_MS
    }
}

/// Evaluate the throttle gate for one trigger.
///
/// Throttling is in wall-clock time, not fetch attempts: elapsed time is
/// measured against the last *performed* pass, and an elapsed time equal
/// to the interval is already due.
pub fn evaluate(
    now_ms: i64,
    prior_last_update_ms: i64,
    screen_on: bool,
    wifi: bool,
) -> ThrottleDecision {
    if now_ms - prior_last_update_ms < refresh_interval_ms(wifi) {
        return ThrottleDecision::NotDue;
    }

    if !screen_on {
        return ThrottleDecision::ScreenOff;
    }

    ThrottleDecision::Refresh
}
