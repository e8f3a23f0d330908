//! Compact number abbreviation for axis ticks (e.g. 1500000 -> "1.5M").

/// Round to one decimal place, half away from zero.
pub(crate) fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Abbreviate a magnitude into a compact tick label.
///
/// Thresholds are checked in strict descending order with `>=`, so values
/// just under a boundary keep the smaller suffix: `abbreviate(999_999.0)`
/// is `"1000.0K"`, not `"1.0M"`.
///
/// Below 1,000 the value is rendered with its default `Display` form (no
/// forced decimals). No grouping separators are applied here; that is the
/// currency layer's job.
///
/// Negative input is outside the dashboard's domain and is rendered with
/// the default form unabbreviated.
pub fn abbreviate(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{:.1}B", round_1dp(value / 1_000_000_000.0))
    } else if value >= 1_000_000.0 {
        format!("{:.1}M", round_1dp(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("{:.1}K", round_1dp(value / 1_000.0))
    } else {
        format!("{}", value)
    }
}
