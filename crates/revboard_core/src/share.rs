//! Percentage-share derivation for slice tooltips.

use crate::abbrev::round_1dp;

/// Percentage share of `values[index]` relative to the sum of all values,
/// rounded half away from zero to one decimal place.
///
/// A zero total (including an empty slice) yields `0.0` rather than dividing
/// by zero. An out-of-range index contributes nothing and also yields `0.0`.
pub fn share_of(values: &[f64], index: usize) -> f64 {
    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return 0.0;
    }
    let value = values.get(index).copied().unwrap_or(0.0);
    round_1dp(value / total * 100.0)
}

/// Tooltip line for one slice: `"{label}: {amount} ({share}%)"`.
///
/// `amount` is expected to be already currency-formatted; the share prints
/// with one decimal place.
pub fn share_tooltip(label: &str, amount: &str, share: f64) -> String {
    format!("{label}: {amount} ({share:.1}%)")
}
