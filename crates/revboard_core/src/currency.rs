//! Localized currency formatting with zero fractional digits.
//!
//! Mirrors the presentation rules of locale-aware currency formatters:
//! per-currency symbol, symbol placement, and grouping separator. Amounts
//! are rounded half away from zero to whole units.

use crate::error::CurrencyError;

/// Substituted when the dashboard dataset carries no currency code.
pub const FALLBACK_CURRENCY: &str = "VND";

/// Where the currency symbol sits relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Prefix,
    Suffix,
}

/// Presentation rules for one currency.
#[derive(Debug, Clone)]
struct CurrencyStyle {
    symbol: String,
    placement: Placement,
    group_separator: char,
}

/// Look up presentation rules for a known currency code (uppercase).
///
/// Unknown but structurally valid codes get no entry here; the formatter
/// falls back to rendering the code itself as a suffix, which is what
/// locale-aware runtimes do for currencies they carry no symbol for.
fn known_style(code: &str) -> Option<CurrencyStyle> {
    let (symbol, placement, group_separator) = match code {
        "USD" => ("$", Placement::Prefix, ','),
        "EUR" => ("€", Placement::Prefix, ','),
        "GBP" => ("£", Placement::Prefix, ','),
        "JPY" | "CNY" => ("¥", Placement::Prefix, ','),
        "KRW" => ("₩", Placement::Prefix, ','),
        "INR" => ("₹", Placement::Prefix, ','),
        "THB" => ("฿", Placement::Prefix, ','),
        "AUD" => ("A$", Placement::Prefix, ','),
        "CAD" => ("CA$", Placement::Prefix, ','),
        "VND" => ("₫", Placement::Suffix, '.'),
        _ => return None,
    };
    Some(CurrencyStyle {
        symbol: symbol.to_string(),
        placement,
        group_separator,
    })
}

/// Formats monetary amounts for one currency.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    code: String,
    style: CurrencyStyle,
}

impl CurrencyFormatter {
    /// Build a formatter for the given ISO 4217 code.
    ///
    /// An absent or empty code substitutes [`FALLBACK_CURRENCY`]. A code that
    /// is present but not exactly 3 ASCII letters is rejected with
    /// [`CurrencyError::InvalidCurrencyCode`]; the error is propagated, never
    /// silently replaced by the fallback. Input case is normalized.
    pub fn from_code(code: &str) -> Result<Self, CurrencyError> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Ok(Self::for_valid_code(FALLBACK_CURRENCY.to_string()));
        }
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError::InvalidCurrencyCode(trimmed.to_string()));
        }
        Ok(Self::for_valid_code(trimmed.to_ascii_uppercase()))
    }

    fn for_valid_code(code: String) -> Self {
        let style = known_style(&code).unwrap_or(CurrencyStyle {
            symbol: code.clone(),
            placement: Placement::Suffix,
            group_separator: ',',
        });
        Self { code, style }
    }

    /// The normalized currency code this formatter renders.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Format an amount with zero fractional digits and grouping separators.
    ///
    /// Rounds half away from zero to whole units. Never fails: a formatter
    /// only exists for codes that passed structural validation, and every
    /// such code has a presentation (symbolic or code-suffixed).
    pub fn format(&self, amount: f64) -> String {
        let units = amount.abs().round() as u64;
        let digits = group_digits(units, self.style.group_separator);
        let sign = if amount < 0.0 && units > 0 { "-" } else { "" };

        match self.style.placement {
            Placement::Prefix => format!("{sign}{}{digits}", self.style.symbol),
            Placement::Suffix => format!("{sign}{digits} {}", self.style.symbol),
        }
    }
}

/// Insert a grouping separator every three digits from the right.
fn group_digits(value: u64, separator: char) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    let lead = raw.len() % 3;
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
