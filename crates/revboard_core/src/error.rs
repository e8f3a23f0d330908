use std::fmt;

/// Errors raised by the currency formatting layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// The supplied code is not a structurally valid 3-letter ISO code.
    InvalidCurrencyCode(String),
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::InvalidCurrencyCode(code) => {
                write!(f, "invalid currency code {code:?} (expected 3 ASCII letters)")
            }
        }
    }
}

impl std::error::Error for CurrencyError {}
