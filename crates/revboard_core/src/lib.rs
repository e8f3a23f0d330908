//! Revenue dashboard formatting library
//!
//! This crate holds the presentational logic shared by every chart on the
//! revenue dashboard:
//! - Compact axis-tick abbreviation (K/M/B suffixes)
//! - Localized currency formatting with zero fractional digits
//! - Percentage-share derivation and tooltip text assembly
//! - The labeled series model that drives each chart
//!
//! Everything here is pure and stateless; rendering lives in the `revboard`
//! crate.

pub mod abbrev;
pub mod currency;
pub mod error;
pub mod series;
pub mod share;

pub use abbrev::abbreviate;
pub use currency::{CurrencyFormatter, FALLBACK_CURRENCY};
pub use error::CurrencyError;
pub use series::Series;
pub use share::{share_of, share_tooltip};
