//! The dashboard dataset: every series the reporting backend precomputes
//! for one render of the revenue page, plus the currency code and optional
//! localized dataset names.

use std::fs;
use std::path::Path;

use revboard_core::Series;
use serde::{Deserialize, Serialize};

/// Error types for dataset loading
#[derive(Debug)]
pub enum DataError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Io(msg) => write!(f, "IO error: {}", msg),
            DataError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for DataError {}

/// Localized dataset names with fixed English defaults.
///
/// The reporting backend may override any subset of these; absent fields
/// fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetNames {
    pub revenue: String,
    pub bookings: String,
    pub share: String,
    pub category: String,
    /// Noun appended to booking counts in category tooltips
    pub category_bookings: String,
    pub rating: String,
    /// Noun appended to review counts in rating tooltips
    pub rating_reviews: String,
}

impl Default for DatasetNames {
    fn default() -> Self {
        Self {
            revenue: "Revenue".to_string(),
            bookings: "Bookings".to_string(),
            share: "Revenue share".to_string(),
            category: "Category revenue".to_string(),
            category_bookings: "bookings".to_string(),
            rating: "Avg rating".to_string(),
            rating_reviews: "reviews".to_string(),
        }
    }
}

/// One render's worth of dashboard input.
///
/// All series are externally owned and precomputed; this struct is the
/// explicit replacement for the page-global variables the reporting layer
/// used to inject. Booking counts share the revenue labels, which is why
/// they are a bare value array rather than a full series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardData {
    /// 3-letter ISO currency code; empty means the fallback currency
    #[serde(default)]
    pub currency: String,

    /// Monthly revenue (labels are month names)
    #[serde(default)]
    pub revenue: Series,

    /// Monthly booking counts, aligned with the revenue labels
    #[serde(default)]
    pub bookings: Vec<f64>,

    /// Per-category revenue
    #[serde(default)]
    pub categories: Series,

    /// Booking counts per category, aligned with `categories`
    #[serde(default)]
    pub category_bookings: Vec<u64>,

    /// Average rating per top-rated item (0..=5)
    #[serde(default)]
    pub ratings: Series,

    /// Review counts, aligned with `ratings`
    #[serde(default)]
    pub rating_reviews: Vec<u64>,

    #[serde(default)]
    pub dataset_names: DatasetNames,
}

impl DashboardData {
    /// Load a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = fs::read_to_string(path).map_err(|e| DataError::Io(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| DataError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_dataset() {
        let json = r#"{
            "currency": "usd",
            "revenue": {
                "labels": ["Jan", "Feb", "Mar"],
                "values": [1000.0, 2500.0, 1800.0]
            },
            "bookings": [12, 31, 20],
            "categories": {
                "labels": ["Beach", "City"],
                "values": [3200.0, 2100.0]
            },
            "category_bookings": [40, 23],
            "ratings": {
                "labels": ["Sunset Cruise"],
                "values": [4.8]
            },
            "rating_reviews": [120],
            "dataset_names": { "revenue": "Doanh thu" }
        }"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let data = DashboardData::load(file.path()).unwrap();
        assert_eq!(data.currency, "usd");
        assert_eq!(data.revenue.len(), 3);
        assert_eq!(data.bookings, vec![12.0, 31.0, 20.0]);
        assert_eq!(data.category_bookings, vec![40, 23]);
        // Overridden name sticks, the rest keep their defaults
        assert_eq!(data.dataset_names.revenue, "Doanh thu");
        assert_eq!(data.dataset_names.bookings, "Bookings");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let data = DashboardData::load(file.path()).unwrap();
        assert!(data.currency.is_empty());
        assert!(data.revenue.is_empty());
        assert!(data.bookings.is_empty());
        assert!(data.ratings.is_empty());
    }

    #[test]
    fn test_load_errors_are_classified() {
        let missing = DashboardData::load(Path::new("/nonexistent/dashboard.json"));
        assert!(matches!(missing, Err(DataError::Io(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        let bad = DashboardData::load(file.path());
        assert!(matches!(bad, Err(DataError::Parse(_))));
    }
}
