//! Dashboard dataset loading.

mod dashboard_data;

pub use dashboard_data::{DashboardData, DataError, DatasetNames};
