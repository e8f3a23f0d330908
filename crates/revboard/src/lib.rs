//! Terminal dashboard for revenue reporting.
//!
//! Binds precomputed numeric series (revenue, bookings, per-category revenue,
//! ratings) to terminal chart widgets. The formatting rules live in
//! `revboard_core`; this crate is the presentation layer: dataset loading,
//! layout of mount points, and the five chart bindings.

pub mod app;
pub mod components;
pub mod data;
pub mod layout;
pub mod logging;
pub mod util;

pub use app::App;
pub use data::{DashboardData, DatasetNames};
pub use logging::init_logging;
