//! Reusable TUI components.

pub mod charts;
