//! Chart bindings for the revenue dashboard.
//!
//! Five independent bindings, one per chart view. Each takes its mount point
//! and backing data explicitly; if the mount is absent or the data is empty
//! the binding skips silently, matching the behavior of the original page
//! when a section was hidden for the viewer.

mod bookings;
mod category_revenue;
mod revenue_share;
mod revenue_trend;
mod top_rated;

pub use bookings::render_booking_volume;
pub use category_revenue::render_category_revenue;
pub use revenue_share::render_revenue_share;
pub use revenue_trend::render_revenue_trend;
pub use top_rated::render_top_rated;

use revboard_core::CurrencyFormatter;

use crate::data::DatasetNames;

/// Shared per-render context handed to every binding.
pub struct ChartContext<'a> {
    pub formatter: &'a CurrencyFormatter,
    pub names: &'a DatasetNames,
    /// Focused charts show the selection highlight
    pub focused: bool,
    /// Index of the inspected data point (the hover-tooltip stand-in)
    pub selected: usize,
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{Terminal, backend::TestBackend};

    pub fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(60, 16)).unwrap()
    }

    /// True when no cell was touched by the draw.
    pub fn is_blank(terminal: &Terminal<TestBackend>) -> bool {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .all(|cell| cell.symbol() == " ")
    }

    /// True when the rendered buffer contains `needle` on a single row.
    pub fn contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
        let buffer = terminal.backend().buffer();
        for y in 0..buffer.area.height {
            let mut row = String::new();
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    row.push_str(cell.symbol());
                }
            }
            if row.contains(needle) {
                return true;
            }
        }
        false
    }
}
