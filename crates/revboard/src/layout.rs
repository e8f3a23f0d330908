//! Mount-point layout for the dashboard.
//!
//! Each chart renders into a named mount point. A mount point that does not
//! fit the current terminal size is simply absent (`None`), and its binding
//! skips rendering silently, the same way the original page skipped charts
//! whose placeholder element was missing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Smallest area a chart can render into legibly.
pub const MIN_CHART_WIDTH: u16 = 24;
pub const MIN_CHART_HEIGHT: u16 = 6;

/// Named mount points, computed fresh for every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardLayout {
    pub revenue_trend: Option<Rect>,
    pub revenue_share: Option<Rect>,
    pub booking_volume: Option<Rect>,
    pub category_revenue: Option<Rect>,
    pub top_rated: Option<Rect>,
    pub status: Option<Rect>,
}

impl DashboardLayout {
    /// Split the terminal area into the five chart mounts plus a status line.
    ///
    /// Top row: revenue trend and revenue share. Bottom row: booking volume,
    /// category revenue, top rated. Undersized slots become `None`.
    pub fn compute(area: Rect) -> Self {
        if area.height < 2 || area.width == 0 {
            return Self::default();
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(55),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[0]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[1]);

        Self {
            revenue_trend: mount(top[0]),
            revenue_share: mount(top[1]),
            booking_volume: mount(bottom[0]),
            category_revenue: mount(bottom[1]),
            top_rated: mount(bottom[2]),
            status: (rows[2].height >= 1).then_some(rows[2]),
        }
    }
}

/// A slot only counts as a mount point if a chart can fit in it.
fn mount(rect: Rect) -> Option<Rect> {
    (rect.width >= MIN_CHART_WIDTH && rect.height >= MIN_CHART_HEIGHT).then_some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_size_terminal_mounts_everything() {
        let layout = DashboardLayout::compute(Rect::new(0, 0, 120, 40));
        assert!(layout.revenue_trend.is_some());
        assert!(layout.revenue_share.is_some());
        assert!(layout.booking_volume.is_some());
        assert!(layout.category_revenue.is_some());
        assert!(layout.top_rated.is_some());
        assert!(layout.status.is_some());
    }

    #[test]
    fn test_tiny_terminal_has_no_mounts() {
        let layout = DashboardLayout::compute(Rect::new(0, 0, 10, 3));
        assert!(layout.revenue_trend.is_none());
        assert!(layout.revenue_share.is_none());
        assert!(layout.booking_volume.is_none());
        assert!(layout.category_revenue.is_none());
        assert!(layout.top_rated.is_none());
    }

    #[test]
    fn test_narrow_terminal_drops_bottom_row() {
        // Wide enough for the top row only: bottom thirds fall under the
        // minimum chart width.
        let layout = DashboardLayout::compute(Rect::new(0, 0, 60, 40));
        assert!(layout.revenue_trend.is_some());
        assert!(layout.booking_volume.is_none());
    }

    #[test]
    fn test_zero_area() {
        let layout = DashboardLayout::compute(Rect::new(0, 0, 0, 0));
        assert!(layout.status.is_none());
    }
}
