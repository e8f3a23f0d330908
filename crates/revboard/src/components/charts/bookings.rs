//! Booking volume bar chart.
//!
//! Counts share the revenue labels; ticks are plain integers, no currency.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::{Bar, BarChart, BarGroup},
};

use super::ChartContext;
use crate::util::styles::{BOOKING_COLOR, HELP_COLOR, focused_block};

const BAR_WIDTH: u16 = 5;
const BAR_GAP: u16 = 1;

pub fn render_booking_volume(
    frame: &mut Frame,
    mount: Option<Rect>,
    labels: &[String],
    bookings: &[f64],
    ctx: &ChartContext,
) {
    let Some(area) = mount else {
        tracing::debug!("booking volume mount point absent, skipping");
        return;
    };
    if bookings.is_empty() {
        tracing::debug!("booking counts are empty, skipping booking chart");
        return;
    }

    // Sample bars to fit the available width, like the axis would thin ticks
    let inner_width = area.width.saturating_sub(2) as usize;
    let capacity = (inner_width / (BAR_WIDTH + BAR_GAP) as usize).max(1);
    let step = bookings.len().div_ceil(capacity).max(1);

    let bars: Vec<Bar> = bookings
        .iter()
        .enumerate()
        .step_by(step)
        .take(capacity)
        .map(|(i, &count)| {
            let label = labels.get(i).map(String::as_str).unwrap_or("");
            Bar::default()
                .label(Line::from(label.to_string()))
                .value(count.max(0.0) as u64)
                .style(Style::default().fg(BOOKING_COLOR))
        })
        .collect();

    let selected = ctx.selected.min(bookings.len() - 1);
    let detail = format!(
        " {}: {:.0} ",
        labels.get(selected).map(String::as_str).unwrap_or(""),
        bookings[selected].max(0.0)
    );

    let block = focused_block(&format!(" {} ", ctx.names.bookings), ctx.focused)
        .title_bottom(Line::from(detail).fg(HELP_COLOR));

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP);
    frame.render_widget(chart, area);
}
