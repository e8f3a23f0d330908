//! Top-rated items bar chart.
//!
//! Ratings live on a fixed 0..=5 scale; bars are scaled by 100 so one
//! decimal survives the integer bar height, and the printed value keeps the
//! two-decimal rating. Detail line: `"{rating} ★ · {n} reviews"`.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::{Bar, BarChart, BarGroup},
};
use revboard_core::Series;

use super::ChartContext;
use crate::util::styles::{HELP_COLOR, RATING_COLOR, focused_block};

const BAR_WIDTH: u16 = 7;
const BAR_GAP: u16 = 1;

/// Chart ceiling: rating 5.00 scaled by 100.
const RATING_SCALE_MAX: u64 = 500;

pub fn render_top_rated(
    frame: &mut Frame,
    mount: Option<Rect>,
    series: &Series,
    reviews: &[u64],
    ctx: &ChartContext,
) {
    let Some(area) = mount else {
        tracing::debug!("top rated mount point absent, skipping");
        return;
    };
    if series.is_empty() {
        tracing::debug!("rating series is empty, skipping top rated chart");
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let capacity = (inner_width / (BAR_WIDTH + BAR_GAP) as usize).max(1);

    let bars: Vec<Bar> = series
        .points()
        .take(capacity)
        .map(|(label, rating)| {
            Bar::default()
                .label(Line::from(label.to_string()))
                .value((rating.clamp(0.0, 5.0) * 100.0).round() as u64)
                .text_value(format!("{rating:.2}"))
                .style(Style::default().fg(RATING_COLOR))
        })
        .collect();

    let selected = ctx.selected.min(series.len() - 1);
    let review_count = reviews.get(selected).copied().unwrap_or(0);
    let detail = format!(
        " {:.2} ★ · {} {} ",
        series.value_or_zero(selected),
        review_count,
        ctx.names.rating_reviews
    );

    let block = focused_block(&format!(" {} ", ctx.names.rating), ctx.focused)
        .title_bottom(Line::from(detail).fg(HELP_COLOR));

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .max(RATING_SCALE_MAX);
    frame.render_widget(chart, area);
}
