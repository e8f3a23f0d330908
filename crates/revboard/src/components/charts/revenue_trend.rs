//! Revenue trend line chart.
//!
//! Y-axis ticks use compact K/M/B abbreviation; the inspected point's detail
//! line shows the full currency amount.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    symbols,
    text::Line,
    widgets::{Axis, Chart, Dataset, GraphType},
};
use revboard_core::{Series, abbreviate};

use super::ChartContext;
use crate::util::styles::{HELP_COLOR, TREND_COLOR, focused_block};

pub fn render_revenue_trend(
    frame: &mut Frame,
    mount: Option<Rect>,
    series: &Series,
    ctx: &ChartContext,
) {
    let Some(area) = mount else {
        tracing::debug!("revenue trend mount point absent, skipping");
        return;
    };
    if series.is_empty() {
        tracing::debug!("revenue series is empty, skipping trend chart");
        return;
    }

    let points: Vec<(f64, f64)> = series
        .values()
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();
    let y_max = series.max_value().max(1.0);

    let selected = ctx.selected.min(series.len() - 1);
    let detail = format!(
        " {}: {} ",
        series.label(selected),
        ctx.formatter.format(series.value_or_zero(selected))
    );

    let block = focused_block(&format!(" {} ", ctx.names.revenue), ctx.focused)
        .title_bottom(Line::from(detail).fg(HELP_COLOR));

    let datasets = vec![
        Dataset::default()
            .name(ctx.names.revenue.clone())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(TREND_COLOR))
            .data(&points),
    ];

    let x_axis = Axis::default()
        .bounds([0.0, (series.len() - 1).max(1) as f64])
        .labels(edge_labels(series))
        .style(Style::default().fg(HELP_COLOR));
    let y_axis = Axis::default()
        .bounds([0.0, y_max])
        .labels(vec![
            abbreviate(0.0),
            abbreviate(y_max / 2.0),
            abbreviate(y_max),
        ])
        .style(Style::default().fg(HELP_COLOR));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);
    frame.render_widget(chart, area);
}

/// First, middle and last label for the x axis.
fn edge_labels(series: &Series) -> Vec<String> {
    let last = series.len() - 1;
    let mut labels = vec![series.label(0).to_string()];
    if last > 1 {
        labels.push(series.label(last / 2).to_string());
    }
    if last > 0 {
        labels.push(series.label(last).to_string());
    }
    labels
}
