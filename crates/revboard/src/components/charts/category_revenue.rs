//! Per-category revenue, drawn as horizontal bars.
//!
//! Bar values render in currency; the inspected category's detail line adds
//! its booking count: `"{amount} · {n} bookings"`.

use ratatui::{
    Frame,
    layout::{Direction, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Bar, BarChart, BarGroup},
};
use revboard_core::Series;

use super::ChartContext;
use crate::util::styles::{CATEGORY_COLOR, HELP_COLOR, focused_block};

pub fn render_category_revenue(
    frame: &mut Frame,
    mount: Option<Rect>,
    series: &Series,
    bookings: &[u64],
    ctx: &ChartContext,
) {
    let Some(area) = mount else {
        tracing::debug!("category revenue mount point absent, skipping");
        return;
    };
    if series.is_empty() {
        tracing::debug!("category series is empty, skipping category chart");
        return;
    }

    // One row per horizontal bar; surplus categories are cut from the bottom
    let inner_height = (area.height.saturating_sub(2) as usize).max(1);

    let bars: Vec<Bar> = series
        .points()
        .take(inner_height)
        .map(|(label, value)| {
            Bar::default()
                .label(Line::from(label.to_string()))
                .value(value.max(0.0) as u64)
                .text_value(ctx.formatter.format(value))
                .style(Style::default().fg(CATEGORY_COLOR))
        })
        .collect();

    let selected = ctx.selected.min(series.len() - 1);
    let count = bookings.get(selected).copied().unwrap_or(0);
    let detail = format!(
        " {} · {} {} ",
        ctx.formatter.format(series.value_or_zero(selected)),
        count,
        ctx.names.category_bookings
    );

    let block = focused_block(&format!(" {} ", ctx.names.category), ctx.focused)
        .title_bottom(Line::from(detail).fg(HELP_COLOR));

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
        .direction(Direction::Horizontal);
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{contains, is_blank, terminal};
    use super::*;
    use crate::data::DatasetNames;
    use revboard_core::CurrencyFormatter;

    fn series() -> Series {
        Series::new(
            vec!["Beach".into(), "City".into()],
            vec![3_200.0, 2_100.0],
        )
    }

    #[test]
    fn test_absent_mount_point_renders_nothing() {
        let formatter = CurrencyFormatter::from_code("USD").unwrap();
        let names = DatasetNames::default();
        let ctx = ChartContext {
            formatter: &formatter,
            names: &names,
            focused: false,
            selected: 0,
        };
        let mut terminal = terminal();
        terminal
            .draw(|frame| render_category_revenue(frame, None, &series(), &[40, 23], &ctx))
            .unwrap();
        assert!(is_blank(&terminal));
    }

    #[test]
    fn test_detail_line_pairs_amount_with_booking_count() {
        let formatter = CurrencyFormatter::from_code("USD").unwrap();
        let names = DatasetNames::default();
        let ctx = ChartContext {
            formatter: &formatter,
            names: &names,
            focused: true,
            selected: 0,
        };
        let mut terminal = terminal();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_category_revenue(frame, Some(area), &series(), &[40, 23], &ctx);
            })
            .unwrap();
        assert!(contains(&terminal, "Category revenue"));
        assert!(contains(&terminal, "$3,200 · 40 bookings"));
    }

    #[test]
    fn test_missing_booking_count_reads_as_zero() {
        let formatter = CurrencyFormatter::from_code("USD").unwrap();
        let names = DatasetNames::default();
        let ctx = ChartContext {
            formatter: &formatter,
            names: &names,
            focused: true,
            selected: 1,
        };
        let mut terminal = terminal();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_category_revenue(frame, Some(area), &series(), &[40], &ctx);
            })
            .unwrap();
        assert!(contains(&terminal, "$2,100 · 0 bookings"));
    }
}
