//! Revenue share chart.
//!
//! The terminal rendition of the share doughnut: a proportional colored band
//! plus one legend line per slice in the shape
//! `"{label}: {amount} ({share}%)"`.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use revboard_core::{Series, share_of, share_tooltip};

use super::ChartContext;
use crate::util::styles::{focused_block, slice_color};

pub fn render_revenue_share(
    frame: &mut Frame,
    mount: Option<Rect>,
    series: &Series,
    ctx: &ChartContext,
) {
    let Some(area) = mount else {
        tracing::debug!("revenue share mount point absent, skipping");
        return;
    };
    if series.is_empty() {
        tracing::debug!("revenue series is empty, skipping share chart");
        return;
    }

    let block = focused_block(&format!(" {} ", ctx.names.share), ctx.focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let values = series.values();
    let selected = ctx.selected.min(values.len() - 1);
    let mut lines: Vec<Line> = Vec::with_capacity(values.len() + 2);

    // Proportional band, one colored run per slice
    let band_width = inner.width as usize;
    let mut band: Vec<Span> = Vec::new();
    for i in 0..values.len() {
        let cells = (share_of(values, i) / 100.0 * band_width as f64).round() as usize;
        if cells > 0 {
            band.push(Span::styled(
                "█".repeat(cells),
                Style::default().fg(slice_color(i)),
            ));
        }
    }
    lines.push(Line::from(band));
    lines.push(Line::from(""));

    for (i, &value) in values.iter().enumerate() {
        let text = share_tooltip(
            series.label(i),
            &ctx.formatter.format(value),
            share_of(values, i),
        );
        let mut line = Line::from(vec![
            Span::styled("■ ", Style::default().fg(slice_color(i))),
            Span::raw(text),
        ]);
        if ctx.focused && i == selected {
            line = line.bold();
        }
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{contains, is_blank, terminal};
    use super::*;
    use crate::data::DatasetNames;
    use revboard_core::CurrencyFormatter;

    fn series() -> Series {
        Series::new(
            vec!["Jan".into(), "Feb".into(), "Mar".into()],
            vec![10.0, 30.0, 60.0],
        )
    }

    #[test]
    fn test_empty_series_skips_silently() {
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
            .draw(|frame| {
                let area = frame.area();
                render_revenue_share(frame, Some(area), &Series::default(), &ctx);
            })
            .unwrap();
        assert!(is_blank(&terminal));
    }

    #[test]
    fn test_legend_lines_carry_share_tooltips() {
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
            .draw(|frame| {
                let area = frame.area();
                render_revenue_share(frame, Some(area), &series(), &ctx);
            })
            .unwrap();
        assert!(contains(&terminal, "Mar: $60 (60.0%)"));
        assert!(contains(&terminal, "Jan: $10 (10.0%)"));
    }

    #[test]
    fn test_zero_total_renders_zero_shares() {
        let formatter = CurrencyFormatter::from_code("USD").unwrap();
        let names = DatasetNames::default();
        let ctx = ChartContext {
            formatter: &formatter,
            names: &names,
            focused: false,
            selected: 0,
        };
        let zeroes = Series::new(vec!["A".into(), "B".into()], vec![0.0, 0.0]);
        let mut terminal = terminal();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_revenue_share(frame, Some(area), &zeroes, &ctx);
            })
            .unwrap();
        assert!(contains(&terminal, "A: $0 (0.0%)"));
    }
}
