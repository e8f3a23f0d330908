use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use revboard_core::{CurrencyError, CurrencyFormatter};

use crate::components::charts::{self, ChartContext};
use crate::data::DashboardData;
use crate::layout::DashboardLayout;
use crate::util::styles::HELP_COLOR;

/// The five chart views, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartId {
    RevenueTrend,
    RevenueShare,
    BookingVolume,
    CategoryRevenue,
    TopRated,
}

impl ChartId {
    const ORDER: [ChartId; 5] = [
        ChartId::RevenueTrend,
        ChartId::RevenueShare,
        ChartId::BookingVolume,
        ChartId::CategoryRevenue,
        ChartId::TopRated,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&c| c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct App {
    data: DashboardData,
    formatter: CurrencyFormatter,
    focus: ChartId,
    selected: usize,
    exit: bool,
}

impl App {
    /// Build the app for one dataset.
    ///
    /// The currency formatter is constructed up front so a structurally
    /// invalid currency code aborts startup instead of failing mid-render.
    pub fn new(data: DashboardData) -> Result<Self, CurrencyError> {
        let formatter = CurrencyFormatter::from_code(&data.currency)?;
        Ok(Self {
            data,
            formatter,
            focus: ChartId::RevenueTrend,
            selected: 0,
            exit: false,
        })
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    pub fn draw(&self, frame: &mut Frame) {
        let layout = DashboardLayout::compute(frame.area());

        charts::render_revenue_trend(
            frame,
            layout.revenue_trend,
            &self.data.revenue,
            &self.ctx(ChartId::RevenueTrend),
        );
        charts::render_revenue_share(
            frame,
            layout.revenue_share,
            &self.data.revenue,
            &self.ctx(ChartId::RevenueShare),
        );
        charts::render_booking_volume(
            frame,
            layout.booking_volume,
            self.data.revenue.labels(),
            &self.data.bookings,
            &self.ctx(ChartId::BookingVolume),
        );
        charts::render_category_revenue(
            frame,
            layout.category_revenue,
            &self.data.categories,
            &self.data.category_bookings,
            &self.ctx(ChartId::CategoryRevenue),
        );
        charts::render_top_rated(
            frame,
            layout.top_rated,
            &self.data.ratings,
            &self.data.rating_reviews,
            &self.ctx(ChartId::TopRated),
        );

        if let Some(status) = layout.status {
            self.render_status(frame, status);
        }
    }

    fn ctx(&self, id: ChartId) -> ChartContext<'_> {
        ChartContext {
            formatter: &self.formatter,
            names: &self.data.dataset_names,
            focused: self.focus == id,
            selected: if self.focus == id { self.selected } else { 0 },
        }
    }

    /// Number of inspectable points in the focused chart.
    fn point_count(&self) -> usize {
        match self.focus {
            ChartId::RevenueTrend | ChartId::RevenueShare => self.data.revenue.len(),
            ChartId::BookingVolume => self.data.bookings.len(),
            ChartId::CategoryRevenue => self.data.categories.len(),
            ChartId::TopRated => self.data.ratings.len(),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            _ => {}
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                self.selected = 0;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                self.selected = 0;
            }
            KeyCode::Left => self.selected = self.selected.saturating_sub(1),
            KeyCode::Right => {
                let count = self.point_count();
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
            }
            _ => {}
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                " Tab: next chart  ←/→: inspect  q: quit ",
                Style::default().fg(HELP_COLOR),
            ),
            Span::styled(
                format!(" [{}]", self.formatter.code()),
                Style::default().fg(HELP_COLOR),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
