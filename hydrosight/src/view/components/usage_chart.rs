//! Weekly consumption bar chart with hover tooltips.

use iced::mouse;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

use hydrosight_common::usage::DayUsage;

use crate::view::theme;

/// Left gutter for the y-axis labels.
const AXIS_WIDTH: f32 = 32.0;
/// Bottom gutter for the day labels.
const LABEL_HEIGHT: f32 = 20.0;
const TOP_PADDING: f32 = 8.0;
/// Gallons between horizontal grid lines.
const GRID_STEP: f64 = 20.0;
/// Share of each day's slot covered by its bar.
const BAR_FILL: f32 = 0.6;

/// Persistent drawing cache for the chart.
///
/// The weekly data never changes, so the bars are drawn once and only the
/// tooltip is redrawn as the pointer moves.
#[derive(Default)]
pub struct UsageChartState {
    cache: Cache,
}

impl UsageChartState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Bar chart of gallons per day.
pub struct UsageChart<'a> {
    days: &'a [DayUsage],
    state: &'a UsageChartState,
}

impl<'a> UsageChart<'a> {
    pub fn new(days: &'a [DayUsage], state: &'a UsageChartState) -> Self {
        Self { days, state }
    }

    /// Render the chart as an Iced element.
    pub fn view<Message: 'a>(self, height: f32) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into()
    }

    /// Top of the value axis: the largest day rounded up to the next grid line.
    fn scale_max(&self) -> f64 {
        let max = self.days.iter().map(|d| d.gallons).fold(0.0, f64::max);
        ((max / GRID_STEP).ceil() * GRID_STEP).max(GRID_STEP)
    }

    fn plot_area(size: Size) -> Rectangle {
        Rectangle {
            x: AXIS_WIDTH,
            y: TOP_PADDING,
            width: (size.width - AXIS_WIDTH).max(0.0),
            height: (size.height - LABEL_HEIGHT - TOP_PADDING).max(0.0),
        }
    }
}

/// Pointer state local to the chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartHover {
    bar: Option<usize>,
}

impl<'a, Message> canvas::Program<Message> for UsageChart<'a> {
    type State = ChartHover;

    fn update(
        &self,
        hover: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. })
            | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                let bar = cursor.position_in(bounds).and_then(|p| {
                    bar_at(p.x, Self::plot_area(bounds.size()), self.days.len())
                });
                if bar != hover.bar {
                    hover.bar = bar;
                    return Some(canvas::Action::request_redraw());
                }
                None
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        hover: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let bars = self.state.cache.draw(renderer, bounds.size(), |frame| {
            self.draw_bars(frame, theme);
        });

        let Some(index) = hover.bar else {
            return vec![bars];
        };

        let mut overlay = Frame::new(renderer, bounds.size());
        self.draw_tooltip(&mut overlay, theme, index);
        vec![bars, overlay.into_geometry()]
    }
}

impl<'a> UsageChart<'a> {
    fn bar_rect(&self, plot: Rectangle, index: usize, gallons: f64) -> Rectangle {
        let slot = plot.width / self.days.len().max(1) as f32;
        let width = slot * BAR_FILL;
        let height = (gallons / self.scale_max()) as f32 * plot.height;
        Rectangle {
            x: plot.x + slot * index as f32 + (slot - width) / 2.0,
            y: plot.y + plot.height - height,
            width,
            height,
        }
    }

    fn draw_bars(&self, frame: &mut Frame, theme: &Theme) {
        let c = theme::colors(theme);
        let plot = Self::plot_area(frame.size());
        if plot.width <= 0.0 || plot.height <= 0.0 || self.days.is_empty() {
            return;
        }

        let max = self.scale_max();
        let lines = (max / GRID_STEP) as usize;
        for i in 0..=lines {
            let value = GRID_STEP * i as f64;
            let y = plot.y + plot.height - (value / max) as f32 * plot.height;

            frame.stroke(
                &Path::line(Point::new(plot.x, y), Point::new(plot.x + plot.width, y)),
                Stroke::default()
                    .with_color(c.grid_line())
                    .with_width(1.0),
            );
            frame.fill_text(Text {
                content: format!("{value:.0}g"),
                position: Point::new(AXIS_WIDTH - 6.0, y),
                color: c.chart_label(),
                size: 10.0.into(),
                align_x: iced::alignment::Horizontal::Right.into(),
                align_y: iced::alignment::Vertical::Center,
                ..Text::default()
            });
        }

        for (index, day) in self.days.iter().enumerate() {
            let rect = self.bar_rect(plot, index, day.gallons);
            let color = if day.is_high() {
                c.warning()
            } else {
                c.sensor_normal()
            };
            frame.fill(
                &Path::rounded_rectangle(rect.position(), rect.size(), 4.0.into()),
                color,
            );
            frame.fill_text(Text {
                content: day.day.to_string(),
                position: Point::new(rect.center_x(), plot.y + plot.height + 4.0),
                color: c.chart_label(),
                size: 10.0.into(),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            });
        }
    }

    fn draw_tooltip(&self, frame: &mut Frame, theme: &Theme, index: usize) {
        let Some(day) = self.days.get(index) else {
            return;
        };
        let c = theme::colors(theme);
        let plot = Self::plot_area(frame.size());
        let rect = self.bar_rect(plot, index, day.gallons);

        let size = Size::new(110.0, 24.0);
        let x = (rect.center_x() - size.width / 2.0)
            .clamp(0.0, (frame.width() - size.width).max(0.0));
        let y = (rect.y - size.height - 4.0).max(0.0);

        frame.fill(
            &Path::rounded_rectangle(Point::new(x, y), size, 6.0.into()),
            c.chart_tooltip_background(),
        );
        frame.stroke(
            &Path::rounded_rectangle(Point::new(x, y), size, 6.0.into()),
            Stroke::default().with_color(c.border()).with_width(1.0),
        );
        frame.fill_text(Text {
            content: tooltip_text(day),
            position: Point::new(x + size.width / 2.0, y + size.height / 2.0),
            color: if c.is_dark() { Color::WHITE } else { Color::BLACK },
            size: 11.0.into(),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        });
    }
}

/// Tooltip label for a hovered day.
pub fn tooltip_text(day: &DayUsage) -> String {
    format!("{}: {} Gallons", day.day, day.gallons)
}

/// Index of the day slot under horizontal position `x`, if any.
fn bar_at(x: f32, plot: Rectangle, count: usize) -> Option<usize> {
    if count == 0 || plot.width <= 0.0 || x < plot.x || x >= plot.x + plot.width {
        return None;
    }
    let slot = plot.width / count as f32;
    Some((((x - plot.x) / slot) as usize).min(count - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydrosight_common::usage::WEEKLY_USAGE;

    #[test]
    fn test_tooltip_text() {
        assert_eq!(tooltip_text(&WEEKLY_USAGE[3]), "Thu: 65 Gallons");
        assert_eq!(tooltip_text(&WEEKLY_USAGE[0]), "Mon: 45 Gallons");
    }

    #[test]
    fn test_bar_hit_testing() {
        let plot = Rectangle {
            x: 30.0,
            y: 0.0,
            width: 70.0,
            height: 100.0,
        };
        assert_eq!(bar_at(10.0, plot, 7), None);
        assert_eq!(bar_at(30.0, plot, 7), Some(0));
        assert_eq!(bar_at(45.0, plot, 7), Some(1));
        assert_eq!(bar_at(99.9, plot, 7), Some(6));
        assert_eq!(bar_at(100.0, plot, 7), None);
        assert_eq!(bar_at(50.0, plot, 0), None);
    }

    #[test]
    fn test_scale_rounds_up_to_grid_line() {
        let state = UsageChartState::new();
        let chart = UsageChart::new(&WEEKLY_USAGE, &state);
        assert_eq!(chart.scale_max(), 80.0);

        let empty = UsageChart::new(&[], &state);
        assert_eq!(empty.scale_max(), GRID_STEP);
    }
}
