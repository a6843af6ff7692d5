//! Circular water gauge for today's consumption.

use std::f32::consts::PI;

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::{Canvas, center, column, stack, text};
use iced::{Color, Element, Length, Point, Radians, Rectangle, Renderer, Theme, mouse};

use crate::view::theme;

/// Number of ripple rings drawn around the gauge while water flows.
const RIPPLE_RINGS: u64 = 3;
/// Gap between consecutive ripple rings, in pixels.
const RIPPLE_STEP: f32 = 6.0;
/// Diameter of the widget.
const GAUGE_SIZE: f32 = 200.0;

/// Gauge showing how much of the daily goal is used, as a filling circle.
pub struct PulseGauge {
    /// Fill in `[0, 100]`.
    percent: f64,
    flowing: bool,
    /// Animation phase, advanced once per simulation tick.
    phase: u64,
}

impl PulseGauge {
    /// Create a gauge for a fill percentage.
    pub fn new(percent: f64) -> Self {
        Self {
            percent: percent.clamp(0.0, 100.0),
            flowing: false,
            phase: 0,
        }
    }

    /// Draw ripples around the gauge, offset by `phase`.
    pub fn flowing(mut self, flowing: bool, phase: u64) -> Self {
        self.flowing = flowing;
        self.phase = phase;
        self
    }

    /// Render the gauge as an Iced element.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let label = column![
            text(format!("{:.0}%", self.percent)).size(36),
            text("DAILY LIMIT").size(11).style(theme::muted_text),
        ]
        .align_x(iced::Alignment::Center);

        let gauge = Canvas::new(PulseProgram {
            level: (self.percent / 100.0) as f32,
            flowing: self.flowing,
            phase: self.phase,
        })
        .width(Length::Fixed(GAUGE_SIZE))
        .height(Length::Fixed(GAUGE_SIZE));

        stack![gauge, center(label)].into()
    }
}

struct PulseProgram {
    /// Water level in `[0, 1]`.
    level: f32,
    flowing: bool,
    phase: u64,
}

impl<Message> canvas::Program<Message> for PulseProgram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        self.draw_gauge(&mut frame, theme);
        vec![frame.into_geometry()]
    }
}

impl PulseProgram {
    fn draw_gauge(&self, frame: &mut Frame, theme: &Theme) {
        let c = theme::colors(theme);
        let center = frame.center();
        let outer = frame.width().min(frame.height()) / 2.0;
        let radius = outer - RIPPLE_STEP * RIPPLE_RINGS as f32 - 4.0;
        if radius <= 0.0 {
            return;
        }

        if self.flowing {
            for ring in 0..RIPPLE_RINGS {
                let step = ((self.phase + ring) % RIPPLE_RINGS) + 1;
                let alpha = 0.45 - 0.12 * step as f32;
                frame.stroke(
                    &Path::circle(center, radius + RIPPLE_STEP * step as f32),
                    Stroke::default()
                        .with_color(Color { a: alpha, ..c.water() })
                        .with_width(2.0),
                );
            }
        }

        frame.fill(&Path::circle(center, radius), c.canvas_background());

        if let Some(water) = water_segment(center, radius, self.level) {
            frame.fill(&water, Color { a: 0.85, ..c.water_deep() });
        }

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_color(c.water()).with_width(4.0),
        );
    }
}

/// The part of a circle below a water line at `level` (0 empty, 1 full).
fn water_segment(center: Point, radius: f32, level: f32) -> Option<Path> {
    if level <= 0.0 {
        return None;
    }
    if level >= 1.0 {
        return Some(Path::circle(center, radius));
    }

    // Screen y grows downward, so the surface sits `dy` below the center.
    let dy = radius - 2.0 * radius * level;
    let start = (dy / radius).asin();
    let end = PI - start;

    Some(Path::new(|builder| {
        builder.arc(canvas::path::Arc {
            center,
            radius,
            start_angle: Radians(start),
            end_angle: Radians(end),
        });
        builder.close();
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_segment_bounds() {
        let c = Point::new(50.0, 50.0);
        assert!(water_segment(c, 40.0, 0.0).is_none());
        assert!(water_segment(c, 40.0, 0.5).is_some());
        assert!(water_segment(c, 40.0, 1.0).is_some());
    }

    #[test]
    fn test_gauge_clamps_percent() {
        assert_eq!(PulseGauge::new(140.0).percent, 100.0);
        assert_eq!(PulseGauge::new(-3.0).percent, 0.0);
    }
}
