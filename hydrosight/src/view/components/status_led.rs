//! Status LED widget for live indicators and legends.

use iced::widget::{container, row, text};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::view::theme;

/// State of a status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLedState {
    /// Water is flowing right now - cyan.
    Flowing,
    /// Sensor within normal pressure - sky blue.
    Normal,
    /// Nothing happening - emerald.
    Quiet,
    /// Suspected leak - amber.
    Warning,
    /// Pressure drop - red.
    Critical,
}

impl StatusLedState {
    fn color(self, theme: &Theme) -> Color {
        let c = theme::colors(theme);
        match self {
            StatusLedState::Flowing => c.water(),
            StatusLedState::Normal => c.sensor_normal(),
            StatusLedState::Quiet => c.calm(),
            StatusLedState::Warning => c.warning(),
            StatusLedState::Critical => c.sensor_low(),
        }
    }

    /// Short badge text for this state.
    pub fn label(self) -> &'static str {
        match self {
            StatusLedState::Flowing => "LIVE",
            StatusLedState::Normal => "OK",
            StatusLedState::Quiet => "QUIET",
            StatusLedState::Warning => "LEAK",
            StatusLedState::Critical => "LOW",
        }
    }
}

/// A status LED indicator widget.
pub struct StatusLed {
    state: StatusLedState,
    label: Option<String>,
    /// Diameter in pixels.
    size: f32,
    show_state_text: bool,
}

impl StatusLed {
    /// Create a new status LED.
    pub fn new(state: StatusLedState) -> Self {
        Self {
            state,
            label: None,
            size: 10.0,
            show_state_text: false,
        }
    }

    /// Add a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Show the state text (LIVE/LEAK/etc).
    pub fn with_state_text(mut self) -> Self {
        self.show_state_text = true;
        self
    }

    /// Render the status LED as an Iced element.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let state = self.state;
        let size = self.size;

        let led = container(text(""))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .style(move |t: &Theme| container::Style {
                background: Some(iced::Background::Color(state.color(t))),
                border: iced::Border {
                    radius: (size / 2.0).into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let mut content = row![led].spacing(6).align_y(Alignment::Center);

        if self.show_state_text {
            content = content.push(text(state.label()).size(10).style(move |t: &Theme| {
                text::Style {
                    color: Some(state.color(t)),
                }
            }));
        }

        if let Some(label) = self.label {
            content = content.push(text(label).size(11).style(theme::muted_text));
        }

        content.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_labels() {
        assert_eq!(StatusLedState::Flowing.label(), "LIVE");
        assert_eq!(StatusLedState::Warning.label(), "LEAK");
        assert_eq!(StatusLedState::Critical.label(), "LOW");
    }
}
