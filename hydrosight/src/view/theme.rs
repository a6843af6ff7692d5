//! Theme-aware color palette for HydroSight.
//!
//! Semantic colors that adapt to the current theme. Use these instead of
//! hardcoded `Color::from_rgb()` values in views.

use iced::widget::{container, text};
use iced::{Background, Border, Color, Theme};

/// Get colors from the theme's extended palette.
pub struct ThemeColors<'a> {
    theme: &'a Theme,
}

impl<'a> ThemeColors<'a> {
    /// Create a new ThemeColors from a theme reference.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn palette(&self) -> &iced::theme::palette::Extended {
        self.theme.extended_palette()
    }

    // ========================================================================
    // Background Colors
    // ========================================================================

    /// Primary background color (main content area).
    pub fn background(&self) -> Color {
        self.palette().background.base.color
    }

    /// Stronger background (panels).
    pub fn background_strong(&self) -> Color {
        self.palette().background.strong.color
    }

    /// Card background color.
    pub fn card_background(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.12, 0.16, 0.23)
        } else {
            Color::from_rgb(1.0, 1.0, 1.0)
        }
    }

    /// Map and camera-feed background.
    pub fn canvas_background(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.06, 0.09, 0.16)
        } else {
            Color::from_rgb(0.95, 0.96, 0.98)
        }
    }

    // ========================================================================
    // Text Colors
    // ========================================================================

    /// Muted/secondary text color.
    pub fn text_muted(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.58, 0.64, 0.72)
        } else {
            Color::from_rgb(0.39, 0.45, 0.55)
        }
    }

    // ========================================================================
    // Water Colors (consistent across themes for recognition)
    // ========================================================================

    /// Accent water color (cyan).
    pub fn water(&self) -> Color {
        Color::from_rgb(0.02, 0.71, 0.83)
    }

    /// Deep water fill (teal).
    pub fn water_deep(&self) -> Color {
        Color::from_rgb(0.03, 0.57, 0.70)
    }

    /// Normal-pressure sensors and regular chart bars (sky blue).
    pub fn sensor_normal(&self) -> Color {
        Color::from_rgb(0.05, 0.65, 0.91)
    }

    /// Low-pressure sensors (red).
    pub fn sensor_low(&self) -> Color {
        Color::from_rgb(0.94, 0.27, 0.27)
    }

    /// Calm/healthy state (emerald).
    pub fn calm(&self) -> Color {
        Color::from_rgb(0.20, 0.83, 0.60)
    }

    /// Leak warnings and high-usage bars (amber).
    pub fn warning(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.96, 0.62, 0.04)
        } else {
            Color::from_rgb(0.85, 0.47, 0.02)
        }
    }

    // ========================================================================
    // Border & Chart Colors
    // ========================================================================

    /// Default border color.
    pub fn border(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.20, 0.25, 0.33)
        } else {
            Color::from_rgb(0.8, 0.8, 0.82)
        }
    }

    /// Triangulation lines on the map.
    pub fn grid_line(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.12, 0.16, 0.23)
        } else {
            Color::from_rgb(0.85, 0.87, 0.9)
        }
    }

    /// Chart axis labels.
    pub fn chart_label(&self) -> Color {
        Color::from_rgb(0.39, 0.45, 0.55)
    }

    /// Chart tooltip background.
    pub fn chart_tooltip_background(&self) -> Color {
        if self.is_dark() {
            Color::from_rgba(0.12, 0.16, 0.23, 0.95)
        } else {
            Color::from_rgba(1.0, 1.0, 1.0, 0.95)
        }
    }

    /// Check if the current theme is dark.
    pub fn is_dark(&self) -> bool {
        self.palette().is_dark
    }
}

/// Convenience function to create ThemeColors.
pub fn colors(theme: &Theme) -> ThemeColors<'_> {
    ThemeColors::new(theme)
}

/// Rounded card container.
pub fn card(theme: &Theme) -> container::Style {
    let c = colors(theme);
    container::Style {
        background: Some(Background::Color(c.card_background())),
        border: Border {
            color: c.border(),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Card with a colored accent border, used for live status.
pub fn accent_card(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = card(theme);
        container::Style {
            border: Border {
                color: accent,
                width: 2.0,
                ..base.border
            },
            ..base
        }
    }
}

/// Secondary text.
pub fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(colors(theme).text_muted()),
    }
}

/// Water-accent text.
pub fn water_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(colors(theme).water()),
    }
}

/// Healthy-state text.
pub fn calm_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(colors(theme).calm()),
    }
}

/// Warning text.
pub fn warning_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(colors(theme).warning()),
    }
}

/// Low-pressure / danger text.
pub fn danger_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(colors(theme).sensor_low()),
    }
}
