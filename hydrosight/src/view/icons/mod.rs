//! SVG icons for the HydroSight UI.
//!
//! All icons are embedded at compile time using `include_bytes!`.
//! Navigation icons animate color on hover; the rest are static.

use iced::widget::svg::Handle;
use iced::{Element, Length};

use iced::widget::svg::Svg;
use iced_anim::widget::svg::Svg as AnimatedSvg;

/// Icon size presets.
#[derive(Debug, Clone, Copy, Default)]
pub enum IconSize {
    /// Small icon (12px)
    Small,
    /// Medium icon (16px) - default
    #[default]
    Medium,
    /// Large icon (20px)
    Large,
    /// Extra large icon (24px)
    XLarge,
}

impl IconSize {
    fn pixels(self) -> f32 {
        match self {
            IconSize::Small => 12.0,
            IconSize::Medium => 16.0,
            IconSize::Large => 20.0,
            IconSize::XLarge => 24.0,
        }
    }
}

fn svg_icon<Message: 'static>(data: &'static [u8], size: IconSize) -> Element<'static, Message> {
    let handle = Handle::from_memory(data);
    Svg::new(handle)
        .width(Length::Fixed(size.pixels()))
        .height(Length::Fixed(size.pixels()))
        .into()
}

fn animated_svg_icon<Message: 'static>(
    data: &'static [u8],
    size: IconSize,
) -> Element<'static, Message> {
    let handle = Handle::from_memory(data);
    AnimatedSvg::new(handle)
        .width(Length::Fixed(size.pixels()))
        .height(Length::Fixed(size.pixels()))
        .into()
}

// ============================================================================
// Navigation Icons
// ============================================================================

/// House (dashboard).
pub fn home<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    animated_svg_icon(include_bytes!("home.svg"), size)
}

/// Folded map (neighborhood grid).
pub fn grid<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    animated_svg_icon(include_bytes!("grid.svg"), size)
}

/// Wrench (repair assistant).
pub fn wrench<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    animated_svg_icon(include_bytes!("wrench.svg"), size)
}

/// People (community).
pub fn community<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    animated_svg_icon(include_bytes!("community.svg"), size)
}

/// Gear (settings).
pub fn settings<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    animated_svg_icon(include_bytes!("settings.svg"), size)
}

// ============================================================================
// Dashboard Icons
// ============================================================================

/// Water droplet.
pub fn droplet<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("droplet.svg"), size)
}

/// Notification bell.
pub fn bell<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("bell.svg"), size)
}

/// Music note (Shower DJ).
pub fn music<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("music.svg"), size)
}

/// Magnifying glass (Ghost Hunter scanning).
pub fn search<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("search.svg"), size)
}

/// Warning triangle.
pub fn alert<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("alert.svg"), size)
}

/// Lightning bolt (predictive insight).
pub fn zap<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("zap.svg"), size)
}

/// Leaf (eco tip).
pub fn leaf<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("leaf.svg"), size)
}

// ============================================================================
// Action Icons
// ============================================================================

/// Camera (repair feed).
pub fn camera<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("camera.svg"), size)
}

/// Close/X icon.
pub fn close<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    animated_svg_icon(include_bytes!("close.svg"), size)
}

/// Checkmark.
pub fn check<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("check.svg"), size)
}

/// Padlock (unavailable feature).
pub fn lock<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("lock.svg"), size)
}
