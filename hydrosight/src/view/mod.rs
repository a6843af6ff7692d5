//! View components for the HydroSight application.

pub mod community;
pub mod components;
pub mod dashboard;
pub mod formatting;
pub mod grid_map;
pub mod icons;
pub mod navigation;
pub mod repair;
pub mod settings;
pub mod theme;

/// Screens the application can show.
///
/// `Repair` is drawn as an overlay above the dashboard rather than replacing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Dashboard,
    Grid,
    Repair,
    Community,
    Settings,
}

impl View {
    /// Screens in navigation bar order.
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Grid,
        View::Repair,
        View::Community,
        View::Settings,
    ];

    /// Navigation bar label.
    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Home",
            View::Grid => "Grid",
            View::Repair => "Fix",
            View::Community => "Community",
            View::Settings => "Settings",
        }
    }
}
