//! HydroSight Iced application.

use iced::widget::{column, container, opaque, row, stack, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use hydrosight_common::wizard::SCAN_DELAY;
use hydrosight_common::{
    AppConfig, LeakSensitivity, RepairWizard, Simulator, WizardOutcome, current_timestamp_millis,
};

use crate::message::Message;
use crate::subscription::{repair_scan_subscription, tick_subscription};
use crate::view::View;
use crate::view::community::community_view;
use crate::view::components::UsageChartState;
use crate::view::dashboard::dashboard_view;
use crate::view::grid_map::{GridMapState, grid_view};
use crate::view::icons::{self, IconSize};
use crate::view::navigation::navigation_bar;
use crate::view::repair::repair_view;
use crate::view::settings::settings_view;
use crate::view::theme;

/// The main HydroSight application.
pub struct HydroSight {
    /// Name used in the greeting.
    resident: String,
    /// Sensors generated for each Grid visit.
    map_sensors: usize,
    /// Household simulation.
    simulator: Simulator,
    /// Current screen.
    view: View,
    /// Repair flow, present only while the overlay is open.
    wizard: Option<RepairWizard>,
    /// Neighborhood map, present only while the Grid screen is shown.
    grid: Option<GridMapState>,
    /// Weekly chart cache.
    chart: UsageChartState,
    /// Wall clock of the last tick, for relative feed times.
    now_ms: i64,
}

impl HydroSight {
    /// Boot the application (called by iced::application).
    pub fn boot(config: AppConfig) -> (Self, Task<Message>) {
        let now_ms = current_timestamp_millis();
        let simulator = Simulator::from_config(&config.simulation, now_ms);
        (Self::new(&config, simulator, now_ms), Task::none())
    }

    /// Create the application around an existing simulator.
    ///
    /// The tick timer runs at the simulator's tick interval.
    pub fn new(config: &AppConfig, simulator: Simulator, now_ms: i64) -> Self {
        tracing::info!(
            resident = %config.resident,
            tick_ms = simulator.tick_interval().as_millis() as u64,
            sensitivity = simulator.sensitivity().value(),
            seeded = config.simulation.seed.is_some(),
            "HydroSight starting"
        );

        Self {
            resident: config.resident.clone(),
            map_sensors: config.map.sensors,
            simulator,
            view: View::default(),
            wizard: None,
            grid: None,
            chart: UsageChartState::new(),
            now_ms,
        }
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        if self.simulator.state().leak_suspected() {
            "HydroSight - Leak Suspected".to_string()
        } else {
            "HydroSight".to_string()
        }
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.now_ms = current_timestamp_millis();
                self.simulator.step(self.now_ms);
            }

            Message::Navigate(view) => {
                self.navigate(view);
            }

            Message::CloseRepair => {
                self.close_repair();
            }

            Message::RepairScanElapsed => {
                if let Some(ref mut wizard) = self.wizard {
                    wizard.scan_complete();
                }
            }

            Message::RepairAction => {
                let outcome = self.wizard.as_mut().map(RepairWizard::act);
                if outcome == Some(WizardOutcome::Close) {
                    tracing::info!("Repair flow finished");
                    self.close_repair();
                }
            }

            Message::HoverSensor(index) => {
                if let Some(ref mut grid) = self.grid {
                    grid.set_hovered(index);
                }
            }

            Message::SetLeakSensitivity(value) => {
                self.simulator.set_sensitivity(LeakSensitivity::new(value));
            }

            Message::ResetSettings => {
                self.simulator.set_sensitivity(LeakSensitivity::default());
            }
        }

        Task::none()
    }

    /// The simulation tick, plus the scan timer while the repair wizard scans.
    pub fn subscription(&self) -> Subscription<Message> {
        let tick = tick_subscription(self.simulator.tick_interval());

        if self.scan_timer_active() {
            Subscription::batch([tick, repair_scan_subscription(SCAN_DELAY)])
        } else {
            tick
        }
    }

    /// Whether the repair scan timer is requested.
    pub fn scan_timer_active(&self) -> bool {
        self.wizard
            .as_ref()
            .is_some_and(RepairWizard::awaiting_auto_advance)
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match (self.view, &self.grid) {
            (View::Grid, Some(grid)) => grid_view(grid),
            (View::Community, _) => community_view(),
            (View::Settings, _) => settings_view(self.simulator.sensitivity()),
            // The dashboard also sits under the repair overlay.
            _ => dashboard_view(
                self.simulator.state(),
                &self.resident,
                &self.chart,
                self.now_ms,
            ),
        };

        let base = column![
            container(screen).height(Length::Fill),
            navigation_bar(self.view)
        ];

        let mut layers = stack![base].width(Length::Fill).height(Length::Fill);

        if let Some(ref wizard) = self.wizard {
            layers = layers.push(opaque(repair_view(wizard)));
        }

        if let Some(ref notification) = self.simulator.state().notification {
            layers = layers.push(render_toast(&notification.text));
        }

        layers.into()
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn wizard(&self) -> Option<&RepairWizard> {
        self.wizard.as_ref()
    }

    pub fn grid(&self) -> Option<&GridMapState> {
        self.grid.as_ref()
    }

    fn navigate(&mut self, view: View) {
        if view == self.view {
            return;
        }
        tracing::debug!(from = ?self.view, to = ?view, "Navigate");

        // The map and the wizard live only while their screen is mounted.
        self.grid = None;
        self.wizard = None;
        match view {
            View::Grid => {
                self.grid = Some(GridMapState::generate(
                    self.simulator.rng_mut(),
                    self.map_sensors,
                ));
            }
            View::Repair => {
                self.wizard = Some(RepairWizard::new());
            }
            View::Dashboard | View::Community | View::Settings => {}
        }
        self.view = view;
    }

    fn close_repair(&mut self) {
        self.wizard = None;
        self.view = View::Dashboard;
    }
}

fn render_toast<'a>(message: &'a str) -> Element<'a, Message> {
    let toast = container(
        row![icons::music(IconSize::Medium), text(message).size(14)]
            .spacing(12)
            .align_y(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(|t: &Theme| theme::accent_card(theme::colors(t).water())(t));

    container(toast).padding(16).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use hydrosight_common::{HomeState, RepairStep};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const NOW: i64 = 1_700_000_000_000;

    fn app() -> HydroSight {
        let config = AppConfig::default();
        let simulator = Simulator::new(
            HomeState::seeded(NOW),
            SmallRng::seed_from_u64(3),
            config.simulation.sensitivity(),
        );
        HydroSight::new(&config, simulator, NOW)
    }

    #[test]
    fn test_boots_on_dashboard() {
        let app = app();
        assert_eq!(app.current_view(), View::Dashboard);
        assert!(app.wizard().is_none());
        assert!(app.grid().is_none());
        assert_eq!(app.title(), "HydroSight");
    }

    #[test]
    fn test_grid_regenerated_on_each_visit() {
        let mut app = app();

        let _ = app.update(Message::Navigate(View::Grid));
        let first: Vec<_> = app.grid().map(|g| g.neighbors().to_vec()).unwrap_or_default();
        assert_eq!(first.len(), 50);

        // Re-selecting the current screen keeps the map.
        let _ = app.update(Message::Navigate(View::Grid));
        assert_eq!(app.grid().map(|g| g.neighbors().to_vec()), Some(first.clone()));

        let _ = app.update(Message::Navigate(View::Settings));
        assert!(app.grid().is_none());

        let _ = app.update(Message::Navigate(View::Grid));
        let second = app.grid().map(|g| g.neighbors().to_vec()).unwrap_or_default();
        assert_eq!(second.len(), 50);
        assert_ne!(first, second);
    }

    #[test]
    fn test_hover_only_applies_on_grid() {
        let mut app = app();
        let _ = app.update(Message::HoverSensor(Some(3)));
        assert!(app.grid().is_none());

        let _ = app.update(Message::Navigate(View::Grid));
        let _ = app.update(Message::HoverSensor(Some(3)));
        assert_eq!(
            app.grid().and_then(|g| g.hovered()).map(|n| n.id.as_str()),
            Some("house-3")
        );
    }

    #[test]
    fn test_repair_flow_closes_on_finish() {
        let mut app = app();
        let _ = app.update(Message::Navigate(View::Repair));
        assert_eq!(app.wizard().map(RepairWizard::step), Some(RepairStep::Scanning));

        // The action button is inert during the scan.
        let _ = app.update(Message::RepairAction);
        assert_eq!(app.wizard().map(RepairWizard::index), Some(0));

        let _ = app.update(Message::RepairScanElapsed);
        let _ = app.update(Message::RepairAction);
        let _ = app.update(Message::RepairAction);
        assert_eq!(app.wizard().map(RepairWizard::index), Some(3));

        let _ = app.update(Message::RepairAction);
        assert!(app.wizard().is_none());
        assert_eq!(app.current_view(), View::Dashboard);
    }

    #[test]
    fn test_scan_timer_only_while_scanning() {
        let mut app = app();
        assert!(!app.scan_timer_active());

        let _ = app.update(Message::Navigate(View::Repair));
        assert!(app.scan_timer_active());

        let _ = app.update(Message::RepairScanElapsed);
        assert!(!app.scan_timer_active());

        let _ = app.update(Message::CloseRepair);
        assert!(!app.scan_timer_active());

        // Reopening starts a fresh scan; closing mid-scan cancels it.
        let _ = app.update(Message::Navigate(View::Repair));
        assert!(app.scan_timer_active());
        let _ = app.update(Message::CloseRepair);
        assert!(!app.scan_timer_active());
    }

    #[test]
    fn test_toast_lasts_five_seconds_at_half_second_ticks() {
        let mut config = AppConfig::default();
        config.simulation.tick_interval_ms = 500;
        let simulator = Simulator::new(
            HomeState::seeded(NOW),
            SmallRng::seed_from_u64(21),
            LeakSensitivity::new(0),
        )
        .with_tick_interval(config.simulation.tick_interval());
        let mut app = HydroSight::new(&config, simulator, NOW);
        assert_eq!(app.simulator().tick_interval(), Duration::from_millis(500));

        let mut toasts = 0;
        for _ in 0..20_000 {
            if app.simulator().state().notification.is_none() {
                let _ = app.update(Message::Tick);
                continue;
            }

            // A new shower can only extend the toast.
            let mut visible_ticks = 0;
            while app.simulator().state().notification.is_some() {
                let _ = app.update(Message::Tick);
                visible_ticks += 1;
            }
            assert!(visible_ticks >= 10, "toast cleared after {} ticks", visible_ticks);
            toasts += 1;
        }
        assert!(toasts > 0);
    }

    #[test]
    fn test_late_scan_timer_after_close_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Navigate(View::Repair));
        let _ = app.update(Message::CloseRepair);
        let _ = app.update(Message::RepairScanElapsed);

        assert!(app.wizard().is_none());
        assert_eq!(app.current_view(), View::Dashboard);
    }

    #[test]
    fn test_sensitivity_settings() {
        let mut app = app();
        let _ = app.update(Message::SetLeakSensitivity(30));
        assert_eq!(app.simulator().sensitivity().value(), 30);

        let _ = app.update(Message::SetLeakSensitivity(250));
        assert_eq!(app.simulator().sensitivity().value(), 100);

        let _ = app.update(Message::ResetSettings);
        assert_eq!(app.simulator().sensitivity(), LeakSensitivity::default());
    }

    #[test]
    fn test_tick_advances_simulation() {
        let mut app = app();
        let _ = app.update(Message::Tick);
        let _ = app.update(Message::Tick);
        assert_eq!(app.simulator().state().ticks, 2);
    }
}
