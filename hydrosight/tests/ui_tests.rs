//! UI tests using iced_test Simulator.
//!
//! These tests render individual screens from fixed household states, so no
//! timers or random sources are involved.

use iced_test::simulator;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use hydrosight::message::Message;
use hydrosight::view::View;
use hydrosight::view::community::community_view;
use hydrosight::view::components::UsageChartState;
use hydrosight::view::dashboard::dashboard_view;
use hydrosight::view::grid_map::{GridMapState, grid_view};
use hydrosight::view::navigation::navigation_bar;
use hydrosight::view::repair::repair_view;
use hydrosight::view::settings::settings_view;
use hydrosight::HydroSight;
use hydrosight_common::{AppConfig, HomeState, LeakSensitivity, RepairWizard, Simulator};

const NOW: i64 = 1_700_000_000_000;

/// Test that the dashboard renders the seeded morning household.
#[test]
fn test_dashboard_seeded_household() {
    let state = HomeState::seeded(NOW);
    let chart = UsageChartState::new();
    let mut ui = simulator(dashboard_view(&state, "Alex", &chart, NOW));

    assert!(ui.find("Good Morning, Alex").is_ok());
    assert!(ui.find("System Secure").is_ok());
    assert!(ui.find("53%").is_ok());
    assert!(ui.find("DAILY LIMIT").is_ok());

    // Quiet household
    assert!(ui.find("All Quiet").is_ok());
    assert!(ui.find("Scanning...").is_ok());
    assert!(ui.find("Ready").is_ok());

    // Feed, newest first
    assert!(ui.find("The Water Feed").is_ok());
    assert!(ui.find("Master Shower").is_ok());
    assert!(ui.find("14.2g").is_ok());
    assert!(ui.find("15m ago").is_ok());
    assert!(ui.find("Dishwasher").is_ok());
    assert!(ui.find("2h ago").is_ok());

    assert!(ui.find("Weekly Consumption").is_ok());
}

/// Test the live flow and Ghost Hunter cards.
#[test]
fn test_dashboard_flow_and_leak() {
    let state = HomeState::seeded(NOW)
        .with_flow("Shower", 2.5)
        .with_leak(0.123, 125);
    let chart = UsageChartState::new();
    let mut ui = simulator(dashboard_view(&state, "Sam", &chart, NOW));

    assert!(ui.find("Good Morning, Sam").is_ok());
    assert!(ui.find("Active Flow Detected").is_ok());
    assert!(ui.find("Shower • 2.5 GPM").is_ok());
    assert!(ui.find("LIVE").is_ok());
    assert!(ui.find("All Quiet").is_err());

    assert!(ui.find("Leak Suspected").is_ok());
    assert!(ui.find("LEAK").is_ok());
    assert!(ui.find("2m 5s").is_ok());
    assert!(ui.find("0.123g").is_ok());
    assert!(ui.find("System Secure").is_err());
}

/// Test the settings screen and its reset button.
#[test]
fn test_settings_view() {
    let mut ui = simulator(settings_view(LeakSensitivity::new(50)));

    assert!(ui.find("Ghost Hunter Sensitivity").is_ok());
    assert!(ui.find("50%").is_ok());
    assert!(ui.find("Conservative").is_ok());
    assert!(ui.find("Aggressive").is_ok());
    assert!(ui.find("Leak trigger chance per idle tick: 5.0%").is_ok());
    assert!(ui.find("Valve Shut-off").is_ok());

    let _ = ui.click("Reset to Defaults");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(messages.iter().any(|m| matches!(m, Message::ResetSettings)));
}

/// Test that the community stub routes back home.
#[test]
fn test_community_go_back() {
    let mut ui = simulator(community_view());

    assert!(ui.find("Feature coming in v2.0").is_ok());

    let _ = ui.click("Go Back");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(messages.contains(&Message::Navigate(View::Dashboard)));
}

/// Test the navigation bar labels and routing.
#[test]
fn test_navigation_bar() {
    let mut ui = simulator(navigation_bar(View::Dashboard));

    for label in ["Home", "Grid", "Fix", "Community", "Settings"] {
        assert!(ui.find(label).is_ok(), "missing nav item {label}");
    }

    let _ = ui.click("Grid");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(messages.contains(&Message::Navigate(View::Grid)));
}

/// Test that the action button is disabled while scanning.
#[test]
fn test_repair_scanning_step() {
    let wizard = RepairWizard::new();
    let mut ui = simulator(repair_view(&wizard));

    assert!(ui.find("LIVE FEED • AI ACTIVE").is_ok());
    assert!(ui.find("Analyzing Plumbing...").is_ok());
    assert!(ui.find("Scan the pipe assembly under the sink.").is_ok());
    assert!(ui.find("Tighten Here").is_err());

    let _ = ui.click("Scanning...");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(!messages.contains(&Message::RepairAction));
}

/// Test the issue step after the scan completes.
#[test]
fn test_repair_issue_step() {
    let mut wizard = RepairWizard::new();
    wizard.scan_complete();
    let mut ui = simulator(repair_view(&wizard));

    assert!(ui.find("AI Assistant").is_ok());
    assert!(ui.find("Issue Detected: P-Trap compression nut loose.").is_ok());
    assert!(ui.find("Tighten Here").is_err());

    let _ = ui.click("Tap to fix");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(messages.contains(&Message::RepairAction));
}

/// Test the AR hint on the adjustment step.
#[test]
fn test_repair_adjust_step_shows_hint() {
    let mut wizard = RepairWizard::new();
    wizard.scan_complete();
    wizard.act();
    let mut ui = simulator(repair_view(&wizard));

    assert!(ui.find("Tighten Here").is_ok());
    assert!(ui.find("Simulate Turn").is_ok());
}

/// Test the neighborhood map chrome and hover details.
#[test]
fn test_grid_view() {
    let mut grid = GridMapState::generate(&mut SmallRng::seed_from_u64(9), 50);

    {
        let mut ui = simulator(grid_view(&grid));
        assert!(ui.find("The Water Grid").is_ok());
        assert!(ui.find("Normal (65-75 psi)").is_ok());
        assert!(ui.find("Pressure Drop Detected").is_ok());
        assert!(ui.find("Neighborhood Watch").is_ok());
        assert!(ui.find("Sensor ID: house-4").is_err());
    }

    grid.set_hovered(Some(4));
    let sensor = grid.neighbors()[4].clone();
    let mut ui = simulator(grid_view(&grid));

    assert!(ui.find("Sensor ID: house-4").is_ok());
    assert!(ui.find(format!("{:.1} PSI", sensor.pressure).as_str()).is_ok());
    assert!(ui.find(sensor.status.verdict()).is_ok());
}

/// Test the full application shell.
#[test]
fn test_app_shell() {
    let config = AppConfig::default();
    let simulator_state = Simulator::new(
        HomeState::seeded(NOW),
        SmallRng::seed_from_u64(1),
        LeakSensitivity::default(),
    );
    let mut app = HydroSight::new(&config, simulator_state, NOW);

    {
        let mut ui = simulator(app.view());
        assert!(ui.find("Good Morning, Alex").is_ok());
        assert!(ui.find("Community").is_ok());
    }

    let _ = app.update(Message::Navigate(View::Repair));
    let mut ui = simulator(app.view());
    assert!(ui.find("Analyzing Plumbing...").is_ok());
}
