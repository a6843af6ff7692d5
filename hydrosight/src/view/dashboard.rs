//! Home dashboard: consumption gauge, live status, leak hunter and feed.

use iced::widget::{Column, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length, Theme};

use hydrosight_common::usage::{DailyStats, WEEKLY_USAGE, WaterEvent};
use hydrosight_common::{ActiveFlow, GhostLeak, HomeState};

use crate::message::Message;
use crate::view::components::{PulseGauge, StatusLed, StatusLedState, UsageChart, UsageChartState};
use crate::view::formatting::{format_duration, format_gallons, format_timestamp};
use crate::view::icons::{self, IconSize};
use crate::view::theme;

/// Render the dashboard view.
pub fn dashboard_view<'a>(
    state: &'a HomeState,
    resident: &'a str,
    chart: &'a UsageChartState,
    now_ms: i64,
) -> Element<'a, Message> {
    let gauge = container(
        PulseGauge::new(state.stats.fill_percent())
            .flowing(state.is_flowing(), state.ticks)
            .view(),
    )
    .center_x(Length::Fill);

    let cards = row![
        render_ghost_hunter(state.ghost_leak.as_ref()),
        render_shower_dj(),
    ]
    .spacing(12);

    let content = column![
        render_header(state, resident),
        gauge,
        render_flow_status(state.active_flow.as_ref()),
        cards,
        render_feed(&state.events, now_ms),
        render_weekly(&state.stats, chart),
    ]
    .spacing(20)
    .padding(20);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn render_header<'a>(state: &HomeState, resident: &'a str) -> Element<'a, Message> {
    let title = text(format!("Good Morning, {resident}")).size(24);

    let status = if state.leak_suspected() {
        text("Leak Suspected").size(13).style(theme::warning_text)
    } else {
        text("System Secure").size(13).style(theme::calm_text)
    };

    let subtitle = row![text("Today •").size(13).style(theme::muted_text), status]
        .spacing(4)
        .align_y(Alignment::Center);

    row![
        column![title, subtitle].spacing(4).width(Length::Fill),
        icons::bell(IconSize::XLarge),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn render_flow_status(flow: Option<&ActiveFlow>) -> Element<'_, Message> {
    let content = match flow {
        Some(flow) => row![
            icons::zap(IconSize::Large),
            column![
                text("Active Flow Detected").size(16),
                text(format!("{} • {} GPM", flow.appliance, flow.rate))
                    .size(13)
                    .style(theme::water_text),
            ]
            .spacing(2)
            .width(Length::Fill),
            StatusLed::new(StatusLedState::Flowing).with_state_text().view(),
        ],
        None => row![
            icons::leaf(IconSize::Large),
            column![
                text("All Quiet").size(16),
                text("No leaks detected. Saving water.")
                    .size(13)
                    .style(theme::calm_text),
            ]
            .spacing(2)
            .width(Length::Fill),
        ],
    };

    let flowing = flow.is_some();
    container(content.spacing(12).align_y(Alignment::Center))
        .padding(16)
        .width(Length::Fill)
        .style(move |t: &Theme| {
            let c = theme::colors(t);
            let color = if flowing { c.water() } else { c.calm() };
            theme::accent_card(color)(t)
        })
        .into()
}

fn render_ghost_hunter(leak: Option<&GhostLeak>) -> Element<'_, Message> {
    let heading = row![
        icons::search(IconSize::Small),
        text("GHOST HUNTER").size(12).style(theme::muted_text),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = match leak {
        Some(leak) => column![
            row![
                icons::alert(IconSize::Large),
                text("Leak Suspected").size(18).style(theme::warning_text),
                StatusLed::new(StatusLedState::Warning).with_state_text().view(),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
            text("Continuous low-freq vibration detected.")
                .size(10)
                .style(theme::muted_text),
            metric_row("Duration", format_duration(leak.duration_secs())),
            metric_row("Est. Loss", format!("{:.3}g", leak.wasted)),
        ]
        .spacing(6)
        .into(),
        None => column![
            text("Scanning...").size(18).style(theme::calm_text),
            text("Micro-vibrations nominal")
                .size(11)
                .style(theme::muted_text),
        ]
        .spacing(4)
        .into(),
    };

    let suspected = leak.is_some();
    container(column![heading, body].spacing(8))
        .padding(16)
        .width(Length::FillPortion(1))
        .style(move |t: &Theme| {
            if suspected {
                theme::accent_card(theme::colors(t).warning())(t)
            } else {
                theme::card(t)
            }
        })
        .into()
}

fn metric_row<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).size(10).style(theme::muted_text).width(Length::Fill),
        text(value).size(12),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn render_shower_dj<'a>() -> Element<'a, Message> {
    let heading = row![
        icons::music(IconSize::Small),
        text("SHOWER DJ").size(12).style(theme::muted_text),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    container(
        column![
            heading,
            text("Ready").size(18),
            text("Paired with Sonos Bathroom")
                .size(11)
                .style(theme::muted_text),
        ]
        .spacing(6),
    )
    .padding(16)
    .width(Length::FillPortion(1))
    .style(theme::card)
    .into()
}

fn render_feed(events: &[WaterEvent], now_ms: i64) -> Element<'_, Message> {
    let header = row![
        icons::droplet(IconSize::Large),
        text("The Water Feed").size(18).width(Length::Fill),
        text("Today").size(11).style(theme::muted_text),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let mut list = Column::new().spacing(12);
    for (index, event) in events.iter().enumerate() {
        let marker = if index == 0 {
            StatusLedState::Flowing
        } else {
            StatusLedState::Quiet
        };
        list = list.push(
            row![
                StatusLed::new(marker).view(),
                column![
                    text(event.appliance.as_str()).size(14),
                    text(format_timestamp(event.timestamp_ms, now_ms))
                        .size(11)
                        .style(theme::muted_text),
                ]
                .width(Length::Fill),
                text(format_gallons(event.volume))
                    .size(14)
                    .style(theme::water_text),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        );
    }

    container(column![header, rule::horizontal(1), list].spacing(12))
        .padding(20)
        .width(Length::Fill)
        .style(theme::card)
        .into()
}

fn render_weekly<'a>(stats: &DailyStats, chart: &'a UsageChartState) -> Element<'a, Message> {
    container(
        column![
            text("Weekly Consumption").size(18),
            UsageChart::new(&WEEKLY_USAGE, chart).view(180.0),
            row![
                icons::alert(IconSize::Medium),
                text(insight_text(stats)).size(12).style(theme::warning_text),
            ]
            .spacing(10),
        ]
        .spacing(16),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::card)
    .into()
}

/// Bill projection sentence under the weekly chart.
pub fn insight_text(stats: &DailyStats) -> String {
    let delta = stats.bill_delta();
    let direction = if delta >= 0.0 { "higher" } else { "lower" };
    format!(
        "Predictive Insight: Based on current usage, your bill will be approx ${:.2}. \
         That's ${:.0} {direction} than average.",
        stats.projected_bill,
        delta.abs(),
    )
}
