//! Settings view: Ghost Hunter sensitivity and placeholder system options.

use iced::widget::{button, column, container, row, rule, scrollable, slider, text, toggler};
use iced::{Alignment, Element, Length, Theme};

use hydrosight_common::LeakSensitivity;

use crate::message::Message;
use crate::view::formatting::format_percent;
use crate::view::icons::{self, IconSize};
use crate::view::theme;

/// Render the settings view.
pub fn settings_view<'a>(sensitivity: LeakSensitivity) -> Element<'a, Message> {
    let content = column![
        text("System Configuration").size(24),
        render_sensitivity_section(sensitivity),
        render_valve_section(),
        rule::horizontal(1),
        render_actions(),
    ]
    .spacing(20)
    .padding(20);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn section_header<'a>(
    icon: Element<'a, Message>,
    title: &'a str,
    subtitle: &'a str,
) -> Element<'a, Message> {
    row![
        icon,
        column![
            text(title).size(16),
            text(subtitle).size(11).style(theme::muted_text),
        ]
        .spacing(2),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn render_sensitivity_section<'a>(sensitivity: LeakSensitivity) -> Element<'a, Message> {
    let scale = row![
        text("Conservative").size(12).width(Length::Fill),
        text(sensitivity.to_string()).size(14).style(theme::water_text),
        container(text("Aggressive").size(12))
            .width(Length::Fill)
            .align_x(Alignment::End),
    ]
    .align_y(Alignment::Center);

    let control = slider(
        LeakSensitivity::MIN..=LeakSensitivity::MAX,
        sensitivity.value(),
        Message::SetLeakSensitivity,
    );

    let probability = text(format!(
        "Leak trigger chance per idle tick: {}",
        format_percent(sensitivity.trigger_probability())
    ))
    .size(12);

    let help = text(
        "Higher sensitivity increases protection but may result in more false positive \
         \"Ghost\" alerts from background vibrations.",
    )
    .size(11)
    .style(theme::muted_text);

    container(
        column![
            section_header(
                icons::search(IconSize::Large),
                "Ghost Hunter Sensitivity",
                "Adjust AI trigger threshold",
            ),
            scale,
            control,
            probability,
            help,
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::card)
    .into()
}

fn render_valve_section<'a>() -> Element<'a, Message> {
    // No `on_toggle`, so the toggler renders disabled.
    let switch = toggler(false).label("Enabled").text_size(13);

    container(
        column![
            section_header(
                icons::lock(IconSize::Large),
                "Valve Shut-off",
                "Automatic emergency cut-off",
            ),
            switch,
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(|t: &Theme| {
        let base = theme::card(t);
        iced::widget::container::Style {
            text_color: Some(theme::colors(t).text_muted()),
            ..base
        }
    })
    .into()
}

fn render_actions<'a>() -> Element<'a, Message> {
    let reset = button(text("Reset to Defaults").size(14))
        .on_press(Message::ResetSettings)
        .style(button::secondary);

    let help = text(format!(
        "Default sensitivity is {}. Settings are kept for this session only.",
        LeakSensitivity::default()
    ))
    .size(11)
    .style(theme::muted_text);

    row![reset, help]
        .spacing(15)
        .align_y(Alignment::Center)
        .into()
}
