//! Bottom navigation bar.

use iced::widget::{Row, button, column, container, text};
use iced::{Alignment, Element, Length, Theme};

use crate::message::Message;
use crate::view::View;
use crate::view::icons::{self, IconSize};
use crate::view::theme;

fn icon_for(view: View) -> Element<'static, Message> {
    match view {
        View::Dashboard => icons::home(IconSize::XLarge),
        View::Grid => icons::grid(IconSize::XLarge),
        View::Repair => icons::wrench(IconSize::XLarge),
        View::Community => icons::community(IconSize::XLarge),
        View::Settings => icons::settings(IconSize::XLarge),
    }
}

/// Render the navigation bar with `current` highlighted.
pub fn navigation_bar<'a>(current: View) -> Element<'a, Message> {
    let mut bar = Row::new().spacing(8).align_y(Alignment::Center);

    for view in View::ALL {
        let label = text(view.label()).size(10);
        let label = if view == current {
            label.style(theme::water_text)
        } else {
            label.style(theme::muted_text)
        };

        let item = column![icon_for(view), label]
            .spacing(4)
            .align_x(Alignment::Center);

        bar = bar.push(
            button(container(item).center_x(Length::Fill))
                .on_press(Message::Navigate(view))
                .width(Length::FillPortion(1))
                .style(button::text),
        );
    }

    container(bar)
        .padding([10, 16])
        .width(Length::Fill)
        .style(|t: &Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::colors(t).background_strong())),
            border: iced::Border {
                color: theme::colors(t).border(),
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}
