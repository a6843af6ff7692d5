//! Community placeholder screen.

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::view::View;
use crate::view::icons::{self, IconSize};
use crate::view::theme;

/// Render the community stub.
pub fn community_view<'a>() -> Element<'a, Message> {
    let content = column![
        icons::community(IconSize::XLarge),
        text("Feature coming in v2.0").size(16).style(theme::muted_text),
        button(text("Go Back").size(14))
            .on_press(Message::Navigate(View::Dashboard))
            .style(button::text),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
