//! AR repair overlay: simulated camera feed with a guided fix.

use iced::mouse;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, LineDash, Path, Stroke};
use iced::widget::{button, column, container, row, stack, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

use hydrosight_common::{RepairStep, RepairWizard};

use crate::message::Message;
use crate::view::icons::{self, IconSize};
use crate::view::theme;

/// Side of the dashed targeting square.
const RETICLE_SIZE: f32 = 256.0;

/// Render the repair overlay for the current wizard step.
pub fn repair_view(wizard: &RepairWizard) -> Element<'_, Message> {
    let feed = render_feed(wizard);
    let sheet = render_sheet(wizard);

    container(column![feed, sheet])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::BLACK)),
            ..Default::default()
        })
        .into()
}

fn render_feed(wizard: &RepairWizard) -> Element<'_, Message> {
    let badge = container(
        row![
            icons::camera(IconSize::Small),
            text("LIVE FEED • AI ACTIVE").size(11).style(theme::calm_text),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .padding([4, 10])
    .style(theme::card);

    let close = button(icons::close(IconSize::XLarge))
        .on_press(Message::CloseRepair)
        .padding(8)
        .style(button::secondary);

    let hud = row![container(badge).width(Length::Fill), close].align_y(Alignment::Start);

    let reticle = Canvas::new(Reticle)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = stack![reticle, container(hud).padding(24).width(Length::Fill)];

    if wizard.shows_overlay_hint() {
        let hint = container(text("Tighten Here").size(12).style(|_theme: &Theme| text::Style {
            color: Some(Color::BLACK),
        }))
        .padding([4, 8])
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::from_rgb(0.98, 0.75, 0.14))),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        layers = layers.push(
            container(hint)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(iced::Padding {
                    top: 120.0,
                    left: 120.0,
                    ..iced::Padding::ZERO
                })
                .align_x(Alignment::Center)
                .align_y(Alignment::Center),
        );
    }

    container(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|t: &Theme| container::Style {
            background: Some(Background::Color(theme::colors(t).canvas_background())),
            ..Default::default()
        })
        .into()
}

fn render_sheet(wizard: &RepairWizard) -> Element<'_, Message> {
    let info = wizard.info();

    let icon = if wizard.step() == RepairStep::Resolved {
        icons::check(IconSize::XLarge)
    } else {
        icons::wrench(IconSize::XLarge)
    };

    let action = button(
        container(text(info.action_label).size(15))
            .center_x(Length::Fill),
    )
    .on_press_maybe(wizard.action_enabled().then_some(Message::RepairAction))
    .padding(12)
    .width(Length::Fill)
    .style(button::primary);

    let body = column![
        text(info.title).size(18),
        text(info.text).size(14).style(theme::muted_text),
        action,
    ]
    .spacing(10)
    .width(Length::Fill);

    container(row![icon, body].spacing(16).align_y(Alignment::Start))
        .padding(24)
        .width(Length::Fill)
        .style(|t: &Theme| container::Style {
            background: Some(Background::Color(theme::colors(t).background())),
            border: Border {
                color: theme::colors(t).border(),
                width: 1.0,
                radius: 24.0.into(),
            },
            ..Default::default()
        })
        .into()
}

/// Dashed targeting square with a center ring.
struct Reticle;

impl canvas::Program<Message> for Reticle {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let water = theme::colors(theme).water();
        let center = frame.center();
        let side = RETICLE_SIZE.min(bounds.width).min(bounds.height);

        frame.stroke(
            &Path::rounded_rectangle(
                Point::new(center.x - side / 2.0, center.y - side / 2.0),
                Size::new(side, side),
                8.0.into(),
            ),
            Stroke {
                line_dash: LineDash {
                    segments: &[8.0, 6.0],
                    offset: 0,
                },
                ..Stroke::default()
                    .with_color(Color { a: 0.5, ..water })
                    .with_width(2.0)
            },
        );
        frame.stroke(
            &Path::circle(center, 8.0),
            Stroke::default().with_color(water).with_width(1.0),
        );

        vec![frame.into_geometry()]
    }
}
