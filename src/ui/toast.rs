use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::state::notice::Toasts;
use crate::Message;

const TOAST_WIDTH: f32 = 340.0;

/// Notification overlay, stacked in the bottom-right corner
pub fn view(toasts: &Toasts) -> Element<'_, Message> {
    let entries = column(toasts.iter().map(|toast| {
        container(
            row![
                text(toast.notice.to_string()).size(14).width(Length::Fill),
                button(text("✕").size(12))
                    .style(button::text)
                    .on_press(Message::DismissToast(toast.id)),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
        .width(TOAST_WIDTH)
        .padding(12)
        .style(container::rounded_box)
        .into()
    }))
    .spacing(8);

    container(entries)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
}
