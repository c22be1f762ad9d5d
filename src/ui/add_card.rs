use iced::alignment::Vertical;
use iced::widget::{button, column, container, text, text_input};
use iced::{Alignment, Element};

use super::card::{CARD_HEIGHT, CARD_WIDTH};
use crate::Message;

/// "Add Artwork!" card: a numeric id field and a submit button
pub fn view(draft: &str) -> Element<'_, Message> {
    let content = column![
        text("Add Artwork!").size(24),
        text_input("Enter artID here!", draft)
            .on_input(Message::DraftChanged)
            .on_submit(Message::AddRequested)
            .padding(8),
        button("Submit!")
            .on_press(Message::AddRequested)
            .padding(10),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(content)
        .width(CARD_WIDTH)
        .height(CARD_HEIGHT)
        .padding(24)
        .align_y(Vertical::Center)
        .style(container::rounded_box)
        .into()
}
