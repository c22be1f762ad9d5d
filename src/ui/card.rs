use iced::widget::{button, column, container, horizontal_space, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::data::{ArtworkRecord, Rating};
use crate::state::item::{Item, ItemMessage, Phase, Preview};

/// Card size shared with the "add artwork" card so the grid stays even
pub const CARD_WIDTH: f32 = 320.0;
pub const CARD_HEIGHT: f32 = 460.0;

const IMAGE_HEIGHT: f32 = 260.0;

/// Render one artwork item
///
/// The rating scale and Submit button only exist while the item is loaded;
/// once submitted they are removed from the tree, not disabled.
pub fn view(item: &Item) -> Element<'_, ItemMessage> {
    let body: Element<'_, ItemMessage> = match item.phase() {
        Phase::Loading => container(text("Loading artwork...").size(16))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        Phase::Failed(error) => column![
            row![horizontal_space(), remove_button()],
            text("There was an error!").size(24),
            text("There was an error loading this image, try checking the ID...").size(14),
            text(error.to_string()).size(12),
        ]
        .spacing(12)
        .into(),
        Phase::Loaded {
            artwork, preview, ..
        }
        | Phase::Submitted {
            artwork, preview, ..
        } => {
            let mut content = column![preview_view(preview), details(artwork)].spacing(12);
            if item.shows_rating_controls() {
                content = content.push(rating_controls(item.rating(), item.can_submit()));
            }
            content.into()
        }
    };

    container(body)
        .width(CARD_WIDTH)
        .height(CARD_HEIGHT)
        .padding(12)
        .style(container::rounded_box)
        .into()
}

fn preview_view(preview: &Preview) -> Element<'_, ItemMessage> {
    match preview {
        Preview::Ready(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(IMAGE_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        Preview::Loading => placeholder("Loading image..."),
        Preview::Unavailable => placeholder("Image unavailable"),
    }
}

fn placeholder(label: &'static str) -> Element<'static, ItemMessage> {
    container(text(label).size(14))
        .center_x(Length::Fill)
        .center_y(IMAGE_HEIGHT)
        .into()
}

/// Title, artist and the remove icon
fn details(artwork: &ArtworkRecord) -> Element<'_, ItemMessage> {
    row![
        column![text(&artwork.title).size(20), text(&artwork.artist).size(14)]
            .spacing(4)
            .width(Length::Fill),
        remove_button(),
    ]
    .spacing(8)
    .into()
}

fn remove_button() -> Element<'static, ItemMessage> {
    button(text("✕").size(16))
        .style(button::text)
        .on_press(ItemMessage::RemovePressed)
        .into()
}

/// Five-star scale plus Submit, disabled until a rating is chosen
fn rating_controls(selected: Option<Rating>, can_submit: bool) -> Element<'static, ItemMessage> {
    let stars = row(Rating::all().map(|value| {
        let filled = selected.is_some_and(|current| value <= current);
        button(text(if filled { "★" } else { "☆" }).size(24))
            .style(button::text)
            .padding(2)
            .on_press(ItemMessage::RatingSelected(value))
            .into()
    }))
    .spacing(2);

    let label = selected
        .map(|rating| format!("{}/{}", rating.value(), Rating::MAX))
        .unwrap_or_default();

    let submit = button("Submit")
        .padding(8)
        .on_press_maybe(can_submit.then_some(ItemMessage::SubmitPressed));

    row![stars, text(label).size(14), horizontal_space(), submit]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}
