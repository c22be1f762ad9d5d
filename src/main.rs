use iced::widget::{column, container, scrollable, stack, text};
use iced::{Alignment, Element, Length, Pixels, Subscription, Task, Theme};
use iced_aw::Wrap;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod state;
mod ui;

use api::ArtClient;
use config::Config;
use state::collection::Collection;
use state::item::{Action, ItemMessage};
use state::notice::Toasts;

/// How often visible toasts are checked for expiry
const TOAST_TICK: Duration = Duration::from_millis(250);

/// Main application state
struct ArtRater {
    /// HTTP access to the catalog and the rating endpoint
    client: ArtClient,
    /// Artworks currently on screen
    collection: Collection,
    /// Visible notifications
    toasts: Toasts,
    /// Contents of the "add artwork" field
    draft: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Event for the item with the given key
    Item(u64, ItemMessage),
    /// User typed in the "add artwork" field
    DraftChanged(String),
    /// User submitted the "add artwork" field
    AddRequested,
    /// Periodic tick while toasts are visible
    Tick(Instant),
    /// User closed a toast
    DismissToast(u64),
}

impl ArtRater {
    /// Create a new instance of the application and request the seeded artworks
    fn new(config: Config, client: ArtClient) -> (Self, Task<Message>) {
        let (collection, actions) = Collection::seeded(&config.seed);
        tracing::info!("🎨 Art Rater initialized with {} artworks", collection.len());

        let mut app = ArtRater {
            client,
            collection,
            toasts: Toasts::new(config.toast_duration()),
            draft: String::new(),
        };

        let tasks: Vec<Task<Message>> = actions
            .into_iter()
            .map(|(key, action)| app.perform(key, action))
            .collect();

        (app, Task::batch(tasks))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Item(key, message) => {
                // Results for removed items have nobody left to receive them
                let Some(item) = self.collection.get_mut(key) else {
                    tracing::debug!(key, "dropping message for removed item");
                    return Task::none();
                };

                let action = item.update(message);
                self.perform(key, action)
            }
            Message::DraftChanged(value) => {
                // Numeric field: ignore anything but digits
                if value.chars().all(|c| c.is_ascii_digit()) {
                    self.draft = value;
                }
                Task::none()
            }
            Message::AddRequested => match self.collection.add(&self.draft) {
                Some((key, action)) => {
                    self.draft.clear();
                    self.perform(key, action)
                }
                None => Task::none(),
            },
            Message::Tick(now) => {
                let expired = self.toasts.expire(now);
                if expired > 0 {
                    tracing::trace!(expired, remaining = self.toasts.len(), "toasts expired");
                }
                Task::none()
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
        }
    }

    /// Carry out the side effect requested by an item
    fn perform(&mut self, key: u64, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::FetchArtwork(id) => {
                let client = self.client.clone();
                Task::perform(async move { client.fetch_artwork(id).await }, move |result| {
                    Message::Item(key, ItemMessage::ArtworkLoaded(result))
                })
            }
            Action::FetchImage { image_id } => {
                let client = self.client.clone();
                Task::perform(
                    async move { client.fetch_image(&image_id).await },
                    move |result| Message::Item(key, ItemMessage::ImageLoaded(result)),
                )
            }
            Action::Submit(submission) => {
                let client = self.client.clone();
                Task::perform(
                    async move { client.submit_rating(submission).await },
                    move |result| Message::Item(key, ItemMessage::RatingSubmitted(result)),
                )
            }
            Action::Notify(notice) => {
                self.toasts.push(notice, Instant::now());
                Task::none()
            }
            // Removed by key: the same id may be on screen more than once
            Action::Remove(_) => {
                if let Some(notice) = self.collection.remove_key(key) {
                    self.toasts.push(notice, Instant::now());
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("Art Rater").size(48),
            text("Real Artwork, Your Thoughts, Nobody Listening").size(20),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let mut cards = vec![ui::add_card::view(&self.draft)];
        cards.extend(self.collection.iter().map(|item| {
            let key = item.key();
            ui::card::view(item).map(move |message| Message::Item(key, message))
        }));

        let grid = Wrap::with_elements(cards)
            .spacing(Pixels(16.0))
            .line_spacing(Pixels(16.0));

        let page = scrollable(
            container(
                column![header, grid]
                    .spacing(32)
                    .padding(40)
                    .align_x(Alignment::Center),
            )
            .center_x(Length::Fill),
        );

        stack![page, ui::toast::view(&self.toasts)].into()
    }

    /// Expire toasts only while there are some on screen
    fn subscription(&self) -> Subscription<Message> {
        if self.toasts.is_empty() {
            Subscription::none()
        } else {
            iced::time::every(TOAST_TICK).map(Message::Tick)
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("art_rater=info")),
        )
        .init();

    let config = Config::load().unwrap_or_else(|error| {
        tracing::warn!(%error, "using default configuration");
        Config::default()
    });

    // The app cannot do anything without HTTP, so this is fatal
    let client = match ArtClient::new(&config) {
        Ok(client) => client,
        Err(error) => {
            tracing::error!(%error, "failed to initialize HTTP client");
            std::process::exit(1);
        }
    };

    iced::application("Art Rater", ArtRater::update, ArtRater::view)
        .subscription(ArtRater::subscription)
        .theme(ArtRater::theme)
        .centered()
        .run_with(move || ArtRater::new(config, client))
}
