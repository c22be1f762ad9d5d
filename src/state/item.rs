/// Lifecycle of a single artwork card
///
/// An `Item` fetches its artwork, collects one rating and submits it.
/// It never performs I/O itself: every side effect is returned from
/// `update` as an `Action` and carried out by the application, which
/// feeds the outcome back in as another `ItemMessage`.

use iced::widget::image::Handle;

use super::data::{ArtworkId, ArtworkRecord, Rating, RatingSubmission};
use super::notice::Notice;
use crate::api::ApiError;

/// Events delivered to one item
#[derive(Debug, Clone)]
pub enum ItemMessage {
    /// Metadata request finished
    ArtworkLoaded(Result<ArtworkRecord, ApiError>),
    /// Image download finished (raw encoded bytes)
    ImageLoaded(Result<Vec<u8>, ApiError>),
    /// User clicked a star
    RatingSelected(Rating),
    /// User clicked "Submit"
    SubmitPressed,
    /// Rating request finished
    RatingSubmitted(Result<(), ApiError>),
    /// User clicked the remove icon
    RemovePressed,
}

/// Side effect requested by an item
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// GET the artwork metadata
    FetchArtwork(ArtworkId),
    /// GET the artwork image
    FetchImage { image_id: String },
    /// POST the rating
    Submit(RatingSubmission),
    /// Show a toast
    Notify(Notice),
    /// Ask the collection to drop this artwork
    Remove(ArtworkId),
}

/// Downloaded artwork image
#[derive(Debug, Clone)]
pub enum Preview {
    Loading,
    Ready(Handle),
    Unavailable,
}

/// Where an item is in its lifecycle, with the data each stage owns
#[derive(Debug, Clone)]
pub enum Phase {
    Loading,
    Failed(ApiError),
    Loaded {
        artwork: ArtworkRecord,
        preview: Preview,
        rating: Option<Rating>,
        /// A rating POST is in flight
        submitting: bool,
    },
    Submitted {
        artwork: ArtworkRecord,
        preview: Preview,
        rating: Rating,
    },
}

/// Coarse lifecycle state, as observed from the outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Loading,
    Error,
    LoadedUnrated,
    LoadedRated,
    Submitted,
}

#[derive(Debug, Clone)]
pub struct Item {
    key: u64,
    id: ArtworkId,
    phase: Phase,
}

impl Item {
    /// Create an item in the loading state together with its metadata request
    pub fn new(key: u64, id: ArtworkId) -> (Self, Action) {
        let item = Item {
            key,
            id,
            phase: Phase::Loading,
        };
        (item, Action::FetchArtwork(id))
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn id(&self) -> ArtworkId {
        self.id
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn state(&self) -> LifecycleState {
        match &self.phase {
            Phase::Loading => LifecycleState::Loading,
            Phase::Failed(_) => LifecycleState::Error,
            Phase::Loaded { rating: None, .. } => LifecycleState::LoadedUnrated,
            Phase::Loaded { rating: Some(_), .. } => LifecycleState::LoadedRated,
            Phase::Submitted { .. } => LifecycleState::Submitted,
        }
    }

    /// The rating scale and submit button are only rendered while loaded
    pub fn shows_rating_controls(&self) -> bool {
        matches!(self.phase, Phase::Loaded { .. })
    }

    /// Submit is enabled once a rating is chosen and no POST is pending
    pub fn can_submit(&self) -> bool {
        matches!(
            self.phase,
            Phase::Loaded {
                rating: Some(_),
                submitting: false,
                ..
            }
        )
    }

    /// Currently chosen (or submitted) rating
    pub fn rating(&self) -> Option<Rating> {
        match &self.phase {
            Phase::Loaded { rating, .. } => *rating,
            Phase::Submitted { rating, .. } => Some(*rating),
            _ => None,
        }
    }

    pub fn update(&mut self, message: ItemMessage) -> Action {
        match message {
            ItemMessage::ArtworkLoaded(result) => {
                if !matches!(self.phase, Phase::Loading) {
                    return Action::None;
                }

                match result {
                    Ok(artwork) => {
                        tracing::debug!(id = %self.id, title = %artwork.title, "artwork loaded");
                        let image_id = artwork.image_id.clone();
                        self.phase = Phase::Loaded {
                            artwork,
                            preview: Preview::Loading,
                            rating: None,
                            submitting: false,
                        };
                        Action::FetchImage { image_id }
                    }
                    Err(error) => {
                        tracing::warn!(id = %self.id, %error, "failed to load artwork");
                        self.phase = Phase::Failed(error);
                        Action::None
                    }
                }
            }
            ItemMessage::ImageLoaded(result) => {
                let next = match result {
                    Ok(bytes) => Preview::Ready(Handle::from_bytes(bytes)),
                    Err(error) => {
                        tracing::warn!(id = %self.id, %error, "failed to load artwork image");
                        Preview::Unavailable
                    }
                };

                match &mut self.phase {
                    Phase::Loaded { preview, .. } | Phase::Submitted { preview, .. } => {
                        *preview = next;
                    }
                    _ => {}
                }
                Action::None
            }
            ItemMessage::RatingSelected(value) => {
                if let Phase::Loaded { rating, .. } = &mut self.phase {
                    *rating = Some(value);
                }
                Action::None
            }
            ItemMessage::SubmitPressed => {
                if !self.can_submit() {
                    return Action::None;
                }

                let id = self.id;
                match &mut self.phase {
                    Phase::Loaded {
                        rating: Some(rating),
                        submitting,
                        ..
                    } => {
                        *submitting = true;
                        Action::Submit(RatingSubmission {
                            id,
                            rating: *rating,
                        })
                    }
                    _ => Action::None,
                }
            }
            ItemMessage::RatingSubmitted(result) => self.finish_submission(result),
            ItemMessage::RemovePressed => Action::Remove(self.id),
        }
    }

    fn finish_submission(&mut self, result: Result<(), ApiError>) -> Action {
        let id = self.id;
        let Phase::Loaded {
            artwork,
            preview,
            rating: Some(rating),
            submitting,
        } = &mut self.phase
        else {
            return Action::None;
        };
        if !*submitting {
            return Action::None;
        }

        match result {
            Ok(()) => {
                tracing::info!(%id, rating = %rating, "rating submitted");
                let title = artwork.title.clone();
                let submitted = Phase::Submitted {
                    artwork: artwork.clone(),
                    preview: preview.clone(),
                    rating: *rating,
                };
                self.phase = submitted;
                Action::Notify(Notice::Submitted { title })
            }
            Err(error) => {
                tracing::warn!(%id, %error, "rating submission failed");
                *submitting = false;
                Action::Notify(Notice::SubmitFailed)
            }
        }
    }
}
