/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the API layer and the UI layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies an artwork in the remote catalog and in the displayed collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub u64);

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ArtworkId {
    type Err = std::num::ParseIntError;

    /// Parse user input, ignoring surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ArtworkId)
    }
}

/// A star rating between 1 and 5
///
/// The only way to obtain one is through `Rating::new` or `Rating::all`,
/// so an out-of-range value can never reach the rating endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Returns `None` when `value` is outside 1..=5
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Rating(value))
    }

    /// Every rating, lowest first (one per star of the rating scale)
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only projection of an artwork fetched from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRecord {
    /// Title of the artwork
    pub title: String,
    /// Artist display name ("Unknown artist" when the catalog has none)
    pub artist: String,
    /// IIIF image identifier, used to build the image URL
    pub image_id: String,
}

/// Body of a rating submission: `{"id": <id>, "rating": <rating>}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingSubmission {
    pub id: ArtworkId,
    pub rating: Rating,
}
