use serde::Deserialize;

use super::ApiError;
use crate::state::data::ArtworkRecord;

const UNKNOWN_ARTIST: &str = "Unknown artist";

/// `GET /artworks/{id}` response envelope
#[derive(Debug, Deserialize)]
struct ArtworkResponse {
    data: ArtworkData,
}

/// Only the fields the app displays; everything else is ignored
#[derive(Debug, Deserialize)]
struct ArtworkData {
    title: String,
    /// `null` or absent for anonymous works
    artist_title: Option<String>,
    image_id: String,
}

/// Parse a catalog response body into an `ArtworkRecord`
///
/// Missing or mistyped fields are reported as `ApiError::Malformed`.
pub fn parse_artwork(body: &str) -> Result<ArtworkRecord, ApiError> {
    let response: ArtworkResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    let data = response.data;

    Ok(ArtworkRecord {
        title: data.title,
        artist: data
            .artist_title
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
        image_id: data.image_id,
    })
}

/// Build the URL of an artwork image
///
/// `{base}/{image_id}/{variant}`, e.g.
/// `https://www.artic.edu/iiif/2/<image_id>/full/843,/0/default.jpg`
pub fn image_url(base: &str, image_id: &str, variant: &str) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        image_id,
        variant.trim_start_matches('/')
    )
}
