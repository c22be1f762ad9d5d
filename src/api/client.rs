use reqwest::Client;

use super::{catalog, ApiError};
use crate::config::Config;
use crate::state::data::{ArtworkId, ArtworkRecord, RatingSubmission};

/// HTTP client for the catalog, the image server and the rating endpoint
///
/// Cheap to clone: every async task gets its own copy.
#[derive(Debug, Clone)]
pub struct ArtClient {
    http: Client,
    catalog_url: String,
    image_base_url: String,
    image_variant: String,
    rating_url: String,
}

impl ArtClient {
    /// Fails only when the TLS backend cannot be initialised
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("art-rater/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            catalog_url: config.catalog_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.clone(),
            image_variant: config.image_variant.clone(),
            rating_url: config.rating_url.clone(),
        })
    }

    pub fn artwork_url(&self, id: ArtworkId) -> String {
        format!("{}/{}", self.catalog_url, id)
    }

    pub fn image_url(&self, image_id: &str) -> String {
        catalog::image_url(&self.image_base_url, image_id, &self.image_variant)
    }

    /// Fetch and validate the metadata of one artwork
    pub async fn fetch_artwork(&self, id: ArtworkId) -> Result<ArtworkRecord, ApiError> {
        let url = self.artwork_url(id);
        tracing::debug!(%url, "fetching artwork");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        catalog::parse_artwork(&body)
    }

    /// Download the encoded image bytes of an artwork
    pub async fn fetch_image(&self, image_id: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.image_url(image_id);
        tracing::debug!(%url, "fetching image");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// POST a rating; any 2xx counts as accepted and the body is ignored
    pub async fn submit_rating(&self, submission: RatingSubmission) -> Result<(), ApiError> {
        tracing::debug!(id = %submission.id, rating = %submission.rating, "submitting rating");

        let response = self
            .http
            .post(&self.rating_url)
            .json(&submission)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Rating;
    use axum::{
        body::Bytes,
        extract::{Path, State},
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use std::sync::{Arc, Once};
    use tokio::{
        net::TcpListener,
        sync::{oneshot, Mutex},
    };

    static LOOPBACK_NO_PROXY: Once = Once::new();

    /// Client for a loopback server, bypassing any proxy set in the environment
    fn loopback_client(config: &Config) -> ArtClient {
        LOOPBACK_NO_PROXY.call_once(|| std::env::set_var("NO_PROXY", "127.0.0.1,localhost"));
        ArtClient::new(config).expect("client")
    }

    /// Address nothing listens on once the listener is dropped
    async fn closed_addr() -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        addr
    }

    #[derive(Clone)]
    struct ServerState {
        rating_status: StatusCode,
        received: Arc<Mutex<Vec<String>>>,
        first_body: Arc<Mutex<Option<oneshot::Sender<String>>>>,
    }

    async fn handle_artwork(Path(id): Path<u64>) -> Result<Json<serde_json::Value>, StatusCode> {
        match id {
            27992 => Ok(Json(serde_json::json!({
                "data": {
                    "id": 27992,
                    "title": "A Sunday on La Grande Jatte — 1884",
                    "artist_title": "Georges Seurat",
                    "image_id": "2d484387-2509-5e8e-2c43-22f9981972eb"
                }
            }))),
            // Answers 200 but without the fields the app needs
            1 => Ok(Json(serde_json::json!({ "data": { "id": 1 } }))),
            _ => Err(StatusCode::NOT_FOUND),
        }
    }

    async fn handle_image(Path((image_id, _rest)): Path<(String, String)>) -> Result<Vec<u8>, StatusCode> {
        if image_id == "missing" {
            Err(StatusCode::NOT_FOUND)
        } else {
            Ok(b"jpeg-bytes".to_vec())
        }
    }

    async fn handle_rating(State(state): State<ServerState>, body: Bytes) -> StatusCode {
        let body = String::from_utf8_lossy(&body).to_string();
        state.received.lock().await.push(body.clone());
        if let Some(tx) = state.first_body.lock().await.take() {
            let _ = tx.send(body);
        }
        state.rating_status
    }

    struct TestServer {
        client: ArtClient,
        received: Arc<Mutex<Vec<String>>>,
        first_body: oneshot::Receiver<String>,
    }

    async fn spawn_server(rating_status: StatusCode) -> TestServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let (tx, rx) = oneshot::channel();
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = ServerState {
            rating_status,
            received: received.clone(),
            first_body: Arc::new(Mutex::new(Some(tx))),
        };
        let app = Router::new()
            .route("/artworks/:id", get(handle_artwork))
            .route("/iiif/:image_id/*rest", get(handle_image))
            .route("/rating", post(handle_rating))
            .with_state(state);
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let config = Config {
            catalog_url: format!("http://{addr}/artworks"),
            image_base_url: format!("http://{addr}/iiif"),
            rating_url: format!("http://{addr}/rating"),
            ..Config::default()
        };

        TestServer {
            client: loopback_client(&config),
            received,
            first_body: rx,
        }
    }

    fn submission(id: u64, rating: u8) -> RatingSubmission {
        RatingSubmission {
            id: ArtworkId(id),
            rating: Rating::new(rating).unwrap(),
        }
    }

    #[tokio::test]
    async fn fetch_artwork_parses_record() {
        let server = spawn_server(StatusCode::OK).await;

        let record = server.client.fetch_artwork(ArtworkId(27992)).await.unwrap();
        assert_eq!(record.title, "A Sunday on La Grande Jatte — 1884");
        assert_eq!(record.artist, "Georges Seurat");
        assert_eq!(record.image_id, "2d484387-2509-5e8e-2c43-22f9981972eb");
    }

    #[tokio::test]
    async fn fetch_artwork_reports_status() {
        let server = spawn_server(StatusCode::OK).await;

        let result = server.client.fetch_artwork(ArtworkId(404404)).await;
        assert_eq!(result, Err(ApiError::Status(404)));
    }

    #[tokio::test]
    async fn fetch_artwork_rejects_incomplete_record() {
        let server = spawn_server(StatusCode::OK).await;

        let result = server.client.fetch_artwork(ArtworkId(1)).await;
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[tokio::test]
    async fn fetch_artwork_reports_network_failure() {
        let addr = closed_addr().await;
        let config = Config {
            catalog_url: format!("http://{addr}/artworks"),
            ..Config::default()
        };
        let client = loopback_client(&config);

        let result = client.fetch_artwork(ArtworkId(27992)).await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[tokio::test]
    async fn fetch_image_returns_bytes() {
        let server = spawn_server(StatusCode::OK).await;

        let bytes = server.client.fetch_image("abc").await.unwrap();
        assert_eq!(bytes, b"jpeg-bytes".to_vec());
        assert_eq!(
            server.client.fetch_image("missing").await,
            Err(ApiError::Status(404))
        );
    }

    #[tokio::test]
    async fn submit_rating_posts_exact_body() {
        let server = spawn_server(StatusCode::OK).await;

        server
            .client
            .submit_rating(submission(27992, 4))
            .await
            .expect("submit");

        let body = server.first_body.await.expect("body");
        assert_eq!(body, r#"{"id":27992,"rating":4}"#);
        assert_eq!(server.received.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn submit_rating_reports_server_error() {
        let server = spawn_server(StatusCode::INTERNAL_SERVER_ERROR).await;

        let result = server.client.submit_rating(submission(27992, 2)).await;
        assert_eq!(result, Err(ApiError::Status(500)));
        assert_eq!(server.received.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn submit_rating_reports_network_failure() {
        let addr = closed_addr().await;
        let config = Config {
            rating_url: format!("http://{addr}/rating"),
            ..Config::default()
        };
        let client = loopback_client(&config);

        let result = client.submit_rating(submission(27992, 4)).await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
