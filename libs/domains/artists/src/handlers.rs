//! HTTP handlers for the artists API

use crate::error::ArtistError;
use crate::models::{Artist, UpdateArtist};
use crate::registry::ArtistRegistry;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

pub type ArtistsState = Arc<ArtistRegistry>;

/// Create the artists router
pub fn artists_router() -> Router<ArtistsState> {
    Router::new()
        .route("/", get(list_artists))
        .route("/{id}", get(get_artist).put(update_artist))
}

/// List all artists
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All artists, sorted by name", body = Vec<Artist>),
        (status = 500, description = "Internal error")
    ),
    tag = "artists"
)]
#[instrument(skip(state))]
pub async fn list_artists(
    State(state): State<ArtistsState>,
) -> Result<Json<Vec<Artist>>, ArtistError> {
    let artists = state.list().await?;
    Ok(Json(artists))
}

/// Get artist by ID
#[utoipa::path(
    get,
    path = "/{id}",
    params(
        ("id" = Uuid, Path, description = "Artist ID")
    ),
    responses(
        (status = 200, description = "Artist found", body = Artist),
        (status = 404, description = "Artist not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "artists"
)]
#[instrument(skip(state))]
pub async fn get_artist(
    State(state): State<ArtistsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Artist>, ArtistError> {
    let artist = state.get(&id).await?;
    Ok(Json(artist))
}

/// Update an artist profile
#[utoipa::path(
    put,
    path = "/{id}",
    params(
        ("id" = Uuid, Path, description = "Artist ID")
    ),
    request_body = UpdateArtist,
    responses(
        (status = 200, description = "Artist updated", body = Artist),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Artist not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "artists"
)]
#[instrument(skip(state, update))]
pub async fn update_artist(
    State(state): State<ArtistsState>,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdateArtist>,
) -> Result<Json<Artist>, ArtistError> {
    let artist = state.update(id, update).await?;
    Ok(Json(artist))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockArtistRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app(mock: MockArtistRepository) -> Router {
        let registry = Arc::new(ArtistRegistry::new(Arc::new(mock)));
        artists_router().with_state(registry)
    }

    #[tokio::test]
    async fn test_list_artists_returns_200() {
        let mut mock = MockArtistRepository::new();
        mock.expect_list()
            .returning(|| Ok(vec![Artist::new("Sun Araw")]));

        let response = app(mock)
            .oneshot(
                Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let artists: Vec<Artist> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Sun Araw");
    }

    #[tokio::test]
    async fn test_get_unknown_artist_returns_404() {
        let mut mock = MockArtistRepository::new();
        mock.expect_get_by_id().returning(|_| Ok(None));

        let response = app(mock)
            .oneshot(
                Request::builder()
                    .uri(format!("/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_artist_returns_updated_profile() {
        let artist = Artist::new("Sun Araw");
        let id = artist.id;

        let mut mock = MockArtistRepository::new();
        mock.expect_update().returning(|id, update| {
            let mut artist = Artist::new("Sun Araw");
            artist.id = id;
            artist.apply_update(update);
            Ok(artist)
        });

        let body = serde_json::json!({ "description": "Psychedelic project" });
        let response = app(mock)
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/{}", id))
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let updated: Artist = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(updated.description, "Psychedelic project");
    }
}
