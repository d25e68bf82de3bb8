//! Admin surface: session login, the dashboard listing, event edits and
//! deletes, and the database export.
//!
//! Everything here sits behind the cookie session. The dashboard and the
//! mutating routes use the [`AdminSession`] extractor, which redirects
//! unauthenticated requests to the login route; the export route answers
//! 403 instead so scripted callers get a straight error.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use axum_helpers::session::{log_in, log_out};
use axum_helpers::{AdminSession, AppError, UuidPath, ValidatedJson, is_admin, verify_password};
use chrono::Utc;
use core_config::admin::AdminConfig;
use domain_events::{Event, EventRepository, EventService, UpdateEvent};
use domain_venues::{VenueRepository, VenueService};
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tower_sessions::Session;
use tracing::{info, instrument};
use utoipa::ToSchema;

pub struct AdminState<E: EventRepository, V: VenueRepository> {
    pub admin: AdminConfig,
    pub events: Arc<EventService<E>>,
    pub venues: Arc<VenueService<V>>,
    pub export_dir: PathBuf,
}

pub fn router<E, V>() -> Router<Arc<AdminState<E, V>>>
where
    E: EventRepository + 'static,
    V: VenueRepository + 'static,
{
    Router::new()
        .route("/login", get(login_prompt).post(login))
        .route("/logout", post(logout))
        .route("/dashboard", get(dashboard))
        .route("/events/{id}", put(update_event).delete(delete_event))
        .route("/export", get(export_database))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Target of the unauthenticated redirect. An API client landing here
/// gets told how to authenticate rather than an HTML login form.
async fn login_prompt() -> impl IntoResponse {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Log in via POST /api/admin/login" })),
    )
}

/// Authenticate the admin session
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session authenticated"),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "admin"
)]
#[instrument(skip_all, fields(username = %credentials.username))]
pub async fn login<E: EventRepository, V: VenueRepository>(
    State(state): State<Arc<AdminState<E, V>>>,
    session: Session,
    Json(credentials): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let ok = credentials.username == state.admin.username
        && verify_password(&credentials.password, &state.admin.password_hash);

    if !ok {
        return Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    log_in(&session)
        .await
        .map_err(|e| AppError::InternalServerError(format!("Session store error: {}", e)))?;

    info!("Admin logged in");
    Ok(Json(json!({ "message": "Logged in" })))
}

/// Clear the admin session
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 200, description = "Session cleared")),
    tag = "admin"
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    log_out(&session)
        .await
        .map_err(|e| AppError::InternalServerError(format!("Session store error: {}", e)))?;

    Ok(Json(json!({ "message": "Logged out" })))
}

/// Every event regardless of visibility window, for the admin dashboard
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "All events", body = [Event]),
        (status = 303, description = "Not logged in, redirected to login")
    ),
    tag = "admin"
)]
pub async fn dashboard<E: EventRepository, V: VenueRepository>(
    State(state): State<Arc<AdminState<E, V>>>,
    _session: AdminSession,
) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.events.list_all().await?;
    Ok(Json(events))
}

/// Edit any field of an event
#[utoipa::path(
    put,
    path = "/events/{id}",
    request_body = UpdateEvent,
    responses(
        (status = 200, description = "Updated event", body = Event),
        (status = 303, description = "Not logged in, redirected to login"),
        (status = 404, description = "Event not found")
    ),
    tag = "admin"
)]
#[instrument(skip(state, _session, update))]
pub async fn update_event<E: EventRepository, V: VenueRepository>(
    State(state): State<Arc<AdminState<E, V>>>,
    _session: AdminSession,
    UuidPath(id): UuidPath,
    ValidatedJson(update): ValidatedJson<UpdateEvent>,
) -> Result<Json<Event>, AppError> {
    let event = state.events.update(id, update).await?;
    Ok(Json(event))
}

/// Remove an event listing
#[utoipa::path(
    delete,
    path = "/events/{id}",
    responses(
        (status = 204, description = "Event deleted"),
        (status = 303, description = "Not logged in, redirected to login"),
        (status = 404, description = "Event not found")
    ),
    tag = "admin"
)]
#[instrument(skip(state, _session))]
pub async fn delete_event<E: EventRepository, V: VenueRepository>(
    State(state): State<Arc<AdminState<E, V>>>,
    _session: AdminSession,
    UuidPath(id): UuidPath,
) -> Result<StatusCode, AppError> {
    state.events.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Dump the database as a JSON download
///
/// The export is also written to a timestamped file under `EXPORT_DIR` so
/// a copy survives on the server.
#[utoipa::path(
    get,
    path = "/export",
    responses(
        (status = 200, description = "JSON export of events and venues"),
        (status = 403, description = "Not logged in")
    ),
    tag = "admin"
)]
#[instrument(skip_all)]
pub async fn export_database<E: EventRepository, V: VenueRepository>(
    State(state): State<Arc<AdminState<E, V>>>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    if !is_admin(&session).await {
        return Err(AppError::Forbidden("Admin session required".to_string()));
    }

    let events = state.events.list_all().await?;
    let venues = state.venues.list().await?;

    let exported_at = Utc::now();
    let export = json!({
        "exported_at": exported_at.to_rfc3339(),
        "events": events,
        "venues": venues,
    });
    let body = serde_json::to_string_pretty(&export)?;

    let filename = format!(
        "gig_guide_export_{}.json",
        exported_at.format("%Y%m%d_%H%M%S")
    );
    let path = state.export_dir.join(&filename);
    tokio::fs::write(&path, &body).await?;
    info!(path = %path.display(), "Wrote database export");

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{SaltString, rand_core::OsRng};
    use argon2::{Argon2, PasswordHasher};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum_helpers::create_session_layer;
    use chrono::NaiveDateTime;
    use domain_events::{CreateEvent, VisibilityPolicy};
    use domain_venues::Venue;
    use http_body_util::BodyExt;
    use mockall::mock;
    use tower::ServiceExt;
    use uuid::Uuid;

    mock! {
        EventRepo {}

        #[async_trait]
        impl EventRepository for EventRepo {
            async fn create(&self, event: Event) -> domain_events::Result<Event>;
            async fn get_by_id(&self, id: &Uuid) -> domain_events::Result<Option<Event>>;
            async fn update(&self, id: Uuid, update: UpdateEvent) -> domain_events::Result<Event>;
            async fn delete(&self, id: Uuid) -> domain_events::Result<bool>;
            async fn search(&self, query: &str) -> domain_events::Result<Vec<Event>>;
            async fn list_all(&self) -> domain_events::Result<Vec<Event>>;
            async fn distinct_organisers(&self) -> domain_events::Result<Vec<String>>;
            async fn upcoming_matching(
                &self,
                terms: &[String],
                after: NaiveDateTime,
            ) -> domain_events::Result<Vec<Event>>;
        }
    }

    mock! {
        VenueRepo {}

        #[async_trait]
        impl VenueRepository for VenueRepo {
            async fn create(&self, venue: Venue) -> domain_venues::Result<Venue>;
            async fn list(&self) -> domain_venues::Result<Vec<Venue>>;
        }
    }

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    fn test_app(events: MockEventRepo, venues: MockVenueRepo) -> Router {
        let state = Arc::new(AdminState {
            admin: AdminConfig {
                username: "admin".to_string(),
                password_hash: hash("hunter2"),
            },
            events: Arc::new(EventService::new(events, VisibilityPolicy::default())),
            venues: Arc::new(VenueService::new(venues)),
            export_dir: std::env::temp_dir(),
        });

        Router::new()
            .nest("/admin", router().with_state(state))
            .layer(create_session_layer())
    }

    fn login_request(username: &str, password: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/admin/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({ "username": username, "password": password }).to_string(),
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn test_unauthenticated_delete_redirects_and_deletes_nothing() {
        let mut events = MockEventRepo::new();
        events.expect_delete().times(0);

        let app = test_app(events, MockVenueRepo::new());
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/admin/events/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers().get(header::LOCATION).unwrap();
        assert_eq!(location, "/api/admin/login");
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let app = test_app(MockEventRepo::new(), MockVenueRepo::new());
        let response = app
            .oneshot(login_request("admin", "wrong"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_then_delete_succeeds() {
        let mut events = MockEventRepo::new();
        events.expect_delete().times(1).returning(|_| Ok(true));

        let app = test_app(events, MockVenueRepo::new());

        let login_response = app
            .clone()
            .oneshot(login_request("admin", "hunter2"))
            .await
            .unwrap();
        assert_eq!(login_response.status(), StatusCode::OK);
        let cookie = login_response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .clone();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/admin/events/{}", Uuid::now_v7()))
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_export_rejects_unauthenticated_with_403() {
        let app = test_app(MockEventRepo::new(), MockVenueRepo::new());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/admin/export")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_export_returns_attachment() {
        let mut events = MockEventRepo::new();
        events.expect_list_all().returning(|| {
            let create = CreateEvent {
                title: "Jazz Night".to_string(),
                organisers: String::new(),
                venue: "Make It Up Club".to_string(),
                link: String::new(),
                start: "2025-03-14T20:30:00".parse::<NaiveDateTime>().unwrap(),
                end: "2025-03-14T23:00:00".parse::<NaiveDateTime>().unwrap(),
                tags: String::new(),
                artists: String::new(),
            };
            Ok(vec![Event::from(create)])
        });
        let mut venues = MockVenueRepo::new();
        venues.expect_list().returning(|| Ok(vec![]));

        let app = test_app(events, venues);

        let login_response = app
            .clone()
            .oneshot(login_request("admin", "hunter2"))
            .await
            .unwrap();
        let cookie = login_response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .clone();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/admin/export")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.starts_with("attachment"));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["events"][0]["title"], "Jazz Night");
        assert!(json["exported_at"].is_string());
    }
}
