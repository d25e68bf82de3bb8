//! Cookie-session admin authentication.
//!
//! A single boolean flag in the session marks the browser as an
//! authenticated admin. Password checks are Argon2 against a stored hash,
//! never against plaintext from the environment.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

const ADMIN_SESSION_KEY: &str = "admin_authenticated";

/// Create the session layer backing admin logins.
///
/// Sessions live in process memory and expire after a week of
/// inactivity, matching how long an admin editing session is useful.
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    let session_store = MemoryStore::default();

    SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}

/// Verify a password against an Argon2 PHC-format hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::error!("Stored password hash is malformed: {:?}", e);
            false
        }
    }
}

/// Mark the session as an authenticated admin.
pub async fn log_in(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.insert(ADMIN_SESSION_KEY, true).await
}

/// Clear the admin flag and drop the session.
pub async fn log_out(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

/// Whether this session has completed an admin login.
pub async fn is_admin(session: &Session) -> bool {
    session
        .get::<bool>(ADMIN_SESSION_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or(false)
}

/// Extractor that requires an authenticated admin session.
///
/// Browser-facing admin routes use this; an unauthenticated request is
/// redirected to the login page rather than rejected with a 401.
pub struct AdminSession(pub Session);

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        if is_admin(&session).await {
            Ok(AdminSession(session))
        } else {
            Err(Redirect::to("/api/admin/login").into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::PasswordHasher;
    use argon2::password_hash::{SaltString, rand_core::OsRng};

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_verify_password_accepts_correct() {
        let hashed = hash("hunter2");
        assert!(verify_password("hunter2", &hashed));
    }

    #[test]
    fn test_verify_password_rejects_wrong() {
        let hashed = hash("hunter2");
        assert!(!verify_password("hunter3", &hashed));
    }

    #[test]
    fn test_verify_password_rejects_malformed_hash() {
        assert!(!verify_password("hunter2", "not-a-phc-hash"));
    }
}
