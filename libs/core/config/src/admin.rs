use crate::{env_required, ConfigError, FromEnv};

/// Admin credentials used by the session login endpoint.
///
/// The password is never configured in plaintext: `ADMIN_PASSWORD_HASH`
/// carries a PHC-format argon2 hash, verified by `axum-helpers`.
#[derive(Clone, Debug)]
pub struct AdminConfig {
    pub username: String,
    pub password_hash: String,
}

impl FromEnv for AdminConfig {
    /// Requires ADMIN_USERNAME and ADMIN_PASSWORD_HASH to be set
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            username: env_required("ADMIN_USERNAME")?,
            password_hash: env_required("ADMIN_PASSWORD_HASH")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_config_from_env() {
        temp_env::with_vars(
            [
                ("ADMIN_USERNAME", Some("admin")),
                ("ADMIN_PASSWORD_HASH", Some("$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g")),
            ],
            || {
                let config = AdminConfig::from_env().unwrap();
                assert_eq!(config.username, "admin");
                assert!(config.password_hash.starts_with("$argon2id$"));
            },
        );
    }

    #[test]
    fn test_admin_config_missing_hash() {
        temp_env::with_vars(
            [
                ("ADMIN_USERNAME", Some("admin")),
                ("ADMIN_PASSWORD_HASH", None::<&str>),
            ],
            || {
                let err = AdminConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("ADMIN_PASSWORD_HASH"));
            },
        );
    }
}
