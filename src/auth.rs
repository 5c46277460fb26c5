//! HTTP Basic Authentication for the admin surface.
//!
//! Credentials live server-side in environment variables; nothing shipped to
//! a browser ever contains them.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, Response, StatusCode},
    middleware::Next,
};
use base64::Engine;
use std::sync::Arc;

/// Admin authentication configuration
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Username for admin routes (None = auth disabled)
    pub username: Option<String>,
    /// Password for admin routes
    pub password: Option<String>,
}

impl AdminConfig {
    /// Load from ADMIN_USERNAME and ADMIN_PASSWORD.
    /// Both must be set to enable auth.
    pub fn from_env() -> Self {
        let username = std::env::var("ADMIN_USERNAME")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let password = std::env::var("ADMIN_PASSWORD")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if username.is_some() && password.is_some() {
            tracing::info!("Admin authentication enabled");
            Self { username, password }
        } else {
            if username.is_some() || password.is_some() {
                tracing::warn!(
                    "ADMIN_USERNAME and ADMIN_PASSWORD must both be set to enable authentication"
                );
            }
            tracing::warn!("Admin authentication DISABLED - anyone can reach the admin routes!");
            Self {
                username: None,
                password: None,
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Validate credentials
    pub fn validate(&self, username: &str, password: &str) -> bool {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => {
                constant_time_eq(u.as_bytes(), username.as_bytes())
                    && constant_time_eq(p.as_bytes(), password.as_bytes())
            }
            _ => true, // Auth disabled, allow all
        }
    }
}

/// Constant-time byte comparison to prevent timing attacks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

/// Decode `username:password` from a Basic Authorization header, if present.
fn basic_credentials(request: &Request<Body>) -> Option<String> {
    let auth_header = request.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = auth_header.strip_prefix("Basic ")?;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .ok()?;
    String::from_utf8(decoded).ok()
}

/// Middleware guarding the /api/admin routes
pub async fn admin_auth_middleware(
    State(config): State<Arc<AdminConfig>>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    if !config.is_enabled() {
        return next.run(request).await;
    }

    if let Some(credentials) = basic_credentials(&request) {
        if let Some((username, password)) = credentials.split_once(':') {
            if config.validate(username, password) {
                return next.run(request).await;
            }
        }
    }

    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header(header::WWW_AUTHENTICATE, "Basic realm=\"SwipeParty Admin\"")
        .body(Body::from("Unauthorized"))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_disabled_when_incomplete() {
        let config = AdminConfig {
            username: None,
            password: None,
        };
        assert!(!config.is_enabled());
        assert!(config.validate("any", "thing")); // Passes when disabled

        let config = AdminConfig {
            username: Some("admin".to_string()),
            password: None,
        };
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_config_enabled() {
        let config = AdminConfig {
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
        };
        assert!(config.is_enabled());
        assert!(config.validate("admin", "secret"));
        assert!(!config.validate("admin", "wrong"));
        assert!(!config.validate("wrong", "secret"));
        assert!(!config.validate("", ""));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"hello", b"hell"));
        assert!(!constant_time_eq(b"", b"x"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_basic_credentials_decoding() {
        let encoded = base64::engine::general_purpose::STANDARD.encode("admin:secret");
        let request = Request::builder()
            .header(header::AUTHORIZATION, format!("Basic {}", encoded))
            .body(Body::empty())
            .unwrap();
        assert_eq!(basic_credentials(&request), Some("admin:secret".to_string()));

        let request = Request::builder()
            .header(header::AUTHORIZATION, "Bearer not-basic")
            .body(Body::empty())
            .unwrap();
        assert_eq!(basic_credentials(&request), None);

        let request = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(basic_credentials(&request), None);
    }

    #[test]
    #[serial]
    fn test_from_env_requires_both_vars() {
        std::env::remove_var("ADMIN_USERNAME");
        std::env::remove_var("ADMIN_PASSWORD");
        assert!(!AdminConfig::from_env().is_enabled());

        std::env::set_var("ADMIN_USERNAME", "admin");
        assert!(!AdminConfig::from_env().is_enabled());

        std::env::set_var("ADMIN_PASSWORD", "hunter2");
        assert!(AdminConfig::from_env().is_enabled());

        std::env::remove_var("ADMIN_USERNAME");
        std::env::remove_var("ADMIN_PASSWORD");
    }
}
