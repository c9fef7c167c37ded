use crate::server::{config::ServerConfig, session::SessionStore};
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use std::sync::Arc;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: ServerConfig, sessions: Arc<SessionStore>) -> Self {
        Self {
            config: Arc::new(config),
            sessions,
        }
    }
}

// Lets `SignedCookieJar` find the signing key.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.config.session_key.clone()
    }
}
