//! Shared helpers for HTTP scenario tests: a throwaway in-process API server
//! and canned session/client constructors.

use std::sync::{Arc, Mutex};

use axum::Router;

use crate::config::ApiConfig;
use crate::guards::{Navigator, Route};
use crate::net::ApiClient;
use crate::session::SessionContext;

/// Bind `router` on an ephemeral local port and serve it in the background.
/// Returns the base URL. The server lives for the rest of the test process;
/// each test spawns its own.
pub async fn spawn_api(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    format!("http://{addr}")
}

/// In-memory session with no stored token.
pub fn empty_session() -> Arc<SessionContext> {
    Arc::new(SessionContext::in_memory())
}

/// In-memory session pre-seeded with `token`.
pub fn session_with_token(token: &str) -> Arc<SessionContext> {
    let session = SessionContext::in_memory();
    session.store_token(token).expect("seed token");
    Arc::new(session)
}

/// `ApiClient` against `base_url` using the given session.
pub fn client_for(base_url: &str, session: Arc<SessionContext>) -> ApiClient {
    ApiClient::new(&ApiConfig::with_base_url(base_url), session).expect("build api client")
}

/// Navigator that records every redirect for later assertion.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn recorded(&self) -> Vec<Route> {
        self.routes.lock().expect("navigator lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().expect("navigator lock").push(route);
    }
}
