//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with every API handler
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Serve on a bound listener until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api::setup_api_router;
use crate::config::{ApiConfig, ServiceConfig};
use crate::http::request::{request_id, UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::{signals::shutdown_signal, startup::initial_store};
use crate::store::UserStore;

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub api: ApiConfig,
}

/// HTTP server for the user directory.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    store: Arc<UserStore>,
}

impl HttpServer {
    /// Create a new HTTP server, seeding the store according to `config`.
    pub fn new(config: ServiceConfig) -> Self {
        let store = initial_store(&config.api);
        Self::with_store(config, store)
    }

    /// Create a server around an existing store.
    pub fn with_store(config: ServiceConfig, store: Arc<UserStore>) -> Self {
        let state = AppState {
            store: store.clone(),
            api: config.api.clone(),
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            store,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = request_id(request).unwrap_or("unknown")
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            // Body limit wraps the timeout: the timeout layer needs a `Default` inner body.
            .layer(RequestBodyLimitLayer::new(config.api.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )));

        setup_api_router(state).layer(middleware)
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once Ctrl+C is received or `shutdown` fires and in-flight
    /// requests have drained.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            records = self.store.len(),
            strict_mode = self.config.api.strict_mode,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The store backing this server.
    pub fn store(&self) -> Arc<UserStore> {
        self.store.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_response_carries_request_id() {
        let server = HttpServer::new(ServiceConfig::default());

        let response = server
            .router()
            .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_client_request_id_is_echoed() {
        let server = HttpServer::new(ServiceConfig::default());

        let response = server
            .router()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("x-request-id", "trace-me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-me");
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let mut config = ServiceConfig::default();
        config.api.max_body_size = 16;
        let server = HttpServer::new(config);

        let body = r#"{"email":"someone-with-a-long-address@example.com"}"#;
        let response = server
            .router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .header("content-type", "application/json")
                    .header("content-length", body.len())
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(server.store().len(), 5);
    }
}
