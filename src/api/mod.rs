//! User API subsystem.
//!
//! # Routes
//! ```text
//! GET    /                       plain-text help
//! GET    /users                  every record
//! POST   /users                  append a record, echo it back
//! GET    /users/{value}          partial-email search (JSON array)
//! GET    /users/{value}?exact=true  exact lookup (JSON object)
//! DELETE /users/{value}          remove by exact email, return the rest
//! ```
//!
//! # Design Decisions
//! - A bare GET on `/users/{value}` is always the partial search
//! - Exact lookup is selected by the `exact` query flag, never by path shape

pub mod error;
pub mod handlers;

use axum::{
    middleware,
    routing::{any, get},
    Router,
};

use self::handlers::*;
use crate::http::server::AppState;
use crate::observability::metrics::track_requests;

pub use error::ApiError;

pub fn setup_api_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(home))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{value}", get(lookup_user).delete(delete_user))
        .route_layer(middleware::from_fn(track_requests))
        .with_state(state)
}
