//! In-memory user directory service library.

pub mod api;
pub mod config;
pub mod filter;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::schema::ServiceConfig;
pub use filter::{build_rule, MatchRule};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{User, UserStore};
