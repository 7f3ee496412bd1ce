//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and store produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters, latency histogram, store size gauge)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured log level
//! - Metric updates are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
