//! Partial email search subsystem.
//!
//! # Data Flow
//! ```text
//! Raw filter from the path segment ("jane@gmail", "@.com", "gmail")
//!     → builder.rs (split into local / domain-name / suffix fragments)
//!     → rule.rs (MatchRule: local @ domain-name . suffix)
//!     → MatchRule::matches(email) for every stored record
//! ```
//!
//! # Design Decisions
//! - Fragments the caller leaves out fall back to wildcards, never to an empty match
//! - Caller text is compared literally; only wildcards carry character classes
//! - Matching is unanchored: a rule matches if it occurs anywhere in the email

pub mod builder;
pub mod rule;

pub use builder::build_rule;
pub use rule::{CharClass, Fragment, MatchRule};
