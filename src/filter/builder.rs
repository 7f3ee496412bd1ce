//! Filter string decomposition.
//!
//! # Responsibilities
//! - Split a partial email at the first `@` and the first following `.`
//! - Keep wildcard defaults for every segment the caller left blank
//! - Treat a bare word (no `@`, no `.`) as a domain-name search

use crate::filter::rule::{Fragment, MatchRule};

/// Build a [`MatchRule`] from a raw partial-email filter. Never fails.
pub fn build_rule(filter: &str) -> MatchRule {
    let mut rule = MatchRule::default();

    // 1. Local part
    let remainder = match filter.split_once('@') {
        Some((local, rest)) => {
            if !local.trim().is_empty() {
                rule.local = Fragment::literal(local);
            }
            rest
        }
        None => filter,
    };

    // 2. Domain name and suffix
    match remainder.split_once('.') {
        Some((name, suffix)) => {
            if !name.trim().is_empty() {
                rule.domain_name = Fragment::literal(name);
            }
            if !suffix.trim().is_empty() {
                rule.domain_suffix = Fragment::literal(suffix);
            }
        }
        None if !remainder.is_empty() => {
            rule.domain_name = Fragment::literal(remainder);
        }
        None => {}
    }

    rule
}
