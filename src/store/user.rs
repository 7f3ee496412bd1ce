//! User record.

use serde::{Deserialize, Serialize};

/// A user record as stored and served over the API.
///
/// `Default` is the empty-valued record returned when an exact lookup misses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct User {
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            phone: phone.into(),
            password: password.into(),
        }
    }
}
