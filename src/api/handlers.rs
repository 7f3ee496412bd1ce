//! HTTP handlers for the user API.
//!
//! Soft failures are the default: a malformed create body stores an empty
//! record, and lookup or delete misses answer 200. `api.strict_mode` turns
//! them into [`ApiError`] responses.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de, Deserialize, Deserializer};

use crate::api::error::ApiError;
use crate::filter::build_rule;
use crate::http::server::AppState;
use crate::store::User;

pub const HELP_TEXT: &str = "\
-------------------------------- Home Page --------------------------------
Endpoints:
/users                          *GET - returns all users / POST - creates a new user (use raw json for the body)*
/users/{partial email}          *GET - returns all users that match the partial email*
/users/{email}?exact=true       *GET - returns user by email*
/users/{email}                  *DELETE - deletes a user by email*
";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LookupParams {
    #[serde(deserialize_with = "query_flag")]
    pub exact: bool,
}

/// Accepts `?exact`, `?exact=1`, `?exact=true` and their `0` / `false` opposites.
fn query_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.as_str() {
        "" | "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"one of: true, false, 1, 0, or no value",
        )),
    }
}

/// Decode the first JSON value in `body` as a [`User`].
///
/// Anything after the first value is ignored.
pub fn decode_user(body: &[u8]) -> Result<User, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<User>();
    match values.next() {
        Some(decoded) => Ok(decoded?),
        None => Err(ApiError::EmptyBody),
    }
}

pub async fn home() -> &'static str {
    HELP_TEXT
}

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.all())
}

pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let user = match decode_user(&body) {
        Ok(user) => user,
        Err(err) if state.api.strict_mode => {
            tracing::warn!(error = %err, "Rejected malformed user body");
            return Err(err);
        }
        Err(err) => {
            tracing::warn!(error = %err, "Malformed user body, storing empty record");
            User::default()
        }
    };

    state.store.append(user.clone());
    tracing::info!(email = %user.email, "User created");
    Ok(Json(user))
}

pub async fn lookup_user(
    State(state): State<AppState>,
    Path(value): Path<String>,
    Query(params): Query<LookupParams>,
) -> Result<Response, ApiError> {
    if params.exact {
        return match state.store.find_by_email(&value) {
            Some(user) => Ok(Json(user).into_response()),
            None if state.api.strict_mode => Err(ApiError::NotFound(value)),
            None => {
                tracing::debug!(email = %value, "No exact match, returning empty record");
                Ok(Json(User::default()).into_response())
            }
        };
    }

    let rule = build_rule(&value);
    let matches = state.store.filter_by_rule(&rule);
    tracing::debug!(
        filter = %value,
        rule = %rule,
        matches = matches.len(),
        "Partial email search"
    );
    Ok(Json(matches).into_response())
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<User>>, ApiError> {
    let (removed, remaining) = state.store.remove_by_email(&email);
    if removed {
        tracing::info!(email = %email, "User deleted");
    } else if state.api.strict_mode {
        return Err(ApiError::NotFound(email));
    } else {
        tracing::debug!(email = %email, "Delete of unknown email ignored");
    }
    Ok(Json(remaining))
}
