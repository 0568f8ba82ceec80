//! Acting user for mutations.
//!
//! The stub performs no authentication. A bearer token naming a known user id
//! attributes approvals to that user; anything else falls back to a generic
//! reviewer so the dashboard works without a token.

#[cfg(test)]
#[path = "actor_test.rs"]
mod actor_test;

use std::convert::Infallible;

use axum::extract::FromRef;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use models::Approver;

use crate::services::users;
use crate::state::AppState;

pub const FALLBACK_ID: &str = "reviewer";
pub const FALLBACK_NAME: &str = "Dashboard reviewer";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor(pub Approver);

fn bearer(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

impl<S> axum::extract::FromRequestParts<S> for Actor
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let known = match bearer(parts) {
            Some(token) => users::approver_for(&*app_state.store.read().await, token),
            None => None,
        };
        Ok(Self(known.unwrap_or_else(|| Approver {
            id: FALLBACK_ID.to_owned(),
            name: FALLBACK_NAME.to_owned(),
        })))
    }
}
