//! REST API helpers for the club backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! `ApiError::Unavailable`, since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses keep the
//! backend's `{"message": ...}` so views can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    Credentials, EventDetail, EventSummary, NewEvent, RegisteredEvent, SessionUser, SignupRequest,
};
use crate::config::ApiConfig;
use crate::state::feed::{Cursor, PageSource};

#[cfg(feature = "hydrate")]
use super::types::{EventPage, ImagesPatch, LoginResponse, RegistrationRequest};

/// Which registration mutation to send for an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationAction {
    Register,
    Unregister,
}

impl RegistrationAction {
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Unregister => "unregister",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Register => "Registered successfully",
            Self::Unregister => "Unregistered successfully",
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn events_page_url(cfg: &ApiConfig, cursor: Cursor) -> String {
    format!("{}/api/event?page={cursor}", cfg.api_base_url)
}

#[cfg(any(test, feature = "hydrate"))]
fn events_url(cfg: &ApiConfig) -> String {
    format!("{}/api/event", cfg.api_base_url)
}

#[cfg(any(test, feature = "hydrate"))]
fn event_url(cfg: &ApiConfig, event_id: &str) -> String {
    format!("{}/api/event/{event_id}", cfg.api_base_url)
}

#[cfg(any(test, feature = "hydrate"))]
fn registration_url(cfg: &ApiConfig, event_id: &str, action: RegistrationAction) -> String {
    format!("{}/api/event/{event_id}/{}", cfg.api_base_url, action.path_segment())
}

#[cfg(any(test, feature = "hydrate"))]
fn event_images_url(cfg: &ApiConfig, event_id: &str) -> String {
    format!("{}/api/event/{event_id}/images", cfg.api_base_url)
}

#[cfg(any(test, feature = "hydrate"))]
fn registered_events_url(cfg: &ApiConfig, user_id: &str) -> String {
    format!("{}/api/event/{user_id}/myregisteredevents", cfg.api_base_url)
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_url(cfg: &ApiConfig, action: &str) -> String {
    format!("{}/api/auth/{action}", cfg.api_base_url)
}

#[cfg(feature = "hydrate")]
pub(crate) mod http {
    //! Response handling shared by every call.

    use gloo_net::http::Response;
    use serde::de::DeserializeOwned;

    use crate::net::error::ApiError;

    pub(crate) fn network(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    async fn status_error(resp: Response) -> ApiError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        ApiError::from_status(status, &body)
    }

    pub(crate) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn expect_ok(resp: Response) -> Result<(), ApiError> {
        if resp.ok() { Ok(()) } else { Err(status_error(resp).await) }
    }
}

/// Fetch one page of the event feed via `GET /api/event?page=N`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-OK status, or a body that
/// does not parse.
pub async fn fetch_events_page(cfg: &ApiConfig, cursor: Cursor) -> Result<Vec<EventSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&events_page_url(cfg, cursor))
            .send()
            .await
            .map_err(http::network)?;
        let page: EventPage = http::read_json(resp).await?;
        Ok(page.events)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, cursor);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single event via `GET /api/event/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-OK status, or a bad body.
pub async fn fetch_event(cfg: &ApiConfig, event_id: &str) -> Result<EventDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&event_url(cfg, event_id))
            .send()
            .await
            .map_err(http::network)?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, event_id);
        Err(ApiError::Unavailable)
    }
}

/// Create an event via `POST /api/event`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the server rejects it.
pub async fn create_event(cfg: &ApiConfig, event: &NewEvent) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&events_url(cfg))
            .credentials(web_sys::RequestCredentials::Include)
            .json(event)
            .map_err(http::network)?
            .send()
            .await
            .map_err(http::network)?;
        http::expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, event);
        Err(ApiError::Unavailable)
    }
}

/// Delete an event via `DELETE /api/event/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the server rejects it.
pub async fn delete_event(cfg: &ApiConfig, event_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&event_url(cfg, event_id))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(http::network)?;
        http::expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, event_id);
        Err(ApiError::Unavailable)
    }
}

/// Join or leave an event via `POST /api/event/{id}/register|unregister`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the server rejects it.
pub async fn set_registration(
    cfg: &ApiConfig,
    event_id: &str,
    user_id: &str,
    action: RegistrationAction,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = RegistrationRequest { user_id: user_id.to_owned() };
        let resp = gloo_net::http::Request::post(&registration_url(cfg, event_id, action))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&body)
            .map_err(http::network)?
            .send()
            .await
            .map_err(http::network)?;
        http::expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, event_id, user_id, action);
        Err(ApiError::Unavailable)
    }
}

/// Append uploaded gallery image URLs via `PATCH /api/event/{id}/images`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the server rejects it.
pub async fn attach_event_images(cfg: &ApiConfig, event_id: &str, urls: Vec<String>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ImagesPatch { images: urls };
        let resp = gloo_net::http::Request::patch(&event_images_url(cfg, event_id))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&body)
            .map_err(http::network)?
            .send()
            .await
            .map_err(http::network)?;
        http::expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, event_id, urls);
        Err(ApiError::Unavailable)
    }
}

/// Events the user has registered for, via `GET /api/event/{userId}/myregisteredevents`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-OK status, or a bad body.
pub async fn fetch_registered_events(cfg: &ApiConfig, user_id: &str) -> Result<Vec<RegisteredEvent>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&registered_events_url(cfg, user_id))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(http::network)?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, user_id);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the server rejects it.
pub async fn register_user(cfg: &ApiConfig, request: &SignupRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&auth_url(cfg, "register"))
            .json(request)
            .map_err(http::network)?
            .send()
            .await
            .map_err(http::network)?;
        http::expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, request);
        Err(ApiError::Unavailable)
    }
}

/// Log in via `POST /api/auth/login`; the backend sets its session cookie.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, credentials are rejected, or
/// the response does not describe a user.
pub async fn login(cfg: &ApiConfig, credentials: &Credentials) -> Result<SessionUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&auth_url(cfg, "login"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(credentials)
            .map_err(http::network)?
            .send()
            .await
            .map_err(http::network)?;
        let body: LoginResponse = http::read_json(resp).await?;
        Ok(body.into_user())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Event feed pages from the backend.
#[derive(Clone, Debug)]
pub struct EventFeedSource {
    pub config: ApiConfig,
}

impl PageSource<EventSummary> for EventFeedSource {
    fn fetch_page(&self, cursor: Cursor) -> impl Future<Output = Result<Vec<EventSummary>, ApiError>> {
        fetch_events_page(&self.config, cursor)
    }
}
