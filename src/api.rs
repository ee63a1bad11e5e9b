//! Client for the listing API.
//!
//! Controllers talk to [`PlacesApi`]; [`HttpApi`] is the browser implementation.
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use leptos::logging::{error, log, warn};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AuthError, FetchError, SubmitError};
use crate::models::place::{Place, PlaceId};
use crate::models::review::ReviewDraft;
use crate::models::session::SessionToken;

const LOGIN_ENDPOINT: &str = "login";
const PLACES_ENDPOINT: &str = "places";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Serialize, Debug)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Error payload the API sends with non-2xx responses.
#[derive(Deserialize, Debug, Default)]
pub struct ApiMessage {
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

// Browser futures aren't Send, hence ?Send.
#[async_trait(?Send)]
pub trait PlacesApi {
    async fn login(&self, email: &str, password: &str) -> Result<SessionToken, AuthError>;

    async fn list_places(&self, token: &SessionToken) -> Result<Vec<Place>, FetchError>;

    async fn get_place_details(
        &self,
        token: &SessionToken,
        place_id: &PlaceId,
    ) -> Result<Place, FetchError>;

    async fn submit_review(
        &self,
        token: &SessionToken,
        place_id: &PlaceId,
        draft: &ReviewDraft,
    ) -> Result<(), SubmitError>;
}

#[derive(Debug, Clone)]
pub struct HttpApi {
    config: Config,
}

impl HttpApi {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn login_url(&self) -> String {
        self.config.endpoint(LOGIN_ENDPOINT)
    }

    pub fn places_url(&self) -> String {
        self.config.endpoint(PLACES_ENDPOINT)
    }

    pub fn place_url(&self, place_id: &PlaceId) -> String {
        format!(
            "{}/{}",
            self.places_url(),
            urlencoding::encode(place_id.as_str())
        )
    }

    pub fn reviews_url(&self, place_id: &PlaceId) -> String {
        format!("{}/reviews", self.place_url(place_id))
    }
}

#[async_trait(?Send)]
impl PlacesApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> Result<SessionToken, AuthError> {
        let url = self.login_url();
        log!("[API] POST {}", url);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&LoginRequest { email, password })
            .map_err(|e| AuthError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                error!("[API] Login request failed: {}", e);
                AuthError::Transport(e.to_string())
            })?;

        if !response.ok() {
            let message = read_rejection(response).await;
            warn!("[API] Login rejected: {}", message);
            return Err(AuthError::Rejected { message });
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        Ok(SessionToken::new(body.access_token))
    }

    async fn list_places(&self, token: &SessionToken) -> Result<Vec<Place>, FetchError> {
        let url = self.places_url();
        log!("[API] GET {}", url);

        let response = send_authorized_get(&url, token).await?;
        let places: Vec<Place> = response.json().await.map_err(decode_failure)?;

        log!("[API] Received {} places", places.len());
        Ok(places)
    }

    async fn get_place_details(
        &self,
        token: &SessionToken,
        place_id: &PlaceId,
    ) -> Result<Place, FetchError> {
        let url = self.place_url(place_id);
        log!("[API] GET {}", url);

        let response = send_authorized_get(&url, token).await?;
        response.json().await.map_err(decode_failure)
    }

    async fn submit_review(
        &self,
        token: &SessionToken,
        place_id: &PlaceId,
        draft: &ReviewDraft,
    ) -> Result<(), SubmitError> {
        let url = self.reviews_url(place_id);
        log!("[API] POST {} (rating {})", url, draft.rating());

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .header(AUTHORIZATION_HEADER, &token.bearer())
            .json(draft)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                error!("[API] Review request failed: {}", e);
                SubmitError::Transport(e.to_string())
            })?;

        if !response.ok() {
            let message = read_rejection(response).await;
            warn!("[API] Review rejected: {}", message);
            return Err(SubmitError::Rejected { message });
        }
        Ok(())
    }
}

async fn send_authorized_get(url: &str, token: &SessionToken) -> Result<Response, FetchError> {
    let response = Request::get(url)
        .header(AUTHORIZATION_HEADER, &token.bearer())
        .send()
        .await
        .map_err(|e| {
            error!("[API] GET {} failed: {}", url, e);
            FetchError::Transport(e.to_string())
        })?;

    if let Err(err) = check_fetch_status(response.status()) {
        error!("[API] GET {} returned HTTP {}", url, response.status());
        return Err(err);
    }
    Ok(response)
}

/// Only 2xx responses count as a successful read.
pub fn check_fetch_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status {
            status_code: status,
        })
    }
}

/// A 2xx body that isn't the expected JSON.
pub fn decode_failure(err: gloo_net::Error) -> FetchError {
    error!("[API] Could not decode response: {}", err);
    FetchError::Decode(err.to_string())
}

async fn read_rejection(response: Response) -> String {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.json::<ApiMessage>().await.ok();
    rejection_message(body, status, &status_text)
}

/// The API's own message if it sent one, else the status line.
pub fn rejection_message(body: Option<ApiMessage>, status: u16, status_text: &str) -> String {
    body.and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .or_else(|| Some(status_text.trim().to_string()).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| format!("HTTP {}", status))
}
