use std::fmt;

use serde::Deserialize;

use crate::models::participant::RegistrationRequest;

/// Event option as the selector needs it: id plus display title. Extra
/// fields in the response are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventOption {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error),
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// The string shown to the user: the server's `message` when it sent
    /// one, otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message: Some(m), .. } => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {e}"),
            ApiError::Server { status, message } => match message {
                Some(m) => write!(f, "Server error {status}: {m}"),
                None => write!(f, "Server error {status}"),
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_events(&self) -> Result<Vec<EventOption>, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/events", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }
        Ok(response.json::<Vec<EventOption>>().await?)
    }

    pub async fn register_participant(
        &self,
        payload: &RegistrationRequest,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(format!("{}/api/participants/register", self.base_url))
            .json(payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }
        Ok(())
    }

    async fn server_error(response: reqwest::Response) -> ApiError {
        #[derive(Deserialize)]
        struct Body {
            message: String,
        }
        let status = response.status().as_u16();
        let message = response.json::<Body>().await.ok().map(|b| b.message);
        ApiError::Server { status, message }
    }
}
