//! # Payment Groups Client SDK
//!
//! A typed Rust client for the Payment Groups API.

use payment_groups_types::{
    CreatePaymentGroupRequest, PaymentGroup, PaymentGroupId, UpdatePaymentGroupRequest,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Payment Groups API client.
pub struct PaymentGroupsClient {
    base_url: String,
    http: Client,
}

impl PaymentGroupsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists all payment groups.
    pub async fn list_groups(&self) -> Result<Vec<PaymentGroup>, ClientError> {
        let resp = self.http.get(self.groups_url()).send().await?;
        Self::handle_response(resp).await
    }

    /// Gets a payment group by ID. `None` when the server reports 404.
    pub async fn get_group(&self, id: PaymentGroupId) -> Result<Option<PaymentGroup>, ClientError> {
        let resp = self.http.get(self.group_url(id)).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::handle_response(resp).await.map(Some)
    }

    /// Creates a payment group.
    pub async fn create_group(
        &self,
        req: &CreatePaymentGroupRequest,
    ) -> Result<PaymentGroup, ClientError> {
        let resp = self.http.post(self.groups_url()).json(req).send().await?;
        Self::handle_response(resp).await
    }

    /// Updates a payment group. `None` when the server reports 404.
    pub async fn update_group(
        &self,
        id: PaymentGroupId,
        req: &UpdatePaymentGroupRequest,
    ) -> Result<Option<PaymentGroup>, ClientError> {
        let resp = self.http.put(self.group_url(id)).json(req).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::handle_response(resp).await.map(Some)
    }

    /// Removes a payment group; returns whether it existed.
    pub async fn remove_group(&self, id: PaymentGroupId) -> Result<bool, ClientError> {
        let resp = self.http.delete(self.group_url(id)).send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            _ => Err(Self::api_error(resp).await),
        }
    }

    fn groups_url(&self) -> String {
        format!("{}/api/payment-groups", self.base_url)
    }

    fn group_url(&self, id: PaymentGroupId) -> String {
        format!("{}/api/payment-groups/{}", self.base_url, id)
    }

    async fn handle_response<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        if resp.status().is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(Self::api_error(resp).await)
        }
    }

    async fn api_error(resp: reqwest::Response) -> ClientError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        ClientError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        }
    }
}

/// Pulls the `error` field out of a JSON error body, falling back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}
