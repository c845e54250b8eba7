//! Paste operations.
//!
//! This module provides the PastesClient for creating, listing, fetching
//! and deleting pastes.

use crate::client::Client;
use crate::error::{PastebinError, Result};
use crate::form::{self, ApiOption, Endpoint};
use crate::types::{CreatePasteRequest, ResultLimit};

/// Client for paste operations.
///
/// Access via `client.pastes()`.
pub struct PastesClient {
    client: Client,
}

impl PastesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a paste and return its URL.
    ///
    /// The user key is only sent when `request.guest` is false.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use txtcrusher::{Client, Credentials, CreatePasteRequest, Expiration, Visibility};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new(Credentials::new("dev_key").with_user_key("user_key"))?;
    ///
    ///     let url = client.pastes().create(&CreatePasteRequest {
    ///         content: "fn main() {}".to_string(),
    ///         title: Some("snippet".to_string()),
    ///         format: Some("rust".to_string()),
    ///         expiration: Expiration::OneDay,
    ///         visibility: Visibility::Unlisted,
    ///         ..Default::default()
    ///     }).await?;
    ///
    ///     println!("{}", url);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, request: &CreatePasteRequest) -> Result<String> {
        let mut form = self.client.base_form(!request.guest)?;
        form.extend(request.form_fields());
        form.set(form::OPTION, ApiOption::Paste.as_str());

        self.client.post_form(Endpoint::Post, &form).await
    }

    /// List the user's pastes, returned as the service's raw listing text.
    ///
    /// `limit` of `0` asks for the default of 50; other values must be in
    /// `[1, 1000]` and are rejected before anything is sent.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use txtcrusher::{Client, Credentials};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new(Credentials::new("dev_key").with_user_key("user_key"))?;
    ///     println!("{}", client.pastes().list(10).await?);
    ///     Ok(())
    /// }
    /// ```
    pub async fn list(&self, limit: i64) -> Result<String> {
        let limit = ResultLimit::new(limit)?;

        let form = self
            .client
            .user_form(ApiOption::List)?
            .with(form::RESULTS_LIMIT, limit.get().to_string());

        self.client.post_form(Endpoint::Post, &form).await
    }

    /// Get the raw text of a paste owned by the user, private ones included.
    pub async fn get_own(&self, paste_key: &str) -> Result<String> {
        validate_paste_key(paste_key)?;

        let form = self
            .client
            .user_form(ApiOption::ShowPaste)?
            .with(form::PASTE_KEY, paste_key);

        self.client.post_form(Endpoint::RawPastes, &form).await
    }

    /// Delete a paste owned by the user. Returns the service's confirmation
    /// text.
    ///
    /// **Warning:** a failed call may still have deleted the paste
    /// server-side; check before retrying.
    pub async fn delete(&self, paste_key: &str) -> Result<String> {
        validate_paste_key(paste_key)?;

        let form = self
            .client
            .user_form(ApiOption::Delete)?
            .with(form::PASTE_KEY, paste_key);

        self.client.post_form(Endpoint::Post, &form).await
    }

    /// Get the raw text of a public or unlisted paste.
    ///
    /// Needs no keys at all.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use txtcrusher::{Client, Credentials};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new(Credentials::anonymous())?;
    ///     println!("{}", client.pastes().get_public("0b42rwhf").await?);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_public(&self, paste_key: &str) -> Result<String> {
        validate_paste_key(paste_key)?;

        let url = format!("{}/{}", self.client.url(Endpoint::Raw), paste_key);
        self.client.get(&url).await
    }
}

fn validate_paste_key(paste_key: &str) -> Result<()> {
    if paste_key.trim().is_empty() {
        return Err(PastebinError::InvalidRequest(
            "paste key must not be empty".to_string(),
        ));
    }
    if paste_key.contains('/') {
        return Err(PastebinError::InvalidRequest(format!(
            "invalid paste key '{}'",
            paste_key
        )));
    }
    Ok(())
}
