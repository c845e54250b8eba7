//! Account operations.
//!
//! This module provides the AccountClient for logging in and reading the
//! account settings.

use crate::client::Client;
use crate::error::Result;
use crate::form::{self, ApiOption, Endpoint};
use crate::types::AccountInfo;

/// Client for account operations.
///
/// Access via `client.account()`.
pub struct AccountClient {
    client: Client,
}

impl AccountClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Exchange a username and password for a user key.
    ///
    /// Only the developer key is needed; a configured user key is not sent.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use txtcrusher::{Client, Credentials};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new(Credentials::new("dev_key"))?;
    ///     let user_key = client.account().authenticate("wiz_kitty", "hunter2").await?;
    ///     println!("api_user_key: {}", user_key);
    ///     Ok(())
    /// }
    /// ```
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String> {
        let form = self
            .client
            .base_form(false)?
            .with(form::USER_NAME, username)
            .with(form::USER_PASSWORD, password);

        self.client.post_form(Endpoint::Login, &form).await
    }

    /// Account settings as the raw XML returned by the service.
    pub async fn info_raw(&self) -> Result<String> {
        let form = self.client.user_form(ApiOption::UserDetails)?;
        self.client.post_form(Endpoint::Post, &form).await
    }

    /// Account settings, decoded.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use txtcrusher::{Client, Credentials};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new(Credentials::new("dev_key").with_user_key("user_key"))?;
    ///     let info = client.account().info().await?;
    ///     println!("{} <{}>", info.username, info.email);
    ///     Ok(())
    /// }
    /// ```
    pub async fn info(&self) -> Result<AccountInfo> {
        let xml = self.info_raw().await?;
        AccountInfo::from_xml(&xml)
    }
}
