//! Pastebin API client.
//!
//! The main entry point for talking to the Pastebin API.

use crate::account::AccountClient;
use crate::error::{PastebinError, Result};
use crate::form::{self, ApiOption, Endpoint, Form};
use crate::pastes::PastesClient;
use reqwest::{header, Client as HttpClient};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://pastebin.com";

/// Prefix of every error message the service returns.
pub(crate) const BAD_REQUEST_PREFIX: &str = "Bad API request";

/// Developer and user keys.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    developer_key: String,
    user_key: Option<String>,
}

impl Credentials {
    /// Credentials with a developer key only; enough for guest pastes and
    /// logging in.
    pub fn new(developer_key: impl Into<String>) -> Self {
        Self {
            developer_key: developer_key.into(),
            user_key: None,
        }
    }

    /// Attach a user key. An empty key counts as not configured.
    pub fn with_user_key(mut self, user_key: impl Into<String>) -> Self {
        let user_key = user_key.into();
        self.user_key = (!user_key.is_empty()).then_some(user_key);
        self
    }

    /// No keys at all. Only public pastes can be fetched.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The developer key, or `None` when empty.
    pub fn developer_key(&self) -> Option<&str> {
        (!self.developer_key.is_empty()).then_some(self.developer_key.as_str())
    }

    /// The user key, if one was configured.
    pub fn user_key(&self) -> Option<&str> {
        self.user_key.as_deref()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("developer_key", &self.developer_key().map(|_| "<redacted>"))
            .field("user_key", &self.user_key().map(|_| "<redacted>"))
            .finish()
    }
}

/// Pastebin API client.
///
/// # Example
///
/// ```rust,no_run
/// use txtcrusher::{Client, Credentials, CreatePasteRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new(Credentials::new("dev_key").with_user_key("user_key"))?;
///
///     let url = client.pastes().create(&CreatePasteRequest::new("hello")).await?;
///     println!("Created {}", url);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL for the service (default: https://pastebin.com).
    pub base_url: Option<String>,
    /// Request timeout (default: none, the transport decides).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl Client {
    /// Create a new client with default configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use txtcrusher::{Client, Credentials};
    ///
    /// let client = Client::new(Credentials::new("dev_key")).unwrap();
    /// ```
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use txtcrusher::{Client, ClientConfig, Credentials};
    /// use std::time::Duration;
    ///
    /// let client = Client::with_config(Credentials::new("dev_key"), ClientConfig {
    ///     base_url: Some("http://localhost:8080".to_string()),
    ///     timeout: Some(Duration::from_secs(10)),
    ///     user_agent: Some("my-app/1.0".to_string()),
    /// }).unwrap();
    /// ```
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("txtcrusher-rust/{}", env!("CARGO_PKG_VERSION")));

        let mut builder = HttpClient::builder().user_agent(user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Get the base URL for the service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the credentials this client sends.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Get the pastes client for creating, listing, fetching and deleting pastes.
    pub fn pastes(&self) -> PastesClient {
        PastesClient::new(self.clone())
    }

    /// Get the account client for logging in and account details.
    pub fn account(&self) -> AccountClient {
        AccountClient::new(self.clone())
    }

    pub(crate) fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Base form for an operation: developer key, and the user key when
    /// `with_user_key` is set.
    pub(crate) fn base_form(&self, with_user_key: bool) -> Result<Form> {
        let developer_key = self
            .credentials
            .developer_key()
            .ok_or(PastebinError::MissingCredential("developer key"))?;
        let mut form = Form::new().with(form::DEV_KEY, developer_key);

        if with_user_key {
            let user_key = self
                .credentials
                .user_key()
                .ok_or(PastebinError::MissingCredential("user key"))?;
            form.set(form::USER_KEY, user_key);
        }

        Ok(form)
    }

    /// Form for an account-scoped operation selected by `option`.
    pub(crate) fn user_form(&self, option: ApiOption) -> Result<Form> {
        Ok(self
            .base_form(true)?
            .with(form::OPTION, option.as_str()))
    }

    /// POST a URL-encoded form and classify the response.
    pub(crate) async fn post_form(&self, endpoint: Endpoint, form: &Form) -> Result<String> {
        let url = self.url(endpoint);
        tracing::debug!(
            endpoint = endpoint.path(),
            option = form.option().unwrap_or("-"),
            fields = form.len(),
            "sending form request"
        );

        let response = self
            .http
            .post(&url)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .form(form)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Plain GET, no credentials.
    pub(crate) async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "sending get request");

        let response = self.http.get(url).send().await?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response received");

        classify(body)
    }
}

/// Service errors come back with a body starting with `Bad API request`.
/// The status code plays no part; any other body is the result as-is.
pub(crate) fn classify(body: String) -> Result<String> {
    if body.starts_with(BAD_REQUEST_PREFIX) {
        tracing::debug!(reply = %body, "service rejected request");
        return Err(PastebinError::Api(body));
    }

    Ok(body)
}
