//! Wire contract with the Pastebin API.
//!
//! Field names, option tags and endpoint paths must match the service
//! exactly.

pub const DEV_KEY: &str = "api_dev_key";
pub const USER_KEY: &str = "api_user_key";
pub const USER_NAME: &str = "api_user_name";
pub const USER_PASSWORD: &str = "api_user_password";
pub const PASTE_CODE: &str = "api_paste_code";
pub const PASTE_NAME: &str = "api_paste_name";
pub const PASTE_FORMAT: &str = "api_paste_format";
pub const PASTE_PRIVATE: &str = "api_paste_private";
pub const PASTE_EXPIRE_DATE: &str = "api_paste_expire_date";
pub const PASTE_KEY: &str = "api_paste_key";
pub const RESULTS_LIMIT: &str = "api_results_limit";
pub const OPTION: &str = "api_option";

/// Value of the `api_option` field selecting the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOption {
    Paste,
    UserDetails,
    List,
    ShowPaste,
    Delete,
}

impl ApiOption {
    /// Wire value of the `api_option` field.
    pub fn as_str(self) -> &'static str {
        match self {
            ApiOption::Paste => "paste",
            ApiOption::UserDetails => "userdetails",
            ApiOption::List => "list",
            ApiOption::ShowPaste => "show_paste",
            ApiOption::Delete => "delete",
        }
    }
}

/// The four fixed service endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST`, exchanges account credentials for a user key.
    Login,
    /// `POST`, generic API selected by `api_option`.
    Post,
    /// `POST`, raw content of pastes owned by the user.
    RawPastes,
    /// `GET <path>/<paste key>`, raw content of public and unlisted pastes.
    Raw,
}

impl Endpoint {
    /// Path relative to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Login => "/api/api_login.php",
            Endpoint::Post => "/api/api_post.php",
            Endpoint::RawPastes => "/api/api_raw.php",
            Endpoint::Raw => "/raw",
        }
    }
}

/// Ordered form fields for one request.
///
/// Serializes as a sequence of pairs, which is what reqwest's
/// `RequestBuilder::form` URL-encodes into the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Form(Vec<(&'static str, String)>);

impl Form {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any earlier value.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Builder form of [`Form::set`].
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Value of a field, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a field is present, even with an empty value.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The `api_option` tag, if any.
    pub fn option(&self) -> Option<&str> {
        self.get(OPTION)
    }

    /// Merge another form in; its values win on conflicts.
    pub fn extend(&mut self, other: Form) {
        for (name, value) in other.0 {
            self.set(name, value);
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(n, _)| *n)
    }
}
