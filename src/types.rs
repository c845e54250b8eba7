//! Type definitions for the txtcrusher client.
//!
//! This module contains the request and response types used by the client,
//! including the decoder for the account-info XML payload.

use crate::error::{PastebinError, Result};
use crate::form::{self, Form};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Highlight format used when none is given.
pub const DEFAULT_FORMAT: &str = "text";

/// Who can see a paste.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Unlisted,
    Private,
}

impl Visibility {
    /// Integer code sent as `api_paste_private`.
    pub fn code(self) -> u8 {
        match self {
            Visibility::Public => 0,
            Visibility::Unlisted => 1,
            Visibility::Private => 2,
        }
    }
}

impl TryFrom<u8> for Visibility {
    type Error = PastebinError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Visibility::Public),
            1 => Ok(Visibility::Unlisted),
            2 => Ok(Visibility::Private),
            other => Err(PastebinError::InvalidRequest(format!(
                "visibility code must be 0, 1 or 2, got {}",
                other
            ))),
        }
    }
}

impl FromStr for Visibility {
    type Err = PastebinError;

    /// Accepts `public`, `unlisted`, `private` or their codes `0`, `1`, `2`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" | "0" => Ok(Visibility::Public),
            "unlisted" | "1" => Ok(Visibility::Unlisted),
            "private" | "2" => Ok(Visibility::Private),
            other => Err(PastebinError::InvalidRequest(format!(
                "unknown visibility '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Visibility::Public => "public",
            Visibility::Unlisted => "unlisted",
            Visibility::Private => "private",
        };
        f.write_str(name)
    }
}

/// When a paste expires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Expiration {
    #[default]
    Never,
    TenMinutes,
    OneHour,
    OneDay,
    OneWeek,
    TwoWeeks,
    OneMonth,
    SixMonths,
    OneYear,
}

impl Expiration {
    pub const ALL: [Expiration; 9] = [
        Expiration::Never,
        Expiration::TenMinutes,
        Expiration::OneHour,
        Expiration::OneDay,
        Expiration::OneWeek,
        Expiration::TwoWeeks,
        Expiration::OneMonth,
        Expiration::SixMonths,
        Expiration::OneYear,
    ];

    /// Token sent as `api_paste_expire_date`.
    pub fn token(self) -> &'static str {
        match self {
            Expiration::Never => "N",
            Expiration::TenMinutes => "10M",
            Expiration::OneHour => "1H",
            Expiration::OneDay => "1D",
            Expiration::OneWeek => "1W",
            Expiration::TwoWeeks => "2W",
            Expiration::OneMonth => "1M",
            Expiration::SixMonths => "6M",
            Expiration::OneYear => "1Y",
        }
    }

    fn long_name(self) -> &'static str {
        match self {
            Expiration::Never => "never",
            Expiration::TenMinutes => "10min",
            Expiration::OneHour => "1hour",
            Expiration::OneDay => "1day",
            Expiration::OneWeek => "1week",
            Expiration::TwoWeeks => "2weeks",
            Expiration::OneMonth => "1month",
            Expiration::SixMonths => "6months",
            Expiration::OneYear => "1year",
        }
    }
}

impl FromStr for Expiration {
    type Err = PastebinError;

    /// Accepts the wire tokens (`N`, `10M`, `1H`, ...) in any case, or the
    /// long names (`never`, `10min`, `1hour`, ...).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Expiration::ALL
            .into_iter()
            .find(|e| e.token().eq_ignore_ascii_case(s) || e.long_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                PastebinError::InvalidRequest(format!(
                    "unknown expiration '{}', expected one of N, 10M, 1H, 1D, 1W, 2W, 1M, 6M, 1Y",
                    s
                ))
            })
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Number of pastes returned by a listing, in `[1, 1000]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLimit(u16);

impl ResultLimit {
    pub const DEFAULT: u16 = 50;
    pub const MAX: u16 = 1000;

    /// Validate a caller-supplied limit. `0` selects the default of 50;
    /// anything else outside `[1, 1000]` is rejected.
    pub fn new(limit: i64) -> Result<Self> {
        match limit {
            0 => Ok(Self::default()),
            1..=1000 => Ok(Self(limit as u16)),
            _ => Err(PastebinError::InvalidRequest(format!(
                "results limit must be in range [1, {}], got {}",
                Self::MAX,
                limit
            ))),
        }
    }

    /// The value sent as `api_results_limit`.
    pub fn get(self) -> u16 {
        self.0
    }
}

impl Default for ResultLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Request to create a paste.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePasteRequest {
    /// Paste text.
    pub content: String,
    /// Post as a guest; the user key is never sent when set.
    pub guest: bool,
    /// Paste title (sent empty when absent).
    pub title: Option<String>,
    /// Syntax highlight format (default: "text").
    pub format: Option<String>,
    /// Expiration (default: never).
    pub expiration: Expiration,
    /// Visibility (default: public).
    pub visibility: Visibility,
}

impl CreatePasteRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Paste-specific form fields. Keys and the option tag are added by the
    /// client.
    pub fn form_fields(&self) -> Form {
        Form::new()
            .with(form::PASTE_CODE, self.content.as_str())
            .with(form::PASTE_NAME, self.title.as_deref().unwrap_or_default())
            .with(form::PASTE_PRIVATE, self.visibility.code().to_string())
            .with(form::PASTE_EXPIRE_DATE, self.expiration.token())
            .with(
                form::PASTE_FORMAT,
                self.format.as_deref().unwrap_or(DEFAULT_FORMAT),
            )
    }
}

/// Account settings as returned by the `userdetails` option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountInfo {
    #[serde(rename = "user_name")]
    pub username: String,
    #[serde(rename = "user_format_short")]
    pub format: String,
    #[serde(rename = "user_expiration")]
    pub expiration: String,
    #[serde(rename = "user_avatar_url")]
    pub avatar_url: String,
    /// Default visibility code for new pastes, as sent by the service.
    #[serde(rename = "user_private")]
    pub private_mode: String,
    #[serde(rename = "user_website")]
    pub website: String,
    #[serde(rename = "user_email")]
    pub email: String,
    #[serde(rename = "user_location")]
    pub location: String,
    /// `0` normal, `1` pro, `2` pro lifetime.
    #[serde(rename = "user_account_type")]
    pub account_type: String,
}

impl AccountInfo {
    const ROOT: &'static str = "user";

    /// Decode the XML payload. The root element must be `<user>` and every
    /// field must be present.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let root = root_element(xml)?;
        if root != Self::ROOT {
            return Err(PastebinError::Decode(format!(
                "expected <{}> root element, found <{}>",
                Self::ROOT,
                root
            )));
        }

        quick_xml::de::from_str(xml).map_err(|e| PastebinError::Decode(e.to_string()))
    }
}

/// Name of the first element in the document.
fn root_element(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(PastebinError::Decode("missing root element".to_string()));
            }
            Ok(Event::Text(_)) | Ok(Event::CData(_)) | Ok(Event::End(_)) => {
                return Err(PastebinError::Decode(
                    "content outside of root element".to_string(),
                ));
            }
            Ok(_) => continue,
            Err(e) => return Err(PastebinError::Decode(e.to_string())),
        }
    }
}
