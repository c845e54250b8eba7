//! # txtcrusher
//!
//! Client for the Pastebin.com API.
//!
//! Every operation is one form-encoded request and one plain-text response.
//! Pastebin signals failures with a `200 OK` whose body starts with
//! `Bad API request`; those come back as [`PastebinError::Api`] carrying the
//! service's text.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use txtcrusher::{Client, Credentials, CreatePasteRequest, Visibility};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Credentials::new("dev_key"))?;
//!
//!     // Log in once to get a user key
//!     let user_key = client.account().authenticate("wiz_kitty", "hunter2").await?;
//!     let client = Client::new(Credentials::new("dev_key").with_user_key(user_key))?;
//!
//!     let url = client.pastes().create(&CreatePasteRequest {
//!         content: "hello".to_string(),
//!         visibility: Visibility::Private,
//!         ..Default::default()
//!     }).await?;
//!     println!("Created {}", url);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use txtcrusher::{Client, Credentials, PastebinError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new(Credentials::anonymous()).unwrap();
//!
//!     match client.pastes().get_public("0b42rwhf").await {
//!         Ok(text) => println!("{}", text),
//!         Err(PastebinError::Api(reason)) => println!("Rejected: {}", reason),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

pub mod account;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod pastes;
pub mod types;

// Re-export main types at the crate root
pub use client::{Client, ClientConfig, Credentials};
pub use config::Config;
pub use error::{PastebinError, Result};

pub use types::{AccountInfo, CreatePasteRequest, Expiration, ResultLimit, Visibility};
