//! Basic usage example for txtcrusher.
//!
//! This example demonstrates:
//! - Creating a client
//! - Creating an unlisted paste
//! - Reading it back through the public raw endpoint
//! - Listing and deleting pastes when a user key is available
//!
//! Run with:
//! ```bash
//! PASTEBIN_DEV_KEY=xxx PASTEBIN_USER_KEY=yyy cargo run --example basic
//! ```

use txtcrusher::{Client, CreatePasteRequest, Credentials, Expiration, Visibility};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dev_key = std::env::var("PASTEBIN_DEV_KEY")
        .expect("PASTEBIN_DEV_KEY environment variable required");
    let user_key = std::env::var("PASTEBIN_USER_KEY").unwrap_or_default();

    println!("Creating client...");
    let client = Client::new(Credentials::new(dev_key).with_user_key(user_key.as_str()))?;
    let guest = client.credentials().user_key().is_none();

    println!("\nCreating a paste (guest: {})...", guest);
    let url = client
        .pastes()
        .create(&CreatePasteRequest {
            content: "Hello from txtcrusher!".to_string(),
            guest,
            title: Some("txtcrusher example".to_string()),
            expiration: Expiration::TenMinutes,
            visibility: Visibility::Unlisted,
            ..Default::default()
        })
        .await?;
    println!("Created: {}", url);

    let paste_key = url.rsplit('/').next().unwrap_or_default().to_string();

    println!("\nFetching it back...");
    let text = client.pastes().get_public(&paste_key).await?;
    println!("Content: {}", text);

    if guest {
        println!("\nNo user key, skipping list and delete.");
        return Ok(());
    }

    println!("\nListing pastes...");
    println!("{}", client.pastes().list(5).await?);

    println!("\nCleaning up...");
    println!("{}", client.pastes().delete(&paste_key).await?);

    println!("\nDone!");
    Ok(())
}
