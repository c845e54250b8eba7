//! txtcrusher command-line entrypoint.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use txtcrusher::{
    AccountInfo, Client, Config, CreatePasteRequest, Credentials, Expiration, Visibility,
};

#[derive(Parser)]
#[command(name = "txtcrusher", about = "Pastebin.com from the terminal", version)]
struct Cli {
    /// Config file with the API keys
    #[arg(long, global = true, env = "TXTCRUSHER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a paste from TEXT, --file, or stdin
    Create {
        text: Option<String>,
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Post without attaching the paste to your account
        #[arg(long)]
        guest: bool,
        #[arg(short, long)]
        title: Option<String>,
        /// Highlight format, e.g. text, rust, python
        #[arg(long, default_value = "text")]
        format: String,
        /// N, 10M, 1H, 1D, 1W, 2W, 1M, 6M or 1Y
        #[arg(short, long, default_value = "N")]
        expire: Expiration,
        /// public, unlisted, private (or 0, 1, 2)
        #[arg(short, long, default_value = "public")]
        visibility: Visibility,
    },
    /// Log in and print a new user key
    Login { username: String, password: String },
    /// List your pastes
    List {
        /// 1 to 1000, 0 for the default of 50
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        limit: i64,
    },
    /// Delete one of your pastes
    Delete { key: String },
    /// Print your account details
    Info {
        /// Print the XML as returned by the service
        #[arg(long)]
        raw: bool,
    },
    /// Print one of your pastes, private ones included
    Get { key: String },
    /// Print a public or unlisted paste; needs no config file
    Fetch { key: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "txtcrusher=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let client = match &cli.command {
        Commands::Fetch { .. } => Client::new(Credentials::anonymous())?,
        _ => Client::new(load_config(cli.config.as_deref())?.credentials())?,
    };

    match cli.command {
        Commands::Create {
            text,
            file,
            guest,
            title,
            format,
            expire,
            visibility,
        } => {
            let (content, label) = match (text, file) {
                (Some(text), _) => (text, "text".to_string()),
                (None, Some(path)) => (
                    std::fs::read_to_string(&path)
                        .with_context(|| format!("[{}]", path.display()))?,
                    path.display().to_string(),
                ),
                (None, None) => {
                    let mut buffer = String::new();
                    io::stdin().read_to_string(&mut buffer)?;
                    (buffer, "stdin".to_string())
                }
            };

            let request = CreatePasteRequest {
                content,
                guest,
                title,
                format: Some(format),
                expiration: expire,
                visibility,
            };
            let url = client
                .pastes()
                .create(&request)
                .await
                .with_context(|| format!("[{}]", label))?;
            println!("{}", url);
        }
        Commands::Login { username, password } => {
            let user_key = client.account().authenticate(&username, &password).await?;
            println!("{}", user_key);
        }
        Commands::List { limit } => {
            println!("{}", client.pastes().list(limit).await?);
        }
        Commands::Delete { key } => {
            let reply = client
                .pastes()
                .delete(&key)
                .await
                .with_context(|| format!("[{}]", key))?;
            println!("{}", reply);
        }
        Commands::Info { raw: true } => {
            println!("{}", client.account().info_raw().await?);
        }
        Commands::Info { raw: false } => {
            print_account(&client.account().info().await?);
        }
        Commands::Get { key } => {
            let text = client
                .pastes()
                .get_own(&key)
                .await
                .with_context(|| format!("[{}]", key))?;
            println!("{}", text);
        }
        Commands::Fetch { key } => {
            let text = client
                .pastes()
                .get_public(&key)
                .await
                .with_context(|| format!("[{}]", key))?;
            println!("{}", text);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path().context("cannot locate home directory for config file")?,
    };
    Ok(Config::load(&path)?)
}

fn print_account(info: &AccountInfo) {
    let rows = [
        ("Username", &info.username),
        ("User format", &info.format),
        ("Expiration", &info.expiration),
        ("Avatar link", &info.avatar_url),
        ("Private mode", &info.private_mode),
        ("Website", &info.website),
        ("Email", &info.email),
        ("Location", &info.location),
        ("Account type", &info.account_type),
    ];
    for (label, value) in rows {
        println!("{:<14}{:?}", format!("{}:", label), value);
    }
}
