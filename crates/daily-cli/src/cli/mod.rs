use anyhow::Context;
use clap::Parser;
use daily_core::config::{AppConfig, default_config_path, default_store_path};
use daily_core::identity::{IdentityProvider, default_signals};
use daily_core::selector::{current_date_key, daily_id, is_date_key};
use daily_core::store::FileStore;
use serde::Serialize;
use std::path::PathBuf;

mod args;

use args::*;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Today(args) => handle_today(args, cli.no_store),
        Commands::Date => {
            println!("{}", current_date_key());
            Ok(())
        }
        Commands::UserId(args) => handle_user_id(args, cli.no_store),
        Commands::Config(args) => handle_config(args),
    }
}

#[derive(Serialize)]
struct TodayReport<'a> {
    date: &'a str,
    user_id: &'a str,
    selection_id: u32,
}

fn handle_today(args: TodayArgs, no_store: bool) -> anyhow::Result<()> {
    let config_path = path_or_default(args.config, default_config_path)?;
    let config = AppConfig::load(&config_path)?;

    let date = match args.date {
        Some(date) => {
            anyhow::ensure!(is_date_key(&date), "date must be formatted YYYY-MM-DD");
            date
        }
        None => current_date_key(),
    };
    let user = match args.user {
        Some(user) => {
            anyhow::ensure!(!user.is_empty(), "user identifier must not be empty");
            user
        }
        None => identity_provider(no_store, args.store)?.user_id(),
    };

    tracing::debug!(catalog_size = config.catalog_size, %date, "computing selection");
    let id = daily_id(&user, &date, config.catalog_size);
    if args.json {
        let report = TodayReport {
            date: &date,
            user_id: &user,
            selection_id: id,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{date}: selection {id}");
    }
    Ok(())
}

fn handle_user_id(args: UserIdArgs, no_store: bool) -> anyhow::Result<()> {
    match args.command {
        UserIdCommands::Show(args) => {
            let provider = identity_provider(no_store, args.store)?;
            println!("{}", provider.user_id());
            Ok(())
        }
        UserIdCommands::Reset(args) => {
            if no_store {
                anyhow::bail!("--no-store has no persisted identifier to reset");
            }
            let provider = identity_provider(false, args.store)?;
            provider.reset().context("reset user identifier")?;
            println!("User identifier cleared");
            Ok(())
        }
    }
}

fn handle_config(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommands::Init(args) => {
            anyhow::ensure!(args.catalog_size >= 1, "catalog size must be at least 1");
            let config_path = path_or_default(args.config, default_config_path)?;
            let config = AppConfig {
                catalog_size: args.catalog_size,
            };
            config.save(&config_path)?;
            println!("Config saved to {}", config_path.display());
            Ok(())
        }
    }
}

fn identity_provider(
    no_store: bool,
    store_path: Option<PathBuf>,
) -> anyhow::Result<IdentityProvider> {
    if no_store {
        return Ok(IdentityProvider::without_store());
    }
    let path = path_or_default(store_path, default_store_path)?;
    Ok(IdentityProvider::new(
        Box::new(FileStore::new(path)),
        default_signals(),
    ))
}

fn path_or_default(
    explicit: Option<PathBuf>,
    default: fn() -> anyhow::Result<PathBuf>,
) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => default(),
    }
}
