use crate::config::Config;
use crate::display::{print_info, print_ranking, print_success};
use crate::errors::{CliError, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;
use lpscan_esi::{EsiClient, HttpTransport, ScanParams, ScanRunner};

#[derive(Parser)]
#[command(name = "lpscan")]
#[command(about = "Ranks EVE Online LP store offers by ISK-per-LP yield")]
#[command(version)]
pub struct Cli {
    /// Defaults to `scan` when invoked with no subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan an LP store and print the ranked offers
    Scan(ScanArgs),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Args, Default)]
pub struct ScanArgs {
    /// NPC corporation ID whose LP store to scan
    #[arg(long)]
    pub corp: Option<i64>,
    /// Market region ID to price against
    #[arg(long)]
    pub region: Option<i64>,
    /// Maximum concurrent requests per fetch phase
    #[arg(long)]
    pub workers: Option<usize>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Get a configuration value
    Get {
        /// Key, either `section.key` or a known name like `region_id`
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Key, either `section.key` or a known name like `region_id`
        key: String,
        /// Value to set
        value: String,
    },
    /// Show the configuration file path
    Path,
}

pub async fn run_cli(cli: Cli) -> Result<()> {
    let config = Config::new()?;

    // A bare `lpscan` runs a scan with configured defaults.
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Scan(ScanArgs::default()));

    match command {
        Commands::Scan(args) => handle_scan(args, &config).await,
        Commands::Config { action } => handle_config(action, config),
    }
}

async fn handle_scan(args: ScanArgs, config: &Config) -> Result<()> {
    let params = ScanParams {
        corp_id: match args.corp {
            Some(corp) => corp,
            None => config.corp_id()?,
        },
        region_id: match args.region {
            Some(region) => region,
            None => config.region_id()?,
        },
        max_concurrency: match args.workers {
            Some(workers) => workers,
            None => config.workers()?,
        },
    };
    debug!("Effective scan parameters: {:?}", params);

    let transport = HttpTransport::new()?;
    let client = EsiClient::new(transport, config.base_url());
    let runner = ScanRunner::new(client);

    print_info(&format!(
        "Fetching LP store data for corporation {}...",
        params.corp_id
    ));
    let ranked = runner.run(&params).await?;

    print_ranking(&ranked);
    Ok(())
}

fn handle_config(action: ConfigCommands, mut config: Config) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            println!("Config file: {}", config.path().display());
            println!("base_url  = {}", config.base_url());
            println!("region_id = {}", config.region_id()?);
            println!("corp_id   = {}", config.corp_id()?);
            println!("workers   = {}", config.workers()?);
        }

        ConfigCommands::Get { key } => {
            let (section, config_key) = split_config_key(&key)?;
            match config.get_value(section, config_key) {
                Some(value) => println!("{}: {}", key, value),
                None => println!("{}: not set", key),
            }
        }

        ConfigCommands::Set { key, value } => {
            let (section, config_key) = split_config_key(&key)?;
            config.set_value(section, config_key, &value);
            config.save()?;
            print_success(&format!("Config value '{}' set to '{}'", key, value));
        }

        ConfigCommands::Path => {
            println!("{}", config.path().display());
        }
    }

    Ok(())
}

/// Map a user-facing key to its `(section, key)` pair. Known single keys
/// get their section filled in; anything else must be `section.key`.
fn split_config_key(key: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = key.split('.').collect();
    match parts.as_slice() {
        ["base_url"] => Ok(("esi", "base_url")),
        ["region_id"] => Ok(("scan", "region_id")),
        ["corp_id"] => Ok(("scan", "corp_id")),
        ["workers"] => Ok(("scan", "workers")),
        [section, config_key] => Ok((*section, *config_key)),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown config key: {}. Use 'section.key' or a known key like 'region_id'",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_single_keys_map_to_sections() {
        assert_eq!(split_config_key("base_url").unwrap(), ("esi", "base_url"));
        assert_eq!(split_config_key("workers").unwrap(), ("scan", "workers"));
    }

    #[test]
    fn dotted_keys_pass_through() {
        assert_eq!(split_config_key("scan.region_id").unwrap(), ("scan", "region_id"));
    }

    #[test]
    fn unknown_bare_keys_are_rejected() {
        assert!(split_config_key("nonsense").is_err());
        assert!(split_config_key("a.b.c").is_err());
    }
}
