//! CLI command definitions and dispatch.

pub mod custom_properties;
pub mod events;

use std::path::PathBuf;

use admiral_client::AdmiralClient;
use admiral_common::config::AdmiralConfig;
use clap::{Parser, Subcommand};

/// Admiral — container-management control-plane CLI.
#[derive(Parser, Debug)]
#[command(name = admiral_common::constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the control plane.
    #[arg(long, global = true, env = "ADMIRAL_URL")]
    pub url: Option<String>,

    /// Authentication token.
    #[arg(long, global = true, env = "ADMIRAL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to the JSON config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage custom properties of hosts, credentials, and resource pools.
    #[command(alias = "cp")]
    CustomProperties(custom_properties::CustomPropertiesArgs),
    /// Prints events log.
    Events(events::EventsArgs),
}

impl Cli {
    /// Resolves the effective configuration: defaults, then the config
    /// file, then flags and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but is invalid.
    pub fn resolve_config(&self) -> anyhow::Result<AdmiralConfig> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(admiral_common::constants::default_config_file);
        let config = AdmiralConfig::load(&path)?;
        Ok(config.with_overrides(self.url.clone(), self.token.clone()))
    }
}

/// Dispatches the parsed CLI command to its handler and returns the text
/// to print.
///
/// # Errors
///
/// Returns an error if configuration or the command itself fails.
pub fn execute(cli: Cli) -> anyhow::Result<String> {
    let config = cli.resolve_config()?;
    tracing::debug!(url = %config.url, "resolved control-plane endpoint");
    let client = AdmiralClient::new(&config)?;

    match cli.command {
        Command::CustomProperties(args) => custom_properties::execute(&client, args),
        Command::Events(args) => events::execute(&client, &args),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn binary_name_is_admiral() {
        assert_eq!(Cli::command().get_name(), "admiral");
    }

    #[test]
    fn cp_alias_parses_custom_properties() {
        let cli = Cli::try_parse_from(["admiral", "cp", "ls", "--host", "10.0.0.5"]).expect("parse");
        assert!(matches!(cli.command, Command::CustomProperties(_)));
    }

    #[test]
    fn url_flag_overrides_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"url": "http://file:8282", "token": "abc"}"#).expect("write");

        let cli = Cli::try_parse_from([
            "admiral",
            "--config",
            path.to_str().expect("utf-8 path"),
            "--url",
            "http://flag:8282",
            "events",
        ])
        .expect("parse");
        let config = cli.resolve_config().expect("config");
        assert_eq!(config.url, "http://flag:8282");
        assert_eq!(config.token.as_deref(), Some("abc"));
    }
}
