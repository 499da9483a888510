//! `admiral custom-properties` — List, set, and remove custom properties.
//!
//! Every entity selector given on the command line triggers its own remote
//! call; the resulting messages are concatenated.

use admiral_client::CustomPropertiesApi;
use admiral_common::types::EntityKind;
use clap::{Args, Subcommand};

use crate::output::to_indented_json;

/// Arguments for the `custom-properties` command group.
#[derive(Args, Debug)]
pub struct CustomPropertiesArgs {
    /// Custom-properties operation.
    #[command(subcommand)]
    pub command: CustomPropertiesCommand,
}

/// Operations on custom properties.
#[derive(Subcommand, Debug)]
pub enum CustomPropertiesCommand {
    /// Lists current properties of given entity.
    Ls(EntitySelector),
    /// Set custom property to given entity.
    Set(SetArgs),
    /// Remove custom property to given entity.
    Rm(RemoveArgs),
}

/// Entities whose custom properties are managed.
#[derive(Args, Debug, Default, Clone)]
pub struct EntitySelector {
    /// IP of the host that you want to manage custom properties.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// ID of the credentials that you want to manage custom properties.
    #[arg(long = "credentials")]
    pub credentials: Option<String>,

    /// ID of the resource pool that you want to manage custom properties.
    #[arg(long = "resource-pool")]
    pub resource_pool: Option<String>,
}

/// Arguments for `custom-properties set`.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Keys of custom property.
    #[arg(short = 'k', long = "key", value_delimiter = ',', required = true)]
    pub keys: Vec<String>,

    /// Values of custom property.
    #[arg(short = 'v', long = "value", value_delimiter = ',')]
    pub values: Vec<String>,

    /// Target entities.
    #[command(flatten)]
    pub target: EntitySelector,
}

/// Arguments for `custom-properties rm`.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Keys of custom property.
    #[arg(short = 'k', long = "key", value_delimiter = ',', required = true)]
    pub keys: Vec<String>,

    /// Target entities.
    #[command(flatten)]
    pub target: EntitySelector,
}

impl EntitySelector {
    /// Selected entities in listing order: host, credentials, resource pool.
    fn list_order(&self) -> Vec<(EntityKind, &str)> {
        selected([
            (EntityKind::Host, self.host.as_deref()),
            (EntityKind::Credentials, self.credentials.as_deref()),
            (EntityKind::ResourcePool, self.resource_pool.as_deref()),
        ])
    }

    /// Selected entities in update order: host, resource pool, credentials.
    fn update_order(&self) -> Vec<(EntityKind, &str)> {
        selected([
            (EntityKind::Host, self.host.as_deref()),
            (EntityKind::ResourcePool, self.resource_pool.as_deref()),
            (EntityKind::Credentials, self.credentials.as_deref()),
        ])
    }
}

fn selected<'a>(candidates: [(EntityKind, Option<&'a str>); 3]) -> Vec<(EntityKind, &'a str)> {
    candidates
        .into_iter()
        .filter_map(|(kind, id)| id.filter(|s| !s.is_empty()).map(|id| (kind, id)))
        .collect()
}

/// Executes a `custom-properties` subcommand.
///
/// # Errors
///
/// Returns an error if listed properties cannot be serialized.
pub fn execute(api: &impl CustomPropertiesApi, args: CustomPropertiesArgs) -> anyhow::Result<String> {
    match args.command {
        CustomPropertiesCommand::Ls(target) => list(api, &target),
        CustomPropertiesCommand::Set(args) => Ok(set(api, &args)),
        CustomPropertiesCommand::Rm(args) => Ok(remove(api, &args)),
    }
}

/// Renders the public custom properties of every selected entity.
///
/// A failed lookup is reported like a missing entity and the remaining
/// selectors still run.
///
/// # Errors
///
/// Returns an error if the properties cannot be serialized.
pub fn list(api: &impl CustomPropertiesApi, target: &EntitySelector) -> anyhow::Result<String> {
    let mut out = String::new();
    for (kind, id) in target.list_order() {
        out.push_str(&describe(api, kind, id)?);
        if kind != EntityKind::ResourcePool {
            out.push('\n');
        }
    }
    Ok(out)
}

fn describe(api: &impl CustomPropertiesApi, kind: EntityKind, id: &str) -> anyhow::Result<String> {
    let props = match api.get_public_custom_properties(kind, id) {
        Ok(Some(props)) => props,
        Ok(None) => return Ok(not_found(kind)),
        Err(e) => {
            tracing::warn!(%kind, id, error = %e, "custom properties lookup failed");
            return Ok(not_found(kind));
        }
    };
    let json = to_indented_json(&props)?;
    Ok(format!("Custom Properties of {}: {id}\n{json}", kind.label()))
}

fn not_found(kind: EntityKind) -> String {
    format!("{} with this {} not found.", kind.label(), kind.id_name())
}

/// Sets custom properties on every selected entity.
///
/// Entities that are missing or fail to update produce no line.
pub fn set(api: &impl CustomPropertiesApi, args: &SetArgs) -> String {
    apply(&args.target, "set", |kind, id| {
        api.add_custom_properties(kind, id, &args.keys, &args.values)
    })
}

/// Removes custom properties from every selected entity.
///
/// Entities that are missing or fail to update produce no line.
pub fn remove(api: &impl CustomPropertiesApi, args: &RemoveArgs) -> String {
    apply(&args.target, "removed", |kind, id| {
        api.remove_custom_properties(kind, id, &args.keys)
    })
}

fn apply(
    target: &EntitySelector,
    verb: &str,
    mut call: impl FnMut(EntityKind, &str) -> admiral_common::error::Result<bool>,
) -> String {
    let mut out = String::new();
    for (kind, id) in target.update_order() {
        match call(kind, id) {
            Ok(true) => {
                out.push_str(&format!("{}'s custom properties are {verb}.", kind.label()));
                if kind != EntityKind::Credentials {
                    out.push('\n');
                }
            }
            Ok(false) => tracing::warn!(%kind, id, "entity not found, nothing {verb}"),
            Err(e) => tracing::warn!(%kind, id, error = %e, "custom properties not {verb}"),
        }
    }
    out
}
