//! Domain primitive types used across the Admiral CLI workspace.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::HIDDEN_PROPERTY_PREFIX;

/// Custom properties of a remote entity, ordered by key.
pub type CustomProperties = BTreeMap<String, String>;

/// Kind of entity that carries custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A container host, addressed by its IP or address.
    Host,
    /// A credential set, addressed by ID.
    Credentials,
    /// A resource pool, addressed by ID.
    ResourcePool,
}

impl EntityKind {
    /// Human-readable label used in CLI output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Host => "Host",
            Self::Credentials => "Credentials",
            Self::ResourcePool => "Resource pool",
        }
    }

    /// Name of the identifier the entity is addressed by.
    #[must_use]
    pub const fn id_name(self) -> &'static str {
        match self {
            Self::Host => "IP",
            Self::Credentials | Self::ResourcePool => "ID",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns `true` if the key names a system-internal property.
#[must_use]
pub fn is_hidden_property(key: &str) -> bool {
    key.starts_with(HIDDEN_PROPERTY_PREFIX)
}

/// Strips system-internal keys, leaving the user-visible properties.
#[must_use]
pub fn public_properties(props: &CustomProperties) -> CustomProperties {
    props
        .iter()
        .filter(|(k, _)| !is_hidden_property(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Severity of an event log record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventLogType {
    /// Informational event.
    #[default]
    Info,
    /// Something degraded but the action went through.
    Warning,
    /// The action failed.
    Error,
}

impl fmt::Display for EventLogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_properties_drops_hidden_keys() {
        let mut props = CustomProperties::new();
        let _ = props.insert("__computeType".into(), "DockerHost".into());
        let _ = props.insert("zone".into(), "eu-west".into());

        let public = public_properties(&props);
        assert_eq!(public.len(), 1);
        assert_eq!(public.get("zone").map(String::as_str), Some("eu-west"));
    }

    #[test]
    fn single_underscore_key_is_public() {
        assert!(!is_hidden_property("_owner"));
        assert!(is_hidden_property("__owner"));
    }

    #[test]
    fn entity_kind_labels_match_cli_output() {
        assert_eq!(EntityKind::Host.label(), "Host");
        assert_eq!(EntityKind::Credentials.label(), "Credentials");
        assert_eq!(EntityKind::ResourcePool.to_string(), "Resource pool");
        assert_eq!(EntityKind::Host.id_name(), "IP");
        assert_eq!(EntityKind::ResourcePool.id_name(), "ID");
    }

    #[test]
    fn event_log_type_deserializes_uppercase() {
        let t: EventLogType = serde_json::from_str("\"WARNING\"").expect("parse");
        assert_eq!(t, EventLogType::Warning);
        assert_eq!(t.to_string(), "WARNING");
    }
}
