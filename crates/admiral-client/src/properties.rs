//! Custom-properties management for hosts, credentials, and resource pools.

use admiral_common::constants::{COMPUTE_PATH, CREDENTIALS_PATH, RESOURCE_POOLS_PATH};
use admiral_common::error::{AdmiralError, Result};
use admiral_common::types::{CustomProperties, EntityKind, public_properties};
use serde_json::Value;

use crate::client::AdmiralClient;
use crate::document::{self, QueryResult};

/// Remote operations on an entity's custom properties.
pub trait CustomPropertiesApi {
    /// Returns the user-visible custom properties, or `None` if the entity
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the control plane cannot be queried.
    fn get_public_custom_properties(
        &self,
        kind: EntityKind,
        id: &str,
    ) -> Result<Option<CustomProperties>>;

    /// Sets the given key/value pairs. Returns `false` if the entity does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity cannot be fetched or updated.
    fn add_custom_properties(
        &self,
        kind: EntityKind,
        id: &str,
        keys: &[String],
        values: &[String],
    ) -> Result<bool>;

    /// Removes the given keys. Returns `false` if the entity does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity cannot be fetched or updated.
    fn remove_custom_properties(&self, kind: EntityKind, id: &str, keys: &[String])
    -> Result<bool>;
}

/// Returns the REST collection holding documents of `kind`.
#[must_use]
pub const fn collection_path(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Host => COMPUTE_PATH,
        EntityKind::Credentials => CREDENTIALS_PATH,
        EntityKind::ResourcePool => RESOURCE_POOLS_PATH,
    }
}

/// Builds the `$filter` expression selecting a host by address.
///
/// Single quotes in the address are doubled so the literal stays closed.
#[must_use]
pub fn host_address_filter(address: &str) -> String {
    format!("address eq '{}'", address.replace('\'', "''"))
}

impl AdmiralClient {
    /// Fetches the raw document of an entity, or `None` if it does not exist.
    ///
    /// Hosts are looked up by address; the first match wins.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures or unexpected statuses.
    pub fn fetch_entity(&self, kind: EntityKind, id: &str) -> Result<Option<Value>> {
        if kind == EntityKind::Host {
            let filter = host_address_filter(id);
            let result: QueryResult = self.get_json(
                COMPUTE_PATH,
                &[
                    ("documentType", "true"),
                    ("expand", "true"),
                    ("$filter", filter.as_str()),
                ],
            )?;
            return Ok(result.ordered_documents().next().cloned());
        }

        let link = document::document_link(collection_path(kind), id);
        match self.get_json::<Value>(&link, &[]) {
            Ok(doc) => Ok(Some(doc)),
            Err(AdmiralError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn update_entity(
        &self,
        kind: EntityKind,
        id: &str,
        edit: impl FnOnce(&mut Value),
    ) -> Result<bool> {
        let Some(mut doc) = self.fetch_entity(kind, id)? else {
            tracing::info!(%kind, id, "entity not found");
            return Ok(false);
        };
        let link = document::self_link(&doc)
            .map_or_else(|| document::document_link(collection_path(kind), id), str::to_string);
        edit(&mut doc);
        self.put_json(&link, &doc)?;
        tracing::info!(%kind, link = %link, "updated custom properties");
        Ok(true)
    }
}

impl CustomPropertiesApi for AdmiralClient {
    fn get_public_custom_properties(
        &self,
        kind: EntityKind,
        id: &str,
    ) -> Result<Option<CustomProperties>> {
        Ok(self
            .fetch_entity(kind, id)?
            .map(|doc| public_properties(&document::custom_properties(&doc))))
    }

    fn add_custom_properties(
        &self,
        kind: EntityKind,
        id: &str,
        keys: &[String],
        values: &[String],
    ) -> Result<bool> {
        self.update_entity(kind, id, |doc| {
            document::merge_custom_properties(doc, keys, values);
        })
    }

    fn remove_custom_properties(
        &self,
        kind: EntityKind,
        id: &str,
        keys: &[String],
    ) -> Result<bool> {
        self.update_entity(kind, id, |doc| {
            let removed = document::remove_custom_properties(doc, keys);
            tracing::debug!(removed, "removed custom property keys");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_path_per_kind() {
        assert_eq!(collection_path(EntityKind::Host), "/resources/compute");
        assert_eq!(collection_path(EntityKind::Credentials), "/core/auth/credentials");
        assert_eq!(collection_path(EntityKind::ResourcePool), "/resources/pools");
    }

    #[test]
    fn host_filter_quotes_address() {
        assert_eq!(host_address_filter("10.0.0.5"), "address eq '10.0.0.5'");
    }

    #[test]
    fn host_filter_escapes_embedded_quotes() {
        assert_eq!(
            host_address_filter("h' or address eq 'x"),
            "address eq 'h'' or address eq ''x'"
        );
    }
}
