//! Event log retrieval, display, and clearing.

use admiral_common::constants::EVENT_LOGS_PATH;
use admiral_common::error::Result;
use admiral_common::types::EventLogType;
use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::client::AdmiralClient;
use crate::document::QueryResult;

/// Remote operations on the event log.
pub trait EventsApi {
    /// Fetches the whole event log.
    ///
    /// # Errors
    ///
    /// Returns an error if the event log cannot be queried or parsed.
    fn fetch_events(&self) -> Result<EventList>;

    /// Deletes one event by its document link.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete request fails.
    fn delete_event(&self, link: &str) -> Result<()>;
}

/// One record of the control plane's event log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    /// Link identifying this event.
    pub document_self_link: String,
    /// Severity.
    pub event_log_type: EventLogType,
    /// Kind of resource the event is about.
    pub resource_type: String,
    /// Free-text description.
    pub description: String,
    /// Last update time in epoch microseconds.
    pub document_update_time_micros: u64,
}

impl Event {
    /// Formats the update time as RFC 3339 UTC, or `-` if it is unset.
    #[must_use]
    pub fn timestamp(&self) -> String {
        i64::try_from(self.document_update_time_micros)
            .ok()
            .filter(|&micros| micros > 0)
            .and_then(DateTime::from_timestamp_micros)
            .map_or_else(
                || "-".to_string(),
                |t| t.to_rfc3339_opts(SecondsFormat::Secs, true),
            )
    }
}

/// Ordered list of events fetched from the control plane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventList {
    events: Vec<Event>,
}

impl EventList {
    /// Creates a list from already-decoded events.
    #[must_use]
    pub const fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Decodes the events of an expanded query result, in link order.
    ///
    /// # Errors
    ///
    /// Returns an error if an expanded document is not a valid event.
    pub fn from_query_result(result: &QueryResult) -> Result<Self> {
        let events = result
            .ordered_documents()
            .map(|doc| serde_json::from_value(doc.clone()))
            .collect::<std::result::Result<Vec<Event>, _>>()?;
        Ok(Self { events })
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the list holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The events in fetch order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Deletes every event in this list and returns how many were deleted.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first failed delete.
    pub fn clear_all(&self, api: &impl EventsApi) -> Result<usize> {
        for event in &self.events {
            api.delete_event(&event.document_self_link)?;
        }
        tracing::info!(count = self.events.len(), "cleared event log");
        Ok(self.events.len())
    }

    /// Renders the list as an aligned table with a header row.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!(
            "{:<22} {:<8} {:<20} {}\n",
            "TIME", "TYPE", "RESOURCE", "DESCRIPTION"
        );
        for e in &self.events {
            out.push_str(&format!(
                "{:<22} {:<8} {:<20} {}\n",
                e.timestamp(),
                e.event_log_type.to_string(),
                e.resource_type,
                e.description
            ));
        }
        out
    }
}

impl EventsApi for AdmiralClient {
    fn fetch_events(&self) -> Result<EventList> {
        let result: QueryResult = self.get_json(
            EVENT_LOGS_PATH,
            &[("documentType", "true"), ("expand", "true")],
        )?;
        let list = EventList::from_query_result(&result)?;
        tracing::debug!(count = list.len(), "fetched event log");
        Ok(list)
    }

    fn delete_event(&self, link: &str) -> Result<()> {
        self.delete(link)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn event(link: &str, kind: EventLogType, desc: &str) -> Event {
        Event {
            document_self_link: link.into(),
            event_log_type: kind,
            resource_type: "Host config".into(),
            description: desc.into(),
            document_update_time_micros: 1_476_000_000_000_000,
        }
    }

    #[test]
    fn timestamp_formats_micros_as_utc() {
        let e = event("/e/1", EventLogType::Info, "ok");
        assert_eq!(e.timestamp(), "2016-10-09T08:00:00Z");
    }

    #[test]
    fn timestamp_unset_renders_dash() {
        assert_eq!(Event::default().timestamp(), "-");
    }

    #[test]
    fn from_query_result_keeps_link_order() {
        let result: QueryResult = serde_json::from_value(json!({
            "documentLinks": ["/resources/event-logs/b", "/resources/event-logs/a"],
            "documents": {
                "/resources/event-logs/a": {
                    "documentSelfLink": "/resources/event-logs/a",
                    "eventLogType": "ERROR",
                    "description": "Provisioning failed"
                },
                "/resources/event-logs/b": {
                    "documentSelfLink": "/resources/event-logs/b",
                    "eventLogType": "INFO",
                    "resourceType": "Host config",
                    "description": "Host added"
                }
            }
        }))
        .expect("parse");

        let list = EventList::from_query_result(&result).expect("decode");
        assert_eq!(list.len(), 2);
        assert_eq!(list.events()[0].description, "Host added");
        assert_eq!(list.events()[1].event_log_type, EventLogType::Error);
        assert_eq!(list.events()[1].resource_type, "");
    }

    #[test]
    fn render_empty_list_is_header_only() {
        let out = EventList::default().render();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("TIME"));
        assert!(out.contains("DESCRIPTION"));
    }

    #[test]
    fn render_one_row_per_event() {
        let list = EventList::new(vec![
            event("/e/1", EventLogType::Info, "Host added"),
            event("/e/2", EventLogType::Warning, "Host slow"),
        ]);
        let out = list.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2016-10-09T08:00:00Z"));
        assert!(lines[1].contains("INFO"));
        assert!(lines[1].ends_with("Host added"));
        assert!(lines[2].contains("WARNING"));
    }
}
