//! `admiral events` — Print or clear the event log.

use admiral_client::EventsApi;
use clap::Args;

/// Arguments for the `events` command.
#[derive(Args, Debug, Default)]
pub struct EventsArgs {
    /// Clear all logged requests.
    #[arg(long)]
    pub clear: bool,
}

/// Executes the `events` command.
///
/// Fetches the event log, then either clears it or renders it as a table.
/// An empty log is reported as `n/a` above the table header.
///
/// # Errors
///
/// Returns an error if the event log cannot be fetched or cleared.
pub fn execute(api: &impl EventsApi, args: &EventsArgs) -> anyhow::Result<String> {
    let list = api.fetch_events()?;

    if args.clear {
        let deleted = list.clear_all(api)?;
        tracing::debug!(deleted, "event log cleared");
        return Ok("Events are cleared.".to_string());
    }

    let mut out = String::new();
    if list.is_empty() {
        out.push_str("n/a\n");
    }
    out.push_str(&list.render());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use admiral_client::{Event, EventList};
    use admiral_common::error::{AdmiralError, Result};
    use admiral_common::types::EventLogType;

    use super::*;

    #[derive(Default)]
    struct FakeEvents {
        events: Vec<Event>,
        fail_delete: bool,
        deleted: RefCell<Vec<String>>,
    }

    impl EventsApi for FakeEvents {
        fn fetch_events(&self) -> Result<EventList> {
            Ok(EventList::new(self.events.clone()))
        }

        fn delete_event(&self, link: &str) -> Result<()> {
            if self.fail_delete {
                return Err(AdmiralError::Http {
                    method: "DELETE",
                    url: link.to_string(),
                    status: 403,
                });
            }
            self.deleted.borrow_mut().push(link.to_string());
            Ok(())
        }
    }

    fn sample() -> FakeEvents {
        FakeEvents {
            events: vec![
                Event {
                    document_self_link: "/resources/event-logs/1".into(),
                    event_log_type: EventLogType::Error,
                    resource_type: "Container".into(),
                    description: "Allocation failed".into(),
                    document_update_time_micros: 0,
                },
                Event {
                    document_self_link: "/resources/event-logs/2".into(),
                    description: "Host added".into(),
                    ..Event::default()
                },
            ],
            ..FakeEvents::default()
        }
    }

    #[test]
    fn events_empty_log_prints_na_and_header() {
        let out = execute(&FakeEvents::default(), &EventsArgs::default()).expect("events");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "n/a");
        assert!(lines[1].starts_with("TIME"));
    }

    #[test]
    fn events_lists_every_event_without_na() {
        let out = execute(&sample(), &EventsArgs::default()).expect("events");
        assert!(!out.contains("n/a"));
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("Allocation failed"));
        assert!(out.contains("ERROR"));
    }

    #[test]
    fn events_clear_deletes_all_and_prints_nothing_else() {
        let api = sample();
        let out = execute(&api, &EventsArgs { clear: true }).expect("clear");
        assert_eq!(out, "Events are cleared.");
        assert_eq!(
            *api.deleted.borrow(),
            vec!["/resources/event-logs/1", "/resources/event-logs/2"]
        );
    }

    #[test]
    fn events_clear_propagates_delete_failure() {
        let api = FakeEvents {
            fail_delete: true,
            ..sample()
        };
        assert!(execute(&api, &EventsArgs { clear: true }).is_err());
    }
}
