//! # admiral-client
//!
//! Blocking REST client for the Admiral control plane.
//!
//! [`client::AdmiralClient`] owns the HTTP plumbing. The
//! [`properties::CustomPropertiesApi`] and [`events::EventsApi`] traits are
//! the seams the CLI talks through, so commands can be exercised against
//! in-memory fakes.

pub mod client;
pub mod document;
pub mod events;
pub mod properties;

pub use client::AdmiralClient;
pub use events::{Event, EventList, EventsApi};
pub use properties::CustomPropertiesApi;
