//! Client for the Dragon Ball API.
//!
//! [`ResourceKind`] is the registry of what can be fetched, [`ApiClient`]
//! walks collections, details and relations, and [`Resource`] holds the
//! decoded records.

mod client;
mod context;
mod error;
mod kind;
mod page;
mod record;
mod transport;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use context::FetchContext;
pub use error::FetchError;
pub use kind::{RelationBinding, ResourceKind};
pub use page::{LANGUAGE, Listing, PageCursor};
pub use record::{Character, Episode, Planet, Record, Resource, Saga, Transformation};
pub use transport::{DEFAULT_TIMEOUT_SECS, HttpTransport, Transport};
