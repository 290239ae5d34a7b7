//! Subcommand implementations.

/// Translation cache inspection.
pub mod cache;

/// Configure command handler.
pub mod configure;

/// Shared API client and translator setup.
pub mod context;

/// Interactive explorer command handler.
pub mod explore;

/// Resource kind listing.
pub mod kinds;

/// One-shot fetch commands (`list`, `show`, `transformations`).
pub mod fetch;
