//! Interactive explorer.
//!
//! A prompt with `:kind` commands that opens record menus; Enter drills into
//! a record's details and its relations, Escape goes back.

/// Command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::Explorer;
