//! # dbz - Dragon Ball Z Explorer
//!
//! `dbz` browses the public Dragon Ball API from the terminal. Characters,
//! transformations, planets, sagas and episodes can be listed and inspected,
//! with Spanish descriptions translated to English through a persistent cache.
//!
//! ## Features
//!
//! - **Interactive explorer**: `:character`, `:planet`, ... commands with drill-down
//! - **Pagination**: Follows the API's `links.next` until the last page
//! - **Translation cache**: Descriptions are translated once and kept on disk
//! - **Pluggable backends**: Google Translate or any OpenAI-compatible provider
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive explorer
//! dbz
//!
//! # Every planet, without translation
//! dbz list planet --no-translate
//!
//! # One character as JSON
//! dbz show character 1 --json
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/dbz/config.toml`:
//!
//! ```toml
//! [api]
//! base_url = "https://dragonball-api.com/api/"
//! timeout_secs = 30
//!
//! [translation]
//! backend = "openai"
//! provider = "ollama"
//! model = "gemma3:12b"
//!
//! [providers.ollama]
//! endpoint = "http://localhost:11434"
//! models = ["gemma3:12b"]
//! ```

/// Dragon Ball API client: resource registry, records and pagination.
pub mod api;

/// Persistent translation cache.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Interactive explorer session.
pub mod explorer;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet mode, colors, logging).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Translation backends (Google Translate, OpenAI-compatible).
pub mod translation;

/// Terminal UI components (spinner, colors, record printing).
pub mod ui;
