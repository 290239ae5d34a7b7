//! Translation memoization.
//!
//! [`TranslationCache`] keeps translated descriptions in memory, backed by a
//! [`CacheStorage`] that persists the whole mapping between runs.

mod memo;
mod storage;

pub use memo::{FLUSH_EVERY, MIN_TRANSLATABLE_CHARS, Passthrough, Translate, TranslationCache};
pub use storage::{CacheStorage, JsonFileStorage};
