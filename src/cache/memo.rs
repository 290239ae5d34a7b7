use log::{debug, warn};
use lru::LruCache;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use super::storage::CacheStorage;
use crate::translation::TranslationBackend;

/// Texts shorter than this many characters are never translated.
pub const MIN_TRANSLATABLE_CHARS: usize = 5;

/// Number of new entries between two automatic flushes.
pub const FLUSH_EVERY: usize = 10;

#[allow(clippy::unwrap_used)]
const MEMO_CAPACITY: NonZeroUsize = NonZeroUsize::new(1000).unwrap();

/// Turns source text into display text.
///
/// Implementations never fail: when translation is impossible they hand back
/// the input.
pub trait Translate {
    fn translate(&mut self, text: &str) -> String;
}

/// Leaves text untouched. Used when translation is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Translate for Passthrough {
    fn translate(&mut self, text: &str) -> String {
        text.to_string()
    }
}

/// Memoizing front for a [`TranslationBackend`].
///
/// Lookups go through a bounded LRU memo, then the full persisted mapping,
/// and only then the backend. Successful backend results are recorded and
/// the mapping is written back every [`FLUSH_EVERY`] new entries. The value
/// is created once with [`TranslationCache::open`] and must be closed with
/// [`TranslationCache::shutdown`] to persist the tail of the session.
pub struct TranslationCache<B, S> {
    backend: B,
    storage: S,
    entries: BTreeMap<String, String>,
    memo: LruCache<String, String>,
    inserted: usize,
}

impl<B: TranslationBackend, S: CacheStorage> TranslationCache<B, S> {
    /// Loads the persisted mapping. Unreadable storage yields an empty cache.
    pub fn open(backend: B, storage: S) -> Self {
        let entries = match storage.load() {
            Ok(entries) => {
                debug!("Loaded {} cached translations", entries.len());
                entries
            }
            Err(e) => {
                warn!("Ignoring unreadable translation cache: {e:#}");
                BTreeMap::new()
            }
        };

        Self {
            backend,
            storage,
            entries,
            memo: LruCache::new(MEMO_CAPACITY),
            inserted: 0,
        }
    }

    /// Translates `text`, falling back to the input on backend failure.
    pub fn translate(&mut self, text: &str) -> String {
        if text.chars().count() < MIN_TRANSLATABLE_CHARS {
            return text.to_string();
        }

        if let Some(hit) = self.memo.get(text) {
            return hit.clone();
        }

        if let Some(hit) = self.entries.get(text) {
            let hit = hit.clone();
            self.memo.put(text.to_string(), hit.clone());
            return hit;
        }

        match self.backend.translate(text) {
            Ok(translated) => {
                self.insert(text, translated.clone());
                translated
            }
            Err(e) => {
                warn!(
                    "Translation via {} failed, keeping original text: {e:#}",
                    self.backend.name()
                );
                text.to_string()
            }
        }
    }

    fn insert(&mut self, text: &str, translated: String) {
        self.memo.put(text.to_string(), translated.clone());
        self.entries.insert(text.to_string(), translated);
        self.inserted += 1;

        if self.inserted % FLUSH_EVERY == 0 {
            self.flush();
        }
    }

    /// Writes the whole mapping to storage. Failures are logged, not returned.
    pub fn flush(&self) {
        match self.storage.save(&self.entries) {
            Ok(()) => debug!("Saved {} cached translations", self.entries.len()),
            Err(e) => warn!("Failed to save translation cache: {e:#}"),
        }
    }

    /// Final flush. Never fails so it cannot block process exit.
    pub fn shutdown(self) {
        self.flush();
    }

    /// Cached translation for `text`, without calling the backend.
    pub fn get(&self, text: &str) -> Option<&str> {
        self.entries.get(text).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries added by the backend since [`TranslationCache::open`].
    pub const fn inserted(&self) -> usize {
        self.inserted
    }
}

impl<B: TranslationBackend, S: CacheStorage> Translate for TranslationCache<B, S> {
    fn translate(&mut self, text: &str) -> String {
        Self::translate(self, text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct CountingBackend {
        calls: Rc<Cell<usize>>,
        fail: bool,
    }

    impl TranslationBackend for CountingBackend {
        fn name(&self) -> &str {
            "counting"
        }

        fn translate(&self, text: &str) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                bail!("backend unavailable");
            }
            Ok(format!("EN:{text}"))
        }
    }

    #[derive(Default)]
    struct MemoryStorage {
        initial: BTreeMap<String, String>,
        saves: Rc<RefCell<Vec<BTreeMap<String, String>>>>,
        broken: bool,
    }

    impl CacheStorage for MemoryStorage {
        fn load(&self) -> Result<BTreeMap<String, String>> {
            if self.broken {
                bail!("corrupt");
            }
            Ok(self.initial.clone())
        }

        fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
            self.saves.borrow_mut().push(entries.clone());
            if self.broken {
                bail!("read-only");
            }
            Ok(())
        }
    }

    #[test]
    fn test_short_text_is_not_translated() {
        let backend = CountingBackend::default();
        let calls = Rc::clone(&backend.calls);
        let mut cache = TranslationCache::open(backend, MemoryStorage::default());

        assert_eq!(cache.translate(""), "");
        assert_eq!(cache.translate("Goku"), "Goku");
        // Character count, not byte count
        assert_eq!(cache.translate("Señó"), "Señó");

        assert_eq!(calls.get(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_five_characters_are_translated() {
        let mut cache = TranslationCache::open(CountingBackend::default(), MemoryStorage::default());

        assert_eq!(cache.translate("Hola!"), "EN:Hola!");
    }

    #[test]
    fn test_repeated_text_hits_cache() {
        let backend = CountingBackend::default();
        let calls = Rc::clone(&backend.calls);
        let mut cache = TranslationCache::open(backend, MemoryStorage::default());

        let first = cache.translate("Guerrero Saiyajin");
        let second = cache.translate("Guerrero Saiyajin");

        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.get("Guerrero Saiyajin"), Some("EN:Guerrero Saiyajin"));
    }

    #[test]
    fn test_loaded_entries_skip_backend() {
        let backend = CountingBackend::default();
        let calls = Rc::clone(&backend.calls);
        let mut storage = MemoryStorage::default();
        storage
            .initial
            .insert("Planeta Tierra".to_string(), "Planet Earth".to_string());
        let mut cache = TranslationCache::open(backend, storage);

        assert_eq!(cache.translate("Planeta Tierra"), "Planet Earth");
        assert_eq!(calls.get(), 0);
        assert_eq!(cache.inserted(), 0);
    }

    #[test]
    fn test_backend_failure_returns_original_and_caches_nothing() {
        let backend = CountingBackend {
            fail: true,
            ..CountingBackend::default()
        };
        let calls = Rc::clone(&backend.calls);
        let mut cache = TranslationCache::open(backend, MemoryStorage::default());

        assert_eq!(cache.translate("Sin traducción"), "Sin traducción");
        assert!(cache.is_empty());

        // Not memoized, so the backend is retried
        cache.translate("Sin traducción");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_unreadable_storage_starts_empty() {
        let storage = MemoryStorage {
            broken: true,
            ..MemoryStorage::default()
        };
        let cache = TranslationCache::open(CountingBackend::default(), storage);

        assert!(cache.is_empty());
    }

    #[test]
    fn test_flush_every_tenth_insert() {
        let storage = MemoryStorage::default();
        let saves = Rc::clone(&storage.saves);
        let mut cache = TranslationCache::open(CountingBackend::default(), storage);

        for i in 0..9 {
            cache.translate(&format!("descripción {i}"));
        }
        assert_eq!(saves.borrow().len(), 0);

        cache.translate("descripción 9");
        assert_eq!(saves.borrow().len(), 1);
        assert_eq!(saves.borrow()[0].len(), 10);

        for i in 10..19 {
            cache.translate(&format!("descripción {i}"));
        }
        assert_eq!(saves.borrow().len(), 1);
    }

    #[test]
    fn test_cache_hits_do_not_count_toward_flush() {
        let storage = MemoryStorage::default();
        let saves = Rc::clone(&storage.saves);
        let mut cache = TranslationCache::open(CountingBackend::default(), storage);

        for _ in 0..20 {
            cache.translate("la misma descripción");
        }

        assert_eq!(cache.inserted(), 1);
        assert!(saves.borrow().is_empty());
    }

    #[test]
    fn test_shutdown_flushes_and_swallows_errors() {
        let storage = MemoryStorage {
            broken: true,
            ..MemoryStorage::default()
        };
        let saves = Rc::clone(&storage.saves);
        let mut cache = TranslationCache::open(CountingBackend::default(), storage);
        cache.translate("Una descripción");

        cache.shutdown();

        assert_eq!(saves.borrow().len(), 1);
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(Passthrough.translate("Hola mundo"), "Hola mundo");
    }
}
