use anyhow::Result;
use log::debug;
use std::time::Duration;

use crate::api::ApiClient;
use crate::cache::{JsonFileStorage, Passthrough, Translate, TranslationCache};
use crate::config::{BackendConfig, ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::translation::{GoogleBackend, OpenAiBackend, TranslationBackend};

type CachedTranslator = TranslationCache<Box<dyn TranslationBackend>, JsonFileStorage>;

/// Description translator chosen by configuration.
pub enum Translator {
    Cached(CachedTranslator),
    Disabled(Passthrough),
}

impl Translator {
    /// Builds the translator for `backend`, or a passthrough when `None`.
    pub fn from_config(backend: Option<&BackendConfig>, timeout: Duration) -> Result<Self> {
        let Some(backend) = backend else {
            debug!("translation disabled");
            return Ok(Self::Disabled(Passthrough));
        };

        let backend: Box<dyn TranslationBackend> = match backend {
            BackendConfig::Google { endpoint } => Box::new(GoogleBackend::new(endpoint, timeout)?),
            BackendConfig::OpenAi {
                endpoint,
                model,
                api_key,
                ..
            } => Box::new(OpenAiBackend::new(
                endpoint.clone(),
                model.clone(),
                api_key.clone(),
                timeout,
            )?),
        };

        let storage = JsonFileStorage::default_location()?;
        debug!(
            "translating with {} backend, cache at {}",
            backend.name(),
            storage.path().display()
        );
        Ok(Self::Cached(TranslationCache::open(backend, storage)))
    }

    /// Persists pending cache entries.
    pub fn shutdown(self) {
        if let Self::Cached(cache) = self {
            cache.shutdown();
        }
    }
}

impl Translate for Translator {
    fn translate(&mut self, text: &str) -> String {
        match self {
            Self::Cached(cache) => cache.translate(text),
            Self::Disabled(passthrough) => passthrough.translate(text),
        }
    }
}

/// API client plus translator shared by the fetching commands.
pub struct AppContext {
    pub client: ApiClient,
    pub translator: Translator,
}

impl AppContext {
    /// Resolves configuration from CLI options and the config file.
    pub fn load(options: &ResolveOptions) -> Result<Self> {
        let manager = ConfigManager::new()?;
        let config_file = manager.load_or_default()?;
        let resolved = resolve_config(options, &config_file)?;
        Self::from_resolved(&resolved)
    }

    pub fn from_resolved(resolved: &ResolvedConfig) -> Result<Self> {
        let client = ApiClient::connect(&resolved.base_url, resolved.timeout)?;
        let translator = Translator::from_config(resolved.translation.as_ref(), resolved.timeout)?;
        Ok(Self { client, translator })
    }

    /// Runs `f` and flushes the translation cache whether or not it succeeds.
    pub fn run<R>(self, f: impl FnOnce(&ApiClient, &mut Translator) -> Result<R>) -> Result<R> {
        let Self {
            client,
            mut translator,
        } = self;
        let result = f(&client, &mut translator);
        translator.shutdown();
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cache::CacheStorage;
    use tempfile::TempDir;

    #[test]
    fn test_disabled_translator_passes_text_through() {
        let mut translator = Translator::from_config(None, Duration::from_secs(1)).unwrap();
        assert!(matches!(translator, Translator::Disabled(_)));
        assert_eq!(translator.translate("Hola mundo"), "Hola mundo");
        translator.shutdown();
    }

    struct Echo;

    impl TranslationBackend for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn translate(&self, text: &str) -> Result<String> {
            Ok(format!("en:{text}"))
        }
    }

    #[test]
    fn test_run_flushes_cache_when_closure_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("translation_cache.json");
        let backend: Box<dyn TranslationBackend> = Box::new(Echo);
        let context = AppContext {
            client: ApiClient::connect("http://127.0.0.1:9/api", Duration::from_secs(1)).unwrap(),
            translator: Translator::Cached(TranslationCache::open(
                backend,
                JsonFileStorage::new(&path),
            )),
        };

        let result: Result<()> = context.run(|_, translator| {
            translator.translate("Guerrero legendario");
            anyhow::bail!("fetch failed")
        });

        assert!(result.is_err());
        let saved = JsonFileStorage::new(&path).load().unwrap();
        assert_eq!(
            saved.get("Guerrero legendario").map(String::as_str),
            Some("en:Guerrero legendario")
        );
    }

    #[test]
    fn test_run_returns_closure_result() {
        let resolved = ResolvedConfig {
            base_url: "http://127.0.0.1:9/api".to_string(),
            timeout: Duration::from_secs(1),
            translation: None,
        };
        let context = AppContext::from_resolved(&resolved).unwrap();
        let base = context
            .run(|client, _| Ok(client.base_url().to_string()))
            .unwrap();
        assert_eq!(base, "http://127.0.0.1:9/api/");
    }
}
