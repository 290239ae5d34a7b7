//! Configuration file management and resolution.

mod manager;

pub use manager::{
    ApiConfig, BackendConfig, BackendKind, ConfigFile, ConfigManager, ProviderConfig,
    ResolveOptions, ResolvedConfig, TranslationConfig, resolve_config,
};
