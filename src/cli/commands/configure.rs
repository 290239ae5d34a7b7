//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Confirm, CustomType, Select, Text};

use crate::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::config::{BackendKind, ConfigFile, ConfigManager};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current settings; otherwise walks the user
/// through the API and translation defaults and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;

    if show {
        print_current_settings(&config);
        println!(
            "{}",
            Style::hint(format!("Config file: {}", manager.config_path().display()))
        );
        return Ok(());
    }

    handle_prompt_cancellation(|| edit_config(&manager, config))
}

fn edit_config(manager: &ConfigManager, mut config: ConfigFile) -> Result<()> {
    print_current_settings(&config);

    let base_url = Text::new("API base URL:")
        .with_default(config.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
        .prompt()?;
    let base_url = base_url.trim();
    if base_url.is_empty() {
        bail!("Base URL cannot be empty");
    }
    url::Url::parse(base_url).map_err(|e| anyhow::anyhow!("Invalid base URL '{base_url}': {e}"))?;

    let timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;
    if timeout_secs == 0 {
        bail!("Timeout must be greater than zero");
    }

    let enabled = Confirm::new("Translate descriptions to English?")
        .with_default(config.translation.enabled.unwrap_or(true))
        .prompt()?;

    config.api.base_url = Some(base_url.to_string());
    config.api.timeout_secs = Some(timeout_secs);
    config.translation.enabled = Some(enabled);

    if enabled {
        let backend = select_backend(config.translation.backend.unwrap_or_default())?;
        config.translation.backend = Some(backend);

        if backend == BackendKind::OpenAi {
            let provider_names = sorted_provider_names(&config);
            if provider_names.is_empty() {
                bail!(
                    "No providers configured.\n\n\
                     Add a [providers.<name>] section to {} first.",
                    manager.config_path().display()
                );
            }
            let provider =
                select_provider(&provider_names, config.translation.provider.as_deref())?;
            let available_models = config
                .providers
                .get(&provider)
                .map(|p| p.models.clone())
                .unwrap_or_default();
            let model = select_model(&available_models, config.translation.model.as_deref())?;

            config.translation.provider = Some(provider);
            config.translation.model = Some(model);
        }
    }

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn sorted_provider_names(config: &ConfigFile) -> Vec<String> {
    let mut names: Vec<String> = config.providers.keys().cloned().collect();
    names.sort();
    names
}

fn not_set() -> String {
    Style::secondary("(not set)")
}

fn print_current_settings(config: &ConfigFile) {
    let api = &config.api;
    let translation = &config.translation;

    println!("{}", Style::header("Current settings"));
    println!(
        "  {}  {}",
        Style::label("base_url"),
        api.base_url.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("timeout"),
        api.timeout_secs
            .map_or_else(not_set, |secs| Style::value(format!("{secs}s")))
    );
    println!(
        "  {} {}",
        Style::label("translate"),
        translation.enabled.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("backend"),
        translation
            .backend
            .map_or_else(not_set, |b| Style::value(backend_name(b)))
    );
    println!(
        "  {}  {}",
        Style::label("provider"),
        translation.provider.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        translation.model.as_deref().map_or_else(not_set, Style::value)
    );
    println!();
}

const fn backend_name(backend: BackendKind) -> &'static str {
    match backend {
        BackendKind::Google => "google",
        BackendKind::OpenAi => "openai",
    }
}

fn select_backend(default: BackendKind) -> Result<BackendKind> {
    let options = vec!["google", "openai"];
    let default_index = usize::from(default == BackendKind::OpenAi);

    let selection = Select::new("Translation backend:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(if selection == "openai" {
        BackendKind::OpenAi
    } else {
        BackendKind::Google
    })
}

fn select_provider(providers: &[String], default: Option<&str>) -> Result<String> {
    let default_index = default
        .and_then(|d| providers.iter().position(|p| p == d))
        .unwrap_or(0);

    let selection = Select::new("Provider:", providers.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn select_model(available_models: &[String], default: Option<&str>) -> Result<String> {
    if available_models.is_empty() {
        let mut prompt = Text::new("Model:").with_help_message("Enter the model name");

        if let Some(d) = default {
            prompt = prompt.with_default(d);
        }

        let model = prompt.prompt()?;

        if model.trim().is_empty() {
            bail!("Model name cannot be empty");
        }

        Ok(model.trim().to_string())
    } else {
        let default_index = default
            .and_then(|d| available_models.iter().position(|m| m == d))
            .unwrap_or(0);

        let selection = Select::new("Model:", available_models.to_vec())
            .with_starting_cursor(default_index)
            .prompt()?;

        Ok(selection)
    }
}
