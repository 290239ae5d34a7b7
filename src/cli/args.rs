use clap::{Parser, Subcommand};

use crate::api::ResourceKind;
use crate::config::{BackendKind, ResolveOptions};

#[derive(Parser, Debug)]
#[command(name = "dbz")]
#[command(about = "Dragon Ball Z explorer: browse the Dragon Ball API from the terminal")]
#[command(version)]
pub struct Args {
    /// API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Show descriptions without translating them
    #[arg(short = 'n', long, global = true)]
    pub no_translate: bool,

    /// Translation backend
    #[arg(short = 'b', long, global = true, value_enum)]
    pub backend: Option<BackendKind>,

    /// Provider name for the openai backend
    #[arg(short = 'p', long, global = true)]
    pub provider: Option<String>,

    /// Model name for the openai backend
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// CLI overrides for [`crate::config::resolve_config`].
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
            no_translate: self.no_translate,
            backend: self.backend,
            provider: self.provider.clone(),
            model: self.model.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Browse resources interactively (the default)
    Explore,
    /// List resource kinds and their aliases
    Kinds,
    /// Fetch every record of a kind
    List {
        /// Resource kind (name, plural or alias)
        kind: ResourceKind,

        /// Fetch only these resource URLs instead of the whole collection
        #[arg(long = "url", value_name = "URL")]
        urls: Vec<String>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the full record of one resource
    Show {
        /// Resource kind (name, plural or alias)
        kind: ResourceKind,

        /// Resource id
        id: u64,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the transformations of a character
    Transformations {
        /// Character id
        character_id: u64,

        /// Print transformations as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the translation cache location and size
    Cache {
        /// Delete the cache file
        #[arg(long)]
        clear: bool,
    },
    /// Configure API and translation defaults
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["dbz"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.no_translate);
    }

    #[test]
    fn test_list_with_alias_and_urls() {
        let args = Args::try_parse_from([
            "dbz",
            "list",
            "c",
            "--url",
            "https://dragonball-api.com/api/characters/1",
            "--url",
            "characters/2",
        ])
        .unwrap();

        assert_eq!(
            args.command,
            Some(Command::List {
                kind: ResourceKind::Character,
                urls: vec![
                    "https://dragonball-api.com/api/characters/1".to_string(),
                    "characters/2".to_string()
                ],
                json: false,
            })
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(Args::try_parse_from(["dbz", "list", "villains"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "dbz", "show", "planet", "3", "--no-translate", "--timeout", "5", "-b", "openai",
        ])
        .unwrap();

        let options = args.resolve_options();
        assert!(options.no_translate);
        assert_eq!(options.timeout_secs, Some(5));
        assert_eq!(options.backend, Some(BackendKind::OpenAi));
    }
}
