use anyhow::Result;
use clap::Parser;

use dbz_explorer::cli::commands::{cache, configure, explore, fetch, kinds};
use dbz_explorer::cli::{Args, Command};
use dbz_explorer::output::{self, OutputConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    output::init_logging();

    let options = args.resolve_options();

    match args.command.unwrap_or(Command::Explore) {
        Command::Explore => explore::run_explore(&options)?,
        Command::Kinds => kinds::run_kinds(),
        Command::List { kind, urls, json } => fetch::run_list(&options, kind, urls, json)?,
        Command::Show { kind, id, json } => fetch::run_show(&options, kind, id, json)?,
        Command::Transformations { character_id, json } => {
            fetch::run_transformations(&options, character_id, json)?;
        }
        Command::Cache { clear } => cache::run_cache(clear)?,
        Command::Configure { show } => configure::run_configure(show)?,
    }

    Ok(())
}
