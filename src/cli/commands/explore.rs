use anyhow::Result;

use super::context::AppContext;
use crate::config::ResolveOptions;
use crate::explorer::Explorer;

/// Starts the interactive explorer, flushing the translation cache on exit.
pub fn run_explore(options: &ResolveOptions) -> Result<()> {
    AppContext::load(options)?.run(|client, translator| Explorer::new(client, translator).run())
}
