//! One-shot fetch commands that print to stdout and exit.

use anyhow::Result;
use serde::Serialize;

use super::context::AppContext;
use crate::api::{FetchContext, Resource, ResourceKind};
use crate::config::ResolveOptions;
use crate::ui::{Spinner, print_record, print_record_list, print_transformations};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Lists every record of `kind`, or only the records behind `urls`.
pub fn run_list(
    options: &ResolveOptions,
    kind: ResourceKind,
    urls: Vec<String>,
    json: bool,
) -> Result<()> {
    let context = (!urls.is_empty()).then(|| FetchContext::new().with_links(kind, urls));

    let records = AppContext::load(options)?.run(|client, translator| {
        let records = Spinner::wrap(&format!("Fetching {}...", kind.endpoint()), || {
            client.fetch_all(kind, context.as_ref(), translator)
        })?;
        Ok(records)
    })?;

    if json {
        return print_json(&records);
    }

    if records.is_empty() {
        crate::status!("No {} found.", kind.endpoint());
    } else {
        print_record_list(&records);
    }
    Ok(())
}

/// Shows the full record of one resource.
pub fn run_show(options: &ResolveOptions, kind: ResourceKind, id: u64, json: bool) -> Result<()> {
    let record = AppContext::load(options)?.run(|client, translator| {
        let record = Spinner::wrap(&format!("Fetching {kind} #{id}..."), || {
            client.get(kind, id, translator)
        })?;
        Ok(record)
    })?;

    if json {
        print_json(&record)
    } else {
        print_record(&record);
        Ok(())
    }
}

/// Shows the transformations of a character.
pub fn run_transformations(options: &ResolveOptions, character_id: u64, json: bool) -> Result<()> {
    let (name, transformations) = AppContext::load(options)?.run(|client, translator| {
        let record = Spinner::wrap(&format!("Fetching character #{character_id}..."), || {
            client.get(ResourceKind::Character, character_id, translator)
        })?;
        let Resource::Character(character) = record else {
            anyhow::bail!("Resource #{character_id} is not a character");
        };
        let transformations = Spinner::wrap("Fetching transformations...", || {
            client.get_related(&character)
        });
        Ok((character.name, transformations))
    })?;

    if json {
        print_json(&transformations)
    } else {
        print_transformations(&name, &transformations);
        Ok(())
    }
}
