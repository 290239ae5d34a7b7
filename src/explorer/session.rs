use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Select, Text};
use std::fmt;

use super::command::{CommandCompleter, Input, MenuCommand, parse_input};
use super::ui;
use crate::api::{ApiClient, FetchContext, RelationBinding, Resource, ResourceKind, Transport};
use crate::cache::Translate;
use crate::ui::{Spinner, is_prompt_cancelled, print_error, print_record, print_transformations};

/// Menu entry wrapping a record so the selection hands it back.
struct RecordEntry<'r>(&'r Resource);

impl fmt::Display for RecordEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.summary())
    }
}

/// Action offered after showing a record's details.
enum DetailAction {
    Relation(RelationBinding),
    Back,
}

impl fmt::Display for DetailAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relation(binding) => write!(f, "[{}] {}", binding.key, binding.label),
            Self::Back => f.write_str("Back"),
        }
    }
}

/// Escape goes one level up; Ctrl+C leaves the explorer.
const fn is_back(err: &InquireError) -> bool {
    matches!(err, InquireError::OperationCanceled)
}

/// An interactive browsing session over the API.
///
/// Hard fetch failures are reported on screen and the session carries on.
pub struct Explorer<'a, T, Tr: ?Sized> {
    client: &'a ApiClient<T>,
    translator: &'a mut Tr,
}

impl<'a, T: Transport, Tr: Translate + ?Sized> Explorer<'a, T, Tr> {
    pub const fn new(client: &'a ApiClient<T>, translator: &'a mut Tr) -> Self {
        Self { client, translator }
    }

    pub fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        let mut pending = Some(MenuCommand::List {
            kind: ResourceKind::DEFAULT,
            links: Vec::new(),
        });

        loop {
            let command = match pending.take() {
                Some(command) => command,
                None => {
                    let input = Text::new("")
                        .with_render_config(render_config)
                        .with_autocomplete(CommandCompleter)
                        .with_help_message(":<kind> to list, :help for commands, Ctrl+C to quit")
                        .prompt();

                    match input {
                        Ok(line) => match parse_input(&line) {
                            Input::Empty => MenuCommand::List {
                                kind: ResourceKind::DEFAULT,
                                links: Vec::new(),
                            },
                            Input::Command(command) => command,
                        },
                        Err(e) if is_prompt_cancelled(&e) => {
                            println!();
                            break;
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
            };

            let outcome = match command {
                MenuCommand::List { kind, links } => {
                    let context = (!links.is_empty())
                        .then(|| FetchContext::new().with_links(kind, links));
                    self.browse(kind, context.as_ref(), render_config)
                }
                MenuCommand::Help => {
                    ui::print_help();
                    Ok(())
                }
                MenuCommand::Quit => break,
                MenuCommand::Unknown(cmd) => {
                    print_error(&format!("Unknown command: :{cmd} (try :help)"));
                    Ok(())
                }
            };

            match outcome {
                Ok(()) => {}
                Err(e)
                    if e.downcast_ref::<InquireError>()
                        .is_some_and(is_prompt_cancelled) =>
                {
                    println!();
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Lists `kind` and lets the user drill into records until Escape.
    fn browse(
        &mut self,
        kind: ResourceKind,
        context: Option<&FetchContext>,
        render_config: RenderConfig<'_>,
    ) -> Result<()> {
        let client = self.client;
        let translator = &mut *self.translator;
        let fetched = Spinner::wrap(&format!("Fetching {}...", kind.endpoint()), || {
            client.fetch_all(kind, context, translator)
        });

        let records = match fetched {
            Ok(records) => records,
            Err(e) => {
                print_error(&e.to_string());
                return Ok(());
            }
        };

        if records.is_empty() {
            println!("No {} found.\n", kind.endpoint());
            return Ok(());
        }

        let mut cursor = 0;
        loop {
            let entries: Vec<RecordEntry<'_>> = records.iter().map(RecordEntry).collect();
            let selection = Select::new(&format!("{} ({})", kind.endpoint(), records.len()), entries)
                .with_render_config(render_config)
                .with_starting_cursor(cursor)
                .with_help_message("Enter to drill in, type to filter, Escape to go back")
                .prompt();

            match selection {
                Ok(RecordEntry(record)) => {
                    cursor = records
                        .iter()
                        .position(|r| r.id() == record.id())
                        .unwrap_or(0);
                    self.drill_in(record, render_config)?;
                }
                Err(e) if is_back(&e) => return Ok(()),
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn drill_in(&mut self, record: &Resource, render_config: RenderConfig<'_>) -> Result<()> {
        let client = self.client;
        let translator = &mut *self.translator;
        let detail = match Spinner::wrap("Loading details...", || {
            client.get_details(record, translator)
        }) {
            Ok(detail) => detail,
            Err(e) => {
                print_error(&e.to_string());
                return Ok(());
            }
        };

        print_record(&detail);

        let relations = detail.kind().relations();
        if relations.is_empty() {
            return Ok(());
        }

        loop {
            let actions: Vec<DetailAction> = relations
                .iter()
                .copied()
                .map(DetailAction::Relation)
                .chain(std::iter::once(DetailAction::Back))
                .collect();

            let choice = Select::new(detail.name(), actions)
                .with_render_config(render_config)
                .with_help_message("Escape to go back")
                .prompt();

            match choice {
                Ok(DetailAction::Relation(binding)) => self.open_relation(&detail, binding),
                Ok(DetailAction::Back) => return Ok(()),
                Err(e) if is_back(&e) => return Ok(()),
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn open_relation(&self, record: &Resource, binding: RelationBinding) {
        match (record, binding.target) {
            (Resource::Character(character), ResourceKind::Transformation) => {
                let transformations = Spinner::wrap("Fetching transformations...", || {
                    self.client.get_related(character)
                });
                print_transformations(&character.name, &transformations);
            }
            _ => print_error(&format!(
                "{} has no {}",
                record.kind(),
                binding.target.endpoint()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_action_labels() {
        let binding = ResourceKind::Character.relations()[0];
        assert_eq!(
            DetailAction::Relation(binding).to_string(),
            "[t] Transformations"
        );
        assert_eq!(DetailAction::Back.to_string(), "Back");
    }

    #[test]
    fn test_escape_goes_back_but_interrupt_does_not() {
        assert!(is_back(&InquireError::OperationCanceled));
        assert!(!is_back(&InquireError::OperationInterrupted));
    }
}
