use inquire::autocompletion::{Autocomplete, Replacement};

use crate::api::ResourceKind;

/// Non-resource menu commands: (command, description)
const MENU_COMMANDS: &[(&str, &str)] = &[
    (":help", "Show available commands"),
    (":quit", "Exit the explorer"),
];

/// Every `:command` with its description, resource kinds first.
pub fn command_list() -> Vec<(String, String)> {
    ResourceKind::ALL
        .iter()
        .map(|kind| (format!(":{}", kind.name()), format!("List {}", kind.endpoint())))
        .chain(
            MENU_COMMANDS
                .iter()
                .map(|(cmd, desc)| ((*cmd).to_string(), (*desc).to_string())),
        )
        .collect()
}

/// `:command` autocompleter
#[derive(Clone, Default)]
pub struct CommandCompleter;

impl Autocomplete for CommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with(':') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = command_list()
            .into_iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Explorer commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    /// List a kind, optionally restricted to direct resource links.
    List {
        kind: ResourceKind,
        links: Vec<String>,
    },
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Command(MenuCommand),
    Empty,
}

/// Parses a prompt line. The leading `:` is optional.
pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    let command = input.strip_prefix(':').unwrap_or(input);
    let mut parts = command.split_whitespace();

    let parsed = match parts.next() {
        Some("help" | "h" | "?") => MenuCommand::Help,
        Some("quit" | "exit" | "q") => MenuCommand::Quit,
        Some(word) => match word.parse::<ResourceKind>() {
            Ok(kind) => MenuCommand::List {
                kind,
                links: parts.map(str::to_string).collect(),
            },
            Err(_) => MenuCommand::Unknown(command.to_string()),
        },
        None => MenuCommand::Unknown(String::new()),
    };

    Input::Command(parsed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn list(kind: ResourceKind) -> Input {
        Input::Command(MenuCommand::List {
            kind,
            links: vec![],
        })
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   "), Input::Empty);
    }

    #[test]
    fn test_parse_kind_by_name_and_alias() {
        assert_eq!(parse_input(":character"), list(ResourceKind::Character));
        assert_eq!(parse_input(":c"), list(ResourceKind::Character));
        assert_eq!(parse_input(":t"), list(ResourceKind::Transformation));
        assert_eq!(parse_input("planet"), list(ResourceKind::Planet));
        assert_eq!(parse_input(":sagas"), list(ResourceKind::Saga));
    }

    #[test]
    fn test_parse_kind_with_links() {
        assert_eq!(
            parse_input(":character https://dragonball-api.com/api/characters/1 characters/2"),
            Input::Command(MenuCommand::List {
                kind: ResourceKind::Character,
                links: vec![
                    "https://dragonball-api.com/api/characters/1".to_string(),
                    "characters/2".to_string(),
                ],
            })
        );
    }

    #[test]
    fn test_parse_help_and_quit() {
        assert_eq!(parse_input(":help"), Input::Command(MenuCommand::Help));
        assert_eq!(parse_input(":quit"), Input::Command(MenuCommand::Quit));
        assert_eq!(parse_input(":exit"), Input::Command(MenuCommand::Quit));
        assert_eq!(parse_input(":q"), Input::Command(MenuCommand::Quit));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input(":villain frieza"),
            Input::Command(MenuCommand::Unknown("villain frieza".to_string()))
        );
        assert_eq!(
            parse_input(":"),
            Input::Command(MenuCommand::Unknown(String::new()))
        );
    }

    #[test]
    fn test_command_list_covers_every_kind() {
        let commands = command_list();
        assert_eq!(commands.len(), ResourceKind::ALL.len() + MENU_COMMANDS.len());
        assert_eq!(commands[0].0, ":character");
    }

    // CommandCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = CommandCompleter;
        assert!(completer.get_suggestions("goku").unwrap().is_empty());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = CommandCompleter;

        assert_eq!(completer.get_suggestions(":").unwrap().len(), 7);

        let suggestions = completer.get_suggestions(":p").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with(":planet"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = CommandCompleter;
        let suggestion = ":episode  List episodes".to_string();
        let completion = completer.get_completion(":e", Some(suggestion)).unwrap();
        assert_eq!(completion, Some(":episode".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = CommandCompleter;
        assert!(completer.get_completion(":x", None).unwrap().is_none());
    }
}
