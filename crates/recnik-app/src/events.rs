use std::ops::ControlFlow;

use recnik_core::Host;
use recnik_types::AppEvent;

use crate::state::AppState;

mod add_entry;
mod search;

pub const USAGE: &str =
    "commands: add <term> : <translation> | find <query> | clear | count | quit";

/// Map one input line to an event. `None` means blank or unrecognized;
/// argument validation stays in the core, so `add` and `find` parse even
/// with empty arguments.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "add" => {
            // Same first-colon split as the file format.
            let (term, translation) = rest.split_once(':').unwrap_or((rest, ""));
            Some(AppEvent::AddEntry {
                term: term.trim().to_string(),
                translation: translation.trim().to_string(),
            })
        }
        "find" | "search" => Some(AppEvent::Search(rest.to_string())),
        "clear" => Some(AppEvent::Clear),
        "count" => Some(AppEvent::Count),
        "quit" | "exit" => Some(AppEvent::Quit),
        _ => None,
    }
}

pub fn dispatch(state: &mut AppState, ui: &mut dyn Host, event: AppEvent) -> ControlFlow<()> {
    match event {
        AppEvent::AddEntry { term, translation } => {
            add_entry::handle(state, ui, &term, &translation);
        }
        AppEvent::Search(query) => search::handle(state, ui, &query),
        AppEvent::Clear => ui.clear_results(),
        AppEvent::Count => {
            let count = state.glossary.len();
            let noun = if count == 1 { "entry" } else { "entries" };
            ui.notify(&format!("{count} {noun}"));
        }
        AppEvent::Quit => return ControlFlow::Break(()),
    }

    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_colon_delimiter() {
        assert_eq!(
            parse_command("add pas : dog"),
            Some(AppEvent::AddEntry {
                term: "pas".to_string(),
                translation: "dog".to_string(),
            })
        );
    }

    #[test]
    fn add_without_colon_leaves_translation_empty() {
        // The core rejects it; parsing never does.
        assert_eq!(
            parse_command("add pas"),
            Some(AppEvent::AddEntry {
                term: "pas".to_string(),
                translation: String::new(),
            })
        );
    }

    #[test]
    fn translation_keeps_text_after_first_colon() {
        assert_eq!(
            parse_command("add vreme:time: weather"),
            Some(AppEvent::AddEntry {
                term: "vreme".to_string(),
                translation: "time: weather".to_string(),
            })
        );
    }

    #[test]
    fn parses_search_aliases() {
        assert_eq!(
            parse_command("find dog"),
            Some(AppEvent::Search("dog".to_string()))
        );
        assert_eq!(
            parse_command("search мачка"),
            Some(AppEvent::Search("мачка".to_string()))
        );
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!(parse_command("clear"), Some(AppEvent::Clear));
        assert_eq!(parse_command("count"), Some(AppEvent::Count));
        assert_eq!(parse_command("quit"), Some(AppEvent::Quit));
        assert_eq!(parse_command("exit"), Some(AppEvent::Quit));
    }

    #[test]
    fn blank_and_unknown_lines_are_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("frobnicate now"), None);
    }
}
