use std::io::{self, Write};

use recnik_config::ui::UiConfig;
use recnik_core::Host;
use recnik_types::Entry;

/// Stdout rendition of the presentation capability. Log output goes to
/// stderr, so these lines are the whole user-visible surface.
pub struct TerminalUi {
    config: UiConfig,
}

impl TerminalUi {
    pub fn new(config: UiConfig) -> Self {
        Self { config }
    }
}

impl Host for TerminalUi {
    fn notify(&mut self, message: &str) {
        println!("* {message}");
    }

    fn render_results(&mut self, query: &str, entries: &[Entry]) {
        if entries.is_empty() {
            println!("No results found for '{query}'");
            return;
        }

        let shown = if self.config.max_results == 0 {
            entries.len()
        } else {
            entries.len().min(self.config.max_results)
        };

        for entry in &entries[..shown] {
            println!("{}", entry.term);
            println!("    {}", entry.translation);
        }
        if shown < entries.len() {
            println!("... {} more not shown", entries.len() - shown);
        }
    }

    fn clear_results(&mut self) {
        // Closest a line terminal gets to emptying the results pane.
        print!("\x1B[2J\x1B[H");
        let _ = io::stdout().flush();
    }
}
