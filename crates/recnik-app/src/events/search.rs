use recnik_core::Host;

use crate::state::AppState;

pub(super) fn handle(state: &AppState, ui: &mut dyn Host, query: &str) {
    match state.glossary.search(query) {
        Ok(hits) => {
            ui.clear_results();
            ui.render_results(query.trim(), &hits);
        }
        Err(e) => ui.notify(&e.to_string()),
    }
}
