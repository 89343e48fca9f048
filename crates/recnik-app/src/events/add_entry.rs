use recnik_core::Host;

use crate::state::AppState;

/// Save one pair. Every failure is recovered here: notify and keep the
/// prior state, matching how the mobile original toasts and carries on.
pub(super) fn handle(state: &mut AppState, ui: &mut dyn Host, term: &str, translation: &str) {
    match state.glossary.add(term, translation) {
        Ok(entry) => {
            tracing::info!(term = %entry.term, "entry saved");
            ui.notify("Word saved");
        }
        Err(e) if e.is_validation() => ui.notify(&e.to_string()),
        Err(e) => {
            tracing::error!(error = %e, "saving entry failed");
            ui.notify(&format!("Error saving word: {e}"));
        }
    }
}
