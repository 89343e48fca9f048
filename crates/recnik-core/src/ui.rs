use recnik_types::Entry;

/// Presentation hooks supplied by the host.
///
/// The core never draws or toasts on its own; whoever drives it (a terminal
/// loop here, a phone screen in other hosts) implements this and renders
/// whatever the operations return.
pub trait Host {
    /// Transient user-facing message (the toast of the mobile original).
    fn notify(&mut self, message: &str);

    /// Show search hits for `query`. An empty slice means "no results",
    /// which hosts are expected to say out loud rather than show nothing.
    fn render_results(&mut self, query: &str, entries: &[Entry]);

    /// Reset the results area. Display-only; core state is untouched.
    fn clear_results(&mut self);
}
