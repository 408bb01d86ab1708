//! Global Application State
//!
//! Toasts and the footer loading indicator. Per-page state stays in the
//! page that owns it.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Number of requests in flight
    pub pending: RwSignal<u32>,
    /// Any request in flight
    pub loading: Signal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalState {
    pub fn new() -> Self {
        let pending = create_rw_signal(0u32);

        Self {
            pending,
            loading: Signal::derive(move || pending.get() > 0),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Mark a request as started
    pub fn begin_request(&self) {
        self.pending.update(|n| *n += 1);
    }

    /// Mark a request as finished
    pub fn end_request(&self) {
        self.pending.update(|n| *n = n.saturating_sub(1));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_loading_follows_pending_requests() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        assert!(!state.loading.get_untracked());
        state.begin_request();
        state.begin_request();
        state.end_request();
        assert!(state.loading.get_untracked());
        state.end_request();
        assert!(!state.loading.get_untracked());

        // unbalanced end never underflows
        state.end_request();
        assert_eq!(state.pending.get_untracked(), 0);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_show_error_sets_message() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        state.show_error("Selected goal is not in the goal list");
        assert_eq!(
            state.error.get_untracked().as_deref(),
            Some("Selected goal is not in the goal list")
        );

        runtime.dispose();
    }
}
