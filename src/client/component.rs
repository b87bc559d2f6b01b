use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use super::api::{ApiClient, ApiError, EventOption};
use super::form::RegistrationForm;
use crate::models::participant::RegistrationRequest;

pub const EVENTS_LOAD_ERROR: &str = "Unable to load events. Please try again later.";
pub const REGISTER_FALLBACK_ERROR: &str =
    "Registration failed. Please check your input or try again.";
pub const REGISTER_CONFIRMATION: &str = "Participant registered successfully!";

/// Observable page state: the form, the selector options, and the
/// submission lifecycle flags.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub form: RegistrationForm,
    pub events: Vec<EventOption>,
    pub submitting: bool,
    pub error: Option<String>,
    pub confirmation: Option<String>,
}

/// The registration page component.
///
/// Asynchronous work (the mount-time event fetch, the submit POST) runs in
/// spawned tasks that hold only a `Weak` reference back to the page:
/// results arriving after the page is gone are discarded, and any task
/// still queued when the page drops is aborted.
pub struct RegistrationPage {
    api: ApiClient,
    state: Mutex<PageState>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl RegistrationPage {
    pub fn new(api: ApiClient) -> Arc<Self> {
        Arc::new(RegistrationPage {
            api,
            state: Mutex::new(PageState::default()),
            tasks: Mutex::new(Vec::new()),
        })
    }

    /// Kick off the mount-time event fetch in the background.
    pub fn mount(self: &Arc<Self>) {
        let api = self.api.clone();
        let weak = Arc::downgrade(self);
        self.push_task(tokio::spawn(async move {
            let result = api.fetch_events().await;
            if let Some(page) = weak.upgrade() {
                page.apply_events(result);
            }
        }));
    }

    /// Fetch the event list on the current task.
    pub async fn load_events(&self) {
        let result = self.api.fetch_events().await;
        self.apply_events(result);
    }

    /// Submit in the background. A no-op while a submission is in flight.
    pub fn submit(self: &Arc<Self>) {
        let Some(payload) = self.begin_submit() else {
            return;
        };
        let api = self.api.clone();
        let weak = Arc::downgrade(self);
        self.push_task(tokio::spawn(async move {
            let result = api.register_participant(&payload).await;
            if let Some(page) = weak.upgrade() {
                page.apply_submit_result(result);
            }
        }));
    }

    /// Submit on the current task.
    pub async fn submit_now(&self) {
        let Some(payload) = self.begin_submit() else {
            return;
        };
        let result = self.api.register_participant(&payload).await;
        self.apply_submit_result(result);
    }

    /// Mutate the form the way input handlers do.
    pub fn with_form<R>(&self, f: impl FnOnce(&mut RegistrationForm) -> R) -> R {
        let mut state = self.state.lock().unwrap();
        f(&mut state.form)
    }

    /// Snapshot of the current page state.
    pub fn state(&self) -> PageState {
        self.state.lock().unwrap().clone()
    }

    /// Await all spawned tasks, letting in-flight work settle.
    pub async fn settle(&self) {
        let handles: Vec<JoinHandle<()>> = {
            let mut tasks = self.tasks.lock().unwrap();
            tasks.drain(..).collect()
        };
        for handle in handles {
            let _ = handle.await;
        }
    }

    fn begin_submit(&self) -> Option<RegistrationRequest> {
        let mut state = self.state.lock().unwrap();
        if state.submitting {
            return None;
        }
        let errors = state.form.validate();
        if !errors.is_empty() {
            state.error = Some(errors.join("; "));
            return None;
        }
        state.submitting = true;
        state.error = None;
        state.confirmation = None;
        log::debug!("Submitting registration for {}", state.form.email);
        Some(state.form.payload())
    }

    fn apply_events(&self, result: Result<Vec<EventOption>, ApiError>) {
        let mut state = self.state.lock().unwrap();
        match result {
            Ok(events) => state.events = events,
            Err(err) => {
                log::error!("Failed to fetch events: {err}");
                state.error = Some(EVENTS_LOAD_ERROR.to_string());
            }
        }
    }

    fn apply_submit_result(&self, result: Result<(), ApiError>) {
        let mut state = self.state.lock().unwrap();
        state.submitting = false;
        match result {
            Ok(()) => {
                state.form.reset();
                state.confirmation = Some(REGISTER_CONFIRMATION.to_string());
            }
            Err(err) => {
                log::error!("Registration failed: {err}");
                state.error = Some(err.user_message(REGISTER_FALLBACK_ERROR));
            }
        }
    }

    fn push_task(&self, handle: JoinHandle<()>) {
        self.tasks.lock().unwrap().push(handle);
    }
}

impl Drop for RegistrationPage {
    fn drop(&mut self) {
        for handle in self.tasks.lock().unwrap().drain(..) {
            handle.abort();
        }
    }
}
