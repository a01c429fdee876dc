//! Render/sync controller behind the page.
//!
//! Every operation is one request/response cycle that ends in a value the
//! view applies: a fresh snapshot, or a [`Mutation`] telling it which banner
//! to show and whether to reset the form and re-fetch. The snapshot is never
//! patched locally; a successful mutation always re-fetches.

use crate::api::ActivitiesApi;
use crate::config::BoardConfig;
use crate::error::ApiError;
use crate::flash::Flash;
use crate::model::ActivitiesSnapshot;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

const REMOVE_FAILED_TEXT: &str = "Failed to remove participant";
const REMOVE_RETRY_TEXT: &str = "Failed to remove participant. Try again.";
const SIGNUP_FAILED_TEXT: &str = "An error occurred";
const SIGNUP_RETRY_TEXT: &str = "Failed to sign up. Please try again.";

/// What the list area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Ready(ActivitiesSnapshot),
    Failed,
}

/// Result of a signup or unregister, ready to be applied to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub flash: Flash,
    /// Re-run the load cycle.
    pub refresh: bool,
    /// Clear the signup form fields.
    pub reset_form: bool,
    /// Developer-facing detail for the console.
    pub diagnostic: Option<String>,
}

impl Mutation {
    fn applied(flash: Flash, reset_form: bool) -> Self {
        Self { flash, refresh: true, reset_form, diagnostic: None }
    }

    fn rejected(flash: Flash, diagnostic: String) -> Self {
        Self { flash, refresh: false, reset_form: false, diagnostic: Some(diagnostic) }
    }
}

pub fn removal_prompt(activity: &str, email: &str) -> String {
    format!("Remove {email} from {activity}?")
}

/// Empty server text counts as absent.
fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

pub struct ActivityBoard<A> {
    api: A,
    config: BoardConfig,
}

impl<A: ActivitiesApi> ActivityBoard<A> {
    pub fn new(api: A, config: BoardConfig) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetches the whole snapshot; the caller replaces what it rendered.
    pub async fn load(&self) -> Result<ActivitiesSnapshot, ApiError> {
        self.api.fetch_activities().await
    }

    /// Asks `confirm` first; a declined prompt sends nothing.
    pub async fn remove_participant(
        &self,
        activity: &str,
        email: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Option<Mutation> {
        if !confirm(&removal_prompt(activity, email)) {
            return None;
        }
        Some(self.unregister_participant(activity, email).await)
    }

    pub async fn unregister_participant(&self, activity: &str, email: &str) -> Mutation {
        let ms = self.config.unregister_message_ms;
        match self.api.unregister(activity, email).await {
            Ok(reply) => {
                let text = non_empty(reply.message.as_deref())
                    .map_or_else(|| format!("Removed {email}"), str::to_string);
                Mutation::applied(Flash::success(text, ms), false)
            }
            Err(err @ ApiError::Transport(_)) => Mutation::rejected(
                Flash::error(REMOVE_RETRY_TEXT, ms),
                format!("Error removing participant: {err}"),
            ),
            Err(err) => Mutation::rejected(
                Flash::error(non_empty(err.detail()).unwrap_or(REMOVE_FAILED_TEXT), ms),
                format!("Error removing participant: {err}"),
            ),
        }
    }

    pub async fn submit_signup(&self, email: &str, activity: &str) -> Mutation {
        let ms = self.config.signup_message_ms;
        match self.api.signup(activity, email).await {
            Ok(reply) => {
                let text = non_empty(reply.message.as_deref())
                    .map_or_else(|| format!("Signed up {email} for {activity}"), str::to_string);
                Mutation::applied(Flash::success(text, ms), true)
            }
            Err(err @ ApiError::Server { .. }) => Mutation::rejected(
                Flash::error(non_empty(err.detail()).unwrap_or(SIGNUP_FAILED_TEXT), ms),
                format!("Error signing up: {err}"),
            ),
            Err(err) => Mutation::rejected(
                Flash::bare_error(SIGNUP_RETRY_TEXT, ms),
                format!("Error signing up: {err}"),
            ),
        }
    }
}
