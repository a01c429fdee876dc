//! State the `App` component renders from, and the transitions the board's
//! results drive. Side effects (fetching, timers, console) stay in the
//! component; everything here runs on the host.

use std::rc::Rc;

use yew::Reducible;

use crate::board::{ListState, Mutation};
use crate::error::ApiError;
use crate::flash::Flash;
use crate::model::ActivitiesSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub list: ListState,
    /// Selector options, in snapshot order.
    pub options: Vec<String>,
    pub email: String,
    /// Empty string is the placeholder option.
    pub selected: String,
    pub flash: Option<Flash>,
    pub flash_hidden: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            list: ListState::Loading,
            options: Vec::new(),
            email: String::new(),
            selected: String::new(),
            flash: None,
            flash_hidden: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    Loaded(ActivitiesSnapshot),
    LoadFailed,
    EmailChanged(String),
    ActivitySelected(String),
    ShowFlash(Flash),
    HideFlash,
    ResetForm,
}

impl BoardAction {
    /// Turns a load result into the action to dispatch plus a console line.
    pub fn from_load(result: Result<ActivitiesSnapshot, ApiError>) -> (Self, Option<String>) {
        match result {
            Ok(snapshot) => (Self::Loaded(snapshot), None),
            Err(e) => (Self::LoadFailed, Some(format!("Error fetching activities: {e}"))),
        }
    }
}

impl Reducible for BoardView {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: BoardAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            // Rebuilding the selector drops the current selection.
            BoardAction::Loaded(snapshot) => {
                next.options = snapshot.keys().cloned().collect();
                next.selected.clear();
                next.list = ListState::Ready(snapshot);
            }
            // Selector and its selection stay as they were.
            BoardAction::LoadFailed => next.list = ListState::Failed,
            BoardAction::EmailChanged(v) => next.email = v,
            BoardAction::ActivitySelected(v) => next.selected = v,
            BoardAction::ShowFlash(f) => {
                next.flash = Some(f);
                next.flash_hidden = false;
            }
            BoardAction::HideFlash => next.flash_hidden = true,
            BoardAction::ResetForm => {
                next.email.clear();
                next.selected.clear();
            }
        }
        Rc::new(next)
    }
}

/// Applies a finished mutation: banner, then form reset, then reload.
/// Returns the diagnostic for the console.
pub fn apply_mutation(
    m: Mutation,
    dispatch: impl Fn(BoardAction),
    reload: impl FnOnce(),
) -> Option<String> {
    dispatch(BoardAction::ShowFlash(m.flash));
    if m.reset_form {
        dispatch(BoardAction::ResetForm);
    }
    if m.refresh {
        reload();
    }
    m.diagnostic
}
