//! Reducer-style state container for a search session.
//!
//! The original UI held all of this in one implicit component state;
//! here every mutation is a discrete [`Transition`] applied to a
//! [`SearchState`], so the lifecycle (idle -> loading -> success or
//! error) is explicit and directly testable.

use shared::{
    domain::{Tab, ViewModel},
    error::ErrorInfo,
};

/// One session's worth of search UI state. Exactly one writer (the
/// controller) mutates it; presentation code reads snapshots.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub selected_tab: Tab,
    pub search_query: String,
    pub loading: bool,
    pub error: Option<ErrorInfo>,
    pub data: Option<ViewModel>,
}

/// Discrete state transitions. Broadcast to subscribers after being
/// applied, in application order.
#[derive(Debug, Clone)]
pub enum Transition {
    TabChanged(Tab),
    FetchStarted { query: String },
    FetchSucceeded(ViewModel),
    FetchFailed(ErrorInfo),
}

impl SearchState {
    pub fn apply(&mut self, transition: &Transition) {
        match transition {
            Transition::TabChanged(tab) => {
                self.selected_tab = *tab;
            }
            Transition::FetchStarted { query } => {
                self.loading = true;
                self.search_query = query.clone();
            }
            Transition::FetchSucceeded(model) => {
                self.data = Some(model.clone());
                self.error = None;
                self.loading = false;
            }
            // A failure keeps whatever data the previous fetch produced;
            // the UI stays recoverable for the next query.
            Transition::FetchFailed(error) => {
                self.error = Some(error.clone());
                self.loading = false;
            }
        }
    }
}
