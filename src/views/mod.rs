// src/views/mod.rs
//! View models behind the portal pages: jobs list, employer position view, candidate view

pub mod candidate;
pub mod editable;
pub mod jobs;
pub mod position;

pub use candidate::{CandidateView, ChatState, MAX_QUESTION_LENGTH};
pub use editable::Editable;
pub use jobs::JobsView;
pub use position::{PositionView, Section};

/// `loading → ready | failed`
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }
}
