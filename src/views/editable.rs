// src/views/editable.rs

/// Last fetched value plus an optional edit buffer.
///
/// While editing, reads see the draft and the fetched value stays untouched,
/// so cancelling restores it exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Editable<T> {
    fetched: T,
    draft: Option<T>,
}

impl<T: Clone> Editable<T> {
    pub fn new(fetched: T) -> Self {
        Self {
            fetched,
            draft: None,
        }
    }

    /// Draft while editing, fetched value otherwise
    pub fn current(&self) -> &T {
        self.draft.as_ref().unwrap_or(&self.fetched)
    }

    pub fn fetched(&self) -> &T {
        &self.fetched
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Snapshot the fetched value into the buffer. Re-entering keeps the existing draft.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.fetched.clone());
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut T> {
        self.draft.as_mut()
    }

    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Replace the fetched value and drop any draft
    pub fn reset(&mut self, fetched: T) {
        self.fetched = fetched;
        self.draft = None;
    }
}
