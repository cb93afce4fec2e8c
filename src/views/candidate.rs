// src/views/candidate.rs
use tracing::{error, info};

use super::position::{fetch_details, POSITION_LOAD_ERROR, POSITION_NOT_FOUND};
use super::Loadable;
use crate::core::portal_client::PortalClient;
use crate::types::PositionDetails;
use crate::utils::truncate_chars;

pub const MAX_QUESTION_LENGTH: usize = 200;

pub const DEFAULT_CHAT_ANSWER: &str =
    "Thank you for your question. We will get back to you shortly.";
pub const CHAT_ERROR: &str =
    "Sorry, we couldn't process your question at this time. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
pub enum ChatState {
    Idle,
    /// Blank question; nothing was sent
    Rejected,
    Answered(String),
    Failed(String),
}

/// Read-only position page with the question form
pub struct CandidateView {
    position_id: i64,
    state: Loadable<PositionDetails>,
    question: String,
    chat: ChatState,
}

impl CandidateView {
    pub fn new(position_id: i64) -> Self {
        Self {
            position_id,
            state: Loadable::Loading,
            question: String::new(),
            chat: ChatState::Idle,
        }
    }

    pub fn position_id(&self) -> i64 {
        self.position_id
    }

    pub fn state(&self) -> &Loadable<PositionDetails> {
        &self.state
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn chat(&self) -> &ChatState {
        &self.chat
    }

    pub async fn load(&mut self, client: &PortalClient) {
        self.state = Loadable::Loading;

        self.state = match fetch_details(client, self.position_id).await {
            Ok(Some(details)) => Loadable::Ready(details),
            Ok(None) => Loadable::Failed(POSITION_NOT_FOUND.to_string()),
            Err(e) => {
                error!("Failed to load position {}: {:#}", self.position_id, e);
                Loadable::Failed(POSITION_LOAD_ERROR.to_string())
            }
        };
    }

    /// Store the question, cut to `MAX_QUESTION_LENGTH` characters
    pub fn set_question(&mut self, text: &str) {
        self.question = truncate_chars(text, MAX_QUESTION_LENGTH);
    }

    /// Send the stored question verbatim; blank questions never leave the client
    pub async fn submit(&mut self, client: &PortalClient) -> &ChatState {
        if self.question.trim().is_empty() {
            self.chat = ChatState::Rejected;
            return &self.chat;
        }

        self.chat = match client.send_chat_request(&self.question, self.position_id).await {
            Ok(response) => {
                info!("Chat answer received for position {}", self.position_id);
                let answer = response
                    .answer
                    .filter(|a| !a.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_CHAT_ANSWER.to_string());
                ChatState::Answered(answer)
            }
            Err(e) => {
                error!("Chat request error for position {}: {:#}", self.position_id, e);
                ChatState::Failed(CHAT_ERROR.to_string())
            }
        };

        &self.chat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_question_truncates_to_limit() {
        let mut view = CandidateView::new(1);

        let exact = "q".repeat(MAX_QUESTION_LENGTH);
        view.set_question(&exact);
        assert_eq!(view.question(), exact);

        let long = format!("{}overflow", "é".repeat(MAX_QUESTION_LENGTH));
        view.set_question(&long);
        assert_eq!(view.question().chars().count(), MAX_QUESTION_LENGTH);
        assert!(view.question().chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_set_question_keeps_text_verbatim() {
        let mut view = CandidateView::new(1);
        view.set_question("  Is the role remote?  ");
        assert_eq!(view.question(), "  Is the role remote?  ");
        assert_eq!(view.chat(), &ChatState::Idle);
    }
}
