pub mod position;
pub mod response;

pub use position::{Faq, Position, PositionBundle, PositionDetails, PositionInfo};
pub use response::{ChatRequest, ChatResponse, Job};
