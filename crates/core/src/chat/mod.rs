pub mod extract;
pub mod prompt;
pub mod types;

pub use extract::{extract_content, ResponseError};
pub use prompt::{build_prompt, build_request, INSTRUCTION};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Choice, ChoiceMessage};
