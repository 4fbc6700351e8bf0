//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Message: One turn sent to the completion model
//! - Prompt: System template filled with a persona and the user text

mod message;
mod prompt;

pub use message::*;
pub use prompt::*;
