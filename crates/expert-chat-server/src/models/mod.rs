//! Expert Chat Data Models
//!
//! - Chat: LLM invocation request/response
//! - Persona / Config: read-only captions

mod chat;

pub use chat::*;
