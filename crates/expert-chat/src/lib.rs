//! Expert Chat Domain Library
//!
//! Core domain types and interfaces for the Expert Chat persona front-end.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Prompt assembly (template + persona + user text)
//!   - `value_objects/`: Immutable value types (Persona)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External service interfaces (LLM provider)
//!
//! # Usage
//!
//! ```rust,ignore
//! use expert_chat::{Persona, PromptRequest, LlmProvider};
//!
//! let persona: Persona = "A".parse()?;
//! let messages = PromptRequest::new(persona, "explain 'however'").to_messages();
//! let response = provider.complete(&messages, &options).await?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{validate_user_text, DomainError, Persona, PromptRequest, SYSTEM_TEMPLATE};
pub use ports::{
    ChatMessage, CompletionOptions, CompletionResponse, LlmProvider, MessageRole, TokenUsage,
};
