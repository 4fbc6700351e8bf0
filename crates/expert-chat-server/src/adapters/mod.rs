//! Infrastructure Adapters
//!
//! Concrete implementations of the port traits defined in the domain crate.

mod openai;

pub use openai::OpenAiProvider;
