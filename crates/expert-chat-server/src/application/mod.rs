//! Application Services (Use Cases)
//!
//! Orchestrates domain operations. Services depend on port traits,
//! not on concrete adapters.

mod chat_service;

pub use chat_service::ChatService;
