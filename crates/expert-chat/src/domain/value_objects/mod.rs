//! Value Objects
//!
//! Immutable value types without identity.

mod persona;

pub use persona::*;
