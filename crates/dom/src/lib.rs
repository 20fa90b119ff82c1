//! DOM tree storage
//!
//! Arena-backed, mutable node tree with handle identity.
//!
//! ## Core Design
//!
//! ```text
//! CDP JSON → DomService → DomArena (owned) ← mutations (append/insert/remove)
//!                              ↓
//!                        NodeId (u32 handle)
//! ```
//!
//! Readers borrow the arena for the length of one call and hold on to
//! `NodeId`s between calls, so the tree stays free to change in between.

pub mod arena;
pub mod error;
pub mod service;
pub mod types;
pub mod utils;

pub use arena::DomArena;
pub use error::{DomError, Result};
pub use service::{DomService, DomServiceConfig};
pub use types::*;
