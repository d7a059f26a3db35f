//! Format Engine - selection-scoped rich-text formatting
//!
//! The engine never touches a real UI. It operates against two narrow host
//! abstractions: [`ActiveTextRange`] (the current selection plus the editable
//! container that owns it) and [`CommandSurface`] (the host's rich-text
//! command interface). Everything here is testable against the in-memory
//! [`BufferHost`] double.

mod engine;
mod list;
mod range;
pub mod spellcheck;

pub use engine::*;
pub use list::*;
pub use range::*;
