//! Deck Model - Core presentation document structure and types
//!
//! This crate provides the foundational data model for the slide-deck editor:
//! the presentation, its ordered slides, the typed element union, and the
//! integer identity scheme shared by slides and elements.

mod chart;
mod color;
mod element;
mod error;
mod id;
mod presentation;
mod slide;

pub use chart::*;
pub use color::*;
pub use element::*;
pub use error::*;
pub use id::*;
pub use presentation::*;
pub use slide::*;
