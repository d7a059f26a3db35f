//! Elements - catalog, factory, and templates
//!
//! The catalog is static data: default geometry and styling for every shape
//! and icon kind, plus the built-in slide and deck templates. The factory
//! turns catalog entries (or user input) into elements appended to the
//! store's current slide; the template applier maps templates onto slides
//! and expands deck templates into full decks.

mod catalog;
mod error;
mod factory;
mod prompts;
mod templates;

pub use catalog::*;
pub use error::*;
pub use factory::*;
pub use prompts::*;
pub use templates::*;
