//! Deck Store - ownership of slide state and the single mutation entry point
//!
//! Every component that changes slide or element state goes through
//! [`DeckStore::update_slide`]. Subscribers observe each applied update
//! synchronously, before the call returns, so downstream consumers (the
//! rendering surface, the broadcast layer) always see updates in the order
//! they were issued.

mod error;
mod store;

pub use error::*;
pub use store::*;
