//! Collab - the real-time broadcast boundary
//!
//! The transport itself lives outside the core; this crate defines the wire
//! messages exchanged over it and the bridge that funnels incoming slide
//! updates through the store's single mutation entry point, preserving the
//! strict update ordering the store guarantees. Broadcast is fire-and-forget:
//! there is no conflict resolution.

mod bridge;
mod error;
mod message;

pub use bridge::*;
pub use error::*;
pub use message::*;
