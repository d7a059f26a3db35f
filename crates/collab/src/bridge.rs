//! Bridge between incoming broadcast events and the deck store
//!
//! Remote slide updates must go through the store's single update entry
//! point, in arrival order, so local and remote mutations cannot interleave
//! inconsistently. Cursor movement is presence information only; it never
//! touches document state.

use crate::{Result, ServerEvent};
use deck_store::DeckStore;
use tracing::debug;

/// A remote cursor position surfaced to the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCursor {
    pub client_id: crate::ClientId,
    pub slide_index: usize,
    pub x: f32,
    pub y: f32,
}

/// Apply one incoming server event.
///
/// `slide-updated` is funneled into [`DeckStore::update_slide`]; an
/// out-of-range index from a stale remote propagates as an error.
/// `cursor-moved` is returned for presence display.
pub fn apply_remote(store: &mut DeckStore, event: ServerEvent) -> Result<Option<RemoteCursor>> {
    match event {
        ServerEvent::SlideUpdated {
            presentation_id,
            slide_index,
            patch,
        } => {
            debug!(%presentation_id, slide_index, "applying remote slide update");
            store.update_slide(slide_index, patch)?;
            Ok(None)
        }
        ServerEvent::CursorMoved {
            client_id,
            slide_index,
            x,
            y,
            ..
        } => Ok(Some(RemoteCursor {
            client_id,
            slide_index,
            x,
            y,
        })),
    }
}

/// Decode a raw wire payload and apply it.
pub fn apply_remote_json(store: &mut DeckStore, payload: &str) -> Result<Option<RemoteCursor>> {
    let event: ServerEvent = serde_json::from_str(payload)?;
    apply_remote(store, event)
}
