//! Wire messages for the broadcast transport
//!
//! Three client events, two server rebroadcasts. Event names and payload
//! keys follow the socket transport's wire protocol: a client's
//! `slide-update` comes back to the room as `slide-updated`, `cursor-move`
//! as `cursor-moved`, and `join-presentation` is not rebroadcast.

use deck_model::SlidePatch;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one connected editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(Uuid);

impl ClientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Events a client sends to the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ClientEvent {
    #[serde(rename_all = "camelCase")]
    JoinPresentation { presentation_id: String },
    #[serde(rename_all = "camelCase")]
    SlideUpdate {
        presentation_id: String,
        slide_index: usize,
        patch: SlidePatch,
    },
    #[serde(rename_all = "camelCase")]
    CursorMove {
        presentation_id: String,
        client_id: ClientId,
        slide_index: usize,
        x: f32,
        y: f32,
    },
}

/// Events the transport rebroadcasts to the other members of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ServerEvent {
    #[serde(rename_all = "camelCase")]
    SlideUpdated {
        presentation_id: String,
        slide_index: usize,
        patch: SlidePatch,
    },
    #[serde(rename_all = "camelCase")]
    CursorMoved {
        presentation_id: String,
        client_id: ClientId,
        slide_index: usize,
        x: f32,
        y: f32,
    },
}

/// The server's rebroadcast mapping. Joining a room produces no broadcast.
pub fn rebroadcast(event: ClientEvent) -> Option<ServerEvent> {
    match event {
        ClientEvent::JoinPresentation { .. } => None,
        ClientEvent::SlideUpdate {
            presentation_id,
            slide_index,
            patch,
        } => Some(ServerEvent::SlideUpdated {
            presentation_id,
            slide_index,
            patch,
        }),
        ClientEvent::CursorMove {
            presentation_id,
            client_id,
            slide_index,
            x,
            y,
        } => Some(ServerEvent::CursorMoved {
            presentation_id,
            client_id,
            slide_index,
            x,
            y,
        }),
    }
}
