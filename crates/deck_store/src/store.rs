//! The deck store and its subscription mechanism

use crate::{Result, StoreError};
use deck_model::{Presentation, Slide, SlidePatch};
use tracing::{debug, warn};

/// Handle returned by [`DeckStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(usize, &Slide)>;

/// Owner of the presentation state.
///
/// The store is the only component with write access to slide and element
/// sequences. Updates are applied and observed strictly in the order they
/// are issued: there is one entry point and notification is synchronous.
pub struct DeckStore {
    presentation: Presentation,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
}

impl DeckStore {
    /// Create a store owning the given presentation.
    pub fn new(presentation: Presentation) -> Self {
        Self {
            presentation,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Create a store from a bare slide sequence.
    pub fn from_slides(slides: Vec<Slide>) -> Self {
        Self::new(Presentation::from_slides(slides))
    }

    /// Read access to the presentation.
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Read access to one slide.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.presentation.slide(index)
    }

    /// Read access to the slide sequence.
    pub fn slides(&self) -> &[Slide] {
        self.presentation.slides()
    }

    /// The current-slide cursor (clamped by the model).
    pub fn current_slide(&self) -> usize {
        self.presentation.current_slide()
    }

    /// Move the current-slide cursor.
    pub fn set_current_slide(&mut self, index: usize) {
        self.presentation.set_current_slide(index);
    }

    /// Append a slide to the deck.
    pub fn push_slide(&mut self, slide: Slide) {
        self.presentation.push_slide(slide);
    }

    /// Merge a patch into the slide at `index`.
    ///
    /// This is the single write path. The patch is a shallow merge; a present
    /// `elements` field replaces the element sequence wholesale. Every
    /// subscriber observes the updated slide before this returns.
    pub fn update_slide(&mut self, index: usize, patch: SlidePatch) -> Result<()> {
        let len = self.presentation.len();
        let slide = self
            .presentation
            .slide_mut(index)
            .ok_or_else(|| {
                warn!(index, len, "rejected update for out-of-range slide");
                StoreError::SlideOutOfRange { index, len }
            })?;
        slide.apply(patch);
        debug!(index, slide_id = %slide.id, "slide updated");

        if !self.subscribers.is_empty() {
            let snapshot = slide.clone();
            for (_, subscriber) in &mut self.subscribers {
                subscriber(index, &snapshot);
            }
        }
        Ok(())
    }

    /// Register a consumer notified on every applied update.
    pub fn subscribe(&mut self, subscriber: impl FnMut(usize, &Slide) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Drop a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }
}

impl std::fmt::Debug for DeckStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckStore")
            .field("presentation", &self.presentation)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
