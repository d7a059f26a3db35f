//! Presentation root - the ordered slide sequence and current-slide cursor

use crate::{IdGenerator, Slide, SlideId};
use serde::{Deserialize, Serialize};

/// The whole deck: an ordered sequence of slides plus a cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    slides: Vec<Slide>,
    /// 0-based index of the slide factory operations target.
    current: usize,
}

impl Presentation {
    /// Create a presentation with a single blank slide.
    pub fn new(ids: &mut IdGenerator) -> Self {
        Self::from_slides(vec![Slide::new(ids.next_slide_id())])
    }

    /// Create a presentation from an existing slide sequence.
    pub fn from_slides(slides: Vec<Slide>) -> Self {
        Self { slides, current: 0 }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The current-slide cursor, clamped to the valid range.
    pub fn current_slide(&self) -> usize {
        self.current.min(self.slides.len().saturating_sub(1))
    }

    /// Move the cursor; out-of-range values are clamped, not rejected.
    pub fn set_current_slide(&mut self, index: usize) {
        self.current = index.min(self.slides.len().saturating_sub(1));
    }

    /// Append a slide to the end of the deck.
    pub fn push_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Remove a slide by id. Elements go with their slide; nothing dangles.
    pub fn remove_slide(&mut self, id: SlideId) -> bool {
        let before = self.slides.len();
        self.slides.retain(|slide| slide.id != id);
        let removed = self.slides.len() != before;
        if removed {
            self.current = self.current_slide();
        }
        removed
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::from_slides(vec![Slide::new(SlideId(1))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(n: i64) -> Presentation {
        Presentation::from_slides((1..=n).map(|i| Slide::new(SlideId(i))).collect())
    }

    #[test]
    fn cursor_clamps_to_last_slide() {
        let mut deck = deck_of(3);
        deck.set_current_slide(99);
        assert_eq!(deck.current_slide(), 2);
        deck.set_current_slide(1);
        assert_eq!(deck.current_slide(), 1);
    }

    #[test]
    fn removing_the_current_slide_reclamps_the_cursor() {
        let mut deck = deck_of(2);
        deck.set_current_slide(1);
        assert!(deck.remove_slide(SlideId(2)));
        assert_eq!(deck.current_slide(), 0);
    }

    #[test]
    fn remove_unknown_slide_is_reported() {
        let mut deck = deck_of(2);
        assert!(!deck.remove_slide(SlideId(99)));
        assert_eq!(deck.len(), 2);
    }
}
