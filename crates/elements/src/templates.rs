//! Template application and deck instantiation

use crate::{DeckTemplate, Result, SlideTemplate};
use deck_model::{Color, IdGenerator, Slide, SlideId, SlideLayout, SlidePatch};
use deck_store::DeckStore;

/// Map a slide template onto the slide at `index`.
///
/// Only `layout`, `background`, and `text_color` are patched; the slide's
/// title, content, and elements stay untouched. Applying the same template
/// twice is idempotent.
pub fn apply_template(
    store: &mut DeckStore,
    index: usize,
    template: &SlideTemplate,
) -> Result<()> {
    store.update_slide(
        index,
        SlidePatch {
            layout: Some(template.layout),
            background: Some(template.background),
            text_color: Some(template.text_color),
            ..SlidePatch::default()
        },
    )?;
    Ok(())
}

/// Expand a deck template into a full slide sequence.
///
/// Every content slide gets an id from a single reserved block (base plus
/// positional offset), and a synthesized cover slide is prepended. The cover
/// inherits its colors from the template's first content slide, falling back
/// to the fixed cover palette when the template is empty.
pub fn instantiate_deck(ids: &mut IdGenerator, template: &DeckTemplate) -> Vec<Slide> {
    let base = ids.reserve(template.slides.len() as i64 + 1);

    let first = template.slides.first();
    let cover = Slide {
        id: SlideId(base),
        title: template.name.clone(),
        content: template.description.clone(),
        background: first.map(|s| s.background).unwrap_or(Color::COVER_BLUE),
        text_color: first.map(|s| s.text_color).unwrap_or(Color::WHITE),
        layout: SlideLayout::TitleOnly,
        elements: Vec::new(),
    };

    let mut slides = Vec::with_capacity(template.slides.len() + 1);
    slides.push(cover);
    for (offset, seed) in template.slides.iter().enumerate() {
        let mut slide = seed.clone();
        slide.id = SlideId(base + 1 + offset as i64);
        slides.push(slide);
    }
    slides
}
