//! Slide node and the patch type used by the store's mutation entry point

use crate::{Color, Element, SlideId};
use serde::{Deserialize, Serialize};

/// Layout applied to a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SlideLayout {
    TitleOnly,
    #[default]
    TitleContent,
    TwoColumn,
}

/// One page of the presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub content: String,
    pub background: Color,
    pub text_color: Color,
    pub layout: SlideLayout,
    pub elements: Vec<Element>,
}

impl Slide {
    /// Create an empty slide with the default placeholder text.
    pub fn new(id: SlideId) -> Self {
        Self {
            id,
            title: "Click to add title".into(),
            content: "Click to add content".into(),
            background: Color::WHITE,
            text_color: Color::BLACK,
            layout: SlideLayout::TitleContent,
            elements: Vec::new(),
        }
    }

    /// Merge a patch into this slide.
    ///
    /// Shallow merge: each present field replaces the slide's field wholesale.
    /// In particular `elements` is replaced as a sequence, never merged
    /// element-by-element. The slide id is never touched.
    pub fn apply(&mut self, patch: SlidePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(background) = patch.background {
            self.background = background;
        }
        if let Some(text_color) = patch.text_color {
            self.text_color = text_color;
        }
        if let Some(layout) = patch.layout {
            self.layout = layout;
        }
        if let Some(elements) = patch.elements {
            self.elements = elements;
        }
    }
}

/// Partial slide update accepted by `DeckStore::update_slide`.
///
/// Only present fields are applied; absent fields leave the slide untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlidePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<SlideLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<Element>>,
}

impl SlidePatch {
    /// Patch that replaces the element sequence.
    pub fn elements(elements: Vec<Element>) -> Self {
        Self {
            elements: Some(elements),
            ..Self::default()
        }
    }

    /// Patch that replaces the body text.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}
