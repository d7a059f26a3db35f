//! The active-text-range abstraction and its in-memory test double
//!
//! The host environment (typically a selection inside an editing surface) is
//! reduced to: read the selected text, read the owning editable container,
//! replace either one, and signal edit completion. Formatting algorithms
//! depend only on these traits.

use std::ops::Range;

/// Host-provided view of the current text selection.
///
/// An implementation is only handed out while a live selection exists inside
/// an editable container; "no active range" is modeled by
/// [`EditorHost::active_range`] returning `None`.
pub trait ActiveTextRange {
    /// Plain text of the current selection. Empty when the caret is collapsed.
    fn selected_text(&self) -> String;

    /// Full plain-text content of the editable container owning the selection.
    fn container_text(&self) -> String;

    /// Replace the selected span with plain text and re-select exactly the
    /// inserted text, so the selection stays non-collapsed where possible.
    fn replace_selected(&mut self, text: &str);

    /// Replace the container's entire content with rendered markup.
    fn replace_container(&mut self, markup: &str);

    /// Signal that the container's content changed (the edit-completion
    /// event), so the owning text element is written back to the store.
    fn commit(&mut self);
}

/// The host's rich-text command interface.
///
/// Command names are the documented surface: `bold`, `italic`, `underline`,
/// `strikeThrough`, `foreColor`, `backColor`, `justifyLeft`, `justifyCenter`,
/// `justifyRight`, `fontName`, `fontSize`.
pub trait CommandSurface {
    fn apply_command(&mut self, name: &str, value: Option<&str>);
}

/// The editing host as seen by the format engine.
pub trait EditorHost: CommandSurface {
    /// The active range, or `None` when there is no live selection.
    fn active_range(&mut self) -> Option<&mut dyn ActiveTextRange>;
}

// =============================================================================
// In-memory test double
// =============================================================================

/// Plain text buffer with a selection span, standing in for the host range.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferRange {
    text: String,
    /// Byte range of the selection; collapsed when empty.
    selection: Range<usize>,
    /// Number of commit signals received.
    pub commits: usize,
}

impl BufferRange {
    /// Create a range over `text` with the given byte selection span.
    ///
    /// Panics on an inverted, out-of-bounds, or non-char-boundary span, so a
    /// bad test fixture fails here rather than deep inside a slice.
    pub fn new(text: impl Into<String>, selection: Range<usize>) -> Self {
        let text = text.into();
        assert!(
            selection.start <= selection.end && selection.end <= text.len(),
            "selection {selection:?} out of bounds for buffer of {} bytes",
            text.len()
        );
        assert!(
            text.is_char_boundary(selection.start) && text.is_char_boundary(selection.end),
            "selection {selection:?} not on char boundaries"
        );
        Self {
            text,
            selection,
            commits: 0,
        }
    }

    /// Range with the whole buffer selected.
    pub fn select_all(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.len();
        Self::new(text, 0..len)
    }

    /// Range with a collapsed caret at the start.
    pub fn collapsed(text: impl Into<String>) -> Self {
        Self::new(text, 0..0)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }
}

impl ActiveTextRange for BufferRange {
    fn selected_text(&self) -> String {
        self.text[self.selection.clone()].to_string()
    }

    fn container_text(&self) -> String {
        self.text.clone()
    }

    fn replace_selected(&mut self, text: &str) {
        let start = self.selection.start;
        self.text
            .replace_range(self.selection.clone(), text);
        // Re-select the inserted span.
        self.selection = start..start + text.len();
    }

    fn replace_container(&mut self, markup: &str) {
        self.text = markup.to_string();
        self.selection = 0..0;
    }

    fn commit(&mut self) {
        self.commits += 1;
    }
}

/// Test host: an optional buffer range plus a log of issued commands.
#[derive(Debug, Default)]
pub struct BufferHost {
    range: Option<BufferRange>,
    pub commands: Vec<(String, Option<String>)>,
}

impl BufferHost {
    /// Host with a live selection.
    pub fn with_range(range: BufferRange) -> Self {
        Self {
            range: Some(range),
            commands: Vec::new(),
        }
    }

    /// Host with no active selection.
    pub fn without_selection() -> Self {
        Self::default()
    }

    pub fn range(&self) -> Option<&BufferRange> {
        self.range.as_ref()
    }
}

impl CommandSurface for BufferHost {
    fn apply_command(&mut self, name: &str, value: Option<&str>) {
        self.commands
            .push((name.to_string(), value.map(str::to_string)));
    }
}

impl EditorHost for BufferHost {
    fn active_range(&mut self) -> Option<&mut dyn ActiveTextRange> {
        self.range
            .as_mut()
            .map(|range| range as &mut dyn ActiveTextRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_selected_reselects_inserted_text() {
        let mut range = BufferRange::new("hello world", 0..5);
        range.replace_selected("HELLO");
        assert_eq!(range.text(), "HELLO world");
        assert_eq!(range.selection(), 0..5);
        assert_eq!(range.selected_text(), "HELLO");
    }

    #[test]
    fn replace_selected_handles_length_changes() {
        let mut range = BufferRange::new("abc def", 4..7);
        range.replace_selected("de");
        assert_eq!(range.text(), "abc de");
        assert_eq!(range.selected_text(), "de");
    }

    #[test]
    fn container_replace_resets_selection() {
        let mut range = BufferRange::select_all("one\ntwo");
        range.replace_container("<ul></ul>");
        assert_eq!(range.container_text(), "<ul></ul>");
        assert!(range.selected_text().is_empty());
    }

    #[test]
    fn host_without_selection_has_no_range() {
        let mut host = BufferHost::without_selection();
        assert!(host.active_range().is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn construction_rejects_out_of_bounds_selection() {
        BufferRange::new("ab", 1..5);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn construction_rejects_inverted_selection() {
        BufferRange::new("abcdef", 4..2);
    }

    #[test]
    #[should_panic(expected = "char boundaries")]
    fn construction_rejects_mid_char_selection() {
        BufferRange::new("€uro", 0..1);
    }
}
