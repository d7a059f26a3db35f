//! The format engine: case conversion, inline toggles, colors, alignment,
//! and list conversion over the active text range

use crate::{ActiveTextRange, EditorHost, EmptyListPolicy, ListBlock, ListKind};
use serde::{Deserialize, Serialize};

/// Case transform applied to the selected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseTransform {
    Upper,
    Lower,
}

/// Inline character styles, toggled over the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl InlineStyle {
    /// The host command name for this style.
    pub fn command_name(&self) -> &'static str {
        match self {
            InlineStyle::Bold => "bold",
            InlineStyle::Italic => "italic",
            InlineStyle::Underline => "underline",
            InlineStyle::Strikethrough => "strikeThrough",
        }
    }
}

/// Where a solicited color is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTarget {
    Foreground,
    Highlight,
}

impl ColorTarget {
    pub fn command_name(&self) -> &'static str {
        match self {
            ColorTarget::Foreground => "foreColor",
            ColorTarget::Highlight => "backColor",
        }
    }
}

/// Block alignment for the paragraph under the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn command_name(&self) -> &'static str {
        match self {
            Alignment::Left => "justifyLeft",
            Alignment::Center => "justifyCenter",
            Alignment::Right => "justifyRight",
        }
    }
}

/// Solicits a color value from the user.
///
/// The prompt is modal from the user's perspective but cancellable:
/// `None` means dismissed, and the caller must leave the document unmodified.
pub trait ColorPrompt {
    /// A raw color value as entered: hex, `rgb(...)`, or a named color.
    fn color(&mut self, target: ColorTarget) -> Option<String>;
}

/// Outcome of a list conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    /// The container was replaced with the rendered list.
    Applied(ListBlock),
    /// No live selection; nothing happened.
    NoActiveRange,
    /// Every line was discarded and the policy suppressed the empty list.
    SuppressedEmpty,
}

/// Display state of the formatting controls.
///
/// The toggle flags reflect UI control state only; they do not themselves
/// change document content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToggleState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

/// Selection-scoped formatting engine.
#[derive(Debug, Clone)]
pub struct FormatEngine {
    toggles: ToggleState,
    alignment: Alignment,
    font_family: String,
    font_size: String,
    empty_list_policy: EmptyListPolicy,
}

impl FormatEngine {
    pub fn new() -> Self {
        Self {
            toggles: ToggleState::default(),
            alignment: Alignment::Left,
            font_family: "Arial".into(),
            font_size: "12".into(),
            empty_list_policy: EmptyListPolicy::default(),
        }
    }

    /// Select the behavior when a list conversion discards every line.
    pub fn with_empty_list_policy(mut self, policy: EmptyListPolicy) -> Self {
        self.empty_list_policy = policy;
        self
    }

    pub fn toggles(&self) -> ToggleState {
        self.toggles
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> &str {
        &self.font_size
    }

    /// Convert the selected text to upper or lower case.
    ///
    /// Replaces the selected range with the transformed plain text and leaves
    /// the selection spanning exactly the inserted text. No-op without an
    /// active range. Returns whether anything was replaced.
    pub fn convert_case(&self, host: &mut dyn EditorHost, transform: CaseTransform) -> bool {
        let Some(range) = host.active_range() else {
            return false;
        };
        let text = range.selected_text();
        let converted = match transform {
            CaseTransform::Upper => text.to_uppercase(),
            CaseTransform::Lower => text.to_lowercase(),
        };
        range.replace_selected(&converted);
        true
    }

    /// Flip an inline style and issue the matching host command.
    ///
    /// The flag is a display concern; the command has no effect on the host
    /// side when no selection is live. Returns the new flag value.
    pub fn toggle(&mut self, host: &mut dyn EditorHost, style: InlineStyle) -> bool {
        let flag = match style {
            InlineStyle::Bold => {
                self.toggles.bold = !self.toggles.bold;
                self.toggles.bold
            }
            InlineStyle::Italic => {
                self.toggles.italic = !self.toggles.italic;
                self.toggles.italic
            }
            InlineStyle::Underline => {
                self.toggles.underline = !self.toggles.underline;
                self.toggles.underline
            }
            InlineStyle::Strikethrough => {
                self.toggles.strikethrough = !self.toggles.strikethrough;
                self.toggles.strikethrough
            }
        };
        host.apply_command(style.command_name(), None);
        flag
    }

    /// Solicit a color and apply it over the selection.
    ///
    /// A dismissed prompt leaves everything untouched. Returns whether a
    /// command was issued.
    pub fn apply_color(
        &self,
        host: &mut dyn EditorHost,
        prompt: &mut dyn ColorPrompt,
        target: ColorTarget,
    ) -> bool {
        match prompt.color(target) {
            Some(value) => {
                host.apply_command(target.command_name(), Some(&value));
                true
            }
            None => false,
        }
    }

    /// Apply block alignment over the selection.
    pub fn set_alignment(&mut self, host: &mut dyn EditorHost, alignment: Alignment) {
        self.alignment = alignment;
        host.apply_command(alignment.command_name(), None);
    }

    /// Set the font family over the selection.
    pub fn set_font_family(&mut self, host: &mut dyn EditorHost, family: &str) {
        self.font_family = family.to_string();
        host.apply_command("fontName", Some(family));
    }

    /// Set the font size over the selection.
    pub fn set_font_size(&mut self, host: &mut dyn EditorHost, size: &str) {
        self.font_size = size.to_string();
        host.apply_command("fontSize", Some(size));
    }

    /// Convert the selection (or the whole container when the selection is
    /// collapsed) into list markup.
    ///
    /// Lines are split on newlines, blank lines dropped, leading markers
    /// stripped, and the survivors rendered as items of the requested kind.
    /// The container's entire content is replaced and the edit-completion
    /// signal fired. Aborting (no range, or suppressed empty result) is a
    /// complete no-op.
    pub fn convert_list(&self, host: &mut dyn EditorHost, kind: ListKind) -> ListOutcome {
        let Some(range) = host.active_range() else {
            return ListOutcome::NoActiveRange;
        };

        let selected = range.selected_text();
        let source = if selected.is_empty() {
            range.container_text()
        } else {
            selected
        };

        let block = ListBlock::from_text(kind, &source);
        if block.is_empty() && self.empty_list_policy == EmptyListPolicy::Suppress {
            return ListOutcome::SuppressedEmpty;
        }

        range.replace_container(&block.to_html());
        range.commit();
        ListOutcome::Applied(block)
    }
}

impl Default for FormatEngine {
    fn default() -> Self {
        Self::new()
    }
}
