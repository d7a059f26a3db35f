//! List conversion - turning selected lines into structured list markup

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// The list style requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Numeric,
    Alphabetic,
    Stars,
    Arrows,
}

impl ListKind {
    /// Explicit leading glyph for kinds with no native marker.
    pub fn glyph(&self) -> Option<char> {
        match self {
            ListKind::Stars => Some('★'),
            ListKind::Arrows => Some('→'),
            _ => None,
        }
    }

    /// Whether the container is an ordered list.
    pub fn is_ordered(&self) -> bool {
        matches!(self, ListKind::Numeric | ListKind::Alphabetic)
    }
}

/// What to do when every line is discarded during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyListPolicy {
    /// Leave the container untouched.
    #[default]
    Suppress,
    /// Replace the container with a literal empty list.
    RenderEmpty,
}

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // One bullet glyph, a digit run, or one uppercase letter; optional
    // period; then whitespace. Normalizes re-list-ifying of listed text.
    PATTERN.get_or_init(|| Regex::new(r"^(?:•|\d+|[A-Z])\.?\s+").unwrap())
}

/// Strip a leading list marker from one line and trim the remainder.
pub fn strip_list_marker(line: &str) -> &str {
    let stripped = match marker_pattern().find(line) {
        Some(found) => &line[found.end()..],
        None => line,
    };
    stripped.trim()
}

/// A converted list: the requested kind plus the surviving item texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListBlock {
    kind: ListKind,
    items: Vec<String>,
}

impl ListBlock {
    /// Build a list from source text.
    ///
    /// Lines are split on newlines; blank lines and lines that are empty
    /// after marker stripping are discarded.
    pub fn from_text(kind: ListKind, text: &str) -> Self {
        let items = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(strip_list_marker)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { kind, items }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// The visible text of each item, in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the list as the container markup written back to the host.
    ///
    /// Styling is inline so the result renders the same in any surface:
    /// ordered containers carry the native `decimal`/`upper-alpha` ordering,
    /// bullet items the native disc marker, and stars/arrows suppress the
    /// native marker in favor of an explicit glyph span.
    pub fn to_html(&self) -> String {
        let mut items = String::new();
        for item in &self.items {
            let text = escape_html(item);
            match self.kind {
                ListKind::Bullet => {
                    items.push_str(&format!(
                        "<li style=\"list-style-type: disc;\">{text}</li>"
                    ));
                }
                ListKind::Numeric | ListKind::Alphabetic => {
                    items.push_str(&format!("<li>{text}</li>"));
                }
                ListKind::Stars | ListKind::Arrows => {
                    // glyph() is always Some for these kinds
                    let glyph = self.kind.glyph().unwrap_or('•');
                    items.push_str(&format!(
                        "<li style=\"list-style: none; position: relative; padding-left: 0;\">\
                         <span style=\"position: absolute; left: -20px; top: 0;\">{glyph}</span>{text}</li>"
                    ));
                }
            }
        }

        match self.kind {
            ListKind::Numeric => format!(
                "<ol style=\"padding-left: 30px; margin: 0; list-style-type: decimal;\">{items}</ol>"
            ),
            ListKind::Alphabetic => format!(
                "<ol style=\"padding-left: 30px; margin: 0; list-style-type: upper-alpha;\">{items}</ol>"
            ),
            ListKind::Bullet => format!(
                "<ul style=\"padding-left: 30px; margin: 0; list-style-type: disc;\">{items}</ul>"
            ),
            ListKind::Stars | ListKind::Arrows => format!(
                "<ul style=\"padding-left: 30px; margin: 0; list-style-type: none;\">{items}</ul>"
            ),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
