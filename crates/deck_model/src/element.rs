//! Element types - the tagged union of visual objects placed on a slide

use crate::{ChartData, ChartOptions, ChartType, Color, ElementId};
use serde::{Deserialize, Serialize};

/// Placement and size of an element on its slide, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Shape variants supported by the catalog.
///
/// A closed set: an unknown shape kind is unrepresentable, instead of a
/// string key silently looking up nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    // Basic
    Rectangle,
    Circle,
    Triangle,
    Diamond,
    Pentagon,
    Hexagon,
    // Flowchart
    Process,
    Decision,
    StartEnd,
    // 3-D
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Pyramid,
    Torus,
}

/// The variant-specific payload of an element.
///
/// Serialized with a lowercase `type` discriminant to stay compatible with
/// the document format (`"type": "shape"`, `"type": "textbox"`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementBody {
    #[serde(rename_all = "camelCase")]
    Shape {
        shape_type: ShapeKind,
        fill: Color,
        stroke: Color,
        stroke_width: f32,
    },
    #[serde(rename_all = "camelCase")]
    Icon {
        /// The glyph drawn for this icon.
        content: String,
        font_size: f32,
    },
    #[serde(rename_all = "camelCase")]
    Textbox {
        content: String,
        font_size: f32,
        font_family: String,
        color: Color,
    },
    Image {
        /// Data URI or URL.
        src: String,
        alt: String,
    },
    Table {
        rows: u32,
        cols: u32,
        /// Row-major grid of cell strings, `rows` x `cols`.
        data: Vec<Vec<String>>,
    },
    #[serde(rename_all = "camelCase")]
    Chart {
        chart_type: ChartType,
        data: ChartData,
        options: ChartOptions,
        title: String,
    },
    Equation {
        content: String,
    },
}

impl ElementBody {
    /// The discriminant name used on the wire.
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementBody::Shape { .. } => "shape",
            ElementBody::Icon { .. } => "icon",
            ElementBody::Textbox { .. } => "textbox",
            ElementBody::Image { .. } => "image",
            ElementBody::Table { .. } => "table",
            ElementBody::Chart { .. } => "chart",
            ElementBody::Equation { .. } => "equation",
        }
    }
}

/// One placed visual object on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(flatten)]
    pub bounds: Bounds,
    #[serde(flatten)]
    pub body: ElementBody,
}

impl Element {
    pub fn new(id: ElementId, bounds: Bounds, body: ElementBody) -> Self {
        Self { id, bounds, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_serializes_with_type_tag() {
        let element = Element::new(
            ElementId(42),
            Bounds::new(150.0, 150.0, 100.0, 100.0),
            ElementBody::Shape {
                shape_type: ShapeKind::Rectangle,
                fill: Color::AMBER,
                stroke: Color::DARK_AMBER,
                stroke_width: 2.0,
            },
        );
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["type"], "shape");
        assert_eq!(value["shapeType"], "rectangle");
        assert_eq!(value["fill"], "#F0A500");
        assert_eq!(value["strokeWidth"], 2.0);
        assert_eq!(value["x"], 150.0);
    }

    #[test]
    fn table_round_trips() {
        let element = Element::new(
            ElementId(7),
            Bounds::new(100.0, 100.0, 160.0, 80.0),
            ElementBody::Table {
                rows: 2,
                cols: 2,
                data: vec![
                    vec!["Cell".into(), "Cell".into()],
                    vec!["Cell".into(), "Cell".into()],
                ],
            },
        );
        let json = serde_json::to_string(&element).unwrap();
        let back: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(back, element);
    }

    #[test]
    fn textbox_uses_camel_case_fields() {
        let element = Element::new(
            ElementId(1),
            Bounds::new(100.0, 100.0, 200.0, 100.0),
            ElementBody::Textbox {
                content: "New text".into(),
                font_size: 16.0,
                font_family: "Arial".into(),
                color: Color::BLACK,
            },
        );
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["fontSize"], 16.0);
        assert_eq!(value["fontFamily"], "Arial");
    }
}
