//! Static catalog of shapes, icons, and templates
//!
//! Pure data: no state, no identity. Kinds are closed enums so an invalid
//! entry is unrepresentable rather than a string key that looks up nothing.

use deck_model::{Bounds, Color, ShapeKind, Slide, SlideId, SlideLayout};
use serde::{Deserialize, Serialize};

/// Default placement and styling for shape elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDefaults {
    pub bounds: Bounds,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
}

/// Catalog defaults for a shape kind.
///
/// All shapes share one default geometry and palette; the kind only selects
/// the outline drawn by the renderer.
pub fn shape_defaults(_kind: ShapeKind) -> ShapeDefaults {
    ShapeDefaults {
        bounds: Bounds::new(150.0, 150.0, 100.0, 100.0),
        fill: Color::AMBER,
        stroke: Color::DARK_AMBER,
        stroke_width: 2.0,
    }
}

/// The shape kinds offered by the catalog, grouped as the panel shows them.
pub const BASIC_SHAPES: &[ShapeKind] = &[
    ShapeKind::Rectangle,
    ShapeKind::Circle,
    ShapeKind::Triangle,
    ShapeKind::Diamond,
    ShapeKind::Pentagon,
    ShapeKind::Hexagon,
];

pub const FLOWCHART_SHAPES: &[ShapeKind] =
    &[ShapeKind::Process, ShapeKind::Decision, ShapeKind::StartEnd];

pub const THREE_D_SHAPES: &[ShapeKind] = &[
    ShapeKind::Cube,
    ShapeKind::Sphere,
    ShapeKind::Cylinder,
    ShapeKind::Cone,
    ShapeKind::Pyramid,
    ShapeKind::Torus,
];

/// Icon glyphs offered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Star,
    Heart,
    Check,
    Arrow,
    Warning,
    Info,
    Home,
    Phone,
    Email,
    User,
    Settings,
    Search,
    Calendar,
    Clock,
    Location,
    Camera,
    Music,
    Video,
}

impl IconKind {
    /// The glyph placed on the slide for this icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::Star => "⭐",
            IconKind::Heart => "❤️",
            IconKind::Check => "✅",
            IconKind::Arrow => "➡️",
            IconKind::Warning => "⚠️",
            IconKind::Info => "ℹ️",
            IconKind::Home => "🏠",
            IconKind::Phone => "📞",
            IconKind::Email => "📧",
            IconKind::User => "👤",
            IconKind::Settings => "⚙️",
            IconKind::Search => "🔍",
            IconKind::Calendar => "📅",
            IconKind::Clock => "🕐",
            IconKind::Location => "📍",
            IconKind::Camera => "📷",
            IconKind::Music => "🎵",
            IconKind::Video => "🎥",
        }
    }

    /// Catalog default placement for icons.
    pub fn default_bounds() -> Bounds {
        Bounds::new(200.0, 200.0, 50.0, 50.0)
    }

    /// Catalog default glyph size.
    pub fn default_font_size() -> f32 {
        32.0
    }
}

/// A single-slide template: layout plus color scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideTemplate {
    pub name: String,
    pub layout: SlideLayout,
    pub background: Color,
    pub text_color: Color,
}

/// The built-in slide templates.
pub fn slide_templates() -> Vec<SlideTemplate> {
    vec![
        SlideTemplate {
            name: "Title Slide".into(),
            layout: SlideLayout::TitleOnly,
            background: Color::WHITE,
            text_color: Color::BLACK,
        },
        SlideTemplate {
            name: "Content Slide".into(),
            layout: SlideLayout::TitleContent,
            background: Color::rgb(0xF8, 0xFA, 0xFC),
            text_color: Color::rgb(0x1F, 0x29, 0x37),
        },
        SlideTemplate {
            name: "Two Column".into(),
            layout: SlideLayout::TwoColumn,
            background: Color::rgb(0xEF, 0xF6, 0xFF),
            text_color: Color::COVER_BLUE,
        },
        SlideTemplate {
            name: "Dark Theme".into(),
            layout: SlideLayout::TitleContent,
            background: Color::rgb(0x1F, 0x29, 0x37),
            text_color: Color::WHITE,
        },
    ]
}

/// A multi-slide deck template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckTemplate {
    pub name: String,
    pub category: String,
    pub description: String,
    /// Content slides; ids here are placeholders, reassigned at instantiation.
    pub slides: Vec<Slide>,
}

fn template_slide(index: i64, title: &str, content: &str) -> Slide {
    let mut slide = Slide::new(SlideId(index));
    slide.title = title.into();
    slide.content = content.into();
    slide
}

/// The built-in deck templates.
pub fn deck_templates() -> Vec<DeckTemplate> {
    vec![
        DeckTemplate {
            name: "Blank Presentation".into(),
            category: "Basic".into(),
            description: "Start with a blank presentation".into(),
            slides: vec![template_slide(1, "Click to add title", "Click to add content")],
        },
        DeckTemplate {
            name: "Business Pitch".into(),
            category: "Business".into(),
            description: "Professional business presentation".into(),
            slides: vec![
                template_slide(1, "Company Overview", "Present your company vision and mission"),
                template_slide(2, "Problem Statement", "Define the problem you are solving"),
                template_slide(3, "Our Solution", "Present your innovative solution"),
            ],
        },
        DeckTemplate {
            name: "Project Report".into(),
            category: "Project".into(),
            description: "Project status and updates".into(),
            slides: vec![
                template_slide(1, "Project Status Report", "Q4 2024 Progress Update"),
                template_slide(2, "Key Achievements", "Major milestones and accomplishments"),
            ],
        },
        DeckTemplate {
            name: "Educational".into(),
            category: "Education".into(),
            description: "Educational content template".into(),
            slides: vec![
                template_slide(1, "Course Introduction", "Welcome to the course"),
                template_slide(2, "Learning Objectives", "What you will learn today"),
            ],
        },
        DeckTemplate {
            name: "Marketing Plan".into(),
            category: "Marketing".into(),
            description: "Marketing strategy presentation".into(),
            slides: vec![
                template_slide(1, "Marketing Strategy 2024", "Our comprehensive marketing approach"),
                template_slide(2, "Target Audience", "Understanding our customers"),
            ],
        },
    ]
}
