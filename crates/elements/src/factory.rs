//! Element factory - construction of new slide elements
//!
//! Every successful factory operation appends exactly one element to the
//! store's current slide, through the store's single update entry point.
//! Malformed numeric input is clamped, unrecognized enumerated input is
//! defaulted; the only operation that can fail outright is the image file
//! read.

use crate::{shape_defaults, IconKind, InsertPrompt, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use deck_model::{
    Bounds, ChartData, ChartOptions, ChartType, Color, Element, ElementBody, ElementId,
    IdGenerator, ShapeKind,
};
use deck_store::DeckStore;
use std::path::Path;
use tracing::debug;

/// Inclusive range tables are clamped into.
pub const TABLE_DIMENSION_RANGE: (u32, u32) = (1, 10);

/// Factory for new elements; owns the identity generator.
#[derive(Debug, Default)]
pub struct ElementFactory {
    ids: IdGenerator,
}

impl ElementFactory {
    pub fn new() -> Self {
        Self {
            ids: IdGenerator::new(),
        }
    }

    /// Create a factory sharing an existing generator state.
    pub fn with_ids(ids: IdGenerator) -> Self {
        Self { ids }
    }

    /// Access the generator, e.g. to hand it to deck instantiation.
    pub fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    /// Append one element to the current slide.
    fn append(
        &mut self,
        store: &mut DeckStore,
        bounds: Bounds,
        body: ElementBody,
    ) -> Result<ElementId> {
        let index = store.current_slide();
        let mut elements = store
            .slide(index)
            .map(|slide| slide.elements.clone())
            .unwrap_or_default();
        let id = self.ids.next_element_id();
        debug!(%id, kind = body.type_name(), slide = index, "appending element");
        elements.push(Element::new(id, bounds, body));
        store.update_slide(index, deck_model::SlidePatch::elements(elements))?;
        Ok(id)
    }

    /// Insert a shape with catalog geometry and styling.
    pub fn insert_shape(&mut self, store: &mut DeckStore, kind: ShapeKind) -> Result<ElementId> {
        let defaults = shape_defaults(kind);
        self.append(
            store,
            defaults.bounds,
            ElementBody::Shape {
                shape_type: kind,
                fill: defaults.fill,
                stroke: defaults.stroke,
                stroke_width: defaults.stroke_width,
            },
        )
    }

    /// Insert an icon glyph with catalog geometry.
    pub fn insert_icon(&mut self, store: &mut DeckStore, kind: IconKind) -> Result<ElementId> {
        self.append(
            store,
            IconKind::default_bounds(),
            ElementBody::Icon {
                content: kind.glyph().to_string(),
                font_size: IconKind::default_font_size(),
            },
        )
    }

    /// Insert an empty text box.
    pub fn insert_text_box(&mut self, store: &mut DeckStore) -> Result<ElementId> {
        self.append(
            store,
            Bounds::new(100.0, 100.0, 200.0, 100.0),
            ElementBody::Textbox {
                content: "New text".into(),
                font_size: 16.0,
                font_family: "Arial".into(),
                color: Color::BLACK,
            },
        )
    }

    /// Insert a placeholder equation.
    pub fn insert_equation(&mut self, store: &mut DeckStore) -> Result<ElementId> {
        self.append(
            store,
            Bounds::new(100.0, 100.0, 250.0, 150.0),
            ElementBody::Equation {
                content: "E = mc²".into(),
            },
        )
    }

    /// Insert a table.
    ///
    /// Row and column counts are clamped into `[1, 10]`; every cell starts
    /// as the literal string `"Cell"`. Width and height derive from the
    /// clamped counts.
    pub fn insert_table(&mut self, store: &mut DeckStore, rows: i64, cols: i64) -> Result<ElementId> {
        let (min, max) = TABLE_DIMENSION_RANGE;
        let rows = rows.clamp(min as i64, max as i64) as u32;
        let cols = cols.clamp(min as i64, max as i64) as u32;
        let data = vec![vec!["Cell".to_string(); cols as usize]; rows as usize];
        self.append(
            store,
            Bounds::new(100.0, 100.0, cols as f32 * 80.0, rows as f32 * 40.0),
            ElementBody::Table { rows, cols, data },
        )
    }

    /// Insert a chart seeded with the sample dataset.
    ///
    /// The selector is resolved through [`ChartType::from_selector`];
    /// anything unrecognized becomes a pie chart.
    pub fn insert_chart(&mut self, store: &mut DeckStore, selector: &str) -> Result<ElementId> {
        let chart_type = ChartType::from_selector(selector);
        self.append(
            store,
            Bounds::new(100.0, 100.0, 400.0, 300.0),
            ElementBody::Chart {
                chart_type,
                data: ChartData::sample(),
                options: ChartOptions::default(),
                title: "Sample Chart".into(),
            },
        )
    }

    /// Insert a table after prompting for dimensions.
    ///
    /// A dismissed prompt returns `Ok(None)` and leaves the deck unmodified.
    pub fn insert_table_prompted(
        &mut self,
        store: &mut DeckStore,
        prompt: &mut dyn InsertPrompt,
    ) -> Result<Option<ElementId>> {
        match prompt.table_dimensions() {
            Some((rows, cols)) => self.insert_table(store, rows, cols).map(Some),
            None => Ok(None),
        }
    }

    /// Insert a chart after prompting for its type.
    pub fn insert_chart_prompted(
        &mut self,
        store: &mut DeckStore,
        prompt: &mut dyn InsertPrompt,
    ) -> Result<Option<ElementId>> {
        match prompt.chart_type() {
            Some(selector) => self.insert_chart(store, &selector).map(Some),
            None => Ok(None),
        }
    }

    /// Import an image file as a data-URI element.
    ///
    /// The read suspends; the element is appended only after the read
    /// completes. A failed read appends nothing. The file name becomes the
    /// alt text.
    pub async fn insert_image(
        &mut self,
        store: &mut DeckStore,
        path: impl AsRef<Path>,
    ) -> Result<ElementId> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let src = format!("data:{};base64,{}", image_mime(path), BASE64.encode(&bytes));
        let alt = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.append(
            store,
            Bounds::new(100.0, 100.0, 300.0, 200.0),
            ElementBody::Image { src, alt },
        )
    }
}

fn image_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedPrompt;
    use deck_model::{Slide, SlideId};
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::io::Write;

    fn store() -> DeckStore {
        DeckStore::from_slides(vec![Slide::new(SlideId(1))])
    }

    fn current_elements(store: &DeckStore) -> &[Element] {
        &store.slide(store.current_slide()).unwrap().elements
    }

    #[test]
    fn shape_uses_catalog_defaults() {
        let mut factory = ElementFactory::new();
        let mut store = store();
        factory.insert_shape(&mut store, ShapeKind::Circle).unwrap();

        let elements = current_elements(&store);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].bounds, Bounds::new(150.0, 150.0, 100.0, 100.0));
        let ElementBody::Shape {
            shape_type, fill, ..
        } = &elements[0].body
        else {
            panic!("expected shape");
        };
        assert_eq!(*shape_type, ShapeKind::Circle);
        assert_eq!(*fill, Color::AMBER);
    }

    #[test]
    fn icon_carries_its_glyph() {
        let mut factory = ElementFactory::new();
        let mut store = store();
        factory.insert_icon(&mut store, IconKind::Star).unwrap();

        let ElementBody::Icon { content, font_size } = &current_elements(&store)[0].body else {
            panic!("expected icon");
        };
        assert_eq!(content, "⭐");
        assert_eq!(*font_size, 32.0);
    }

    #[test]
    fn table_dimensions_are_clamped() {
        let mut factory = ElementFactory::new();
        let mut store = store();
        factory.insert_table(&mut store, 15, 0).unwrap();

        let ElementBody::Table { rows, cols, data } = &current_elements(&store)[0].body else {
            panic!("expected table");
        };
        assert_eq!((*rows, *cols), (10, 1));
        assert_eq!(data.len(), 10);
        assert!(data.iter().all(|row| row.len() == 1));
        assert!(data.iter().flatten().all(|cell| cell == "Cell"));
    }

    #[test]
    fn table_geometry_derives_from_counts() {
        let mut factory = ElementFactory::new();
        let mut store = store();
        factory.insert_table(&mut store, 3, 4).unwrap();

        let element = &current_elements(&store)[0];
        assert_eq!(element.bounds.width, 320.0);
        assert_eq!(element.bounds.height, 120.0);
    }

    #[test]
    fn unknown_chart_selector_defaults_to_pie() {
        let mut factory = ElementFactory::new();
        let mut store = store();
        factory.insert_chart(&mut store, "nonsense").unwrap();

        let ElementBody::Chart {
            chart_type, data, ..
        } = &current_elements(&store)[0].body
        else {
            panic!("expected chart");
        };
        assert_eq!(*chart_type, ChartType::Pie);
        assert_eq!(data.labels.len(), 4);
    }

    #[test]
    fn each_insertion_appends_exactly_one_element() {
        let mut factory = ElementFactory::new();
        let mut store = store();
        factory.insert_text_box(&mut store).unwrap();
        factory.insert_equation(&mut store).unwrap();
        factory.insert_shape(&mut store, ShapeKind::Cube).unwrap();
        assert_eq!(current_elements(&store).len(), 3);
    }

    #[test]
    fn element_ids_are_pairwise_distinct() {
        let mut factory = ElementFactory::new();
        let mut store = store();
        for _ in 0..50 {
            factory.insert_text_box(&mut store).unwrap();
        }
        let ids: HashSet<ElementId> = current_elements(&store).iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn cancelled_table_prompt_leaves_deck_unmodified() {
        let mut factory = ElementFactory::new();
        let mut store = store();
        let before = store.slide(0).unwrap().clone();

        let mut prompt = ScriptedPrompt::tables(vec![None]);
        let inserted = factory
            .insert_table_prompted(&mut store, &mut prompt)
            .unwrap();
        assert!(inserted.is_none());
        assert_eq!(store.slide(0).unwrap(), &before);
    }

    #[test]
    fn answered_chart_prompt_inserts() {
        let mut factory = ElementFactory::new();
        let mut store = store();
        let mut prompt = ScriptedPrompt::charts(vec![Some("3".into())]);

        let inserted = factory
            .insert_chart_prompted(&mut store, &mut prompt)
            .unwrap();
        assert!(inserted.is_some());
        let ElementBody::Chart { chart_type, .. } = &current_elements(&store)[0].body else {
            panic!("expected chart");
        };
        assert_eq!(*chart_type, ChartType::Bar);
    }

    #[tokio::test]
    async fn image_import_builds_a_data_uri() {
        let mut factory = ElementFactory::new();
        let mut store = store();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

        factory.insert_image(&mut store, &path).await.unwrap();
        let ElementBody::Image { src, alt } = &current_elements(&store)[0].body else {
            panic!("expected image");
        };
        assert!(src.starts_with("data:image/png;base64,"));
        assert_eq!(alt, "logo.png");
    }

    #[tokio::test]
    async fn failed_image_read_appends_nothing() {
        let mut factory = ElementFactory::new();
        let mut store = store();

        let result = factory
            .insert_image(&mut store, "/nonexistent/image.png")
            .await;
        assert!(result.is_err());
        assert!(current_elements(&store).is_empty());
    }

    proptest! {
        #[test]
        fn table_counts_always_land_in_range(rows in -100i64..100, cols in -100i64..100) {
            let mut factory = ElementFactory::new();
            let mut store = store();
            factory.insert_table(&mut store, rows, cols).unwrap();

            let ElementBody::Table { rows, cols, .. } = &current_elements(&store)[0].body else {
                panic!("expected table");
            };
            prop_assert!((1..=10).contains(rows));
            prop_assert!((1..=10).contains(cols));
        }
    }
}
