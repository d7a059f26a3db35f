//! End-to-end deck editing: instantiate a template, populate a slide, and
//! run selection-scoped formatting against the store.

use deck_model::{ElementBody, IdGenerator, SlidePatch};
use deck_store::DeckStore;
use elements::{apply_template, deck_templates, instantiate_deck, slide_templates, ElementFactory};
use format_engine::{
    BufferHost, BufferRange, CaseTransform, FormatEngine, ListKind, ListOutcome,
};

#[test]
fn template_deck_builds_and_accepts_elements() {
    let mut ids = IdGenerator::new();
    let templates = deck_templates();
    let pitch = templates
        .iter()
        .find(|t| t.name == "Business Pitch")
        .unwrap();

    let slides = instantiate_deck(&mut ids, pitch);
    assert_eq!(slides.len(), 4); // cover + 3 content slides

    let mut store = DeckStore::from_slides(slides);
    let mut factory = ElementFactory::with_ids(ids);

    store.set_current_slide(1);
    factory.insert_text_box(&mut store).unwrap();
    factory.insert_table(&mut store, 2, 3).unwrap();

    let slide = store.slide(1).unwrap();
    assert_eq!(slide.elements.len(), 2);
    // The cover slide was not touched.
    assert!(store.slide(0).unwrap().elements.is_empty());
}

#[test]
fn styling_a_templated_slide_preserves_its_elements() {
    let mut store = DeckStore::from_slides(instantiate_deck(
        &mut IdGenerator::new(),
        &deck_templates()[0],
    ));
    let mut factory = ElementFactory::new();
    factory.insert_equation(&mut store).unwrap();

    let templates = slide_templates();
    apply_template(&mut store, 0, &templates[3]).unwrap();

    let slide = store.slide(0).unwrap();
    assert_eq!(slide.background, templates[3].background);
    assert_eq!(slide.elements.len(), 1);
}

#[test]
fn list_conversion_commit_flows_back_into_the_store() {
    let mut store = DeckStore::from_slides(instantiate_deck(
        &mut IdGenerator::new(),
        &deck_templates()[0],
    ));
    let engine = FormatEngine::new();
    let mut host = BufferHost::with_range(BufferRange::select_all("first\nsecond\nthird"));

    let outcome = engine.convert_list(&mut host, ListKind::Bullet);
    let ListOutcome::Applied(block) = outcome else {
        panic!("expected applied outcome");
    };
    assert_eq!(block.items(), &["first", "second", "third"]);

    // The commit signal is the host's cue to write the container content
    // back through the store's single update path.
    let range = host.range().unwrap();
    assert_eq!(range.commits, 1);
    store
        .update_slide(0, SlidePatch::content(range.text()))
        .unwrap();
    assert!(store.slide(0).unwrap().content.starts_with("<ul"));
}

#[test]
fn formatting_without_a_selection_leaves_elements_untouched() {
    let mut store = DeckStore::from_slides(instantiate_deck(
        &mut IdGenerator::new(),
        &deck_templates()[1],
    ));
    let mut factory = ElementFactory::new();
    store.set_current_slide(1);
    factory.insert_text_box(&mut store).unwrap();
    factory.insert_chart(&mut store, "2").unwrap();

    let before = serde_json::to_string(&store.slide(1).unwrap().elements).unwrap();

    let mut engine = FormatEngine::new();
    let mut host = BufferHost::without_selection();
    engine.convert_case(&mut host, CaseTransform::Upper);
    engine.convert_list(&mut host, ListKind::Stars);
    engine.toggle(&mut host, format_engine::InlineStyle::Bold);

    let after = serde_json::to_string(&store.slide(1).unwrap().elements).unwrap();
    assert_eq!(before, after);
}

#[test]
fn chart_elements_keep_their_seed_data_through_the_store() {
    let mut store = DeckStore::from_slides(instantiate_deck(
        &mut IdGenerator::new(),
        &deck_templates()[0],
    ));
    let mut factory = ElementFactory::new();
    factory.insert_chart(&mut store, "4").unwrap();

    let slide = store.slide(0).unwrap();
    let ElementBody::Chart { data, title, .. } = &slide.elements[0].body else {
        panic!("expected chart");
    };
    assert_eq!(title, "Sample Chart");
    assert_eq!(data.labels, vec!["Q1", "Q2", "Q3", "Q4"]);
}
