use egui::{Color32, Pos2, Rect};
use sketchpad::Document;
use sketchpad::element::{Element, Style, factory};
use sketchpad::error::EditorError;
use uuid::Uuid;

fn test_element() -> sketchpad::element::ElementKind {
    factory::create_rect(
        Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0)),
        Style {
            color: Color32::GREEN,
            width: 1.0,
            opacity: 255,
            filled: true,
        },
    )
}

#[test]
fn test_new_document_has_one_active_layer() {
    let doc = Document::new();
    assert_eq!(doc.layer_count(), 1);
    let active = doc.active_layer().expect("fresh document has an active layer");
    assert_eq!(Some(active.id), doc.active_layer_id());
}

#[test]
fn test_last_layer_cannot_be_removed() {
    let mut doc = Document::new();
    let only = doc.layers()[0].id;
    assert_eq!(doc.remove_layer(only).unwrap_err(), EditorError::LastLayer);
    assert_eq!(doc.layer_count(), 1);
}

#[test]
fn test_layer_list_never_empties() {
    let mut doc = Document::new();
    // An arbitrary add/remove sequence can never drain the stack.
    for round in 0..5 {
        doc.add_layer(&format!("extra {round}"));
        doc.add_layer(&format!("more {round}"));
        while doc.layer_count() > 1 {
            let id = doc.layers()[0].id;
            doc.remove_layer(id).unwrap();
        }
        assert_eq!(doc.layer_count(), 1);
        assert!(doc.remove_layer(doc.layers()[0].id).is_err());
    }
    assert!(doc.layer_count() >= 1);
}

#[test]
fn test_add_layer_becomes_active() {
    let mut doc = Document::new();
    let id = doc.add_layer("Layer 2");
    assert_eq!(doc.active_layer_id(), Some(id));
    assert_eq!(doc.layer_count(), 2);
    // New layers stack on top.
    assert_eq!(doc.layers().last().unwrap().id, id);
}

#[test]
fn test_removing_active_layer_falls_back_to_last() {
    let mut doc = Document::new();
    let bottom = doc.layers()[0].id;
    let top = doc.add_layer("Layer 2");
    let middle = doc.add_layer("Layer 3");
    // Layout is now [bottom, top, middle] with `middle` active.
    doc.set_active_layer(top);

    doc.remove_layer(top).unwrap();
    // Active layer was removed: activation falls back to the new last layer.
    assert_eq!(doc.active_layer_id(), Some(middle));
    assert!(doc.layer_index(bottom).is_some());
}

#[test]
fn test_activating_non_member_is_a_no_op() {
    let mut doc = Document::new();
    let original = doc.active_layer_id();
    doc.set_active_layer(Uuid::new_v4());
    assert_eq!(doc.active_layer_id(), original);
}

#[test]
fn test_active_layer_is_always_a_member() {
    let mut doc = Document::new();
    for i in 0..3 {
        doc.add_layer(&format!("layer {i}"));
    }
    while doc.layer_count() > 1 {
        let id = doc.layers()[doc.layer_count() - 1].id;
        doc.remove_layer(id).unwrap();
        let active = doc.active_layer_id().expect("active never goes unset");
        assert!(doc.layer_index(active).is_some());
    }
}

#[test]
fn test_layer_duplicate_is_structurally_independent() {
    let mut doc = Document::new();
    let layer = doc.active_layer_mut().unwrap();
    layer.add_element(test_element());
    layer.opacity = 99;
    layer.visible = false;

    let mut copy = doc.active_layer().unwrap().duplicate();
    assert_eq!(copy.opacity, 99);
    assert!(!copy.visible);
    assert_eq!(copy.elements().len(), 1);
    assert_ne!(copy.id, doc.active_layer().unwrap().id);

    // Mutating the copy's element list leaves the original unchanged.
    copy.add_element(test_element());
    copy.add_element(test_element());
    assert_eq!(copy.elements().len(), 3);
    assert_eq!(doc.active_layer().unwrap().elements().len(), 1);
}

#[test]
fn test_layer_hit_test_prefers_topmost() {
    let mut doc = Document::new();
    let bottom = test_element();
    let top = test_element();
    let top_id = top.id();
    let layer = doc.active_layer_mut().unwrap();
    layer.add_element(bottom);
    layer.add_element(top);

    // Both rects overlap at (5, 5); the most recently added wins.
    let hit = layer.hit_test(Pos2::new(5.0, 5.0)).expect("point is covered");
    assert_eq!(hit.id(), top_id);
    assert!(layer.hit_test(Pos2::new(500.0, 500.0)).is_none());
}

#[test]
fn test_element_removal_round_trip() {
    let mut doc = Document::new();
    let element = test_element();
    let element_id = element.id();
    doc.active_layer_mut().unwrap().add_element(element);
    assert_eq!(doc.active_layer().unwrap().elements().len(), 1);

    let removed = doc
        .active_layer_mut()
        .unwrap()
        .remove_element(element_id)
        .expect("element is present");
    assert_eq!(removed.id(), element_id);
    assert!(doc.active_layer().unwrap().elements().is_empty());
    assert!(doc.active_layer_mut().unwrap().remove_element(element_id).is_none());
}
