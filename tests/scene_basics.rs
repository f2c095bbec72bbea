use eframe_stage::{Scene, ShapeId, ShapeRecord};
use egui::Pos2;

fn shape(id: u64, x: f32, y: f32, width: f32, height: f32) -> ShapeRecord {
    ShapeRecord {
        id: ShapeId(id),
        x,
        y,
        width,
        height,
        image_url: "https://example.com/photo.jpg".to_owned(),
    }
}

fn seeded() -> Scene {
    Scene::new(vec![
        shape(1, 20.0, 20.0, 50.0, 50.0),
        shape(2, 100.0, 200.0, 150.0, 150.0),
    ])
}

#[test]
fn seed_list_matches_the_reference_layout() {
    let scene = Scene::with_seed();

    assert_eq!(scene.items().len(), 2);
    assert_eq!(scene.selected_id(), None);

    let first = &scene.items()[0];
    assert_eq!(first.id, ShapeId(1));
    assert_eq!((first.x, first.y, first.width, first.height), (20.0, 20.0, 50.0, 50.0));

    let second = &scene.items()[1];
    assert_eq!(second.id, ShapeId(2));
    assert_eq!(
        (second.x, second.y, second.width, second.height),
        (100.0, 200.0, 150.0, 150.0)
    );
}

#[test]
fn at_most_one_shape_is_selected() {
    let mut scene = seeded();

    scene.select(ShapeId(1));
    assert!(scene.is_selected(ShapeId(1)));
    assert!(!scene.is_selected(ShapeId(2)));

    // Selecting the second shape atomically moves the selection.
    scene.select(ShapeId(2));
    assert!(!scene.is_selected(ShapeId(1)));
    assert!(scene.is_selected(ShapeId(2)));
}

#[test]
fn background_press_clears_any_selection() {
    let mut scene = seeded();

    scene.select(ShapeId(2));
    scene.clear_selection();
    assert_eq!(scene.selected_id(), None);

    // Clearing with nothing selected stays a no-op.
    scene.clear_selection();
    assert_eq!(scene.selected_id(), None);
}

#[test]
fn select_with_unknown_id_changes_nothing() {
    let mut scene = seeded();
    scene.select(ShapeId(1));

    scene.select(ShapeId(42));
    assert_eq!(scene.selected_id(), Some(ShapeId(1)));
}

#[test]
fn apply_change_with_unknown_id_changes_nothing() {
    let mut scene = seeded();
    let before: Vec<ShapeRecord> = scene.items().to_vec();

    scene.apply_change(shape(42, 0.0, 0.0, 10.0, 10.0));

    assert_eq!(scene.items(), before.as_slice());
}

#[test]
fn select_drag_and_clear_scenario() {
    let mut scene = seeded();

    scene.select(ShapeId(1));
    assert!(scene.is_selected(ShapeId(1)));

    // Drag shape 1 to (40, 60): only its position changes.
    let dragged = scene.items()[0].dragged_to(Pos2::new(40.0, 60.0));
    scene.apply_change(dragged);

    let first = &scene.items()[0];
    assert_eq!((first.x, first.y), (40.0, 60.0));
    assert_eq!((first.width, first.height), (50.0, 50.0));
    assert_eq!(scene.items()[1], shape(2, 100.0, 200.0, 150.0, 150.0));

    // Click on the empty stage: no shape keeps a handle.
    scene.clear_selection();
    assert_eq!(scene.selected_id(), None);
}
