use crate::shape::{ShapeId, ShapeRecord};
use log::{debug, warn};

/// The startup shape list, embedded so the stage has content without any
/// external storage.
static SEED_JSON: &str = include_str!("../assets/seed.json");

/// Owner of the shape list and the current selection.
///
/// Shapes are kept in insertion order, which is also paint order: later
/// records draw on top. All mutation goes through whole-record replacement;
/// rendering reads `items`/`selected_id` and nothing else.
pub struct Scene {
    items: Vec<ShapeRecord>,
    selected: Option<ShapeId>,
}

impl Scene {
    pub fn new(items: Vec<ShapeRecord>) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    /// Build the scene from the embedded seed list.
    pub fn with_seed() -> Self {
        let items = serde_json::from_str(SEED_JSON).unwrap_or_else(|err| {
            warn!("invalid seed list, starting empty: {err}");
            Vec::new()
        });
        Self::new(items)
    }

    pub fn items(&self) -> &[ShapeRecord] {
        &self.items
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected == Some(id)
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeRecord> {
        self.items.iter().find(|shape| shape.id == id)
    }

    pub fn selected_record(&self) -> Option<&ShapeRecord> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Select the shape with `id`. Ignored if no such shape exists, so the
    /// selection can never dangle.
    pub fn select(&mut self, id: ShapeId) {
        if self.get(id).is_some() {
            debug!("selected shape {id}");
            self.selected = Some(id);
        } else {
            debug!("ignoring select for unknown shape {id}");
        }
    }

    /// Drop the selection, e.g. after a press on the empty background.
    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            debug!("selection cleared");
        }
    }

    /// Replace the record whose id matches `record`, leaving every other
    /// record and the ordering untouched. A change for an unknown id is
    /// silently dropped; normal flow cannot produce one.
    pub fn apply_change(&mut self, record: ShapeRecord) {
        match self.items.iter_mut().find(|shape| shape.id == record.id) {
            Some(slot) => {
                debug!(
                    "shape {} -> pos ({}, {}) size {}x{}",
                    record.id, record.x, record.y, record.width, record.height
                );
                *slot = record;
            }
            None => debug!("ignoring change for unknown shape {}", record.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    fn shape(id: u64, x: f32, y: f32) -> ShapeRecord {
        ShapeRecord {
            id: ShapeId(id),
            x,
            y,
            width: 50.0,
            height: 50.0,
            image_url: "https://example.com/photo.jpg".to_owned(),
        }
    }

    #[test]
    fn seed_has_the_two_reference_shapes() {
        let scene = Scene::with_seed();
        assert_eq!(scene.items().len(), 2);
        assert_eq!(scene.items()[0].id, ShapeId(1));
        assert_eq!(scene.items()[1].id, ShapeId(2));
        assert_eq!(scene.selected_id(), None);
    }

    #[test]
    fn select_requires_an_existing_shape() {
        let mut scene = Scene::new(vec![shape(1, 0.0, 0.0)]);
        scene.select(ShapeId(9));
        assert_eq!(scene.selected_id(), None);

        scene.select(ShapeId(1));
        assert_eq!(scene.selected_id(), Some(ShapeId(1)));
    }

    #[test]
    fn apply_change_swaps_only_the_matching_record() {
        let mut scene = Scene::new(vec![shape(1, 0.0, 0.0), shape(2, 100.0, 100.0)]);
        scene.apply_change(shape(1, 0.0, 0.0).dragged_to(Pos2::new(40.0, 60.0)));

        assert_eq!(scene.items()[0].x, 40.0);
        assert_eq!(scene.items()[0].y, 60.0);
        assert_eq!(scene.items()[1], shape(2, 100.0, 100.0));
    }

    #[test]
    fn apply_change_for_unknown_id_is_a_noop() {
        let mut scene = Scene::new(vec![shape(1, 0.0, 0.0)]);
        scene.apply_change(shape(9, 1.0, 2.0));
        assert_eq!(scene.items(), [shape(1, 0.0, 0.0)].as_slice());
    }
}
