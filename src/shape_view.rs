use egui::{Color32, Id, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::shape::{ShapeId, ShapeRecord};
use crate::texture_store::TextureStore;

/// Gestures a shape view reports upward. The scene decides what they mean;
/// the view never touches shared state.
#[derive(Debug, Clone)]
pub enum ShapeEvent {
    /// The shape body was clicked or tapped.
    Clicked(ShapeId),
    /// A drag gesture finished with this updated record.
    Changed(ShapeRecord),
}

/// An in-progress body drag: which shape and how far it has moved.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    pub id: ShapeId,
    pub delta: Vec2,
}

/// Renders one shape record and owns its body interactions.
///
/// Draws the record's image when the texture is ready, or an empty
/// placeholder box while it is pending or failed. The box accepts drags and
/// clicks either way.
pub struct ShapeView<'a> {
    record: &'a ShapeRecord,
}

impl<'a> ShapeView<'a> {
    pub fn new(record: &'a ShapeRecord) -> Self {
        Self { record }
    }

    /// Draw the shape and react to body gestures.
    ///
    /// `resize_preview` overrides the drawn box mid-resize (the gizmo owns
    /// that preview). `drag` is the stage-wide body-drag state; the view
    /// claims it on drag start and resolves it into a `Changed` event on
    /// drag end.
    pub fn show(
        &self,
        ui: &mut Ui,
        images: &mut TextureStore,
        drag: &mut Option<DragState>,
        resize_preview: Option<Rect>,
    ) -> Option<ShapeEvent> {
        let record_rect = self.record.rect();
        let display_rect = match (resize_preview, *drag) {
            (Some(preview), _) => preview,
            (None, Some(state)) if state.id == self.record.id => {
                record_rect.translate(state.delta)
            }
            _ => record_rect,
        };

        self.paint(ui, images, display_rect);

        let id = Id::new(("shape", self.record.id));
        let response = ui.interact(display_rect, id, Sense::click_and_drag());

        if response.clicked() {
            return Some(ShapeEvent::Clicked(self.record.id));
        }

        if response.drag_started() {
            *drag = Some(DragState {
                id: self.record.id,
                delta: Vec2::ZERO,
            });
        }
        if let Some(state) = drag {
            if state.id == self.record.id {
                if response.dragged() {
                    state.delta += response.drag_delta();
                }
                if response.drag_stopped() {
                    let end = record_rect.translate(state.delta).min;
                    *drag = None;
                    return Some(ShapeEvent::Changed(self.record.dragged_to(end)));
                }
            }
        }

        None
    }

    fn paint(&self, ui: &Ui, images: &mut TextureStore, rect: Rect) {
        match images.texture_for(ui.ctx(), &self.record.image_url) {
            Some(texture_id) => {
                let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                ui.painter().image(texture_id, rect, uv, Color32::WHITE);
            }
            None => {
                // Image pending or failed: an empty box that stays interactive.
                ui.painter().rect_filled(rect, 0.0, Color32::from_gray(200));
                ui.painter()
                    .rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_gray(100)));
            }
        }
    }
}
