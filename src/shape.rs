use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest width or height a shape box may take, in stage units.
/// Resize proposals below this floor are rejected, not clamped.
pub const MIN_SHAPE_SIZE: f32 = 5.0;

/// A unique identifier for a shape, assigned at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One placed image on the stage.
///
/// Records are value types: gestures produce a new record via the helpers
/// below and the scene swaps it in wholesale. Nothing mutates a record's
/// fields in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: ShapeId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// URL of the displayed image. Immutable after creation.
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

impl ShapeRecord {
    /// The box this shape occupies on the stage.
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(Pos2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }

    /// The record after a finished drag: moved to `pos`, size untouched.
    pub fn dragged_to(&self, pos: Pos2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            ..self.clone()
        }
    }

    /// The record after a finished transform gesture: moved to `position`,
    /// with the gesture's accumulated scale applied to the pre-gesture box.
    /// The result stores literal width/height, so scale is back to 1.
    pub fn transformed(&self, position: Pos2, scale: Vec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: self.width * scale.x,
            height: self.height * scale.y,
            ..self.clone()
        }
    }
}
