use egui::{Color32, CursorIcon, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::shape::{MIN_SHAPE_SIZE, ShapeId};

const ANCHOR_SIZE: f32 = 8.0;
const ANCHOR_ROUNDING: f32 = 4.0;
const ACCENT_COLOR: Color32 = Color32::from_rgb(0xEA, 0x26, 0x63);
const ACCENT_HOVER_COLOR: Color32 = Color32::from_rgb(0xF2, 0x6E, 0x96);
const BORDER_STROKE_WIDTH: f32 = 1.0;

/// Corner anchors of the transform gizmo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    fn anchor_pos(self, bounds: Rect) -> Pos2 {
        match self {
            Corner::TopLeft => bounds.left_top(),
            Corner::TopRight => bounds.right_top(),
            Corner::BottomLeft => bounds.left_bottom(),
            Corner::BottomRight => bounds.right_bottom(),
        }
    }

    /// The corner that stays fixed while this one is dragged.
    fn opposite_pos(self, bounds: Rect) -> Pos2 {
        match self {
            Corner::TopLeft => bounds.right_bottom(),
            Corner::TopRight => bounds.left_bottom(),
            Corner::BottomLeft => bounds.right_top(),
            Corner::BottomRight => bounds.left_top(),
        }
    }

    fn cursor_icon(self) -> CursorIcon {
        match self {
            Corner::TopLeft | Corner::BottomRight => CursorIcon::ResizeNwSe,
            Corner::TopRight | Corner::BottomLeft => CursorIcon::ResizeNeSw,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Corner::TopLeft => "top_left",
            Corner::TopRight => "top_right",
            Corner::BottomLeft => "bottom_left",
            Corner::BottomRight => "bottom_right",
        }
    }
}

/// Outcome of a finished resize gesture: where the box ended up and the
/// scale factors accumulated against the box the gesture started from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformEnd {
    pub position: Pos2,
    pub scale: Vec2,
}

impl TransformEnd {
    /// The end report for a gesture that started at `original` and settled
    /// on `current`.
    pub fn between(original: Rect, current: Rect) -> Self {
        Self {
            position: current.min,
            scale: Vec2::new(
                current.width() / original.width(),
                current.height() / original.height(),
            ),
        }
    }
}

/// The box produced by dragging `corner` of `original` by `drag`.
///
/// The opposite corner stays fixed. With `keep_ratio` the larger per-axis
/// scale wins and both axes follow it, matching the anchor's diagonal
/// movement. A drag past the fixed corner yields an inverted box with a
/// negative width or height, which [`accept_box`] rejects.
pub fn propose_box(original: Rect, corner: Corner, drag: Vec2, keep_ratio: bool) -> Rect {
    let fixed = corner.opposite_pos(original);
    let start = corner.anchor_pos(original);
    let target = start + drag;

    let initial = start - fixed;
    let current = target - fixed;
    let mut scale = Vec2::new(current.x / initial.x, current.y / initial.y);
    if keep_ratio {
        let uniform = scale.x.abs().max(scale.y.abs());
        scale = Vec2::new(uniform * scale.x.signum(), uniform * scale.y.signum());
    }

    let moved = Pos2::new(
        fixed.x + initial.x * scale.x,
        fixed.y + initial.y * scale.y,
    );

    // Rebuild min/max from the fixed and moved corners without normalizing,
    // so an inverted proposal keeps its negative extent.
    match corner {
        Corner::TopLeft => Rect::from_min_max(moved, fixed),
        Corner::TopRight => Rect::from_min_max(
            Pos2::new(fixed.x, moved.y),
            Pos2::new(moved.x, fixed.y),
        ),
        Corner::BottomLeft => Rect::from_min_max(
            Pos2::new(moved.x, fixed.y),
            Pos2::new(fixed.x, moved.y),
        ),
        Corner::BottomRight => Rect::from_min_max(fixed, moved),
    }
}

/// Apply the resize floor: a proposal whose width or height falls under
/// [`MIN_SHAPE_SIZE`] is not applied and the prior box is kept.
pub fn accept_box(prev: Rect, proposed: Rect) -> Rect {
    if proposed.width() < MIN_SHAPE_SIZE || proposed.height() < MIN_SHAPE_SIZE {
        prev
    } else {
        proposed
    }
}

/// Corner-handle resize overlay for the selected shape.
///
/// Bound to a shape's current box when the shape becomes selected and
/// re-synced to it every frame while idle. During a drag the gizmo owns the
/// preview box, applies the resize floor live, and on release reports the
/// end position together with the scale accumulated against the gesture's
/// starting box.
#[derive(Debug, Clone)]
pub struct TransformGizmo {
    bounds: Rect,
    start_bounds: Rect,
    active_corner: Option<Corner>,
    initial_pointer_pos: Option<Pos2>,
    keep_ratio: bool,
}

impl TransformGizmo {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            start_bounds: bounds,
            active_corner: None,
            initial_pointer_pos: None,
            keep_ratio: true,
        }
    }

    /// Allow the two axes to scale independently.
    pub fn with_free_ratio(mut self) -> Self {
        self.keep_ratio = false;
        self
    }

    /// The box the gizmo currently frames. Mid-gesture this is the live
    /// preview, so the shape should be drawn here instead of at its record.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_resizing(&self) -> bool {
        self.active_corner.is_some()
    }

    /// Re-sync the gizmo to the shape's box. Ignored mid-gesture, when the
    /// gizmo owns the preview.
    pub fn update_bounds(&mut self, new_bounds: Rect) {
        if self.active_corner.is_none() {
            self.bounds = new_bounds;
        }
    }

    /// Draw the border and anchors and handle anchor drags. Returns the end
    /// report once a resize gesture finishes.
    pub fn update(&mut self, ui: &mut Ui, shape_id: ShapeId) -> Option<TransformEnd> {
        let mut finished = None;

        ui.painter().rect_stroke(
            self.bounds,
            0.0,
            Stroke::new(BORDER_STROKE_WIDTH, ACCENT_COLOR),
        );

        for corner in Corner::ALL {
            let anchor_rect =
                Rect::from_center_size(corner.anchor_pos(self.bounds), Vec2::splat(ANCHOR_SIZE));
            let id = egui::Id::new(("transform_anchor", shape_id, corner.name()));
            let response = ui
                .interact(anchor_rect, id, Sense::drag())
                .on_hover_cursor(corner.cursor_icon());

            let is_active = self.active_corner == Some(corner);
            let color = if response.hovered() || is_active {
                ACCENT_HOVER_COLOR
            } else {
                ACCENT_COLOR
            };
            ui.painter().rect_filled(anchor_rect, ANCHOR_ROUNDING, color);
            ui.painter().rect_stroke(
                anchor_rect,
                ANCHOR_ROUNDING,
                Stroke::new(1.0, Color32::WHITE),
            );

            if response.drag_started() {
                self.active_corner = Some(corner);
                self.start_bounds = self.bounds;
                self.initial_pointer_pos = response.interact_pointer_pos();
            }

            if self.active_corner == Some(corner) {
                if let (Some(initial), Some(current)) =
                    (self.initial_pointer_pos, response.interact_pointer_pos())
                {
                    let proposed =
                        propose_box(self.start_bounds, corner, current - initial, self.keep_ratio);
                    self.bounds = accept_box(self.bounds, proposed);
                }

                if response.drag_stopped() {
                    finished = Some(TransformEnd::between(self.start_bounds, self.bounds));
                    self.active_corner = None;
                    self.initial_pointer_pos = None;
                }
            }
        }

        finished
    }
}
