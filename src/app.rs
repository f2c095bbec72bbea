use egui::Vec2;
use log::info;

use crate::gizmo::TransformGizmo;
use crate::scene::Scene;
use crate::shape_view::{DragState, ShapeEvent, ShapeView};
use crate::texture_store::TextureStore;

/// Stage sizing behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageOptions {
    /// Track the viewport while the window resizes instead of keeping the
    /// size captured on the first frame.
    pub follow_viewport: bool,
}

/// The stage application: seeds the scene, renders one shape view per
/// record in paint order and wires their gestures back into the scene.
pub struct StageApp {
    scene: Scene,
    images: TextureStore,
    /// Present exactly while a shape is selected.
    gizmo: Option<TransformGizmo>,
    drag: Option<DragState>,
    /// Viewport size captured on the first frame.
    stage_size: Option<Vec2>,
    options: StageOptions,
}

impl StageApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_options(StageOptions::default())
    }

    pub fn with_options(options: StageOptions) -> Self {
        let scene = Scene::with_seed();
        info!("stage initialized with {} shapes", scene.items().len());
        Self {
            scene,
            images: TextureStore::new(),
            gizmo: None,
            drag: None,
            stage_size: None,
            options,
        }
    }
}

impl eframe::App for StageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.images.begin_frame(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                // The stage is sized from the viewport once at startup;
                // `StageOptions::follow_viewport` opts into live tracking.
                let available = ui.available_size();
                let stage_size = if self.options.follow_viewport {
                    available
                } else {
                    *self.stage_size.get_or_insert(available)
                };

                let (background, painter) =
                    ui.allocate_painter(stage_size, egui::Sense::click());
                painter.rect_filled(background.rect, 0.0, ui.visuals().extreme_bg_color);

                // A press landing on the bare stage clears the selection.
                let pressed = ui.input(|i| i.pointer.any_pressed());
                if pressed && background.is_pointer_button_down_on() {
                    self.scene.clear_selection();
                    self.gizmo = None;
                }

                let mut events: Vec<ShapeEvent> = Vec::new();
                for record in self.scene.items() {
                    let resize_preview = if self.scene.is_selected(record.id) {
                        self.gizmo
                            .as_ref()
                            .filter(|gizmo| gizmo.is_resizing())
                            .map(|gizmo| gizmo.bounds())
                    } else {
                        None
                    };

                    let view = ShapeView::new(record);
                    if let Some(event) =
                        view.show(ui, &mut self.images, &mut self.drag, resize_preview)
                    {
                        events.push(event);
                    }
                }

                for event in events {
                    match event {
                        ShapeEvent::Clicked(id) => {
                            let was_selected = self.scene.is_selected(id);
                            self.scene.select(id);
                            // Bind the gizmo to the shape's current box on the
                            // transition into the selected state.
                            if !was_selected {
                                self.gizmo = self
                                    .scene
                                    .get(id)
                                    .map(|record| TransformGizmo::new(record.rect()));
                            }
                        }
                        ShapeEvent::Changed(record) => self.scene.apply_change(record),
                    }
                }

                // Gizmo overlay, drawn after every shape so its anchors stay
                // on top and win interaction.
                if let Some(record) = self.scene.selected_record().cloned() {
                    let gizmo = self
                        .gizmo
                        .get_or_insert_with(|| TransformGizmo::new(record.rect()));

                    // Follow the shape, including a body drag in progress.
                    let synced = match self.drag {
                        Some(state) if state.id == record.id => {
                            record.rect().translate(state.delta)
                        }
                        _ => record.rect(),
                    };
                    gizmo.update_bounds(synced);

                    if let Some(end) = gizmo.update(ui, record.id) {
                        self.scene
                            .apply_change(record.transformed(end.position, end.scale));
                    }
                } else {
                    self.gizmo = None;
                }
            });
    }
}
