#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod error;
pub mod gizmo;
pub mod scene;
pub mod shape;
pub mod shape_view;
pub mod texture_store;

pub use app::{StageApp, StageOptions};
pub use error::TextureLoadError;
pub use gizmo::{Corner, TransformEnd, TransformGizmo, accept_box, propose_box};
pub use scene::Scene;
pub use shape::{MIN_SHAPE_SIZE, ShapeId, ShapeRecord};
pub use shape_view::{DragState, ShapeEvent, ShapeView};
pub use texture_store::TextureStore;
