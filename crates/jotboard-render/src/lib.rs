//! Jotboard Render Library
//!
//! Drawing-surface abstraction and the two scene consumers: the
//! interactive painter and the stateless preview (thumbnail) renderer.

mod export;
mod painter;
mod preview;
mod surface;

pub use export::{encode_png, ExportError};
pub use painter::{paint_scene, SceneView};
pub use preview::{render_preview, EMPTY_PLACEHOLDER, PREVIEW_PADDING, UNAVAILABLE_PLACEHOLDER};
pub use surface::{DrawOp, DrawSurface, RecordingSurface};
