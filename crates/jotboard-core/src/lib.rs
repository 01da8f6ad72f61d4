//! Jotboard Core Library
//!
//! Platform-agnostic scene model and editing logic for the Jotboard
//! freeform canvas.

pub mod camera;
pub mod editor;
pub mod history;
pub mod input;
pub mod mindmap;
pub mod notes;
pub mod scene;
pub mod shapes;
pub mod storage;
pub mod tools;

pub use camera::Camera;
pub use editor::{EditorSession, TextPrompt};
pub use history::History;
pub use input::{InputState, Modifiers, MouseButton};
pub use mindmap::{ApproxTextMeasurer, TextMeasurer};
pub use notes::{NoteStore, NoteSummary};
pub use scene::Scene;
pub use shapes::{Shape, ShapeId, ShapeStyle};
pub use storage::{
    DebouncedSaver, DocumentStore, LoadOutcome, MemoryStore, PersistenceBridge, StorageError,
};
pub use tools::{ToolKind, ToolManager};
