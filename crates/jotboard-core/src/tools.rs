//! Tool selection and in-progress shape drawing.

use crate::shapes::{Circle, Freehand, Line, Rectangle, Shape, ShapeStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Pen,
    Rectangle,
    Circle,
    Line,
    Text,
    Eraser,
    Sticky,
    MindMap,
    NoteEmbed,
}

impl ToolKind {
    /// Map a tool shortcut key to its tool. NoteEmbed has no letter key;
    /// it is only armed from the notes panel.
    pub fn from_shortcut(key: &str) -> Option<ToolKind> {
        match key {
            "v" => Some(ToolKind::Select),
            "p" => Some(ToolKind::Pen),
            "r" => Some(ToolKind::Rectangle),
            "c" => Some(ToolKind::Circle),
            "l" => Some(ToolKind::Line),
            "t" => Some(ToolKind::Text),
            "e" => Some(ToolKind::Eraser),
            "s" => Some(ToolKind::Sticky),
            "m" => Some(ToolKind::MindMap),
            _ => None,
        }
    }

    /// Whether pointer-down with this tool starts a drag phase.
    pub fn is_drag_tool(&self) -> bool {
        matches!(
            self,
            ToolKind::Pen | ToolKind::Rectangle | ToolKind::Circle | ToolKind::Line
        )
    }
}

/// State of a drag-to-draw interaction.
#[derive(Debug, Clone, Default)]
enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A shape is being drawn; it is not in the scene yet.
    Drawing { anchor: Point, shape: Shape },
}

/// Manages the current tool and the shape being drawn, if any.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Style applied to newly created shapes.
    pub current_style: ShapeStyle,
    state: DragState,
}

impl ToolManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tools, cancelling any drag in progress.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
        self.state = DragState::Idle;
    }

    /// Begin a drag at the given scene point. Only drag tools create an
    /// in-progress shape; other tools handle pointer-down themselves.
    pub fn begin(&mut self, point: Point) {
        let mut shape = match self.current_tool {
            ToolKind::Pen => Shape::Freehand(Freehand::new(point)),
            ToolKind::Rectangle => Shape::Rectangle(Rectangle::from_corners(point, point)),
            ToolKind::Circle => Shape::Circle(Circle::new(point, 0.0)),
            ToolKind::Line => Shape::Line(Line::new(point, point)),
            _ => return,
        };
        *shape.style_mut() = self.current_style.clone();
        self.state = DragState::Drawing {
            anchor: point,
            shape,
        };
    }

    /// Recompute the in-progress shape from the live pointer position.
    /// Pure recomputation each move; nothing is committed here.
    pub fn update(&mut self, point: Point) {
        let DragState::Drawing { anchor, shape } = &mut self.state else {
            return;
        };
        match shape {
            Shape::Freehand(stroke) => stroke.add_point(point),
            Shape::Rectangle(rect) => {
                rect.position = Point::new(anchor.x.min(point.x), anchor.y.min(point.y));
                rect.width = (point.x - anchor.x).abs();
                rect.height = (point.y - anchor.y).abs();
            }
            Shape::Circle(circle) => {
                circle.radius = anchor.distance(point);
            }
            Shape::Line(line) => {
                line.end = point;
            }
            _ => {}
        }
    }

    /// End the drag, returning the finished shape for the scene.
    pub fn end(&mut self, point: Point) -> Option<Shape> {
        self.update(point);
        match std::mem::take(&mut self.state) {
            DragState::Drawing { shape, .. } => Some(shape),
            DragState::Idle => None,
        }
    }

    /// Cancel the drag, discarding the in-progress shape.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Drawing { .. })
    }

    /// The in-progress shape, for the drawing loop to preview.
    pub fn in_progress(&self) -> Option<&Shape> {
        match &self.state {
            DragState::Drawing { shape, .. } => Some(shape),
            DragState::Idle => None,
        }
    }
}
