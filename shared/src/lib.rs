pub mod engine;
pub mod error;
pub mod geometry;
pub mod history;
pub mod palette;
pub mod profile;
pub mod route;
pub mod session;
pub mod shortcut;
pub mod tool;

pub use engine::{CanvasEngine, CanvasEvent, DrawingObject, EventOrigin, FreeDrawingBrush, ObjectId};
pub use error::NavError;
pub use history::History;
pub use palette::{BrushColor, PALETTE};
pub use profile::{find_profile, Profile, CATALOG};
pub use route::{Destination, NavState, PendingNavigation, Route};
pub use session::DrawingSession;
pub use shortcut::{shortcut, Shortcut};
pub use tool::ToolMode;

/// A position in canvas pixels, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
