//! One drawing session per profile. The session exclusively owns its canvas
//! engine and undo history; both are dropped with it.

use crate::engine::{CanvasEngine, ObjectId};
use crate::history::History;
use crate::palette::BrushColor;
use crate::profile::Profile;
use crate::tool::ToolMode;
use crate::Point;

pub const CANVAS_WIDTH: f64 = 600.0;
pub const CANVAS_HEIGHT: f64 = 400.0;
pub const CANVAS_BACKGROUND: &str = "white";
pub const BRUSH_WIDTH: f32 = 5.0;
pub const EXPORT_FILE_NAME: &str = "sh_protfolio_free_drawing.png";

pub struct DrawingSession {
    profile: Profile,
    engine: CanvasEngine,
    history: History,
    tool: ToolMode,
    brush_color: BrushColor,
}

impl DrawingSession {
    pub fn new(profile: Profile) -> Self {
        let mut session = Self {
            profile,
            engine: CanvasEngine::new(CANVAS_WIDTH, CANVAS_HEIGHT, CANVAS_BACKGROUND),
            history: History::new(),
            tool: ToolMode::default(),
            brush_color: BrushColor::default(),
        };
        session.apply_tool();
        session
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn engine(&self) -> &CanvasEngine {
        &self.engine
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn brush_color(&self) -> BrushColor {
        self.brush_color
    }

    /// The active tool's button is disabled, so re-selecting it never
    /// reaches here from the toolbar; it is still a no-op.
    pub fn set_tool(&mut self, tool: ToolMode) -> bool {
        if self.tool == tool {
            return false;
        }
        log::debug!("tool {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
        self.apply_tool();
        true
    }

    pub fn tool_enabled(&self, tool: ToolMode) -> bool {
        self.tool != tool
    }

    pub fn palette_visible(&self) -> bool {
        self.tool == ToolMode::Brush
    }

    pub fn set_brush_color(&mut self, color: BrushColor) -> bool {
        if self.brush_color == color {
            return false;
        }
        log::debug!("brush color {} ({})", color.name, color.hex);
        self.brush_color = color;
        self.engine.brush_mut().color = color.hex.to_string();
        true
    }

    pub fn pointer_down(&mut self, point: Point) -> bool {
        self.engine.pointer_down(point)
    }

    pub fn pointer_move(&mut self, point: Point) -> bool {
        self.engine.pointer_move(point)
    }

    pub fn pointer_up(&mut self) -> Option<ObjectId> {
        let id = self.engine.pointer_up();
        self.sync_history();
        id
    }

    pub fn delete_selected(&mut self) -> bool {
        let removed = self.engine.remove_selected().is_some();
        self.sync_history();
        removed
    }

    pub fn undo(&mut self) -> bool {
        let done = self.history.undo(&mut self.engine);
        self.sync_history();
        if done {
            log::debug!(
                "undo: {} objects, {} redo entries",
                self.engine.len(),
                self.history.len()
            );
        }
        done
    }

    pub fn redo(&mut self) -> bool {
        let done = self.history.redo(&mut self.engine);
        self.sync_history();
        if done {
            log::debug!(
                "redo: {} objects, {} redo entries",
                self.engine.len(),
                self.history.len()
            );
        }
        done
    }

    fn apply_tool(&mut self) {
        match self.tool {
            ToolMode::Select => self.engine.set_drawing_mode(false),
            ToolMode::Brush => {
                self.engine.set_drawing_mode(true);
                let brush = self.engine.brush_mut();
                brush.width = BRUSH_WIDTH;
                brush.color = self.brush_color.hex.to_string();
            }
        }
    }

    fn sync_history(&mut self) {
        for event in self.engine.drain_events() {
            self.history.observe(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE;
    use crate::profile::CATALOG;

    #[test]
    fn starts_in_select_mode_with_default_color() {
        let session = DrawingSession::new(CATALOG[0]);
        assert_eq!(session.tool(), ToolMode::Select);
        assert_eq!(session.brush_color(), PALETTE[0]);
        assert!(!session.engine().is_drawing_mode());
        assert!(!session.palette_visible());
        assert!(!session.tool_enabled(ToolMode::Select));
        assert!(session.tool_enabled(ToolMode::Brush));
    }

    #[test]
    fn entering_brush_configures_the_brush() {
        let mut session = DrawingSession::new(CATALOG[0]);
        session.set_brush_color(PALETTE[5]);
        assert!(session.set_tool(ToolMode::Brush));
        assert!(session.engine().is_drawing_mode());
        assert_eq!(session.engine().brush().width, BRUSH_WIDTH);
        assert_eq!(session.engine().brush().color, "#000dff");
        assert!(session.palette_visible());
        assert!(!session.set_tool(ToolMode::Brush));
    }

    #[test]
    fn color_change_applies_to_live_brush() {
        let mut session = DrawingSession::new(CATALOG[0]);
        session.set_tool(ToolMode::Brush);
        assert!(session.set_brush_color(PALETTE[7]));
        assert_eq!(session.engine().brush().color, "#ff1d8e");
        assert!(!session.set_brush_color(PALETTE[7]));
    }

    #[test]
    fn returning_to_select_stops_drawing() {
        let mut session = DrawingSession::new(CATALOG[0]);
        session.set_tool(ToolMode::Brush);
        session.set_tool(ToolMode::Select);
        assert!(!session.engine().is_drawing_mode());
    }
}
