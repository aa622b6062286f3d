use crate::engine::{CanvasEngine, CanvasEvent, DrawingObject, EventOrigin};

/// Objects taken off the canvas by undo, newest last.
#[derive(Debug, Default)]
pub struct History {
    undone: Vec<DrawingObject>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.undone.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undone.is_empty()
    }

    pub fn entries(&self) -> &[DrawingObject] {
        &self.undone
    }

    /// Any user change to the canvas invalidates redo. Changes made by undo
    /// and redo themselves are tagged and left alone.
    pub fn observe(&mut self, event: &CanvasEvent) {
        if event.origin() != EventOrigin::User || self.undone.is_empty() {
            return;
        }
        log::debug!(
            "{} {} cleared {} redo entries",
            event.name(),
            event.id(),
            self.undone.len()
        );
        self.undone.clear();
    }

    pub fn undo(&mut self, engine: &mut CanvasEngine) -> bool {
        let Some(object) = engine.pop_last() else {
            return false;
        };
        self.undone.push(object);
        true
    }

    pub fn redo(&mut self, engine: &mut CanvasEngine) -> bool {
        let Some(object) = self.undone.pop() else {
            return false;
        };
        engine.restore(object);
        true
    }
}
