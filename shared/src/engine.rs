//! In-memory canvas engine: the live object list, the free-drawing brush,
//! pointer handling for both interaction modes and the event queue that
//! observers drain after every operation.

use std::fmt;

use crate::geometry::{normalize_point, path_hit, translate_points};
use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj-{}", self.0)
    }
}

/// A freehand path owned by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawingObject {
    pub id: ObjectId,
    pub color: String,
    pub width: f32,
    pub points: Vec<Point>,
}

impl DrawingObject {
    pub fn hit(&self, point: Point) -> bool {
        path_hit(&self.points, self.width, point)
    }
}

/// Who caused a change. Undo and redo move objects in and out of the live
/// list with [`EventOrigin::History`]; everything else is [`EventOrigin::User`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOrigin {
    User,
    History,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasEvent {
    ObjectAdded { id: ObjectId, origin: EventOrigin },
    ObjectModified { id: ObjectId, origin: EventOrigin },
    ObjectRemoved { id: ObjectId, origin: EventOrigin },
}

impl CanvasEvent {
    pub fn id(&self) -> ObjectId {
        match self {
            CanvasEvent::ObjectAdded { id, .. }
            | CanvasEvent::ObjectModified { id, .. }
            | CanvasEvent::ObjectRemoved { id, .. } => *id,
        }
    }

    pub fn origin(&self) -> EventOrigin {
        match self {
            CanvasEvent::ObjectAdded { origin, .. }
            | CanvasEvent::ObjectModified { origin, .. }
            | CanvasEvent::ObjectRemoved { origin, .. } => *origin,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CanvasEvent::ObjectAdded { .. } => "object:added",
            CanvasEvent::ObjectModified { .. } => "object:modified",
            CanvasEvent::ObjectRemoved { .. } => "object:removed",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FreeDrawingBrush {
    pub width: f32,
    pub color: String,
}

impl Default for FreeDrawingBrush {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: "#000".to_string(),
        }
    }
}

struct Drag {
    id: ObjectId,
    last: Point,
    moved: bool,
}

pub struct CanvasEngine {
    width: f64,
    height: f64,
    background: String,
    objects: Vec<DrawingObject>,
    drawing_mode: bool,
    brush: FreeDrawingBrush,
    active_path: Option<Vec<Point>>,
    selected: Option<ObjectId>,
    drag: Option<Drag>,
    next_id: u64,
    events: Vec<CanvasEvent>,
}

impl CanvasEngine {
    pub fn new(width: f64, height: f64, background: &str) -> Self {
        Self {
            width,
            height,
            background: background.to_string(),
            objects: Vec::new(),
            drawing_mode: false,
            brush: FreeDrawingBrush::default(),
            active_path: None,
            selected: None,
            drag: None,
            next_id: 1,
            events: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn objects(&self) -> &[DrawingObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&DrawingObject> {
        self.objects.iter().find(|object| object.id == id)
    }

    pub fn is_drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    /// Toggles free drawing. Turning it off discards a stroke in progress;
    /// turning it on drops the current selection.
    pub fn set_drawing_mode(&mut self, enabled: bool) {
        if self.drawing_mode == enabled {
            return;
        }
        self.drawing_mode = enabled;
        self.active_path = None;
        self.drag = None;
        if enabled {
            self.selected = None;
        }
    }

    pub fn brush(&self) -> &FreeDrawingBrush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut FreeDrawingBrush {
        &mut self.brush
    }

    pub fn active_path(&self) -> Option<&[Point]> {
        self.active_path.as_deref()
    }

    pub fn selected(&self) -> Option<&DrawingObject> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.drag = None;
    }

    /// Topmost object under `point`.
    pub fn hit_test(&self, point: Point) -> Option<ObjectId> {
        self.objects
            .iter()
            .rev()
            .find(|object| object.hit(point))
            .map(|object| object.id)
    }

    /// Appends a path built from `points`, as a user addition.
    pub fn add_path(&mut self, points: Vec<Point>, color: &str, width: f32) -> Option<ObjectId> {
        let points: Vec<Point> = points.into_iter().filter_map(normalize_point).collect();
        if points.is_empty() {
            return None;
        }
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push(DrawingObject {
            id,
            color: color.to_string(),
            width,
            points,
        });
        self.emit(CanvasEvent::ObjectAdded {
            id,
            origin: EventOrigin::User,
        });
        Some(id)
    }

    /// Removes the topmost object for undo.
    pub fn pop_last(&mut self) -> Option<DrawingObject> {
        let object = self.objects.pop()?;
        if self.selected == Some(object.id) {
            self.clear_selection();
        }
        self.emit(CanvasEvent::ObjectRemoved {
            id: object.id,
            origin: EventOrigin::History,
        });
        Some(object)
    }

    /// Puts a previously removed object back on top, keeping its identity.
    pub fn restore(&mut self, object: DrawingObject) {
        let id = object.id;
        self.objects.push(object);
        self.emit(CanvasEvent::ObjectAdded {
            id,
            origin: EventOrigin::History,
        });
    }

    pub fn remove_selected(&mut self) -> Option<DrawingObject> {
        let id = self.selected?;
        let index = self.objects.iter().position(|object| object.id == id)?;
        let object = self.objects.remove(index);
        self.clear_selection();
        self.emit(CanvasEvent::ObjectRemoved {
            id,
            origin: EventOrigin::User,
        });
        Some(object)
    }

    pub fn pointer_down(&mut self, point: Point) -> bool {
        let Some(point) = normalize_point(point) else {
            return false;
        };
        if self.drawing_mode {
            self.active_path = Some(vec![point]);
            return true;
        }
        let hit = self.hit_test(point);
        let changed = hit != self.selected;
        self.selected = hit;
        self.drag = hit.map(|id| Drag {
            id,
            last: point,
            moved: false,
        });
        changed || hit.is_some()
    }

    pub fn pointer_move(&mut self, point: Point) -> bool {
        let Some(point) = normalize_point(point) else {
            return false;
        };
        if let Some(path) = self.active_path.as_mut() {
            if path.last() == Some(&point) {
                return false;
            }
            path.push(point);
            return true;
        }
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let dx = point.x - drag.last.x;
        let dy = point.y - drag.last.y;
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        drag.last = point;
        drag.moved = true;
        let id = drag.id;
        if let Some(object) = self.objects.iter_mut().find(|object| object.id == id) {
            translate_points(&mut object.points, dx, dy);
        }
        true
    }

    /// Finishes the current gesture: commits a brush stroke, or reports a
    /// finished move. Returns the affected object.
    pub fn pointer_up(&mut self) -> Option<ObjectId> {
        if let Some(points) = self.active_path.take() {
            let color = self.brush.color.clone();
            let width = self.brush.width;
            return self.add_path(points, &color, width);
        }
        let drag = self.drag.take()?;
        if !drag.moved || self.get(drag.id).is_none() {
            return None;
        }
        self.emit(CanvasEvent::ObjectModified {
            id: drag.id,
            origin: EventOrigin::User,
        });
        Some(drag.id)
    }

    pub fn drain_events(&mut self) -> Vec<CanvasEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: CanvasEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CanvasEngine {
        CanvasEngine::new(600.0, 400.0, "white")
    }

    fn stroke(engine: &mut CanvasEngine, from: Point, to: Point) -> Option<ObjectId> {
        engine.pointer_down(from);
        engine.pointer_move(to);
        engine.pointer_up()
    }

    #[test]
    fn brush_stroke_is_committed_on_pointer_up() {
        let mut engine = engine();
        engine.set_drawing_mode(true);
        engine.brush_mut().color = "#17e132".to_string();
        engine.brush_mut().width = 5.0;

        engine.pointer_down(Point::new(10.0, 10.0));
        engine.pointer_move(Point::new(20.0, 10.0));
        assert!(engine.is_empty());
        assert_eq!(engine.active_path().map(|path| path.len()), Some(2));

        let id = engine.pointer_up().expect("stroke committed");
        let object = engine.get(id).expect("object exists");
        assert_eq!(object.color, "#17e132");
        assert_eq!(object.width, 5.0);
        assert_eq!(object.points.len(), 2);
        assert!(engine.active_path().is_none());
        assert_eq!(
            engine.drain_events(),
            vec![CanvasEvent::ObjectAdded {
                id,
                origin: EventOrigin::User
            }]
        );
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn duplicate_moves_are_ignored() {
        let mut engine = engine();
        engine.set_drawing_mode(true);
        engine.pointer_down(Point::new(1.0, 1.0));
        assert!(!engine.pointer_move(Point::new(1.0, 1.0)));
        assert!(engine.pointer_move(Point::new(2.0, 1.0)));
        assert_eq!(engine.active_path().map(|path| path.len()), Some(2));
    }

    #[test]
    fn leaving_drawing_mode_discards_stroke_in_progress() {
        let mut engine = engine();
        engine.set_drawing_mode(true);
        engine.pointer_down(Point::new(1.0, 1.0));
        engine.pointer_move(Point::new(5.0, 5.0));
        engine.set_drawing_mode(false);
        assert!(engine.pointer_up().is_none());
        assert!(engine.is_empty());
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn select_mode_does_not_draw() {
        let mut engine = engine();
        assert!(stroke(&mut engine, Point::new(1.0, 1.0), Point::new(50.0, 50.0)).is_none());
        assert!(engine.is_empty());
    }

    #[test]
    fn select_mode_picks_topmost_and_moves_it() {
        let mut engine = engine();
        let bottom = engine
            .add_path(vec![Point::new(0.0, 50.0), Point::new(100.0, 50.0)], "#000", 5.0)
            .expect("bottom");
        let top = engine
            .add_path(vec![Point::new(50.0, 0.0), Point::new(50.0, 100.0)], "#000", 5.0)
            .expect("top");
        engine.drain_events();

        assert!(engine.pointer_down(Point::new(50.0, 50.0)));
        assert_eq!(engine.selected().map(|object| object.id), Some(top));
        assert!(engine.pointer_move(Point::new(60.0, 55.0)));
        assert_eq!(engine.pointer_up(), Some(top));

        let moved = engine.get(top).expect("top");
        assert_eq!(moved.points[0], Point::new(60.0, 5.0));
        assert_eq!(engine.get(bottom).expect("bottom").points[0], Point::new(0.0, 50.0));
        assert_eq!(
            engine.drain_events(),
            vec![CanvasEvent::ObjectModified {
                id: top,
                origin: EventOrigin::User
            }]
        );
    }

    #[test]
    fn click_without_drag_is_not_a_modification() {
        let mut engine = engine();
        let id = engine
            .add_path(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)], "#000", 5.0)
            .expect("path");
        engine.drain_events();
        engine.pointer_down(Point::new(5.0, 0.0));
        assert!(engine.pointer_up().is_none());
        assert_eq!(engine.selected().map(|object| object.id), Some(id));
        assert!(engine.drain_events().is_empty());

        engine.pointer_down(Point::new(300.0, 300.0));
        assert!(engine.selected().is_none());
    }

    #[test]
    fn pop_and_restore_keep_identity() {
        let mut engine = engine();
        let id = engine
            .add_path(vec![Point::new(0.0, 0.0)], "#000", 5.0)
            .expect("path");
        engine.drain_events();

        let popped = engine.pop_last().expect("popped");
        assert_eq!(popped.id, id);
        assert!(engine.is_empty());
        engine.restore(popped.clone());
        assert_eq!(engine.objects(), &[popped]);
        assert_eq!(
            engine.drain_events(),
            vec![
                CanvasEvent::ObjectRemoved {
                    id,
                    origin: EventOrigin::History
                },
                CanvasEvent::ObjectAdded {
                    id,
                    origin: EventOrigin::History
                },
            ]
        );
        assert!(engine.pop_last().is_some());
        assert!(engine.pop_last().is_none());
    }

    #[test]
    fn remove_selected_emits_user_removal() {
        let mut engine = engine();
        let id = engine
            .add_path(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)], "#000", 5.0)
            .expect("path");
        assert!(engine.remove_selected().is_none());
        engine.pointer_down(Point::new(5.0, 1.0));
        engine.pointer_up();
        engine.drain_events();

        let removed = engine.remove_selected().expect("removed");
        assert_eq!(removed.id, id);
        assert!(engine.selected().is_none());
        assert_eq!(engine.drain_events()[0].name(), "object:removed");
    }

    #[test]
    fn entering_drawing_mode_clears_selection() {
        let mut engine = engine();
        engine.add_path(vec![Point::new(0.0, 0.0)], "#000", 5.0);
        engine.pointer_down(Point::new(0.0, 0.0));
        assert!(engine.selected().is_some());
        engine.set_drawing_mode(true);
        assert!(engine.selected().is_none());
    }

    #[test]
    fn non_finite_points_are_dropped() {
        let mut engine = engine();
        assert!(!engine.pointer_down(Point::new(f32::NAN, 0.0)));
        assert!(engine
            .add_path(vec![Point::new(f32::NAN, 0.0)], "#000", 5.0)
            .is_none());
        assert!(engine.drain_events().is_empty());
    }
}
