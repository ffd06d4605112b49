//! Pointer-driven create/select/move state machine.

use crate::error::{SketchError, SketchResult};
use crate::geometry::find_shape_at;
use crate::input::PointerEvent;
use crate::render::RenderBridge;
use crate::shapes::{Shape, ShapeId, create_shape};
use crate::store::ShapeStore;
use crate::tools::ToolKind;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Cursor feedback for the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorHint {
    #[default]
    Default,
    Move,
}

/// The gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Dragging out the opposite corner of a new shape.
    Drawing { shape_id: ShapeId },
    /// Translating an existing shape.
    Moving {
        shape_id: ShapeId,
        /// Pointer position minus the shape's anchor corner at pick time.
        offset: Vec2,
        /// Signed size of the shape at pick time.
        size: Vec2,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// Shape affected by the current gesture.
    pub fn shape_id(&self) -> Option<ShapeId> {
        match self {
            Gesture::Idle => None,
            Gesture::Drawing { shape_id } | Gesture::Moving { shape_id, .. } => Some(*shape_id),
        }
    }
}

/// Per-session interaction state: the active tool, the gesture in progress and
/// the cursor hint.
///
/// The cursor hint is only updated by idle pointer moves under the selection
/// tool; picking or dragging a shape leaves it as it was.
#[derive(Debug, Clone, Default)]
pub struct InteractionSession {
    tool: ToolKind,
    gesture: Gesture,
    cursor: CursorHint,
}

impl InteractionSession {
    pub fn new(tool: ToolKind) -> Self {
        Self {
            tool,
            ..Self::default()
        }
    }

    /// Currently selected tool.
    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Set the current tool.
    ///
    /// The cursor hint only tracks hovering under the selection tool, so it is
    /// reset for every other tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        if tool != ToolKind::Selection {
            self.cursor = CursorHint::Default;
        }
    }

    /// Set the current tool from its name.
    pub fn set_tool_by_name(&mut self, name: &str) -> SketchResult<()> {
        let tool = name.parse::<ToolKind>()?;
        self.set_tool(tool);
        Ok(())
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }
}

/// Turns pointer events into shape store mutations.
///
/// Owns the store and the render bridge; every mutation is followed by a full
/// redraw before the handler returns.
pub struct InteractionController<B: RenderBridge> {
    store: ShapeStore<B::Descriptor>,
    bridge: B,
}

impl<B: RenderBridge> InteractionController<B> {
    /// Create a controller with an empty store.
    pub fn new(bridge: B) -> Self {
        Self {
            store: ShapeStore::new(),
            bridge,
        }
    }

    pub fn store(&self) -> &ShapeStore<B::Descriptor> {
        &self.store
    }

    /// Read-only view of the shapes in creation order.
    pub fn shapes(&self) -> &[Shape<B::Descriptor>] {
        self.store.snapshot()
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    /// Consume the controller, returning the bridge.
    pub fn into_bridge(self) -> B {
        self.bridge
    }

    /// Dispatch a pointer event. Returns the id of the shape that changed, if any.
    pub fn handle_event(
        &mut self,
        session: &mut InteractionSession,
        event: PointerEvent,
    ) -> Option<ShapeId> {
        match event {
            PointerEvent::Down { position } => self.pointer_down(session, position),
            PointerEvent::Move { position } => self.pointer_move(session, position),
            PointerEvent::Up { .. } => {
                self.pointer_up(session);
                None
            }
        }
    }

    /// Start a gesture.
    ///
    /// With the selection tool this picks the first shape under the pointer
    /// and starts moving it; with a drawing tool it appends a zero-size shape
    /// at the pointer. Returns the id of a newly created shape.
    pub fn pointer_down(&mut self, session: &mut InteractionSession, point: Point) -> Option<ShapeId> {
        let Some(kind) = session.tool.shape_kind() else {
            self.pick(session, point);
            return None;
        };

        let shape = create_shape(self.store.next_id(), point, point, kind, &self.bridge);
        let id = match self.store.append(shape) {
            Ok(id) => id,
            Err(err) => {
                log::warn!("Ignoring pointer down: {}", err);
                return None;
            }
        };
        session.gesture = Gesture::Drawing { shape_id: id };
        log::debug!("Drawing {} #{} from ({}, {})", kind.name(), id, point.x, point.y);
        self.redraw();
        Some(id)
    }

    /// Continue a gesture. Returns the id of the shape that was updated.
    pub fn pointer_move(&mut self, session: &mut InteractionSession, point: Point) -> Option<ShapeId> {
        let result = match session.gesture {
            Gesture::Idle => {
                if session.tool == ToolKind::Selection {
                    session.cursor = if find_shape_at(point, self.store.snapshot()).is_some() {
                        CursorHint::Move
                    } else {
                        CursorHint::Default
                    };
                }
                return None;
            }
            Gesture::Drawing { shape_id } => self.drag_corner(shape_id, point),
            Gesture::Moving {
                shape_id,
                offset,
                size,
            } => {
                let top_left = point - offset;
                self.reposition(shape_id, top_left, top_left + size)
            }
        };

        match result {
            Ok(id) => {
                self.redraw();
                Some(id)
            }
            Err(err) => {
                log::warn!("Ignoring pointer move: {}", err);
                None
            }
        }
    }

    /// Finish the current gesture.
    pub fn pointer_up(&mut self, session: &mut InteractionSession) {
        if let Some(id) = session.gesture.shape_id() {
            log::debug!("Gesture on #{} finished", id);
        }
        session.gesture = Gesture::Idle;
    }

    fn pick(&self, session: &mut InteractionSession, point: Point) {
        let Some(shape) = find_shape_at(point, self.store.snapshot()) else {
            return;
        };
        session.gesture = Gesture::Moving {
            shape_id: shape.id(),
            offset: point - shape.start(),
            size: shape.size(),
        };
        log::debug!("Moving {} #{}", shape.kind().name(), shape.id());
    }

    fn drag_corner(&mut self, id: ShapeId, point: Point) -> SketchResult<ShapeId> {
        let start = self.existing(id)?.start();
        self.reposition(id, start, point)
    }

    fn reposition(&mut self, id: ShapeId, start: Point, end: Point) -> SketchResult<ShapeId> {
        let shape = self.existing(id)?.with_corners(start, end, &self.bridge);
        self.store.replace_at(id, shape)?;
        Ok(id)
    }

    fn existing(&self, id: ShapeId) -> SketchResult<&Shape<B::Descriptor>> {
        self.store.get(id).ok_or(SketchError::ShapeOutOfRange {
            id,
            len: self.store.len(),
        })
    }

    fn redraw(&mut self) {
        log::trace!("Redrawing {} shapes", self.store.len());
        self.bridge.render_all(self.store.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingBridge;
    use crate::shapes::ShapeKind;

    fn controller() -> InteractionController<RecordingBridge> {
        InteractionController::new(RecordingBridge::default())
    }

    fn draw(
        controller: &mut InteractionController<RecordingBridge>,
        session: &mut InteractionSession,
        tool: ToolKind,
        from: (f64, f64),
        to: (f64, f64),
    ) -> ShapeId {
        session.set_tool(tool);
        let id = controller
            .handle_event(session, PointerEvent::down(from.0, from.1))
            .unwrap();
        controller.handle_event(session, PointerEvent::moved(to.0, to.1));
        controller.handle_event(session, PointerEvent::up(to.0, to.1));
        id
    }

    #[test]
    fn test_click_creates_zero_size_shape() {
        let mut controller = controller();
        let mut session = InteractionSession::new(ToolKind::Rectangle);

        controller.handle_event(&mut session, PointerEvent::down(12.5, 40.0));
        controller.handle_event(&mut session, PointerEvent::up(12.5, 40.0));

        assert_eq!(controller.shapes().len(), 1);
        let shape = &controller.shapes()[0];
        assert_eq!(shape.id(), 0);
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
        assert_eq!(shape.start(), Point::new(12.5, 40.0));
        assert_eq!(shape.end(), Point::new(12.5, 40.0));
        assert!(session.gesture().is_idle());
    }

    #[test]
    fn test_drawing_tracks_pointer() {
        let mut controller = controller();
        let mut session = InteractionSession::new(ToolKind::Line);

        controller.pointer_down(&mut session, Point::new(10.0, 10.0));
        assert_eq!(session.gesture(), Gesture::Drawing { shape_id: 0 });

        controller.pointer_move(&mut session, Point::new(20.0, 30.0));
        controller.pointer_move(&mut session, Point::new(5.0, 50.0));

        let shape = &controller.shapes()[0];
        assert_eq!(shape.start(), Point::new(10.0, 10.0));
        assert_eq!(shape.end(), Point::new(5.0, 50.0));
        assert_eq!(shape.descriptor().end, Point::new(5.0, 50.0));
    }

    #[test]
    fn test_ids_follow_creation_order() {
        let mut controller = controller();
        let mut session = InteractionSession::default();

        for (i, tool) in [ToolKind::Line, ToolKind::Rectangle, ToolKind::Circle, ToolKind::Ellipse]
            .into_iter()
            .enumerate()
        {
            let offset = i as f64 * 100.0;
            let id = draw(&mut controller, &mut session, tool, (offset, 0.0), (offset + 10.0, 10.0));
            assert_eq!(id, i);
        }

        let kinds: Vec<_> = controller.shapes().iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, ShapeKind::ALL.to_vec());
    }

    #[test]
    fn test_move_preserves_size() {
        let mut controller = controller();
        let mut session = InteractionSession::default();
        draw(&mut controller, &mut session, ToolKind::Rectangle, (10.0, 20.0), (60.0, 50.0));

        session.set_tool(ToolKind::Selection);
        controller.pointer_down(&mut session, Point::new(15.0, 25.0));
        assert!(matches!(session.gesture(), Gesture::Moving { shape_id: 0, .. }));
        // Only hovering updates the cursor hint.
        assert_eq!(session.cursor(), CursorHint::Default);

        controller.pointer_move(&mut session, Point::new(115.0, 225.0));
        controller.pointer_up(&mut session);

        let shape = &controller.shapes()[0];
        assert!((shape.start().x - 110.0).abs() < 1e-9);
        assert!((shape.start().y - 220.0).abs() < 1e-9);
        assert!((shape.width() - 50.0).abs() < 1e-9);
        assert!((shape.height() - 30.0).abs() < 1e-9);
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
        assert_eq!(controller.shapes().len(), 1);
    }

    #[test]
    fn test_move_inverted_shape_keeps_orientation() {
        let mut controller = controller();
        let mut session = InteractionSession::default();
        draw(&mut controller, &mut session, ToolKind::Rectangle, (60.0, 60.0), (20.0, 20.0));

        session.set_tool(ToolKind::Selection);
        controller.pointer_down(&mut session, Point::new(40.0, 40.0));
        controller.pointer_move(&mut session, Point::new(50.0, 45.0));

        let shape = &controller.shapes()[0];
        assert_eq!(shape.start(), Point::new(70.0, 65.0));
        assert_eq!(shape.end(), Point::new(30.0, 25.0));
    }

    #[test]
    fn test_move_line_by_segment() {
        let mut controller = controller();
        let mut session = InteractionSession::default();
        draw(&mut controller, &mut session, ToolKind::Line, (0.0, 0.0), (10.0, 0.0));

        session.set_tool(ToolKind::Selection);
        controller.pointer_down(&mut session, Point::new(5.0, 0.0));
        controller.pointer_move(&mut session, Point::new(5.0, 10.0));

        let shape = &controller.shapes()[0];
        assert_eq!(shape.start(), Point::new(0.0, 10.0));
        assert_eq!(shape.end(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_select_picks_earliest_overlapping() {
        let mut controller = controller();
        let mut session = InteractionSession::default();
        draw(&mut controller, &mut session, ToolKind::Rectangle, (0.0, 0.0), (50.0, 50.0));
        draw(&mut controller, &mut session, ToolKind::Rectangle, (25.0, 25.0), (75.0, 75.0));

        session.set_tool(ToolKind::Selection);
        controller.pointer_down(&mut session, Point::new(30.0, 30.0));
        assert_eq!(session.gesture().shape_id(), Some(0));
    }

    #[test]
    fn test_select_miss_is_noop() {
        let mut controller = controller();
        let mut session = InteractionSession::default();
        draw(&mut controller, &mut session, ToolKind::Rectangle, (0.0, 0.0), (10.0, 10.0));
        let frames = controller.bridge().frames;

        session.set_tool(ToolKind::Selection);
        assert_eq!(controller.pointer_down(&mut session, Point::new(100.0, 100.0)), None);
        assert!(session.gesture().is_idle());

        controller.pointer_move(&mut session, Point::new(120.0, 120.0));
        assert_eq!(controller.bridge().frames, frames);
        assert_eq!(controller.shapes()[0].start(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_hover_cursor_hint() {
        let mut controller = controller();
        let mut session = InteractionSession::default();
        draw(&mut controller, &mut session, ToolKind::Rectangle, (0.0, 0.0), (10.0, 10.0));
        let frames = controller.bridge().frames;

        session.set_tool(ToolKind::Selection);
        assert_eq!(controller.pointer_move(&mut session, Point::new(5.0, 5.0)), None);
        assert_eq!(session.cursor(), CursorHint::Move);

        controller.pointer_move(&mut session, Point::new(50.0, 50.0));
        assert_eq!(session.cursor(), CursorHint::Default);

        assert_eq!(controller.bridge().frames, frames);
    }

    #[test]
    fn test_hover_ignored_for_drawing_tools() {
        let mut controller = controller();
        let mut session = InteractionSession::default();
        draw(&mut controller, &mut session, ToolKind::Rectangle, (0.0, 0.0), (10.0, 10.0));

        session.set_tool(ToolKind::Selection);
        controller.pointer_move(&mut session, Point::new(5.0, 5.0));
        assert_eq!(session.cursor(), CursorHint::Move);

        session.set_tool(ToolKind::Line);
        assert_eq!(session.cursor(), CursorHint::Default);
        controller.pointer_move(&mut session, Point::new(5.0, 5.0));
        assert_eq!(session.cursor(), CursorHint::Default);
    }

    #[test]
    fn test_every_mutation_redraws() {
        let mut controller = controller();
        let mut session = InteractionSession::new(ToolKind::Circle);

        controller.pointer_down(&mut session, Point::new(0.0, 0.0));
        assert_eq!(controller.bridge().frames, 1);
        assert_eq!(controller.bridge().last_frame.len(), 1);

        controller.pointer_move(&mut session, Point::new(10.0, 10.0));
        controller.pointer_move(&mut session, Point::new(20.0, 20.0));
        assert_eq!(controller.bridge().frames, 3);
        assert_eq!(controller.bridge().last_frame.as_slice(), controller.shapes());

        controller.pointer_up(&mut session);
        assert_eq!(controller.bridge().frames, 3);
    }

    #[test]
    fn test_move_without_gesture_is_noop() {
        let mut controller = controller();
        let mut session = InteractionSession::new(ToolKind::Line);

        assert_eq!(controller.pointer_move(&mut session, Point::new(1.0, 1.0)), None);
        assert!(controller.store().is_empty());
        assert_eq!(controller.bridge().frames, 0);
    }

    #[test]
    fn test_stale_gesture_is_noop() {
        let mut controller = controller();
        let mut session = InteractionSession::new(ToolKind::Line);
        session.gesture = Gesture::Drawing { shape_id: 0 };

        assert_eq!(controller.pointer_move(&mut session, Point::new(1.0, 1.0)), None);
        assert!(controller.store().is_empty());

        session.gesture = Gesture::Moving {
            shape_id: 7,
            offset: Vec2::ZERO,
            size: Vec2::new(5.0, 5.0),
        };
        assert_eq!(controller.pointer_move(&mut session, Point::new(1.0, 1.0)), None);
        assert_eq!(controller.bridge().frames, 0);
    }

    #[test]
    fn test_pointer_up_resets_gesture() {
        let mut controller = controller();
        let mut session = InteractionSession::new(ToolKind::Ellipse);

        controller.pointer_down(&mut session, Point::new(0.0, 0.0));
        controller.handle_event(&mut session, PointerEvent::up(0.0, 0.0));
        assert!(session.gesture().is_idle());

        // A later move must not touch the finished shape.
        controller.pointer_move(&mut session, Point::new(40.0, 40.0));
        assert_eq!(controller.shapes()[0].end(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_set_tool_by_name() {
        let mut session = InteractionSession::default();
        session.set_tool_by_name("eclipse").unwrap();
        assert_eq!(session.tool(), ToolKind::Ellipse);

        let err = session.set_tool_by_name("polygon").unwrap_err();
        assert_eq!(err, SketchError::InvalidToolKind("polygon".to_string()));
        assert_eq!(session.tool(), ToolKind::Ellipse);
    }
}
