//! The press → armed → dragging state machine.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use promptdeck_core::config::drag::DragConfig;
use promptdeck_core::types::{Point, Rect};

use super::placement::{Layout, Placement};
use super::surface::{DragSurface, FlipMove};

/// Which pointer button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button, touch, or pen contact.
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Auxiliary,
}

/// A pointer-down on a draggable element.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerPress<Id> {
    /// Pointer id; later events from other pointers are ignored.
    pub pointer_id: i64,
    /// Pressed button.
    pub button: PointerButton,
    /// Press position.
    pub position: Point,
    /// Entity whose element was pressed.
    pub target: Id,
    /// The press landed on an embedded control (e.g. a delete button).
    pub on_control: bool,
}

impl<Id> PointerPress<Id> {
    /// A primary-button press on `target`.
    pub fn primary(pointer_id: i64, target: Id, position: Point) -> Self {
        Self {
            pointer_id,
            button: PointerButton::Primary,
            position,
            target,
            on_control: false,
        }
    }

    /// Mark the press as landing on an embedded control.
    pub fn on_control(mut self) -> Self {
        self.on_control = true;
        self
    }
}

/// How the caller should treat the pointer-down it just forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressDisposition {
    /// A gesture is armed; the caller may capture the pointer.
    Armed,
    /// The press hit an embedded control; let its default action and
    /// click handler run untouched.
    PassThrough,
    /// Nothing happened (wrong button, unknown element, or busy).
    Ignored,
}

/// What a finished gesture means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome<Id> {
    /// Released before the movement threshold: a plain click.
    Click(Id),
    /// Dropped on a target: the new visual order of every entity in the
    /// container, the dragged one in its placeholder's slot.
    Reorder {
        /// The dragged entity.
        dragged: Id,
        /// New order of the visible entities.
        order: Vec<Id>,
    },
    /// Dragged but never over a valid target; put back where it was.
    Cancelled(Id),
}

#[derive(Debug, Clone)]
struct Gesture<Id> {
    pointer_id: i64,
    dragged: Id,
    press: Point,
    grab_offset: Point,
    bounds: Rect,
    /// Siblings in visual order, dragged entity excluded.
    siblings: Vec<Id>,
    /// Placeholder position in `siblings` at press time.
    home_slot: usize,
    /// Current placeholder position in `siblings`.
    slot: usize,
    target_recorded: bool,
}

impl<Id: Clone> Gesture<Id> {
    fn anchor(&self, slot: usize) -> Option<&Id> {
        self.siblings.get(slot)
    }

    fn committed_order(&self) -> Vec<Id> {
        let mut order = self.siblings.clone();
        order.insert(self.slot.min(order.len()), self.dragged.clone());
        order
    }
}

#[derive(Debug, Clone)]
enum Phase<Id> {
    Idle,
    Armed(Gesture<Id>),
    Dragging(Gesture<Id>),
}

impl<Id> Default for Phase<Id> {
    fn default() -> Self {
        Phase::Idle
    }
}

/// Drag state for one container of one entity kind.
///
/// Instances are independent; a folder list and a prompt grid each own
/// one.
#[derive(Debug, Clone)]
pub struct DragController<Id> {
    layout: Layout,
    threshold: f64,
    flip_duration: Duration,
    phase: Phase<Id>,
}

impl<Id> DragController<Id>
where
    Id: Clone + PartialEq + fmt::Debug + fmt::Display,
{
    /// Create a controller for `layout`.
    pub fn new(layout: Layout, config: &DragConfig) -> Self {
        Self {
            layout,
            threshold: config.threshold_px,
            flip_duration: Duration::from_millis(config.flip_duration_ms),
            phase: Phase::Idle,
        }
    }

    /// A vertical-list controller (folders).
    pub fn list(config: &DragConfig) -> Self {
        Self::new(Layout::List, config)
    }

    /// A wrapping-grid controller (prompts).
    pub fn grid(config: &DragConfig) -> Self {
        Self::new(
            Layout::Grid {
                band_ratio: config.grid_band_ratio,
            },
            config,
        )
    }

    /// Hit-test geometry in use.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Whether a press is being tracked (armed or dragging).
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Whether the movement threshold has been crossed.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// The entity being pressed or dragged.
    pub fn dragged(&self) -> Option<&Id> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Armed(g) | Phase::Dragging(g) => Some(&g.dragged),
        }
    }

    /// Handle pointer-down. Does not touch the surface's visual state.
    pub fn press<S: DragSurface<Id>>(&mut self, surface: &S, press: PointerPress<Id>) -> PressDisposition {
        if self.is_active() {
            debug!(target_id = %press.target, "Press ignored while a gesture is active");
            return PressDisposition::Ignored;
        }
        if press.button != PointerButton::Primary {
            return PressDisposition::Ignored;
        }
        if press.on_control {
            return PressDisposition::PassThrough;
        }

        let Some(bounds) = surface.bounds_of(&press.target) else {
            return PressDisposition::Ignored;
        };
        let mut siblings = surface.sequence();
        let Some(home_slot) = siblings.iter().position(|id| id == &press.target) else {
            return PressDisposition::Ignored;
        };
        siblings.remove(home_slot);

        debug!(target_id = %press.target, slot = home_slot, "Gesture armed");
        self.phase = Phase::Armed(Gesture {
            pointer_id: press.pointer_id,
            grab_offset: press.position.offset_from(bounds.origin()),
            press: press.position,
            dragged: press.target,
            bounds,
            siblings,
            home_slot,
            slot: home_slot,
            target_recorded: false,
        });
        PressDisposition::Armed
    }

    /// Handle pointer-move.
    pub fn motion<S: DragSurface<Id>>(&mut self, surface: &mut S, pointer_id: i64, position: Point) {
        if let Phase::Armed(g) = &self.phase {
            if g.pointer_id != pointer_id {
                return;
            }
            let delta = position.offset_from(g.press);
            if delta.x.abs() < self.threshold && delta.y.abs() < self.threshold {
                return;
            }
            surface.insert_placeholder(g.bounds.size(), g.anchor(g.home_slot));
            surface.float_dragged(&g.dragged, g.bounds);
            debug!(dragged = %g.dragged, dx = delta.x, dy = delta.y, "Drag started");

            if let Phase::Armed(g) = std::mem::take(&mut self.phase) {
                self.phase = Phase::Dragging(g);
            }
        }

        let Phase::Dragging(gesture) = &mut self.phase else {
            return;
        };
        if gesture.pointer_id != pointer_id {
            return;
        }

        let mut origin = position.offset_from(gesture.grab_offset);
        if !self.layout.follows_x() {
            origin.x = gesture.bounds.left;
        }
        surface.move_floating(&gesture.dragged, origin);

        Self::retarget(self.layout, self.flip_duration, gesture, surface, position);
    }

    /// Handle pointer-up. Returns `None` if no gesture was tracked for
    /// this pointer.
    pub fn release<S: DragSurface<Id>>(&mut self, surface: &mut S, pointer_id: i64) -> Option<DragOutcome<Id>> {
        match &self.phase {
            Phase::Idle => return None,
            Phase::Armed(g) | Phase::Dragging(g) if g.pointer_id != pointer_id => return None,
            _ => {}
        }

        match std::mem::take(&mut self.phase) {
            Phase::Idle => None,
            Phase::Armed(g) => {
                debug!(target_id = %g.dragged, "Released under threshold; click");
                Some(DragOutcome::Click(g.dragged))
            }
            Phase::Dragging(g) if g.target_recorded => {
                surface.restore_dragged(&g.dragged, g.anchor(g.slot));
                surface.remove_placeholder();
                let order = g.committed_order();
                debug!(dragged = %g.dragged, slot = g.slot, "Drop committed");
                Some(DragOutcome::Reorder {
                    dragged: g.dragged,
                    order,
                })
            }
            Phase::Dragging(g) => Some(Self::restore(surface, g)),
        }
    }

    /// Abort the gesture (pointer-cancel), restoring the original slot.
    pub fn cancel<S: DragSurface<Id>>(&mut self, surface: &mut S) -> Option<DragOutcome<Id>> {
        match std::mem::take(&mut self.phase) {
            Phase::Idle => None,
            Phase::Armed(g) => Some(DragOutcome::Cancelled(g.dragged)),
            Phase::Dragging(g) => Some(Self::restore(surface, g)),
        }
    }

    fn restore<S: DragSurface<Id>>(surface: &mut S, g: Gesture<Id>) -> DragOutcome<Id> {
        surface.restore_dragged(&g.dragged, g.anchor(g.home_slot));
        surface.remove_placeholder();
        debug!(dragged = %g.dragged, "Drag cancelled without a target");
        DragOutcome::Cancelled(g.dragged)
    }

    /// Hit-test `position` and move the placeholder if the slot changed.
    fn retarget<S: DragSurface<Id>>(
        layout: Layout,
        flip_duration: Duration,
        gesture: &mut Gesture<Id>,
        surface: &mut S,
        position: Point,
    ) {
        let Some(sibling) = surface.sibling_at(position) else {
            return;
        };
        if sibling == gesture.dragged {
            return;
        }
        let Some(index) = gesture.siblings.iter().position(|id| id == &sibling) else {
            return;
        };
        let Some(rect) = surface.bounds_of(&sibling) else {
            return;
        };

        let slot = match layout.placement(&rect, position) {
            Placement::Before => index,
            Placement::After => index + 1,
        };
        gesture.target_recorded = true;
        if slot == gesture.slot {
            return;
        }

        let first: Vec<Option<Rect>> = gesture.siblings.iter().map(|id| surface.bounds_of(id)).collect();
        surface.move_placeholder(gesture.anchor(slot));
        gesture.slot = slot;

        let moves: Vec<FlipMove<Id>> = gesture
            .siblings
            .iter()
            .zip(first)
            .filter_map(|(id, from)| {
                let from = from?;
                let to = surface.bounds_of(id)?;
                (from != to).then(|| FlipMove {
                    id: id.clone(),
                    from,
                    to,
                })
            })
            .collect();

        debug!(slot, moved = moves.len(), "Placeholder moved");
        if !moves.is_empty() {
            surface.play_flip(&moves, flip_duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use promptdeck_core::types::Size;

    use super::*;
    use crate::drag::flow::FlowSurface;

    fn cell() -> Size {
        Size {
            width: 100.0,
            height: 40.0,
        }
    }

    fn folders() -> (DragController<&'static str>, FlowSurface<&'static str>) {
        (
            DragController::list(&DragConfig::default()),
            FlowSurface::list(["a", "b", "c", "d"], cell()),
        )
    }

    #[test]
    fn test_small_movement_is_click() {
        let (mut drag, mut surface) = folders();
        let start = surface.cell_center(1);
        let press = PointerPress::primary(1, "b", start);
        assert_eq!(drag.press(&surface, press), PressDisposition::Armed);

        drag.motion(&mut surface, 1, Point::new(start.x + 3.0, start.y - 3.0));
        assert!(!drag.is_dragging());
        assert!(surface.placeholder_index().is_none());

        assert_eq!(drag.release(&mut surface, 1), Some(DragOutcome::Click("b")));
        assert!(!drag.is_active());
    }

    #[test]
    fn test_threshold_on_one_axis_starts_drag() {
        let (mut drag, mut surface) = folders();
        let start = surface.cell_center(0);
        drag.press(&surface, PointerPress::primary(1, "a", start));
        drag.motion(&mut surface, 1, Point::new(start.x, start.y + 5.0));
        assert!(drag.is_dragging());
        assert_eq!(surface.placeholder_index(), Some(0));
        assert_eq!(surface.floating().map(|(id, _)| *id), Some("a"));
    }

    #[test]
    fn test_list_drag_moves_below_midpoint() {
        let (mut drag, mut surface) = folders();
        drag.press(&surface, PointerPress::primary(7, "a", surface.cell_center(0)));

        // Into the lower half of "c" (flow index 1 once "a" floats).
        let target = surface.cell_rect(2);
        let over_c = Point::new(target.center_x(), target.top + 30.0);
        drag.motion(&mut surface, 7, over_c);
        let rect_c = surface.bounds_of(&"c").expect("c");
        drag.motion(&mut surface, 7, Point::new(rect_c.center_x(), rect_c.top + 30.0));

        let outcome = drag.release(&mut surface, 7).expect("outcome");
        assert_eq!(
            outcome,
            DragOutcome::Reorder {
                dragged: "a",
                order: vec!["b", "c", "a", "d"],
            }
        );
        assert_eq!(surface.sequence(), ["b", "c", "a", "d"]);
        assert!(surface.placeholder_index().is_none());
        assert!(surface.floating().is_none());
        assert!(!surface.flips().is_empty());
    }

    #[test]
    fn test_list_overlay_keeps_x() {
        let (mut drag, mut surface) = folders();
        let start = surface.cell_center(0);
        drag.press(&surface, PointerPress::primary(1, "a", start));
        drag.motion(&mut surface, 1, Point::new(start.x + 40.0, start.y + 20.0));
        let (_, rect) = surface.floating().expect("floating");
        assert_eq!(rect.left, 0.0);
        assert_eq!(rect.top, 20.0);
    }

    #[test]
    fn test_same_slot_is_not_replayed() {
        let (mut drag, mut surface) = folders();
        drag.press(&surface, PointerPress::primary(1, "b", surface.cell_center(1)));
        // Upper half of "c": placeholder already sits right before "c".
        let rect_c = surface.cell_rect(2);
        drag.motion(&mut surface, 1, Point::new(rect_c.center_x(), rect_c.top + 5.0));
        assert!(drag.is_dragging());
        assert!(surface.flips().is_empty());

        let outcome = drag.release(&mut surface, 1).expect("outcome");
        assert_eq!(
            outcome,
            DragOutcome::Reorder {
                dragged: "b",
                order: vec!["a", "b", "c", "d"],
            }
        );
    }

    #[test]
    fn test_release_without_target_cancels() {
        let (mut drag, mut surface) = folders();
        drag.press(&surface, PointerPress::primary(1, "b", surface.cell_center(1)));
        drag.motion(&mut surface, 1, Point::new(500.0, 500.0));
        assert!(drag.is_dragging());
        assert_eq!(drag.release(&mut surface, 1), Some(DragOutcome::Cancelled("b")));
        assert_eq!(surface.sequence(), ["a", "b", "c", "d"]);
        assert!(surface.placeholder_index().is_none());
    }

    #[test]
    fn test_press_guards() {
        let (mut drag, mut surface) = folders();
        let at = surface.cell_center(0);

        let mut secondary = PointerPress::primary(1, "a", at);
        secondary.button = PointerButton::Secondary;
        assert_eq!(drag.press(&surface, secondary), PressDisposition::Ignored);

        let control = PointerPress::primary(1, "a", at).on_control();
        assert_eq!(drag.press(&surface, control), PressDisposition::PassThrough);
        assert!(!drag.is_active());

        assert_eq!(drag.press(&surface, PointerPress::primary(1, "a", at)), PressDisposition::Armed);
        assert_eq!(
            drag.press(&surface, PointerPress::primary(2, "b", surface.cell_center(1))),
            PressDisposition::Ignored
        );
        // Events from another pointer do not touch the gesture.
        drag.motion(&mut surface, 2, Point::new(at.x, at.y + 100.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.release(&mut surface, 2), None);
        assert_eq!(drag.dragged(), Some(&"a"));
    }

    #[test]
    fn test_grid_top_band_inserts_before() {
        let mut drag = DragController::grid(&DragConfig::default());
        let mut surface = FlowSurface::grid(["P", "Q", "R", "X"], cell(), 2, 10.0);
        drag.press(&surface, PointerPress::primary(1, "X", surface.cell_center(3)));

        let q = surface.cell_rect(1);
        drag.motion(&mut surface, 1, Point::new(q.right() - 5.0, q.top + 4.0));

        let outcome = drag.release(&mut surface, 1).expect("outcome");
        assert_eq!(
            outcome,
            DragOutcome::Reorder {
                dragged: "X",
                order: vec!["P", "X", "Q", "R"],
            }
        );
    }

    #[test]
    fn test_flip_reports_shifted_siblings() {
        let (mut drag, mut surface) = folders();
        drag.press(&surface, PointerPress::primary(1, "d", surface.cell_center(3)));
        let a = surface.cell_rect(0);
        drag.motion(&mut surface, 1, Point::new(a.center_x(), a.top + 1.0));

        let flips = surface.flips();
        assert_eq!(flips.len(), 1);
        let moved: Vec<&str> = flips[0].iter().map(|m| m.id).collect();
        assert_eq!(moved, ["a", "b", "c"]);
        assert_eq!(flips[0][0].invert(), Point::new(0.0, -40.0));
    }
}
