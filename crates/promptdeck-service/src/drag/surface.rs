//! The rendering capability a drag controller drives.

use std::time::Duration;

use promptdeck_core::types::{Point, Rect, Size};

/// One sibling that changed position after a placeholder move.
#[derive(Debug, Clone, PartialEq)]
pub struct FlipMove<Id> {
    /// Moved element.
    pub id: Id,
    /// Bounds before the move ("first").
    pub from: Rect,
    /// Bounds after the move ("last").
    pub to: Rect,
}

impl<Id> FlipMove<Id> {
    /// Translation that makes the element appear at its old position
    /// ("invert"); the renderer animates it back to zero.
    pub fn invert(&self) -> Point {
        self.from.origin().offset_from(self.to.origin())
    }
}

/// Spatial index and element manipulation for one draggable container.
///
/// `before` anchors name the entity the placeholder or dragged element is
/// inserted in front of; `None` means the end of the container.
pub trait DragSurface<Id> {
    /// The entity element under `point`, if any. Never the placeholder.
    fn sibling_at(&self, point: Point) -> Option<Id>;

    /// Current bounding box of an entity element.
    fn bounds_of(&self, id: &Id) -> Option<Rect>;

    /// Entity ids in their current visual order, placeholder excluded.
    fn sequence(&self) -> Vec<Id>;

    /// Lift the element out of the flow into a floating overlay at `bounds`.
    fn float_dragged(&mut self, id: &Id, bounds: Rect);

    /// Move the floating overlay so its top-left corner is at `origin`.
    fn move_floating(&mut self, id: &Id, origin: Point);

    /// Put the floating element back into the flow.
    fn restore_dragged(&mut self, id: &Id, before: Option<&Id>);

    /// Insert a placeholder of `size` into the flow.
    fn insert_placeholder(&mut self, size: Size, before: Option<&Id>);

    /// Move the existing placeholder.
    fn move_placeholder(&mut self, before: Option<&Id>);

    /// Remove the placeholder.
    fn remove_placeholder(&mut self);

    /// Animate `moves` from their old to their new bounds.
    fn play_flip(&mut self, moves: &[FlipMove<Id>], duration: Duration);
}
