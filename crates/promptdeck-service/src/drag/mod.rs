//! Pointer-driven drag gestures for reordering.
//!
//! One [`DragController`] per entity kind turns press/move/release events
//! into a [`DragOutcome`]. All rendering goes through a [`DragSurface`],
//! so the state machine and hit-test geometry run against synthetic
//! rectangles in tests ([`FlowSurface`]).

pub mod controller;
pub mod flow;
pub mod placement;
pub mod surface;

pub use controller::{DragController, DragOutcome, PointerButton, PointerPress, PressDisposition};
pub use flow::FlowSurface;
pub use placement::{Layout, Placement};
pub use surface::{DragSurface, FlipMove};
