//! Hit-test geometry: where a hovered sibling puts the placeholder.

use promptdeck_core::types::{Point, Rect};

/// Where the placeholder goes relative to the hovered sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Insert before the sibling.
    Before,
    /// Insert after the sibling.
    After,
}

/// Arrangement of the draggable elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    /// A single vertical column (folders).
    List,
    /// Rows that wrap across columns (prompts).
    Grid {
        /// Fraction of the cell height taken by each of the top and bottom
        /// bands.
        band_ratio: f64,
    },
}

impl Layout {
    /// Decide placement for `pointer` over a sibling occupying `rect`.
    ///
    /// List: above the vertical midpoint is before. Grid: the top band is
    /// before, the bottom band after, and in the middle band the
    /// horizontal center decides so a drop can wrap between rows.
    pub fn placement(&self, rect: &Rect, pointer: Point) -> Placement {
        match *self {
            Layout::List => {
                if pointer.y < rect.center_y() {
                    Placement::Before
                } else {
                    Placement::After
                }
            }
            Layout::Grid { band_ratio } => {
                let band = rect.height * band_ratio;
                if pointer.y < rect.top + band {
                    Placement::Before
                } else if pointer.y > rect.bottom() - band {
                    Placement::After
                } else if pointer.x < rect.center_x() {
                    Placement::Before
                } else {
                    Placement::After
                }
            }
        }
    }

    /// Whether the floating element may move horizontally.
    pub fn follows_x(&self) -> bool {
        matches!(self, Layout::Grid { .. })
    }
}
