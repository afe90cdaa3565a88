//! A headless [`DragSurface`] that lays cells out in a wrapping flow.
//!
//! Cells are fixed-size and fill rows left to right, `columns` per row.
//! A one-column flow is a vertical list. Used to drive controllers without
//! a real renderer and to inspect what they asked the renderer to do.

use std::time::Duration;

use promptdeck_core::types::{Point, Rect, Size};

use super::surface::{DragSurface, FlipMove};

#[derive(Debug, Clone, PartialEq)]
enum Cell<Id> {
    Item(Id),
    Placeholder,
}

/// In-memory flow layout of equally sized cells.
#[derive(Debug, Clone)]
pub struct FlowSurface<Id> {
    cells: Vec<Cell<Id>>,
    floating: Option<(Id, Rect)>,
    origin: Point,
    cell: Size,
    gap: f64,
    columns: usize,
    flips: Vec<Vec<FlipMove<Id>>>,
}

impl<Id: Clone + PartialEq> FlowSurface<Id> {
    /// A vertical list of `cell`-sized rows with no gaps, starting at the
    /// origin.
    pub fn list(ids: impl IntoIterator<Item = Id>, cell: Size) -> Self {
        Self::grid(ids, cell, 1, 0.0)
    }

    /// A grid with `columns` cells per row separated by `gap`.
    pub fn grid(ids: impl IntoIterator<Item = Id>, cell: Size, columns: usize, gap: f64) -> Self {
        Self {
            cells: ids.into_iter().map(Cell::Item).collect(),
            floating: None,
            origin: Point::default(),
            cell,
            gap,
            columns: columns.max(1),
            flips: Vec::new(),
        }
    }

    /// Bounds of the flow position `index`.
    pub fn cell_rect(&self, index: usize) -> Rect {
        let row = (index / self.columns) as f64;
        let col = (index % self.columns) as f64;
        Rect::new(
            self.origin.x + col * (self.cell.width + self.gap),
            self.origin.y + row * (self.cell.height + self.gap),
            self.cell.width,
            self.cell.height,
        )
    }

    /// Center of the flow position `index`.
    pub fn cell_center(&self, index: usize) -> Point {
        let rect = self.cell_rect(index);
        Point::new(rect.center_x(), rect.center_y())
    }

    /// Flow index of the placeholder, if present.
    pub fn placeholder_index(&self) -> Option<usize> {
        self.cells.iter().position(|c| *c == Cell::Placeholder)
    }

    /// The floating element and its bounds, if one is lifted.
    pub fn floating(&self) -> Option<&(Id, Rect)> {
        self.floating.as_ref()
    }

    /// Every batch of moves handed to [`DragSurface::play_flip`].
    pub fn flips(&self) -> &[Vec<FlipMove<Id>>] {
        &self.flips
    }

    fn index_of(&self, id: &Id) -> Option<usize> {
        self.cells
            .iter()
            .position(|c| matches!(c, Cell::Item(item) if item == id))
    }

    fn insert_before(&mut self, cell: Cell<Id>, before: Option<&Id>) {
        let index = before
            .and_then(|id| self.index_of(id))
            .unwrap_or(self.cells.len());
        self.cells.insert(index, cell);
    }
}

impl<Id: Clone + PartialEq> DragSurface<Id> for FlowSurface<Id> {
    fn sibling_at(&self, point: Point) -> Option<Id> {
        self.cells.iter().enumerate().find_map(|(i, cell)| match cell {
            Cell::Item(id) if self.cell_rect(i).contains(point) => Some(id.clone()),
            _ => None,
        })
    }

    fn bounds_of(&self, id: &Id) -> Option<Rect> {
        match &self.floating {
            Some((floating, rect)) if floating == id => Some(*rect),
            _ => self.index_of(id).map(|i| self.cell_rect(i)),
        }
    }

    fn sequence(&self) -> Vec<Id> {
        self.cells
            .iter()
            .filter_map(|c| match c {
                Cell::Item(id) => Some(id.clone()),
                Cell::Placeholder => None,
            })
            .collect()
    }

    fn float_dragged(&mut self, id: &Id, bounds: Rect) {
        if let Some(index) = self.index_of(id) {
            self.cells.remove(index);
        }
        self.floating = Some((id.clone(), bounds));
    }

    fn move_floating(&mut self, id: &Id, origin: Point) {
        if let Some((floating, rect)) = &mut self.floating {
            if floating == id {
                *rect = rect.moved_to(origin);
            }
        }
    }

    fn restore_dragged(&mut self, id: &Id, before: Option<&Id>) {
        if matches!(&self.floating, Some((floating, _)) if floating == id) {
            self.floating = None;
        }
        if self.index_of(id).is_none() {
            self.insert_before(Cell::Item(id.clone()), before);
        }
    }

    fn insert_placeholder(&mut self, _size: Size, before: Option<&Id>) {
        self.remove_placeholder();
        self.insert_before(Cell::Placeholder, before);
    }

    fn move_placeholder(&mut self, before: Option<&Id>) {
        self.remove_placeholder();
        self.insert_before(Cell::Placeholder, before);
    }

    fn remove_placeholder(&mut self) {
        self.cells.retain(|c| *c != Cell::Placeholder);
    }

    fn play_flip(&mut self, moves: &[FlipMove<Id>], _duration: Duration) {
        self.flips.push(moves.to_vec());
    }
}
