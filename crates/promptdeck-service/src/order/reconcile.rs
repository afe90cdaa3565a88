//! Slot-preserving merge of a reordered visible subset.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::{error, warn};

use promptdeck_core::traits::Ordered;

/// A reorder request that cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// The new order does not have one entry per visible id.
    #[error("reorder expected {expected} ids but received {actual}")]
    LengthMismatch {
        /// Number of visible ids.
        expected: usize,
        /// Number of ids in the new order.
        actual: usize,
    },
}

/// Result of a successful [`reconcile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled<Id> {
    /// Ids from the new order that were not part of the visible subset.
    pub dropped: Vec<Id>,
    /// Whether any entity changed position.
    pub changed: bool,
}

/// Assign `order = index` to every entity in its current position.
///
/// Returns whether any value changed.
pub fn reindex<T: Ordered>(items: &mut [T]) -> bool {
    let mut changed = false;
    for (index, item) in items.iter_mut().enumerate() {
        let order = index as i64;
        if item.order() != Some(order) {
            item.set_order(order);
            changed = true;
        }
    }
    changed
}

/// Merge `new_order` (a permutation of `visible`) into `sorted`.
///
/// `sorted` must already be in display order. The positions occupied by
/// visible entities are refilled in sequence from `new_order`; every other
/// entity keeps its position. Afterwards the whole collection is reindexed
/// to `0..N-1`.
///
/// Ids in `new_order` that are not visible (or repeat) are dropped with a
/// warning. Visible ids the new order omitted keep their relative order
/// after the ones it named. Visible ids absent from `sorted` are ignored.
///
/// On a length mismatch nothing is mutated.
pub fn reconcile<T: Ordered>(
    sorted: &mut Vec<T>,
    visible: &[T::Id],
    new_order: &[T::Id],
) -> Result<Reconciled<T::Id>, ReconcileError> {
    if visible.len() != new_order.len() {
        error!(
            expected = visible.len(),
            actual = new_order.len(),
            "Reorder length does not match the visible subset; refusing to apply"
        );
        return Err(ReconcileError::LengthMismatch {
            expected: visible.len(),
            actual: new_order.len(),
        });
    }

    let index_of: HashMap<&T::Id, usize> = sorted
        .iter()
        .enumerate()
        .map(|(i, item)| (item.id(), i))
        .collect();

    let scope: HashSet<&T::Id> = visible.iter().filter(|id| index_of.contains_key(id)).collect();

    let slots: Vec<usize> = sorted
        .iter()
        .enumerate()
        .filter(|(_, item)| scope.contains(item.id()))
        .map(|(i, _)| i)
        .collect();

    let mut placed: HashSet<&T::Id> = HashSet::with_capacity(slots.len());
    let mut fill: Vec<usize> = Vec::with_capacity(slots.len());
    let mut dropped = Vec::new();

    for id in new_order {
        if scope.contains(id) && placed.insert(id) {
            fill.push(index_of[id]);
        } else {
            warn!(id = %id, "Dropping id that is not part of the visible subset");
            dropped.push(id.clone());
        }
    }
    for &slot in &slots {
        if placed.insert(sorted[slot].id()) {
            fill.push(slot);
        }
    }

    let mut sequence: Vec<usize> = (0..sorted.len()).collect();
    for (&slot, &source) in slots.iter().zip(&fill) {
        sequence[slot] = source;
    }
    let changed = sequence.iter().enumerate().any(|(i, &s)| i != s);

    if changed {
        let mut taken: Vec<Option<T>> = sorted.drain(..).map(Some).collect();
        sorted.extend(sequence.iter().filter_map(|&i| taken[i].take()));
    }
    let reindexed = reindex(sorted);

    Ok(Reconciled {
        dropped,
        changed: changed || reindexed,
    })
}
