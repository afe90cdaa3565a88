//! Shared shape of entities that carry a global `order` field.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// An entity positioned in a collection by an integer order value.
///
/// `order` is optional because legacy data may lack it; a normalized
/// collection always has `Some(0..N-1)`.
pub trait Ordered {
    /// Identifier type of the entity.
    type Id: Clone + Eq + Hash + Debug + Display;

    /// The entity's identifier.
    fn id(&self) -> &Self::Id;

    /// Current order value, if any.
    fn order(&self) -> Option<i64>;

    /// Overwrite the order value.
    fn set_order(&mut self, order: i64);
}
