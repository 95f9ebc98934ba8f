//! The seams between this crate and the structures it builds on.
//!
//! Rings and groups are external collaborators: this crate never inspects
//! their elements beyond equality, hashing and display. [`Parent`] is the
//! common shape of a structure that owns elements, and [`CoerceFrom`] records
//! that one structure admits a canonical map from another.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A structure that owns elements: a ring, a group, or anything else used as
/// a source of values by the conversion resolver.
///
/// Parents are cheap-to-clone values. Equality and hashing are structural and
/// identify the parent for caching purposes, so two parents comparing equal
/// must be interchangeable.
pub trait Parent: Clone + Debug + Display + Eq + Hash + 'static {
    type Element: Clone + Debug + Display + Eq + Hash + 'static;
}

/// A canonical map from `S` into `Self`.
///
/// The trait being implemented means the *question* can be asked; whether the
/// two concrete instances are actually linked is answered at runtime by
/// [`admits`](CoerceFrom::admits). `coerce` may still fail element-wise even
/// when `admits` holds (partial maps, e.g. rationals into a prime field), in
/// which case the source structure's own error is returned.
pub trait CoerceFrom<S: Parent>: Parent {
    /// Whether there is a canonical map from `from` into `self`.
    fn admits(&self, from: &S) -> bool;

    /// Map `x` through the canonical map. Callers should check
    /// [`admits`](CoerceFrom::admits) first; implementations may either error
    /// or produce garbage when no map exists.
    fn coerce(&self, from: &S, x: &S::Element) -> anyhow::Result<Self::Element>;
}

/// Declare that there is no canonical map from `$source` into `$target`.
///
/// The conversion resolver requires a [`CoerceFrom`] bound for every route it
/// might try, so pairs of structures with no relation still need an
/// implementation that refuses at runtime.
#[macro_export]
macro_rules! no_canonical_map {
    ($target:ty, $source:ty) => {
        impl $crate::coercion::CoerceFrom<$source> for $target {
            fn admits(&self, _from: &$source) -> bool {
                false
            }

            fn coerce(
                &self,
                from: &$source,
                _x: &<$source as $crate::coercion::Parent>::Element,
            ) -> anyhow::Result<<$target as $crate::coercion::Parent>::Element> {
                Err(anyhow::anyhow!("no canonical map from {from} to {self}"))
            }
        }
    };
}

/// Whether `candidate` is the very structure `parent`, not merely an equal or
/// compatible one of a different type.
pub(crate) fn is_same_parent<A: Parent, B: Parent>(candidate: &A, parent: &B) -> bool {
    (candidate as &dyn std::any::Any)
        .downcast_ref::<B>()
        .is_some_and(|c| c == parent)
}

/// Reinterpret an element of `A` as an element of `B` when `A` and `B` are
/// the same type. Used after [`is_same_parent`] has established identity.
pub(crate) fn transmute_element<A: Parent, B: Parent>(x: &A::Element) -> Option<B::Element> {
    (x as &dyn std::any::Any)
        .downcast_ref::<B::Element>()
        .cloned()
}
