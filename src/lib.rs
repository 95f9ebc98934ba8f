//! Group algebras `R[G]` for arbitrary groups over arbitrary commutative
//! rings.
//!
//! The element type is a sparse linear combination of group elements with
//! nonzero ring coefficients; multiplication is induced by the group
//! operation and comes with the usual Hopf structure (group-like coproduct,
//! counit, inverse antipode). Rings and groups themselves are external
//! collaborators behind the [`Ring`] and [`Group`] traits, and canonical
//! maps between structures are recorded by [`CoerceFrom`], which the
//! conversion resolver ([`GroupAlgebra::build`]) consults to decide whether
//! an arbitrary tagged value denotes an element of a given algebra.
//!
//! Canonical instances are cached per `(group, ring)` pair by an
//! [`AlgebraRegistry`], and [`GroupAlgebraFunctor`] packages "fix the group,
//! vary the ring" for the pushout mechanism.

pub mod coercion;
pub mod combination;
pub mod convert;
pub mod error;
pub mod functor;
pub mod group;
pub mod group_algebra;
pub mod registry;
pub mod ring;
pub mod structures;

pub use coercion::{CoerceFrom, Parent};
pub use combination::LinearCombination;
pub use convert::Value;
pub use error::Error;
pub use functor::{AlgebraHomomorphism, GroupAlgebraFunctor, RingHomomorphism};
pub use group::{Group, GroupCapabilities};
pub use group_algebra::{AlgebraCategory, AlgebraElement, GroupAlgebra, TensorSquare};
pub use registry::AlgebraRegistry;
pub use ring::Ring;
