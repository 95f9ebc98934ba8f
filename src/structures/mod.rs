//! Small concrete rings and groups.
//!
//! The real coefficient rings and basis groups are external collaborators;
//! the implementations here exist so the crate's own tests and docs have
//! something concrete to instantiate, and to pin down the coercion wiring
//! between structures that do have canonical maps.

mod additive;
mod cyclic;
mod integers;
mod prime_field;
mod rationals;
mod symmetric;

pub use additive::IntegerAddGroup;
pub use cyclic::{CyclicElement, CyclicGroup, TrivialGroup};
pub use integers::IntegerRing;
pub use prime_field::PrimeField;
pub use rationals::{Rational, RationalField};
pub use symmetric::{Permutation, SymmetricGroup};
