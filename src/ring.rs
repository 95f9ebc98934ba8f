use rand::RngCore;

use crate::coercion::Parent;

/// The coefficient ring collaborator.
///
/// Elements are opaque to the group algebra: all arithmetic goes through the
/// ring itself, in the same way a module defers to its algebra for the action
/// on basis elements. Implementations are expected to be commutative; the
/// flag exists so that a non-commutative ring can be rejected at construction
/// time instead of producing a malformed algebra.
pub trait Ring: Parent {
    fn zero(&self) -> Self::Element;

    fn one(&self) -> Self::Element;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn neg(&self, a: &Self::Element) -> Self::Element;

    fn is_zero(&self, a: &Self::Element) -> bool {
        *a == self.zero()
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        *a == self.one()
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.add(a, &self.neg(b))
    }

    /// The canonical image of an integer, i.e. the unique ring map from the
    /// integers applied to `n`.
    fn from_int(&self, n: i64) -> Self::Element;

    fn is_commutative(&self) -> bool;

    fn is_field(&self) -> bool;

    /// The characteristic, with `0` meaning characteristic zero.
    fn characteristic(&self) -> u64;

    /// Whether elements have exact representations.
    fn is_exact(&self) -> bool;

    fn random_element(&self, rng: &mut dyn RngCore) -> Self::Element;
}
