use std::fmt;

use anyhow::anyhow;
use rand::{Rng, RngCore};

use crate::coercion::{CoerceFrom, Parent};
use crate::group::Group;
use crate::no_canonical_map;
use crate::structures::{IntegerRing, PrimeField, RationalField};

/// `g^k` in a cyclic group, stored as the exponent `k` reduced mod the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CyclicElement(pub u64);

impl fmt::Display for CyclicElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            0 => write!(f, "1"),
            1 => write!(f, "g"),
            k => write!(f, "g^{k}"),
        }
    }
}

/// The cyclic group of order `n`, written multiplicatively with generator
/// `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CyclicGroup {
    order: u64,
}

impl CyclicGroup {
    /// Panics if `n` is zero.
    pub fn new(n: u64) -> Self {
        assert!(n >= 1, "a cyclic group has positive order");
        Self { order: n }
    }

    pub fn order(&self) -> u64 {
        self.order
    }

    pub fn element(&self, exponent: u64) -> CyclicElement {
        CyclicElement(exponent % self.order)
    }
}

impl fmt::Display for CyclicGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Cyclic group of order {}", self.order)
    }
}

impl Parent for CyclicGroup {
    type Element = CyclicElement;
}

impl Group for CyclicGroup {
    fn identity(&self) -> CyclicElement {
        CyclicElement(0)
    }

    fn compose(&self, a: &CyclicElement, b: &CyclicElement) -> CyclicElement {
        CyclicElement((a.0 + b.0) % self.order)
    }

    fn inverse(&self, a: &CyclicElement) -> CyclicElement {
        CyclicElement((self.order - a.0 % self.order) % self.order)
    }

    fn gens(&self) -> Vec<CyclicElement> {
        if self.order == 1 {
            Vec::new()
        } else {
            vec![CyclicElement(1)]
        }
    }

    fn cardinality(&self) -> Option<u64> {
        Some(self.order)
    }

    fn random_element(&self, rng: &mut dyn RngCore) -> CyclicElement {
        CyclicElement(rng.gen_range(0..self.order))
    }
}

/// `C_d` embeds in `C_n` exactly when `d` divides `n`, sending the generator
/// to `g^(n/d)`.
impl CoerceFrom<CyclicGroup> for CyclicGroup {
    fn admits(&self, from: &CyclicGroup) -> bool {
        self.order % from.order == 0
    }

    fn coerce(&self, from: &CyclicGroup, x: &CyclicElement) -> anyhow::Result<CyclicElement> {
        if !self.admits(from) {
            return Err(anyhow!("no canonical map from {from} to {self}"));
        }
        Ok(CyclicElement(x.0 * (self.order / from.order) % self.order))
    }
}

/// The group with one element. Every group maps onto it, which makes it the
/// simplest structure whose conversions collapse distinct basis elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrivialGroup;

impl fmt::Display for TrivialGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Trivial group")
    }
}

impl Parent for TrivialGroup {
    type Element = CyclicElement;
}

impl Group for TrivialGroup {
    fn identity(&self) -> CyclicElement {
        CyclicElement(0)
    }

    fn compose(&self, _a: &CyclicElement, _b: &CyclicElement) -> CyclicElement {
        CyclicElement(0)
    }

    fn inverse(&self, _a: &CyclicElement) -> CyclicElement {
        CyclicElement(0)
    }

    fn gens(&self) -> Vec<CyclicElement> {
        Vec::new()
    }

    fn cardinality(&self) -> Option<u64> {
        Some(1)
    }

    fn random_element(&self, _rng: &mut dyn RngCore) -> CyclicElement {
        CyclicElement(0)
    }
}

impl CoerceFrom<TrivialGroup> for TrivialGroup {
    fn admits(&self, _from: &TrivialGroup) -> bool {
        true
    }

    fn coerce(&self, _from: &TrivialGroup, x: &CyclicElement) -> anyhow::Result<CyclicElement> {
        Ok(*x)
    }
}

impl CoerceFrom<CyclicGroup> for TrivialGroup {
    fn admits(&self, _from: &CyclicGroup) -> bool {
        true
    }

    fn coerce(&self, _from: &CyclicGroup, _x: &CyclicElement) -> anyhow::Result<CyclicElement> {
        Ok(CyclicElement(0))
    }
}

// A multiplicatively written cyclic group has no canonical image in a
// coefficient ring.
no_canonical_map!(IntegerRing, CyclicGroup);
no_canonical_map!(RationalField, CyclicGroup);
no_canonical_map!(PrimeField, CyclicGroup);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_axioms() {
        let c4 = CyclicGroup::new(4);
        let g = c4.element(1);
        assert_eq!(c4.compose(&g, &c4.inverse(&g)), c4.identity());
        assert_eq!(c4.compose(&c4.element(3), &c4.element(2)), c4.element(1));
        assert_eq!(c4.inverse(&c4.identity()), c4.identity());
    }

    #[test]
    fn test_subgroup_embedding() {
        let c2 = CyclicGroup::new(2);
        let c4 = CyclicGroup::new(4);
        let c3 = CyclicGroup::new(3);
        assert!(c4.admits(&c2));
        assert!(!c4.admits(&c3));
        // The image of the order-2 generator still has order 2.
        let image = c4.coerce(&c2, &c2.element(1)).unwrap();
        assert_eq!(image, c4.element(2));
        assert_eq!(c4.compose(&image, &image), c4.identity());
    }

    #[test]
    fn test_element_display() {
        let c4 = CyclicGroup::new(4);
        assert_eq!(c4.identity().to_string(), "1");
        assert_eq!(c4.element(1).to_string(), "g");
        assert_eq!(c4.element(3).to_string(), "g^3");
    }
}
