use std::fmt;

use rand::{Rng, RngCore};

use crate::coercion::{CoerceFrom, Parent};
use crate::group::{Group, GroupCapabilities};
use crate::no_canonical_map;
use crate::ring::Ring;
use crate::structures::{CyclicGroup, IntegerRing, PrimeField, Rational, RationalField};

/// The additive group `(Z, +)`.
///
/// Its elements are integers, so they have canonical images in every ring as
/// well as in the group itself. This is the structure that makes the
/// ring-route-versus-group-route ambiguity real: an integer arriving from
/// this group could become `n * 1` or the basis element for `n`, and the two
/// differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerAddGroup;

impl fmt::Display for IntegerAddGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Additive group of integers")
    }
}

impl Parent for IntegerAddGroup {
    type Element = i64;
}

impl Group for IntegerAddGroup {
    fn identity(&self) -> i64 {
        0
    }

    fn compose(&self, a: &i64, b: &i64) -> i64 {
        a + b
    }

    fn inverse(&self, a: &i64) -> i64 {
        -a
    }

    fn gens(&self) -> Vec<i64> {
        vec![1]
    }

    fn cardinality(&self) -> Option<u64> {
        None
    }

    fn random_element(&self, rng: &mut dyn RngCore) -> i64 {
        rng.gen_range(-10..=10)
    }

    fn capabilities(&self) -> GroupCapabilities {
        GroupCapabilities::additive()
    }
}

impl CoerceFrom<IntegerAddGroup> for IntegerAddGroup {
    fn admits(&self, _from: &IntegerAddGroup) -> bool {
        true
    }

    fn coerce(&self, _from: &IntegerAddGroup, x: &i64) -> anyhow::Result<i64> {
        Ok(*x)
    }
}

// The group-into-ring edges. Each ring sees an additive integer through its
// canonical integer image.

impl CoerceFrom<IntegerAddGroup> for IntegerRing {
    fn admits(&self, _from: &IntegerAddGroup) -> bool {
        true
    }

    fn coerce(&self, _from: &IntegerAddGroup, x: &i64) -> anyhow::Result<i64> {
        Ok(*x)
    }
}

impl CoerceFrom<IntegerAddGroup> for RationalField {
    fn admits(&self, _from: &IntegerAddGroup) -> bool {
        true
    }

    fn coerce(&self, _from: &IntegerAddGroup, x: &i64) -> anyhow::Result<Rational> {
        Ok(Rational::from_int(*x))
    }
}

// No coercion from the additive integers into a finite cyclic group is
// registered; their values take the ring route instead.
no_canonical_map!(CyclicGroup, IntegerAddGroup);

impl CoerceFrom<IntegerAddGroup> for PrimeField {
    fn admits(&self, _from: &IntegerAddGroup) -> bool {
        true
    }

    fn coerce(&self, _from: &IntegerAddGroup, x: &i64) -> anyhow::Result<u64> {
        Ok(self.from_int(*x))
    }
}
