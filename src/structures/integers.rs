use std::fmt;

use rand::{Rng, RngCore};

use crate::coercion::{CoerceFrom, Parent};
use crate::no_canonical_map;
use crate::ring::Ring;
use crate::structures::RationalField;

/// The ring of integers, with `i64` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerRing;

impl fmt::Display for IntegerRing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Integer Ring")
    }
}

impl Parent for IntegerRing {
    type Element = i64;
}

impl Ring for IntegerRing {
    fn zero(&self) -> i64 {
        0
    }

    fn one(&self) -> i64 {
        1
    }

    fn add(&self, a: &i64, b: &i64) -> i64 {
        a + b
    }

    fn mul(&self, a: &i64, b: &i64) -> i64 {
        a * b
    }

    fn neg(&self, a: &i64) -> i64 {
        -a
    }

    fn from_int(&self, n: i64) -> i64 {
        n
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn is_field(&self) -> bool {
        false
    }

    fn characteristic(&self) -> u64 {
        0
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn random_element(&self, rng: &mut dyn RngCore) -> i64 {
        rng.gen_range(-10..=10)
    }
}

impl CoerceFrom<IntegerRing> for IntegerRing {
    fn admits(&self, _from: &IntegerRing) -> bool {
        true
    }

    fn coerce(&self, _from: &IntegerRing, x: &i64) -> anyhow::Result<i64> {
        Ok(*x)
    }
}

// There is no canonical map from the rationals back into the integers.
no_canonical_map!(IntegerRing, RationalField);
