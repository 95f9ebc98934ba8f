use std::fmt;

use anyhow::anyhow;
use rand::{Rng, RngCore};

use crate::coercion::{CoerceFrom, Parent};
use crate::ring::Ring;
use crate::structures::{IntegerRing, Rational, RationalField};

/// The finite field `GF(p)` for a prime `p`, with elements reduced mod `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// `p` must be prime; this is asserted only for small witnesses.
    pub fn new(p: u64) -> Self {
        assert!(p >= 2, "characteristic must be at least 2");
        assert!(
            (2..p).take(1000).all(|d| p % d != 0),
            "{p} is not prime"
        );
        Self { p }
    }

    pub fn prime(&self) -> u64 {
        self.p
    }

    fn pow_mod(&self, mut base: u64, mut exp: u64) -> u64 {
        let mut result = 1;
        base %= self.p;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base % self.p;
            }
            base = base * base % self.p;
            exp >>= 1;
        }
        result
    }

    /// The multiplicative inverse by Fermat's little theorem.
    fn invert(&self, a: u64) -> anyhow::Result<u64> {
        if a % self.p == 0 {
            return Err(anyhow!("division by zero in {self}"));
        }
        Ok(self.pow_mod(a, self.p - 2))
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Finite Field of size {}", self.p)
    }
}

impl Parent for PrimeField {
    type Element = u64;
}

impl Ring for PrimeField {
    fn zero(&self) -> u64 {
        0
    }

    fn one(&self) -> u64 {
        1 % self.p
    }

    fn add(&self, a: &u64, b: &u64) -> u64 {
        (a + b) % self.p
    }

    fn mul(&self, a: &u64, b: &u64) -> u64 {
        a * b % self.p
    }

    fn neg(&self, a: &u64) -> u64 {
        (self.p - a % self.p) % self.p
    }

    fn from_int(&self, n: i64) -> u64 {
        n.rem_euclid(self.p as i64) as u64
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn is_field(&self) -> bool {
        true
    }

    fn characteristic(&self) -> u64 {
        self.p
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn random_element(&self, rng: &mut dyn RngCore) -> u64 {
        rng.gen_range(0..self.p)
    }
}

impl CoerceFrom<PrimeField> for PrimeField {
    fn admits(&self, from: &PrimeField) -> bool {
        self == from
    }

    fn coerce(&self, from: &PrimeField, x: &u64) -> anyhow::Result<u64> {
        if self == from {
            Ok(*x)
        } else {
            Err(anyhow!("no canonical map from {from} to {self}"))
        }
    }
}

impl CoerceFrom<IntegerRing> for PrimeField {
    fn admits(&self, _from: &IntegerRing) -> bool {
        true
    }

    fn coerce(&self, _from: &IntegerRing, x: &i64) -> anyhow::Result<u64> {
        Ok(self.from_int(*x))
    }
}

/// Rationals map into `GF(p)` wherever the denominator is a unit; the map is
/// partial, and a denominator divisible by `p` is the field's own failure.
impl CoerceFrom<RationalField> for PrimeField {
    fn admits(&self, _from: &RationalField) -> bool {
        true
    }

    fn coerce(&self, _from: &RationalField, x: &Rational) -> anyhow::Result<u64> {
        let num = self.from_int(x.numerator());
        let den = self.from_int(x.denominator());
        Ok(self.mul(&num, &self.invert(den)?))
    }
}
