use std::fmt;

use rand::{Rng, RngCore};

use crate::coercion::{CoerceFrom, Parent};
use crate::ring::Ring;
use crate::structures::IntegerRing;

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// A rational number in lowest terms with positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// Panics if `den` is zero.
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "zero denominator");
        let sign = if den < 0 { -1 } else { 1 };
        let g = gcd(num, den);
        if g == 0 {
            return Self { num: 0, den: 1 };
        }
        Self {
            num: sign * num / g,
            den: sign * den / g,
        }
    }

    pub fn from_int(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> i64 {
        self.den
    }

    pub fn is_integral(&self) -> bool {
        self.den == 1
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// The field of rational numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RationalField;

impl fmt::Display for RationalField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rational Field")
    }
}

impl Parent for RationalField {
    type Element = Rational;
}

impl Ring for RationalField {
    fn zero(&self) -> Rational {
        Rational::from_int(0)
    }

    fn one(&self) -> Rational {
        Rational::from_int(1)
    }

    fn add(&self, a: &Rational, b: &Rational) -> Rational {
        Rational::new(a.num * b.den + b.num * a.den, a.den * b.den)
    }

    fn mul(&self, a: &Rational, b: &Rational) -> Rational {
        Rational::new(a.num * b.num, a.den * b.den)
    }

    fn neg(&self, a: &Rational) -> Rational {
        Rational {
            num: -a.num,
            den: a.den,
        }
    }

    fn from_int(&self, n: i64) -> Rational {
        Rational::from_int(n)
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn is_field(&self) -> bool {
        true
    }

    fn characteristic(&self) -> u64 {
        0
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn random_element(&self, rng: &mut dyn RngCore) -> Rational {
        Rational::new(rng.gen_range(-10..=10), rng.gen_range(1..=10))
    }
}

impl CoerceFrom<RationalField> for RationalField {
    fn admits(&self, _from: &RationalField) -> bool {
        true
    }

    fn coerce(&self, _from: &RationalField, x: &Rational) -> anyhow::Result<Rational> {
        Ok(*x)
    }
}

impl CoerceFrom<IntegerRing> for RationalField {
    fn admits(&self, _from: &IntegerRing) -> bool {
        true
    }

    fn coerce(&self, _from: &IntegerRing, x: &i64) -> anyhow::Result<Rational> {
        Ok(Rational::from_int(*x))
    }
}
