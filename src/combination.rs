//! Sparse linear combinations over a coefficient ring.
//!
//! [`LinearCombination`] is the element type of a group algebra, but it is
//! generic over the basis key so the same storage and the same extension
//! machinery also serve tensor squares (coproduct values) and anything else a
//! linear rule can produce.

use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::ring::Ring;

/// Anything usable as a basis key of a sparse combination.
pub trait BasisKey: Clone + Debug + Eq + Hash + 'static {}

impl<K: Clone + Debug + Eq + Hash + 'static> BasisKey for K {}

/// A finite linear combination of basis keys with coefficients in `R`.
///
/// Invariant: no stored coefficient is zero. Every assembly path goes through
/// [`add_term`](LinearCombination::add_term) or
/// [`term`](LinearCombination::term), which prune zeros, so equality of
/// combinations is plain equality of the underlying maps.
///
/// The combination does not carry its ring; all operations that need ring
/// arithmetic take it as an argument, mirroring how modules defer to their
/// algebra for the action on basis elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCombination<K: BasisKey, R: Ring> {
    terms: FxHashMap<K, R::Element>,
}

impl<K: BasisKey, R: Ring> Default for LinearCombination<K, R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<K: BasisKey, R: Ring> LinearCombination<K, R> {
    pub fn zero() -> Self {
        Self {
            terms: FxHashMap::default(),
        }
    }

    /// The combination `coeff * key`, or zero if `coeff` is zero.
    pub fn term(ring: &R, key: K, coeff: R::Element) -> Self {
        let mut result = Self::zero();
        result.add_term(ring, key, coeff);
        result
    }

    /// Assemble a combination from `(key, coefficient)` pairs, merging
    /// repeated keys by ring addition and pruning zeros.
    pub fn from_terms(ring: &R, terms: impl IntoIterator<Item = (K, R::Element)>) -> Self {
        let mut result = Self::zero();
        for (key, coeff) in terms {
            result.add_term(ring, key, coeff);
        }
        result
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The number of nonzero terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The coefficient of `key`, or `None` if it does not appear.
    pub fn coefficient(&self, key: &K) -> Option<&R::Element> {
        self.terms.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &R::Element)> {
        self.terms.iter()
    }

    /// Add `coeff * key`, merging with an existing term for `key` by ring
    /// addition. The entry is removed if the sum cancels.
    pub fn add_term(&mut self, ring: &R, key: K, coeff: R::Element) {
        if ring.is_zero(&coeff) {
            return;
        }
        match self.terms.remove(&key) {
            None => {
                self.terms.insert(key, coeff);
            }
            Some(existing) => {
                let sum = ring.add(&existing, &coeff);
                if !ring.is_zero(&sum) {
                    self.terms.insert(key, sum);
                }
            }
        }
    }

    pub fn add(&self, ring: &R, other: &Self) -> Self {
        let mut result = self.clone();
        for (key, coeff) in other.iter() {
            result.add_term(ring, key.clone(), coeff.clone());
        }
        result
    }

    pub fn negate(&self, ring: &R) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(key, coeff)| (key.clone(), ring.neg(coeff)))
                .collect(),
        }
    }

    pub fn sub(&self, ring: &R, other: &Self) -> Self {
        self.add(ring, &other.negate(ring))
    }

    /// Multiply every coefficient by `scalar`, pruning terms the ring kills.
    pub fn scale(&self, ring: &R, scalar: &R::Element) -> Self {
        let mut result = Self::zero();
        for (key, coeff) in self.iter() {
            result.add_term(ring, key.clone(), ring.mul(scalar, coeff));
        }
        result
    }

    /// Extend a rule defined on basis keys to the whole combination by
    /// linearity: the image of `sum c_i * k_i` is `sum c_i * rule(k_i)`.
    pub fn extend_linear<K2: BasisKey>(
        &self,
        ring: &R,
        rule: impl Fn(&K) -> LinearCombination<K2, R>,
    ) -> LinearCombination<K2, R> {
        let mut result = LinearCombination::zero();
        for (key, coeff) in self.iter() {
            for (key2, coeff2) in rule(key).iter() {
                result.add_term(ring, key2.clone(), ring.mul(coeff, coeff2));
            }
        }
        result
    }

    /// Extend a rule defined on pairs of basis keys to a bilinear map: the
    /// image of the pair `(sum c_i * k_i, sum d_j * l_j)` is
    /// `sum c_i * d_j * rule(k_i, l_j)`, with like terms merged and zeros
    /// pruned.
    pub fn extend_bilinear<K2: BasisKey>(
        ring: &R,
        a: &Self,
        b: &Self,
        rule: impl Fn(&K, &K) -> LinearCombination<K2, R>,
    ) -> LinearCombination<K2, R> {
        let mut result = LinearCombination::zero();
        for (ka, ca) in a.iter() {
            for (kb, cb) in b.iter() {
                let coeff = ring.mul(ca, cb);
                if ring.is_zero(&coeff) {
                    continue;
                }
                for (key2, coeff2) in rule(ka, kb).iter() {
                    result.add_term(ring, key2.clone(), ring.mul(&coeff, coeff2));
                }
            }
        }
        result
    }

    /// Render the combination with a caller-supplied basis renderer, terms
    /// sorted by their rendered basis for determinism. Unit coefficients are
    /// suppressed and the zero combination renders as `0`.
    pub fn format_with(&self, ring: &R, basis: impl Fn(&K) -> String) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        self.terms
            .iter()
            .map(|(key, coeff)| (basis(key), coeff))
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(b, coeff)| {
                if ring.is_one(coeff) {
                    b
                } else {
                    format!("{coeff}*{b}")
                }
            })
            .join(" + ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::IntegerRing;

    #[test]
    fn test_zero_pruning() {
        let zz = IntegerRing;
        let a = LinearCombination::term(&zz, "g", 0);
        assert!(a.is_zero());

        let mut b = LinearCombination::term(&zz, "g", 3);
        b.add_term(&zz, "g", -3);
        assert!(b.is_zero());
        assert_eq!(b, LinearCombination::zero());
    }

    #[test]
    fn test_merge_by_addition() {
        let zz = IntegerRing;
        let a = LinearCombination::from_terms(&zz, [("g", 2), ("h", 1), ("g", 5)]);
        assert_eq!(a.coefficient(&"g"), Some(&7));
        assert_eq!(a.coefficient(&"h"), Some(&1));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_extend_linear() {
        let zz = IntegerRing;
        let a = LinearCombination::from_terms(&zz, [("g", 2), ("h", 3)]);
        // Rule sending every key to the same key collapses the combination.
        let image = a.extend_linear(&zz, |_| LinearCombination::term(&zz, "e", 1));
        assert_eq!(image, LinearCombination::term(&zz, "e", 5));
    }

    #[test]
    fn test_extend_bilinear_merges_like_terms() {
        let zz = IntegerRing;
        let a = LinearCombination::from_terms(&zz, [("g", 1), ("h", 1)]);
        let b = a.clone();
        // Multiplication table of the cyclic group of order 2 on {g, h}.
        let product = LinearCombination::extend_bilinear(&zz, &a, &b, |x, y| {
            let key = if x == y { "g" } else { "h" };
            LinearCombination::term(&zz, key, 1)
        });
        assert_eq!(
            product,
            LinearCombination::from_terms(&zz, [("g", 2), ("h", 2)])
        );
    }

    #[test]
    fn test_format_sorted_and_unit_suppressed() {
        let zz = IntegerRing;
        let a = LinearCombination::from_terms(&zz, [("b", 1), ("a", -2)]);
        assert_eq!(a.format_with(&zz, |k| k.to_string()), "-2*a + b");
        assert_eq!(
            LinearCombination::<&str, IntegerRing>::zero().format_with(&zz, |k| k.to_string()),
            "0"
        );
    }
}
