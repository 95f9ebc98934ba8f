use std::fmt;

use anyhow::anyhow;
use rand::seq::SliceRandom;
use rand::RngCore;

use crate::coercion::{CoerceFrom, Parent};
use crate::group::Group;
use crate::no_canonical_map;
use crate::structures::{CyclicElement, CyclicGroup, IntegerRing, PrimeField, RationalField};

/// A permutation of `{0, .., n-1}` in one-line notation: `images[i]` is the
/// image of `i`. Displayed in cycle notation on `1, .., n` as is customary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    images: Vec<u8>,
}

impl Permutation {
    pub fn new(images: Vec<u8>) -> Self {
        let mut seen = vec![false; images.len()];
        for &i in &images {
            assert!(
                (i as usize) < images.len() && !seen[i as usize],
                "not a permutation"
            );
            seen[i as usize] = true;
        }
        Self { images }
    }

    pub fn degree(&self) -> usize {
        self.images.len()
    }

    pub fn image(&self, i: usize) -> usize {
        self.images[i] as usize
    }

    fn cycles(&self) -> Vec<Vec<usize>> {
        let mut cycles = Vec::new();
        let mut seen = vec![false; self.images.len()];
        for start in 0..self.images.len() {
            if seen[start] {
                continue;
            }
            let mut cycle = vec![start];
            seen[start] = true;
            let mut next = self.image(start);
            while next != start {
                seen[next] = true;
                cycle.push(next);
                next = self.image(next);
            }
            if cycle.len() > 1 {
                cycles.push(cycle);
            }
        }
        cycles
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return write!(f, "()");
        }
        for cycle in cycles {
            write!(f, "(")?;
            for (i, point) in cycle.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", point + 1)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// The symmetric group on `n` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymmetricGroup {
    n: usize,
}

impl SymmetricGroup {
    pub fn new(n: usize) -> Self {
        assert!(n >= 1 && n <= u8::MAX as usize);
        Self { n }
    }

    pub fn degree(&self) -> usize {
        self.n
    }

    /// The cycle `(1,2,...,n)`.
    pub fn full_cycle(&self) -> Permutation {
        Permutation::new((0..self.n).map(|i| ((i + 1) % self.n) as u8).collect())
    }

    /// The transposition `(1,2)`; panics unless `n >= 2`.
    pub fn transposition(&self) -> Permutation {
        let mut images: Vec<u8> = (0..self.n as u8).collect();
        images.swap(0, 1);
        Permutation::new(images)
    }
}

impl fmt::Display for SymmetricGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Symmetric group of degree {}", self.n)
    }
}

impl Parent for SymmetricGroup {
    type Element = Permutation;
}

impl Group for SymmetricGroup {
    fn identity(&self) -> Permutation {
        Permutation::new((0..self.n as u8).collect())
    }

    /// Left-to-right composition: `(a * b)(i) = b(a(i))`.
    fn compose(&self, a: &Permutation, b: &Permutation) -> Permutation {
        Permutation::new((0..self.n).map(|i| b.images[a.image(i)]).collect())
    }

    fn inverse(&self, a: &Permutation) -> Permutation {
        let mut images = vec![0u8; self.n];
        for i in 0..self.n {
            images[a.image(i)] = i as u8;
        }
        Permutation::new(images)
    }

    fn gens(&self) -> Vec<Permutation> {
        match self.n {
            1 => Vec::new(),
            2 => vec![self.transposition()],
            _ => vec![self.full_cycle(), self.transposition()],
        }
    }

    fn cardinality(&self) -> Option<u64> {
        Some((1..=self.n as u64).product())
    }

    fn random_element(&self, rng: &mut dyn RngCore) -> Permutation {
        let mut images: Vec<u8> = (0..self.n as u8).collect();
        images.shuffle(rng);
        Permutation::new(images)
    }
}

/// `S_m` sits inside `S_n` for `m <= n` by fixing the extra points.
impl CoerceFrom<SymmetricGroup> for SymmetricGroup {
    fn admits(&self, from: &SymmetricGroup) -> bool {
        from.n <= self.n
    }

    fn coerce(&self, from: &SymmetricGroup, x: &Permutation) -> anyhow::Result<Permutation> {
        if !self.admits(from) {
            return Err(anyhow!("no canonical map from {from} to {self}"));
        }
        let mut images: Vec<u8> = (0..self.n as u8).collect();
        images[..from.n].copy_from_slice(&x.images);
        Ok(Permutation::new(images))
    }
}

/// `C_d` embeds in `S_n` for `d <= n` by rotating the first `d` points.
impl CoerceFrom<CyclicGroup> for SymmetricGroup {
    fn admits(&self, from: &CyclicGroup) -> bool {
        from.order() <= self.n as u64
    }

    fn coerce(&self, from: &CyclicGroup, x: &CyclicElement) -> anyhow::Result<Permutation> {
        if !self.admits(from) {
            return Err(anyhow!("no canonical map from {from} to {self}"));
        }
        let d = from.order() as usize;
        let k = x.0 as usize;
        let mut images: Vec<u8> = (0..self.n as u8).collect();
        for (i, image) in images.iter_mut().enumerate().take(d) {
            *image = ((i + k) % d) as u8;
        }
        Ok(Permutation::new(images))
    }
}

// Nothing maps a symmetric group back down into a cyclic group or into a
// coefficient ring.
no_canonical_map!(CyclicGroup, SymmetricGroup);
no_canonical_map!(IntegerRing, SymmetricGroup);
no_canonical_map!(RationalField, SymmetricGroup);
no_canonical_map!(PrimeField, SymmetricGroup);
