//! The canonical-instance cache for group algebras.
//!
//! For a fixed `(group, ring)` pair at most one algebra may exist for the
//! lifetime of a registry, and entries are never evicted. The registry is
//! explicit injectable state rather than a hidden global: whoever needs
//! canonical algebras owns a registry (typically one per process) and every
//! component requests instances through it, so tests can substitute a scoped
//! one.

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::group::Group;
use crate::group_algebra::GroupAlgebra;
use crate::ring::Ring;

/// A factory handing out canonical [`GroupAlgebra`] instances keyed by
/// `(group, ring)`.
///
/// Lookup and first-time construction happen under one lock, so two threads
/// racing to create the same pair still observe a single canonical instance.
pub struct AlgebraRegistry<G: Group, R: Ring> {
    table: Mutex<FxHashMap<(G, R), Arc<GroupAlgebra<G, R>>>>,
}

impl<G: Group, R: Ring> AlgebraRegistry<G, R> {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(FxHashMap::default()),
        }
    }

    /// The canonical algebra for `(group, ring)`, constructing and caching
    /// it on first request. Construction failures are returned and nothing
    /// is cached.
    pub fn get_or_create(&self, group: G, ring: R) -> anyhow::Result<Arc<GroupAlgebra<G, R>>> {
        let mut table = self.table.lock();
        let key = (group, ring);
        if let Some(existing) = table.get(&key) {
            tracing::debug!(algebra = %existing, "canonical instance cache hit");
            return Ok(existing.clone());
        }
        let (group, ring) = key;
        let algebra = Arc::new(GroupAlgebra::new(group.clone(), ring.clone())?);
        table.insert((group, ring), algebra.clone());
        Ok(algebra)
    }

    /// The cached algebra for `(group, ring)`, if one has been constructed.
    pub fn get(&self, group: &G, ring: &R) -> Option<Arc<GroupAlgebra<G, R>>> {
        self.table.lock().get(&(group.clone(), ring.clone())).cloned()
    }

    pub fn len(&self) -> usize {
        self.table.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.lock().is_empty()
    }
}

impl<G: Group, R: Ring> Default for AlgebraRegistry<G, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{CyclicGroup, IntegerRing, PrimeField};

    #[test]
    fn test_same_pair_is_same_instance() {
        let registry = AlgebraRegistry::new();
        let a = registry.get_or_create(CyclicGroup::new(4), IntegerRing).unwrap();
        let b = registry.get_or_create(CyclicGroup::new(4), IntegerRing).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_pairs_are_distinct_instances() {
        let registry = AlgebraRegistry::new();
        let a = registry.get_or_create(CyclicGroup::new(4), IntegerRing).unwrap();
        let b = registry.get_or_create(CyclicGroup::new(5), IntegerRing).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_ne!(*a, *b);
        assert_eq!(registry.len(), 2);

        let rings = AlgebraRegistry::new();
        let c = rings.get_or_create(CyclicGroup::new(4), PrimeField::new(3)).unwrap();
        let d = rings.get_or_create(CyclicGroup::new(4), PrimeField::new(5)).unwrap();
        assert_ne!(*c, *d);
    }

    #[test]
    fn test_structural_equality_across_registries() {
        // Two scoped registries each hold their own canonical instance, but
        // the instances are structurally equal for the same pair.
        let r1 = AlgebraRegistry::new();
        let r2 = AlgebraRegistry::new();
        let a = r1.get_or_create(CyclicGroup::new(4), IntegerRing).unwrap();
        let b = r2.get_or_create(CyclicGroup::new(4), IntegerRing).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(*a, *b);
    }

    #[test]
    fn test_failed_construction_is_not_cached() {
        use crate::group::{Group, GroupCapabilities};
        use crate::coercion::Parent;
        use rand::RngCore;
        use std::fmt;

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        struct Setish;

        impl fmt::Display for Setish {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "Setish")
            }
        }

        impl Parent for Setish {
            type Element = u64;
        }

        impl Group for Setish {
            fn identity(&self) -> u64 {
                0
            }
            fn compose(&self, a: &u64, b: &u64) -> u64 {
                a + b
            }
            fn inverse(&self, a: &u64) -> u64 {
                *a
            }
            fn gens(&self) -> Vec<u64> {
                Vec::new()
            }
            fn cardinality(&self) -> Option<u64> {
                None
            }
            fn random_element(&self, _rng: &mut dyn RngCore) -> u64 {
                0
            }
            fn capabilities(&self) -> GroupCapabilities {
                GroupCapabilities {
                    group: false,
                    additive_group: false,
                    module_with_basis: false,
                }
            }
        }

        let registry = AlgebraRegistry::new();
        assert!(registry.get_or_create(Setish, IntegerRing).is_err());
        assert!(registry.is_empty());
    }
}
