//! The construction functor "fix this group, send a ring to its group
//! algebra", and the lift of ring homomorphisms it induces.
//!
//! The wider conversion framework uses this to combine two group algebras
//! that share a group but differ in ring: push both rings into a common one
//! and lift the maps.

use std::fmt;
use std::sync::Arc;

use crate::combination::LinearCombination;
use crate::group::Group;
use crate::group_algebra::{AlgebraElement, GroupAlgebra};
use crate::registry::AlgebraRegistry;
use crate::ring::Ring;

/// A ring homomorphism `R -> S` as a first-class value: the two parents and
/// the map on elements.
pub struct RingHomomorphism<R: Ring, S: Ring, F: Fn(&R::Element) -> S::Element> {
    domain: R,
    codomain: S,
    map: F,
}

impl<R: Ring, S: Ring, F: Fn(&R::Element) -> S::Element> RingHomomorphism<R, S, F> {
    pub fn new(domain: R, codomain: S, map: F) -> Self {
        Self {
            domain,
            codomain,
            map,
        }
    }

    pub fn domain(&self) -> &R {
        &self.domain
    }

    pub fn codomain(&self) -> &S {
        &self.codomain
    }

    pub fn apply(&self, x: &R::Element) -> S::Element {
        (self.map)(x)
    }
}

/// The lift of a ring homomorphism to the group algebras over a fixed group:
/// coefficients map through the ring homomorphism, basis elements stay put.
pub struct AlgebraHomomorphism<'a, G, R, S, F>
where
    G: Group,
    R: Ring,
    S: Ring,
    F: Fn(&R::Element) -> S::Element,
{
    group: G,
    hom: &'a RingHomomorphism<R, S, F>,
}

impl<'a, G, R, S, F> AlgebraHomomorphism<'a, G, R, S, F>
where
    G: Group,
    R: Ring,
    S: Ring,
    F: Fn(&R::Element) -> S::Element,
{
    pub fn group(&self) -> &G {
        &self.group
    }

    /// Map an element of `R[G]` to `S[G]`. Coefficients the homomorphism
    /// kills drop out of the result.
    pub fn apply(&self, x: &AlgebraElement<G, R>) -> AlgebraElement<G, S> {
        let mut result = LinearCombination::zero();
        for (g, coeff) in x.iter() {
            result.add_term(self.hom.codomain(), g.clone(), self.hom.apply(coeff));
        }
        result
    }
}

/// For a fixed group `G`, the functor sending a commutative ring `R` to the
/// group algebra `R[G]`. Two functors are equal exactly when their groups
/// are.
#[derive(Debug, Clone)]
pub struct GroupAlgebraFunctor<G: Group> {
    group: G,
}

impl<G: Group> GroupAlgebraFunctor<G> {
    pub fn new(group: G) -> Self {
        Self { group }
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    /// The canonical algebra `R[G]`, via the registry.
    pub fn apply<R: Ring>(
        &self,
        registry: &AlgebraRegistry<G, R>,
        ring: R,
    ) -> anyhow::Result<Arc<GroupAlgebra<G, R>>> {
        registry.get_or_create(self.group.clone(), ring)
    }

    /// Lift a ring homomorphism to the corresponding homomorphism of group
    /// algebras over this functor's group.
    pub fn apply_to_morphism<'a, R, S, F>(
        &self,
        hom: &'a RingHomomorphism<R, S, F>,
    ) -> AlgebraHomomorphism<'a, G, R, S, F>
    where
        R: Ring,
        S: Ring,
        F: Fn(&R::Element) -> S::Element,
    {
        AlgebraHomomorphism {
            group: self.group.clone(),
            hom,
        }
    }
}

impl<G: Group> PartialEq for GroupAlgebraFunctor<G> {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group
    }
}

impl<G: Group> Eq for GroupAlgebraFunctor<G> {}

impl<G: Group> fmt::Display for GroupAlgebraFunctor<G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GroupAlgebraFunctor[{}]", self.group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{CyclicGroup, IntegerRing, PrimeField};

    #[test]
    fn test_functor_equality_depends_only_on_group() {
        let f = GroupAlgebraFunctor::new(CyclicGroup::new(4));
        let g = GroupAlgebraFunctor::new(CyclicGroup::new(4));
        let h = GroupAlgebraFunctor::new(CyclicGroup::new(5));
        assert_eq!(f, g);
        assert_ne!(f, h);
    }

    #[test]
    fn test_apply_goes_through_registry() {
        let registry = AlgebraRegistry::new();
        let f = GroupAlgebraFunctor::new(CyclicGroup::new(4));
        let a = f.apply(&registry, IntegerRing).unwrap();
        let b = f.apply(&registry, IntegerRing).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_construction_accessor_round_trips() {
        let a = crate::GroupAlgebra::new(CyclicGroup::new(4), IntegerRing).unwrap();
        let (functor, ring) = a.construction();
        assert_eq!(functor.group(), a.group());
        assert_eq!(&ring, a.base_ring());
    }

    #[test]
    fn test_morphism_lift_maps_coefficients_and_fixes_basis() {
        let c2 = CyclicGroup::new(2);
        let source = crate::GroupAlgebra::new(c2, IntegerRing).unwrap();
        let f5 = PrimeField::new(5);
        let hom = RingHomomorphism::new(IntegerRing, f5, move |n: &i64| f5.from_int(*n));
        let lifted = source.construction().0.apply_to_morphism(&hom);

        let g = c2.element(1);
        // x + 5 * identity: the scalar part dies mod 5.
        let x = source
            .monomial(g)
            .add(source.base_ring(), &source.from_scalar(5));
        let image = lifted.apply(&x);
        let target = crate::GroupAlgebra::new(c2, f5).unwrap();
        assert_eq!(image, target.monomial(g));
    }
}
