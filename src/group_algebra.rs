//! The group algebra `R[G]`: the free module over `R` with basis `G`, with
//! multiplication induced by the group operation and the Hopf structure that
//! comes with it (coproduct, counit, antipode).

use std::fmt;
use std::hash::{Hash, Hasher};

use rand::RngCore;

use crate::coercion::Parent;
use crate::combination::LinearCombination;
use crate::error::Error;
use crate::functor::GroupAlgebraFunctor;
use crate::group::Group;
use crate::ring::Ring;

/// An element of `R[G]`: a sparse combination of group elements with nonzero
/// coefficients in `R`.
pub type AlgebraElement<G, R> = LinearCombination<<G as Parent>::Element, R>;

/// An element of `R[G] ⊗ R[G]`, as produced by the coproduct.
pub type TensorSquare<G, R> =
    LinearCombination<(<G as Parent>::Element, <G as Parent>::Element), R>;

/// The capability set inferred for a group algebra at construction time.
///
/// `semisimple` records the Maschke upgrade: the group is finite, the
/// coefficients form a field, and the group order is not divisible by the
/// field's characteristic (characteristic zero passes trivially).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgebraCategory {
    pub finite: bool,
    pub semisimple: bool,
}

/// The group algebra of `G` over `R`.
///
/// Identified by the ordered pair `(group, ring)`: equality and hashing use
/// only that pair, so two algebras over equal groups and equal rings are
/// interchangeable. Canonical instances (at most one per pair, process-wide)
/// are handed out by [`AlgebraRegistry`](crate::AlgebraRegistry); constructing
/// directly via [`new`](GroupAlgebra::new) is fine for throwaway use but
/// bypasses canonicity.
///
/// All operations on elements live here, with elements as dumb sparse data.
/// Each operation is defined by its rule on basis elements and extended
/// (bi)linearly via [`LinearCombination`].
pub struct GroupAlgebra<G: Group, R: Ring> {
    group: G,
    ring: R,
    category: AlgebraCategory,
    prefix: &'static str,
    bracket: bool,
}

impl<G: Group, R: Ring> GroupAlgebra<G, R> {
    /// Construct `R[G]`, inferring the category.
    ///
    /// Fails if the ring is not commutative or if the basis structure lacks
    /// group capabilities.
    pub fn new(group: G, ring: R) -> Result<Self, Error> {
        Self::with_category(group, ring, None)
    }

    /// Construct `R[G]` with an explicit category override.
    pub fn with_category(
        group: G,
        ring: R,
        category: Option<AlgebraCategory>,
    ) -> Result<Self, Error> {
        if !ring.is_commutative() {
            return Err(Error::NonCommutativeBaseRing(ring.to_string()));
        }
        let capabilities = group.capabilities();
        if !capabilities.is_group() {
            return Err(Error::NotAGroup(group.to_string()));
        }

        let category = category.unwrap_or_else(|| Self::infer_category(&group, &ring));

        // Groups whose own elements are linear combinations get bracketed
        // basis elements so they cannot be mistaken for ring elements.
        let (prefix, bracket) = if capabilities.module_with_basis {
            ("B", true)
        } else {
            ("", false)
        };

        tracing::debug!(group = %group, ring = %ring, ?category, "constructed group algebra");

        Ok(Self {
            group,
            ring,
            category,
            prefix,
            bracket,
        })
    }

    fn infer_category(group: &G, ring: &R) -> AlgebraCategory {
        let finite = group.is_finite();
        let semisimple = match group.cardinality() {
            Some(cardinality) if ring.is_field() => {
                let p = ring.characteristic();
                // Maschke: |G| not divisible by char(R). p = 0 passes
                // trivially and must not be used as a modulus.
                p == 0 || cardinality % p != 0
            }
            _ => false,
        };
        AlgebraCategory { finite, semisimple }
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    pub fn base_ring(&self) -> &R {
        &self.ring
    }

    pub fn category(&self) -> AlgebraCategory {
        self.category
    }

    /// The functor `S -> S[G]` together with this algebra's ring, for the
    /// pushout mechanism ("fix the group, vary the ring").
    pub fn construction(&self) -> (GroupAlgebraFunctor<G>, R) {
        (GroupAlgebraFunctor::new(self.group.clone()), self.ring.clone())
    }

    /// Whether elements have exact representations; delegated to the group
    /// and the ring.
    pub fn is_exact(&self) -> bool {
        self.group.is_exact() && self.ring.is_exact()
    }

    // Element construction.

    pub fn zero(&self) -> AlgebraElement<G, R> {
        LinearCombination::zero()
    }

    /// The basis element indexing the unit: the group identity.
    pub fn one_basis(&self) -> G::Element {
        self.group.identity()
    }

    pub fn one(&self) -> AlgebraElement<G, R> {
        self.monomial(self.one_basis())
    }

    /// The canonical embedding of a group element: the combination
    /// `1 * g`.
    pub fn monomial(&self, g: G::Element) -> AlgebraElement<G, R> {
        LinearCombination::term(&self.ring, g, self.ring.one())
    }

    /// The combination `coeff * g` (zero if `coeff` is zero).
    pub fn term(&self, g: G::Element, coeff: R::Element) -> AlgebraElement<G, R> {
        LinearCombination::term(&self.ring, g, coeff)
    }

    /// The scalar `c` as `c * one()`, with zero short-circuited.
    pub fn from_scalar(&self, c: R::Element) -> AlgebraElement<G, R> {
        if self.ring.is_zero(&c) {
            self.zero()
        } else {
            self.term(self.one_basis(), c)
        }
    }

    /// The integer `n`, promoted through the ring's canonical integer image.
    pub fn from_int(&self, n: i64) -> AlgebraElement<G, R> {
        self.from_scalar(self.ring.from_int(n))
    }

    // The algebra and Hopf operations: a rule on basis elements, extended
    // (bi)linearly.

    /// `g * h` as a basis rule: the single basis element for the group
    /// product, with coefficient one.
    pub fn product_on_basis(&self, g: &G::Element, h: &G::Element) -> AlgebraElement<G, R> {
        self.monomial(self.group.compose(g, h))
    }

    pub fn product(
        &self,
        a: &AlgebraElement<G, R>,
        b: &AlgebraElement<G, R>,
    ) -> AlgebraElement<G, R> {
        LinearCombination::extend_bilinear(&self.ring, a, b, |g, h| self.product_on_basis(g, h))
    }

    /// Basis elements are group-like: `Δ(g) = g ⊗ g`.
    pub fn coproduct_on_basis(&self, g: &G::Element) -> TensorSquare<G, R> {
        LinearCombination::term(&self.ring, (g.clone(), g.clone()), self.ring.one())
    }

    pub fn coproduct(&self, a: &AlgebraElement<G, R>) -> TensorSquare<G, R> {
        a.extend_linear(&self.ring, |g| self.coproduct_on_basis(g))
    }

    /// `ε(g) = 1` for every basis element.
    pub fn counit_on_basis(&self, _g: &G::Element) -> R::Element {
        self.ring.one()
    }

    /// The counit of a combination: linear extension of `ε`, i.e. the sum of
    /// the coefficients. A ring homomorphism onto the coefficient ring.
    pub fn counit(&self, a: &AlgebraElement<G, R>) -> R::Element {
        let folded: LinearCombination<(), R> = a.extend_linear(&self.ring, |g| {
            LinearCombination::term(&self.ring, (), self.counit_on_basis(g))
        });
        folded
            .coefficient(&())
            .cloned()
            .unwrap_or_else(|| self.ring.zero())
    }

    /// `χ(g) = g⁻¹` as a basis rule.
    pub fn antipode_on_basis(&self, g: &G::Element) -> AlgebraElement<G, R> {
        self.monomial(self.group.inverse(g))
    }

    /// The antipode: linear extension of `g -> g⁻¹`. An anti-automorphism,
    /// so `antipode(a * b) = antipode(b) * antipode(a)`.
    pub fn antipode(&self, a: &AlgebraElement<G, R>) -> AlgebraElement<G, R> {
        a.extend_linear(&self.ring, |g| self.antipode_on_basis(g))
    }

    // Generators.

    /// The images of the group's generators under the basis embedding, as an
    /// ordered family keyed by the generators.
    pub fn algebra_generators(&self) -> Vec<(G::Element, AlgebraElement<G, R>)> {
        self.group
            .gens()
            .into_iter()
            .map(|g| (g.clone(), self.monomial(g)))
            .collect()
    }

    pub fn ngens(&self) -> usize {
        self.group.gens().len()
    }

    pub fn gen(&self, i: usize) -> Option<AlgebraElement<G, R>> {
        self.group.gen(i).map(|g| self.monomial(g))
    }

    // Random elements.

    /// A sum of `n` terms, each a random ring element times a random basis
    /// element. Colliding basis elements accumulate rather than overwrite.
    pub fn random_element_terms(
        &self,
        rng: &mut dyn RngCore,
        n: usize,
    ) -> AlgebraElement<G, R> {
        let mut result = self.zero();
        for _ in 0..n {
            result.add_term(
                &self.ring,
                self.group.random_element(rng),
                self.ring.random_element(rng),
            );
        }
        result
    }

    /// [`random_element_terms`](Self::random_element_terms) with the default
    /// of two terms.
    pub fn random_element(&self, rng: &mut dyn RngCore) -> AlgebraElement<G, R> {
        self.random_element_terms(rng, 2)
    }

    // Display.

    pub fn basis_element_to_string(&self, g: &G::Element) -> String {
        if self.bracket {
            format!("{}[{}]", self.prefix, g)
        } else {
            g.to_string()
        }
    }

    pub fn element_to_string(&self, a: &AlgebraElement<G, R>) -> String {
        a.format_with(&self.ring, |g| self.basis_element_to_string(g))
    }
}

impl<G: Group, R: Ring> PartialEq for GroupAlgebra<G, R> {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.ring == other.ring
    }
}

impl<G: Group, R: Ring> Eq for GroupAlgebra<G, R> {}

impl<G: Group, R: Ring> Hash for GroupAlgebra<G, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group.hash(state);
        self.ring.hash(state);
    }
}

impl<G: Group, R: Ring> fmt::Display for GroupAlgebra<G, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Group algebra of {} over {}", self.group, self.ring)
    }
}

impl<G: Group, R: Ring> fmt::Debug for GroupAlgebra<G, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("GroupAlgebra")
            .field("group", &self.group)
            .field("ring", &self.ring)
            .field("category", &self.category)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupCapabilities;
    use crate::structures::{CyclicGroup, IntegerRing, PrimeField, RationalField};

    use rand::rngs::mock::StepRng;
    use rand::RngCore;
    use rstest::rstest;
    use std::fmt;

    /// A ring double that reports itself as non-commutative.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct MatrixishRing;

    impl fmt::Display for MatrixishRing {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "Matrixish Ring")
        }
    }

    impl Parent for MatrixishRing {
        type Element = i64;
    }

    impl Ring for MatrixishRing {
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
            false
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
        fn random_element(&self, _rng: &mut dyn RngCore) -> i64 {
            1
        }
    }

    /// A group double whose capability set contains neither kind of group.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Monoidish;

    impl fmt::Display for Monoidish {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "Monoidish")
        }
    }

    impl Parent for Monoidish {
        type Element = u64;
    }

    impl Group for Monoidish {
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
            vec![1]
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

    /// A group double whose elements are themselves combinations, triggering
    /// the bracketed display convention.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct BasisGroup(CyclicGroup);

    impl fmt::Display for BasisGroup {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "Basis-indexed {}", self.0)
        }
    }

    impl Parent for BasisGroup {
        type Element = <CyclicGroup as Parent>::Element;
    }

    impl Group for BasisGroup {
        fn identity(&self) -> Self::Element {
            self.0.identity()
        }
        fn compose(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
            self.0.compose(a, b)
        }
        fn inverse(&self, a: &Self::Element) -> Self::Element {
            self.0.inverse(a)
        }
        fn gens(&self) -> Vec<Self::Element> {
            self.0.gens()
        }
        fn cardinality(&self) -> Option<u64> {
            self.0.cardinality()
        }
        fn random_element(&self, rng: &mut dyn RngCore) -> Self::Element {
            self.0.random_element(rng)
        }
        fn capabilities(&self) -> GroupCapabilities {
            GroupCapabilities {
                module_with_basis: true,
                ..GroupCapabilities::multiplicative()
            }
        }
    }

    #[test]
    fn test_rejects_noncommutative_ring() {
        let err = GroupAlgebra::new(CyclicGroup::new(2), MatrixishRing).unwrap_err();
        assert!(matches!(err, Error::NonCommutativeBaseRing(_)));
    }

    #[test]
    fn test_rejects_non_group() {
        let err = GroupAlgebra::new(Monoidish, IntegerRing).unwrap_err();
        assert!(matches!(err, Error::NotAGroup(_)));
    }

    #[rstest]
    #[case(3, true)] // |C_2| = 2 not divisible by 3
    #[case(2, false)] // |C_2| = 2 divisible by 2
    fn test_maschke_upgrade(#[case] p: u64, #[case] semisimple: bool) {
        let a = GroupAlgebra::new(CyclicGroup::new(2), PrimeField::new(p)).unwrap();
        assert_eq!(a.category().semisimple, semisimple);
        assert!(a.category().finite);
    }

    #[test]
    fn test_characteristic_zero_field_is_semisimple() {
        let a = GroupAlgebra::new(CyclicGroup::new(6), RationalField).unwrap();
        assert!(a.category().semisimple);
    }

    #[test]
    fn test_integer_coefficients_not_semisimple() {
        let a = GroupAlgebra::new(CyclicGroup::new(2), IntegerRing).unwrap();
        assert!(!a.category().semisimple);
    }

    #[test]
    fn test_category_override() {
        let category = AlgebraCategory {
            finite: true,
            semisimple: true,
        };
        let a =
            GroupAlgebra::with_category(CyclicGroup::new(2), IntegerRing, Some(category)).unwrap();
        assert_eq!(a.category(), category);
    }

    #[test]
    fn test_unit_laws() {
        let a = GroupAlgebra::new(CyclicGroup::new(4), IntegerRing).unwrap();
        let x = a
            .zero()
            .add(a.base_ring(), &a.term(a.group().gen(0).unwrap(), 3))
            .add(a.base_ring(), &a.one());
        assert_eq!(a.product(&a.one(), &x), x);
        assert_eq!(a.product(&x, &a.one()), x);
        assert_eq!(a.one_basis(), a.group().identity());
    }

    #[test]
    fn test_self_inverse_generator() {
        // C_2: g * g = identity and the antipode fixes g.
        let a = GroupAlgebra::new(CyclicGroup::new(2), IntegerRing).unwrap();
        let g = a.group().gen(0).unwrap();
        assert_eq!(a.product(&a.monomial(g.clone()), &a.monomial(g.clone())), a.one());
        assert_eq!(a.antipode(&a.monomial(g.clone())), a.monomial(g));
    }

    #[test]
    fn test_counit_is_multiplicative() {
        let a = GroupAlgebra::new(CyclicGroup::new(4), IntegerRing).unwrap();
        let mut rng = StepRng::new(7, 0x9e3779b97f4a7c15);
        let x = a.random_element_terms(&mut rng, 3);
        let y = a.random_element_terms(&mut rng, 3);
        assert_eq!(
            a.counit(&a.product(&x, &y)),
            a.base_ring().mul(&a.counit(&x), &a.counit(&y))
        );
        assert_eq!(a.counit(&a.one()), 1);
    }

    #[test]
    fn test_coproduct_is_group_like_on_basis() {
        let a = GroupAlgebra::new(CyclicGroup::new(4), IntegerRing).unwrap();
        let g = a.group().gen(0).unwrap();
        let expected = LinearCombination::term(a.base_ring(), (g.clone(), g.clone()), 1);
        assert_eq!(a.coproduct(&a.monomial(g)), expected);
    }

    #[test]
    fn test_random_element_zero_terms_is_zero() {
        let a = GroupAlgebra::new(CyclicGroup::new(2), IntegerRing).unwrap();
        let mut rng = StepRng::new(0, 1);
        assert!(a.random_element_terms(&mut rng, 0).is_zero());
    }

    #[test]
    fn test_random_element_tolerates_collisions() {
        // C_1 forces every sampled basis element to collide.
        let a = GroupAlgebra::new(CyclicGroup::new(1), IntegerRing).unwrap();
        let mut rng = StepRng::new(3, 0x9e3779b97f4a7c15);
        let x = a.random_element_terms(&mut rng, 5);
        assert!(x.len() <= 1);
    }

    #[test]
    fn test_display_conventions() {
        let plain = GroupAlgebra::new(CyclicGroup::new(4), IntegerRing).unwrap();
        let g = plain.group().gen(0).unwrap();
        assert_eq!(plain.basis_element_to_string(&g), "g");
        assert_eq!(
            plain.element_to_string(&plain.term(g.clone(), 2)),
            "2*g"
        );
        assert_eq!(plain.element_to_string(&plain.zero()), "0");

        let bracketed = GroupAlgebra::new(BasisGroup(CyclicGroup::new(4)), IntegerRing).unwrap();
        let g = bracketed.group().gen(0).unwrap();
        assert_eq!(bracketed.basis_element_to_string(&g), "B[g]");
    }

    #[test]
    fn test_generators() {
        let a = GroupAlgebra::new(CyclicGroup::new(4), IntegerRing).unwrap();
        assert_eq!(a.ngens(), 1);
        let gens = a.algebra_generators();
        assert_eq!(gens.len(), 1);
        assert_eq!(gens[0].1, a.gen(0).unwrap());
        assert_eq!(a.gen(1), None);
    }

    #[test]
    fn test_is_exact_delegates() {
        let a = GroupAlgebra::new(CyclicGroup::new(4), IntegerRing).unwrap();
        assert!(a.is_exact());
    }
}
