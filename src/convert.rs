//! Deciding whether a value of known provenance denotes an element of a
//! given group algebra, and building the element when it does.
//!
//! Provenance is explicit: a value enters as a [`Value`], a closed variant
//! tagged with the structure it came from, and the resolver dispatches over
//! the tag in a fixed order instead of probing types at every step. The
//! route-specific methods ([`GroupAlgebra::from_ring`],
//! [`GroupAlgebra::from_group`], [`GroupAlgebra::convert_from`],
//! [`GroupAlgebra::from_formal_sum`]) carry only the coercion bounds they
//! need; [`GroupAlgebra::build`] bundles them all and applies the full
//! resolution order.

use crate::coercion::{is_same_parent, transmute_element, CoerceFrom};
use crate::error::Error;
use crate::group::Group;
use crate::group_algebra::{AlgebraElement, GroupAlgebra};
use crate::ring::Ring;

/// A value of known provenance, as classified once at the boundary.
///
/// `H` and `S` are the group and ring the value came from. Variants that do
/// not involve one of the two still name it, so a single resolver signature
/// covers every case; use the target's own group and ring when there is no
/// meaningful source.
#[derive(Debug, Clone)]
pub enum Value<H: Group, S: Ring> {
    /// A bare integer literal with no parent structure.
    RawScalar(i64),
    /// An element of the ring `S`.
    Scalar(S, S::Element),
    /// An element of the group `H`.
    GroupElement(H, H::Element),
    /// An element of the group algebra `S[H]`.
    AlgebraElement(H, S, AlgebraElement<H, S>),
    /// A generic formal sum of `(coefficient, group element)` pairs.
    FormalSum(H, S, Vec<(S::Element, H::Element)>),
}

impl<H: Group, S: Ring> std::fmt::Display for Value<H, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Value::RawScalar(n) => write!(f, "{n}"),
            Value::Scalar(_, x) => write!(f, "{x}"),
            Value::GroupElement(_, x) => write!(f, "{x}"),
            Value::AlgebraElement(_, ring, x) => {
                write!(f, "{}", x.format_with(ring, |g| g.to_string()))
            }
            Value::FormalSum(_, _, terms) => {
                if terms.is_empty() {
                    return write!(f, "0");
                }
                for (i, (coeff, g)) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{coeff}*{g}")?;
                }
                Ok(())
            }
        }
    }
}

impl<G: Group, R: Ring> GroupAlgebra<G, R> {
    // Admissibility.

    /// Whether elements of `S[H]` convert here: the ring must admit the
    /// source ring and the group must admit the source group.
    pub fn admits_algebra<H: Group, S: Ring>(&self, source: &GroupAlgebra<H, S>) -> bool
    where
        R: CoerceFrom<S>,
        G: CoerceFrom<H>,
    {
        self.base_ring().admits(source.base_ring()) && self.group().admits(source.group())
    }

    /// Whether elements of the ring `S` convert here.
    pub fn admits_ring<S: Ring>(&self, source: &S) -> bool
    where
        R: CoerceFrom<S>,
    {
        self.base_ring().admits(source)
    }

    /// Whether elements of the group `H` convert here: through the ring or
    /// through the group.
    ///
    /// When both routes exist the ring route is used. This is a convention,
    /// not a derivable law: for the additive integers inside `Z[(Z, +)]` the
    /// two routes genuinely disagree (`n * 1` versus the basis element for
    /// `n`), and one of them has to win. Values tagged as elements of this
    /// algebra's *own* group are exempt and always embed as basis elements.
    pub fn admits_group<H: Group>(&self, source: &H) -> bool
    where
        R: CoerceFrom<H>,
        G: CoerceFrom<H>,
    {
        self.base_ring().admits(source) || self.group().admits(source)
    }

    // Route-specific construction.

    /// Convert an element of the ring `S`: its image in the base ring times
    /// the unit element, with the ring's zero mapping to the zero
    /// combination.
    pub fn from_ring<S: Ring>(
        &self,
        source: &S,
        x: &S::Element,
    ) -> anyhow::Result<AlgebraElement<G, R>>
    where
        R: CoerceFrom<S>,
    {
        if is_same_parent(source, self.base_ring()) {
            if let Some(c) = transmute_element::<S, R>(x) {
                return Ok(self.from_scalar(c));
            }
        }
        if self.admits_ring(source) {
            let c = self.base_ring().coerce(source, x)?;
            Ok(self.from_scalar(c))
        } else {
            Err(Error::no_conversion(self, x).into())
        }
    }

    /// Convert an element of the group `H` through the group route: its
    /// image in `G` as a basis element.
    pub fn from_group<H: Group>(
        &self,
        source: &H,
        x: &H::Element,
    ) -> anyhow::Result<AlgebraElement<G, R>>
    where
        G: CoerceFrom<H>,
    {
        if is_same_parent(source, self.group()) {
            if let Some(g) = transmute_element::<H, G>(x) {
                return Ok(self.monomial(g));
            }
        }
        if self.group().admits(source) {
            Ok(self.monomial(self.group().coerce(source, x)?))
        } else {
            Err(Error::no_conversion(self, x).into())
        }
    }

    /// Convert an element of the group algebra `S[H]`: map every basis
    /// element through the group coercion and every coefficient through the
    /// ring coercion, then reassemble.
    ///
    /// When the group map is not injective, entries whose images coincide are
    /// merged by summing the mapped coefficients. Overwriting an existing
    /// partial sum, or adding it in twice, would silently corrupt the result,
    /// so all assembly goes through the merging
    /// [`add_term`](crate::LinearCombination::add_term).
    pub fn convert_from<H: Group, S: Ring>(
        &self,
        source: &GroupAlgebra<H, S>,
        x: &AlgebraElement<H, S>,
    ) -> anyhow::Result<AlgebraElement<G, R>>
    where
        R: CoerceFrom<S>,
        G: CoerceFrom<H>,
    {
        if !self.admits_algebra(source) {
            let rendered = source.element_to_string(x);
            return Err(Error::no_conversion(self, rendered).into());
        }
        self.remap_entries(source.group(), source.base_ring(), x)
    }

    fn remap_entries<H: Group, S: Ring>(
        &self,
        src_group: &H,
        src_ring: &S,
        x: &AlgebraElement<H, S>,
    ) -> anyhow::Result<AlgebraElement<G, R>>
    where
        R: CoerceFrom<S>,
        G: CoerceFrom<H>,
    {
        let mut result = self.zero();
        for (g, coeff) in x.iter() {
            result.add_term(
                self.base_ring(),
                self.group().coerce(src_group, g)?,
                self.base_ring().coerce(src_ring, coeff)?,
            );
        }
        Ok(result)
    }

    /// Convert a generic formal sum of `(coefficient, group element)` pairs,
    /// merging duplicate group elements by addition.
    pub fn from_formal_sum<H: Group, S: Ring>(
        &self,
        src_group: &H,
        src_ring: &S,
        terms: &[(S::Element, H::Element)],
    ) -> anyhow::Result<AlgebraElement<G, R>>
    where
        R: CoerceFrom<S>,
        G: CoerceFrom<H>,
    {
        let same_group = is_same_parent(src_group, self.group());
        if !self.admits_ring(src_ring) || !(same_group || self.group().admits(src_group)) {
            let value = Value::FormalSum(src_group.clone(), src_ring.clone(), terms.to_vec());
            return Err(Error::no_conversion(self, value).into());
        }
        let mut result = self.zero();
        for (coeff, g) in terms {
            let g = if same_group {
                transmute_element::<H, G>(g).expect("same parent, same element type")
            } else {
                self.group().coerce(src_group, g)?
            };
            result.add_term(self.base_ring(), g, self.base_ring().coerce(src_ring, coeff)?);
        }
        Ok(result)
    }

    /// Resolve an arbitrary tagged value, trying routes in a fixed order:
    ///
    /// 1. A raw integer is promoted through the ring's integer image.
    /// 2. An element of the base ring itself becomes a scalar multiple of
    ///    the unit.
    /// 3. An element of this algebra's own group becomes a basis element.
    /// 4. An element of another group algebra is remapped entrywise, merging
    ///    collisions by addition.
    /// 5. An element of a foreign ring goes through the ring coercion.
    /// 6. A formal sum is assembled termwise.
    /// 7. A foreign group element goes through the ring route if the ring
    ///    admits its group,
    /// 8. otherwise through the group route.
    /// 9. Anything else fails with [`Error::NoConversion`].
    pub fn build<H: Group, S: Ring>(
        &self,
        value: Value<H, S>,
    ) -> anyhow::Result<AlgebraElement<G, R>>
    where
        R: CoerceFrom<S> + CoerceFrom<H>,
        G: CoerceFrom<H>,
    {
        tracing::debug!(algebra = %self, value = %value, "resolving conversion");
        match value {
            Value::RawScalar(n) => Ok(self.from_int(n)),
            Value::Scalar(source, x) => self.from_ring(&source, &x),
            Value::GroupElement(source, x) => {
                if is_same_parent(&source, self.group()) {
                    return self.from_group(&source, &x);
                }
                // The documented asymmetry: the ring route wins for foreign
                // group elements that both structures admit.
                if self.base_ring().admits(&source) {
                    let c = self.base_ring().coerce(&source, &x)?;
                    Ok(self.from_scalar(c))
                } else if self.group().admits(&source) {
                    self.from_group(&source, &x)
                } else {
                    Err(Error::no_conversion(self, &x).into())
                }
            }
            Value::AlgebraElement(src_group, src_ring, x) => {
                if self.base_ring().admits(&src_ring) && self.group().admits(&src_group) {
                    self.remap_entries(&src_group, &src_ring, &x)
                } else {
                    let rendered = x.format_with(&src_ring, |g| g.to_string());
                    Err(Error::no_conversion(self, rendered).into())
                }
            }
            Value::FormalSum(src_group, src_ring, terms) => {
                self.from_formal_sum(&src_group, &src_ring, &terms)
            }
        }
    }
}
