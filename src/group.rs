use rand::RngCore;

use crate::coercion::Parent;

/// What the capability classifier reports about a basis structure.
///
/// A structure qualifies as a basis for a group algebra when it is a group in
/// either the multiplicative or the additive sense. `module_with_basis`
/// signals that the structure's own elements are linear combinations, which
/// changes how basis elements are displayed (see
/// [`GroupAlgebra`](crate::GroupAlgebra)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCapabilities {
    pub group: bool,
    pub additive_group: bool,
    pub module_with_basis: bool,
}

impl GroupCapabilities {
    pub fn multiplicative() -> Self {
        Self {
            group: true,
            additive_group: false,
            module_with_basis: false,
        }
    }

    pub fn additive() -> Self {
        Self {
            group: false,
            additive_group: true,
            module_with_basis: false,
        }
    }

    /// Whether the structure can serve as the basis of a group algebra.
    pub fn is_group(&self) -> bool {
        self.group || self.additive_group
    }
}

/// The group collaborator: the basis of the group algebra.
///
/// `compose` is the group operation, written multiplicatively throughout this
/// crate even for additive groups.
pub trait Group: Parent {
    fn identity(&self) -> Self::Element;

    fn compose(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn inverse(&self, a: &Self::Element) -> Self::Element;

    /// The designated generating set, in a fixed order.
    fn gens(&self) -> Vec<Self::Element>;

    fn gen(&self, i: usize) -> Option<Self::Element> {
        self.gens().get(i).cloned()
    }

    /// `None` for infinite groups.
    fn cardinality(&self) -> Option<u64>;

    fn is_finite(&self) -> bool {
        self.cardinality().is_some()
    }

    /// Whether elements have exact representations.
    fn is_exact(&self) -> bool {
        true
    }

    fn random_element(&self, rng: &mut dyn RngCore) -> Self::Element;

    fn capabilities(&self) -> GroupCapabilities {
        GroupCapabilities::multiplicative()
    }
}
