use thiserror::Error;

/// Errors raised by this crate itself. Failures inside a coefficient ring or
/// a group (e.g. a non-integral rational rejected by an integer ring) are not
/// wrapped; they propagate as the collaborator's own error through
/// [`anyhow::Error`].
#[derive(Debug, Error)]
pub enum Error {
    /// The base ring handed to [`GroupAlgebra::new`](crate::GroupAlgebra::new)
    /// is not commutative.
    #[error("base ring {0} is not commutative")]
    NonCommutativeBaseRing(String),

    /// The basis structure does not have the capabilities of a group (neither
    /// multiplicative nor additive).
    #[error("\"{0}\" is not a group")]
    NotAGroup(String),

    /// No conversion route produced an element. This is a terminal outcome;
    /// nothing is retried and no default is substituted.
    #[error("don't know how to create an element of {algebra} from {value}")]
    NoConversion { algebra: String, value: String },
}

impl Error {
    pub fn no_conversion(algebra: impl std::fmt::Display, value: impl std::fmt::Display) -> Self {
        Self::NoConversion {
            algebra: algebra.to_string(),
            value: value.to_string(),
        }
    }
}
