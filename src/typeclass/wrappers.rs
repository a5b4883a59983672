//! Newtype wrappers selecting a particular monoid for a shared carrier type.
//!
//! - [`Sum`]: addition (identity: zero)
//! - [`Product`]: multiplication (identity: one)
//! - [`Any`]: logical or (identity: `false`)
//! - [`All`]: logical and (identity: `true`)
//!
//! `Any` and `All` also implement [`ToBool`](super::ToBool), so a monoidal
//! summary of many conditions can be fed straight into a conditional.

/// Addition-based monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// Multiplication-based monoid.
// Default is not derived: the identity is one, not zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// Boolean monoid under `||`; true when any combined value is true.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::typeclass::{Any, Monoid};
///
/// let seen = Any::combine_all([1, 4, 9].iter().map(|n| Any(n % 2 == 0)));
/// assert_eq!(seen, Any(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Any(pub bool);

/// Boolean monoid under `&&`; true when every combined value is true.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::typeclass::{All, Monoid};
///
/// let every = All::combine_all([2, 4, 6].iter().map(|n| All(n % 2 == 0)));
/// assert_eq!(every, All(true));
/// assert_eq!(All::empty(), All(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct All(pub bool);

impl From<bool> for Any {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<bool> for All {
    fn from(value: bool) -> Self {
        Self(value)
    }
}
