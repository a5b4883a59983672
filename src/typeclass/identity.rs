//! Identity wrapper type - the computation with no effect.
//!
//! `Identity` is the simplest instance of every sequencing capability in this
//! crate. Running a conditional over `Identity` behaves exactly like the
//! plain Rust control flow it lifts, which makes it the reference model for
//! the lifted combinators' tests.

use super::TypeConstructor;

/// A transparent wrapper around a single value.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::typeclass::Identity;
///
/// let wrapped = Identity::new(true);
/// assert!(wrapped.into_inner());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
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

    /// Borrows the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
