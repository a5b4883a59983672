//! Functor type class - mapping over the result of a computation.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_cond::typeclass::Functor;
//!
//! let negated = Some(true).fmap(|flag| !flag);
//! assert_eq!(negated, Some(false));
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for computations whose result can be transformed.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the result of the computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_cond::typeclass::Functor;
    ///
    /// let checked: Result<usize, String> = Ok("flag".to_owned()).fmap(|text: String| text.len());
    /// assert_eq!(checked, Ok(4));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the result with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Functor for Box<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(A) -> B,
    {
        Box::new(function(*self))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}
