//! Applicative type class - lifting plain values into a computation.
//!
//! Only `pure` is needed by the conditional combinators: it produces the
//! trivial result of a skipped branch (`when_m` on a false predicate) and the
//! short-circuit value of `or_m` / `and_m`.
//!
//! # Laws
//!
//! ```text
//! F::pure(a).fmap(f) == F::pure(f(a))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_cond::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let y: Result<bool, String> = <Result<(), String>>::pure(true);
//! assert_eq!(y, Ok(true));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for computations that can wrap a plain value.
pub trait Applicative: Functor {
    /// Lifts `value` into the trivial computation producing it.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines the results of two independent computations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_cond::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |a, b| a + b), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |a, b| a + b), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        Ok(function(self?, other?))
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Applicative for Box<A> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, function: F) -> Box<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Box::new(function(*self, *other))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }
}
