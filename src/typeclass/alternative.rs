//! Alternative type class - a distinguished failing computation and a choice
//! between computations.
//!
//! Together with [`Monad`] this is the failure-capable context (`MonadPlus`)
//! the safe conditionals return into: `cond_or_else`, `cond_or_else_m` and
//! `guard_m` yield [`Alternative::empty`] instead of panicking, and callers
//! recover with [`Alternative::alt`].
//!
//! # Laws
//!
//! ```text
//! F::empty().alt(x) == x
//! x.alt(F::empty()) == x
//! x.alt(y).alt(z) == x.alt(y.alt(z))
//! F::empty().flat_map(f) == F::empty()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_cond::typeclass::Alternative;
//!
//! let nothing: Option<i32> = <Option<()> as Alternative>::empty();
//! assert_eq!(nothing, None);
//! assert_eq!(nothing.alt(Some(42)), Some(42));
//! assert_eq!(<Option<()>>::guard(false), None);
//! ```

use super::applicative::Applicative;
use super::monad::Monad;
use super::monoid::Monoid;

/// A type class for computations with failure and choice.
pub trait Alternative: Applicative {
    /// The computation that produces no result.
    fn empty<B>() -> Self::WithType<B>;

    /// Returns `self` unless it failed, otherwise `alternative`.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// `pure(())` when `condition` holds, `empty()` otherwise.
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty::<()>()
        }
    }

    /// Returns the first computation that did not fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_cond::typeclass::Alternative;
    ///
    /// assert_eq!(Option::choice(vec![None, Some(2), Some(3)]), Some(2));
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

/// A monad that is also an [`Alternative`].
///
/// Implemented for every type that is both; there is nothing to add.
pub trait MonadPlus: Monad + Alternative {}

impl<M: Monad + Alternative> MonadPlus for M {}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Alternative for Option<A> {
    #[inline]
    fn empty<B>() -> Option<B> {
        None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives.into_iter().find(Self::is_some).flatten()
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

/// `Result` fails with the identity of its error monoid; when both sides of
/// `alt` fail their errors are combined.
impl<T, E: Monoid> Alternative for Result<T, E> {
    #[inline]
    fn empty<B>() -> Result<B, E> {
        Err(E::empty())
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        match (self, alternative) {
            (Ok(value), _) | (Err(_), Ok(value)) => Ok(value),
            (Err(left), Err(right)) => Err(left.combine(right)),
        }
    }

    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .fold(Err(E::empty()), |accumulator, next| accumulator.alt(next))
    }
}
