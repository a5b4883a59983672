//! Category type class - composable transforms with an identity.
//!
//! A category here is a family of transforms from a type to itself, with an
//! identity transform and associative composition. It is what
//! [`conditional_compose`](crate::conditional::conditional_compose) needs to
//! drop a step out of a pipeline: a disabled step becomes the identity.
//!
//! Two instances are provided:
//!
//! - [`Endo`]: a plain function `A -> A`
//! - [`Kleisli`]: an effectful step `A -> M` for any [`Monad`] `M` producing `A`
//!
//! # Laws
//!
//! ```text
//! C::identity().compose(f) == f
//! f.compose(C::identity()) == f
//! f.compose(g.compose(h)) == (f.compose(g)).compose(h)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_cond::typeclass::{Category, Endo};
//!
//! let pipeline = Endo::new(|n: i32| n + 1).compose(Endo::new(|n: i32| n * 10));
//! // the inner transform runs first
//! assert_eq!(pipeline.apply(2), 21);
//! ```

use std::fmt;

use super::monad::Monad;
use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// Transforms with identity and composition.
pub trait Category: Sized {
    /// The transform that returns its input unchanged.
    fn identity() -> Self;

    /// Composes two transforms; `inner` runs first, then `self`.
    #[must_use]
    fn compose(self, inner: Self) -> Self;

    /// Composes two transforms; `self` runs first, then `next`.
    #[must_use]
    fn and_then(self, next: Self) -> Self {
        next.compose(self)
    }
}

/// A boxed function from a type to itself.
pub struct Endo<'a, A> {
    function: Box<dyn Fn(A) -> A + 'a>,
}

impl<'a, A> Endo<'a, A> {
    /// Wraps a function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> A + 'a,
    {
        Self {
            function: Box::new(function),
        }
    }

    /// Applies the transform.
    pub fn apply(&self, value: A) -> A {
        (self.function)(value)
    }
}

impl<A> fmt::Debug for Endo<'_, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Endo(<function>)")
    }
}

impl<'a, A: 'a> Category for Endo<'a, A> {
    fn identity() -> Self {
        Self::new(|value| value)
    }

    fn compose(self, inner: Self) -> Self {
        Self::new(move |value| self.apply(inner.apply(value)))
    }
}

impl<'a, A: 'a> Semigroup for Endo<'a, A> {
    fn combine(self, other: Self) -> Self {
        self.compose(other)
    }
}

impl<'a, A: 'a> Monoid for Endo<'a, A> {
    fn empty() -> Self {
        Self::identity()
    }
}

/// A boxed effectful step `A -> M`, where `M` is a monadic computation
/// producing another `A`.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::typeclass::{Category, Kleisli};
///
/// let parse_positive = Kleisli::new(|n: i32| (n > 0).then_some(n));
/// let halve_even = Kleisli::new(|n: i32| (n % 2 == 0).then_some(n / 2));
/// let both = halve_even.compose(parse_positive);
///
/// assert_eq!(both.run(8), Some(4));
/// assert_eq!(both.run(-8), None);
/// ```
pub struct Kleisli<'a, M, A> {
    step: Box<dyn Fn(A) -> M + 'a>,
}

impl<'a, M, A> Kleisli<'a, M, A> {
    /// Wraps an effectful step.
    pub fn new<F>(step: F) -> Self
    where
        F: Fn(A) -> M + 'a,
    {
        Self {
            step: Box::new(step),
        }
    }

    /// Runs the step.
    pub fn run(&self, value: A) -> M {
        (self.step)(value)
    }
}

impl<M, A> fmt::Debug for Kleisli<'_, M, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Kleisli(<function>)")
    }
}

impl<'a, M, A> Category for Kleisli<'a, M, A>
where
    M: Monad<Inner = A, WithType<A> = M> + 'a,
    A: 'a,
{
    fn identity() -> Self {
        Self::new(M::pure::<A>)
    }

    fn compose(self, inner: Self) -> Self {
        Self::new(move |value| inner.run(value).flat_map::<A, _>(|middle| self.run(middle)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;
    use rstest::rstest;

    #[rstest]
    fn endo_identity_returns_input() {
        assert_eq!(Endo::<&str>::identity().apply("same"), "same");
    }

    #[rstest]
    fn endo_compose_runs_inner_first() {
        let append_a = Endo::new(|text: String| text + "a");
        let append_b = Endo::new(|text: String| text + "b");
        assert_eq!(append_a.compose(append_b).apply(String::new()), "ba");
    }

    #[rstest]
    fn endo_and_then_runs_self_first() {
        let append_a = Endo::new(|text: String| text + "a");
        let append_b = Endo::new(|text: String| text + "b");
        assert_eq!(append_a.and_then(append_b).apply(String::new()), "ab");
    }

    #[rstest]
    fn endo_combine_all_chains_every_step() {
        let steps = (1..=3).map(|n| Endo::new(move |total: i32| total * 10 + n));
        assert_eq!(Endo::combine_all(steps).apply(0), 321);
    }

    #[rstest]
    fn endo_debug_is_opaque() {
        assert_eq!(format!("{:?}", Endo::new(|n: i32| n)), "Endo(<function>)");
    }

    #[rstest]
    fn kleisli_identity_is_pure() {
        assert_eq!(Kleisli::<Option<i32>, i32>::identity().run(3), Some(3));
    }

    #[rstest]
    fn kleisli_compose_short_circuits_on_failure() {
        let reject = Kleisli::new(|_: i32| None);
        let unreachable_step = Kleisli::new(|_: i32| -> Option<i32> { unreachable!() });
        assert_eq!(unreachable_step.compose(reject).run(1), None);
    }

    #[rstest]
    fn kleisli_over_identity_behaves_like_endo() {
        let double = Kleisli::new(|n: i32| Identity(n * 2));
        let increment = Kleisli::new(|n: i32| Identity(n + 1));
        assert_eq!(double.compose(increment).run(4), Identity(10));
    }
}
