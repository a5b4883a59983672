//! Monad type class - sequencing computations that depend on earlier results.
//!
//! Besides `flat_map`, every instance provides [`Monad::tail_rec_m`]: a
//! stack-safe loop in the computation's context. Rust does not guarantee
//! tail-call elimination, so the monadic loops (`while_m` and friends) are
//! written against `tail_rec_m` and each instance implements it with an
//! explicit `loop`.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! M::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(M::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! ## Tail Recursion
//!
//! ```text
//! M::tail_rec_m(s, step) == step(s).flat_map(|flow| match flow {
//!     Continue(next) => M::tail_rec_m(next, step),
//!     Break(done) => M::pure(done),
//! })
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_cond::typeclass::Monad;
//! use std::ops::ControlFlow;
//!
//! let halved = Some(10).flat_map(|n: i32| (n % 2 == 0).then_some(n / 2));
//! assert_eq!(halved, Some(5));
//!
//! let counted = <Option<()>>::tail_rec_m(0_u32, |n| {
//!     Some(if n < 100_000 { ControlFlow::Continue(n + 1) } else { ControlFlow::Break(n) })
//! });
//! assert_eq!(counted, Some(100_000));
//! ```

use std::ops::ControlFlow;

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for sequencing computations.
pub trait Monad: Applicative {
    /// Runs the computation, then feeds its result to `function`.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Runs `step` from `seed` until it yields [`ControlFlow::Break`].
    ///
    /// A failing step (in the sense of the instance) stops the loop and is
    /// returned as-is. `Self` only names the computation family, so the
    /// function is called on any member of it, conventionally `Option<()>`.
    fn tail_rec_m<S, B, F>(seed: S, step: F) -> Self::WithType<B>
    where
        F: FnMut(S) -> Self::WithType<ControlFlow<B, S>>;

    /// Runs the computation, discards its result, then returns `next`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_cond::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("next")), Some("next"));
    /// assert_eq!(None::<i32>.then(Some("next")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }

    fn tail_rec_m<S, B, F>(seed: S, mut step: F) -> Option<B>
    where
        F: FnMut(S) -> Option<ControlFlow<B, S>>,
    {
        let mut state = seed;
        loop {
            match step(state)? {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(done) => return Some(done),
            }
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }

    fn tail_rec_m<S, B, F>(seed: S, mut step: F) -> Result<B, E>
    where
        F: FnMut(S) -> Result<ControlFlow<B, S>, E>,
    {
        let mut state = seed;
        loop {
            match step(state)? {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(done) => return Ok(done),
            }
        }
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Monad for Box<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(A) -> Box<B>,
    {
        function(*self)
    }

    fn tail_rec_m<S, B, F>(seed: S, mut step: F) -> Box<B>
    where
        F: FnMut(S) -> Box<ControlFlow<B, S>>,
    {
        let mut state = seed;
        loop {
            match *step(state) {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(done) => return Box::new(done),
            }
        }
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }

    fn tail_rec_m<S, B, F>(seed: S, mut step: F) -> Identity<B>
    where
        F: FnMut(S) -> Identity<ControlFlow<B, S>>,
    {
        let mut state = seed;
        loop {
            match step(state).0 {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(done) => return Identity(done),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn count_to(limit: u64) -> impl FnMut(u64) -> ControlFlow<u64, u64> {
        move |n| {
            if n < limit {
                ControlFlow::Continue(n + 1)
            } else {
                ControlFlow::Break(n)
            }
        }
    }

    #[rstest]
    fn option_flat_map_some_to_none() {
        let result = Some(-5).flat_map(|n: i32| (n > 0).then_some(n));
        assert_eq!(result, None);
    }

    #[rstest]
    fn option_then_discards_first_result() {
        assert_eq!(Some(5).then(Some("next")), Some("next"));
    }

    #[rstest]
    fn option_then_propagates_failure() {
        assert_eq!(None::<i32>.then(Some("next")), None);
    }

    #[rstest]
    fn result_flat_map_short_circuits_on_err() {
        let failed: Result<i32, String> = Err("stop".to_owned());
        let result = failed.flat_map(|_| -> Result<i32, String> { unreachable!() });
        assert_eq!(result, Err("stop".to_owned()));
    }

    #[rstest]
    fn identity_left_identity_law() {
        let function = |n: i32| Identity(n * 3);
        assert_eq!(<Identity<()>>::pure(7).flat_map(function), function(7));
    }

    #[rstest]
    fn box_flat_map_unboxes_once() {
        assert_eq!(Box::new(2).flat_map(|n| Box::new(n + 1)), Box::new(3));
    }

    #[rstest]
    fn option_tail_rec_m_is_stack_safe() {
        let mut step = count_to(1_000_000);
        let result = <Option<()>>::tail_rec_m(0, |n| Some(step(n)));
        assert_eq!(result, Some(1_000_000));
    }

    #[rstest]
    fn option_tail_rec_m_stops_on_none() {
        let result = <Option<()>>::tail_rec_m(0_u32, |n| {
            if n == 3 {
                None
            } else {
                Some(ControlFlow::<u32, u32>::Continue(n + 1))
            }
        });
        assert_eq!(result, None);
    }

    #[rstest]
    fn result_tail_rec_m_returns_error() {
        let result: Result<u32, String> = <Result<(), String>>::tail_rec_m(0_u32, |n| {
            if n == 5 {
                Err(format!("failed at {n}"))
            } else {
                Ok(ControlFlow::Continue(n + 1))
            }
        });
        assert_eq!(result, Err("failed at 5".to_owned()));
    }

    #[rstest]
    fn box_tail_rec_m_counts() {
        let mut step = count_to(10);
        assert_eq!(<Box<()>>::tail_rec_m(0, |n| Box::new(step(n))), Box::new(10));
    }

    #[rstest]
    fn identity_tail_rec_m_counts() {
        let mut step = count_to(1_000_000);
        assert_eq!(
            <Identity<()>>::tail_rec_m(0, |n| Identity(step(n))),
            Identity(1_000_000)
        );
    }
}
