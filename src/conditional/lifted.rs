//! Conditionals and boolean operators lifted into a sequenced computation.
//!
//! The first computation of each operator (the predicate) is passed as a
//! value. Every computation the operator may skip is passed as a thunk, and
//! the thunk is invoked only when its result is needed: `or_m` never builds
//! its right operand after a `true`, `if_m` builds exactly one branch,
//! `cond_m` stops at the first matching predicate.
//!
//! A predicate is any computation producing `bool` (`Option<bool>`,
//! `Result<bool, E>`, `Identity<bool>`, ...). Branch thunks return the same
//! constructor applied to their own result type.
//!
//! # Examples
//!
//! ```rust
//! use lambars_cond::conditional::{and_m, if_m, or_m};
//!
//! fn lookup(key: &str) -> Option<bool> {
//!     match key {
//!         "enabled" => Some(true),
//!         "disabled" => Some(false),
//!         _ => None,
//!     }
//! }
//!
//! assert_eq!(or_m(lookup("enabled"), || lookup("missing")), Some(true));
//! assert_eq!(and_m(lookup("enabled"), || lookup("missing")), None);
//! assert_eq!(if_m(lookup("disabled"), || Some("on"), || Some("off")), Some("off"));
//! ```

use std::ops::ControlFlow;

use super::error::NoMatchingCondition;
use crate::typeclass::{Functor, Monad, MonadPlus};

/// Runs `predicate`, then exactly one of the two branch computations.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::if_m;
///
/// let checked: Result<i32, String> = if_m(Ok(false), || Err("not taken".to_owned()), || Ok(0));
/// assert_eq!(checked, Ok(0));
/// ```
pub fn if_m<M, A, T, E>(predicate: M, then_branch: T, else_branch: E) -> M::WithType<A>
where
    M: Monad<Inner = bool, WithType<bool> = M>,
    T: FnOnce() -> M::WithType<A>,
    E: FnOnce() -> M::WithType<A>,
{
    predicate.flat_map::<A, _>(|condition| {
        if condition {
            then_branch()
        } else {
            else_branch()
        }
    })
}

/// Short-circuiting disjunction: `second` runs only if `first` yields `false`.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::or_m;
///
/// assert_eq!(or_m(Some(true), || None), Some(true));
/// assert_eq!(or_m(Some(false), || Some(true)), Some(true));
/// assert_eq!(or_m(None, || Some(true)), None);
/// ```
pub fn or_m<M, F>(first: M, second: F) -> M
where
    M: Monad<Inner = bool, WithType<bool> = M>,
    F: FnOnce() -> M,
{
    first.flat_map::<bool, _>(|left| if left { M::pure(true) } else { second() })
}

/// Short-circuiting conjunction: `second` runs only if `first` yields `true`.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::and_m;
///
/// let denied: Result<bool, String> = Ok(false);
/// assert_eq!(and_m(denied, || Err("never checked".to_owned())), Ok(false));
/// assert_eq!(and_m(Ok::<bool, String>(true), || Ok(true)), Ok(true));
/// ```
pub fn and_m<M, F>(first: M, second: F) -> M
where
    M: Monad<Inner = bool, WithType<bool> = M>,
    F: FnOnce() -> M,
{
    first.flat_map::<bool, _>(|left| if left { second() } else { M::pure(false) })
}

/// Negates the result of `computation`.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::not_m;
///
/// assert_eq!(not_m(Some(true)), Some(false));
/// assert_eq!(not_m(not_m(Some(true))), Some(true));
/// ```
pub fn not_m<M>(computation: M) -> M
where
    M: Monad<Inner = bool, WithType<bool> = M>,
{
    computation.fmap::<bool, _>(|value| !value)
}

/// Exclusive or. Both operands always run; `second` runs after `first`.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::xor_m;
/// use lambars_cond::typeclass::Identity;
///
/// assert_eq!(xor_m(Identity(true), || Identity(false)), Identity(true));
/// assert_eq!(xor_m(Identity(true), || Identity(true)), Identity(false));
/// ```
pub fn xor_m<M, F>(first: M, second: F) -> M
where
    M: Monad<Inner = bool, WithType<bool> = M>,
    F: FnOnce() -> M,
{
    first.flat_map::<bool, _>(|left| second().fmap::<bool, _>(move |right| left != right))
}

/// Runs the value computation of the first branch whose predicate
/// computation yields `true`.
///
/// Predicates run in order, stopping at the first `true`; only the matched
/// value computation runs. The scan is a [`Monad::tail_rec_m`] loop, so long
/// branch lists do not grow the stack.
///
/// # Panics
///
/// Panics with [`NoMatchingCondition`] when every predicate yields `false` or
/// `branches` is empty. Use [`cond_or_else_m`] to get an empty computation
/// instead.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::cond_m;
///
/// type Thunk<'a, T> = Box<dyn FnOnce() -> Option<T> + 'a>;
///
/// fn branch<'a, T: 'a>(
///     predicate: impl FnOnce() -> Option<bool> + 'a,
///     value: impl FnOnce() -> Option<T> + 'a,
/// ) -> (Thunk<'a, bool>, Thunk<'a, T>) {
///     (Box::new(predicate), Box::new(value))
/// }
///
/// let n = 9;
/// let label = cond_m([
///     branch(|| Some(n % 15 == 0), || Some("FizzBuzz".to_owned())),
///     branch(|| Some(n % 3 == 0), || Some("Fizz".to_owned())),
///     branch(|| Some(true), || Some(n.to_string())),
/// ]);
/// assert_eq!(label, Some("Fizz".to_owned()));
/// ```
pub fn cond_m<M, A, I, P, V, N>(branches: I) -> M::WithType<A>
where
    M: Monad<Inner = bool, WithType<bool> = M>,
    I: IntoIterator<Item = (P, V)>,
    P: FnOnce() -> M,
    V: FnOnce() -> N,
    N: Functor<
            Inner = A,
            WithType<ControlFlow<A, I::IntoIter>> = M::WithType<ControlFlow<A, I::IntoIter>>,
        >,
{
    scan_branches::<M, A, I, P, V, N, _>(branches, || panic!("{NoMatchingCondition}"))
}

/// [`cond_m`] that yields [`Alternative::empty`](crate::typeclass::Alternative::empty)
/// when no predicate matches.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::cond_or_else_m;
///
/// let branches: [(fn() -> Option<bool>, fn() -> Option<i32>); 2] =
///     [(|| Some(false), || Some(1)), (|| Some(false), || Some(2))];
/// assert_eq!(cond_or_else_m(branches), None);
/// ```
pub fn cond_or_else_m<M, A, I, P, V, N>(branches: I) -> M::WithType<A>
where
    M: MonadPlus<Inner = bool, WithType<bool> = M>,
    I: IntoIterator<Item = (P, V)>,
    P: FnOnce() -> M,
    V: FnOnce() -> N,
    N: Functor<
            Inner = A,
            WithType<ControlFlow<A, I::IntoIter>> = M::WithType<ControlFlow<A, I::IntoIter>>,
        >,
{
    scan_branches::<M, A, I, P, V, N, _>(branches, || {
        M::empty::<ControlFlow<A, I::IntoIter>>()
    })
}

fn scan_branches<M, A, I, P, V, N, X>(branches: I, mut exhausted: X) -> M::WithType<A>
where
    M: Monad<Inner = bool, WithType<bool> = M>,
    I: IntoIterator<Item = (P, V)>,
    P: FnOnce() -> M,
    V: FnOnce() -> N,
    N: Functor<
            Inner = A,
            WithType<ControlFlow<A, I::IntoIter>> = M::WithType<ControlFlow<A, I::IntoIter>>,
        >,
    X: FnMut() -> M::WithType<ControlFlow<A, I::IntoIter>>,
{
    M::tail_rec_m::<I::IntoIter, A, _>(branches.into_iter(), |mut remaining| {
        let Some((predicate, value)) = remaining.next() else {
            return exhausted();
        };
        predicate().flat_map::<ControlFlow<A, I::IntoIter>, _>(move |matched| {
            if matched {
                value().fmap::<ControlFlow<A, I::IntoIter>, _>(ControlFlow::Break)
            } else {
                M::pure::<ControlFlow<A, I::IntoIter>>(ControlFlow::Continue(remaining))
            }
        })
    })
}

/// Runs `action` only when `predicate` yields `true`, discarding its result.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::when_m;
///
/// let mut log = Vec::new();
/// let done: Option<()> = when_m(Some(true), || {
///     log.push("ran");
///     Some(log.len())
/// });
/// assert_eq!(done, Some(()));
/// assert_eq!(log, vec!["ran"]);
/// ```
pub fn when_m<M, N, F>(predicate: M, action: F) -> M::WithType<()>
where
    M: Monad<Inner = bool, WithType<bool> = M>,
    F: FnOnce() -> N,
    N: Functor<WithType<()> = M::WithType<()>>,
{
    predicate.flat_map::<(), _>(|condition| {
        if condition {
            action().void()
        } else {
            M::pure(())
        }
    })
}

/// Runs `action` only when `predicate` yields `false`, discarding its result.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::unless_m;
/// use std::cell::Cell;
///
/// let warnings = Cell::new(0);
/// let quiet: Result<bool, String> = Ok(true);
/// let done = unless_m(quiet, || Ok::<(), String>(warnings.set(warnings.get() + 1)));
/// assert_eq!(done, Ok(()));
/// assert_eq!(warnings.get(), 0);
/// ```
pub fn unless_m<M, N, F>(predicate: M, action: F) -> M::WithType<()>
where
    M: Monad<Inner = bool, WithType<bool> = M>,
    F: FnOnce() -> N,
    N: Functor<WithType<()> = M::WithType<()>>,
{
    when_m::<M, N, F>(not_m(predicate), action)
}

/// Succeeds with `()` when `predicate` yields `true`, fails with
/// [`Alternative::empty`](crate::typeclass::Alternative::empty) otherwise.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::guard_m;
///
/// assert_eq!(guard_m(Some(true)), Some(()));
/// assert_eq!(guard_m(Some(false)), None);
/// ```
pub fn guard_m<M>(predicate: M) -> M::WithType<()>
where
    M: MonadPlus<Inner = bool, WithType<bool> = M>,
{
    predicate.flat_map::<(), _>(M::guard)
}

/// Method syntax for the lifted boolean operators.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::LiftedBool;
///
/// let ready: Result<bool, String> = Ok(true);
/// let allowed = ready.and_m(|| Ok(false)).or_m(|| Ok(true)).not_m();
/// assert_eq!(allowed, Ok(false));
/// ```
pub trait LiftedBool: Monad<Inner = bool, WithType<bool> = Self> + Sized {
    /// See [`or_m`].
    #[must_use]
    fn or_m<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        or_m(self, other)
    }

    /// See [`and_m`].
    #[must_use]
    fn and_m<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        and_m(self, other)
    }

    /// See [`xor_m`].
    #[must_use]
    fn xor_m<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        xor_m(self, other)
    }

    /// See [`not_m`].
    #[must_use]
    fn not_m(self) -> Self {
        not_m(self)
    }
}

impl<M> LiftedBool for M where M: Monad<Inner = bool, WithType<bool> = M> {}
