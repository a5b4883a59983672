//! Conditionals over plain values.
//!
//! Rust evaluates arguments eagerly, so `if_then_else` and the `cond` family
//! receive both branch values already computed. Where only the selected
//! branch may be evaluated, use [`if_then_else_with`], a lazily built branch
//! iterator, or the [`cond!`](crate::cond) macro.

use super::error::NoMatchingCondition;
use crate::typeclass::{Alternative, Monoid, ToBool};

/// The catch-all guard, conventionally placed last in a branch list.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::{OTHERWISE, cond};
///
/// let size = 7;
/// let label = cond([(size < 5, "small"), (size < 10, "medium"), (OTHERWISE, "large")]);
/// assert_eq!(label, "medium");
/// ```
pub const OTHERWISE: bool = true;

/// Returns `then_value` if `predicate` is true, otherwise `else_value`.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::if_then_else;
///
/// assert_eq!(if_then_else(true, "yes", "no"), "yes");
/// assert_eq!(if_then_else(false, "yes", "no"), "no");
/// ```
#[inline]
pub fn if_then_else<B: ToBool, A>(predicate: B, then_value: A, else_value: A) -> A {
    if predicate.to_bool() {
        then_value
    } else {
        else_value
    }
}

/// Lazy [`if_then_else`]: only the selected thunk is invoked.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::if_then_else_with;
///
/// let divisor = 0;
/// let ratio = if_then_else_with(divisor == 0, || None, || Some(10 / divisor));
/// assert_eq!(ratio, None);
/// ```
#[inline]
pub fn if_then_else_with<B, A, T, E>(predicate: B, then_branch: T, else_branch: E) -> A
where
    B: ToBool,
    T: FnOnce() -> A,
    E: FnOnce() -> A,
{
    if predicate.to_bool() {
        then_branch()
    } else {
        else_branch()
    }
}

/// [`if_then_else`] with the predicate last.
///
/// Convenient for partially applying the two outcomes:
///
/// ```rust
/// use lambars_cond::conditional::choose;
///
/// let marks: Vec<char> = [true, false, true].into_iter().map(|passed| choose('+', '-', passed)).collect();
/// assert_eq!(marks, vec!['+', '-', '+']);
/// ```
#[inline]
pub fn choose<B: ToBool, A>(then_value: A, else_value: A, predicate: B) -> A {
    if_then_else(predicate, then_value, else_value)
}

/// The boolean eliminator: `false_value` for false, `true_value` for true.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::bool_fold;
///
/// assert_eq!(bool_fold(0, 1, true), 1);
/// assert_eq!(bool_fold(0, 1, false), 0);
/// ```
#[inline]
pub fn bool_fold<B: ToBool, A>(false_value: A, true_value: A, predicate: B) -> A {
    if_then_else(predicate, true_value, false_value)
}

/// Returns the value of the first branch whose predicate is true.
///
/// Branches are scanned left to right and scanning stops at the first match,
/// so a branch iterator built with `map` is evaluated only that far.
///
/// # Panics
///
/// Panics with [`NoMatchingCondition`] when `branches` is empty or no
/// predicate is true. Use [`try_cond`], [`cond_default`] or [`cond_or_else`]
/// when that is an expected outcome.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::cond;
///
/// let n = 0;
/// let sign = cond([(n < 0, "negative"), (n == 0, "zero"), (n > 0, "positive")]);
/// assert_eq!(sign, "zero");
/// ```
#[track_caller]
pub fn cond<B, A, I>(branches: I) -> A
where
    B: ToBool,
    I: IntoIterator<Item = (B, A)>,
{
    match try_cond(branches) {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}

/// Returns the value of the first true branch, or [`NoMatchingCondition`].
///
/// # Errors
///
/// Returns [`NoMatchingCondition`] when no predicate is true.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::{NoMatchingCondition, try_cond};
///
/// assert_eq!(try_cond([(false, 1), (true, 2), (true, 3)]), Ok(2));
/// assert_eq!(try_cond(Vec::<(bool, i32)>::new()), Err(NoMatchingCondition));
/// ```
pub fn try_cond<B, A, I>(branches: I) -> Result<A, NoMatchingCondition>
where
    B: ToBool,
    I: IntoIterator<Item = (B, A)>,
{
    branches
        .into_iter()
        .find_map(|(predicate, value)| predicate.to_bool().then_some(value))
        .ok_or(NoMatchingCondition)
}

/// Returns the value of the first true branch, or `default`.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::cond_default;
///
/// let code = 418;
/// let family = cond_default("unknown", [(code < 300, "ok"), (code < 500, "client error")]);
/// assert_eq!(family, "client error");
/// ```
pub fn cond_default<B, A, I>(default: A, branches: I) -> A
where
    B: ToBool,
    I: IntoIterator<Item = (B, A)>,
{
    try_cond(branches).unwrap_or(default)
}

/// Returns `M::pure` of the first true branch, or `M::empty()`.
///
/// `M` is the brand of the failure-capable result, e.g. `Option<()>`.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::cond_or_else;
///
/// let found: Option<&str> = cond_or_else::<Option<()>, _, _, _>([(false, "a"), (true, "b")]);
/// assert_eq!(found, Some("b"));
///
/// let missing: Option<&str> = cond_or_else::<Option<()>, _, _, _>([(false, "a")]);
/// assert_eq!(missing, None);
/// ```
pub fn cond_or_else<M, B, A, I>(branches: I) -> M::WithType<A>
where
    M: Alternative,
    B: ToBool,
    I: IntoIterator<Item = (B, A)>,
{
    match try_cond(branches) {
        Ok(value) => M::pure(value),
        Err(NoMatchingCondition) => M::empty::<A>(),
    }
}

/// Returns `value` if `flag` is true, otherwise the monoid's identity.
///
/// Nesting gates a value behind several flags at once.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::combine_if;
/// use lambars_cond::typeclass::Semigroup;
///
/// let verbose = true;
/// let color = false;
/// let flags = combine_if(verbose, String::from("-v "))
///     .combine(combine_if(color, String::from("--color ")))
///     .combine(combine_if(verbose, combine_if(!color, String::from("--plain"))));
/// assert_eq!(flags, "-v --plain");
/// ```
#[inline]
pub fn combine_if<B: ToBool, M: Monoid>(flag: B, value: M) -> M {
    if flag.to_bool() { value } else { M::empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{All, Any, Sum};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(true, 1)]
    #[case(false, 2)]
    fn scalar_truth_table(#[case] predicate: bool, #[case] expected: i32) {
        assert_eq!(if_then_else(predicate, 1, 2), expected);
        assert_eq!(choose(1, 2, predicate), expected);
        assert_eq!(bool_fold(2, 1, predicate), expected);
    }

    #[rstest]
    fn if_then_else_accepts_monoid_wrappers() {
        assert_eq!(if_then_else(Any(true), "any", "none"), "any");
        assert_eq!(if_then_else(All(false), "all", "some"), "some");
    }

    #[rstest]
    fn if_then_else_with_invokes_only_selected_branch() {
        let calls = Cell::new(0);
        let result = if_then_else_with(
            false,
            || -> i32 { unreachable!("then branch must not run") },
            || {
                calls.set(calls.get() + 1);
                7
            },
        );
        assert_eq!(result, 7);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn cond_first_true_branch_wins() {
        assert_eq!(cond([(false, "a"), (true, "b"), (true, "c")]), "b");
    }

    #[rstest]
    #[should_panic(expected = "no matching condition")]
    fn cond_panics_when_empty() {
        let _: i32 = cond(Vec::<(bool, i32)>::new());
    }

    #[rstest]
    #[should_panic(expected = "no matching condition")]
    fn cond_panics_when_all_false() {
        let _ = cond([(false, 1), (false, 2)]);
    }

    #[rstest]
    fn cond_stops_scanning_lazy_branches_at_first_match() {
        let evaluated = Cell::new(0);
        let thresholds = [10, 20, 30, 40];
        let value = 15;
        let bucket = cond(thresholds.iter().map(|&limit| {
            evaluated.set(evaluated.get() + 1);
            (value < limit, limit)
        }));
        assert_eq!(bucket, 20);
        assert_eq!(evaluated.get(), 2);
    }

    #[rstest]
    fn try_cond_reports_no_match() {
        assert_eq!(try_cond([(false, 'x')]), Err(NoMatchingCondition));
    }

    #[rstest]
    fn cond_default_falls_back() {
        assert_eq!(cond_default(0, [(false, 1)]), 0);
        assert_eq!(cond_default(0, [(false, 1), (OTHERWISE, 2)]), 2);
    }

    #[rstest]
    fn cond_or_else_into_result_uses_monoid_error() {
        let missing: Result<i32, Vec<String>> =
            cond_or_else::<Result<(), Vec<String>>, _, _, _>([(false, 1)]);
        assert_eq!(missing, Err(Vec::new()));
    }

    #[rstest]
    fn combine_if_gates_value() {
        assert_eq!(combine_if(true, String::from("x")), "x");
        assert_eq!(combine_if(false, String::from("x")), "");
        assert_eq!(combine_if(false, Sum(5)), Sum(0));
    }

    #[rstest]
    fn combine_if_chains_flags() {
        assert_eq!(combine_if(true, combine_if(true, vec![1])), vec![1]);
        assert_eq!(combine_if(true, combine_if(false, vec![1])), Vec::<i32>::new());
    }
}
