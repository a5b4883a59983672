//! Conditionals at the level of functions and transforms.

use crate::typeclass::{Category, Monad, ToBool};

/// Builds a function that routes its argument through `then_function` when
/// `predicate` holds and through `else_function` otherwise.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::select;
///
/// let magnitude = select(|n: &i32| *n < 0, |n: i32| -n, |n: i32| n);
/// assert_eq!(magnitude(-4), 4);
/// assert_eq!(magnitude(9), 9);
/// ```
pub fn select<A, B, P, T, E>(
    predicate: P,
    then_function: T,
    else_function: E,
) -> impl Fn(A) -> B
where
    P: Fn(&A) -> bool,
    T: Fn(A) -> B,
    E: Fn(A) -> B,
{
    move |value| {
        if predicate(&value) {
            then_function(value)
        } else {
            else_function(value)
        }
    }
}

/// [`select`] with an effectful predicate.
///
/// The predicate's computation runs first; the chosen branch is sequenced
/// after it with [`Monad::flat_map`], so a failing predicate skips both
/// branches.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::select_m;
///
/// let is_small = |text: &&str| text.parse::<u8>().ok().map(|n| n < 10);
/// let describe = select_m(is_small, |_| Some("small"), |_| Some("large"));
///
/// assert_eq!(describe("3"), Some("small"));
/// assert_eq!(describe("42"), Some("large"));
/// assert_eq!(describe("not a number"), None);
/// ```
pub fn select_m<M, A, B, P, T, E>(
    predicate: P,
    then_function: T,
    else_function: E,
) -> impl Fn(A) -> M::WithType<B>
where
    M: Monad<Inner = bool, WithType<bool> = M>,
    P: Fn(&A) -> M,
    T: Fn(A) -> M::WithType<B>,
    E: Fn(A) -> M::WithType<B>,
{
    move |value| {
        predicate(&value).flat_map::<B, _>(|selected| {
            if selected {
                then_function(value)
            } else {
                else_function(value)
            }
        })
    }
}

/// Returns `arrow` when `flag` is true, otherwise the identity transform.
///
/// `flag` may be any [`ToBool`] value, e.g. an [`All`](crate::typeclass::All)
/// summarising several switches.
///
/// Lets a pipeline include a step conditionally without branching at the
/// call site.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::conditional_compose;
/// use lambars_cond::typeclass::{Category, Endo};
///
/// fn normalize<'a>(trim: bool, lowercase: bool) -> Endo<'a, String> {
///     conditional_compose(lowercase, Endo::new(|s: String| s.to_lowercase()))
///         .compose(conditional_compose(trim, Endo::new(|s: String| s.trim().to_owned())))
/// }
///
/// assert_eq!(normalize(true, false).apply("  MiXed ".to_owned()), "MiXed");
/// assert_eq!(normalize(true, true).apply("  MiXed ".to_owned()), "mixed");
/// assert_eq!(normalize(false, false).apply("  MiXed ".to_owned()), "  MiXed ");
/// ```
#[inline]
pub fn conditional_compose<B: ToBool, C: Category>(flag: B, arrow: C) -> C {
    if flag.to_bool() { arrow } else { C::identity() }
}
