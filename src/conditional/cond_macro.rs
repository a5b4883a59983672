//! The `cond!` macro: a lazily evaluated multi-branch conditional.
//!
//! Unlike [`cond`](super::cond), which receives its branches as already
//! computed values, `cond!` expands into an `if` / `else if` chain: each
//! predicate is evaluated only if every earlier one was false, and only the
//! selected value expression is evaluated at all.

/// Lisp-style multi-branch conditional.
///
/// Each arm is `predicate => value`. Predicates may be any
/// [`ToBool`](crate::typeclass::ToBool) expression. An optional final
/// `else => value` arm is taken when no predicate holds.
///
/// # Panics
///
/// Without an `else` arm, the expression panics with
/// [`NoMatchingCondition`](crate::conditional::NoMatchingCondition) when no
/// predicate is true.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::cond;
///
/// fn classify(n: i32) -> &'static str {
///     cond! {
///         n < 0 => "negative",
///         n == 0 => "zero",
///         else => "positive",
///     }
/// }
///
/// assert_eq!(classify(-3), "negative");
/// assert_eq!(classify(0), "zero");
/// assert_eq!(classify(12), "positive");
/// ```
///
/// Later predicates and unselected values are never evaluated:
///
/// ```rust
/// use lambars_cond::cond;
///
/// let items: Vec<i32> = Vec::new();
/// let first = cond! {
///     items.is_empty() => None,
///     items[0] > 0 => Some(items[0]),
///     else => None,
/// };
/// assert_eq!(first, None);
/// ```
#[macro_export]
macro_rules! cond {
    () => {
        ::core::panic!("{}", $crate::conditional::NoMatchingCondition)
    };

    (else => $default:expr $(,)?) => {
        $default
    };

    ($predicate:expr => $value:expr $(,)?) => {
        if $crate::typeclass::ToBool::to_bool(&($predicate)) {
            $value
        } else {
            ::core::panic!("{}", $crate::conditional::NoMatchingCondition)
        }
    };

    ($predicate:expr => $value:expr, $($remaining:tt)+) => {
        if $crate::typeclass::ToBool::to_bool(&($predicate)) {
            $value
        } else {
            $crate::cond!($($remaining)+)
        }
    };
}
