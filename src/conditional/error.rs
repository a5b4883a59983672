//! The failure raised when an exhaustive conditional finds no true branch.

use std::fmt;

/// No predicate of a branch list was true.
///
/// Returned by [`try_cond`](super::try_cond); [`cond`](super::cond),
/// [`cond_m`](super::cond_m) and the [`cond!`](crate::cond) macro panic with
/// its message instead.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::conditional::{NoMatchingCondition, try_cond};
///
/// let result: Result<&str, NoMatchingCondition> = try_cond([(false, "never")]);
/// assert_eq!(result, Err(NoMatchingCondition));
/// assert_eq!(NoMatchingCondition.to_string(), "no matching condition");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoMatchingCondition;

impl fmt::Display for NoMatchingCondition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("no matching condition")
    }
}

impl std::error::Error for NoMatchingCondition {}

static_assertions::assert_impl_all!(NoMatchingCondition: Send, Sync, std::error::Error);
