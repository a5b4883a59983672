//! Boolean-like values accepted as predicates by the scalar conditionals.

use super::wrappers::{All, Any};

/// Conversion of a value to the truth value it stands for.
///
/// # Examples
///
/// ```rust
/// use lambars_cond::typeclass::{All, Any, ToBool};
///
/// assert!(true.to_bool());
/// assert!(Any(true).to_bool());
/// assert!(!All(false).to_bool());
/// ```
pub trait ToBool {
    /// Returns the truth value of `self`.
    fn to_bool(&self) -> bool;
}

impl ToBool for bool {
    #[inline]
    fn to_bool(&self) -> bool {
        *self
    }
}

impl<T: ToBool + ?Sized> ToBool for &T {
    #[inline]
    fn to_bool(&self) -> bool {
        (**self).to_bool()
    }
}

impl ToBool for Any {
    #[inline]
    fn to_bool(&self) -> bool {
        self.0
    }
}

impl ToBool for All {
    #[inline]
    fn to_bool(&self) -> bool {
        self.0
    }
}
