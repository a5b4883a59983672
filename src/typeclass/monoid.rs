//! Monoid type class - semigroups with an identity element.
//!
//! The identity element is what [`combine_if`](crate::conditional::combine_if)
//! yields when its flag is false, so a gated value drops out of a
//! combination without leaving a trace.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_cond::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! ```

use std::ops::Add;

use super::Identity;
use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Product, Sum};

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element of `combine`.
    fn empty() -> Self;

    /// Folds every element into one value, starting from `empty`.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns `true` when `self` is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// Standard Type Implementation
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

// =============================================================================
// Unit and Identity<T> Implementation
// =============================================================================

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

// =============================================================================
// Wrapper Implementation
// =============================================================================

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

impl_product_monoid!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

// =============================================================================
// Tuple Implementation
// =============================================================================

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_empty_is_left_and_right_identity() {
        let value = String::from("flag");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn vec_combine_all_flattens() {
        let combined = Vec::combine_all(vec![vec![1], vec![], vec![2, 3]]);
        assert_eq!(combined, vec![1, 2, 3]);
    }

    #[rstest]
    fn product_empty_is_one() {
        assert_eq!(Product::<i32>::empty(), Product(1));
        assert_eq!(Product::<f64>::empty(), Product(1.0));
    }

    #[rstest]
    fn any_and_all_identities() {
        assert_eq!(Any::combine_all(Vec::new()), Any(false));
        assert_eq!(All::combine_all(Vec::new()), All(true));
    }

    #[rstest]
    fn is_empty_value_detects_identity() {
        assert!(String::new().is_empty_value());
        assert!(!Sum(1).is_empty_value());
    }

    #[rstest]
    fn identity_and_tuple_empty() {
        assert_eq!(Identity::<String>::empty(), Identity(String::new()));
        assert_eq!(<(Sum<i32>, All)>::empty(), (Sum(0), All(true)));
    }
}
