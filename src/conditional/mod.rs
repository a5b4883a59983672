//! Conditional combinators.
//!
//! - Scalar: [`if_then_else`], [`if_then_else_with`], [`choose`],
//!   [`bool_fold`], [`cond`], [`try_cond`], [`cond_default`],
//!   [`cond_or_else`], [`combine_if`] and the [`cond!`](crate::cond) macro
//! - Function level: [`select`], [`select_m`], [`conditional_compose`]
//! - Lifted into a [`Monad`](crate::typeclass::Monad): [`if_m`], [`or_m`],
//!   [`and_m`], [`not_m`], [`xor_m`], [`cond_m`], [`cond_or_else_m`],
//!   [`when_m`], [`unless_m`], [`guard_m`] and the [`LiftedBool`] methods
//! - Loops: [`while_m`], [`until_m`], [`do_while_m`], [`do_until_m`]
//!
//! ## Failure
//!
//! `cond`, `cond_m` and `cond!` without an `else` arm treat their branch
//! list as exhaustive and panic with [`NoMatchingCondition`] when no
//! predicate holds. `try_cond` reports the same condition as an error value,
//! and the `*_or_else` variants and `guard_m` yield the failing computation
//! of an [`Alternative`](crate::typeclass::Alternative) instead.
//!
//! # Examples
//!
//! ```rust
//! use lambars_cond::conditional::{cond, cond_or_else, OTHERWISE};
//!
//! let temperature = 31;
//! let advice = cond([
//!     (temperature < 0, "stay in"),
//!     (temperature > 30, "find shade"),
//!     (OTHERWISE, "go out"),
//! ]);
//! assert_eq!(advice, "find shade");
//!
//! let strict: Option<&str> = cond_or_else::<Option<()>, _, _, _>([(temperature < 0, "stay in")]);
//! assert_eq!(strict, None);
//! ```

#[cfg(feature = "compose")]
mod compose;
mod cond_macro;
mod error;
#[cfg(feature = "lifted")]
mod lifted;
#[cfg(feature = "lifted")]
mod loops;
mod scalar;

#[cfg(feature = "compose")]
pub use compose::{conditional_compose, select, select_m};
pub use error::NoMatchingCondition;
#[cfg(feature = "lifted")]
pub use lifted::{
    LiftedBool, and_m, cond_m, cond_or_else_m, guard_m, if_m, not_m, or_m, unless_m, when_m,
    xor_m,
};
#[cfg(feature = "lifted")]
pub use loops::{do_until_m, do_while_m, until_m, while_m};
pub use scalar::{
    OTHERWISE, bool_fold, choose, combine_if, cond, cond_default, cond_or_else, if_then_else,
    if_then_else_with, try_cond,
};
