//! # lambars-cond
//!
//! Conditional combinators for functional Rust, built on the `lambars`
//! style of Generic Associated Type type classes.
//!
//! ## Overview
//!
//! - **Scalar conditionals**: `if_then_else`, `bool_fold`, Lisp-style `cond`
//!   and the lazily evaluated `cond!` macro
//! - **Lifted conditionals**: `if_m`, short-circuiting `or_m` / `and_m`,
//!   `cond_m`, `when_m`, `guard_m` over any [`Monad`](typeclass::Monad)
//! - **Monadic loops**: `while_m`, `until_m`, `do_while_m`, `do_until_m`,
//!   stack-safe for any number of iterations
//! - **Conditional composition**: `conditional_compose` for a
//!   [`Category`](typeclass::Category), `combine_if` for a
//!   [`Monoid`](typeclass::Monoid), `select` for plain functions
//!
//! ## Feature Flags
//!
//! - `typeclass`: capability traits, scalar conditionals and `cond!`
//! - `lifted`: conditionals and loops over monadic computations
//! - `compose`: `Category`, `Endo`, `Kleisli`, `select`, `conditional_compose`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_cond::prelude::*;
//!
//! fn parse_flag(raw: &str) -> Option<bool> {
//!     match raw {
//!         "yes" => Some(true),
//!         "no" => Some(false),
//!         _ => None,
//!     }
//! }
//!
//! let mode = if_m(parse_flag("no").or_m(|| parse_flag("yes")), || Some("on"), || Some("off"));
//! assert_eq!(mode, Some("on"));
//!
//! let level = 3;
//! let label = cond! {
//!     level == 0 => "quiet",
//!     level < 3 => "normal",
//!     else => "verbose",
//! };
//! assert_eq!(label, "verbose");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the capability traits and every combinator.
///
/// # Usage
///
/// ```rust
/// use lambars_cond::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "typeclass")]
    pub use crate::conditional::*;

    #[cfg(feature = "typeclass")]
    pub use crate::cond;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "typeclass")]
pub mod conditional;
