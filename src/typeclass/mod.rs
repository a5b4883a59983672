//! Capability traits the conditional combinators are generic over.
//!
//! - [`Functor`], [`Applicative`], [`Monad`]: sequenced computations
//! - [`Alternative`], [`MonadPlus`]: computations that can fail and be retried
//! - [`Category`]: composable transforms with an identity
//! - [`Semigroup`], [`Monoid`]: combinable values with an identity
//! - [`ToBool`]: values that stand for a truth value
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. The traits are
//! built on [`TypeConstructor`], a Generic Associated Type encoding. `fmap`,
//! `flat_map` and `alt` are methods on a computation; `pure`, `empty`, `guard`
//! and `tail_rec_m` are associated functions called on any instantiation of
//! the constructor, conventionally with `()`.
//!
//! ```rust
//! use lambars_cond::typeclass::{Applicative, Monad};
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! let y = x.flat_map(|n| n.checked_add(1));
//! assert_eq!(y, Some(43));
//! ```
//!
//! Generic code ties related computations together through `WithType`:
//!
//! ```rust
//! use lambars_cond::typeclass::{Functor, Monad};
//!
//! fn both<M>(first: M, second: M) -> M
//! where
//!     M: Monad<Inner = bool, WithType<bool> = M>,
//! {
//!     first.flat_map::<bool, _>(|a| second.fmap::<bool, _>(move |b| a && b))
//! }
//!
//! assert_eq!(both(Some(true), Some(false)), Some(false));
//! ```
//!
//! ## Combinable Values
//!
//! ```rust
//! use lambars_cond::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//! assert_eq!(Vec::<i32>::empty(), vec![]);
//! ```

mod alternative;
mod applicative;
#[cfg(feature = "compose")]
mod category;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod to_bool;
mod wrappers;

pub use alternative::{Alternative, MonadPlus};
pub use applicative::Applicative;
#[cfg(feature = "compose")]
pub use category::{Category, Endo, Kleisli};
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use to_bool::ToBool;
pub use wrappers::{All, Any, Product, Sum};
