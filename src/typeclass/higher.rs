//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` or `Result<_, E>` as type
//! constructors. [`TypeConstructor`] works around this with a GAT: any
//! instantiation of a constructor (conventionally `Option<()>`) acts as a
//! *brand* naming the whole family, and `WithType<B>` moves between its
//! members.
//!
//! The capability traits built on top ([`Functor`](super::Functor),
//! [`Monad`](super::Monad), ...) are written as associated functions on the
//! brand, so every intermediate value of a generic combinator stays in the
//! single family `M::WithType<_>`.
//!
//! # Example
//!
//! ```rust
//! use lambars_cond::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = reset(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}
