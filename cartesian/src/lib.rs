//! Lazy Cartesian products of multi-pass sequences.
//!
//! [`Product`] combines a tuple of sequences and walks their combinations
//! like an odometer, last sequence fastest. It never materializes the
//! combinations, and it supports as much as its bases do: a product of slices
//! can jump, subtract and compare positions in constant time, a product
//! involving a terminator-delimited sequence can only move forward.
//!
//! `#[derive(Cartesian)]` builds on it to enumerate every combination of a
//! struct's fields:
//!
//! ```
//! use cartesian::{Cartesian, IntoCartesian as _};
//!
//! #[derive(Cartesian, Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let points = cartesian::Factors::<Point> { x: vec![0, 1], y: vec![5, 6] };
//! assert_eq!(points.cartesian().count(), 4);
//! ```
//!
//! The [`optional`] module adds monadic combinators to [`Option`].

mod error;
mod iter;
pub mod optional;
mod product;
mod range;
pub mod seq;
mod slice;
mod until;

#[cfg(feature = "derive")]
pub use cartesian_derive::Cartesian;

pub use error::{Error, Result};
pub use iter::{IntoIter, Iter};
pub use optional::{Fallback, Optional};
pub use product::{Bases, Product, ProductCursor, Sentinel, product};
pub use seq::{
    BidirectionalSequence, CommonSequence, Map, RandomAccessSequence, Sequence, SequenceExt,
    SizedSequence,
};
pub use until::{Terminator, Until, UntilCursor, until};

/// The companion struct generated for `T` by `#[derive(Cartesian)]`.
pub type Factors<T> = <T as Cartesian>::Factors;

/// Implemented by `#[derive(Cartesian)]` for the annotated struct.
pub trait Cartesian: Sized {
    /// Holds candidate values for each field of `Self`.
    type Factors: IntoCartesian<Item = Self>;
}

/// Enumerates every combination of a [`Cartesian::Factors`] struct.
pub trait IntoCartesian {
    type Item;

    /// The combinations as a random access sequence, first field most
    /// significant.
    fn sequence(&self) -> impl RandomAccessSequence<Item = Self::Item> + '_;

    fn cartesian(&self) -> impl ExactSizeIterator<Item = Self::Item> + '_ {
        IntoIter::new(self.sequence())
    }
}
