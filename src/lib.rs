//! # Inductively defined sets
//!
//! Two small tools for finite discrete mathematics:
//!
//! - [`closure::ClosureGenerator`] computes the closure of a finite base set under a family of
//!   unary and binary [`Constructors`](closure::Constructor), exposed as a lazy infinite sequence
//!   of ever-larger universes.
//! - [`classify::classify`] checks a mapping between two finite sets for injectivity,
//!   surjectivity, and bijectivity.

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod classify;
pub mod closure;
pub mod prelude;


/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 4]>;

/// [`smallvec::smallvec`] coerced into [`SmallVec`].
#[macro_export]
macro_rules! smallvec {
    ($elem: expr; $n: expr) => (
        SmallVec::from_elem($elem, $n)
    );
    ($($x: expr), *$(,)*) => ({
        let vec: SmallVec<_> = smallvec::smallvec![$($x,)*];
        vec
    });
}
