//! This crate provides mathematical intervals over any totally ordered
//! type, and the pairwise algebra on them.
//!
//! Each end of an interval is a [`Bound`], which is either open (the value
//! is excluded), closed (the value is included) or infinite.
//!
//!  |Interval |Constructor                        |Description
//!  |---------|-----------------------------------|--------------
//!  | `[A,B]` |[`Interval::closed`]               |left-closed, right-closed
//!  | `[A,B)` |[`Interval::closed_open`]          |left-closed, right-open
//!  | `(A,B)` |[`Interval::open`]                 |left-open, right-open
//!  | `(A,B]` |[`Interval::open_closed`]          |left-open, right-closed
//!  | `(-∞,B]`|[`Interval::from_bounds`]          |any combination of bounds
//!  | `(-∞,+∞)`|[`Interval::unbounded`]           |doubly unbounded
//!  | `empty` |[`Interval::empty`]                |empty
//!
//! The constructors check that the lower bound is not after the upper bound,
//! and return an [`Error::InvalidArgument`] otherwise.  The empty interval is
//! a separate variant of [`Interval`], it has no bounds at all.
//!
//! Given two intervals, we can compute the following:
//!
//! ```text
//!        [------ A ------]
//!               [----- B -------]
//!
//!               [--------]            Intersection (A & B)
//!        [----------------------]     Union (A | B)
//!        [----------------------]     Convex hull
//! ```
//!
//! When the two intervals do not overlap:
//! ```text
//!      [---A---)[----B----]
//!
//!                                 Intersection (A & B) is empty
//!      [-----------------]        Union (A | B), since A is adjacent to B
//!
//!      [---A---]   [----B----]
//!
//!                                 Intersection (A & B) is empty
//!                                 Union (A | B) is empty, non contiguous
//!      [---------------------]    Convex hull
//! ```
//!
//! Two intervals are adjacent when one ends with an open bound exactly where
//! the other starts with a closed bound.  For discrete types like integers,
//! see [`NothingBetween`] and [`Interval::touches()`] to also consider
//! `[1,2]` and `[3,4]` as contiguous.
//!
//! ```
//! use interval_algebra::Interval;
//! let a = Interval::closed(1, 5).unwrap();
//! let b = Interval::open(4, 7).unwrap();
//! assert_eq!(&a & &b, Interval::open_closed(4, 5).unwrap());
//! assert_eq!((&a | &b).to_string(), "[1,7)");
//! ```

mod bounds;
mod errors;
mod intervals;
mod nothing_between;
mod parse;

pub use crate::bounds::{Bound, BoundType};
pub use crate::errors::{Error, Result};
pub use crate::intervals::{Bounded, Interval};
pub use crate::nothing_between::NothingBetween;
