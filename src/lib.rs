//! # Threeway
//!
//! `threeway` is a small combinator library for building three-way comparison
//! functions ("comparators") to feed into sorting, ranking, and
//! equality-bucketing code.
//!
//! It provides one base primitive — the [`Comparator`] trait, which any
//! `Fn(&T, &T) -> Ordering` closure already satisfies — and a closed set of
//! composition operators that each produce a brand-new comparator without
//! touching their inputs:
//!
//! - **`reverse`**: flip the order, exactly (ties stay ties).
//! - **`key`**: reuse a comparator through a key projection.
//! - **`append` / `prepend`**: partition values matched by a predicate to the
//!   end (or front) of the order, with their own comparator inside the
//!   partition.
//! - **`then`**: tie-break chaining; each stage runs only when every earlier
//!   stage tied.
//!
//! Two prefab constructors round it out: [`on()`] (order by a projected key
//! using the default ordering) and [`locale()`] (locale-aware string
//! collation via ICU4X).
//!
//! Everything is pure and allocation-happens-at-composition-time: invoking a
//! comparator performs no I/O, holds no state, and is safe to share across
//! threads. `threeway` does not sort anything itself; hand the comparator to
//! your own sort routine via [`Comparator::as_fn`].
//!
//! ## Usage
//!
//! ### Tie-break chains
//!
//! ```rust
//! use threeway::{on, Comparator};
//!
//! let mut people = vec![("alice", 30), ("bob", 25), ("alice", 25)];
//!
//! // By name ascending, then by age descending.
//! let cmp = on(|p: &(&str, u32)| p.0).then(on(|p: &(&str, u32)| p.1).reverse());
//! people.sort_by(cmp.as_fn());
//!
//! assert_eq!(people, vec![("alice", 30), ("alice", 25), ("bob", 25)]);
//! ```
//!
//! ### Partitioning
//!
//! ```rust
//! use threeway::{natural, Comparator};
//!
//! // Sort ascending, but keep zeroes out of the way at the end.
//! let cmp = natural().append(|n: &i64| *n == 0, natural());
//!
//! let mut xs = vec![3, 0, -2, 7, 0];
//! xs.sort_by(cmp.as_fn());
//! assert_eq!(xs, vec![-2, 3, 7, 0, 0]);
//! ```
//!
//! ### Locale-aware collation
//!
//! ```rust
//! use std::cmp::Ordering;
//! use threeway::{locale, CollationOptions, Comparator};
//!
//! let numeric = locale(
//!     &["en"],
//!     CollationOptions { numeric: true, ..Default::default() },
//! )?;
//! assert_eq!(numeric.compare("book 9", "book 10"), Ordering::Less);
//! # Ok::<(), threeway::LocaleError>(())
//! ```
//!
//! ## Guarantees and non-guarantees
//!
//! Combinators close over the exact comparison behavior of their receiver at
//! construction time; two compositions from equal parts are independent
//! values with identical behavior. The library trusts the comparators it is
//! given: it does not verify that a comparison is antisymmetric or
//! transitive, and the default ordering deliberately treats incomparable
//! pairs (such as NaN against a number) as ties rather than rejecting them.

pub mod combine;
pub mod core;
pub mod locale;

pub use crate::core::{natural, on, Comparator, Natural};
pub use crate::locale::{
    locale, CaseFirst, CollationOptions, LocaleComparator, LocaleError, Sensitivity,
};

pub mod prelude {
    pub use crate::core::{natural, on, Comparator, Natural};
    pub use crate::locale::{locale, CollationOptions, LocaleComparator, Sensitivity};
}
