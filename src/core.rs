//! Core comparator trait and constructors.
//!
//! This module defines:
//! - [`Comparator`]: the three-way comparison trait, with the combinator
//!   methods (`reverse`, `key`, `append`, `prepend`, `then`) provided in
//!   terms of the one required method.
//! - [`Natural`]: the default ordering over any `PartialOrd` type.
//! - [`natural`] and [`on`]: the ready-made constructors.
//!
//! Any closure of the right shape is already a comparator: a blanket impl
//! covers every `Fn(&T, &T) -> Ordering`, so the combinators are available
//! directly on hand-written comparison functions.

use crate::combine::{Append, Key, Prepend, Reversed, Then};
use std::cmp::Ordering;
use std::marker::PhantomData;

/// A three-way comparison over values of type `T`.
///
/// `Less` means the first argument orders before the second, `Greater` after,
/// and `Equal` means the two are equivalent for ordering purposes.
///
/// Implementors supply [`compare`](Comparator::compare); everything else is a
/// combinator built on top of it. Combinators take the receiver by value and
/// return a new comparator that closes over it; nothing is ever mutated.
/// Clone the receiver first if you want to keep using it.
///
/// # Examples
///
/// A closure is a comparator as-is:
///
/// ```
/// use std::cmp::Ordering;
/// use threeway::Comparator;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"fig", &"apple"), Ordering::Less);
/// assert_eq!(by_len.reverse().compare(&"fig", &"apple"), Ordering::Greater);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares two values, returning their relative order.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns a comparator with the opposite order.
    ///
    /// The result for `(a, b)` is exactly the receiver's result for
    /// `(b, a)`; ties stay ties. Reversing twice gives back the original
    /// behavior.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use threeway::{natural, Comparator};
    ///
    /// let descending = natural().reverse();
    /// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
    /// assert_eq!(descending.compare(&2, &2), Ordering::Equal);
    /// ```
    fn reverse(self) -> Reversed<Self, T>
    where
        Self: Sized,
    {
        Reversed {
            inner: self,
            _t: PhantomData,
        }
    }

    /// Reuses this comparator on values of another type by projecting each
    /// argument through `transform` first.
    ///
    /// `transform` is invoked exactly once per argument per comparison. It
    /// must be a pure function of its argument.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use threeway::{natural, Comparator};
    ///
    /// let by_len = natural().key(|s: &&str| s.len());
    /// assert_eq!(by_len.compare(&"apple", &"fig"), Ordering::Greater);
    /// ```
    fn key<U, F>(self, transform: F) -> Key<Self, T, F>
    where
        Self: Sized,
        T: Sized,
        U: ?Sized,
        F: Fn(&U) -> T,
    {
        Key {
            inner: self,
            transform,
            _key: PhantomData,
        }
    }

    /// Partitions values matched by `predicate` to sort after all unmatched
    /// values.
    ///
    /// `predicate` is evaluated independently on each argument. When both
    /// match, `matched` decides; when neither does, the receiver decides;
    /// otherwise the matched value orders last. Pass [`natural()`](crate::natural)
    /// as `matched` for the default ordering within the matched partition.
    ///
    /// ```
    /// use threeway::{natural, Comparator};
    ///
    /// let negatives_last = natural().append(|n: &i32| *n < 0, natural());
    /// let mut xs = vec![3, -1, 2, -5];
    /// xs.sort_by(negatives_last.as_fn());
    /// assert_eq!(xs, vec![2, 3, -5, -1]);
    /// ```
    fn append<P, H>(self, predicate: P, matched: H) -> Append<Self, P, H, T>
    where
        Self: Sized,
        P: Fn(&T) -> bool,
        H: Comparator<T>,
    {
        Append {
            inner: self,
            predicate,
            matched,
            _t: PhantomData,
        }
    }

    /// Partitions values matched by `predicate` to sort before all unmatched
    /// values.
    ///
    /// The mirror image of [`append`](Comparator::append): matched values
    /// order first, and within each partition the same rules apply.
    ///
    /// ```
    /// use threeway::{natural, Comparator};
    ///
    /// let empties_first = natural().prepend(|s: &&str| s.is_empty(), natural());
    /// let mut xs = vec!["b", "", "a"];
    /// xs.sort_by(empties_first.as_fn());
    /// assert_eq!(xs, vec!["", "a", "b"]);
    /// ```
    fn prepend<P, H>(self, predicate: P, matched: H) -> Prepend<Self, P, H, T>
    where
        Self: Sized,
        P: Fn(&T) -> bool,
        H: Comparator<T>,
    {
        Prepend {
            inner: self,
            predicate,
            matched,
            _t: PhantomData,
        }
    }

    /// Breaks ties with another comparator.
    ///
    /// The receiver is consulted first and its result returned whenever it is
    /// decisive; `tie_break` runs only on `Equal`, and is not evaluated
    /// otherwise. Chains of any length are built by repeated calls, each
    /// stage consulted only when every earlier stage tied.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use threeway::{on, Comparator};
    ///
    /// // By name ascending, then by age descending.
    /// let cmp = on(|p: &(&str, u32)| p.0).then(on(|p: &(&str, u32)| p.1).reverse());
    /// assert_eq!(cmp.compare(&("alice", 30), &("alice", 25)), Ordering::Less);
    /// assert_eq!(cmp.compare(&("bob", 1), &("alice", 99)), Ordering::Greater);
    /// ```
    fn then<H>(self, tie_break: H) -> Then<Self, H, T>
    where
        Self: Sized,
        H: Comparator<T>,
    {
        Then {
            first: self,
            tie_break,
            _t: PhantomData,
        }
    }

    /// Borrows this comparator as a plain comparison closure.
    ///
    /// The bridge to APIs that take a function, such as [`slice::sort_by`]:
    ///
    /// ```
    /// use threeway::{on, Comparator};
    ///
    /// let mut words = vec!["pear", "Fig", "apple"];
    /// words.sort_by(on(|s: &&str| s.to_lowercase()).as_fn());
    /// assert_eq!(words, vec!["apple", "Fig", "pear"]);
    /// ```
    fn as_fn(&self) -> impl Fn(&T, &T) -> Ordering + '_
    where
        Self: Sized,
    {
        move |a, b| self.compare(a, b)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The default ordering: `PartialOrd` with incomparable pairs treated as ties.
///
/// Pairs for which `partial_cmp` returns `None` (for example a float against
/// NaN) compare `Equal`. This keeps the default usable on `f64` and friends
/// at the cost of a non-strict order; supply your own comparator when the
/// distinction matters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: PartialOrd + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

/// Returns the default ordering as a comparator value.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use threeway::{natural, Comparator};
///
/// assert_eq!(natural().compare(&10, &20), Ordering::Less);
/// assert_eq!(natural().compare(&10, &10), Ordering::Equal);
/// assert_eq!(natural().compare(&f64::NAN, &1.0), Ordering::Equal);
/// ```
pub fn natural() -> Natural {
    Natural
}

/// Builds a comparator that orders by a projected key using the default
/// ordering.
///
/// Shorthand for `natural().key(transform)`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use threeway::{on, Comparator};
///
/// let caseless = on(|s: &&str| s.to_lowercase());
/// assert_eq!(caseless.compare(&"ZZZ", &"aaa"), Ordering::Greater);
/// ```
pub fn on<T, K, F>(transform: F) -> Key<Natural, K, F>
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    natural().key(transform)
}
