//! Comparator adapters returned by the combinator methods on [`Comparator`].
//!
//! Each adapter owns the comparator(s) and callbacks it was built from and
//! closes over them for the rest of its life. Adapters never mutate their
//! parts; composing a comparator always allocates a new value, so a receiver
//! can be kept around by cloning it before composition.
//!
//! Every adapter pins the compared type in its own generics (a phantom
//! parameter where no field mentions it). Comparators like
//! [`Natural`](crate::Natural) implement [`Comparator`] for infinitely many
//! types, so an adapter that dropped the type would leave
//! `natural().reverse()` with nothing to infer it from.

use crate::core::Comparator;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Adapter returned by [`Comparator::reverse`].
///
/// Compares `(b, a)` with the inner comparator, flipping the result exactly:
/// ties stay `Equal`.
pub struct Reversed<C, T: ?Sized> {
    pub(crate) inner: C,
    pub(crate) _t: PhantomData<fn(&T)>,
}

impl<C: Clone, T: ?Sized> Clone for Reversed<C, T> {
    fn clone(&self) -> Self {
        Reversed {
            inner: self.inner.clone(),
            _t: PhantomData,
        }
    }
}

impl<C: Copy, T: ?Sized> Copy for Reversed<C, T> {}

impl<C: fmt::Debug, T: ?Sized> fmt::Debug for Reversed<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reversed").field("inner", &self.inner).finish()
    }
}

impl<T, C> Comparator<T> for Reversed<C, T>
where
    T: ?Sized,
    C: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner.compare(b, a)
    }
}

/// Adapter returned by [`Comparator::key`].
///
/// Projects both arguments through the transform and hands the projected keys
/// to the inner comparator. The transform runs exactly once per argument per
/// comparison.
pub struct Key<C, K, F> {
    pub(crate) inner: C,
    pub(crate) transform: F,
    pub(crate) _key: PhantomData<fn() -> K>,
}

impl<C: Clone, K, F: Clone> Clone for Key<C, K, F> {
    fn clone(&self) -> Self {
        Key {
            inner: self.inner.clone(),
            transform: self.transform.clone(),
            _key: PhantomData,
        }
    }
}

impl<C: fmt::Debug, K, F> fmt::Debug for Key<C, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<U, K, C, F> Comparator<U> for Key<C, K, F>
where
    U: ?Sized,
    C: Comparator<K>,
    F: Fn(&U) -> K,
{
    fn compare(&self, a: &U, b: &U) -> Ordering {
        self.inner.compare(&(self.transform)(a), &(self.transform)(b))
    }
}

/// Adapter returned by [`Comparator::append`].
///
/// Splits the input into matched and unmatched partitions, putting matched
/// values after unmatched ones. Within the matched partition the `matched`
/// comparator decides; within the unmatched partition the inner one does.
pub struct Append<C, P, H, T: ?Sized> {
    pub(crate) inner: C,
    pub(crate) predicate: P,
    pub(crate) matched: H,
    pub(crate) _t: PhantomData<fn(&T)>,
}

impl<C: Clone, P: Clone, H: Clone, T: ?Sized> Clone for Append<C, P, H, T> {
    fn clone(&self) -> Self {
        Append {
            inner: self.inner.clone(),
            predicate: self.predicate.clone(),
            matched: self.matched.clone(),
            _t: PhantomData,
        }
    }
}

impl<C: Copy, P: Copy, H: Copy, T: ?Sized> Copy for Append<C, P, H, T> {}

impl<C: fmt::Debug, P, H: fmt::Debug, T: ?Sized> fmt::Debug for Append<C, P, H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Append")
            .field("inner", &self.inner)
            .field("matched", &self.matched)
            .finish_non_exhaustive()
    }
}

impl<T, C, P, H> Comparator<T> for Append<C, P, H, T>
where
    T: ?Sized,
    C: Comparator<T>,
    P: Fn(&T) -> bool,
    H: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match ((self.predicate)(a), (self.predicate)(b)) {
            (true, true) => self.matched.compare(a, b),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.inner.compare(a, b),
        }
    }
}

/// Adapter returned by [`Comparator::prepend`].
///
/// Like [`Append`] with the partitions swapped: matched values sort before
/// unmatched ones.
pub struct Prepend<C, P, H, T: ?Sized> {
    pub(crate) inner: C,
    pub(crate) predicate: P,
    pub(crate) matched: H,
    pub(crate) _t: PhantomData<fn(&T)>,
}

impl<C: Clone, P: Clone, H: Clone, T: ?Sized> Clone for Prepend<C, P, H, T> {
    fn clone(&self) -> Self {
        Prepend {
            inner: self.inner.clone(),
            predicate: self.predicate.clone(),
            matched: self.matched.clone(),
            _t: PhantomData,
        }
    }
}

impl<C: Copy, P: Copy, H: Copy, T: ?Sized> Copy for Prepend<C, P, H, T> {}

impl<C: fmt::Debug, P, H: fmt::Debug, T: ?Sized> fmt::Debug for Prepend<C, P, H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prepend")
            .field("inner", &self.inner)
            .field("matched", &self.matched)
            .finish_non_exhaustive()
    }
}

impl<T, C, P, H> Comparator<T> for Prepend<C, P, H, T>
where
    T: ?Sized,
    C: Comparator<T>,
    P: Fn(&T) -> bool,
    H: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match ((self.predicate)(a), (self.predicate)(b)) {
            (true, true) => self.matched.compare(a, b),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.inner.compare(a, b),
        }
    }
}

/// Adapter returned by [`Comparator::then`].
///
/// Consults the first comparator and returns its result unless it is
/// `Equal`, in which case the tie-break comparator decides. The tie-break
/// stage is not evaluated at all when the first stage is decisive.
pub struct Then<C, H, T: ?Sized> {
    pub(crate) first: C,
    pub(crate) tie_break: H,
    pub(crate) _t: PhantomData<fn(&T)>,
}

impl<C: Clone, H: Clone, T: ?Sized> Clone for Then<C, H, T> {
    fn clone(&self) -> Self {
        Then {
            first: self.first.clone(),
            tie_break: self.tie_break.clone(),
            _t: PhantomData,
        }
    }
}

impl<C: Copy, H: Copy, T: ?Sized> Copy for Then<C, H, T> {}

impl<C: fmt::Debug, H: fmt::Debug, T: ?Sized> fmt::Debug for Then<C, H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Then")
            .field("first", &self.first)
            .field("tie_break", &self.tie_break)
            .finish()
    }
}

impl<T, C, H> Comparator<T> for Then<C, H, T>
where
    T: ?Sized,
    C: Comparator<T>,
    H: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.tie_break.compare(a, b),
            decided => decided,
        }
    }
}
