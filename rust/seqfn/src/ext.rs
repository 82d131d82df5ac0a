//! Method-call form of the sequence operations.
//!
//! This module provides the [`SequenceExt`] trait, which exposes every function
//! in [`ops`](crate::ops) as a method on `Vec<T>`. Method names are chosen so
//! that they never resolve to an inherent `Vec` or slice method of the same
//! name; each one delegates to the free function and behaves identically.

use crate::error::PopError;
use crate::ops;
use crate::ordered::Ordered;
use crate::result::Result;

/// Extension trait adding the sequence operations to `Vec<T>`.
///
/// ```
/// use seqfn::SequenceExt;
///
/// let numbers = vec![1, 2, 3, 4, 5]
///     .filter_by(|&n| n > 2)
///     .map_items(|n| n * 10)
///     .pushed(7);
/// assert_eq!(numbers, [30, 40, 50, 7]);
///
/// let (popped, rest) = numbers.pop_at(1);
/// assert_eq!(popped, 40);
/// assert_eq!(rest.max_item(), 50);
/// ```
pub trait SequenceExt<T>: Sized {
    /// See [`ops::for_each`].
    fn for_each_item<F: FnMut(&T)>(&self, f: F);

    /// See [`ops::map`].
    fn map_items<F: FnMut(T) -> T>(self, f: F) -> Self;

    /// See [`ops::find`].
    fn find_item<F: FnMut(&T) -> bool>(&self, pred: F) -> Option<&T>;

    /// See [`ops::find_index`].
    fn find_item_index<F: FnMut(&T) -> bool>(&self, pred: F) -> Option<usize>;

    /// See [`ops::filter`].
    fn filter_by<F: FnMut(&T) -> bool>(self, pred: F) -> Self;

    /// See [`ops::concat`].
    fn concat_with<I: IntoIterator<Item = T>>(self, tail: I) -> Self;

    /// See [`ops::every`].
    fn every_item<F: FnMut(&T) -> bool>(&self, pred: F) -> bool;

    /// See [`ops::any`].
    fn any_item<F: FnMut(&T) -> bool>(&self, pred: F) -> bool;

    /// See [`ops::index`].
    fn index_of(&self, wanted: &T) -> Option<usize>
    where
        T: PartialEq;

    /// See [`ops::last_index_of`].
    fn last_index_of(&self, wanted: &T) -> Option<usize>
    where
        T: PartialEq;

    /// See [`ops::reduce`].
    fn reduce_items<F: FnMut(T, T) -> T>(&self, f: F) -> T
    where
        T: Default + Clone;

    /// See [`ops::reverse`].
    fn reversed(self) -> Self;

    /// See [`ops::pop`].
    fn pop_at(self, index: usize) -> (T, Self);

    /// See [`ops::try_pop`].
    fn try_pop_at(self, index: usize) -> std::result::Result<(T, Self), PopError<T>>;

    /// See [`ops::push`].
    fn pushed(self, item: T) -> Self;

    /// See [`ops::includes`].
    fn includes(&self, wanted: &T) -> bool
    where
        T: PartialEq;

    /// See [`ops::max`].
    fn max_item(&self) -> T
    where
        T: Ordered + Clone;

    /// See [`ops::try_max`].
    fn try_max_item(&self) -> Result<T>
    where
        T: Ordered + Clone;

    /// See [`ops::min`].
    fn min_item(&self) -> T
    where
        T: Ordered + Clone;

    /// See [`ops::try_min`].
    fn try_min_item(&self) -> Result<T>
    where
        T: Ordered + Clone;

    /// See [`ops::replace`].
    fn replace_first(self, discard: &T, replacement: T) -> Self
    where
        T: PartialEq;

    /// See [`ops::replace_all`].
    fn replace_every(self, discard: &T, replacement: T) -> Self
    where
        T: PartialEq + Clone;

    /// See [`ops::delete`].
    fn delete_first(self, discard: &T) -> Self
    where
        T: PartialEq;

    /// See [`ops::delete_all`].
    fn delete_every(self, discard: &T) -> Self
    where
        T: PartialEq;
}

impl<T> SequenceExt<T> for Vec<T> {
    fn for_each_item<F: FnMut(&T)>(&self, f: F) {
        ops::for_each(self, f)
    }

    fn map_items<F: FnMut(T) -> T>(self, f: F) -> Self {
        ops::map(self, f)
    }

    fn find_item<F: FnMut(&T) -> bool>(&self, pred: F) -> Option<&T> {
        ops::find(self, pred)
    }

    fn find_item_index<F: FnMut(&T) -> bool>(&self, pred: F) -> Option<usize> {
        ops::find_index(self, pred)
    }

    fn filter_by<F: FnMut(&T) -> bool>(self, pred: F) -> Self {
        ops::filter(self, pred)
    }

    fn concat_with<I: IntoIterator<Item = T>>(self, tail: I) -> Self {
        ops::concat(self, tail)
    }

    fn every_item<F: FnMut(&T) -> bool>(&self, pred: F) -> bool {
        ops::every(self, pred)
    }

    fn any_item<F: FnMut(&T) -> bool>(&self, pred: F) -> bool {
        ops::any(self, pred)
    }

    fn index_of(&self, wanted: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        ops::index(self, wanted)
    }

    fn last_index_of(&self, wanted: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        ops::last_index_of(self, wanted)
    }

    fn reduce_items<F: FnMut(T, T) -> T>(&self, f: F) -> T
    where
        T: Default + Clone,
    {
        ops::reduce(self, f)
    }

    fn reversed(self) -> Self {
        ops::reverse(self)
    }

    #[track_caller]
    fn pop_at(self, index: usize) -> (T, Self) {
        ops::pop(self, index)
    }

    fn try_pop_at(self, index: usize) -> std::result::Result<(T, Self), PopError<T>> {
        ops::try_pop(self, index)
    }

    fn pushed(self, item: T) -> Self {
        ops::push(self, item)
    }

    fn includes(&self, wanted: &T) -> bool
    where
        T: PartialEq,
    {
        ops::includes(self, wanted)
    }

    #[track_caller]
    fn max_item(&self) -> T
    where
        T: Ordered + Clone,
    {
        ops::max(self)
    }

    fn try_max_item(&self) -> Result<T>
    where
        T: Ordered + Clone,
    {
        ops::try_max(self)
    }

    #[track_caller]
    fn min_item(&self) -> T
    where
        T: Ordered + Clone,
    {
        ops::min(self)
    }

    fn try_min_item(&self) -> Result<T>
    where
        T: Ordered + Clone,
    {
        ops::try_min(self)
    }

    fn replace_first(self, discard: &T, replacement: T) -> Self
    where
        T: PartialEq,
    {
        ops::replace(self, discard, replacement)
    }

    fn replace_every(self, discard: &T, replacement: T) -> Self
    where
        T: PartialEq + Clone,
    {
        ops::replace_all(self, discard, replacement)
    }

    fn delete_first(self, discard: &T) -> Self
    where
        T: PartialEq,
    {
        ops::delete(self, discard)
    }

    fn delete_every(self, discard: &T) -> Self
    where
        T: PartialEq,
    {
        ops::delete_all(self, discard)
    }
}
