//! Free functions over owned and borrowed sequences.
//!
//! Functions that change a sequence take a `Vec<T>` by value and return the
//! resulting `Vec<T>`; the caller continues with the returned value. Functions
//! that only inspect a sequence borrow it as `&[T]`.
//!
//! Lookups that may come up empty return `Option`. Calls that violate a
//! precondition (popping past the end, taking the extreme of an empty
//! sequence) panic; each has a `try_` counterpart returning a `Result`.

use crate::error::{Error, PopError};
use crate::ordered::Ordered;
use crate::result::{Result, log_rejected};

/// Calls `f` on each element in order.
pub fn for_each<T, F>(items: &[T], mut f: F)
where
    F: FnMut(&T),
{
    for item in items {
        f(item);
    }
}

/// Replaces every element with `f(element)`, keeping order and length.
///
/// The input allocation is reused for the result.
pub fn map<T, F>(items: Vec<T>, f: F) -> Vec<T>
where
    F: FnMut(T) -> T,
{
    items.into_iter().map(f).collect()
}

/// Returns the first element satisfying `pred`, or `None`.
pub fn find<T, F>(items: &[T], mut pred: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    items.iter().find(|item| pred(*item))
}

/// Returns the position of the first element satisfying `pred`, or `None`.
pub fn find_index<T, F>(items: &[T], mut pred: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    items.iter().position(|item| pred(item))
}

/// Keeps only the elements satisfying `pred`, in their original order.
pub fn filter<T, F>(mut items: Vec<T>, pred: F) -> Vec<T>
where
    F: FnMut(&T) -> bool,
{
    items.retain(pred);
    items
}

/// Appends the elements of `tail` to `items`, preserving both orders.
pub fn concat<T, I>(mut items: Vec<T>, tail: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    items.extend(tail);
    items
}

/// Returns `true` if every element satisfies `pred`. An empty sequence yields `true`.
pub fn every<T, F>(items: &[T], mut pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().all(|item| pred(item))
}

/// Returns `true` if at least one element satisfies `pred`. An empty sequence
/// yields `false`.
pub fn any<T, F>(items: &[T], mut pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().any(|item| pred(item))
}

/// Position of the first element equal to `wanted`.
pub fn index<T: PartialEq>(items: &[T], wanted: &T) -> Option<usize> {
    items.iter().position(|item| item == wanted)
}

/// Position of the last element equal to `wanted`.
pub fn last_index_of<T: PartialEq>(items: &[T], wanted: &T) -> Option<usize> {
    items.iter().rposition(|item| item == wanted)
}

/// Left fold of `f(accumulator, element)` seeded with `T::default()`.
///
/// There is no caller-supplied initial value: the seed is always the default
/// ("zero") value of `T`, and an empty sequence returns it unchanged.
///
/// ```
/// use seqfn::ops::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3, 32, 57], |a, b| a + b), 95);
/// assert_eq!(reduce(&[] as &[i32], |a, b| a + b), 0);
/// ```
pub fn reduce<T, F>(items: &[T], mut f: F) -> T
where
    T: Default + Clone,
    F: FnMut(T, T) -> T,
{
    items
        .iter()
        .fold(T::default(), |acc, item| f(acc, item.clone()))
}

/// Reverses the order of the elements.
pub fn reverse<T>(mut items: Vec<T>) -> Vec<T> {
    items.reverse();
    items
}

/// Removes the element at `index`, returning it together with the remaining
/// elements in their original order.
///
/// # Panics
///
/// Panics if `index >= items.len()`.
#[track_caller]
pub fn pop<T>(items: Vec<T>, index: usize) -> (T, Vec<T>) {
    match pop_unlogged(items, index) {
        Ok(res) => res,
        Err(e) => panic!("{e}"),
    }
}

/// Checked form of [`pop`]. On failure the sequence is returned inside the error.
pub fn try_pop<T>(
    items: Vec<T>,
    index: usize,
) -> std::result::Result<(T, Vec<T>), PopError<T>> {
    pop_unlogged(items, index).inspect_err(|_e| {
        #[cfg(feature = "log")]
        log::debug!("rejected input: {_e}");
    })
}

fn pop_unlogged<T>(
    mut items: Vec<T>,
    index: usize,
) -> std::result::Result<(T, Vec<T>), PopError<T>> {
    if index >= items.len() {
        return Err(PopError::new(index, items));
    }
    let item = items.remove(index);
    Ok((item, items))
}

/// Appends `item` at the end.
pub fn push<T>(mut items: Vec<T>, item: T) -> Vec<T> {
    items.push(item);
    items
}

/// Returns `true` if any element equals `wanted`.
pub fn includes<T: PartialEq>(items: &[T], wanted: &T) -> bool {
    items.iter().any(|item| item == wanted)
}

/// Returns the greatest element. Among equal maxima the first one wins.
///
/// # Panics
///
/// Panics if `items` is empty.
#[track_caller]
pub fn max<T: Ordered + Clone>(items: &[T]) -> T {
    unwrap_or_panic(max_unlogged(items))
}

/// Checked form of [`max`].
pub fn try_max<T: Ordered + Clone>(items: &[T]) -> Result<T> {
    max_unlogged(items).inspect_err(log_rejected)
}

/// Returns the least element. Among equal minima the first one wins.
///
/// # Panics
///
/// Panics if `items` is empty.
#[track_caller]
pub fn min<T: Ordered + Clone>(items: &[T]) -> T {
    unwrap_or_panic(min_unlogged(items))
}

/// Checked form of [`min`].
pub fn try_min<T: Ordered + Clone>(items: &[T]) -> Result<T> {
    min_unlogged(items).inspect_err(log_rejected)
}

fn max_unlogged<T: Ordered + Clone>(items: &[T]) -> Result<T> {
    crate::verify_non_empty!("max", items);
    Ok(extreme(items, |item, best| item > best))
}

fn min_unlogged<T: Ordered + Clone>(items: &[T]) -> Result<T> {
    crate::verify_non_empty!("min", items);
    Ok(extreme(items, |item, best| item < best))
}

/// Replaces the first element equal to `discard` with `replacement`.
///
/// Every position is scanned, including the last one.
pub fn replace<T: PartialEq>(mut items: Vec<T>, discard: &T, replacement: T) -> Vec<T> {
    if let Some(slot) = items.iter_mut().find(|item| **item == *discard) {
        *slot = replacement;
    }
    items
}

/// Replaces every element equal to `discard` with a clone of `replacement`.
pub fn replace_all<T: PartialEq + Clone>(
    mut items: Vec<T>,
    discard: &T,
    replacement: T,
) -> Vec<T> {
    for slot in items.iter_mut().filter(|item| **item == *discard) {
        *slot = replacement.clone();
    }
    items
}

/// Removes the first element equal to `discard`; returns the sequence unchanged
/// if there is none.
pub fn delete<T: PartialEq>(mut items: Vec<T>, discard: &T) -> Vec<T> {
    if let Some(idx) = index(&items, discard) {
        items.remove(idx);
    }
    items
}

/// Removes every element equal to `discard`.
pub fn delete_all<T: PartialEq>(mut items: Vec<T>, discard: &T) -> Vec<T> {
    items.retain(|item| item != discard);
    items
}

/// Linear scan that keeps the current best unless `beats(item, best)` holds.
/// `items` must not be empty.
fn extreme<T, F>(items: &[T], beats: F) -> T
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut best = &items[0];
    for item in &items[1..] {
        if beats(item, best) {
            best = item;
        }
    }
    best.clone()
}

#[inline]
#[track_caller]
fn unwrap_or_panic<T>(res: Result<T>) -> T {
    match res {
        Ok(value) => value,
        Err(e) => panic_on(e),
    }
}

#[cold]
#[track_caller]
fn panic_on(e: Error) -> ! {
    panic!("{e}")
}
