//! The integer list.
//!
//! [`IntList`] keeps the classic integer-only interface: indices are signed,
//! a negative index is treated like any other out-of-range index, and `get`
//! reports a miss with [`NOT_FOUND`]. Because `-1` is also a legal element,
//! a stored `-1` cannot be told apart from a miss. Use [`List`] with
//! [`List::get`] when that matters.

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use core::fmt;
use crate::List;

/// The value [`IntList::get`] returns for an out-of-range index.

pub const NOT_FOUND: i64 = -1;

/// A singly linked list of integers with signed indices.

pub struct IntList<A: Allocator = Global>(List<i64, A>);

#[inline(always)]
fn position(i: isize) -> Option<usize> {
  usize::try_from(i).ok()
}

impl IntList<Global> {
  /// Creates an empty list backed by the global allocator.

  pub fn new() -> Self {
    Self(List::new())
  }
}

impl<A: Allocator> IntList<A> {
  /// Creates an empty list whose nodes will be allocated from `allocator`.

  pub fn new_in(allocator: A) -> Self {
    Self(List::new_in(allocator))
  }

  /// The number of elements in the list.

  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Whether the list has no elements.

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// The underlying list.

  pub fn as_list(&self) -> &List<i64, A> {
    &self.0
  }

  /// The element at position `index`, or [`NOT_FOUND`] if `index` is
  /// negative or not less than the length.

  pub fn get(&self, index: isize) -> i64 {
    let Some(i) = position(index) else {
      return NOT_FOUND;
    };

    match self.0.get(i) {
      Some(&x) => x,
      None => NOT_FOUND,
    }
  }

  /// Inserts `value` before the first element.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn add_at_head(&mut self, value: i64) {
    self.0.add_at_head(value)
  }

  /// Appends `value` after the last element.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn add_at_tail(&mut self, value: i64) {
    self.0.add_at_tail(value)
  }

  /// Inserts `value` so that it ends up at position `index`. A negative
  /// `index`, or one greater than the length, is ignored.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn add_at_index(&mut self, index: isize, value: i64) {
    if let Some(i) = position(index) {
      self.0.add_at_index(i, value)
    }
  }

  /// Deletes the element at position `index`. A negative `index`, or one
  /// not less than the length, is ignored.

  pub fn delete_at_index(&mut self, index: isize) {
    if let Some(i) = position(index) {
      self.0.delete_at_index(i)
    }
  }
}

impl Default for IntList<Global> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A: Allocator> From<List<i64, A>> for IntList<A> {
  fn from(list: List<i64, A>) -> Self {
    Self(list)
  }
}

impl<A: Allocator> fmt::Debug for IntList<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("IntList").field(&self.0).finish()
  }
}

impl<A: Allocator, B: Allocator> PartialEq<IntList<B>> for IntList<A> {
  fn eq(&self, other: &IntList<B>) -> bool {
    self.0 == other.0
  }
}

impl<A: Allocator> Eq for IntList<A> { }
