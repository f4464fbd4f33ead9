#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use core::fmt;
use node::Link;
use node::Node;
use node::Nodes;

/// The error returned by the `try_` operations when the parent allocator
/// cannot make room for another node.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocError;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

mod int;

mod node;

pub use int::IntList;

pub use int::NOT_FOUND;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly linked list.
///
/// Positions are zero-based. Reaching position `i` walks `i` links from the
/// head, so positional operations cost O(i). Out-of-range reads return
/// [`None`] and out-of-range insertions and deletions do nothing.
///
/// The nodes are stored in an arena allocated from `A`.

pub struct List<T, A: Allocator = Global> {
  nodes: Nodes<T, A>,
  head: Option<Link>,
  len: usize,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

enum Error {
  ReserveFailed,
}

enum Panicked { }

trait Fail: Sized {
  fn fail<T>(_: Error) -> Result<T, Self>;
}

struct Values<'a, T, A: Allocator> {
  nodes: &'a Nodes<T, A>,
  next: Option<Link>,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(e: Error) -> Result<T, Self> {
    match e {
      Error::ReserveFailed =>
        panic!("slist: failed to allocate space for a node!"),
    }
  }
}

impl Fail for AllocError {
  #[inline(always)]
  fn fail<T>(_: Error) -> Result<T, Self> {
    Err(AllocError)
  }
}

impl fmt::Display for AllocError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("memory allocation failed")
  }
}

impl core::error::Error for AllocError { }

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

fn add_at_head<T, A, E>(list: &mut List<T, A>, value: T) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  let link = list.nodes.insert(Node { value, next: list.head })?;
  list.head = Some(link);
  list.len = list.len + 1;
  Ok(())
}

fn add_at_tail<T, A, E>(list: &mut List<T, A>, value: T) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  let Some(mut last) = list.head else {
    return add_at_head(list, value);
  };

  while let Some(next) = list.nodes.get(last).next {
    last = next;
  }

  let link = list.nodes.insert(Node { value, next: None })?;
  list.nodes.get_mut(last).next = Some(link);
  list.len = list.len + 1;
  Ok(())
}

fn add_at_index<T, A, E>(list: &mut List<T, A>, index: usize, value: T) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  if index == 0 {
    return add_at_head(list, value);
  }

  if index == list.len {
    return add_at_tail(list, value);
  }

  if index > list.len {
    return Ok(());
  }

  let Some(prev) = list.link_at(index - 1) else {
    return Ok(());
  };

  let next = list.nodes.get(prev).next;
  let link = list.nodes.insert(Node { value, next })?;
  list.nodes.get_mut(prev).next = Some(link);
  list.len = list.len + 1;
  Ok(())
}

impl<T> List<T, Global> {
  /// Creates an empty list backed by the global allocator. No memory is
  /// allocated until the first insertion.

  pub fn new() -> Self {
    Self::new_in(Global)
  }

  /// Creates an empty list backed by the global allocator, with room for
  /// `capacity` nodes before the arena has to grow.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity(capacity: usize) -> Self {
    Self::with_capacity_in(capacity, Global)
  }
}

impl<T, A: Allocator> List<T, A> {
  /// Creates an empty list whose nodes will be allocated from `allocator`.

  pub fn new_in(allocator: A) -> Self {
    Self { nodes: Nodes::new_in(allocator), head: None, len: 0, }
  }

  /// Creates an empty list with room for `capacity` nodes, allocated from
  /// `allocator`.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity_in(capacity: usize, allocator: A) -> Self {
    Self { nodes: Nodes::with_capacity_in(capacity, allocator), head: None, len: 0, }
  }

  /// A reference to the parent allocator.

  pub fn allocator(&self) -> &A {
    self.nodes.allocator()
  }

  /// The number of elements in the list.

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Whether the list has no elements.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  fn link_at(&self, index: usize) -> Option<Link> {
    if ! (index < self.len) {
      return None;
    }

    let mut link = self.head?;
    let mut i = 0;

    while i < index {
      link = self.nodes.get(link).next?;
      i = i + 1;
    }

    Some(link)
  }

  fn values(&self) -> Values<'_, T, A> {
    Values { nodes: &self.nodes, next: self.head, }
  }

  /// The element at position `index`, or `None` if `index >= len`.

  pub fn get(&self, index: usize) -> Option<&T> {
    let link = self.link_at(index)?;
    Some(&self.nodes.get(link).value)
  }

  /// A mutable reference to the element at position `index`, or `None` if
  /// `index >= len`.

  pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
    let link = self.link_at(index)?;
    Some(&mut self.nodes.get_mut(link).value)
  }

  /// Inserts `value` before the first element.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn add_at_head(&mut self, value: T) {
    unwrap(add_at_head(self, value))
  }

  /// Inserts `value` before the first element.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged.

  pub fn try_add_at_head(&mut self, value: T) -> Result<(), AllocError> {
    add_at_head(self, value)
  }

  /// Appends `value` after the last element. This walks the whole list.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn add_at_tail(&mut self, value: T) {
    unwrap(add_at_tail(self, value))
  }

  /// Appends `value` after the last element. This walks the whole list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged.

  pub fn try_add_at_tail(&mut self, value: T) -> Result<(), AllocError> {
    add_at_tail(self, value)
  }

  /// Inserts `value` so that it ends up at position `index`.
  ///
  /// An `index` equal to the length appends. An `index` greater than the
  /// length is ignored and `value` is dropped.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn add_at_index(&mut self, index: usize, value: T) {
    unwrap(add_at_index(self, index, value))
  }

  /// Inserts `value` so that it ends up at position `index`, with the same
  /// index handling as [`add_at_index`](Self::add_at_index).
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged.

  pub fn try_add_at_index(&mut self, index: usize, value: T) -> Result<(), AllocError> {
    add_at_index(self, index, value)
  }

  /// Removes the element at position `index` and returns it, or returns
  /// `None` if `index >= len`.

  pub fn remove(&mut self, index: usize) -> Option<T> {
    if ! (index < self.len) {
      return None;
    }

    let node =
      if index == 0 {
        let head = self.head?;
        let node = self.nodes.remove(head);
        self.head = node.next;
        node
      } else {
        let prev = self.link_at(index - 1)?;
        let link = self.nodes.get(prev).next?;
        let node = self.nodes.remove(link);
        self.nodes.get_mut(prev).next = node.next;
        node
      };

    self.len = self.len - 1;

    if self.len == 0 {
      self.nodes.clear();
    }

    Some(node.value)
  }

  /// Deletes the element at position `index`. An out-of-range `index` is
  /// ignored.

  pub fn delete_at_index(&mut self, index: usize) {
    let _ = self.remove(index);
  }

  /// Drops every element. The arena keeps its capacity.

  pub fn clear(&mut self) {
    self.nodes.clear();
    self.head = None;
    self.len = 0;
  }
}

impl<T> Default for List<T, Global> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.values()).finish()
  }
}

impl<T, A, B> PartialEq<List<T, B>> for List<T, A>
where
  T: PartialEq,
  A: Allocator,
  B: Allocator,
{
  fn eq(&self, other: &List<T, B>) -> bool {
    self.len == other.len && self.values().eq(other.values())
  }
}

impl<T: Eq, A: Allocator> Eq for List<T, A> { }

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Values                                                                     //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T, A: Allocator> Iterator for Values<'a, T, A> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.nodes.get(self.next?);
    self.next = node.next;
    Some(&node.value)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Tests                                                                      //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////
