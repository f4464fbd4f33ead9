//! Node storage.
//!
//! Every list owns one `Nodes` arena. Nodes refer to each other by `Link`,
//! an index into the arena, instead of by pointer. Vacant slots form an
//! intrusive free list so that deletion followed by insertion does not grow
//! the arena.

use allocator_api2::alloc::Allocator;
use allocator_api2::vec::Vec;
use core::mem;
use crate::Error;
use crate::Fail;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Link(usize);

pub(crate) struct Node<T> {
  pub(crate) value: T,
  pub(crate) next: Option<Link>,
}

enum Entry<T> {
  Occupied(Node<T>),
  Vacant(Option<Link>),
}

pub(crate) struct Nodes<T, A: Allocator> {
  entries: Vec<Entry<T>, A>,
  free: Option<Link>,
}

impl<T, A: Allocator> Nodes<T, A> {
  pub(crate) fn new_in(allocator: A) -> Self {
    Self { entries: Vec::new_in(allocator), free: None, }
  }

  pub(crate) fn with_capacity_in(capacity: usize, allocator: A) -> Self {
    Self { entries: Vec::with_capacity_in(capacity, allocator), free: None, }
  }

  pub(crate) fn allocator(&self) -> &A {
    self.entries.allocator()
  }

  /// Stores `node` in a vacant slot if there is one, and at the end of the
  /// arena otherwise.

  pub(crate) fn insert<E: Fail>(&mut self, node: Node<T>) -> Result<Link, E> {
    if let Some(link) = self.free {
      let entry = &mut self.entries[link.0];
      let Entry::Vacant(next) = *entry else {
        unreachable!("slist: free list points at an occupied slot");
      };
      *entry = Entry::Occupied(node);
      self.free = next;
      return Ok(link);
    }

    if self.entries.try_reserve(1).is_err() {
      return E::fail(Error::ReserveFailed);
    }

    let link = Link(self.entries.len());
    self.entries.push(Entry::Occupied(node));
    Ok(link)
  }

  pub(crate) fn remove(&mut self, link: Link) -> Node<T> {
    let entry = mem::replace(&mut self.entries[link.0], Entry::Vacant(self.free));
    let Entry::Occupied(node) = entry else {
      unreachable!("slist: dangling link");
    };
    self.free = Some(link);
    node
  }

  #[inline(always)]
  pub(crate) fn get(&self, link: Link) -> &Node<T> {
    match &self.entries[link.0] {
      Entry::Occupied(node) => node,
      Entry::Vacant(_) => unreachable!("slist: dangling link"),
    }
  }

  #[inline(always)]
  pub(crate) fn get_mut(&mut self, link: Link) -> &mut Node<T> {
    match &mut self.entries[link.0] {
      Entry::Occupied(node) => node,
      Entry::Vacant(_) => unreachable!("slist: dangling link"),
    }
  }

  /// Drops every stored node. The arena keeps its capacity.

  pub(crate) fn clear(&mut self) {
    self.entries.clear();
    self.free = None;
  }

  #[cfg(test)]
  pub(crate) fn slots(&self) -> usize {
    self.entries.len()
  }
}
