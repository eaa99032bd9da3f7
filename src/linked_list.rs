//! A singly linked list that can append in constant time.
//!
//! Nodes are heap allocated and linked through raw pointers so that the list can keep a pointer
//! to its last node alongside the owning chain from the head.
//!
//! # Examples
//!
//! ```
//! use dskit::linked_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.insert_at_end(2);
//! list.insert_at_end(3);
//! list.push_front(1);
//!
//! assert_eq!(list.traverse().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(list.remove_head(), Ok(1));
//! assert_eq!(list.len(), 2);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::collection::Collection;
use crate::error::{Error, Result};

/// A singly linked list. Owns every node reachable from `head`; `tail` aliases the last of them.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a node and gives up ownership of it. The list must eventually reclaim it with
    /// `Box::from_raw`.
    fn leak(value: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, next })))
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        while let Some(head) = self.head {
            // SAFETY: Every node reachable from `head` was allocated by `Node::leak` and is owned
            // solely by this list. Advancing `head` before the box drops means it's freed once.
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
        }
        self.tail = None;
    }
}

impl<T> LinkedList<T> {
    /// An empty list.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Makes `value` the new head.
    pub fn push_front(&mut self, value: T) {
        let node = Node::leak(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Makes `value` the new tail.
    pub fn insert_at_end(&mut self, value: T) {
        let node = Node::leak(value, None);
        match self.tail {
            // SAFETY: `tail` points at the last node owned by this list and we hold `&mut self`,
            // so nothing else is reading or writing it.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Unlinks the head and returns its value.
    pub fn remove_head(&mut self) -> Result<T> {
        let head = self
            .head
            .ok_or_else(|| Error::empty("linked list", "remove"))?;

        // SAFETY: `head` was allocated by `Node::leak` and is owned by this list. It's unlinked
        // right after this so no pointer to it survives (`tail` is cleared if it was the last).
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        Ok(node.value)
    }

    /// The first value, if any.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: The head is a live node owned by this list and `&self` keeps it from being
        // freed or written while the reference exists.
        self.head.map(|head| unsafe { &(*head.as_ptr()).value })
    }

    /// Visits every value from head to tail.
    pub fn traverse(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Same as [`LinkedList::traverse`].
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _list: PhantomData,
        }
    }

    /// Number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds nothing.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.insert_at_end(value);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Inserts at the head and removes from the head, like a stack.
impl<T> Collection<T> for LinkedList<T> {
    fn add(&mut self, value: T) -> Result<()> {
        self.push_front(value);
        Ok(())
    }

    fn remove(&mut self) -> Result<T> {
        self.remove_head()
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkedList({:?})", self)
    }
}

/// Iterator over the values of a [`LinkedList`], head to tail.
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _list: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|ptr| {
            // SAFETY: The iterator borrows the list for `'a`, so every node it can reach stays
            // alive and unmodified for that long.
            let node = unsafe { &*ptr.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
