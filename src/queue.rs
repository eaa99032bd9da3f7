//! A FIFO queue backed by a `VecDeque`.

use std::collections::VecDeque;
use std::fmt;

use crate::collection::Collection;
use crate::error::{Error, Result};

/// First in, first out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// An empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Adds `value` at the back.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Takes the front element off.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items
            .pop_front()
            .ok_or_else(|| Error::empty("queue", "dequeue"))
    }

    /// Looks at the front element without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.items
            .front()
            .ok_or_else(|| Error::empty("queue", "peek"))
    }

    /// Whether the queue holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Same as [`Queue::len`].
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Collection<T> for Queue<T> {
    fn add(&mut self, value: T) -> Result<()> {
        self.enqueue(value);
        Ok(())
    }

    fn remove(&mut self) -> Result<T> {
        self.dequeue()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> fmt::Display for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Queue(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", item)?;
        }
        f.write_str(")")
    }
}
