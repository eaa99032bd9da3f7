//! A LIFO stack backed by a `Vec`, optionally bounded.
//!
//! # Examples
//!
//! ```
//! use dskit::stack::Stack;
//!
//! let mut stack = Stack::with_max_size(2);
//! stack.push(1).unwrap();
//! stack.push(2).unwrap();
//!
//! assert!(stack.push(3).is_err());
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.peek(), Ok(&1));
//! ```

use std::fmt;

use crate::collection::Collection;
use crate::error::{Error, Result};

/// Last in, first out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
    max_size: Option<usize>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// An empty, unbounded stack.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            max_size: None,
        }
    }

    /// An empty stack that refuses to hold more than `max_size` elements.
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_size),
            max_size: Some(max_size),
        }
    }

    /// The bound given to [`Stack::with_max_size`], if any.
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Puts `value` on top. Fails with [`Error::Full`] if the stack is bounded and full.
    pub fn push(&mut self, value: T) -> Result<()> {
        if let Some(capacity) = self.max_size {
            if self.items.len() >= capacity {
                log::warn!("rejected push onto a full stack (capacity {})", capacity);
                return Err(Error::Full { capacity });
            }
        }

        self.items.push(value);
        Ok(())
    }

    /// Takes the top element off.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or_else(|| Error::empty("stack", "pop"))
    }

    /// Looks at the top element without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or_else(|| Error::empty("stack", "peek"))
    }

    /// Whether the stack holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Same as [`Stack::len`].
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order onto an unbounded stack, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            max_size: None,
        }
    }
}

impl<T> Collection<T> for Stack<T> {
    fn add(&mut self, value: T) -> Result<()> {
        self.push(value)
    }

    fn remove(&mut self) -> Result<T> {
        self.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> fmt::Display for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stack(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", item)?;
        }
        f.write_str(")")
    }
}
