//! A uniform interface over the linear collections.

use crate::error::Result;

/// Something elements can be added to and taken back out of. Which element `remove` hands back
/// is up to the collection: the most recent for a [`Stack`](crate::stack::Stack), the oldest
/// for a [`Queue`](crate::queue::Queue), the head for a
/// [`LinkedList`](crate::linked_list::LinkedList).
///
/// # Examples
///
/// ```
/// use dskit::collection::Collection;
/// use dskit::queue::Queue;
/// use dskit::stack::Stack;
///
/// fn drain<C: Collection<i32>>(mut c: C) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Ok(v) = c.remove() {
///         out.push(v);
///     }
///     out
/// }
///
/// assert_eq!(drain((1..=3).collect::<Stack<_>>()), [3, 2, 1]);
/// assert_eq!(drain((1..=3).collect::<Queue<_>>()), [1, 2, 3]);
/// ```
pub trait Collection<T> {
    /// Adds an element.
    fn add(&mut self, value: T) -> Result<()>;

    /// Removes and returns an element, failing with [`Error::Empty`](crate::error::Error::Empty)
    /// when there is none.
    fn remove(&mut self) -> Result<T>;

    /// Number of elements held.
    fn len(&self) -> usize;

    /// Whether no elements are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
