//! An unbalanced Binary Search Tree over keys alone.
//!
//! Keys are compared through [`TryOrd`] so that a tree of dynamically typed
//! [`Key`](crate::key::Key)s can refuse a key it cannot order instead of storing it somewhere
//! arbitrary. Equal keys are all kept: a key equal to a node's key is placed in that node's right
//! subtree.
//!
//! # Examples
//!
//! ```
//! use dskit::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 7, 1, 4] {
//!     tree.insert(key).unwrap();
//! }
//!
//! assert!(tree.contains(&4));
//! assert!(!tree.contains(&99));
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7]);
//! assert_eq!(tree.to_string(), "1 3 4 5 7");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use crate::error::Result;
use crate::key::TryOrd;

/// A Binary Search Tree. Keys can be inserted, searched for and visited in ascending order.
/// The tree never rebalances itself so inserting sorted keys produces a chain.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Unlink children before each node drops so a degenerate chain doesn't recurse once per
        // level.
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree by inserting every key from `keys` in order. Stops at the first key that
    /// cannot be ordered against the keys before it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dskit::key::Key;
    /// use dskit::tree::Tree;
    ///
    /// let tree = Tree::try_from_keys([3, 1, 2]).unwrap();
    /// assert_eq!(tree.len(), 3);
    ///
    /// let mixed = Tree::try_from_keys([Key::Int(1), Key::from("one")]);
    /// assert!(mixed.is_err());
    /// ```
    pub fn try_from_keys<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: TryOrd,
    {
        let mut tree = Self::new();
        for key in keys {
            tree.insert(key)?;
        }
        Ok(tree)
    }

    /// Inserts `key` into the tree. Keys less than a node go into its left subtree, everything
    /// else (including equal keys) goes into its right subtree.
    ///
    /// If `key` cannot be compared with a key on its path the error is returned and the tree is
    /// left exactly as it was. A key that can't even be compared with itself (such as a NaN
    /// [`Key::Float`](crate::key::Key::Float)) is refused as the first key too, since it would
    /// block every later insert.
    ///
    /// # Examples
    ///
    /// ```
    /// use dskit::error::Error;
    /// use dskit::key::Key;
    /// use dskit::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(Key::Int(1)).unwrap();
    ///
    /// let err = tree.insert(Key::from("two")).unwrap_err();
    /// assert_eq!(err, Error::TypeMismatch { stored: "int", inserted: "text" });
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<()>
    where
        K: TryOrd,
    {
        if self.root.is_none() {
            key.try_cmp(&key)?;
        }

        let mut slot = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = slot {
            slot = match key.try_cmp(&node.key)? {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        *slot = Some(Node::new_boxed(key));
        self.len += 1;
        log::trace!("inserted key at depth {} ({} keys)", depth, self.len);

        Ok(())
    }

    /// Returns whether a key equal to `key` is stored in the tree.
    ///
    /// A key that can't be compared with the stored keys is simply not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use dskit::tree::Tree;
    ///
    /// let tree = Tree::try_from_keys([5, 3, 7]).unwrap();
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: TryOrd,
    {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match key.try_cmp(&n.key) {
                Ok(Ordering::Less) => n.left.as_deref(),
                Ok(Ordering::Equal) => return true,
                Ok(Ordering::Greater) => n.right.as_deref(),
                Err(_) => return false,
            };
        }

        false
    }

    /// Visits every key in ascending order. Each call starts a fresh traversal.
    pub fn inorder(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// How many keys have been inserted, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the number of levels on the longest path from the root to a leaf. An empty tree has
    /// a height of 0 and a lone root a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<K>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, level)) = pending.pop() {
            height = height.max(level);
            pending.extend(node.left.as_deref().map(|n| (n, level + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, level + 1)));
        }

        height
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tree")?;
        f.debug_list().entries(self.inorder()).finish()
    }
}

/// Renders the keys in ascending order separated by single spaces.
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.inorder();
        if let Some(first) = keys.next() {
            write!(f, "{}", first)?;
            for key in keys {
                write!(f, " {}", key)?;
            }
        }
        Ok(())
    }
}

/// In-order iterator over the keys of a [`Tree`].
///
/// Holds the chain of ancestors whose keys haven't been yielded yet, so it uses `O(height)`
/// memory and never recurses.
pub struct Iter<'a, K> {
    ancestors: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            ancestors: Vec::new(),
            remaining: len,
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.ancestors.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.ancestors.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::TreeOp;

    quickcheck::quickcheck! {
        fn inorder_is_sorted_i8(xs: Vec<i8>) -> bool {
            let tree = Tree::try_from_keys(xs.iter().copied()).unwrap();
            let keys: Vec<_> = tree.inorder().copied().collect();

            let mut expected = xs;
            expected.sort_unstable();
            keys == expected
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let tree = Tree::try_from_keys(xs.iter().copied()).unwrap();

            xs.iter().all(|x| tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn matches_sorted_vec(ops: Vec<TreeOp<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model: Vec<i8> = Vec::new();

            for op in ops {
                match op {
                    TreeOp::Insert(k) => {
                        tree.insert(k).unwrap();
                        let pos = model.partition_point(|x| *x <= k);
                        model.insert(pos, k);
                    }
                    TreeOp::Contains(k) => {
                        if tree.contains(&k) != model.contains(&k) {
                            return false;
                        }
                    }
                    TreeOp::Iter => {
                        if !tree.inorder().eq(model.iter()) {
                            return false;
                        }
                    }
                }
            }

            tree.len() == model.len()
        }
    }
}
