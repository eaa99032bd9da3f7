use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum TreeOp<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Ask whether the K is in the tree
    Contains(K),
    /// Compare iterators
    Iter,
}

impl<K> Arbitrary for TreeOp<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]) {
            Some(0) => TreeOp::Insert(K::arbitrary(g)),
            Some(1) => TreeOp::Contains(K::arbitrary(g)),
            _ => TreeOp::Iter,
        }
    }
}

/// Mutations to apply to a graph in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum GraphOp<V> {
    AddVertex(V),
    AddEdge(V, V),
    RemoveVertex(V),
}

impl<V> Arbitrary for GraphOp<V>
where
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        // Removals are rarer than additions so graphs get a chance to grow.
        match g.choose(&[0, 1, 1, 1, 2]) {
            Some(0) => GraphOp::AddVertex(V::arbitrary(g)),
            Some(2) => GraphOp::RemoveVertex(V::arbitrary(g)),
            _ => GraphOp::AddEdge(V::arbitrary(g), V::arbitrary(g)),
        }
    }
}
