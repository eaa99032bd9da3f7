//! An undirected graph stored as adjacency lists, with breadth-first traversal.
//!
//! Vertices live in an arena in the order they were first seen and a `HashMap` maps each label to
//! its slot. Each slot owns its neighbor list, in edge insertion order. Edges are never
//! deduplicated: adding the same edge twice lists each endpoint twice in the other's neighbors.
//!
//! # Examples
//!
//! ```
//! use dskit::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B");
//! graph.add_edge("A", "C");
//! graph.add_edge("B", "D");
//!
//! assert_eq!(graph.neighbors(&"A"), ["B", "C"]);
//! assert_eq!(graph.bfs(&"A").copied().collect::<Vec<_>>(), ["A", "B", "C", "D"]);
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

/// An undirected multigraph keyed by vertex label.
pub struct Graph<V> {
    slots: Vec<Slot<V>>,
    index: HashMap<V, usize>,
}

struct Slot<V> {
    label: V,
    neighbors: Vec<V>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph<V> {
    /// Generates a new graph with no vertices.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of edges, counting parallel edges separately. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.slots.iter().map(|s| s.neighbors.len()).sum::<usize>() / 2
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The vertices in the order they were added.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.slots.iter().map(|s| &s.label)
    }
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    /// Adds `v` with no neighbors unless it's already present. Returns whether it was added.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.index.contains_key(&v) {
            return false;
        }

        self.index.insert(v.clone(), self.slots.len());
        self.slots.push(Slot {
            label: v,
            neighbors: Vec::new(),
        });
        true
    }

    /// Connects `u` and `v`, adding either vertex if it's missing. `v` is appended to `u`'s
    /// neighbors and `u` to `v`'s, even if they were already connected.
    ///
    /// # Examples
    ///
    /// ```
    /// use dskit::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge(1, 2);
    /// graph.add_edge(1, 2);
    ///
    /// assert_eq!(graph.neighbors(&1), [2, 2]);
    /// assert_eq!(graph.neighbors(&2), [1, 1]);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn add_edge(&mut self, u: V, v: V) {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());

        let (u_slot, v_slot) = (self.index[&u], self.index[&v]);
        self.slots[u_slot].neighbors.push(v);
        self.slots[v_slot].neighbors.push(u);

        log::trace!(
            "added edge between slots {} and {} ({} vertices)",
            u_slot,
            v_slot,
            self.slots.len()
        );
    }

    /// The vertices adjacent to `v` in the order their edges were added. Empty if `v` isn't in
    /// the graph.
    pub fn neighbors(&self, v: &V) -> &[V] {
        match self.index.get(v) {
            Some(&slot) => &self.slots[slot].neighbors,
            None => &[],
        }
    }

    /// Whether `v` has been added, directly or through an edge.
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Removes `v` and every edge touching it. Returns whether `v` was present. The remaining
    /// vertices keep their relative order.
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        let Some(slot) = self.index.remove(v) else {
            return false;
        };

        self.slots.remove(slot);
        for (i, s) in self.slots.iter().enumerate().skip(slot) {
            if let Some(entry) = self.index.get_mut(&s.label) {
                *entry = i;
            }
        }

        let mut dropped = 0;
        for s in &mut self.slots {
            let before = s.neighbors.len();
            s.neighbors.retain(|n| n != v);
            dropped += before - s.neighbors.len();
        }
        log::trace!("removed vertex from slot {} with {} edges", slot, dropped);

        true
    }

    /// Visits every vertex reachable from `start` in breadth-first order, starting with `start`
    /// itself. Vertices at the same distance come out in the order their edges were added.
    ///
    /// If `start` isn't in the graph it has no neighbors, so it is the only vertex visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use dskit::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// for (u, v) in [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)] {
    ///     graph.add_edge(u, v);
    /// }
    ///
    /// assert_eq!(graph.bfs(&1).copied().collect::<Vec<_>>(), [1, 2, 5, 3, 4]);
    /// assert_eq!(graph.bfs(&99).copied().collect::<Vec<_>>(), [99]);
    /// ```
    pub fn bfs<'a>(&'a self, start: &'a V) -> Bfs<'a, V> {
        if !self.contains_vertex(start) {
            log::debug!("bfs starting from a vertex outside the graph");
        } else {
            log::debug!("bfs over a graph of {} vertices", self.slots.len());
        }

        Bfs {
            graph: self,
            visited: HashSet::from([start]),
            frontier: VecDeque::from([start]),
        }
    }
}

impl<V> fmt::Debug for Graph<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().map(|s| (&s.label, &s.neighbors)))
            .finish()
    }
}

/// Renders one line per vertex, in insertion order: `<vertex> -> [<neighbor>, ...]`.
impl<V> fmt::Display for Graph<V>
where
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{} -> [", slot.label)?;
            for (i, n) in slot.neighbors.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", n)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// Breadth-first iterator returned by [`Graph::bfs`].
pub struct Bfs<'a, V> {
    graph: &'a Graph<V>,
    visited: HashSet<&'a V>,
    frontier: VecDeque<&'a V>,
}

impl<'a, V> Iterator for Bfs<'a, V>
where
    V: Eq + Hash + Clone,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.frontier.pop_front()?;
        for neighbor in self.graph.neighbors(vertex) {
            if self.visited.insert(neighbor) {
                self.frontier.push_back(neighbor);
            }
        }
        Some(vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Everything still to come is either queued or not yet visited.
        let unseen = self.graph.vertex_count().saturating_sub(self.visited.len());
        (self.frontier.len(), Some(self.frontier.len() + unseen))
    }
}

impl<V> FusedIterator for Bfs<'_, V> where V: Eq + Hash + Clone {}
