//! [Graph] implementation using a weighted adjacency list.
//!
//! The graph is undirected: adding an edge `(u, v, w)` records both `u -> v`
//! and `v -> u` with the same weight.
//!
//! [Graph]: https://en.wikipedia.org/wiki/Graph_(abstract_data_type)

use std::collections::{BTreeMap, HashSet, VecDeque};

use thiserror::Error;

/// Edge weight. Weights are non-negative by construction.
pub type Weight = u64;

/// Errors returned by graph traversals and path queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The requested start vertex is not present in the graph.
    #[error("vertex `{0}` is not in the graph")]
    VertexNotFound(String),
}

/// [Graph] implementation using a weighted adjacency list.
///
/// Vertices are string labels, unique within the graph. Vertices and edges
/// are only ever added, never removed.
///
/// Vertex and neighbor iteration follows the sorted order of the underlying
/// [`BTreeMap`], so traversal output is deterministic for a given set of
/// edges regardless of insertion order.
///
/// [Graph]: https://en.wikipedia.org/wiki/Graph_(abstract_data_type)
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Maps each vertex to its neighbors and the connecting edge weights.
    adjacency: BTreeMap<String, BTreeMap<String, Weight>>,
}

impl Graph {
    /// Creates a new, empty `Graph`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let graph = Graph::new();
    /// assert_eq!(graph.order(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a vertex to the graph. Adding a vertex that already exists is a
    /// no-op, so existing edges are never disturbed.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*log V*) time for the ordered-map lookup and insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_vertex("A");
    /// graph.add_vertex("A");
    ///
    /// assert_eq!(graph.order(), 1);
    /// assert!(graph.contains_vertex("A"));
    /// ```
    pub fn add_vertex(&mut self, vertex: impl Into<String>) {
        self.adjacency.entry(vertex.into()).or_default();
    }

    /// Adds an undirected edge between two vertices, creating either vertex
    /// if it is missing. Any prior weight for the pair is overwritten.
    ///
    /// After this call the adjacency list is symmetric for the pair:
    /// `w(a, b) == w(b, a)`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*log V*) time for the ordered-map insertions.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge("A", "B", 5);
    ///
    /// assert_eq!(graph.adjacency_list()["A"]["B"], 5);
    /// assert_eq!(graph.adjacency_list()["B"]["A"], 5);
    /// ```
    pub fn add_edge(&mut self, a: impl Into<String>, b: impl Into<String>, weight: Weight) {
        let (a, b) = (a.into(), b.into());

        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
    }

    /// Performs an iterative depth-first search from `start`, returning the
    /// vertices in visitation order.
    ///
    /// Neighbors are pushed onto an explicit stack in sorted order and are
    /// marked visited at push time, not at pop time. This governs the exact
    /// visitation order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex of
    /// the graph.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*V* + *E*) time. Every vertex is pushed and popped at most
    /// once, and every edge is inspected at most twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge("A", "B", 1);
    /// graph.add_edge("B", "C", 1);
    /// graph.add_edge("C", "D", 1);
    ///
    /// assert_eq!(graph.dfs("A").unwrap(), ["A", "B", "C", "D"]);
    /// assert!(graph.dfs("Z").is_err());
    /// ```
    pub fn dfs(&self, start: &str) -> Result<Vec<String>, GraphError> {
        let start = self.lookup(start)?;

        let mut order = Vec::new();
        let mut stack = vec![start];
        let mut visited = HashSet::new();
        visited.insert(start);

        while let Some(vertex) = stack.pop() {
            order.push(vertex.to_owned());

            if let Some(neighbors) = self.adjacency.get(vertex) {
                for neighbor in neighbors.keys() {
                    if visited.insert(neighbor.as_str()) {
                        stack.push(neighbor);
                    }
                }
            }
        }

        Ok(order)
    }

    /// Performs a breadth-first search from `start`, returning the vertices
    /// in visitation order.
    ///
    /// Identical in structure to [`dfs`], using a FIFO queue instead of a
    /// stack; neighbors are marked visited at enqueue time.
    ///
    /// [`dfs`]: Graph::dfs
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex of
    /// the graph.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*V* + *E*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge("A", "B", 1);
    /// graph.add_edge("A", "C", 1);
    /// graph.add_edge("B", "D", 1);
    ///
    /// assert_eq!(graph.bfs("A").unwrap(), ["A", "B", "C", "D"]);
    /// ```
    pub fn bfs(&self, start: &str) -> Result<Vec<String>, GraphError> {
        let start = self.lookup(start)?;

        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);
        let mut visited = HashSet::new();
        visited.insert(start);

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex.to_owned());

            if let Some(neighbors) = self.adjacency.get(vertex) {
                for neighbor in neighbors.keys() {
                    if visited.insert(neighbor.as_str()) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        Ok(order)
    }

    /// Returns the adjacency list representation of the graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge("A", "B", 3);
    ///
    /// let adjacency = graph.adjacency_list();
    /// assert_eq!(adjacency["A"]["B"], adjacency["B"]["A"]);
    /// ```
    #[inline]
    pub fn adjacency_list(&self) -> &BTreeMap<String, BTreeMap<String, Weight>> {
        &self.adjacency
    }

    /// Returns the neighbor map of `vertex`, or [`None`] if the vertex is
    /// not in the graph.
    #[inline]
    pub fn neighbors(&self, vertex: &str) -> Option<&BTreeMap<String, Weight>> {
        self.adjacency.get(vertex)
    }

    /// Returns an iterator over the vertex labels in sorted order.
    #[inline]
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Returns `true` if `vertex` is in the graph.
    #[inline]
    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns the number of vertices in the graph.
    #[inline]
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// Resolves `vertex` to its stored key, or reports it as missing.
    pub(crate) fn lookup<'a>(&'a self, vertex: &str) -> Result<&'a str, GraphError> {
        self.adjacency
            .get_key_value(vertex)
            .map(|(key, _)| key.as_str())
            .ok_or_else(|| GraphError::VertexNotFound(vertex.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_add_vertex() {
        let mut graph = Graph::new();
        graph.add_vertex("A");

        assert!(graph.contains_vertex("A"));
        assert_eq!(graph.order(), 1);
        assert!(graph.neighbors("A").unwrap().is_empty());
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 2);
        graph.add_vertex("A");

        // Re-adding an existing vertex must not clear its edges.
        assert_eq!(graph.order(), 2);
        assert_eq!(graph.adjacency_list()["A"]["B"], 2);
    }

    #[test]
    fn test_add_edge_symmetric() {
        let mut graph = Graph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        graph.add_edge("A", "B", 5);

        assert_eq!(graph.adjacency_list()["A"]["B"], 5);
        assert_eq!(graph.adjacency_list()["B"]["A"], 5);
    }

    #[test]
    fn test_add_edge_creates_missing_vertices() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1);

        assert!(graph.contains_vertex("A"));
        assert!(graph.contains_vertex("B"));
        assert_eq!(graph.order(), 2);
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("A", "B", 9);

        assert_eq!(graph.adjacency_list()["A"]["B"], 9);
        assert_eq!(graph.adjacency_list()["B"]["A"], 9);
    }

    #[test]
    fn test_dfs_chain() {
        let mut graph = Graph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        graph.add_vertex("C");
        graph.add_vertex("D");
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 1);
        graph.add_edge("C", "D", 1);

        assert_eq!(graph.dfs("A").unwrap(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_dfs_branching_order() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("A", "C", 1);
        graph.add_edge("B", "D", 1);

        // Neighbors of "A" are pushed in sorted order (B, C), so "C" is on
        // top of the stack and explored first.
        assert_eq!(graph.dfs("A").unwrap(), ["A", "C", "B", "D"]);
    }

    #[test]
    fn test_bfs_chain() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 1);
        graph.add_edge("C", "D", 1);

        assert_eq!(graph.bfs("A").unwrap(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_bfs_visits_by_distance() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("A", "C", 1);
        graph.add_edge("B", "D", 1);
        graph.add_edge("C", "D", 1);

        assert_eq!(graph.bfs("A").unwrap(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_traversal_ignores_disconnected_component() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("C", "D", 1);

        assert_eq!(graph.dfs("A").unwrap(), ["A", "B"]);
        assert_eq!(graph.bfs("C").unwrap(), ["C", "D"]);
    }

    #[test]
    fn test_traversal_missing_start() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1);

        assert_eq!(
            graph.dfs("Z"),
            Err(GraphError::VertexNotFound("Z".to_owned()))
        );
        assert_eq!(
            graph.bfs("Z"),
            Err(GraphError::VertexNotFound("Z".to_owned()))
        );
    }

    #[test]
    fn test_isolated_vertex_traversal() {
        let mut graph = Graph::new();
        graph.add_vertex("A");

        assert_eq!(graph.dfs("A").unwrap(), ["A"]);
        assert_eq!(graph.bfs("A").unwrap(), ["A"]);
    }
}
