//! Shortest-path search over a weighted [`Graph`]: hop-count paths via
//! [Breadth-First Search] and weighted paths via [Dijkstra's algorithm].
//!
//! [Breadth-First Search]: https://en.wikipedia.org/wiki/Breadth-first_search
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use tracing::trace;

use crate::collections::graph::{Graph, GraphError, Weight};

/// Returns the path with the fewest hops from `start` to `end`, or an empty
/// path if `end` is unreachable.
///
/// The search runs BFS over `(vertex, path-so-far)` frontier entries and
/// returns the first path that reaches `end`. BFS explores vertices in
/// non-decreasing distance order, so the first-found path is guaranteed to
/// have minimum hop count. Edge weights are ignored. Neighbors are marked
/// visited at enqueue time to avoid redundant expansion.
///
/// When `start == end`, the path is the single vertex itself.
///
/// # Errors
///
/// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex of the
/// graph.
///
/// # Time Complexity
///
/// Takes *O*(*V* \* (*V* + *E*)) time in the worst case. Each frontier entry
/// carries its own path, and extending a path copies it.
///
/// # Examples
///
/// ```
/// use classic_dsa::prelude::*;
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1);
/// graph.add_edge("B", "C", 1);
///
/// assert_eq!(bfs_shortest_path(&graph, "A", "C").unwrap(), ["A", "B", "C"]);
/// ```
pub fn bfs_shortest_path(
    graph: &Graph,
    start: &str,
    end: &str,
) -> Result<Vec<String>, GraphError> {
    let start = graph.lookup(start)?;

    let mut queue = VecDeque::from([(start, vec![start])]);
    let mut visited = HashSet::from([start]);

    while let Some((vertex, path)) = queue.pop_front() {
        if vertex == end {
            trace!(hops = path.len() - 1, "bfs path found");
            return Ok(path.into_iter().map(String::from).collect());
        }

        if let Some(neighbors) = graph.neighbors(vertex) {
            for neighbor in neighbors.keys() {
                if visited.insert(neighbor.as_str()) {
                    let mut next = path.clone();
                    next.push(neighbor.as_str());
                    queue.push_back((neighbor.as_str(), next));
                }
            }
        }
    }

    Ok(Vec::new())
}

/// Returns the minimum-total-weight path from `start` to `end`, or an empty
/// path if `end` is unreachable.
///
/// Classic single-source Dijkstra over an unvisited-vertex frontier: each
/// step settles the unvisited vertex with the smallest tentative distance
/// (ties broken by the first minimum in sorted vertex order, keeping the
/// result deterministic), relaxes its neighbors, and removes it from the
/// frontier. The search stops as soon as `end` is settled, reconstructing
/// the path from predecessor links, or when the frontier empties.
///
/// Distances use [`Weight::MAX`] as the infinity sentinel with saturating
/// relaxation arithmetic; vertices unreachable from `start` keep it.
/// Negative weights cannot be expressed with an unsigned [`Weight`].
///
/// # Errors
///
/// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex of the
/// graph.
///
/// # Time Complexity
///
/// Takes *O*(*V*^2) time. The frontier is scanned linearly for the minimum
/// at every step, matching the textbook array-based formulation rather than
/// a binary-heap one.
///
/// # Examples
///
/// ```
/// use classic_dsa::prelude::*;
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1);
/// graph.add_edge("A", "C", 4);
/// graph.add_edge("B", "D", 2);
/// graph.add_edge("C", "D", 3);
/// graph.add_edge("C", "E", 2);
/// graph.add_edge("D", "E", 1);
///
/// // Total weight 4, beating the 6 of A-C-E.
/// assert_eq!(dijkstra(&graph, "A", "E").unwrap(), ["A", "B", "D", "E"]);
/// ```
pub fn dijkstra(graph: &Graph, start: &str, end: &str) -> Result<Vec<String>, GraphError> {
    let start = graph.lookup(start)?;

    let mut distances: BTreeMap<&str, Weight> =
        graph.vertices().map(|v| (v, Weight::MAX)).collect();
    let mut previous: BTreeMap<&str, &str> = BTreeMap::new();
    let mut frontier: BTreeSet<&str> = graph.vertices().collect();

    distances.insert(start, 0);

    while let Some(current) = frontier.iter().copied().min_by_key(|v| distances[v]) {
        frontier.remove(current);

        if current == end {
            if distances[current] == Weight::MAX {
                return Ok(Vec::new());
            }

            trace!(distance = distances[current], "dijkstra path found");
            return Ok(reconstruct(&previous, current));
        }

        let dist = distances[current];
        // Everything left in the frontier is unreachable from `start`.
        if dist == Weight::MAX {
            continue;
        }

        if let Some(neighbors) = graph.neighbors(current) {
            for (neighbor, &weight) in neighbors {
                let alt = dist.saturating_add(weight);

                if alt < distances[neighbor.as_str()] {
                    trace!(vertex = %neighbor, distance = alt, "relaxed edge");
                    distances.insert(neighbor, alt);
                    previous.insert(neighbor, current);
                }
            }
        }
    }

    // `end` was never settled, so it is not a vertex of the graph.
    Ok(Vec::new())
}

/// Follows predecessor links from `end` back to the source, returning the
/// path in source-to-destination order.
fn reconstruct(previous: &BTreeMap<&str, &str>, end: &str) -> Vec<String> {
    let mut path = vec![end.to_owned()];
    let mut step = end;

    while let Some(&prev) = previous.get(step) {
        path.push(prev.to_owned());
        step = prev;
    }

    path.reverse();
    path
}
