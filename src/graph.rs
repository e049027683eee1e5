//! Dense co-occurrence matrix over a fixed set of cast identities.

use tracing::debug;

use crate::model::CastId;
use crate::primitives::{IndexedStore, Queue, Sequence};

/// Collaboration graph over a fixed, ordered set of node identities.
///
/// Cell `[i][j]` counts how many times nodes `i` and `j` were recorded as
/// co-occurring. The structure is directed; callers that want symmetric
/// counts record both directions. The matrix is O(N²) in the node count,
/// which is the practical size limit for the queries built on top of it.
///
/// Matrix positions are dense indices into the identity array; resolve
/// domain ids through [`CollaborationGraph::index_of`] before calling the
/// index-based operations, which treat an out-of-range index as a
/// programming error and panic.
#[derive(Debug)]
pub struct CollaborationGraph {
    ids: Vec<CastId>,
    index: IndexedStore<CastId, usize>,
    matrix: Vec<Vec<u32>>,
}

impl CollaborationGraph {
    /// Builds an edgeless graph whose nodes are exactly `ids`, in order.
    pub fn new(ids: Vec<CastId>) -> Self {
        let n = ids.len();
        let mut index = IndexedStore::with_capacity(n);
        for (position, &id) in ids.iter().enumerate() {
            index.put(id, position);
        }
        debug!(nodes = n, "collab.graph.init");
        Self {
            ids,
            index,
            matrix: vec![vec![0; n]; n],
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The node identities, in construction order.
    pub fn ids(&self) -> &[CastId] {
        &self.ids
    }

    /// Matrix index of a domain id, if the id is a node of this graph.
    pub fn index_of(&self, id: CastId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Domain id at a matrix index.
    pub fn id_at(&self, index: usize) -> CastId {
        self.ids[index]
    }

    /// Records one co-occurrence from `from` to `to`. Directed: callers
    /// maintaining a symmetric graph increment both cells.
    pub fn add_connection(&mut self, from: usize, to: usize) {
        self.matrix[from][to] += 1;
    }

    /// Co-occurrence count from `from` to `to`.
    pub fn connection_count(&self, from: usize, to: usize) -> u32 {
        self.matrix[from][to]
    }

    /// Breadth-first shortest path from `source` to `target`.
    ///
    /// Any cell with a count of at least one is a traversable edge; the
    /// count itself does not weight the distance. Neighbors are scanned in
    /// ascending index order, so among equal-length paths the one discovered
    /// first in index order wins. The returned sequence runs source→target
    /// inclusive, and is empty when `target` is unreachable.
    pub fn shortest_path(&self, source: usize, target: usize) -> Sequence<usize> {
        let n = self.ids.len();
        let mut visited = vec![false; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut frontier = Queue::new();

        visited[source] = true;
        frontier.enqueue(source);

        while let Some(node) = frontier.dequeue() {
            if node == target {
                let mut path = Sequence::new();
                let mut cursor = Some(node);
                while let Some(step) = cursor {
                    path.push_back(step);
                    cursor = parent[step];
                }
                path.reverse();
                debug!(source, target, hops = path.len() - 1, "collab.graph.path");
                return path;
            }
            for neighbor in 0..n {
                if self.matrix[node][neighbor] >= 1 && !visited[neighbor] {
                    visited[neighbor] = true;
                    parent[neighbor] = Some(node);
                    frontier.enqueue(neighbor);
                }
            }
        }

        debug!(source, target, "collab.graph.unreachable");
        Sequence::new()
    }

    /// Indices of nodes sharing at least `threshold` co-occurrences with
    /// some single other node.
    ///
    /// The check is per pair, not a count of distinct partners: one cell of
    /// the node's row reaching `threshold` qualifies it.
    pub fn nodes_with_min_shared(&self, threshold: u32) -> Vec<usize> {
        let mut qualifying = Vec::new();
        for (node, row) in self.matrix.iter().enumerate() {
            if row.iter().any(|&count| count >= threshold) {
                qualifying.push(node);
            }
        }
        qualifying
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> CollaborationGraph {
        // 10 - 20 - 30, with 40 isolated.
        let mut graph = CollaborationGraph::new(vec![10, 20, 30, 40]);
        for (a, b) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            graph.add_connection(a, b);
        }
        graph
    }

    #[test]
    fn id_index_round_trip() {
        let graph = CollaborationGraph::new(vec![7, -3, 12]);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.index_of(-3), Some(1));
        assert_eq!(graph.id_at(1), -3);
        assert_eq!(graph.index_of(99), None);
    }

    #[test]
    fn shortest_path_walks_the_line() {
        let graph = line_graph();
        let path: Vec<usize> = graph.shortest_path(0, 2).iter().copied().collect();
        assert_eq!(path, vec![0, 1, 2]);
    }

    #[test]
    fn path_endpoints_and_edges_are_valid() {
        let graph = line_graph();
        let path: Vec<usize> = graph.shortest_path(2, 0).iter().copied().collect();
        assert_eq!(*path.first().expect("start"), 2);
        assert_eq!(*path.last().expect("end"), 0);
        for pair in path.windows(2) {
            assert!(graph.connection_count(pair[0], pair[1]) >= 1);
        }
    }

    #[test]
    fn unreachable_target_yields_empty_path() {
        let graph = line_graph();
        assert!(graph.shortest_path(0, 3).is_empty());
    }

    #[test]
    fn edge_weight_does_not_shorten_distance() {
        // Heavily-counted detour must not beat the direct hop.
        let mut graph = CollaborationGraph::new(vec![1, 2, 3]);
        graph.add_connection(0, 2);
        for _ in 0..10 {
            graph.add_connection(0, 1);
            graph.add_connection(1, 2);
        }
        let path: Vec<usize> = graph.shortest_path(0, 2).iter().copied().collect();
        assert_eq!(path, vec![0, 2]);
    }

    #[test]
    fn threshold_check_is_per_pair() {
        // Node 0 shares 2 with node 1; node 2 has two distinct single-count
        // partners and must not qualify at threshold 2.
        let mut graph = CollaborationGraph::new(vec![1, 2, 3]);
        graph.add_connection(0, 1);
        graph.add_connection(0, 1);
        graph.add_connection(1, 0);
        graph.add_connection(1, 0);
        graph.add_connection(2, 0);
        graph.add_connection(2, 1);
        assert_eq!(graph.nodes_with_min_shared(2), vec![0, 1]);
    }
}
