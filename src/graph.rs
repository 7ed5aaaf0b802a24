pub mod prim;

// Re-export the spanning-tree entry point
pub use prim::minimum_spanning_tree;

use num_traits::Num;

/// An undirected, weighted edge between two vertices.
///
/// Endpoint order carries no meaning; `src`/`dst` only name the two ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub src: usize,
    pub dst: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    /// Creates an edge connecting `src` and `dst` with the given weight.
    pub fn new(src: usize, dst: usize, weight: W) -> Self {
        Edge { src, dst, weight }
    }
}

/// A weighted, undirected graph stored as an edge list plus a vertex count.
///
/// Vertices are the integers `0..node_count`; they exist implicitly and
/// only appear as edge endpoints. Edge order is preserved for
/// deterministic iteration but carries no meaning.
///
/// # Examples
/// ```
/// use spantree::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4);
/// graph.add_edge(1, 2, 2);
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.total_weight(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<W> {
    edges: Vec<Edge<W>>,
    node_count: usize,
}

impl<W> Graph<W> {
    /// Creates a graph with `node_count` vertices and no edges yet.
    pub fn new(node_count: usize) -> Self {
        Graph {
            edges: Vec::new(),
            node_count,
        }
    }

    /// Creates a graph from an existing edge list.
    pub fn from_edges(node_count: usize, edges: Vec<Edge<W>>) -> Self {
        Graph { edges, node_count }
    }

    /// Appends an undirected edge between `src` and `dst`.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: W) {
        self.edges.push(Edge::new(src, dst, weight));
    }

    /// Returns the number of vertices.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edge list in insertion order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
}

impl<W: Num + Copy> Graph<W> {
    /// Sums the weights of all edges.
    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .fold(W::zero(), |total, edge| total + edge.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_empty() {
        let graph: Graph<u32> = Graph::new(5);
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_add_edge_preserves_order() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 4);
        graph.add_edge(1, 2, 2);
        graph.add_edge(0, 2, 7);

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edges()[0], Edge::new(0, 1, 4));
        assert_eq!(graph.edges()[1], Edge::new(1, 2, 2));
        assert_eq!(graph.edges()[2], Edge::new(0, 2, 7));
    }

    #[test]
    fn test_from_edges_matches_incremental_build() {
        let mut built = Graph::new(3);
        built.add_edge(0, 1, 1);
        built.add_edge(1, 2, 2);

        let listed = Graph::from_edges(3, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2)]);
        assert_eq!(built, listed);
    }

    #[test]
    fn test_total_weight() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 3);
        graph.add_edge(1, 2, 5);
        graph.add_edge(2, 3, 1);
        assert_eq!(graph.total_weight(), 9);

        let empty: Graph<i64> = Graph::new(2);
        assert_eq!(empty.total_weight(), 0);
    }

    #[test]
    fn test_total_weight_float() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 1.5);
        graph.add_edge(1, 2, 2.25);
        assert_eq!(graph.total_weight(), 3.75);
    }
}
