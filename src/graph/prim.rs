use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Num;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::heap::Heap;

/// Record in the priority queue for Prim's algorithm: a discovered vertex
/// and its best known distance to the growing tree.
#[derive(Clone, Copy, Debug)]
struct Frontier<W> {
    node: usize,
    distance: W,
}

/// Computes the minimum spanning tree (MST) of a connected, undirected
/// graph using Prim's algorithm.
///
/// The traversal starts at the first edge's first endpoint and grows the
/// tree one vertex at a time, always taking the cheapest edge crossing the
/// frontier. Candidate vertices wait in a [`Heap`] keyed by distance;
/// when a cheaper connecting edge is found for a queued vertex, its record
/// is re-keyed in place (decrease-key) rather than re-inserted. The
/// record's position is found by a linear scan of the queue's backing
/// storage, so decrease-key costs O(V) here rather than the O(log V) an
/// auxiliary index map would give.
///
/// # Arguments
/// * `graph` - The undirected graph to span; it must be connected, with at
///   least one edge and no negative weights
///
/// # Returns
/// * `Ok(tree)` - A graph holding the `node_count - 1` spanning edges and
///   the input's vertex count
/// * `Err(Error)` - If the graph fails validation or is disconnected
///
/// # Examples
/// ```
/// use spantree::graph::{prim, Graph};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4);
/// graph.add_edge(0, 2, 2);
/// graph.add_edge(1, 2, 1);
///
/// let tree = prim::minimum_spanning_tree(&graph).unwrap();
/// assert_eq!(tree.edge_count(), 2);
/// assert_eq!(tree.total_weight(), 3);
/// ```
///
/// # Complexity
/// * Time: O(V * E) with the linear decrease-key scan
/// * Space: O(V)
///
/// # Errors
/// * `InvalidGraph` if the graph has no vertices, no edges, an edge
///   endpoint outside `0..node_count`, or a negative weight
/// * `Disconnected` if the frontier runs dry before every vertex is
///   reached
pub fn minimum_spanning_tree<W>(graph: &Graph<W>) -> Result<Graph<W>>
where
    W: Num + PartialOrd + Copy + Debug,
{
    if graph.node_count() == 0 {
        return Err(Error::invalid_graph("graph has no vertices"));
    }
    if graph.edges().is_empty() {
        return Err(Error::invalid_graph("graph has no edges"));
    }
    for edge in graph.edges() {
        if edge.src >= graph.node_count() || edge.dst >= graph.node_count() {
            return Err(Error::invalid_graph(format!(
                "edge ({}, {}) references a vertex outside 0..{}",
                edge.src,
                edge.dst,
                graph.node_count()
            )));
        }
        if edge.weight < W::zero() {
            return Err(Error::invalid_graph(format!(
                "edge ({}, {}) has negative weight {:?}",
                edge.src, edge.dst, edge.weight
            )));
        }
    }

    let node_count = graph.node_count();

    // Reversed comparison: the smallest distance is the extreme.
    let mut queue = Heap::with_capacity(node_count, |a: &Frontier<W>, b: &Frontier<W>| {
        b.distance
            .partial_cmp(&a.distance)
            .unwrap_or(Ordering::Equal)
    });
    let mut in_tree = vec![false; node_count];
    // Best known connection per discovered vertex: node -> (parent, weight).
    let mut connections: HashMap<usize, (usize, W)> = HashMap::new();

    let start = graph.edges()[0].src;
    in_tree[start] = true;
    queue.insert(Frontier {
        node: start,
        distance: W::zero(),
    });
    trace!("seeded traversal at vertex {}", start);

    for _ in 0..node_count - 1 {
        if queue.is_empty() {
            let spanned = in_tree.iter().filter(|&&reached| reached).count();
            return Err(Error::Disconnected {
                spanned,
                total: node_count,
            });
        }
        let current = queue.extract()?.node;
        in_tree[current] = true;

        for edge in graph.edges() {
            if in_tree[edge.src] && in_tree[edge.dst] {
                continue;
            }
            let node = if edge.src == current {
                edge.dst
            } else if edge.dst == current {
                edge.src
            } else {
                continue;
            };

            match queue.collection().iter().position(|f| f.node == node) {
                Some(pos) => {
                    if queue.collection()[pos].distance > edge.weight {
                        queue.replace_at(
                            pos,
                            Frontier {
                                node,
                                distance: edge.weight,
                            },
                        );
                        connections.insert(node, (current, edge.weight));
                    }
                }
                None => {
                    queue.insert(Frontier {
                        node,
                        distance: edge.weight,
                    });
                    connections.insert(node, (current, edge.weight));
                }
            }
        }
        trace!(
            "added vertex {} to the tree, frontier: {:?}",
            current,
            queue.collection()
        );
    }

    // Every non-start vertex must have a recorded connection by now; a
    // single unreachable vertex leaves the loop without ever emptying the
    // queue, so the empty-queue guard alone cannot catch it.
    if connections.len() + 1 != node_count {
        let spanned = in_tree.iter().filter(|&&reached| reached).count();
        return Err(Error::Disconnected {
            spanned,
            total: node_count,
        });
    }

    // Materialize the tree in ascending vertex order for deterministic
    // output.
    let mut tree_edges = Vec::with_capacity(connections.len());
    for node in 0..node_count {
        if let Some(&(parent, weight)) = connections.get(&node) {
            tree_edges.push(Edge::new(node, parent, weight));
        }
    }
    debug!(
        "spanning tree complete: {} edges over {} vertices",
        tree_edges.len(),
        node_count
    );

    Ok(Graph::from_edges(node_count, tree_edges))
}
