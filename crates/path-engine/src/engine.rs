//! Bellman-Ford single-source shortest paths.
//!
//! Distances start at zero for the source and `Unreachable` everywhere
//! else. Every edge is then relaxed `V - 1` times; one extra scan over the
//! edges detects a negative cycle reachable from the source.
//!
//! Complexity: O(V * E) time, O(V + E) auxiliary space.

use crate::config::EngineConfig;
use crate::distance::Distance;
use crate::error::{EngineError, Result};
use crate::topology::{Graph, VertexId};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Edge with both endpoints resolved to vertex positions.
type IndexedEdge = (usize, usize, f64);

/// Stateless Bellman-Ford engine. Only holds configuration.
#[derive(Debug, Clone, Default)]
pub struct ShortestPathEngine {
    config: EngineConfig,
}

impl ShortestPathEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(EngineConfig::from_env())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute shortest distances and predecessors from `source`.
    ///
    /// Fails with `EmptyGraph` for a graph without vertices, `UnknownVertex`
    /// when the source or an edge target is not a vertex of the graph, and
    /// `NegativeCycle` when a negative weight cycle is reachable from the
    /// source. No partial result is returned on failure.
    pub fn compute_shortest_paths<V: VertexId>(
        &self,
        graph: &Graph<V>,
        source: &V,
    ) -> Result<ShortestPaths<V>> {
        if graph.is_empty() {
            return Err(EngineError::EmptyGraph);
        }

        let source_id = graph
            .index_of(source)
            .ok_or_else(|| EngineError::unknown_vertex(source))?;
        let edges = resolve_edges(graph)?;
        let vertex_count = graph.vertex_count();

        debug!(
            vertices = vertex_count,
            edges = edges.len(),
            %source,
            "Starting Bellman-Ford"
        );

        let mut distances = vec![Distance::Unreachable; vertex_count];
        let mut predecessors: Vec<Option<usize>> = vec![None; vertex_count];
        distances[source_id] = Distance::ZERO;

        let mut passes = 0;
        let mut relaxations = 0;

        for pass in 1..vertex_count {
            let updated = relax_edges(&edges, &mut distances, &mut predecessors);
            passes += 1;
            relaxations += updated;
            debug!(pass, updated, "Relaxation pass complete");

            if updated == 0 && self.config.early_exit {
                debug!(pass, "Distances converged, skipping remaining passes");
                break;
            }
        }

        // One more scan: anything that still relaxes sits behind a negative cycle
        let vertices: Vec<V> = graph.vertices().cloned().collect();
        if let Some(&(u, v, weight)) = edges
            .iter()
            .find(|&&(u, v, weight)| distances[u].relaxed(weight) < distances[v])
        {
            warn!(
                from = %vertices[u],
                to = %vertices[v],
                weight,
                "Negative weight cycle detected"
            );
            return Err(EngineError::NegativeCycle);
        }

        info!(%source, passes, relaxations, "Shortest paths computed");

        let index = vertices
            .iter()
            .cloned()
            .enumerate()
            .map(|(id, vertex)| (vertex, id))
            .collect();

        Ok(ShortestPaths {
            source_id,
            vertices,
            index,
            distances,
            predecessors,
            passes,
            relaxations,
        })
    }
}

/// Run Bellman-Ford with the default configuration.
pub fn bellman_ford<V: VertexId>(graph: &Graph<V>, source: &V) -> Result<ShortestPaths<V>> {
    ShortestPathEngine::default().compute_shortest_paths(graph, source)
}

/// Flatten the adjacency list into positional edges, rejecting targets that
/// are not vertices of the graph.
fn resolve_edges<V: VertexId>(graph: &Graph<V>) -> Result<Vec<IndexedEdge>> {
    let mut edges = Vec::with_capacity(graph.edge_count());

    for (from, (_, neighbors)) in graph.adjacency().enumerate() {
        for (target, weight) in neighbors {
            let to = graph
                .index_of(target)
                .ok_or_else(|| EngineError::unknown_vertex(target))?;
            edges.push((from, to, *weight));
        }
    }

    Ok(edges)
}

/// One full pass over the edges. Returns how many distances improved.
fn relax_edges(
    edges: &[IndexedEdge],
    distances: &mut [Distance],
    predecessors: &mut [Option<usize>],
) -> usize {
    let mut updated = 0;

    for &(u, v, weight) in edges {
        let candidate = distances[u].relaxed(weight);
        if candidate < distances[v] {
            distances[v] = candidate;
            predecessors[v] = Some(u);
            updated += 1;
        }
    }

    updated
}

/// Outcome of a successful run: distances and the predecessor tree.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V> {
    source_id: usize,
    /// Vertices in graph order
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
    passes: usize,
    relaxations: usize,
}

impl<V: VertexId> ShortestPaths<V> {
    pub fn source(&self) -> &V {
        &self.vertices[self.source_id]
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Distance to `vertex`, or `None` if it is not part of the graph.
    pub fn distance(&self, vertex: &V) -> Option<Distance> {
        self.index.get(vertex).map(|&id| self.distances[id])
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some_and(|d| d.is_reachable())
    }

    /// The vertex preceding `vertex` on its shortest path. `None` for the
    /// source, unreached vertices and vertices outside the graph.
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        let id = *self.index.get(vertex)?;
        self.predecessors[id].map(|p| &self.vertices[p])
    }

    /// Every vertex with its distance, in graph order.
    pub fn distances(&self) -> impl Iterator<Item = (&V, Distance)> + '_ {
        self.vertices.iter().zip(self.distances.iter().copied())
    }

    /// Every vertex with its predecessor, in graph order.
    pub fn predecessors(&self) -> impl Iterator<Item = (&V, Option<&V>)> + '_ {
        self.vertices
            .iter()
            .zip(self.predecessors.iter())
            .map(|(vertex, p)| (vertex, p.map(|id| &self.vertices[id])))
    }

    /// Relaxation passes actually executed.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Number of successful distance updates across all passes.
    pub fn relaxations(&self) -> usize {
        self.relaxations
    }

    /// Path from the source to `target` along predecessor links.
    ///
    /// An unreached target yields `[target]`; check `is_reachable` first.
    pub fn path_to(&self, target: &V) -> Result<Vec<V>> {
        let mut current = Some(
            *self
                .index
                .get(target)
                .ok_or_else(|| EngineError::unknown_vertex(target))?,
        );

        let mut path = Vec::new();
        while let Some(id) = current {
            path.push(self.vertices[id].clone());
            if path.len() >= self.vertices.len() {
                break;
            }
            current = self.predecessors[id];
        }

        path.reverse();
        Ok(path)
    }

    /// Split into plain `(distances, predecessors)` maps.
    pub fn into_maps(self) -> (HashMap<V, Distance>, HashMap<V, Option<V>>) {
        let predecessors = self
            .vertices
            .iter()
            .zip(self.predecessors.iter())
            .map(|(vertex, p)| (vertex.clone(), p.map(|id| self.vertices[id].clone())))
            .collect();
        let distances = self.vertices.into_iter().zip(self.distances).collect();

        (distances, predecessors)
    }
}

/// Rebuild the path to `target` from a predecessor map.
///
/// Walks predecessor links backwards until a vertex without predecessor is
/// reached, then reverses. A target that was never reached comes back as a
/// single-element path, so callers have to check reachability through the
/// distances first. The walk visits at most `predecessors.len()` vertices.
pub fn reconstruct_path<V: VertexId>(
    predecessors: &HashMap<V, Option<V>>,
    target: &V,
) -> Result<Vec<V>> {
    let mut path = Vec::new();
    let mut current = Some(target);

    while let Some(vertex) = current.take() {
        let previous = predecessors
            .get(vertex)
            .ok_or_else(|| EngineError::unknown_vertex(vertex))?;
        path.push(vertex.clone());

        if path.len() < predecessors.len() {
            current = previous.as_ref();
        }
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(adjacency: &[(&'static str, &[(&'static str, f64)])]) -> Graph<&'static str> {
        adjacency
            .iter()
            .map(|&(vertex, neighbors)| (vertex, neighbors.to_vec()))
            .collect()
    }

    #[test]
    fn test_linear_chain_with_negative_edge() -> Result<()> {
        let g = graph(&[("A", &[("B", 4.0)]), ("B", &[("C", -2.0)]), ("C", &[])]);
        let paths = bellman_ford(&g, &"A")?;

        assert_eq!(paths.distance(&"C"), Some(Distance::Reachable(2.0)));
        assert_eq!(paths.predecessor(&"C"), Some(&"B"));
        assert_eq!(paths.path_to(&"C")?, vec!["A", "B", "C"]);
        Ok(())
    }

    #[test]
    fn test_first_relaxation_wins_on_ties() -> Result<()> {
        // A->B->D and A->C->D both cost 2
        let g = graph(&[
            ("A", &[("B", 1.0), ("C", 1.0)]),
            ("B", &[("D", 1.0)]),
            ("C", &[("D", 1.0)]),
            ("D", &[]),
        ]);
        let paths = bellman_ford(&g, &"A")?;

        assert_eq!(paths.predecessor(&"D"), Some(&"B"));
        Ok(())
    }

    #[test]
    fn test_early_exit_skips_idle_passes() -> Result<()> {
        let g = graph(&[
            ("A", &[("B", 1.0)]),
            ("B", &[("C", 1.0)]),
            ("C", &[("D", 1.0)]),
            ("D", &[]),
        ]);

        let eager = ShortestPathEngine::default().compute_shortest_paths(&g, &"A")?;
        let full = ShortestPathEngine::new(EngineConfig::default().with_early_exit(false))
            .compute_shortest_paths(&g, &"A")?;

        // Edges are already in topological order: pass 1 settles everything
        assert_eq!(eager.passes(), 2);
        assert_eq!(full.passes(), 3);
        assert_eq!(eager.relaxations(), 3);
        assert_eq!(
            eager.distances().collect::<Vec<_>>(),
            full.distances().collect::<Vec<_>>()
        );
        Ok(())
    }

    #[test]
    fn test_dangling_edge_target_is_rejected() {
        let mut g = Graph::new();
        g.add_edge("A", "Z", 1.0);

        assert_eq!(
            bellman_ford(&g, &"A").unwrap_err(),
            EngineError::UnknownVertex("Z".to_string())
        );
    }

    #[test]
    fn test_reconstruct_path_bounded_on_cyclic_map() -> Result<()> {
        let predecessors: HashMap<&str, Option<&str>> =
            [("A", Some("B")), ("B", Some("A"))].into_iter().collect();

        let path = reconstruct_path(&predecessors, &"A")?;
        assert_eq!(path, vec!["B", "A"]);
        Ok(())
    }

    #[test]
    fn test_reconstruct_path_unknown_target() {
        let predecessors: HashMap<&str, Option<&str>> = [("A", None)].into_iter().collect();

        assert_eq!(
            reconstruct_path(&predecessors, &"Q").unwrap_err(),
            EngineError::UnknownVertex("Q".to_string())
        );
    }
}
