pub mod topology {
    use std::collections::HashMap;
    use std::fmt::Display;
    use std::hash::Hash;

    /// Anything usable as a vertex identifier.
    pub trait VertexId: Clone + Eq + Hash + Display {}

    impl<T: Clone + Eq + Hash + Display> VertexId for T {}

    /// A directed weighted graph represented as an adjacency list.
    ///
    /// Vertices keep their insertion order, which is also the order edges are
    /// scanned in and the order results are reported in. Edge targets are not
    /// registered as vertices implicitly: every vertex, including sink-only
    /// ones, has to be added as a key.
    #[derive(Debug, Clone)]
    pub struct Graph<V> {
        /// Adjacency list: Vertex -> Vec<(Neighbor, Weight)>
        adj: Vec<(V, Vec<(V, f64)>)>,
        /// Vertex -> position in `adj`
        index: HashMap<V, usize>,
    }

    impl<V> Default for Graph<V> {
        fn default() -> Self {
            Self {
                adj: Vec::new(),
                index: HashMap::new(),
            }
        }
    }

    impl<V: Clone + Eq + Hash> Graph<V> {
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers a vertex with no outgoing edges. Returns its position.
        pub fn add_vertex(&mut self, vertex: V) -> usize {
            if let Some(&id) = self.index.get(&vertex) {
                return id;
            }

            let id = self.adj.len();
            self.index.insert(vertex.clone(), id);
            self.adj.push((vertex, Vec::new()));
            id
        }

        /// Appends the edge `from -> to`. `from` becomes a vertex if it is not
        /// one already; `to` does not.
        pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
            let id = self.add_vertex(from);
            self.adj[id].1.push((to, weight));
        }

        pub fn vertex_count(&self) -> usize {
            self.adj.len()
        }

        pub fn edge_count(&self) -> usize {
            self.adj.iter().map(|(_, neighbors)| neighbors.len()).sum()
        }

        pub fn is_empty(&self) -> bool {
            self.adj.is_empty()
        }

        pub fn contains(&self, vertex: &V) -> bool {
            self.index.contains_key(vertex)
        }

        pub fn index_of(&self, vertex: &V) -> Option<usize> {
            self.index.get(vertex).copied()
        }

        pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
            self.adj.iter().map(|(vertex, _)| vertex)
        }

        pub fn neighbors(&self, vertex: &V) -> Option<&[(V, f64)]> {
            self.index_of(vertex).map(|id| self.adj[id].1.as_slice())
        }

        /// Vertices paired with their outgoing edges, in insertion order.
        pub fn adjacency(&self) -> impl Iterator<Item = (&V, &[(V, f64)])> + '_ {
            self.adj
                .iter()
                .map(|(vertex, neighbors)| (vertex, neighbors.as_slice()))
        }

        /// Flattened `(from, to, weight)` triples.
        pub fn edges(&self) -> impl Iterator<Item = (&V, &V, f64)> + '_ {
            self.adj.iter().flat_map(|(from, neighbors)| {
                neighbors.iter().map(move |(to, weight)| (from, to, *weight))
            })
        }
    }

    impl<V: Clone + Eq + Hash> FromIterator<(V, Vec<(V, f64)>)> for Graph<V> {
        fn from_iter<I: IntoIterator<Item = (V, Vec<(V, f64)>)>>(iter: I) -> Self {
            let mut graph = Self::new();
            for (vertex, neighbors) in iter {
                let id = graph.add_vertex(vertex);
                graph.adj[id].1.extend(neighbors);
            }
            graph
        }
    }

}

pub mod config;
pub mod distance;
pub mod engine;
pub mod error;
pub mod report;

pub use config::EngineConfig;
pub use distance::Distance;
pub use engine::{bellman_ford, reconstruct_path, ShortestPathEngine, ShortestPaths};
pub use error::{EngineError, Result};
pub use report::{ReportEntry, ShortestPathReport};
pub use topology::{Graph, VertexId};
