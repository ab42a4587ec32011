//! Human and JSON rendering of a shortest path run.

use crate::distance::Distance;
use crate::engine::ShortestPaths;
use crate::topology::VertexId;
use anyhow::Result;
use serde::Serialize;
use std::fmt;

/// One line of the report: a vertex, its distance and, when reachable, the
/// path leading to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub vertex: String,
    pub distance: Distance,
    pub path: Option<Vec<String>>,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    source: String,
    entries: &'a [ReportEntry],
}

/// Presentation layer over `ShortestPaths`.
pub struct ShortestPathReport<'a, V> {
    paths: &'a ShortestPaths<V>,
}

impl<'a, V: VertexId> ShortestPathReport<'a, V> {
    pub fn new(paths: &'a ShortestPaths<V>) -> Self {
        Self { paths }
    }

    /// Entries in graph order. Paths are only reconstructed for reachable
    /// vertices.
    pub fn entries(&self) -> crate::error::Result<Vec<ReportEntry>> {
        self.paths
            .distances()
            .map(|(vertex, distance)| -> crate::error::Result<ReportEntry> {
                let path = if distance.is_reachable() {
                    let path = self.paths.path_to(vertex)?;
                    Some(path.iter().map(ToString::to_string).collect())
                } else {
                    None
                };

                Ok(ReportEntry {
                    vertex: vertex.to_string(),
                    distance,
                    path,
                })
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        let entries = self.entries()?;
        let document = ReportDocument {
            source: self.paths.source().to_string(),
            entries: &entries,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

impl<V: VertexId> fmt::Display for ShortestPathReport<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries().map_err(|_| fmt::Error)?;

        writeln!(f, "Minimum distances from source '{}':", self.paths.source())?;
        for entry in &entries {
            writeln!(f, "{}: {}", entry.vertex, entry.distance)?;
        }

        writeln!(f)?;
        write!(f, "Shortest paths from source:")?;
        for entry in &entries {
            match &entry.path {
                Some(path) => write!(f, "\nPath to {}: {}", entry.vertex, path.join(" -> "))?,
                None => write!(f, "\nPath to {}: No path", entry.vertex)?,
            }
        }

        Ok(())
    }
}
