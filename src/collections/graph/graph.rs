use std::fmt::{self, Debug, Display, Formatter};
use std::iter::{Enumerate, FusedIterator};
use std::slice;

use tracing::debug;

use crate::util::error::{IndexOutOfBounds, InvalidArgument, InvalidCapacity, MalformedMatrix, SelfLoop};

/// A directed graph over a fixed set of vertices, stored as an adjacency matrix.
///
/// Vertices are the indices `0..vertex_count`. Entry `(from, to)` of the matrix records whether
/// there is an edge from `from` to `to`. The matrix does not have to be symmetric, so an
/// undirected edge is simply a pair of directed ones. Self-loops are never stored.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `v`: The number of vertices.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_edge/remove_edge/has_edge` | `O(1)` |
/// | `neighbors` | `O(v)` |
/// | `dfs/bfs` | `O(v^2)` |
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Graph {
    pub(crate) vertex_count: usize,
    // Row-major: the row of `from` starts at `from * vertex_count`.
    pub(crate) adjacency: Box<[bool]>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// Fails if there are no vertices, or if the `vertex_count * vertex_count` matrix has more
    /// cells than a slice can index.
    pub fn with_vertices(vertex_count: usize) -> Result<Graph, InvalidCapacity> {
        let cells = vertex_count
            .checked_mul(vertex_count)
            .filter(|cells| *cells != 0 && *cells <= isize::MAX as usize)
            .ok_or_else(|| {
                debug!(vertex_count, "graph rejected: adjacency matrix would be empty or too large");
                InvalidCapacity
            })?;

        Ok(Graph {
            vertex_count,
            adjacency: vec![false; cells].into_boxed_slice(),
        })
    }

    /// Creates a graph from a square matrix of zeros and ones, one row per vertex.
    ///
    /// Fails if the matrix is empty, if any row has the wrong length or holds anything other than
    /// `0` or `1`, or if the diagonal has a `1` on it.
    pub fn from_matrix<R: AsRef<[u8]>>(rows: &[R]) -> Result<Graph, InvalidArgument> {
        let mut graph = Graph::with_vertices(rows.len())?;

        for (from, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != graph.vertex_count || row.iter().any(|entry| *entry > 1) {
                return Err(MalformedMatrix { row: from, expected: graph.vertex_count }.into());
            }
            for (to, _) in row.iter().enumerate().filter(|(_, entry)| **entry == 1) {
                graph.add_edge(from, to)?;
            }
        }
        Ok(graph)
    }

    /// Creates a graph with `vertex_count` vertices and the given directed edges.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Graph, InvalidArgument>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Graph::with_vertices(vertex_count)?;
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().filter(|edge| **edge).count()
    }

    /// Adds an edge from `from` to `to`. Adding an edge that already exists does nothing.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), InvalidArgument> {
        let index = self.cell(from, to)?;
        if from == to {
            return Err(SelfLoop { vertex: from }.into());
        }
        self.adjacency[index] = true;
        Ok(())
    }

    /// Adds edges in both directions between `a` and `b`.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize) -> Result<(), InvalidArgument> {
        self.add_edge(a, b)?;
        self.add_edge(b, a)
    }

    /// Removes the edge from `from` to `to`, returning whether it existed.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool, IndexOutOfBounds> {
        let index = self.cell(from, to)?;
        Ok(std::mem::replace(&mut self.adjacency[index], false))
    }

    pub fn has_edge(&self, from: usize, to: usize) -> Result<bool, IndexOutOfBounds> {
        Ok(self.adjacency[self.cell(from, to)?])
    }

    /// Returns the vertices `vertex` has an edge to, in ascending order.
    pub fn neighbors(&self, vertex: usize) -> Result<Neighbors<'_>, IndexOutOfBounds> {
        self.check(vertex)?;
        Ok(self.successors(vertex))
    }

    pub(crate) fn check(&self, vertex: usize) -> Result<usize, IndexOutOfBounds> {
        if vertex < self.vertex_count {
            Ok(vertex)
        } else {
            Err(IndexOutOfBounds { index: vertex, len: self.vertex_count })
        }
    }

    /// Neighbours of a vertex that is already known to be in range.
    pub(crate) fn successors(&self, vertex: usize) -> Neighbors<'_> {
        Neighbors { row: self.row(vertex).iter().enumerate() }
    }

    fn row(&self, vertex: usize) -> &[bool] {
        let start = vertex * self.vertex_count;
        &self.adjacency[start..start + self.vertex_count]
    }

    fn cell(&self, from: usize, to: usize) -> Result<usize, IndexOutOfBounds> {
        Ok(self.check(from)? * self.vertex_count + self.check(to)?)
    }
}

/// An iterator over the out-neighbours of one vertex, lowest index first.
#[derive(Clone)]
pub struct Neighbors<'a> {
    pub(crate) row: Enumerate<slice::Iter<'a, bool>>,
}

impl Iterator for Neighbors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.row.by_ref().find(|(_, edge)| **edge).map(|(vertex, _)| vertex)
    }
}

impl DoubleEndedIterator for Neighbors<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.row.by_ref().rfind(|(_, edge)| **edge).map(|(vertex, _)| vertex)
    }
}

impl FusedIterator for Neighbors<'_> {}

impl Debug for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertex_count", &self.vertex_count)
            .field("edges", &self.edge_count())
            .finish()
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for vertex in 0..self.vertex_count {
            let row = self.row(vertex)
                .iter()
                .map(|edge| if *edge { "1" } else { "0" })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
