use tracing::trace;

use super::{Graph, VisitedSet};
use crate::collections::dynamic::{LinkedQueue, LinkedStack};
use crate::util::error::IndexOutOfBounds;

/// Graphs with more vertices than this are searched depth-first with an explicit stack, since a
/// recursive search can go as deep as the vertex count.
pub const MAX_RECURSION_DEPTH: usize = 1024;

impl Graph {
    /// Returns the vertices reachable from `source` in depth-first order, lower indices first.
    ///
    /// Small graphs are searched recursively. Larger ones use [`Graph::dfs_iterative`], which
    /// produces the same order.
    pub fn dfs(&self, source: usize) -> Result<Vec<usize>, IndexOutOfBounds> {
        if self.vertex_count > MAX_RECURSION_DEPTH {
            return self.dfs_iterative(source);
        }

        self.check(source)?;
        let mut visited = VisitedSet::new(self.vertex_count);
        let mut order = Vec::with_capacity(self.vertex_count);
        self.visit(source, &mut visited, &mut order);
        Ok(order)
    }

    /// Depth-first search with a [`LinkedStack`] as the frontier.
    ///
    /// Vertices are marked when they are popped rather than when they are pushed, and neighbours
    /// are pushed highest index first. Together these reproduce the recursive visiting order.
    pub fn dfs_iterative(&self, source: usize) -> Result<Vec<usize>, IndexOutOfBounds> {
        self.check(source)?;
        let mut visited = VisitedSet::new(self.vertex_count);
        let mut order = Vec::with_capacity(self.vertex_count);
        let mut frontier = LinkedStack::new();
        frontier.push(source);

        while let Ok(vertex) = frontier.pop() {
            if !visited.insert(vertex) {
                continue;
            }
            trace!(vertex, pending = frontier.len(), "dfs visit");
            order.push(vertex);

            for next in self.successors(vertex).rev() {
                if !visited.contains(next) {
                    frontier.push(next);
                }
            }
        }
        Ok(order)
    }

    /// Returns the vertices reachable from `source` in breadth-first order, lower indices first
    /// within each level.
    ///
    /// Vertices are marked as they are enqueued, so none is ever queued twice.
    pub fn bfs(&self, source: usize) -> Result<Vec<usize>, IndexOutOfBounds> {
        self.check(source)?;
        let mut visited = VisitedSet::new(self.vertex_count);
        let mut order = Vec::with_capacity(self.vertex_count);
        let mut frontier = LinkedQueue::new();
        visited.insert(source);
        frontier.enqueue(source);

        while let Ok(vertex) = frontier.dequeue() {
            trace!(vertex, queued = frontier.len(), "bfs visit");
            order.push(vertex);

            for next in self.successors(vertex) {
                if visited.insert(next) {
                    frontier.enqueue(next);
                }
            }
        }
        Ok(order)
    }

    /// Returns the number of edges on the shortest path from `source` to each vertex, or [`None`]
    /// for vertices that cannot be reached.
    pub fn bfs_distances(&self, source: usize) -> Result<Vec<Option<usize>>, IndexOutOfBounds> {
        self.check(source)?;
        let mut distances = vec![None; self.vertex_count];
        let mut frontier = LinkedQueue::new();
        distances[source] = Some(0);
        frontier.enqueue((source, 0));

        while let Ok((vertex, distance)) = frontier.dequeue() {
            for next in self.successors(vertex) {
                if distances[next].is_none() {
                    distances[next] = Some(distance + 1);
                    frontier.enqueue((next, distance + 1));
                }
            }
        }
        Ok(distances)
    }

    /// Returns true if every vertex can be reached from `source`.
    pub fn is_connected_from(&self, source: usize) -> Result<bool, IndexOutOfBounds> {
        Ok(self.bfs(source)?.len() == self.vertex_count)
    }

    fn visit(&self, vertex: usize, visited: &mut VisitedSet, order: &mut Vec<usize>) {
        visited.insert(vertex);
        trace!(vertex, visited = order.len(), "dfs visit");
        order.push(vertex);

        for next in self.successors(vertex) {
            if !visited.contains(next) {
                self.visit(next, visited, order);
            }
        }
    }
}
