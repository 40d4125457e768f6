#![cfg(test)]

use rand::prelude::*;

use super::*;
use crate::collections::dynamic::LinkedStack;
use crate::util::error::{
    ContainerEmpty, ContainerError, IndexOutOfBounds, InvalidArgument, InvalidCapacity,
    MalformedMatrix, SelfLoop,
};

fn random_connected_graph(rng: &mut StdRng, vertex_count: usize) -> Graph {
    let mut graph = Graph::with_vertices(vertex_count).expect("vertex count is non-zero");
    // A random spanning tree keeps every vertex reachable from 0, extra edges add cycles.
    for vertex in 1..vertex_count {
        let parent = rng.random_range(0..vertex);
        graph.add_undirected_edge(parent, vertex).expect("vertices are in range");
    }
    for _ in 0..vertex_count {
        let (from, to) = (rng.random_range(0..vertex_count), rng.random_range(0..vertex_count));
        if from != to {
            graph.add_edge(from, to).expect("vertices are in range");
        }
    }
    graph
}

#[test]
fn test_scenario() {
    let graph = Graph::from_edges(4, [(0, 1), (0, 2), (1, 3)]).expect("edges are valid");

    assert_eq!(graph.dfs(0), Ok(vec![0, 1, 3, 2]));
    assert_eq!(graph.dfs_iterative(0), Ok(vec![0, 1, 3, 2]));
    assert_eq!(graph.bfs(0), Ok(vec![0, 1, 2, 3]));
    assert_eq!(graph.bfs_distances(0), Ok(vec![Some(0), Some(1), Some(1), Some(2)]));
    assert_eq!(graph.is_connected_from(0), Ok(true));
}

#[test]
fn test_directed_edges_limit_reach() {
    let graph = Graph::from_matrix(&[
        [0, 1, 0, 0],
        [0, 0, 1, 0],
        [1, 0, 0, 0],
        [0, 0, 1, 0],
    ])
    .expect("matrix is well formed");

    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.dfs(0), Ok(vec![0, 1, 2]), "Vertex 3 has no incoming edges.");
    assert_eq!(graph.bfs(3), Ok(vec![3, 2, 0, 1]));
    assert_eq!(graph.bfs_distances(0), Ok(vec![Some(0), Some(1), Some(2), None]));
    assert_eq!(graph.is_connected_from(0), Ok(false));
    assert_eq!(graph.is_connected_from(3), Ok(true));
    assert_eq!(graph.to_string(), "0 1 0 0\n0 0 1 0\n1 0 0 0\n0 0 1 0\n");
}

#[test]
fn test_edges() {
    let mut graph = Graph::with_vertices(3).expect("vertex count is non-zero");
    graph.add_edge(0, 2).expect("vertices are in range");
    graph.add_edge(0, 1).expect("vertices are in range");

    assert_eq!(graph.has_edge(0, 2), Ok(true));
    assert_eq!(graph.has_edge(2, 0), Ok(false), "Edges should be directed.");
    assert_eq!(
        graph.neighbors(0).map(|n| n.collect::<Vec<_>>()),
        Ok(vec![1, 2])
    );
    assert_eq!(
        graph.neighbors(0).map(|n| n.rev().collect::<Vec<_>>()),
        Ok(vec![2, 1])
    );

    assert_eq!(graph.remove_edge(0, 2), Ok(true));
    assert_eq!(graph.remove_edge(0, 2), Ok(false));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_invalid_arguments() {
    assert_eq!(Graph::with_vertices(0).err(), Some(InvalidCapacity));
    assert_eq!(
        Graph::with_vertices(1 << (usize::BITS / 2)).err(),
        Some(InvalidCapacity),
        "A matrix whose cell count overflows should be rejected, not wrapped."
    );
    assert_eq!(
        Graph::with_vertices(usize::MAX).err(),
        Some(InvalidCapacity)
    );
    assert_eq!(
        Graph::from_edges(usize::MAX, [(0, 1)]).err(),
        Some(InvalidCapacity.into())
    );

    let mut graph = Graph::with_vertices(2).expect("vertex count is non-zero");
    assert_eq!(
        graph.add_edge(1, 1),
        Err(InvalidArgument::SelfLoop(SelfLoop { vertex: 1 }))
    );
    assert_eq!(
        graph.add_edge(0, 2),
        Err(InvalidArgument::IndexOutOfBounds(IndexOutOfBounds { index: 2, len: 2 }))
    );
    assert_eq!(graph.dfs(5), Err(IndexOutOfBounds { index: 5, len: 2 }));
    assert_eq!(graph.bfs(2), Err(IndexOutOfBounds { index: 2, len: 2 }));

    let ragged: [&[u8]; 2] = [&[0, 1], &[0]];
    assert_eq!(
        Graph::from_matrix(&ragged).err(),
        Some(InvalidArgument::MalformedMatrix(MalformedMatrix { row: 1, expected: 2 }))
    );
    assert_eq!(
        Graph::from_matrix(&[[0, 2], [0, 0]]).err(),
        Some(InvalidArgument::MalformedMatrix(MalformedMatrix { row: 0, expected: 2 })),
        "Weighted entries should be rejected."
    );
    assert!(
        Graph::from_matrix(&[[1, 0], [0, 0]]).is_err_and(|e| e.is_self_loop()),
        "A one on the diagonal should be rejected."
    );
    assert_eq!(Graph::from_matrix::<[u8; 0]>(&[]).err(), Some(InvalidCapacity.into()));
}

#[test]
fn test_traversals_visit_every_vertex_once() {
    let mut rng = StdRng::seed_from_u64(11);

    for vertex_count in 1..40 {
        let graph = random_connected_graph(&mut rng, vertex_count);
        let expected = (0..vertex_count).collect::<Vec<_>>();

        let dfs = graph.dfs(0).expect("0 is a vertex");
        let bfs = graph.bfs(0).expect("0 is a vertex");
        for order in [&dfs, &bfs] {
            let mut sorted = order.clone();
            sorted.sort();
            assert_eq!(sorted, expected, "Every vertex should be visited exactly once.");
        }

        assert_eq!(
            graph.dfs_iterative(0).as_ref(),
            Ok(&dfs),
            "The explicit-stack search should reproduce the recursive order."
        );

        let distances = graph.bfs_distances(0).expect("0 is a vertex");
        assert!(
            bfs.windows(2).all(|pair| distances[pair[0]] <= distances[pair[1]]),
            "Breadth-first order should never move closer to the source."
        );
    }
}

#[test]
fn test_deep_graph_does_not_recurse() {
    let vertex_count = MAX_RECURSION_DEPTH * 2;
    let graph = Graph::from_edges(vertex_count, (1..vertex_count).map(|v| (v - 1, v)))
        .expect("edges are valid");

    let order = graph.dfs(0).expect("0 is a vertex");
    assert_eq!(order.len(), vertex_count);
    assert!(order.iter().copied().eq(0..vertex_count));
}

#[test]
fn test_traversals_are_independent() {
    let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).expect("edges are valid");
    assert_eq!(graph.dfs(0), Ok(vec![0, 1, 2]));
    assert_eq!(
        graph.dfs(1),
        Ok(vec![1, 2]),
        "Visited state should not carry over between traversals."
    );
    assert_eq!(graph.bfs(0), Ok(vec![0, 1, 2]));
}

#[test]
fn test_errors_propagate_as_container_error() {
    fn deepest_from(edges: &[(usize, usize)], source: usize) -> Result<usize, ContainerError> {
        let graph = Graph::from_edges(4, edges.iter().copied())?;
        let mut stack = graph.dfs(source)?.into_iter().collect::<LinkedStack<_>>();
        Ok(stack.pop()?)
    }

    assert_eq!(deepest_from(&[(0, 1), (1, 3)], 0), Ok(3));

    let self_loop = deepest_from(&[(2, 2)], 0).expect_err("self-loops are rejected");
    assert!(self_loop.is_invalid_argument());
    assert_eq!(
        InvalidArgument::try_from(self_loop).ok(),
        Some(InvalidArgument::SelfLoop(SelfLoop { vertex: 2 }))
    );

    assert_eq!(
        deepest_from(&[], 9),
        Err(ContainerError::from(IndexOutOfBounds { index: 9, len: 4 }))
    );
    assert_ne!(deepest_from(&[], 9), Err(ContainerEmpty.into()));
}
