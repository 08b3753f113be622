//! A generic undirected graph that plugs straight into the search engine:
//! `|v| graph.neighbors_for_vertex(v)` is a ready-made successor function.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A connection between two vertices, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
}

impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }

    pub fn reversed(&self) -> Edge {
        Edge {
            u: self.v,
            v: self.u,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.u, self.v)
    }
}

/// An undirected graph over client-defined vertices.
///
/// Vertices are stored in insertion order; each edge is recorded in both
/// endpoints' adjacency lists.
#[derive(Debug, Clone, Default)]
pub struct Graph<V: Eq + Clone> {
    vertices: Vec<V>,
    edges: Vec<Vec<Edge>>,
}

impl<V: Eq + Clone> Graph<V> {
    pub fn new(vertices: Vec<V>) -> Self {
        let edges = vec![Vec::new(); vertices.len()];
        Self { vertices, edges }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        self.vertices.push(vertex);
        self.edges.push(Vec::new());
        self.vertex_count() - 1
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges[edge.v].push(edge.reversed());
        self.edges[edge.u].push(edge);
    }

    pub fn add_edge_by_indices(&mut self, u: usize, v: usize) {
        self.add_edge(Edge::new(u, v));
    }

    /// Connects two vertices by value. Panics if either is absent, like
    /// indexing with a bad index would.
    pub fn add_edge_by_vertices(&mut self, first: &V, second: &V) {
        let u = self.index_of(first).expect("first vertex not in graph");
        let v = self.index_of(second).expect("second vertex not in graph");
        self.add_edge_by_indices(u, v);
    }

    pub fn vertex_at(&self, index: usize) -> &V {
        &self.vertices[index]
    }

    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.iter().position(|candidate| candidate == vertex)
    }

    pub fn neighbors_for_index(&self, index: usize) -> Vec<V> {
        self.edges[index]
            .iter()
            .map(|edge| self.vertex_at(edge.v).clone())
            .collect()
    }

    pub fn neighbors_for_vertex(&self, vertex: &V) -> Vec<V> {
        match self.index_of(vertex) {
            Some(index) => self.neighbors_for_index(index),
            None => Vec::new(),
        }
    }

    pub fn edges_for_index(&self, index: usize) -> &[Edge] {
        &self.edges[index]
    }

    pub fn edges_for_vertex(&self, vertex: &V) -> &[Edge] {
        match self.index_of(vertex) {
            Some(index) => self.edges_for_index(index),
            None => &[],
        }
    }
}

impl<V: Eq + Clone + fmt::Debug> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.vertex_count() {
            writeln!(
                f,
                "{:?} -> {:?}",
                self.vertex_at(index),
                self.neighbors_for_index(index)
            )?;
        }
        Ok(())
    }
}
