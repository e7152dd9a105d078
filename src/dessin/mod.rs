// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dessins d'enfants built from monodromy triples.
//!
//! The dessin here is the single-colour form: one white vertex per sheet and,
//! for each sheet i, one black edge joining i and σ₁(i). σ₀ and σ∞ do not
//! contribute edges. Fixed points of σ₁ become self-loops and a 2-cycle
//! gives two parallel edges, so the result is a multigraph.
//!
//! The dessin is plain data: layout and drawing belong to whatever tool reads
//! the export formats in [`export`].
//!
//! # Examples
//!
//! ```
//! use belyi_monodromy::{build_dessin, search};
//!
//! let triples = search(3).unwrap();
//! let dessin = build_dessin(&triples[0]);
//! assert_eq!(dessin.vertices().len(), 3);
//! assert_eq!(dessin.edges().len(), 3);
//! ```

pub mod export;

use crate::monodromy::MonodromyTriple;
use serde::Serialize;

/// Vertex colour tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexColor {
    White,
}

/// Edge colour tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeColor {
    Black,
}

/// A sheet of the cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Vertex {
    pub sheet: usize,
    pub color: VertexColor,
}

/// An undirected edge `{source, target}`; `source == target` is a loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub color: EdgeColor,
}

impl Edge {
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Undirected multigraph on the sheets {1..n}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dessin {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

/// Build the dessin of `triple`: vertices 1..n and, for every i, the edge
/// {i, σ₁(i)}, in order of i.
pub fn build_dessin(triple: &MonodromyTriple) -> Dessin {
    let sigma_1 = triple.sigma_1();
    let degree = triple.degree();

    let vertices = (1..=degree)
        .map(|sheet| Vertex {
            sheet,
            color: VertexColor::White,
        })
        .collect();
    let edges = (1..=degree)
        .map(|i| Edge {
            source: i,
            target: sigma_1.apply(i),
            color: EdgeColor::Black,
        })
        .collect();

    Dessin { vertices, edges }
}

impl Dessin {
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of sheets.
    pub fn degree(&self) -> usize {
        self.vertices.len()
    }

    /// Edges joining a sheet to itself.
    pub fn self_loops(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.is_loop())
    }

    /// Edge ends at `sheet`; a loop counts twice.
    pub fn valence(&self, sheet: usize) -> usize {
        self.edges
            .iter()
            .map(|e| usize::from(e.source == sheet) + usize::from(e.target == sheet))
            .sum()
    }

    /// Number of connected components.
    pub fn component_count(&self) -> usize {
        let n = self.degree();
        let mut uf = UnionFind::new(n);
        for edge in &self.edges {
            uf.union(edge.source - 1, edge.target - 1);
        }
        (0..n).filter(|&x| uf.find(x) == x).count()
    }

    /// True when every sheet can be reached from every other.
    pub fn is_connected(&self) -> bool {
        self.component_count() <= 1
    }
}

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, x: usize, y: usize) {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return;
        }
        if self.rank[rx] < self.rank[ry] {
            self.parent[rx] = ry;
        } else if self.rank[rx] > self.rank[ry] {
            self.parent[ry] = rx;
        } else {
            self.parent[ry] = rx;
            self.rank[rx] += 1;
        }
    }
}
