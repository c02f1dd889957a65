//! Complete weighted graph over a [`ColorSet`] and the edge order Kruskal
//! consumes.
//!
//! Vertices are the dense indices of the color set. Each unordered pair
//! `{u, v}` is generated once, always with `u < v`.

use std::cmp::Ordering;

use log::debug;
use palette::Lab;

use crate::color::{DistanceMetric, lab_distance};
use crate::color_set::ColorSet;

/// An undirected edge between two distinct colors of a [`ColorSet`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Lower endpoint index.
    pub u: usize,
    /// Higher endpoint index.
    pub v: usize,
    pub weight: f64,
}

impl Edge {
    /// Total order used by Kruskal: weight ascending, then the endpoint
    /// pair. Because the color set is sorted, comparing `(u, v)` is the
    /// same as comparing the endpoint colors canonically.
    pub fn order(&self, other: &Edge) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.u.cmp(&other.u))
            .then(self.v.cmp(&other.v))
    }
}

/// Number of edges in the complete graph on `n` vertices.
pub fn complete_edge_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Builds every edge of the complete graph on `colors`.
pub fn complete_graph(colors: &ColorSet, metric: DistanceMetric) -> Vec<Edge> {
    let n = colors.len();
    let mut edges = Vec::with_capacity(complete_edge_count(n));

    match metric {
        DistanceMetric::Rgb => {
            let rgb = colors.as_slice();
            for u in 0..n {
                for v in (u + 1)..n {
                    edges.push(Edge { u, v, weight: rgb[u].distance(&rgb[v]) });
                }
            }
        }
        DistanceMetric::Lab => {
            let labs: Vec<Lab> = colors.iter().map(|c| c.to_lab()).collect();
            for u in 0..n {
                for v in (u + 1)..n {
                    edges.push(Edge { u, v, weight: lab_distance(&labs[u], &labs[v]) });
                }
            }
        }
    }

    debug!("Built complete graph: {} colors, {} edges ({})", n, edges.len(), metric.name());
    edges
}

/// Sorts edges into Kruskal order (see [`Edge::order`]).
///
/// The key is total, so the result does not depend on the input order.
pub fn order_edges(edges: &mut [Edge]) {
    edges.sort_unstable_by(Edge::order);
}

/// [`complete_graph`] followed by [`order_edges`].
pub fn ordered_edges(colors: &ColorSet, metric: DistanceMetric) -> Vec<Edge> {
    let mut edges = complete_graph(colors, metric);
    order_edges(&mut edges);
    edges
}
