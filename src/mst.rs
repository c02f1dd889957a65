//! Minimum spanning tree over the complete color graph via Kruskal's
//! algorithm.

use log::debug;

use crate::color::{Color, DistanceMetric};
use crate::color_set::ColorSet;
use crate::disjoint_set::DisjointSetForest;
use crate::graph::{Edge, ordered_edges};

/// A minimum spanning tree over a [`ColorSet`].
///
/// Holds exactly `max(N - 1, 0)` edges, in the order Kruskal accepted them
/// (weight ascending).
#[derive(Clone, Debug)]
pub struct MinimumSpanningTree {
    colors: ColorSet,
    edges: Vec<Edge>,
    total_weight: f64,
}

impl MinimumSpanningTree {
    /// Runs the whole pipeline on `colors`: complete graph, edge order,
    /// Kruskal.
    pub fn build(colors: ColorSet, metric: DistanceMetric) -> Self {
        if colors.len() <= 1 {
            return Self::empty(colors);
        }
        let edges = ordered_edges(&colors, metric);
        kruskal(colors, edges)
    }

    fn empty(colors: ColorSet) -> Self {
        Self {
            colors,
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    pub fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// Accepted edges, by dense color index.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Accepted edges with their endpoint colors resolved.
    pub fn color_edges(&self) -> impl Iterator<Item = (Color, Color, f64)> + '_ {
        self.edges
            .iter()
            .map(|e| (self.colors.color(e.u), self.colors.color(e.v), e.weight))
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Kruskal's algorithm over `edges`, which must already be in
/// [`Edge::order`] order.
///
/// An edge is accepted iff its endpoints are in different groups. The loop
/// stops as soon as `N - 1` edges are accepted.
///
/// Panics if `edges` does not connect every color.
pub fn kruskal(colors: ColorSet, edges: impl IntoIterator<Item = Edge>) -> MinimumSpanningTree {
    let n = colors.len();
    if n <= 1 {
        return MinimumSpanningTree::empty(colors);
    }

    let target = n - 1;
    let mut forest = DisjointSetForest::new(n);
    let mut accepted = Vec::with_capacity(target);
    let mut total_weight = 0.0;
    let mut considered = 0usize;

    for edge in edges {
        considered += 1;
        let ru = forest.find(edge.u);
        let rv = forest.find(edge.v);
        if ru == rv {
            continue;
        }

        forest.union(ru, rv);
        total_weight += edge.weight;
        accepted.push(edge);

        if accepted.len() == target {
            break;
        }
    }

    // Running out of edges before N - 1 are accepted means the sequence was
    // not a complete graph.
    assert_eq!(
        forest.group_count(),
        1,
        "edge sequence did not connect all {n} colors"
    );
    debug!(
        "Kruskal accepted {} of {} considered edges, total weight {:.4}",
        accepted.len(),
        considered,
        total_weight
    );

    MinimumSpanningTree {
        colors,
        edges: accepted,
        total_weight,
    }
}
