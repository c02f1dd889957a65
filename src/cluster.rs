//! Cutting an MST into `k` color clusters and recoloring a grid with them.

use log::debug;

use crate::color::Color;
use crate::color_set::ColorSet;
use crate::disjoint_set::DisjointSetForest;
use crate::grid::ColorGrid;
use crate::mst::MinimumSpanningTree;

/// A partition of a color set into clusters, each with a representative
/// color.
#[derive(Clone, Debug)]
pub struct Clustering {
    colors: ColorSet,
    /// Cluster id of each color, by dense color index.
    assignment: Vec<usize>,
    representatives: Vec<Color>,
}

impl Clustering {
    /// Removes the `k - 1` heaviest edges of `mst` and groups the colors by
    /// the connected components that remain.
    ///
    /// `k` is clamped to `1..=N`. Clusters are numbered by their smallest
    /// member color, and each representative is the rounded mean of the
    /// cluster's distinct colors.
    pub fn from_mst(mst: &MinimumSpanningTree, k: usize) -> Self {
        let colors = mst.colors().clone();
        let n = colors.len();
        if n == 0 {
            return Self {
                colors,
                assignment: Vec::new(),
                representatives: Vec::new(),
            };
        }

        let k = k.clamp(1, n);
        // Accepted edges are in ascending Kruskal order, so the heaviest
        // k - 1 are at the tail.
        let kept = &mst.edges()[..n - k];

        let mut forest = DisjointSetForest::new(n);
        for edge in kept {
            let ru = forest.find(edge.u);
            let rv = forest.find(edge.v);
            forest.union(ru, rv);
        }
        debug_assert_eq!(forest.group_count(), k);

        let mut cluster_of_root: Vec<Option<usize>> = vec![None; n];
        let mut assignment = Vec::with_capacity(n);
        let mut sums: Vec<[u32; 4]> = Vec::with_capacity(k);

        for index in 0..n {
            let root = forest.find(index);
            let cluster = *cluster_of_root[root].get_or_insert_with(|| {
                sums.push([0; 4]);
                sums.len() - 1
            });
            let c = colors.color(index);
            let sum = &mut sums[cluster];
            sum[0] += c.red as u32;
            sum[1] += c.green as u32;
            sum[2] += c.blue as u32;
            sum[3] += 1;
            assignment.push(cluster);
        }

        let representatives: Vec<Color> = sums.iter().map(|s| rounded_mean(s)).collect();
        debug!("Cut MST of {} colors into {} clusters", n, representatives.len());

        Self {
            colors,
            assignment,
            representatives,
        }
    }

    pub fn cluster_count(&self) -> usize {
        self.representatives.len()
    }

    /// Representative color of every cluster, by cluster id.
    pub fn palette(&self) -> &[Color] {
        &self.representatives
    }

    /// Cluster id of `color`, if it belongs to the clustered color set.
    pub fn cluster_of(&self, color: &Color) -> Option<usize> {
        self.colors.index_of(color).map(|i| self.assignment[i])
    }

    /// Member colors of cluster `cluster`, in canonical order.
    pub fn members(&self, cluster: usize) -> impl Iterator<Item = Color> + '_ {
        self.assignment
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == cluster)
            .map(|(i, _)| self.colors.color(i))
    }

    /// Replaces every pixel of `grid` with its cluster's representative.
    ///
    /// Panics if `grid` holds a color outside the clustered color set.
    pub fn recolor(&self, grid: &ColorGrid) -> ColorGrid {
        grid.map(|c| {
            let cluster = self
                .cluster_of(&c)
                .unwrap_or_else(|| panic!("color {c:?} is not part of the clustered set"));
            self.representatives[cluster]
        })
    }
}

fn rounded_mean(sum: &[u32; 4]) -> Color {
    let count = sum[3];
    let avg = |total: u32| ((total + count / 2) / count) as u8;
    Color::new(avg(sum[0]), avg(sum[1]), avg(sum[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DistanceMetric;

    fn mst(colors: &[(u8, u8, u8)]) -> MinimumSpanningTree {
        let set = ColorSet::from_colors(colors.iter().map(|&(r, g, b)| Color::new(r, g, b)));
        MinimumSpanningTree::build(set, DistanceMetric::Rgb)
    }

    #[test]
    fn empty_set_has_no_clusters() {
        let clustering = Clustering::from_mst(&mst(&[]), 4);
        assert_eq!(clustering.cluster_count(), 0);
        assert!(clustering.recolor(&ColorGrid::default()).is_empty());
    }

    #[test]
    fn splits_two_far_groups() {
        let tree = mst(&[(0, 0, 0), (2, 0, 0), (200, 200, 200), (202, 200, 200)]);
        let clustering = Clustering::from_mst(&tree, 2);
        assert_eq!(clustering.cluster_count(), 2);
        assert_eq!(clustering.palette(), &[Color::new(1, 0, 0), Color::new(201, 200, 200)]);
        assert_eq!(clustering.cluster_of(&Color::new(2, 0, 0)), Some(0));
        assert_eq!(clustering.cluster_of(&Color::new(200, 200, 200)), Some(1));
        assert_eq!(clustering.cluster_of(&Color::new(1, 1, 1)), None);
    }

    #[test]
    fn k_is_clamped() {
        let tree = mst(&[(0, 0, 0), (10, 0, 0), (20, 0, 0)]);
        let one = Clustering::from_mst(&tree, 0);
        assert_eq!(one.cluster_count(), 1);
        assert_eq!(one.palette(), &[Color::new(10, 0, 0)]);

        let all = Clustering::from_mst(&tree, 99);
        assert_eq!(all.cluster_count(), 3);
        assert_eq!(all.members(1).collect::<Vec<_>>(), vec![Color::new(10, 0, 0)]);
    }

    #[test]
    fn mean_rounds_half_up() {
        let tree = mst(&[(0, 0, 0), (1, 0, 0)]);
        let clustering = Clustering::from_mst(&tree, 1);
        assert_eq!(clustering.palette(), &[Color::new(1, 0, 0)]);
    }

    #[test]
    fn recolor_maps_pixels_to_representatives() {
        let a = Color::new(0, 0, 0);
        let b = Color::new(4, 0, 0);
        let c = Color::new(250, 250, 250);
        let grid = ColorGrid::new(2, 2, vec![a, b, c, a]).unwrap();
        let tree = MinimumSpanningTree::build(ColorSet::from_grid(&grid), DistanceMetric::Rgb);
        let out = Clustering::from_mst(&tree, 2).recolor(&grid);
        let ab = Color::new(2, 0, 0);
        assert_eq!(out.pixels(), &[ab, ab, c, ab]);
        assert_eq!(ColorSet::from_grid(&out).len(), 2);
    }

    #[test]
    #[should_panic(expected = "not part of the clustered set")]
    fn recolor_rejects_foreign_colors() {
        let tree = mst(&[(0, 0, 0)]);
        let grid = ColorGrid::filled(1, 1, Color::new(1, 1, 1)).unwrap();
        Clustering::from_mst(&tree, 1).recolor(&grid);
    }
}
