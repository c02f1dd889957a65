use std::collections::HashSet;

use crate::color::Color;
use crate::grid::ColorGrid;

/// The distinct colors of a grid.
///
/// Colors are stored sorted in canonical order, which gives every color a
/// dense index `0..len()` that is identical across runs on the same input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorSet {
    colors: Vec<Color>,
}

impl ColorSet {
    /// Collects each distinct color of `grid` exactly once.
    pub fn from_grid(grid: &ColorGrid) -> Self {
        Self::from_colors(grid.pixels().iter().copied())
    }

    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        let distinct: HashSet<Color> = colors.into_iter().collect();
        let mut colors: Vec<Color> = distinct.into_iter().collect();
        colors.sort_unstable();

        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at dense index `index`. Panics if out of range.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index]
    }

    pub fn index_of(&self, color: &Color) -> Option<usize> {
        self.colors.binary_search(color).ok()
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.index_of(color).is_some()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Color> {
        self.colors.iter()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}
