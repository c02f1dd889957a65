use anyhow::{Result, ensure};

use crate::color::DistanceMetric;

/// Knobs for a quantization run.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantizeOptions {
    n_colors: usize,
    metric: DistanceMetric,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            n_colors: 16,
            metric: DistanceMetric::Rgb,
        }
    }
}

impl QuantizeOptions {
    pub fn new(n_colors: usize, metric: DistanceMetric) -> Result<Self> {
        let mut opts = Self::default();
        opts.set_n_colors(n_colors)?;
        opts.set_metric(metric);
        Ok(opts)
    }

    /// Target palette size. Images with fewer distinct colors keep them all.
    pub fn n_colors(&self) -> usize {
        self.n_colors
    }

    pub fn set_n_colors(&mut self, n_colors: usize) -> Result<()> {
        ensure!(n_colors >= 1, "Number of colors must be at least 1");
        self.n_colors = n_colors;
        Ok(())
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn set_metric(&mut self, metric: DistanceMetric) {
        self.metric = metric;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = QuantizeOptions::default();
        assert_eq!(opts.n_colors(), 16);
        assert_eq!(opts.metric(), DistanceMetric::Rgb);
    }

    #[test]
    fn rejects_zero_colors() {
        assert!(QuantizeOptions::new(0, DistanceMetric::Rgb).is_err());
        let mut opts = QuantizeOptions::default();
        assert!(opts.set_n_colors(0).is_err());
        assert_eq!(opts.n_colors(), 16);
        opts.set_n_colors(3).unwrap();
        assert_eq!(opts.n_colors(), 3);
    }
}
