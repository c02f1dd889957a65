//! Color quantization driven by a minimum spanning tree over an image's
//! distinct colors.
//!
//! Pipeline: [`ColorSet::from_grid`] → [`graph::complete_graph`] →
//! [`graph::order_edges`] → [`mst::kruskal`], then optionally
//! [`Clustering::from_mst`] to cut the tree into `k` palette entries.

use wasm_bindgen::prelude::*;
use image::{DynamicImage, ImageFormat, RgbImage};
use js_sys::{Uint8Array, Array, Object, Reflect};
use anyhow::{Result, anyhow};
use log::info;

pub mod cluster;
pub mod color;
pub mod color_set;
pub mod disjoint_set;
pub mod graph;
pub mod grid;
pub mod mst;
pub mod options;

pub use cluster::Clustering;
pub use color::{Color, DistanceMetric};
pub use color_set::ColorSet;
pub use disjoint_set::DisjointSetForest;
pub use graph::Edge;
pub use grid::ColorGrid;
pub use mst::MinimumSpanningTree;
pub use options::QuantizeOptions;

/// Outcome of a quantization run.
#[derive(Clone, Debug)]
pub struct Quantization {
    /// The recolored grid.
    pub grid: ColorGrid,
    /// Cluster representatives, in cluster order.
    pub palette: Vec<Color>,
    /// Total weight of the MST over the input's distinct colors.
    pub mst_weight: f64,
    /// Number of distinct colors in the input.
    pub distinct_colors: usize,
}

impl Quantization {
    /// Palette as uppercase `RRGGBB` strings.
    pub fn palette_hex(&self) -> Vec<String> {
        self.palette.iter().map(Color::to_hex).collect()
    }

    /// The recolored grid, encoded as an RGB PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.grid.to_rgb_image()?)
    }
}

/// Quantizes a color grid down to at most `options.n_colors()` colors.
pub fn quantize_grid(grid: &ColorGrid, options: &QuantizeOptions) -> Quantization {
    let colors = ColorSet::from_grid(grid);
    let distinct_colors = colors.len();

    let mst = MinimumSpanningTree::build(colors, options.metric());
    let clustering = Clustering::from_mst(&mst, options.n_colors());
    let recolored = clustering.recolor(grid);

    info!(
        "Quantized {}x{} grid: {} distinct colors -> {} ({} metric, MST weight {:.4})",
        grid.width(),
        grid.height(),
        distinct_colors,
        clustering.cluster_count(),
        options.metric().name(),
        mst.total_weight()
    );

    Quantization {
        grid: recolored,
        palette: clustering.palette().to_vec(),
        mst_weight: mst.total_weight(),
        distinct_colors,
    }
}

/// Quantizes a decoded image. Alpha, if any, is dropped.
pub fn quantize_image(img: &DynamicImage, options: &QuantizeOptions) -> Quantization {
    quantize_grid(&ColorGrid::from_rgb_image(&img.to_rgb8()), options)
}

/// MST weight over the distinct colors of `grid`.
pub fn mst_weight(grid: &ColorGrid, metric: DistanceMetric) -> f64 {
    MinimumSpanningTree::build(ColorSet::from_grid(grid), metric).total_weight()
}

fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut cursor = std::io::Cursor::new(&mut buf);
        img.write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| anyhow!("PNG encode error: {e}"))?;
    }
    Ok(buf)
}

/// Quantize an encoded image with MST clustering.
///
/// Steps performed:
/// 1. Decode and collect the distinct colors.
/// 2. Build the MST over the complete color graph.
/// 3. Cut the `n_colors - 1` heaviest tree edges and recolor every pixel with
///    its cluster's mean color.
///
/// Returns an object with `image` (PNG bytes), `palette` (hex strings),
/// `mstWeight` and `distinctColors`.
#[wasm_bindgen]
pub fn quantize(
    input: Vec<u8>,
    n_colors: usize,
    metric: Option<String>,
) -> Result<Object, JsValue> {
    let metric = match metric {
        Some(name) => name
            .parse::<DistanceMetric>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => DistanceMetric::default(),
    };
    let options = QuantizeOptions::new(n_colors, metric)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let img = image::load_from_memory(&input)
        .map_err(|e| JsValue::from_str(&format!("Unable to decode image: {e}")))?;

    let result = quantize_image(&img, &options);
    let encoded = result
        .to_png()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    // Convert to JS types
    let img_js = Uint8Array::from(encoded.as_slice());
    let palette_js = Array::new();
    for hex in result.palette_hex() {
        palette_js.push(&JsValue::from_str(&hex));
    }

    let out = Object::new();
    Reflect::set(&out, &JsValue::from_str("image"), &img_js)?;
    Reflect::set(&out, &JsValue::from_str("palette"), &palette_js)?;
    Reflect::set(&out, &JsValue::from_str("mstWeight"), &JsValue::from_f64(result.mst_weight))?;
    Reflect::set(
        &out,
        &JsValue::from_str("distinctColors"),
        &JsValue::from_f64(result.distinct_colors as f64),
    )?;

    Ok(out)
}

/// Native counterpart of [`quantize`]: returns the PNG bytes and the run
/// summary.
#[cfg(not(target_arch = "wasm32"))]
pub fn quantize_bytes(input: &[u8], options: &QuantizeOptions) -> Result<(Vec<u8>, Quantization)> {
    let img = image::load_from_memory(input)?;
    let result = quantize_image(&img, options);
    let png = result.to_png()?;
    Ok((png, result))
}

/// MST weight over the distinct colors of an encoded image.
#[cfg(not(target_arch = "wasm32"))]
pub fn mst_weight_bytes(input: &[u8], metric: DistanceMetric) -> Result<f64> {
    let img = image::load_from_memory(input)?;
    Ok(mst_weight(&ColorGrid::from_rgb_image(&img.to_rgb8()), metric))
}
