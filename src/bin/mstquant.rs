use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use mst_quantizer_wasm::{DistanceMetric, QuantizeOptions, mst_weight_bytes, quantize_bytes};
use anyhow::{Context, Result};
use log::{LevelFilter, debug};
use serde_json::json;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Metric {
    /// Euclidean distance over raw RGB components
    Rgb,
    /// CIE76 distance in L*a*b*
    Lab,
}

impl From<Metric> for DistanceMetric {
    fn from(m: Metric) -> Self {
        match m {
            Metric::Rgb => DistanceMetric::Rgb,
            Metric::Lab => DistanceMetric::Lab,
        }
    }
}

/// Reduce image colors by cutting a minimum spanning tree over the distinct colors.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of palette colors (clusters)
    #[arg(short = 'k', long, default_value_t = 16)]
    n_colors: usize,

    /// Color distance used to weight graph edges
    #[arg(short, long, value_enum, default_value_t = Metric::Rgb)]
    metric: Metric,

    /// Output directory
    #[arg(short = 'd', long)]
    out_dir: Option<PathBuf>,

    /// Output filename prefix (ignored when --out-dir supplied)
    #[arg(short = 'p', long, default_value = "quantized_")]
    prefix: String,

    /// Only print the MST weight of each input, write no images
    #[arg(long)]
    weight_only: bool,

    /// Print one JSON report per input instead of plain text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = QuantizeOptions::new(args.n_colors, args.metric.into())?;

    for input in &args.inputs {
        let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
        debug!("Read {} bytes from {}", bytes.len(), input.display());

        if args.weight_only {
            let weight = mst_weight_bytes(&bytes, options.metric())
                .with_context(|| format!("computing MST weight of {}", input.display()))?;
            if args.json {
                println!("{}", json!({ "input": input.display().to_string(), "mst_weight": weight }));
            } else {
                println!("{}: {weight}", input.display());
            }
            continue;
        }

        let (png, result) = quantize_bytes(&bytes, &options).context("quantization failed")?;

        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let out_path = match &args.out_dir {
            Some(dir) => dir.join(format!("{stem}.png")),
            None => PathBuf::from(format!("{}{stem}.png", args.prefix)),
        };

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, png).with_context(|| format!("writing {}", out_path.display()))?;

        if args.json {
            let report = json!({
                "input": input.display().to_string(),
                "output": out_path.display().to_string(),
                "metric": options.metric().name(),
                "distinct_colors": result.distinct_colors,
                "mst_weight": result.mst_weight,
                "palette": result.palette_hex(),
            });
            println!("{report}");
        } else {
            println!(
                "Saved → {} ({} → {} colors, MST weight {:.4})",
                out_path.display(),
                result.distinct_colors,
                result.palette.len(),
                result.mst_weight
            );
        }
    }

    Ok(())
}
