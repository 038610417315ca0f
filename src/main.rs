use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;

use radar::data::{load_values, parse_values};
use radar::{LineSet, Margin, RadarChart, RadarConfig, RadarLayout, RenderConfig, Rounding};

#[derive(Parser, Debug)]
#[command(name = "radar")]
#[command(about = "Radar (spider) charts as SVG", version)]
struct Args {
    /// Comma separated values, one per axis (e.g. "7,3.5,9")
    #[arg(long, required_unless_present = "csv", conflicts_with = "csv")]
    values: Option<String>,

    /// CSV file with a `label,value` header, one row per axis
    #[arg(long)]
    csv: Option<String>,

    /// Comma separated axis labels; overrides labels from --csv
    #[arg(long)]
    labels: Option<String>,

    /// Value drawn at the outer edge
    #[arg(long = "max", default_value_t = 100.0)]
    max_value: f64,

    /// Width and height of the chart square in pixels
    #[arg(long, default_value_t = 300.0)]
    size: f64,

    /// Web rings as tenths of the radius, e.g. "2,4,6,8"
    #[arg(long)]
    rings: Option<String>,

    /// Cap values above --max at --max
    #[arg(long)]
    clamp: bool,

    /// Keep sub-pixel precision for axis endpoints
    #[arg(long)]
    exact: bool,

    /// Skip the outer polygon
    #[arg(long)]
    no_chart: bool,

    /// Skip the spokes
    #[arg(long)]
    no_spokes: bool,

    /// Skip the data polygon
    #[arg(long)]
    no_data: bool,

    /// Margin around the chart in pixels (room for labels)
    #[arg(long, default_value_t = 40)]
    margin: u32,

    /// Optional CSS override file path; if omitted embedded CSS is used
    #[arg(long)]
    css: Option<String>,

    /// Output SVG path
    #[arg(short = 'o', long = "out")]
    out: String,
}

fn parse_rings(s: &str) -> Result<Vec<u8>> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse::<u8>()
                .map_err(|_| anyhow!("bad ring '{p}': expected an integer 1-9"))
        })
        .collect()
}

fn parse_labels(s: &str) -> Vec<String> {
    s.split(',').map(|p| p.trim().to_string()).collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("radar=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let (values, mut labels) = match (&args.values, &args.csv) {
        (Some(v), _) => (parse_values(v)?, None),
        (None, Some(path)) => {
            let series = load_values(path).with_context(|| format!("reading {path}"))?;
            (series.values, Some(series.labels))
        }
        (None, None) => return Err(anyhow!("either --values or --csv is required")),
    };
    if let Some(l) = &args.labels {
        labels = Some(parse_labels(l));
    }

    let ring_selectors = match &args.rings {
        Some(r) => parse_rings(r)?,
        None => Vec::new(),
    };

    let cfg = RadarConfig {
        size: args.size,
        max_value: args.max_value,
        labels,
        ring_selectors,
        clamp_to_max: args.clamp,
        rounding: if args.exact {
            Rounding::Exact
        } else {
            Rounding::Pixel
        },
        lines: LineSet {
            chart: !args.no_chart,
            data: !args.no_data,
            spokes: !args.no_spokes,
        },
    };

    let layout = RadarLayout::new(cfg, values).context("invalid chart configuration")?;
    info!(axes = layout.axis_count(), out = %args.out, "rendering radar chart");

    let render_cfg = RenderConfig {
        margin: Margin::uniform(args.margin),
        css_path: args.css,
        ..RenderConfig::default()
    };
    RadarChart::new(&layout, render_cfg)
        .to_file(&args.out)
        .with_context(|| format!("writing {}", args.out))?;

    Ok(())
}
