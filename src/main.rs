use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use polars::prelude::*;
use serde::Serialize;

use discflight_calc::{
    CanvasConfig, FlightNumbers, FlightPathSet, PathMetrics, ReleaseAngle, SvgPathSet, ThrowStyle,
    compute_flight_paths,
};

#[derive(Parser, Debug)]
#[command(about = "Draw disc golf flight paths from flight numbers", version)]
struct Args {
    /// Disc speed
    #[arg(long, allow_negative_numbers = true)]
    speed: Option<f64>,
    /// Disc glide
    #[arg(long, allow_negative_numbers = true)]
    glide: Option<f64>,
    /// Disc turn
    #[arg(long, allow_negative_numbers = true)]
    turn: Option<f64>,
    /// Disc fade
    #[arg(long, allow_negative_numbers = true)]
    fade: Option<f64>,
    /// CSV inventory with `speed, glide, turn, fade` and an optional `name` column
    #[arg(long, conflicts_with_all = ["speed", "glide", "turn", "fade"])]
    csv: Option<PathBuf>,
    /// Throw style, e.g. `rhbh` or `left-hand-forehand`
    #[arg(long, default_value = "right-hand-backhand")]
    throw: ThrowStyle,
    /// Only print this release angle
    #[arg(long)]
    angle: Option<ReleaseAngle>,
    /// JSON canvas configuration; missing fields use the standard canvas
    #[arg(long)]
    canvas: Option<PathBuf>,
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    /// Distance in feet mapped onto the canvas height
    #[arg(long)]
    max_distance: Option<f64>,
    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,
    /// Also print path metrics
    #[arg(long)]
    metrics: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Debug, Clone)]
struct Disc {
    name: String,
    flight: FlightNumbers,
}

#[derive(Serialize)]
struct DiscReport<'a> {
    name: &'a str,
    throw: ThrowStyle,
    flight: FlightNumbers,
    paths: FlightPathSet,
    svg: SvgPathSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<BTreeMap<ReleaseAngle, BTreeMap<String, f64>>>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let canvas = load_canvas(&args)?;
    let discs = load_discs(&args)?;
    info!("rendering {} disc(s) as {}", discs.len(), args.throw);

    let angles: Vec<ReleaseAngle> = match args.angle {
        Some(angle) => vec![angle],
        None => ReleaseAngle::ALL.to_vec(),
    };

    let mut reports = Vec::with_capacity(discs.len());
    for disc in &discs {
        let paths = compute_flight_paths(&disc.flight, args.throw, Some(&canvas))
            .with_context(|| format!("computing flight paths for {}", disc.name))?;
        let metrics = if args.metrics {
            let mut by_angle = BTreeMap::new();
            for &angle in &angles {
                let m = PathMetrics::from_path(&disc.flight, args.throw, angle, &canvas)?;
                by_angle.insert(angle, m.summary().into_iter().collect());
            }
            Some(by_angle)
        } else {
            None
        };
        reports.push(DiscReport {
            name: &disc.name,
            throw: args.throw,
            flight: disc.flight,
            paths,
            svg: paths.to_svg_paths(),
            metrics,
        });
    }

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        Format::Svg => {
            for report in &reports {
                println!("{} [{}] {}", report.name, report.flight, report.throw);
                for &angle in &angles {
                    println!("  {angle}: {}", report.paths.get(angle).to_svg_path());
                    if let Some(summary) = report.metrics.as_ref().and_then(|m| m.get(&angle)) {
                        for (key, value) in summary {
                            println!("    {key}: {value:.2}");
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn load_canvas(args: &Args) -> Result<CanvasConfig> {
    let file = match &args.canvas {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading canvas config {}", path.display()))?;
            let canvas = serde_json::from_str(&text)
                .with_context(|| format!("parsing canvas config {}", path.display()))?;
            Some(canvas)
        }
        None => None,
    };
    let canvas = resolve_canvas(file, args.width, args.height, args.max_distance);
    let summary: BTreeMap<_, _> = canvas.summary().into_iter().collect();
    debug!("canvas {summary:?}");
    Ok(canvas)
}

/// Apply the size flags. A canvas file keeps its own origin; without one the
/// origin follows the size like [`CanvasConfig::with_size`].
fn resolve_canvas(
    file: Option<CanvasConfig>,
    width: Option<f64>,
    height: Option<f64>,
    max_distance: Option<f64>,
) -> CanvasConfig {
    match file {
        Some(mut canvas) => {
            if let Some(width) = width {
                canvas.width = width;
            }
            if let Some(height) = height {
                canvas.height = height;
            }
            if let Some(max_distance) = max_distance {
                canvas.max_distance = max_distance;
            }
            canvas
        }
        None => {
            let standard = CanvasConfig::default();
            CanvasConfig::custom(
                width.unwrap_or(standard.width),
                height.unwrap_or(standard.height),
                None,
                None,
                max_distance,
            )
        }
    }
}

fn load_discs(args: &Args) -> Result<Vec<Disc>> {
    if let Some(path) = &args.csv {
        return read_inventory(path);
    }
    match (args.speed, args.glide, args.turn, args.fade) {
        (Some(speed), Some(glide), Some(turn), Some(fade)) => Ok(vec![Disc {
            name: "disc".to_string(),
            flight: FlightNumbers::new(speed, glide, turn, fade),
        }]),
        (None, None, None, None) => bail!("pass --speed, --glide, --turn and --fade, or --csv"),
        _ => bail!("all four flight numbers are required: --speed, --glide, --turn, --fade"),
    }
}

fn read_inventory(path: &Path) -> Result<Vec<Disc>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let df = CsvReader::new(file).has_header(true).finish()?;
    discs_from_frame(&df).with_context(|| format!("reading inventory {}", path.display()))
}

fn discs_from_frame(df: &DataFrame) -> Result<Vec<Disc>> {
    if df.height() == 0 {
        bail!("inventory has no discs");
    }

    let column = |name: &str| -> Result<Vec<Option<f64>>> {
        let series = df
            .column(name)
            .with_context(|| format!("no `{name}` column"))?
            .cast(&DataType::Float64)?;
        Ok(series.f64()?.into_iter().collect())
    };
    let speed = column("speed")?;
    let glide = column("glide")?;
    let turn = column("turn")?;
    let fade = column("fade")?;
    let names: Vec<Option<String>> = match df.column("name") {
        Ok(series) => series.utf8()?.into_iter().map(|n| n.map(str::to_string)).collect(),
        Err(_) => vec![None; df.height()],
    };

    let mut discs = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let (Some(s), Some(g), Some(t), Some(f)) = (speed[row], glide[row], turn[row], fade[row]) else {
            bail!("row {} is missing a flight number", row + 1);
        };
        discs.push(Disc {
            name: names[row].clone().unwrap_or_else(|| format!("disc {}", row + 1)),
            flight: FlightNumbers::new(s, g, t, f),
        });
    }
    Ok(discs)
}
