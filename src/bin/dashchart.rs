use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dashchart::layout::{LayoutOptions, Orientation, compute_layout};
use dashchart::{PipelineConfig, SortStrategy, available_strategies, input, pipeline};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dashchart",
    version,
    about = "Classify, normalize, sort & lay out dashboard chart data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full pipeline on a CSV/JSON record file and print the chart description.
    Prepare(PrepareArgs),
    /// Print layout parameters for a surface size.
    Layout(LayoutArgs),
    /// List the sort strategies a configuration offers.
    Strategies(StrategiesArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OrientationArg {
    Vertical,
    Horizontal,
}

impl From<OrientationArg> for Orientation {
    fn from(o: OrientationArg) -> Self {
        match o {
            OrientationArg::Vertical => Orientation::Vertical,
            OrientationArg::Horizontal => Orientation::Horizontal,
        }
    }
}

#[derive(Args, Debug)]
struct PrepareArgs {
    /// Record file (.csv with a header row, or .json array).
    #[arg(short, long)]
    input: PathBuf,
    /// Pipeline configuration (JSON). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Sort strategy, overriding the config (e.g. value-descending, chronological).
    #[arg(short, long)]
    sort: Option<SortStrategy>,
    /// Surface width in pixels (default 640).
    #[arg(long, default_value_t = 640.0)]
    width: f64,
    /// Surface height in pixels (default 360).
    #[arg(long, default_value_t = 360.0)]
    height: f64,
    /// Bar orientation, overriding the config.
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,
    /// Skip layout and print only the sorted dataset.
    #[arg(long, default_value_t = false)]
    no_layout: bool,
    /// Pretty-print JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    #[arg(long)]
    width: f64,
    #[arg(long)]
    height: f64,
    /// Horizontal bars (category labels on the left axis).
    #[arg(long, default_value_t = false)]
    horizontal: bool,
    /// Reserve a legend band (only applies with 2 or more series).
    #[arg(long, default_value_t = false)]
    legend: bool,
    /// Number of series.
    #[arg(long, default_value_t = 1)]
    series: usize,
    /// Number of categories (0 = unknown).
    #[arg(long, default_value_t = 0)]
    categories: usize,
    /// Longest category label in characters (0 = unknown).
    #[arg(long, default_value_t = 0)]
    longest_label: usize,
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct StrategiesArgs {
    /// Pipeline configuration (JSON).
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Include chronological strategies.
    #[arg(long, default_value_t = false)]
    time: bool,
    /// Include aging/priority strategies.
    #[arg(long, default_value_t = false)]
    business: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Prepare(args) => cmd_prepare(args),
        Command::Layout(args) => cmd_layout(args),
        Command::Strategies(args) => cmd_strategies(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<PipelineConfig> {
    match path {
        Some(p) => PipelineConfig::from_json_file(p)
            .with_context(|| format!("reading config {}", p.display())),
        None => Ok(PipelineConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_prepare(args: PrepareArgs) -> Result<()> {
    let mut config = load_config(args.config.as_ref())?;
    if let Some(sort) = args.sort {
        config.sort_type = Some(sort);
    }
    if let Some(o) = args.orientation {
        config.orientation = o.into();
    }

    let points = input::load_records(&args.input)
        .with_context(|| format!("reading records from {}", args.input.display()))?;
    eprintln!("Loaded {} records from {}", points.len(), args.input.display());

    if args.no_layout {
        print_json(&pipeline::prepare(&points, &config), args.pretty)
    } else {
        let chart = pipeline::prepare_chart(&points, &config, args.width, args.height);
        print_json(&chart, args.pretty)
    }
}

fn cmd_layout(args: LayoutArgs) -> Result<()> {
    if !(args.width.is_finite() && args.height.is_finite()) {
        anyhow::bail!("--width and --height must be finite numbers");
    }
    let options = LayoutOptions {
        orientation: if args.horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        },
        show_legend: args.legend,
        series_count: args.series,
        category_count: args.categories,
        longest_label_chars: args.longest_label,
    };
    print_json(&compute_layout(args.width, args.height, &options), args.pretty)
}

fn cmd_strategies(args: StrategiesArgs) -> Result<()> {
    let mut config = load_config(args.config.as_ref())?;
    config.show_time_options |= args.time;
    config.show_business_options |= args.business;
    for s in available_strategies(&config) {
        println!("{}\t{}", s.as_str(), s.label());
    }
    Ok(())
}
