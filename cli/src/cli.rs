use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};

/// County choropleth CLI
#[derive(Parser, Debug)]
#[command(name = "choroscope", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the filtered choropleth to an SVG file
    Render(RenderArgs),

    /// List state options, or a state's county options
    Options(OptionsArgs),

    /// Look up the county containing a lon/lat point
    Locate(LocateArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum MetricArg {
    PovertyRate,
    NoDiplomaPct,
    UnemploymentRate,
}

impl From<MetricArg> for choroscope::Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::PovertyRate => choroscope::Metric::PovertyRate,
            MetricArg::NoDiplomaPct => choroscope::Metric::NoDiplomaPct,
            MetricArg::UnemploymentRate => choroscope::Metric::UnemploymentRate,
        }
    }
}

/// Dataset sources shared by every subcommand. Paths or http(s) URLs.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// county.json feature collection (path or URL)
    #[arg(long, default_value = "county.json")]
    pub counties: String,

    /// county_inequity.json metrics table (path or URL)
    #[arg(long, default_value = "county_inequity.json")]
    pub metrics: String,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output SVG file (must be a file path; "-" is rejected)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Metric to grade counties by
    #[arg(long, value_enum, default_value = "poverty-rate")]
    pub metric: MetricArg,

    /// Show only this state's counties (others render hidden)
    #[arg(long)]
    pub state: Option<String>,

    /// Show only this county (requires --state to match anything)
    #[arg(long)]
    pub county: Option<String>,

    /// Hide counties with a metric value below this bound (inclusive)
    #[arg(long)]
    pub min: Option<f64>,

    /// Hide counties with a metric value above this bound (inclusive)
    #[arg(long)]
    pub max: Option<f64>,

    /// Output width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// List this state's county options instead of the state options
    #[arg(long)]
    pub state: Option<String>,
}

#[derive(Args, Debug)]
pub struct LocateArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Longitude of the query point
    #[arg(allow_negative_numbers = true)]
    pub lon: f64,

    /// Latitude of the query point
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// Metric to report for the hit county
    #[arg(long, value_enum, default_value = "poverty-rate")]
    pub metric: MetricArg,
}
