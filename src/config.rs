use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::{Error, Result};
use crate::models::{DistributionConfig, SimulationParams};

#[derive(Parser, Debug)]
#[command(name = "queue-sim", about = "Discrete-event multi-server queueing simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a simulation and print the result.
    Run(RunArgs),
    /// Closed-form theoretical M/M/c metrics for comparison.
    Mmc(MmcArgs),
    /// Echo the fully resolved simulation parameters without running.
    ShowConfig(RunArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Arrival distribution, e.g. poisson:4, exponential:0.5, normal:30:5, uniform:1:10
    #[arg(long)]
    pub arrival: Option<String>,
    /// Service distribution, same syntax as --arrival
    #[arg(long)]
    pub service: Option<String>,
    #[arg(long)]
    pub servers: Option<usize>,
    /// Enable strict preemptive priority scheduling
    #[arg(long)]
    pub priority: bool,
    #[arg(long)]
    pub priority_levels: Option<u32>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, value_enum, default_value = "human")]
    pub format: FormatArg,
    /// TOML or JSON parameter file; explicit flags override file values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct MmcArgs {
    #[arg(long)]
    pub lambda: f64,
    #[arg(long)]
    pub mu: f64,
    #[arg(long, default_value_t = 1)]
    pub servers: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum FormatArg {
    Human,
    Summary,
    Json,
}

pub fn parse_args() -> Result<Cli> {
    Cli::try_parse().map_err(|err| Error::Cli(err.to_string()))
}

/// Assembles `SimulationParams` from a run invocation: config file first
/// (when given), explicit flags layered on top.
pub fn build_params(args: &RunArgs) -> Result<SimulationParams> {
    let file = match &args.config {
        Some(path) => Some(load_params(path)?),
        None => None,
    };

    let arrival = match &args.arrival {
        Some(spec) => parse_distribution(spec)?,
        None => file
            .as_ref()
            .map(|params| params.arrival)
            .ok_or_else(|| Error::Cli("missing --arrival".to_string()))?,
    };
    let service = match &args.service {
        Some(spec) => parse_distribution(spec)?,
        None => file
            .as_ref()
            .map(|params| params.service)
            .ok_or_else(|| Error::Cli("missing --service".to_string()))?,
    };
    let servers = match args.servers {
        Some(servers) => servers,
        None => file
            .as_ref()
            .map(|params| params.servers)
            .ok_or_else(|| Error::Cli("missing --servers".to_string()))?,
    };
    let priority_enabled =
        args.priority || file.as_ref().map_or(false, |params| params.priority_enabled);
    let priority_levels = args
        .priority_levels
        .or_else(|| file.as_ref().map(|params| params.priority_levels))
        .unwrap_or(1);
    let seed = args.seed.or_else(|| file.as_ref().and_then(|params| params.seed));

    Ok(SimulationParams {
        arrival,
        service,
        servers,
        priority_enabled,
        priority_levels,
        seed,
    })
}

/// Parses a `kind:params` distribution spec from the command line.
pub fn parse_distribution(spec: &str) -> Result<DistributionConfig> {
    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
    let invalid = || Error::InvalidDistributionSpec(spec.to_string());
    let number = |raw: &str| -> Result<f64> {
        raw.parse()
            .map_err(|_| Error::InvalidDistributionValue(spec.to_string()))
    };

    let config = match parts.as_slice() {
        ["poisson", rate] => DistributionConfig::Poisson { rate: number(rate)? },
        ["exponential", rate] => DistributionConfig::Exponential { rate: number(rate)? },
        ["normal", mean, std_dev] => DistributionConfig::Normal {
            mean: number(mean)?,
            std_dev: number(std_dev)?,
        },
        ["uniform", a, b] => DistributionConfig::Uniform {
            a: number(a)?,
            b: number(b)?,
        },
        _ => return Err(invalid()),
    };
    config.validate()?;
    Ok(config)
}

pub fn load_params(path: &Path) -> Result<SimulationParams> {
    let contents = fs::read_to_string(path).map_err(|err| {
        Error::ConfigIo(format!("failed to read config '{}': {}", path.display(), err))
    })?;
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or("");

    match ext {
        "toml" => toml::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse TOML: {}", err))),
        "json" => serde_json::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse JSON: {}", err))),
        "" => Err(Error::UnsupportedConfigFormat("unknown".to_string())),
        _ => Err(Error::UnsupportedConfigFormat(ext.to_string())),
    }
}
