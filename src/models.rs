use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimulationParams {
    pub arrival: DistributionConfig,
    pub service: DistributionConfig,
    pub servers: usize,
    #[serde(default)]
    pub priority_enabled: bool,
    #[serde(default = "default_priority_levels")]
    pub priority_levels: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimulationParams {
    /// Rejects malformed parameters before any sampling occurs.
    pub fn validate(&self) -> Result<()> {
        self.arrival.validate()?;
        self.service.validate()?;
        if self.servers == 0 {
            return Err(Error::ZeroServers);
        }
        if self.priority_enabled && self.priority_levels == 0 {
            return Err(Error::ZeroPriorityLevels);
        }
        Ok(())
    }

    /// Priority level count as the engine sees it: 1 when priority is off.
    pub fn effective_priority_levels(&self) -> u32 {
        if self.priority_enabled {
            self.priority_levels
        } else {
            1
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DistributionConfig {
    Poisson { rate: f64 },
    Exponential { rate: f64 },
    Normal { mean: f64, std_dev: f64 },
    Uniform { a: f64, b: f64 },
}

impl DistributionConfig {
    pub fn validate(&self) -> Result<()> {
        match *self {
            DistributionConfig::Poisson { rate } | DistributionConfig::Exponential { rate } => {
                if rate <= 0.0 {
                    return Err(Error::NonPositiveRate(rate));
                }
            }
            DistributionConfig::Normal { std_dev, .. } => {
                if std_dev < 0.0 {
                    return Err(Error::NegativeStdDev(std_dev));
                }
            }
            DistributionConfig::Uniform { a, b } => {
                if b <= a {
                    return Err(Error::InvalidUniformBounds(a, b));
                }
                // Durations are non-negative; a negative lower bound would
                // let arrival clocks run backwards.
                if a < 0.0 {
                    return Err(Error::NegativeUniformBound(a));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for DistributionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DistributionConfig::Poisson { rate } => write!(f, "poisson (rate: {})", rate),
            DistributionConfig::Exponential { rate } => write!(f, "exponential (rate: {})", rate),
            DistributionConfig::Normal { mean, std_dev } => {
                write!(f, "normal (mean: {}, std_dev: {})", mean, std_dev)
            }
            DistributionConfig::Uniform { a, b } => write!(f, "uniform (a: {}, b: {})", a, b),
        }
    }
}

fn default_priority_levels() -> u32 {
    1
}
