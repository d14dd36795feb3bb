mod cp_table;
mod z_table;

pub use cp_table::{build_cp_table, lookup, CpEntry};
pub use z_table::z_score;

use crate::models::DistributionConfig;

/// Durations are floored here so a normal draw deep in the left tail can
/// never produce a non-positive time.
const MIN_DURATION: f64 = 1e-4;

/// A single resolved draw: the duration and, for table-driven
/// distributions, the CP bucket it came from.
#[derive(Clone, Copy, Debug)]
pub struct Draw {
    pub value: f64,
    pub cp_bucket: Option<u32>,
}

/// Samples durations from one configured distribution. Stateless per call;
/// holds the CP table so it is built once per rate and reused for every
/// lookup against that rate within a run.
pub struct Sampler {
    dist: DistributionConfig,
    table: Vec<CpEntry>,
}

impl Sampler {
    pub fn new(dist: DistributionConfig) -> Self {
        // Poisson draws invert through the table; for exponential the table
        // only fixes the simulation horizon (row count) for arrival use.
        let table = match dist {
            DistributionConfig::Poisson { rate } | DistributionConfig::Exponential { rate } => {
                build_cp_table(rate)
            }
            _ => Vec::new(),
        };
        Self { dist, table }
    }

    pub fn cp_table(&self) -> &[CpEntry] {
        &self.table
    }

    /// Resolves a uniform draw in [0, 1) into a duration.
    pub fn draw(&self, r: f64) -> Draw {
        match self.dist {
            DistributionConfig::Poisson { .. } => {
                let x = lookup(&self.table, r);
                Draw {
                    value: x as f64,
                    cp_bucket: Some(x),
                }
            }
            DistributionConfig::Exponential { rate } => Draw {
                value: -(1.0 - r).ln() / rate,
                cp_bucket: None,
            },
            DistributionConfig::Normal { mean, std_dev } => {
                let value = mean + z_score(r) * std_dev;
                Draw {
                    value: value.max(MIN_DURATION),
                    cp_bucket: None,
                }
            }
            DistributionConfig::Uniform { a, b } => Draw {
                value: a + r * (b - a),
                cp_bucket: None,
            },
        }
    }

    /// Service-time variant: durations are rounded to the nearest integer
    /// and floored at 1. Discretized service is a modeling contract of the
    /// simulator, not a numeric artifact.
    pub fn draw_service(&self, r: f64) -> Draw {
        let draw = self.draw(r);
        Draw {
            value: draw.value.round().max(1.0),
            cp_bucket: draw.cp_bucket,
        }
    }
}
