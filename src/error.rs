use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("rate must be > 0 (got {0})")]
    NonPositiveRate(f64),
    #[error("standard deviation must be >= 0 (got {0})")]
    NegativeStdDev(f64),
    #[error("uniform bounds must satisfy b > a (got a={0}, b={1})")]
    InvalidUniformBounds(f64, f64),
    #[error("uniform bounds must be non-negative (got a={0})")]
    NegativeUniformBound(f64),
    #[error("server count must be greater than 0")]
    ZeroServers,
    #[error("priority levels must be greater than 0")]
    ZeroPriorityLevels,
    #[error("invalid distribution '{0}': expected kind:params")]
    InvalidDistributionSpec(String),
    #[error("invalid number in distribution '{0}'")]
    InvalidDistributionValue(String),
    #[error("{0}")]
    ConfigIo(String),
    #[error("{0}")]
    ConfigParse(String),
    #[error("unsupported config format '{0}'")]
    UnsupportedConfigFormat(String),
    #[error("{0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, Error>;
