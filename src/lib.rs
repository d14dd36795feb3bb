pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod generator;
pub mod metrics;
pub mod mmc;
pub mod models;
pub mod output;
pub mod sampling;
pub mod state;
