#![deny(unsafe_code)]

//! The cleaning pipeline: an ordered sequence of heuristic transformation
//! stages applied to an in-memory [`scrub_model::Table`]. Each stage is a
//! pure `Table -> Table` transformation; per-cell failures degrade to the
//! missing marker instead of propagating.

pub mod clip;
pub mod coerce;
pub mod config;
pub mod datetime;
pub mod dedupe;
pub mod impute;
pub mod pipeline;
pub mod prune;
pub mod sanitize;
pub mod schema;
pub mod standardize;
pub mod stats;

pub use config::{CategoryMap, CleanConfig};
pub use pipeline::{CleaningPipeline, CleaningStage, PipelineState, build_default_pipeline};
