pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::{
    engine::{RecommendationEngine, RunOutcome},
    pipeline::RecommendationPipeline,
};
pub use utils::error::{RecommenderError, Result};
