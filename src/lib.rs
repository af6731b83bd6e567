pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod input;
pub mod output;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use crate::core::{convert, generate};
pub use app::{Panel, Session};
pub use domain::model::{ConversionResult, GenerationRequest, NumberBase, OutputFormat, Presets};
pub use domain::ports::{ConfigProvider, RandomSource};
pub use utils::error::{RandomizerError, Result};
