#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use core::{
    etl::{EtlEngine, EtlOutcome},
    pipeline::ConsolePipeline,
    transform::{convert_text, LineConverter},
};
pub use domain::model::{ConversionSummary, LineKind, MarkerCounters};
pub use utils::error::{ConvertError, Result};
