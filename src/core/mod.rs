pub mod etl;
pub mod pipeline;
pub mod symbols;
pub mod transform;

pub use crate::domain::model::{ConversionSummary, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
