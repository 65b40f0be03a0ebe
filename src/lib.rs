pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::pipeline::{CorpusPipeline, PipelineSummary};
pub use domain::error::{AppError, Result};
pub use infrastructure::config::PipelineConfig;
