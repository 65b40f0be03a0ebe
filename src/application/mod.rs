// ============================================================
// APPLICATION LAYER
// ============================================================
// Use cases orchestrating the domain transforms

pub mod use_cases;

pub use use_cases::pipeline::{CorpusPipeline, PipelineSummary};
