// ============================================================
// INFRASTRUCTURE LAYER
// ============================================================
// Filesystem edges of the pipeline: CSV input, JSONL output,
// image copying, configuration

pub mod config;
pub mod csv;
pub mod images;
pub mod jsonl;
