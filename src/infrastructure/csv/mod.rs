// ============================================================
// CSV INFRASTRUCTURE
// ============================================================
// File parsing with encoding fallback

mod reader;

pub use reader::CsvTableReader;
