// ============================================================
// DOMAIN LAYER
// ============================================================
// Core types and value objects for the corpus pipeline
// No I/O, no async, no external dependencies beyond serde

pub mod annotations;
pub mod conversation;
pub mod error;
pub mod record;
pub mod schema;
pub mod table;

pub use conversation::{ConversationEntry, ConversationTurn, QaPair};
pub use record::{DescribedImageRecord, ImageRecord, QaImageRecord};
pub use table::Table;

// Re-export commonly used types
pub use std::collections::HashMap;
pub type FieldMap = HashMap<String, String>;
