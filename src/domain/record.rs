// ============================================================
// IMAGE RECORDS
// ============================================================
// Per-image long records produced by the reshaper and enriched by
// the synthesizers

use serde::{Deserialize, Serialize};

use super::conversation::QaPair;
use super::schema::{GRADABLE_SKIN_CONDITION, UNGRADABLE_IMAGE_QUALITY};
use super::FieldMap;

/// One (case, image) pair in long form.
///
/// Carries the slot-specific image fields, every case-level attribute
/// (only non-null values are present in `attributes`, so key presence
/// doubles as the null check), and the two string-encoded label fields
/// parsed into typed structures at ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub case_id: String,

    /// 1-based image slot this record was expanded from.
    pub slot: usize,

    pub image_path: String,

    pub shot_type: Option<String>,

    pub gradable_for_skin_condition: Option<String>,

    pub gradable_for_fitzpatrick_skin_type: Option<String>,

    pub fitzpatrick_skin_type_label: Option<String>,

    /// Dermatologist condition labels, parsed from the bracketed list
    /// notation. `None` when the field is null, empty, or malformed.
    pub condition_labels: Option<Vec<String>>,

    /// Weighted condition labels in source order, parsed from the map
    /// literal notation. `None` when null, empty, or malformed.
    pub weighted_conditions: Option<Vec<(String, f64)>>,

    /// Case-level attributes inherited from the joined record.
    pub attributes: FieldMap,
}

impl ImageRecord {
    /// Create a minimal record with no optional data attached.
    pub fn new(case_id: impl Into<String>, slot: usize, image_path: impl Into<String>) -> Self {
        Self {
            case_id: case_id.into(),
            slot,
            image_path: image_path.into(),
            shot_type: None,
            gradable_for_skin_condition: None,
            gradable_for_fitzpatrick_skin_type: None,
            fitzpatrick_skin_type_label: None,
            condition_labels: None,
            weighted_conditions: None,
            attributes: FieldMap::new(),
        }
    }

    /// Non-null case-level attribute by column name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the dermatologist marked the image gradable for skin
    /// condition assessment.
    pub fn is_gradable_for_skin_condition(&self) -> bool {
        self.gradable_for_skin_condition.as_deref() == Some(GRADABLE_SKIN_CONDITION)
    }

    /// Whether the image quality was flagged as insufficient, which
    /// redacts every synthesized answer for this record.
    pub fn is_ungradable(&self) -> bool {
        self.gradable_for_skin_condition.as_deref() == Some(UNGRADABLE_IMAGE_QUALITY)
    }
}

/// An image record plus its synthesized free-text description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribedImageRecord {
    pub record: ImageRecord,
    pub description: String,
}

/// An image record plus its ordered question/answer pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaImageRecord {
    pub record: ImageRecord,
    pub pairs: Vec<QaPair>,
}
