// ============================================================
// WIDE-TO-LONG RESHAPER
// ============================================================
// Expands each joined case row into one record per non-null image
// slot, attaching all case-level attributes

use std::collections::HashSet;

use tracing::warn;

use crate::domain::annotations::{parse_label_list, parse_weight_map};
use crate::domain::schema::{CASE_ID, CONDITION_LABELS, IMAGE_SLOTS, WEIGHTED_CONDITIONS};
use crate::domain::{FieldMap, ImageRecord, Table};

/// Expand the joined wide table into one [`ImageRecord`] per non-null
/// image path.
///
/// Output order is slot-major: every slot-1 record first, then slot 2,
/// then slot 3, stable by input row order within each slot. Case-level
/// attributes come from the same source row as the image columns, so
/// duplicate path strings across slots or cases cannot mis-attribute
/// rows. Rows without a case id are logged and skipped.
pub fn reshape_images(joined: &Table) -> Vec<ImageRecord> {
    let slot_columns: HashSet<&str> = IMAGE_SLOTS
        .iter()
        .flat_map(|slot| slot.columns())
        .collect();

    let case_level: Vec<&String> = joined
        .headers()
        .iter()
        .filter(|name| name.as_str() != CASE_ID && !slot_columns.contains(name.as_str()))
        .collect();

    let mut records = Vec::new();

    for (slot_idx, slot) in IMAGE_SLOTS.iter().enumerate() {
        for (row_idx, row) in joined.rows().iter().enumerate() {
            let Some(image_path) = joined.get(row, slot.path) else {
                continue;
            };

            let Some(case_id) = joined.get(row, CASE_ID) else {
                warn!(row = row_idx, slot = slot_idx + 1, "skipping image row without a case id");
                continue;
            };

            let mut attributes = FieldMap::new();
            for name in &case_level {
                if let Some(value) = joined.get(row, name) {
                    attributes.insert((*name).clone(), value.to_string());
                }
            }

            let condition_labels = parsed_condition_labels(case_id, &attributes);
            let weighted_conditions = parsed_weighted_conditions(case_id, &attributes);

            records.push(ImageRecord {
                case_id: case_id.to_string(),
                slot: slot_idx + 1,
                image_path: image_path.to_string(),
                shot_type: joined.get(row, slot.shot_type).map(str::to_string),
                gradable_for_skin_condition: joined
                    .get(row, slot.gradable_for_skin_condition)
                    .map(str::to_string),
                gradable_for_fitzpatrick_skin_type: joined
                    .get(row, slot.gradable_for_fitzpatrick_skin_type)
                    .map(str::to_string),
                fitzpatrick_skin_type_label: joined
                    .get(row, slot.fitzpatrick_skin_type_label)
                    .map(str::to_string),
                condition_labels,
                weighted_conditions,
                attributes,
            });
        }
    }

    records
}

/// Parse the condition label list once at ingestion.
///
/// Malformed values are logged with the case id and skipped rather than
/// failing the row; an empty list normalizes to `None`.
fn parsed_condition_labels(case_id: &str, attributes: &FieldMap) -> Option<Vec<String>> {
    let raw = attributes.get(CONDITION_LABELS)?;

    match parse_label_list(raw) {
        Ok(labels) if labels.is_empty() => None,
        Ok(labels) => Some(labels),
        Err(error) => {
            warn!(case_id, error = %error, "skipping unparseable condition labels");
            None
        }
    }
}

fn parsed_weighted_conditions(case_id: &str, attributes: &FieldMap) -> Option<Vec<(String, f64)>> {
    let raw = attributes.get(WEIGHTED_CONDITIONS)?;

    match parse_weight_map(raw) {
        Ok(entries) if entries.is_empty() => None,
        Ok(entries) => Some(entries),
        Err(error) => {
            warn!(case_id, error = %error, "skipping unparseable weighted condition labels");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined_table(rows: &[&[&str]]) -> Table {
        let headers = vec![
            "case_id",
            "image_1_path",
            "image_1_shot_type",
            "dermatologist_gradable_for_skin_condition_1",
            "image_2_path",
            "image_3_path",
            "source",
            "dermatologist_skin_condition_on_label_name",
            "weighted_skin_condition_label",
        ];

        Table::new(
            headers.into_iter().map(String::from).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_cardinality_matches_non_null_paths() {
        let joined = joined_table(&[
            &["000", "", "", "", "", "", "app", "", ""],
            &["001", "a.jpg", "", "", "", "", "app", "", ""],
            &["002", "b.jpg", "", "", "c.jpg", "", "app", "", ""],
            &["003", "d.jpg", "", "", "e.jpg", "f.jpg", "app", "", ""],
        ]);

        let records = reshape_images(&joined);

        assert_eq!(records.len(), 6);
        let per_case = |id: &str| records.iter().filter(|r| r.case_id == id).count();
        assert_eq!(per_case("000"), 0);
        assert_eq!(per_case("001"), 1);
        assert_eq!(per_case("002"), 2);
        assert_eq!(per_case("003"), 3);
    }

    #[test]
    fn test_slot_major_order() {
        let joined = joined_table(&[
            &["001", "a.jpg", "", "", "b.jpg", "", "app", "", ""],
            &["002", "c.jpg", "", "", "", "", "app", "", ""],
        ]);

        let records = reshape_images(&joined);

        let order: Vec<(&str, usize)> = records
            .iter()
            .map(|r| (r.image_path.as_str(), r.slot))
            .collect();
        assert_eq!(order, vec![("a.jpg", 1), ("c.jpg", 1), ("b.jpg", 2)]);
    }

    #[test]
    fn test_case_attributes_inherited() {
        let joined = joined_table(&[&[
            "001", "a.jpg", "CLOSE_UP", "DEFAULT_YES_IMAGE_QUALITY_SUFFICIENT", "", "", "app",
            "['eczema']", "{'eczema': 0.75}",
        ]]);

        let records = reshape_images(&joined);
        let record = &records[0];

        assert_eq!(record.case_id, "001");
        assert_eq!(record.shot_type.as_deref(), Some("CLOSE_UP"));
        assert_eq!(
            record.gradable_for_skin_condition.as_deref(),
            Some("DEFAULT_YES_IMAGE_QUALITY_SUFFICIENT")
        );
        assert_eq!(record.attr("source"), Some("app"));
        assert!(!record.attributes.contains_key("image_1_path"));
        assert_eq!(record.condition_labels.as_deref(), Some(&["eczema".to_string()][..]));
        assert_eq!(
            record.weighted_conditions.as_deref(),
            Some(&[("eczema".to_string(), 0.75)][..])
        );
    }

    #[test]
    fn test_malformed_annotations_skip_field_group() {
        let joined = joined_table(&[&[
            "001", "a.jpg", "", "", "", "", "app", "not a list", "{'eczema': high}",
        ]]);

        let records = reshape_images(&joined);

        assert_eq!(records.len(), 1);
        assert!(records[0].condition_labels.is_none());
        assert!(records[0].weighted_conditions.is_none());
        // The raw values stay available as attributes.
        assert_eq!(
            records[0].attr("dermatologist_skin_condition_on_label_name"),
            Some("not a list")
        );
    }

    #[test]
    fn test_empty_label_list_is_none() {
        let joined = joined_table(&[&["001", "a.jpg", "", "", "", "", "app", "[]", ""]]);

        let records = reshape_images(&joined);
        assert!(records[0].condition_labels.is_none());
    }

    #[test]
    fn test_row_without_case_id_is_skipped() {
        let joined = joined_table(&[&["", "a.jpg", "", "", "", "", "app", "", ""]]);

        assert!(reshape_images(&joined).is_empty());
    }
}
