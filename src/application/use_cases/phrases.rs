// ============================================================
// SHARED PHRASES
// ============================================================
// Sentence builders and multi-select pickers used by both the
// description and QA synthesizers

use crate::domain::schema::MULTI_SELECT_YES;
use crate::domain::ImageRecord;

/// Display labels of a multi-select group whose columns equal `YES`.
pub(crate) fn selected(
    record: &ImageRecord,
    group: &[(&'static str, &'static str)],
) -> Vec<&'static str> {
    group
        .iter()
        .filter(|(column, _)| record.attr(column) == Some(MULTI_SELECT_YES))
        .map(|(_, label)| *label)
        .collect()
}

/// Display labels of a multi-select group whose columns are non-null,
/// regardless of value (the race/ethnicity convention).
pub(crate) fn present(
    record: &ImageRecord,
    group: &[(&'static str, &'static str)],
) -> Vec<&'static str> {
    group
        .iter()
        .filter(|(column, _)| record.attr(column).is_some())
        .map(|(_, label)| *label)
        .collect()
}

pub(crate) fn condition_sentence(labels: &[String]) -> String {
    format!(
        "The dermatologist labeled the skin condition(s) as {}. ",
        labels.join(", ")
    )
}

/// `label: weight` pairs with two decimal places, comma-joined.
pub(crate) fn weighted_entries(entries: &[(String, f64)]) -> String {
    entries
        .iter()
        .map(|(label, weight)| format!("{}: {:.2}", label, weight))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn duration_sentence(raw: &str) -> String {
    format!(
        "The condition duration is {}. ",
        raw.replace('_', " ").to_lowercase()
    )
}

pub(crate) fn textures_sentence(labels: &[&str]) -> String {
    format!("The skin condition has {} texture(s). ", labels.join(", "))
}

pub(crate) fn body_parts_sentence(labels: &[&str]) -> String {
    format!("The affected body part(s) are {}. ", labels.join(", "))
}

pub(crate) fn condition_symptoms_sentence(labels: &[&str]) -> String {
    format!("The condition symptoms include {}. ", labels.join(", "))
}

pub(crate) fn related_category_sentence(category: &str) -> String {
    format!("The related category is {}. ", category)
}

pub(crate) fn race_sentence(labels: &[&str]) -> String {
    format!("The patient's race/ethnicity is {}. ", labels.join(", "))
}

/// Binary gradability sentence; positive only for the exact sentinel.
pub(crate) fn skin_condition_gradability_sentence(record: &ImageRecord) -> String {
    if record.is_gradable_for_skin_condition() {
        "The case is gradable for skin condition by the dermatologist. ".to_string()
    } else {
        "The case is not gradable for skin condition by the dermatologist. ".to_string()
    }
}
