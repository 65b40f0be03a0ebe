// ============================================================
// DESCRIPTION SYNTHESIZER
// ============================================================
// Deterministic free-text description of one image record

use super::phrases;
use crate::domain::schema::{
    AGE_GROUP, AGE_UNKNOWN, BODY_PARTS, CONDITION_DURATION, CONDITION_SYMPTOMS,
    FITZPATRICK_SKIN_TYPE, GRADABLE_FITZPATRICK, MONK_GRADABLE_INDIA, MONK_GRADABLE_US,
    MONK_LABEL_INDIA, MONK_LABEL_US, OTHER_SYMPTOMS, RACE_ETHNICITY, RELATED_CATEGORY, RELEASE,
    SEX_AT_BIRTH, SEX_UNSPECIFIED, SOURCE, TEXTURES, YEAR,
};
use crate::domain::{DescribedImageRecord, ImageRecord};

/// Synthesize the free-text description of one image record.
///
/// Pure function: fragments are emitted in a fixed order, each with a
/// trailing space, only for non-null fields. A record with every
/// categorical field null yields the empty string.
pub fn synthesize_description(record: &ImageRecord) -> String {
    let mut description = String::new();

    if let Some(labels) = &record.condition_labels {
        description.push_str(&phrases::condition_sentence(labels));
    }

    if let Some(entries) = &record.weighted_conditions {
        description.push_str(&format!(
            "The weighted skin condition label is: {}. ",
            phrases::weighted_entries(entries)
        ));
    }

    if let Some(duration) = record.attr(CONDITION_DURATION) {
        description.push_str(&phrases::duration_sentence(duration));
    }

    let textures = phrases::selected(record, TEXTURES);
    if !textures.is_empty() {
        description.push_str(&phrases::textures_sentence(&textures));
    }

    let body_parts = phrases::selected(record, BODY_PARTS);
    if !body_parts.is_empty() {
        description.push_str(&phrases::body_parts_sentence(&body_parts));
    }

    let condition_symptoms = phrases::selected(record, CONDITION_SYMPTOMS);
    if !condition_symptoms.is_empty() {
        description.push_str(&phrases::condition_symptoms_sentence(&condition_symptoms));
    }

    let other_symptoms = phrases::selected(record, OTHER_SYMPTOMS);
    if !other_symptoms.is_empty() {
        description.push_str(&format!(
            "Other symptoms include {}. ",
            other_symptoms.join(", ")
        ));
    }

    if let Some(category) = record.attr(RELATED_CATEGORY) {
        description.push_str(&phrases::related_category_sentence(category));
    }

    if let Some(shot_type) = &record.shot_type {
        description.push_str(&format!("The image shot type is {}. ", shot_type));
    }

    if record.gradable_for_skin_condition.is_some() {
        description.push_str(&phrases::skin_condition_gradability_sentence(record));
    }

    if let Some(value) = record.gradable_for_fitzpatrick_skin_type.as_deref() {
        if value == GRADABLE_FITZPATRICK {
            description
                .push_str("The case is gradable for Fitzpatrick skin type by the dermatologist. ");
        } else {
            description.push_str(
                "The case is not gradable for Fitzpatrick skin type by the dermatologist. ",
            );
        }
    }

    if let Some(label) = &record.fitzpatrick_skin_type_label {
        description.push_str(&format!(
            "The dermatologist labeled the Fitzpatrick skin type as {}. ",
            label
        ));
    }

    if let (Some(source), Some(release), Some(year)) = (
        record.attr(SOURCE),
        record.attr(RELEASE),
        record.attr(YEAR),
    ) {
        description.push_str(&format!(
            "The source is {}, the release is {}, and the year is {}. ",
            source, release, year
        ));
    }

    if let Some(age_group) = record.attr(AGE_GROUP) {
        let normalized = age_group
            .replace(AGE_UNKNOWN, "not known")
            .replace('_', " ")
            .to_lowercase();
        description.push_str(&format!("The patient's age group is {}. ", normalized));
    }

    if let Some(sex) = record.attr(SEX_AT_BIRTH) {
        let normalized = sex.replace(SEX_UNSPECIFIED, "not specified").to_lowercase();
        description.push_str(&format!("The patient's sex at birth is {}. ", normalized));
    }

    if let Some(skin_type) = record.attr(FITZPATRICK_SKIN_TYPE) {
        description.push_str(&format!(
            "The patient's Fitzpatrick skin type is {}. ",
            skin_type
        ));
    }

    let races = phrases::present(record, RACE_ETHNICITY);
    if !races.is_empty() {
        description.push_str(&phrases::race_sentence(&races));
    }

    // Monk gradability columns carry no negative sentinel: any non-null
    // value means the case was gradable by that grader pool.
    if record.attr(MONK_GRADABLE_INDIA).is_some() {
        description.push_str("The case is gradable for Monk skin tone by graders in India. ");
    }

    if record.attr(MONK_GRADABLE_US).is_some() {
        description.push_str("The case is gradable for Monk skin tone by graders in the US. ");
    }

    if let Some(label) = record.attr(MONK_LABEL_INDIA) {
        description.push_str(&format!(
            "The Monk skin tone label by graders in India is {}. ",
            label
        ));
    }

    if let Some(label) = record.attr(MONK_LABEL_US) {
        description.push_str(&format!(
            "The Monk skin tone label by graders in the US is {}. ",
            label
        ));
    }

    description
}

/// Attach a description to every record.
pub fn describe_all(records: Vec<ImageRecord>) -> Vec<DescribedImageRecord> {
    records
        .into_iter()
        .map(|record| {
            let description = synthesize_description(&record);
            DescribedImageRecord { record, description }
        })
        .collect()
}
