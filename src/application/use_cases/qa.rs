// ============================================================
// QA SYNTHESIZER
// ============================================================
// Ordered question/answer pairs for one close-up image record

use super::phrases;
use crate::domain::schema::{
    BODY_PARTS, CONDITION_DURATION, CONDITION_SYMPTOMS, OTHER_SYMPTOMS, RACE_ETHNICITY,
    RELATED_CATEGORY, TEXTURES,
};
use crate::domain::{ImageRecord, QaImageRecord, QaPair};

/// Fixed answer substituted for every pair of an ungradable record.
pub const INSUFFICIENT_QUALITY_DISCLAIMER: &str = "The image alone is not sufficient to \
determine the skin condition. Please consult a dermatologist or your healthcare provider.";

const Q_CONDITION_PRIMARY: &str = "What is this condition?";
const Q_CONDITION_ALTERNATE: &str = "What are the skin conditions?";
const Q_CONFIDENCE: &str = "What is the skin condition label confidence level?";
const Q_DURATION: &str = "What is the condition duration?";
const Q_TEXTURES: &str = "What are the textures of the skin condition?";
const Q_BODY_PARTS: &str = "What are the affected body parts?";
const Q_CONDITION_SYMPTOMS: &str = "What are the condition symptoms?";
const Q_OTHER_SYMPTOMS: &str = "What are some of the symptoms?";
const Q_RELATED_CATEGORY: &str = "What is the related category?";
const Q_GRADABLE: &str = "Is the case gradable for skin condition by the dermatologist?";
const Q_RACE: &str = "What is the patient's race?";

/// Synthesize the ordered QA pairs for one image record.
///
/// Precondition: the record carries parsed condition labels; records
/// without them contribute zero pairs. When the image quality was
/// flagged insufficient, every answer is replaced by the disclaimer
/// while questions stay specific.
pub fn synthesize_qa(record: &ImageRecord) -> Vec<QaPair> {
    let Some(labels) = &record.condition_labels else {
        return Vec::new();
    };

    let redact = record.is_ungradable();
    let mut pairs = Vec::new();

    let condition_answer = disclaimer_if(redact, phrases::condition_sentence(labels));
    pairs.push(QaPair::new(Q_CONDITION_PRIMARY, condition_answer.clone()));
    pairs.push(QaPair::new(Q_CONDITION_ALTERNATE, condition_answer));

    if let Some(entries) = &record.weighted_conditions {
        let answer = format!(
            "The skin condition label confidence level is: {}. ",
            phrases::weighted_entries(entries)
        );
        pairs.push(QaPair::new(Q_CONFIDENCE, disclaimer_if(redact, answer)));
    }

    if let Some(duration) = record.attr(CONDITION_DURATION) {
        pairs.push(QaPair::new(
            Q_DURATION,
            disclaimer_if(redact, phrases::duration_sentence(duration)),
        ));
    }

    let textures = phrases::selected(record, TEXTURES);
    if !textures.is_empty() {
        pairs.push(QaPair::new(
            Q_TEXTURES,
            disclaimer_if(redact, phrases::textures_sentence(&textures)),
        ));
    }

    let body_parts = phrases::selected(record, BODY_PARTS);
    if !body_parts.is_empty() {
        pairs.push(QaPair::new(
            Q_BODY_PARTS,
            disclaimer_if(redact, phrases::body_parts_sentence(&body_parts)),
        ));
    }

    let condition_symptoms = phrases::selected(record, CONDITION_SYMPTOMS);
    if !condition_symptoms.is_empty() {
        pairs.push(QaPair::new(
            Q_CONDITION_SYMPTOMS,
            disclaimer_if(redact, phrases::condition_symptoms_sentence(&condition_symptoms)),
        ));
    }

    let other_symptoms = phrases::selected(record, OTHER_SYMPTOMS);
    if !other_symptoms.is_empty() {
        let answer = format!("Some of the symptoms include {}. ", other_symptoms.join(", "));
        pairs.push(QaPair::new(Q_OTHER_SYMPTOMS, disclaimer_if(redact, answer)));
    }

    if let Some(category) = record.attr(RELATED_CATEGORY) {
        pairs.push(QaPair::new(
            Q_RELATED_CATEGORY,
            disclaimer_if(redact, phrases::related_category_sentence(category)),
        ));
    }

    pairs.push(QaPair::new(
        Q_GRADABLE,
        disclaimer_if(redact, phrases::skin_condition_gradability_sentence(record)),
    ));

    let races = phrases::present(record, RACE_ETHNICITY);
    if !races.is_empty() {
        pairs.push(QaPair::new(
            Q_RACE,
            disclaimer_if(redact, phrases::race_sentence(&races)),
        ));
    }

    pairs
}

/// Attach QA pairs to every record, dropping records that fail the
/// condition-label precondition.
pub fn qa_all(records: Vec<ImageRecord>) -> Vec<QaImageRecord> {
    records
        .into_iter()
        .filter_map(|record| {
            let pairs = synthesize_qa(&record);
            if pairs.is_empty() {
                None
            } else {
                Some(QaImageRecord { record, pairs })
            }
        })
        .collect()
}

fn disclaimer_if(redact: bool, answer: String) -> String {
    if redact {
        INSUFFICIENT_QUALITY_DISCLAIMER.to_string()
    } else {
        answer
    }
}
