// ============================================================
// CASE SCHEMA
// ============================================================
// Column names, image slot groups, sentinel values, and the shared
// field -> display label tables consumed by both synthesizers

/// Join key shared by the case and label tables.
pub const CASE_ID: &str = "case_id";

/// The slot-specific columns of one image slot in the wide case record.
#[derive(Debug, Clone, Copy)]
pub struct ImageSlot {
    pub path: &'static str,
    pub shot_type: &'static str,
    pub gradable_for_skin_condition: &'static str,
    pub gradable_for_fitzpatrick_skin_type: &'static str,
    pub fitzpatrick_skin_type_label: &'static str,
}

impl ImageSlot {
    /// All five column names of this slot.
    pub fn columns(&self) -> [&'static str; 5] {
        [
            self.path,
            self.shot_type,
            self.gradable_for_skin_condition,
            self.gradable_for_fitzpatrick_skin_type,
            self.fitzpatrick_skin_type_label,
        ]
    }
}

/// The three image slots of a wide case record, in slot order.
pub const IMAGE_SLOTS: [ImageSlot; 3] = [
    ImageSlot {
        path: "image_1_path",
        shot_type: "image_1_shot_type",
        gradable_for_skin_condition: "dermatologist_gradable_for_skin_condition_1",
        gradable_for_fitzpatrick_skin_type: "dermatologist_gradable_for_fitzpatrick_skin_type_1",
        fitzpatrick_skin_type_label: "dermatologist_fitzpatrick_skin_type_label_1",
    },
    ImageSlot {
        path: "image_2_path",
        shot_type: "image_2_shot_type",
        gradable_for_skin_condition: "dermatologist_gradable_for_skin_condition_2",
        gradable_for_fitzpatrick_skin_type: "dermatologist_gradable_for_fitzpatrick_skin_type_2",
        fitzpatrick_skin_type_label: "dermatologist_fitzpatrick_skin_type_label_2",
    },
    ImageSlot {
        path: "image_3_path",
        shot_type: "image_3_shot_type",
        gradable_for_skin_condition: "dermatologist_gradable_for_skin_condition_3",
        gradable_for_fitzpatrick_skin_type: "dermatologist_gradable_for_fitzpatrick_skin_type_3",
        fitzpatrick_skin_type_label: "dermatologist_fitzpatrick_skin_type_label_3",
    },
];

// Case-level columns consumed by the synthesizers.
pub const CONDITION_LABELS: &str = "dermatologist_skin_condition_on_label_name";
pub const WEIGHTED_CONDITIONS: &str = "weighted_skin_condition_label";
pub const CONDITION_DURATION: &str = "condition_duration";
pub const RELATED_CATEGORY: &str = "related_category";
pub const SOURCE: &str = "source";
pub const RELEASE: &str = "release";
pub const YEAR: &str = "year";
pub const AGE_GROUP: &str = "age_group";
pub const SEX_AT_BIRTH: &str = "sex_at_birth";
pub const FITZPATRICK_SKIN_TYPE: &str = "fitzpatrick_skin_type";
pub const MONK_GRADABLE_INDIA: &str = "gradable_for_monk_skin_tone_india";
pub const MONK_GRADABLE_US: &str = "gradable_for_monk_skin_tone_us";
pub const MONK_LABEL_INDIA: &str = "monk_skin_tone_label_india";
pub const MONK_LABEL_US: &str = "monk_skin_tone_label_us";

// Sentinel values used by the label export.
pub const GRADABLE_SKIN_CONDITION: &str = "DEFAULT_YES_IMAGE_QUALITY_SUFFICIENT";
pub const UNGRADABLE_IMAGE_QUALITY: &str = "NO_IMAGE_QUALITY_INSUFFICIENT";
pub const GRADABLE_FITZPATRICK: &str = "YES";
pub const MULTI_SELECT_YES: &str = "YES";
pub const AGE_UNKNOWN: &str = "AGE_UNKNOWN";
pub const SEX_UNSPECIFIED: &str = "OTHER_OR_UNSPECIFIED";

/// Texture multi-select group: (column, display label).
pub const TEXTURES: &[(&str, &str)] = &[
    ("textures_raised_or_bumpy", "Raised or Bumpy"),
    ("textures_flat", "Flat"),
    ("textures_rough_or_flaky", "Rough or Flaky"),
    ("textures_fluid_filled", "Fluid Filled"),
];

/// Body part multi-select group: (column, display label).
pub const BODY_PARTS: &[(&str, &str)] = &[
    ("body_parts_head_or_neck", "Head or Neck"),
    ("body_parts_arm", "Arm"),
    ("body_parts_palm", "Palm"),
    ("body_parts_back_of_hand", "Back of Hand"),
    ("body_parts_torso_front", "Torso Front"),
    ("body_parts_torso_back", "Torso Back"),
    ("body_parts_genitalia_or_groin", "Genitalia or Groin"),
    ("body_parts_buttocks", "Buttocks"),
    ("body_parts_leg", "Leg"),
    ("body_parts_foot_top_or_side", "Foot Top or Side"),
    ("body_parts_foot_sole", "Foot Sole"),
    ("body_parts_other", "Other"),
];

/// Condition symptom multi-select group: (column, display label).
pub const CONDITION_SYMPTOMS: &[(&str, &str)] = &[
    ("condition_symptoms_bothersome_appearance", "Bothersome Appearance"),
    ("condition_symptoms_bleeding", "Bleeding"),
    ("condition_symptoms_increasing_size", "Increasing Size"),
    ("condition_symptoms_darkening", "Darkening"),
    ("condition_symptoms_itching", "Itching"),
    ("condition_symptoms_burning", "Burning"),
    ("condition_symptoms_pain", "Pain"),
    ("condition_symptoms_no_relevant_experience", "No Relevant Experience"),
];

/// Systemic symptom multi-select group: (column, display label).
pub const OTHER_SYMPTOMS: &[(&str, &str)] = &[
    ("other_symptoms_fever", "Fever"),
    ("other_symptoms_chills", "Chills"),
    ("other_symptoms_fatigue", "Fatigue"),
    ("other_symptoms_joint_pain", "Joint Pain"),
    ("other_symptoms_mouth_sores", "Mouth Sores"),
    ("other_symptoms_shortness_of_breath", "Shortness of Breath"),
    ("other_symptoms_no_relevant_symptoms", "No Relevant Symptoms"),
];

/// Race/ethnicity multi-select group: (column, display label).
///
/// Unlike the other groups these columns are tested for presence, not
/// for the `YES` sentinel.
pub const RACE_ETHNICITY: &[(&str, &str)] = &[
    ("race_ethnicity_american_indian_or_alaska_native", "American Indian or Alaska Native"),
    ("race_ethnicity_asian", "Asian"),
    ("race_ethnicity_black_or_african_american", "Black or African American"),
    ("race_ethnicity_hispanic_latino_or_spanish_origin", "Hispanic, Latino, or Spanish Origin"),
    ("race_ethnicity_middle_eastern_or_north_african", "Middle Eastern or North African"),
    ("race_ethnicity_native_hawaiian_or_pacific_islander", "Native Hawaiian or Pacific Islander"),
    ("race_ethnicity_white", "White"),
    ("race_ethnicity_other_race", "Other Race"),
    ("race_ethnicity_prefer_not_to_answer", "Prefer Not to Answer"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_columns_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for slot in &IMAGE_SLOTS {
            for column in slot.columns() {
                assert!(seen.insert(column), "duplicate slot column: {}", column);
            }
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn test_group_sizes() {
        assert_eq!(TEXTURES.len(), 4);
        assert_eq!(BODY_PARTS.len(), 12);
        assert_eq!(CONDITION_SYMPTOMS.len(), 8);
        assert_eq!(OTHER_SYMPTOMS.len(), 7);
        assert_eq!(RACE_ETHNICITY.len(), 9);
    }
}
