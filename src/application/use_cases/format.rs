// ============================================================
// OUTPUT FORMATTER
// ============================================================
// Flattens QA records into per-pair conversation entries

use uuid::Uuid;

use crate::domain::{ConversationEntry, ConversationTurn, QaImageRecord};

const HUMAN_ROLE: &str = "human";
const ASSISTANT_ROLE: &str = "gpt";

/// Flatten every (record, pair) combination into one conversation
/// entry, preserving input order.
///
/// Each entry gets a fresh opaque id, the record's image reference
/// resolved under `image_base`, and the question wrapped in the
/// instruction-tag template.
pub fn format_conversations(records: &[QaImageRecord], image_base: &str) -> Vec<ConversationEntry> {
    records
        .iter()
        .flat_map(|qa| {
            qa.pairs.iter().map(|pair| ConversationEntry {
                id: Uuid::new_v4().simple().to_string(),
                image: image_reference(image_base, &qa.record.image_path),
                conversations: vec![
                    ConversationTurn {
                        from: HUMAN_ROLE.to_string(),
                        value: wrap_question(&pair.question),
                    },
                    ConversationTurn {
                        from: ASSISTANT_ROLE.to_string(),
                        value: pair.answer.clone(),
                    },
                ],
            })
        })
        .collect()
}

fn wrap_question(question: &str) -> String {
    format!("[INST] <image>\n{}[/INST]", question)
}

/// Join the configured base path and a relative image path with a
/// single separator.
fn image_reference(base: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ImageRecord, QaPair};
    use std::collections::HashSet;

    fn qa_record(case_id: &str, image: &str, pair_count: usize) -> QaImageRecord {
        let pairs = (0..pair_count)
            .map(|i| QaPair::new(format!("question {}", i), format!("answer {}", i)))
            .collect();

        QaImageRecord {
            record: ImageRecord::new(case_id, 1, image),
            pairs,
        }
    }

    #[test]
    fn test_flattening_identity() {
        let records = vec![qa_record("001", "a.jpg", 3), qa_record("002", "b.jpg", 5)];

        let entries = format_conversations(&records, "llava");

        assert_eq!(entries.len(), 8);
    }

    #[test]
    fn test_ids_are_unique_hex() {
        let records = vec![qa_record("001", "a.jpg", 4)];

        let entries = format_conversations(&records, "llava");

        let ids: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
        for id in ids {
            assert_eq!(id.len(), 32);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_two_turn_shape() {
        let records = vec![qa_record("001", "a.jpg", 1)];

        let entries = format_conversations(&records, "llava");
        let entry = &entries[0];

        assert_eq!(entry.image, "llava/a.jpg");
        assert_eq!(entry.conversations.len(), 2);
        assert_eq!(entry.conversations[0].from, "human");
        assert_eq!(
            entry.conversations[0].value,
            "[INST] <image>\nquestion 0[/INST]"
        );
        assert_eq!(entry.conversations[1].from, "gpt");
        assert_eq!(entry.conversations[1].value, "answer 0");
    }

    #[test]
    fn test_image_reference_joins_with_single_slash() {
        assert_eq!(image_reference("llava/", "a.jpg"), "llava/a.jpg");
        assert_eq!(image_reference("llava", "/a.jpg"), "llava/a.jpg");
        assert_eq!(
            image_reference("/data/llava", "images/a.png"),
            "/data/llava/images/a.png"
        );
    }

    #[test]
    fn test_order_preserved() {
        let records = vec![qa_record("001", "a.jpg", 2), qa_record("002", "b.jpg", 1)];

        let entries = format_conversations(&records, "llava");

        assert_eq!(entries[0].conversations[1].value, "answer 0");
        assert_eq!(entries[1].conversations[1].value, "answer 1");
        assert_eq!(entries[2].image, "llava/b.jpg");
    }
}
