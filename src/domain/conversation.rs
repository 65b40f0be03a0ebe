// ============================================================
// CONVERSATION TYPES
// ============================================================
// Output shape of the corpus: two-turn conversations, one JSON
// object per line

use serde::{Deserialize, Serialize};

/// A question/answer pair synthesized from one image record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// One side of a two-turn conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub from: String,
    pub value: String,
}

/// Terminal output unit: one conversation per QA pair, tagged with an
/// opaque unique id and the resolved image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub id: String,
    pub image: String,
    pub conversations: Vec<ConversationTurn>,
}
