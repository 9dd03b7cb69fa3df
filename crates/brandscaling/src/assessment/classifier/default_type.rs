use super::super::bank::{QuestionBank, DEFAULT_DNA_BLOCK};
use super::super::domain::{AnswerSheet, DnaType, TypeScores};

/// Weighted votes one type needs across the default block to dominate.
pub const DOMINANCE_THRESHOLD: u32 = 4;

/// Tally the default DNA block. Unanswered questions contribute nothing.
pub(crate) fn tally_default_block(bank: &QuestionBank, answers: &AnswerSheet) -> TypeScores {
    let mut scores = TypeScores::default();

    for id in DEFAULT_DNA_BLOCK.ids() {
        let Some(key) = answers.get(&id) else {
            continue;
        };
        if let Some(answer) = bank.answer(id, *key) {
            scores.record(answer.answer_type, answer.weight);
        }
    }

    scores
}

/// Architect is checked first, so it wins if both types reach the threshold.
pub(crate) fn decide_default_type(scores: &TypeScores) -> DnaType {
    if scores.architect >= DOMINANCE_THRESHOLD {
        DnaType::Architect
    } else if scores.alchemist >= DOMINANCE_THRESHOLD {
        DnaType::Alchemist
    } else {
        DnaType::Blurred
    }
}
