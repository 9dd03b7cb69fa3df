mod default_type;
mod subtype;

pub use default_type::DOMINANCE_THRESHOLD;

use super::bank::QuestionBank;
use super::domain::{AnswerSheet, ClassificationResult, DnaType, Subtype, TypeScores};
use serde::{Deserialize, Serialize};

/// Stateless scorer that runs the default-type stage, then the subtype stage.
///
/// Every answer sheet, including an empty one, produces a result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassificationEngine {
    bank: QuestionBank,
}

impl ClassificationEngine {
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Reduce questions 1-6 to a top-level type. Other ids are ignored.
    pub fn default_type(&self, answers: &AnswerSheet) -> DnaType {
        let scores = default_type::tally_default_block(&self.bank, answers);
        default_type::decide_default_type(&scores)
    }

    /// Reduce questions 13-22 to a subtype, falling back on `dominant_type`.
    pub fn subtype(&self, answers: &AnswerSheet, dominant_type: DnaType) -> Subtype {
        let votes = subtype::tally_subtype_block(&self.bank, answers);
        subtype::decide_subtype(&votes, dominant_type)
    }

    pub fn classify(&self, answers: &AnswerSheet) -> ClassificationResult {
        self.score(answers).result
    }

    /// Classify and keep the intermediate tallies for reporting.
    pub fn score(&self, answers: &AnswerSheet) -> ClassificationOutcome {
        let type_scores = default_type::tally_default_block(&self.bank, answers);
        let dominant_type = default_type::decide_default_type(&type_scores);

        let votes = subtype::tally_subtype_block(&self.bank, answers);
        let subtype = subtype::decide_subtype(&votes, dominant_type);

        ClassificationOutcome {
            result: ClassificationResult {
                dominant_type,
                subtype,
            },
            type_scores,
            subtype_votes: votes
                .entries()
                .iter()
                .map(|(subtype, votes)| SubtypeTally {
                    subtype: *subtype,
                    votes: *votes,
                })
                .collect(),
            subtype_fallback: votes.leader().is_none(),
        }
    }
}

/// Votes collected for one subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtypeTally {
    pub subtype: Subtype,
    pub votes: u32,
}

/// Classification plus the audit trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationOutcome {
    pub result: ClassificationResult,
    pub type_scores: TypeScores,
    /// First-seen order; ties in the plurality resolve to the earliest entry.
    pub subtype_votes: Vec<SubtypeTally>,
    pub subtype_fallback: bool,
}
