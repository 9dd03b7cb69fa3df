use super::super::bank::{QuestionBank, SUBTYPE_BLOCK};
use super::super::domain::{AnswerSheet, DnaType, Subtype};

/// Vote counts per subtype, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SubtypeVotes {
    entries: Vec<(Subtype, u32)>,
}

impl SubtypeVotes {
    fn add(&mut self, subtype: Subtype, weight: u8) {
        let weight = u32::from(weight);
        match self.entries.iter_mut().find(|(seen, _)| *seen == subtype) {
            Some((_, count)) => *count += weight,
            None => self.entries.push((subtype, weight)),
        }
    }

    pub(crate) fn entries(&self) -> &[(Subtype, u32)] {
        &self.entries
    }

    /// Plurality winner. A later subtype must strictly beat the running
    /// maximum, so ties go to the subtype that appeared first.
    pub(crate) fn leader(&self) -> Option<Subtype> {
        let mut leader = None;
        let mut max_count = 0;
        for (subtype, count) in &self.entries {
            if *count > max_count {
                max_count = *count;
                leader = Some(*subtype);
            }
        }
        leader
    }
}

pub(crate) fn tally_subtype_block(bank: &QuestionBank, answers: &AnswerSheet) -> SubtypeVotes {
    let mut votes = SubtypeVotes::default();

    for id in SUBTYPE_BLOCK.ids() {
        let Some(key) = answers.get(&id) else {
            continue;
        };
        let Some(answer) = bank.answer(id, *key) else {
            continue;
        };
        if let Some(subtype) = answer.subtype {
            votes.add(subtype, answer.weight);
        }
    }

    votes
}

pub(crate) fn decide_subtype(votes: &SubtypeVotes, dominant_type: DnaType) -> Subtype {
    votes
        .leader()
        .unwrap_or_else(|| Subtype::fallback_for(dominant_type))
}
