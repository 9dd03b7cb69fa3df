use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Participant, StudentId};

pub const DEFAULT_RETAKE_COOLDOWN_DAYS: u32 = 30;

/// Cooldown rules for retaking the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetakePolicy {
    pub cooldown_days: u32,
    /// Students who may always retake (staff and demo accounts).
    pub exempt_students: BTreeSet<StudentId>,
}

impl Default for RetakePolicy {
    fn default() -> Self {
        Self {
            cooldown_days: DEFAULT_RETAKE_COOLDOWN_DAYS,
            exempt_students: BTreeSet::new(),
        }
    }
}

impl RetakePolicy {
    pub fn cooldown(&self) -> Duration {
        Duration::days(i64::from(self.cooldown_days))
    }

    pub fn next_retake_date(&self, taken_at: DateTime<Utc>) -> DateTime<Utc> {
        taken_at + self.cooldown()
    }

    pub fn is_exempt(&self, participant: &Participant) -> bool {
        participant
            .student()
            .is_some_and(|student| self.exempt_students.contains(student))
    }

    /// Anonymous participants are never tracked, so they are always eligible.
    pub fn eligibility(
        &self,
        participant: &Participant,
        last_taken: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> RetakeEligibility {
        if participant.student().is_none() || self.is_exempt(participant) {
            return RetakeEligibility::open();
        }

        match last_taken {
            None => RetakeEligibility::open(),
            Some(taken_at) => {
                let next = self.next_retake_date(taken_at);
                if now >= next {
                    RetakeEligibility::open()
                } else {
                    RetakeEligibility {
                        can_retake: false,
                        next_retake_date: Some(next),
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetakeEligibility {
    pub can_retake: bool,
    pub next_retake_date: Option<DateTime<Utc>>,
}

impl RetakeEligibility {
    pub const fn open() -> Self {
        Self {
            can_retake: true,
            next_retake_date: None,
        }
    }
}
