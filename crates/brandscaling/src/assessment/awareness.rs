//! Awareness block (questions 7-12) presented according to the default type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bank::AWARENESS_BLOCK;
use super::domain::{AnswerSheet, ChoiceKey, DnaType, QuestionId};

/// Which set of awareness questions a participant sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwarenessTrack {
    AlchemistMeasuringArchitect,
    ArchitectMeasuringAlchemist,
    BlurredMixed,
}

impl AwarenessTrack {
    pub const fn for_type(dna_type: DnaType) -> Self {
        match dna_type {
            DnaType::Alchemist => Self::AlchemistMeasuringArchitect,
            DnaType::Architect => Self::ArchitectMeasuringAlchemist,
            DnaType::Blurred => Self::BlurredMixed,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::AlchemistMeasuringArchitect => "alchemist_measuring_architect",
            Self::ArchitectMeasuringAlchemist => "architect_measuring_alchemist",
            Self::BlurredMixed => "blurred_mixed",
        }
    }

    /// Blurred participants get architect awareness for Q7-9 and alchemist for Q10-12.
    pub fn questions(self) -> [&'static AwarenessQuestion; 6] {
        match self {
            Self::AlchemistMeasuringArchitect => std::array::from_fn(|i| &ARCHITECT_LENS[i]),
            Self::ArchitectMeasuringAlchemist => std::array::from_fn(|i| &ALCHEMIST_LENS[i]),
            Self::BlurredMixed => std::array::from_fn(|i| {
                if i < 3 {
                    &ARCHITECT_LENS[i]
                } else {
                    &ALCHEMIST_LENS[i]
                }
            }),
        }
    }
}

impl fmt::Display for AwarenessTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AwarenessTrack {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "alchemist_measuring_architect" => Ok(Self::AlchemistMeasuringArchitect),
            "architect_measuring_alchemist" => Ok(Self::ArchitectMeasuringAlchemist),
            "blurred_mixed" => Ok(Self::BlurredMixed),
            other => other.parse::<DnaType>().map(Self::for_type),
        }
    }
}

/// Awareness prompt. Choice D is always the "none of these" escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AwarenessQuestion {
    pub id: QuestionId,
    pub text: &'static str,
    /// The type whose habits the choices describe.
    pub measures: DnaType,
    pub answers: [&'static str; 4],
}

pub const NONE_OF_THESE: &str = "None of these reflect how I would think or act.";

/// Share of the awareness block answered with a recognising choice (A-C), 0-100.
///
/// Unanswered questions count against the participant.
pub fn awareness_percentage(answers: &AnswerSheet) -> u8 {
    let recognised = AWARENESS_BLOCK
        .ids()
        .filter_map(|id| answers.get(&id))
        .filter(|key| **key != ChoiceKey::D)
        .count();
    let total = AWARENESS_BLOCK.question_count();

    ((recognised as f32 / total as f32) * 100.0).round() as u8
}

const PLAN_PROMPT: &str =
    "You're preparing for something two weeks away. What do you think is the best way to plan?";
const CHALLENGE_PROMPT: &str =
    "Someone challenges your perspective in a group conversation. What's the best way to respond?";
const WRONG_WAY_PROMPT: &str =
    "You're working with someone who's doing things \"wrong.\" What's the best way to respond?";
const LONG_GOAL_PROMPT: &str =
    "When pursuing a long-term goal (6–12 months), what's the best way to stay on track?";
const TRAINING_PROMPT: &str = "You're training someone new. What's the best way to teach them?";
const LOGIC_PROMPT: &str =
    "When something doesn't feel right but makes sense logically — what's the best next step?";

const fn lens(
    id: u8,
    text: &'static str,
    measures: DnaType,
    choices: [&'static str; 3],
) -> AwarenessQuestion {
    AwarenessQuestion {
        id: QuestionId(id),
        text,
        measures,
        answers: [choices[0], choices[1], choices[2], NONE_OF_THESE],
    }
}

static ARCHITECT_LENS: [AwarenessQuestion; 6] = [
    lens(
        7,
        PLAN_PROMPT,
        DnaType::Architect,
        [
            "I map out each phase and allocate time per task.",
            "I build in buffers and list dependencies before I start.",
            "I reverse-engineer the deadline to set milestones.",
        ],
    ),
    lens(
        8,
        CHALLENGE_PROMPT,
        DnaType::Architect,
        [
            "I ask questions to understand their viewpoint calmly.",
            "I pause and walk them through my structured reasoning.",
            "I respond logically, not emotionally, even if I disagree.",
        ],
    ),
    lens(
        9,
        WRONG_WAY_PROMPT,
        DnaType::Architect,
        [
            "I show them the correct system and explain why.",
            "I assess whether it's a training or logic gap.",
            "I offer structured feedback with reasoning.",
        ],
    ),
    lens(
        10,
        LONG_GOAL_PROMPT,
        DnaType::Architect,
        [
            "Set structured checkpoints and measurable metrics.",
            "Track time spent vs. outcome weekly.",
            "Use data to adjust pace and process.",
        ],
    ),
    lens(
        11,
        TRAINING_PROMPT,
        DnaType::Architect,
        [
            "Provide written SOPs and visual aids.",
            "Give structured tasks with feedback loops.",
            "Break the learning into logical stages.",
        ],
    ),
    lens(
        12,
        LOGIC_PROMPT,
        DnaType::Architect,
        [
            "Recheck data or assumptions to eliminate bias.",
            "Delay action until logic is fully sound.",
            "Trust the structure over feelings in this case.",
        ],
    ),
];

static ALCHEMIST_LENS: [AwarenessQuestion; 6] = [
    lens(
        7,
        PLAN_PROMPT,
        DnaType::Alchemist,
        [
            "I feel into what needs to happen and adjust flow daily.",
            "I follow inspiration but stay close to the end goal.",
            "I refine the plan repeatedly based on how it feels.",
        ],
    ),
    lens(
        8,
        CHALLENGE_PROMPT,
        DnaType::Alchemist,
        [
            "I speak with passion about why it matters to me.",
            "I trust my intuition and share what I feel is true.",
            "I own my stance but allow room for emotional nuance.",
        ],
    ),
    lens(
        9,
        WRONG_WAY_PROMPT,
        DnaType::Alchemist,
        [
            "I consider their approach before jumping in.",
            "I tune into the dynamic and adapt emotionally.",
            "If I care, I may just do it myself — out of frustration or love.",
        ],
    ),
    lens(
        10,
        LONG_GOAL_PROMPT,
        DnaType::Alchemist,
        [
            "Tap into emotional momentum to keep going.",
            "Build inspiration and energy into the journey.",
            "Use vision boards, journaling, or feeling-based check-ins.",
        ],
    ),
    lens(
        11,
        TRAINING_PROMPT,
        DnaType::Alchemist,
        [
            "Guide them through the why behind the work.",
            "Adjust based on their energy and confidence.",
            "Let them learn by feeling through it, not just logic.",
        ],
    ),
    lens(
        12,
        LOGIC_PROMPT,
        DnaType::Alchemist,
        [
            "Pause and reflect on what the resistance means.",
            "Trust that discomfort may signal misalignment.",
            "Explore intuition to uncover what's missing.",
        ],
    ),
];
