//! Canonical Entrepreneurial DNA question bank.
//!
//! Question ids double as scoring-block membership: 1-6 feed the default type,
//! 7-12 measure awareness of the opposite type, 13-22 feed subtype detection.

use super::domain::{
    AnswerOption, AnswerType, ChoiceKey, Question, QuestionCategory, QuestionId, Subtype,
};

/// Contiguous range of question ids consumed by one classifier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringBlock {
    pub name: &'static str,
    pub first: u8,
    pub last: u8,
}

impl ScoringBlock {
    pub fn ids(self) -> impl Iterator<Item = QuestionId> {
        (self.first..=self.last).map(QuestionId)
    }

    pub const fn contains(self, id: QuestionId) -> bool {
        id.0 >= self.first && id.0 <= self.last
    }

    pub const fn question_count(self) -> usize {
        (self.last - self.first) as usize + 1
    }
}

pub const DEFAULT_DNA_BLOCK: ScoringBlock = ScoringBlock {
    name: "default_dna",
    first: 1,
    last: 6,
};

pub const AWARENESS_BLOCK: ScoringBlock = ScoringBlock {
    name: "awareness",
    first: 7,
    last: 12,
};

pub const SUBTYPE_BLOCK: ScoringBlock = ScoringBlock {
    name: "subtype",
    first: 13,
    last: 22,
};

/// Number of answers a complete submission carries.
pub const REQUIRED_ANSWER_COUNT: usize = 22;

/// Read-only view over an ordered question table with O(1) lookup by id.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    /// The production bank.
    pub fn standard() -> Self {
        Self {
            questions: &STANDARD_QUESTIONS,
        }
    }

    /// Wrap a custom table after checking it satisfies the bank invariants.
    pub fn new(questions: &'static [Question]) -> Result<Self, BankIntegrityError> {
        let bank = Self { questions };
        bank.verify()?;
        Ok(bank)
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: QuestionId) -> Option<&'static Question> {
        let index = usize::from(id.0).checked_sub(1)?;
        self.questions
            .get(index)
            .filter(|question| question.id == id)
    }

    pub fn answer(&self, id: QuestionId, key: ChoiceKey) -> Option<&'static AnswerOption> {
        self.question(id).map(|question| &question.answers[key.index()])
    }

    pub fn block(&self, block: ScoringBlock) -> impl Iterator<Item = &'static Question> + '_ {
        block.ids().filter_map(|id| self.question(id))
    }

    /// Check id contiguity, weights, and subtype tagging.
    pub fn verify(&self) -> Result<(), BankIntegrityError> {
        if self.questions.is_empty() {
            return Err(BankIntegrityError::Empty);
        }

        for (index, question) in self.questions.iter().enumerate() {
            let expected = u8::try_from(index + 1).map(QuestionId).map_err(|_| {
                BankIntegrityError::TooManyQuestions {
                    count: self.questions.len(),
                }
            })?;
            if question.id != expected {
                return Err(BankIntegrityError::NonContiguousId {
                    expected,
                    found: question.id,
                });
            }
            if question.text.trim().is_empty() {
                return Err(BankIntegrityError::MissingText { id: question.id });
            }

            let in_subtype_block = SUBTYPE_BLOCK.contains(question.id);
            for key in ChoiceKey::ordered() {
                let answer = question.answer(key);
                if answer.text.trim().is_empty() {
                    return Err(BankIntegrityError::MissingText { id: question.id });
                }
                if answer.weight == 0 {
                    return Err(BankIntegrityError::ZeroWeight {
                        id: question.id,
                        key,
                    });
                }
                if in_subtype_block != answer.subtype.is_some() {
                    return Err(BankIntegrityError::SubtypeTagging {
                        id: question.id,
                        key,
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

/// Violations reported by [`QuestionBank::verify`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankIntegrityError {
    #[error("question bank is empty")]
    Empty,
    #[error("{count} questions exceed the {} addressable ids", u8::MAX)]
    TooManyQuestions { count: usize },
    #[error("expected {expected} but found {found}")]
    NonContiguousId {
        expected: QuestionId,
        found: QuestionId,
    },
    #[error("{id} has an empty prompt or choice")]
    MissingText { id: QuestionId },
    #[error("{id} choice {key} has zero weight")]
    ZeroWeight { id: QuestionId, key: ChoiceKey },
    #[error("{id} choice {key} has a subtype tag outside the subtype block, or lacks one inside it")]
    SubtypeTagging { id: QuestionId, key: ChoiceKey },
}

const fn plain(text: &'static str, answer_type: AnswerType) -> AnswerOption {
    AnswerOption {
        text,
        answer_type,
        subtype: None,
        weight: 1,
    }
}

const fn tagged(text: &'static str, answer_type: AnswerType, subtype: Subtype) -> AnswerOption {
    AnswerOption {
        text,
        answer_type,
        subtype: Some(subtype),
        weight: 1,
    }
}

const fn question(
    id: u8,
    category: QuestionCategory,
    text: &'static str,
    answers: [AnswerOption; 4],
) -> Question {
    Question {
        id: QuestionId(id),
        text,
        category,
        answers,
    }
}

use AnswerType::{Alchemist, Architect, Blurred, Neutral};
use QuestionCategory::{Awareness, DefaultDna, Subtype as SubtypeDetection, Validation};
use Subtype::{
    EnergeticEmpath, InternalAnalyzer, MagneticPerfectionist, MasterStrategist,
    SystemisedBuilder, UltimateAlchemist, UltimateStrategist, VisionaryOracle,
};

const NONE_OF_THESE_OPPOSITE: &str = "None of these reflect how my opposite would operate";

static STANDARD_QUESTIONS: [Question; 22] = [
    question(
        1,
        DefaultDna,
        "You're going away for the weekend. How do you prepare the night before?",
        [
            plain("I mentally run through what I need and pack once — essentials are covered.", Architect),
            plain("I write a full list, check everything off, repack a few times, still feel uneasy.", Blurred),
            plain("I throw things in last minute and trust it'll be fine.", Alchemist),
            plain("I pack, unpack, and get overwhelmed deciding what I even need.", Blurred),
        ],
    ),
    question(
        2,
        DefaultDna,
        "A close friend unintentionally hurts your feelings. How do you respond?",
        [
            plain("I won't say anything — they'll figure it out or I'll quietly move on.", Architect),
            plain("I'll express it — maybe now, maybe later — but it will come out.", Alchemist),
            plain("I react suddenly, then second-guess if I was overdramatic.", Blurred),
            plain("I feel stuck about whether I should say something or not.", Blurred),
        ],
    ),
    question(
        3,
        DefaultDna,
        "You walk into a room full of strangers. What do you do?",
        [
            plain("I observe quietly, scan the room, and engage when it makes strategic sense.", Architect),
            plain("I tune into the energy — I might light up the room or stay quiet, depending how I feel.", Alchemist),
            plain("I pause and wait for someone to approach — I'm not sure how to show up.", Neutral),
            plain("I keep switching between acting confident and feeling unsure — I want to be seen but don't know how.", Blurred),
        ],
    ),
    question(
        4,
        DefaultDna,
        "You've committed to waking up at 6am for a week. Day 3, you're exhausted. What happens?",
        [
            plain("I stick to it. Fatigue doesn't override commitment unless it's serious.", Architect),
            plain("I ask myself if the reason still matters — if not, I adjust without guilt.", Alchemist),
            plain("I sleep in, feel bad, and try again tomorrow.", Neutral),
            plain("I feel torn — I want to keep going but can't force myself either.", Blurred),
        ],
    ),
    question(
        5,
        DefaultDna,
        "You've completed a project and it performs well. How do you feel about it?",
        [
            plain("If the result is strong, I'm satisfied — no need to change anything.", Architect),
            plain("I immediately wonder how it could have been even better.", Alchemist),
            plain("I feel good but uneasy — maybe I missed something important.", Blurred),
            plain("I can't tell if I'm happy or not — depends what others say.", Blurred),
        ],
    ),
    question(
        6,
        DefaultDna,
        "You're pursuing a goal no one else has achieved. How do you think about it?",
        [
            plain("I need to see a path or example — otherwise I'm not sure it's achievable.", Architect),
            plain("Even if no one's done it, I know it's possible — I just need the steps.", Alchemist),
            plain("I doubt myself, but I still try in case it works out.", Blurred),
            plain("I switch between confidence and confusion depending on the day.", Blurred),
        ],
    ),
    question(
        7,
        Awareness,
        "You're about to launch a new offer in 2 weeks. How would your opposite decide what to focus on first?",
        [
            plain("Identify the core bottlenecks and map out the sequence to remove them", Architect),
            plain("Jump between setup, content, and branding — depending on what feels most urgent", Blurred),
            plain("Ask others what they think should happen first and go with consensus", Neutral),
            plain(NONE_OF_THESE_OPPOSITE, Alchemist),
        ],
    ),
    question(
        8,
        Awareness,
        "A peer gives you tough feedback on your recent launch. How would your opposite respond?",
        [
            plain("Shrug it off publicly but internalize it deeply and avoid the peer next time", Blurred),
            plain("Say thank you, then try to adjust only the parts you agree with emotionally", Neutral),
            plain("Break down the feedback, sort it into categories, and adjust where it makes sense", Architect),
            plain(NONE_OF_THESE_OPPOSITE, Alchemist),
        ],
    ),
    question(
        9,
        Awareness,
        "You've brought on a new team member who isn't delivering as expected. How would your opposite handle it?",
        [
            plain("Overcompensate by taking on their tasks and quietly hoping they improve", Blurred),
            plain("Give vague feedback while focusing on keeping morale high", Neutral),
            plain("Review expectations, pinpoint where the breakdown occurred, and restructure their workflow", Architect),
            plain(NONE_OF_THESE_OPPOSITE, Alchemist),
        ],
    ),
    question(
        10,
        Awareness,
        "A long-term partnership feels exciting but unclear. How would your opposite approach the next step?",
        [
            plain("Wait to see how things evolve and trust it will clarify naturally", Neutral),
            plain("Say yes quickly, then figure it out as they go", Blurred),
            plain("Clarify objectives, roles, and measurable outcomes before committing", Architect),
            plain(NONE_OF_THESE_OPPOSITE, Alchemist),
        ],
    ),
    question(
        11,
        Awareness,
        "A team member keeps missing deadlines. How would your opposite handle this?",
        [
            plain("Set up a review system to track accountability and outline next steps", Architect),
            plain("Avoid confrontation and work around them instead", Blurred),
            plain("Assume they need more motivation and give them a pep talk", Neutral),
            plain(NONE_OF_THESE_OPPOSITE, Alchemist),
        ],
    ),
    question(
        12,
        Awareness,
        "You just wrapped a high-revenue campaign. What would your opposite focus on next?",
        [
            plain("Break down what worked and rebuild the system for repeatability", Architect),
            plain("Start planning a new direction without reviewing results", Blurred),
            plain("Celebrate with the team and move on instinctively", Neutral),
            plain(NONE_OF_THESE_OPPOSITE, Alchemist),
        ],
    ),
    question(
        13,
        SubtypeDetection,
        "You've just had an idea you're excited about, but you're not sure how to begin. What's your first move?",
        [
            tagged("I outline the steps from A to Z and start mapping the tools or systems I'd need to deliver it properly.", Architect, InternalAnalyzer),
            tagged("I write down everything I'd want it to include — even if I don't know how I'll get there yet.", Architect, SystemisedBuilder),
            tagged("I sketch out a basic version and start testing how it might work.", Architect, UltimateStrategist),
            tagged("I pause to define the real problem it solves before I do anything else.", Architect, MasterStrategist),
        ],
    ),
    question(
        14,
        SubtypeDetection,
        "You've written a rough outline for a course or product. What do you naturally do next?",
        [
            tagged("I check if each part connects logically and improve the structure before building anything.", Architect, InternalAnalyzer),
            tagged("I open up a tool and start creating the first few sections to see how it feels in action.", Architect, SystemisedBuilder),
            tagged("I make a checklist of every component and start working through it step-by-step.", Architect, UltimateStrategist),
            tagged("I stop to re-question the core idea: 'Is this still the right thing to build?'", Architect, MasterStrategist),
        ],
    ),
    question(
        15,
        SubtypeDetection,
        "You've sketched out a new service or program. A friend asks you, 'How will it work?' What do you instinctively describe first?",
        [
            tagged("The reason I'm offering it and what kind of transformation it's built to deliver.", Architect, MasterStrategist),
            tagged("The tools, steps, and delivery flow — I explain exactly how someone would go through it.", Architect, UltimateStrategist),
            tagged("The logic behind the framework — why each part exists and how it links to the bigger picture.", Architect, InternalAnalyzer),
            tagged("I say, 'Let me show you'—then pull up a mock-up or system to demonstrate.", Architect, SystemisedBuilder),
        ],
    ),
    question(
        16,
        SubtypeDetection,
        "You've joined a mastermind group, and they're brainstorming ways to improve their businesses. What's your natural way of contributing?",
        [
            tagged("I start drawing on the whiteboard — mapping steps, bottlenecks, or a better way to do things.", Architect, SystemisedBuilder),
            tagged("I stay quiet until I've listened deeply, then share a clear plan or observation that changes the direction.", Architect, UltimateStrategist),
            tagged("I suggest ways they could simplify and scale — I'm always thinking about leverage and strategy.", Architect, MasterStrategist),
            tagged("I ask focused questions to help them think better, and naturally start outlining the structure for them.", Architect, InternalAnalyzer),
        ],
    ),
    question(
        17,
        SubtypeDetection,
        "You've got a notebook full of business ideas. What's your natural approach to choosing which one to act on?",
        [
            tagged("I compare them logically — which one solves the biggest problem, and which has the most potential to scale?", Architect, MasterStrategist),
            tagged("I test parts of a few ideas to see which one feels smooth to build and execute.", Architect, SystemisedBuilder),
            tagged("I think about which idea has the clearest delivery process — I like knowing exactly how I'd create and deliver it.", Architect, InternalAnalyzer),
            tagged("I ask myself which idea is easiest to explain to others — if I can map it cleanly, I know I'll build it well.", Architect, UltimateStrategist),
        ],
    ),
    question(
        18,
        SubtypeDetection,
        "A friend asks for help turning their business idea into something real. You agree. What's your instinctive first step?",
        [
            tagged("I draw out a clear plan — what needs to be done, in what order, and by when.", Architect, MasterStrategist),
            tagged("I offer to help set up the first few tools or tech pieces to get things moving.", Architect, SystemisedBuilder),
            tagged("I start mapping the entire process into systems — I want everything running smoothly early on.", Architect, InternalAnalyzer),
            tagged("I ask them to describe their end goal in one sentence, then figure out how to reverse-engineer it from there.", Architect, UltimateStrategist),
        ],
    ),
    question(
        19,
        Validation,
        "You're given a blank room and asked to design it however you like. What happens first?",
        [
            tagged("I get excited and start moving things around to see what feels right.", Alchemist, VisionaryOracle),
            tagged("I sketch it out first, then arrange everything to match my vision perfectly.", Alchemist, MagneticPerfectionist),
            tagged("I tune into the energy of the space and let that guide where things go.", Alchemist, EnergeticEmpath),
            tagged("I think about the purpose of the room first, then design around that function.", Alchemist, UltimateAlchemist),
        ],
    ),
    question(
        20,
        Validation,
        "Think back to school homework. How did you usually approach it?",
        [
            tagged("I did it in bursts — either all at once or not at all.", Alchemist, VisionaryOracle),
            tagged("I planned it out carefully and worked through it step by step.", Alchemist, MagneticPerfectionist),
            tagged("I needed the right mood or environment before I could focus.", Alchemist, EnergeticEmpath),
            tagged("I found ways to make it interesting or connected it to something I cared about.", Alchemist, UltimateAlchemist),
        ],
    ),
    question(
        21,
        Validation,
        "As a child, how did you organize your room or personal space?",
        [
            tagged("I did it in one big emotional burst — the chaos would build until I had to act.", Alchemist, VisionaryOracle),
            tagged("I made a plan or system first, then tackled it piece by piece.", Alchemist, UltimateAlchemist),
            tagged("I felt overwhelmed unless the mood or energy felt right.", Alchemist, EnergeticEmpath),
            tagged("I cleaned while imagining how I wanted it to look when done — I needed to see it first.", Alchemist, MagneticPerfectionist),
        ],
    ),
    question(
        22,
        Validation,
        "You're learning a new skill (e.g., cooking, driving, drawing). Which learning pattern is most natural for you?",
        [
            tagged("I research first, then repeat steps until it feels mastered.", Alchemist, MagneticPerfectionist),
            tagged("I learn by doing — I just start and fix mistakes as I go.", Alchemist, VisionaryOracle),
            tagged("I learn when I feel connected to what I'm doing — if the energy's off, I can't focus.", Alchemist, EnergeticEmpath),
            tagged("I see the end result in my head first, then I try to recreate it immediately.", Alchemist, UltimateAlchemist),
        ],
    ),
];
