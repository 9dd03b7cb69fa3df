use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a question in the bank. Also fixes its scoring block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u8);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// One of the four labeled choices offered by every question.
///
/// Deserializes case-insensitively through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ChoiceKey {
    A,
    B,
    C,
    D,
}

impl ChoiceKey {
    pub const fn ordered() -> [Self; 4] {
        [Self::A, Self::B, Self::C, Self::D]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChoiceKey {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            other => Err(format!("'{other}' is not one of A, B, C, D")),
        }
    }
}

impl TryFrom<String> for ChoiceKey {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

/// Classification signal carried by a single answer choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    Architect,
    Alchemist,
    Blurred,
    Neutral,
}

/// Top-level Entrepreneurial DNA classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DnaType {
    Architect,
    Alchemist,
    Blurred,
}

impl DnaType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Architect, Self::Alchemist, Self::Blurred]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Architect => "architect",
            Self::Alchemist => "alchemist",
            Self::Blurred => "blurred",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Architect => "Architect",
            Self::Alchemist => "Alchemist",
            Self::Blurred => "Blurred Identity",
        }
    }
}

impl fmt::Display for DnaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DnaType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "architect" => Ok(Self::Architect),
            "alchemist" => Ok(Self::Alchemist),
            "blurred" | "blurred identity" | "blurred-identity" => Ok(Self::Blurred),
            other => Err(format!("unknown DNA type '{other}'")),
        }
    }
}

/// Fine-grained DNA label assigned after the default type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subtype {
    VisionaryOracle,
    MagneticPerfectionist,
    EnergeticEmpath,
    UltimateAlchemist,
    SystemisedBuilder,
    InternalAnalyzer,
    MasterStrategist,
    UltimateStrategist,
    Overthinker,
    Performer,
    SelfForsaker,
    SelfBetrayer,
}

impl Subtype {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::VisionaryOracle,
            Self::MagneticPerfectionist,
            Self::EnergeticEmpath,
            Self::UltimateAlchemist,
            Self::SystemisedBuilder,
            Self::InternalAnalyzer,
            Self::MasterStrategist,
            Self::UltimateStrategist,
            Self::Overthinker,
            Self::Performer,
            Self::SelfForsaker,
            Self::SelfBetrayer,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::VisionaryOracle => "visionary-oracle",
            Self::MagneticPerfectionist => "magnetic-perfectionist",
            Self::EnergeticEmpath => "energetic-empath",
            Self::UltimateAlchemist => "ultimate-alchemist",
            Self::SystemisedBuilder => "systemised-builder",
            Self::InternalAnalyzer => "internal-analyzer",
            Self::MasterStrategist => "master-strategist",
            Self::UltimateStrategist => "ultimate-strategist",
            Self::Overthinker => "overthinker",
            Self::Performer => "performer",
            Self::SelfForsaker => "self-forsaker",
            Self::SelfBetrayer => "self-betrayer",
        }
    }

    /// Subtype reported when the subtype block produced no votes.
    pub const fn fallback_for(dna_type: DnaType) -> Self {
        match dna_type {
            DnaType::Architect => Self::MasterStrategist,
            DnaType::Alchemist => Self::VisionaryOracle,
            DnaType::Blurred => Self::Overthinker,
        }
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Subtype {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|subtype| subtype.key() == needle)
            .ok_or_else(|| format!("unknown subtype '{needle}'"))
    }
}

/// Descriptive grouping of questions; never used for branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    DefaultDna,
    Awareness,
    Subtype,
    Validation,
}

/// Scored answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub text: &'static str,
    #[serde(rename = "type")]
    pub answer_type: AnswerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<Subtype>,
    pub weight: u8,
}

/// Assessment prompt with its four scored choices, indexed by [`ChoiceKey::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    pub category: QuestionCategory,
    pub answers: [AnswerOption; 4],
}

impl Question {
    pub fn answer(&self, key: ChoiceKey) -> &AnswerOption {
        &self.answers[key.index()]
    }
}

/// Caller-supplied `questionId -> choice` mapping.
pub type AnswerSheet = BTreeMap<QuestionId, ChoiceKey>;

/// Weighted tallies of answer types across the default DNA block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeScores {
    pub architect: u32,
    pub alchemist: u32,
    pub blurred: u32,
    pub neutral: u32,
}

impl TypeScores {
    pub fn record(&mut self, answer_type: AnswerType, weight: u8) {
        let weight = u32::from(weight);
        match answer_type {
            AnswerType::Architect => self.architect += weight,
            AnswerType::Alchemist => self.alchemist += weight,
            AnswerType::Blurred => self.blurred += weight,
            AnswerType::Neutral => self.neutral += weight,
        }
    }
}

/// Output of the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub dominant_type: DnaType,
    pub subtype: Subtype,
}

/// Who is taking the quiz. Only students are persisted and rate limited.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Participant {
    Anonymous,
    Student(StudentId),
}

impl Participant {
    pub fn from_header(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(id) if !id.is_empty() && id != "anonymous-user" => {
                Self::Student(StudentId(id.to_string()))
            }
            _ => Self::Anonymous,
        }
    }

    pub fn student(&self) -> Option<&StudentId> {
        match self {
            Self::Student(id) => Some(id),
            Self::Anonymous => None,
        }
    }
}

/// Identifier wrapper for registered students.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
