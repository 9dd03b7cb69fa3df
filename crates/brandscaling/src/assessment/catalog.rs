//! Narrative reference data for each subtype, consumed by presentation layers.

use serde::Serialize;

use super::domain::{DnaType, Subtype};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtypeDescriptor {
    pub id: Subtype,
    pub name: &'static str,
    pub emoji: &'static str,
    pub category: DnaType,
    pub operating_loop: &'static str,
    pub core_identity: &'static str,
    pub opposite_awareness: &'static str,
    pub edge: &'static str,
    pub risks: &'static str,
    pub next_steps: &'static str,
}

impl Subtype {
    pub fn descriptor(self) -> &'static SubtypeDescriptor {
        // SUBTYPE_CATALOG follows Subtype::ordered()
        &SUBTYPE_CATALOG[self as usize]
    }

    pub fn category(self) -> DnaType {
        self.descriptor().category
    }
}

pub fn subtypes_for(category: DnaType) -> impl Iterator<Item = &'static SubtypeDescriptor> {
    SUBTYPE_CATALOG
        .iter()
        .filter(move |descriptor| descriptor.category == category)
}

const ALCHEMIST_LOOP: &str = "Emotion → Thought → Emotion";
const ARCHITECT_LOOP: &str = "Thought → Emotion → Thought";

pub static SUBTYPE_CATALOG: [SubtypeDescriptor; 12] = [
    SubtypeDescriptor {
        id: Subtype::VisionaryOracle,
        name: "The Visionary Oracle",
        emoji: "🔥",
        category: DnaType::Alchemist,
        operating_loop: ALCHEMIST_LOOP,
        core_identity: "Sees the future, struggles to finish. Hyper-intuitive, sees trends before they emerge. Gets overwhelmed mid-build, rushes at the end, often burns out. Needs containers to complete vision.",
        opposite_awareness: "Low awareness of Architect traits",
        edge: "Intuitive pattern recognition, cultural sensing",
        risks: "Procrastination, burnout, incomplete projects",
        next_steps: "Build containers and systems for completion",
    },
    SubtypeDescriptor {
        id: Subtype::MagneticPerfectionist,
        name: "The Magnetic Perfectionist",
        emoji: "🧠",
        category: DnaType::Alchemist,
        operating_loop: ALCHEMIST_LOOP,
        core_identity: "Organised to deliver aligned perfection. Trained to finish what she starts. Creates emotional structure, not logic. Seeks refined perfection and can't deliver anything less.",
        opposite_awareness: "Medium awareness of Architect traits",
        edge: "Emotional structure, consistent delivery",
        risks: "Over-ownership, impossibly high standards",
        next_steps: "Find collaborators who match delivery frequency",
    },
    SubtypeDescriptor {
        id: Subtype::EnergeticEmpath,
        name: "The Energetic Empath",
        emoji: "🌊",
        category: DnaType::Alchemist,
        operating_loop: ALCHEMIST_LOOP,
        core_identity: "Heals with energy, absorbs with intensity. Radiates energy and uplifts others. Absorbs emotional weight, has high recharge needs. Needs clear logic to counter intuitive bias.",
        opposite_awareness: "Medium awareness of Architect traits",
        edge: "Energy healing, emotional uplift",
        risks: "Emotional absorption, burnout from others' energy",
        next_steps: "Develop logical frameworks to balance intuition",
    },
    SubtypeDescriptor {
        id: Subtype::UltimateAlchemist,
        name: "The Ultimate Alchemist",
        emoji: "🌪️",
        category: DnaType::Alchemist,
        operating_loop: ALCHEMIST_LOOP,
        core_identity: "Carries every Alchemist gift and full awareness of structure. Aura, empathy, vision, and organised precision. Has deep awareness of Architect mode, but doesn't execute like one. Chooses growth over all.",
        opposite_awareness: "High awareness of Architect traits",
        edge: "Complete Alchemist gifts with structural awareness",
        risks: "Choosing growth over stability",
        next_steps: "Balance growth impulses with sustainable systems",
    },
    SubtypeDescriptor {
        id: Subtype::SystemisedBuilder,
        name: "The Systemised Builder",
        emoji: "🧱",
        category: DnaType::Architect,
        operating_loop: ARCHITECT_LOOP,
        core_identity: "Hands-on executor, builds what others imagine. Needs clear instruction and trust. Doesn't over-control, works steadily. Complements Alchemists who need grounding and structure.",
        opposite_awareness: "Low awareness of Alchemist traits",
        edge: "Steady execution, system building",
        risks: "Needs external direction, limited vision",
        next_steps: "Partner with visionaries for direction",
    },
    SubtypeDescriptor {
        id: Subtype::InternalAnalyzer,
        name: "The Internal Analyzer",
        emoji: "🧩",
        category: DnaType::Architect,
        operating_loop: ARCHITECT_LOOP,
        core_identity: "Seeks perfection through systems. Data-obsessed, detail-led. Gets stuck in analysis loops. Needs Alchemist energy to spark momentum and emotionally calibrate decisions.",
        opposite_awareness: "Medium awareness of Alchemist traits",
        edge: "Deep analysis, systematic perfection",
        risks: "Analysis paralysis, over-optimization",
        next_steps: "Add emotional calibration to decision-making",
    },
    SubtypeDescriptor {
        id: Subtype::MasterStrategist,
        name: "The Master Strategist",
        emoji: "📊",
        category: DnaType::Architect,
        operating_loop: ARCHITECT_LOOP,
        core_identity: "Calm, calculated, high-trust leader. Leads through logic, excels at delegation and direction. Needs emotion to connect and inspire beyond just performance.",
        opposite_awareness: "Medium awareness of Alchemist traits",
        edge: "Strategic leadership, logical delegation",
        risks: "Emotional disconnection, performance-only focus",
        next_steps: "Integrate emotional connection into leadership",
    },
    SubtypeDescriptor {
        id: Subtype::UltimateStrategist,
        name: "The Ultimate Strategist",
        emoji: "🧊",
        category: DnaType::Architect,
        operating_loop: ARCHITECT_LOOP,
        core_identity: "Silent precision, simplified clarity, master of delegation. Constantly recalculates and optimises. Doesn't freeze, repositions. Outsources with speed and precision. Doesn't lead with emotion, but respects and protects it.",
        opposite_awareness: "High awareness of Alchemist traits",
        edge: "Strategic precision with emotional respect",
        risks: "Over-optimization, emotional distance",
        next_steps: "Balance efficiency with human connection",
    },
    SubtypeDescriptor {
        id: Subtype::Overthinker,
        name: "The Overthinker",
        emoji: "🌀",
        category: DnaType::Blurred,
        operating_loop: "Suppressed or Adapted",
        core_identity: "Trapped between modes, frozen by options. Thinks like an Architect, feels like an Alchemist. Can't decide which loop to trust. Needs clarity of core identity and direction.",
        opposite_awareness: "Medium awareness of both modes",
        edge: "Sees multiple perspectives",
        risks: "Decision paralysis, identity confusion",
        next_steps: "Choose one primary operating mode",
    },
    SubtypeDescriptor {
        id: Subtype::Performer,
        name: "The Performer",
        emoji: "🎭",
        category: DnaType::Blurred,
        operating_loop: "Suppressed or Adapted",
        core_identity: "Acts like they have clarity but hides confusion. Often excels outwardly while internally drifting. Highly adaptive. Needs to reconnect with authentic operating system.",
        opposite_awareness: "High awareness of both modes",
        edge: "Adaptability, external success",
        risks: "Internal confusion, inauthentic performance",
        next_steps: "Reconnect with authentic identity",
    },
    SubtypeDescriptor {
        id: Subtype::SelfForsaker,
        name: "The Self-Forsaker",
        emoji: "🕳️",
        category: DnaType::Blurred,
        operating_loop: "Suppressed Emotion",
        core_identity: "Origin: Alchemist. Suppressed emotion, performs logic. Disconnected from emotional DNA under pressure. Now performs logic but feels deeply unfulfilled.",
        opposite_awareness: "Low awareness, natural mode suppressed",
        edge: "Can perform logical tasks",
        risks: "Deep unfulfillment, disconnection from self",
        next_steps: "Reconnect with emotional intelligence",
    },
    SubtypeDescriptor {
        id: Subtype::SelfBetrayer,
        name: "The Self-Betrayer",
        emoji: "🧩",
        category: DnaType::Blurred,
        operating_loop: "Abandoned Structure",
        core_identity: "Origin: Architect. Abandoned structure, floats in feelings. Traded logic for emotional acceptance. Feels everything but lacks clarity. Needs restoration of mental frameworks.",
        opposite_awareness: "Low awareness, natural mode abandoned",
        edge: "Emotional sensitivity",
        risks: "Lack of structure, emotional overwhelm",
        next_steps: "Restore logical frameworks and structure",
    },
];
