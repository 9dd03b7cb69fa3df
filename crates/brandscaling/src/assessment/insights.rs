use serde::Serialize;

use super::domain::DnaType;

/// Awareness percentage at or above which the participant counts as self-aware.
pub const HIGH_AWARENESS_THRESHOLD: u8 = 70;

/// Guidance attached to a quiz response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DnaInsights {
    pub dna_type: DnaType,
    pub label: &'static str,
    pub description: &'static str,
    pub strengths: Vec<&'static str>,
    pub challenges: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
    pub learning_style: &'static str,
    pub business_approach: &'static str,
}

struct InsightTemplate {
    description: &'static str,
    strengths: &'static [&'static str],
    challenges: &'static [&'static str],
    recommendations: &'static [&'static str],
    learning_style: &'static str,
    business_approach: &'static str,
}

pub fn insights_for(dna_type: DnaType, awareness_percentage: u8) -> DnaInsights {
    let template = template(dna_type);

    let awareness_recommendations: &[&str] = if awareness_percentage >= HIGH_AWARENESS_THRESHOLD {
        &[
            "Leverage your high self-awareness to accelerate growth",
            "Focus on advanced strategies that match your style",
            "Consider mentoring others with similar DNA types",
        ]
    } else {
        &[
            "Prioritize increasing self-awareness through reflection and assessment",
            "Start with foundational learning before advanced strategies",
            "Regular check-ins to track awareness development",
        ]
    };

    DnaInsights {
        dna_type,
        label: dna_type.label(),
        description: template.description,
        strengths: template.strengths.to_vec(),
        challenges: template.challenges.to_vec(),
        recommendations: template
            .recommendations
            .iter()
            .chain(awareness_recommendations)
            .copied()
            .collect(),
        learning_style: template.learning_style,
        business_approach: template.business_approach,
    }
}

fn template(dna_type: DnaType) -> &'static InsightTemplate {
    match dna_type {
        DnaType::Architect => &ARCHITECT,
        DnaType::Alchemist => &ALCHEMIST,
        DnaType::Blurred => &BLURRED,
    }
}

static ARCHITECT: InsightTemplate = InsightTemplate {
    description: "You are naturally systematic, analytical, and process-oriented. You excel at creating structured approaches to business growth.",
    strengths: &[
        "Strategic planning and execution",
        "Process optimization",
        "Data-driven decision making",
        "Systematic problem solving",
        "Building scalable frameworks",
    ],
    challenges: &[
        "May over-analyze instead of taking action",
        "Can struggle with rapid pivots",
        "Might miss emotional/intuitive insights",
        "Risk of analysis paralysis",
    ],
    recommendations: &[
        "Pair your systems with an Alchemist collaborator for creative momentum",
        "Set decision deadlines to avoid over-analysis",
    ],
    learning_style: "Structured learning with clear frameworks, step-by-step guides, and measurable outcomes",
    business_approach: "Build systems first, then scale through optimized processes and data-driven strategies",
};

static ALCHEMIST: InsightTemplate = InsightTemplate {
    description: "You are naturally intuitive, creative, and relationship-focused. You excel at transforming ideas into reality through inspiration and connection.",
    strengths: &[
        "Creative problem solving",
        "Strong relationship building",
        "Intuitive market sensing",
        "Adaptability and flexibility",
        "Inspirational leadership",
    ],
    challenges: &[
        "May lack systematic approaches",
        "Can struggle with consistent processes",
        "Might overlook important data",
        "Risk of emotional decision making",
    ],
    recommendations: &[
        "Build simple containers that carry ideas through to completion",
        "Partner with an Architect to turn vision into repeatable delivery",
    ],
    learning_style: "Story-based learning, experiential content, and community-driven insights",
    business_approach: "Build relationships first, then scale through networks and creative solutions",
};

static BLURRED: InsightTemplate = InsightTemplate {
    description: "You have tendencies toward both Architect and Alchemist approaches, but neither is dominant yet. Clarifying your default mode will unlock your potential.",
    strengths: &[
        "Natural entrepreneurial instincts",
        "Potential for balanced approach",
        "Room for significant growth",
        "Adaptable skill development",
    ],
    challenges: &[
        "Unclear on optimal strategies",
        "May use inconsistent approaches",
        "Potential for conflicting methods",
        "Need for identity clarification",
    ],
    recommendations: &[
        "Choose one primary operating mode and commit to it for a full project cycle",
    ],
    learning_style: "Mixed learning approaches with focus on self-discovery and awareness building",
    business_approach: "Focus on increasing self-awareness first, then develop your dominant style",
};
