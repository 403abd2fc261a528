//! Career catalog: the read-only set of career profiles matched against.

use std::collections::{BTreeMap, HashSet};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::assessment::dimensions::{AssessmentKind, Dimension};
use crate::assessment::scores::{
    AptitudeScores, AssessmentScore, OceanScores, RiasecScores, MAX_SCORE,
};

/// Raw target below which an inverted dimension is tagged by its low pole.
pub const LOW_POLE_THRESHOLD: f64 = MAX_SCORE / 2.0;

/// A career with one full target vector per assessment type (raw [0, 100]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub riasec: RiasecScores,
    pub aptitude: AptitudeScores,
    pub ocean: OceanScores,
    /// Career-specific wording for trait tags; dimensions not listed use
    /// [`Dimension::trait_label`].
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub trait_labels: BTreeMap<Dimension, String>,
}

impl CareerProfile {
    /// The target vector for one dimension group.
    pub fn target(&self, kind: AssessmentKind) -> AssessmentScore {
        match kind {
            AssessmentKind::Riasec => AssessmentScore::Riasec(self.riasec),
            AssessmentKind::Aptitude => AssessmentScore::Aptitude(self.aptitude),
            AssessmentKind::Ocean => AssessmentScore::Ocean(self.ocean),
        }
    }

    /// Raw target score for a single dimension.
    pub fn target_score(&self, dimension: Dimension) -> f64 {
        self.target(dimension.kind())
            .entries()
            .into_iter()
            .find(|(d, _)| *d == dimension)
            .map_or(0.0, |(_, value)| value)
    }

    /// Tag for a dimension that drove a match with this career.
    ///
    /// The career's own wording wins. Otherwise a "lower is better" dimension
    /// reads as its low pole ("Emotional Stability") only when the career asks
    /// for a low score, so a high-neuroticism match is tagged "Neuroticism".
    pub fn trait_label(&self, dimension: Dimension) -> &str {
        if let Some(label) = self.trait_labels.get(&dimension) {
            return label;
        }
        match dimension.low_pole_label() {
            Some(label) if self.target_score(dimension) < LOW_POLE_THRESHOLD => label,
            _ => dimension.trait_label(),
        }
    }
}

/// Rejects catalogs with duplicate ids or out-of-range targets.
pub fn validate_catalog(careers: &[CareerProfile]) -> Result<()> {
    let mut seen = HashSet::with_capacity(careers.len());
    for career in careers {
        if !seen.insert(career.id) {
            bail!("duplicate career id {} in catalog", career.id);
        }
        for kind in AssessmentKind::ALL {
            if let Err(e) = career.target(kind).validate() {
                bail!("career {} ({}) has an invalid target: {e}", career.id, career.title);
            }
        }
    }
    Ok(())
}

/// Seed catalog used by the demo store.
pub fn starter_catalog() -> Vec<CareerProfile> {
    vec![
        career(
            1,
            "Data Scientist",
            "Analyze complex data sets to identify patterns and insights using statistical methods and machine learning.",
            [35.0, 90.0, 30.0, 35.0, 40.0, 60.0],
            [90.0, 65.0, 55.0, 90.0, 35.0],
            [80.0, 75.0, 40.0, 55.0, 35.0],
        ),
        career(
            2,
            "Research Scientist",
            "Conduct research to expand knowledge in a specific field, develop theories, and publish findings.",
            [40.0, 95.0, 45.0, 35.0, 25.0, 45.0],
            [80.0, 75.0, 60.0, 90.0, 40.0],
            [90.0, 75.0, 35.0, 55.0, 35.0],
        ),
        career(
            3,
            "Technical Writer",
            "Create clear documentation for technical products, processes, and services.",
            [25.0, 60.0, 60.0, 45.0, 30.0, 80.0],
            [45.0, 92.0, 40.0, 70.0, 35.0],
            [65.0, 85.0, 40.0, 65.0, 40.0],
        ),
        career(
            4,
            "UX Researcher",
            "Study user behavior and needs to inform product development and design decisions.",
            [20.0, 80.0, 65.0, 85.0, 45.0, 40.0],
            [55.0, 80.0, 60.0, 70.0, 25.0],
            [85.0, 70.0, 60.0, 80.0, 35.0],
        ),
        career(
            5,
            "Mechanical Engineer",
            "Design, build, and test mechanical devices, engines, and thermal systems.",
            [90.0, 80.0, 35.0, 30.0, 40.0, 60.0],
            [85.0, 60.0, 90.0, 85.0, 95.0],
            [65.0, 80.0, 40.0, 50.0, 35.0],
        ),
        career(
            6,
            "Graphic Designer",
            "Create visual concepts that communicate ideas through layout, typography, and imagery.",
            [35.0, 40.0, 95.0, 45.0, 45.0, 35.0],
            [35.0, 65.0, 90.0, 55.0, 40.0],
            [90.0, 60.0, 50.0, 60.0, 45.0],
        ),
        career(
            7,
            "School Counselor",
            "Support students' academic, career, and social-emotional development.",
            [15.0, 55.0, 45.0, 95.0, 50.0, 50.0],
            [40.0, 85.0, 35.0, 60.0, 20.0],
            [70.0, 75.0, 65.0, 90.0, 25.0],
        ),
        career(
            8,
            "Marketing Manager",
            "Plan and run campaigns that position products and grow an audience.",
            [20.0, 50.0, 65.0, 70.0, 90.0, 50.0],
            [60.0, 85.0, 50.0, 65.0, 20.0],
            [75.0, 70.0, 85.0, 65.0, 35.0],
        ),
        career(
            9,
            "Accountant",
            "Prepare and examine financial records, ensuring accuracy and compliance.",
            [30.0, 55.0, 15.0, 35.0, 45.0, 95.0],
            [92.0, 60.0, 35.0, 80.0, 25.0],
            [40.0, 92.0, 40.0, 60.0, 35.0],
        ),
        career(
            10,
            "Electrician",
            "Install, maintain, and repair electrical wiring, equipment, and fixtures.",
            [95.0, 55.0, 20.0, 35.0, 35.0, 60.0],
            [65.0, 45.0, 80.0, 70.0, 92.0],
            [45.0, 80.0, 45.0, 55.0, 35.0],
        ),
    ]
}

fn career(
    id: i32,
    title: &str,
    description: &str,
    riasec: [f64; 6],
    aptitude: [f64; 5],
    ocean: [f64; 5],
) -> CareerProfile {
    let [realistic, investigative, artistic, social, enterprising, conventional] = riasec;
    let [numerical, verbal, spatial, logical, mechanical] = aptitude;
    let [openness, conscientiousness, extraversion, agreeableness, neuroticism] = ocean;
    CareerProfile {
        id,
        title: title.to_string(),
        description: description.to_string(),
        riasec: RiasecScores {
            realistic,
            investigative,
            artistic,
            social,
            enterprising,
            conventional,
        },
        aptitude: AptitudeScores {
            numerical,
            verbal,
            spatial,
            logical,
            mechanical,
        },
        ocean: OceanScores {
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        },
        trait_labels: BTreeMap::new(),
    }
}
