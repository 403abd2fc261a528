//! Typed score records for each assessment, plus range validation.

use serde::{Deserialize, Serialize};

use crate::assessment::dimensions::{AssessmentKind, Dimension};
use crate::errors::AppError;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiasecScores {
    pub realistic: f64,
    pub investigative: f64,
    pub artistic: f64,
    pub social: f64,
    pub enterprising: f64,
    pub conventional: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AptitudeScores {
    pub numerical: f64,
    pub verbal: f64,
    pub spatial: f64,
    pub logical: f64,
    pub mechanical: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OceanScores {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl RiasecScores {
    pub fn entries(&self) -> [(Dimension, f64); 6] {
        [
            (Dimension::Realistic, self.realistic),
            (Dimension::Investigative, self.investigative),
            (Dimension::Artistic, self.artistic),
            (Dimension::Social, self.social),
            (Dimension::Enterprising, self.enterprising),
            (Dimension::Conventional, self.conventional),
        ]
    }
}

impl AptitudeScores {
    pub fn entries(&self) -> [(Dimension, f64); 5] {
        [
            (Dimension::Numerical, self.numerical),
            (Dimension::Verbal, self.verbal),
            (Dimension::Spatial, self.spatial),
            (Dimension::Logical, self.logical),
            (Dimension::Mechanical, self.mechanical),
        ]
    }
}

impl OceanScores {
    pub fn entries(&self) -> [(Dimension, f64); 5] {
        [
            (Dimension::Openness, self.openness),
            (Dimension::Conscientiousness, self.conscientiousness),
            (Dimension::Extraversion, self.extraversion),
            (Dimension::Agreeableness, self.agreeableness),
            (Dimension::Neuroticism, self.neuroticism),
        ]
    }
}

/// One live assessment record, tagged by its assessment type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "scores", rename_all = "snake_case")]
pub enum AssessmentScore {
    Riasec(RiasecScores),
    Aptitude(AptitudeScores),
    Ocean(OceanScores),
}

impl AssessmentScore {
    pub fn kind(&self) -> AssessmentKind {
        match self {
            AssessmentScore::Riasec(_) => AssessmentKind::Riasec,
            AssessmentScore::Aptitude(_) => AssessmentKind::Aptitude,
            AssessmentScore::Ocean(_) => AssessmentKind::Ocean,
        }
    }

    /// Raw `(dimension, score)` pairs in canonical order.
    pub fn entries(&self) -> Vec<(Dimension, f64)> {
        match self {
            AssessmentScore::Riasec(s) => s.entries().to_vec(),
            AssessmentScore::Aptitude(s) => s.entries().to_vec(),
            AssessmentScore::Ocean(s) => s.entries().to_vec(),
        }
    }

    /// Parses an untagged score payload for a known assessment type.
    /// Missing or unknown dimension keys are rejected.
    pub fn from_json(kind: AssessmentKind, value: serde_json::Value) -> Result<Self, AppError> {
        let parsed = match kind {
            AssessmentKind::Riasec => serde_json::from_value(value).map(AssessmentScore::Riasec),
            AssessmentKind::Aptitude => {
                serde_json::from_value(value).map(AssessmentScore::Aptitude)
            }
            AssessmentKind::Ocean => serde_json::from_value(value).map(AssessmentScore::Ocean),
        };
        parsed.map_err(|e| AppError::Validation(format!("invalid {kind} scores: {e}")))
    }

    /// Every score must be finite and inside [0, 100].
    pub fn validate(&self) -> Result<(), AppError> {
        for (dim, value) in self.entries() {
            if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(AppError::Validation(format!(
                    "{} score for '{dim}' must be within [0, 100], got {value}",
                    self.kind()
                )));
            }
        }
        Ok(())
    }
}
