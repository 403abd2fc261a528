//! Dimension schema shared by the three assessments.
//!
//! Every score record, career target and normalized vector is keyed by
//! [`Dimension`], so a vector can never carry a key its assessment does not own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three assessment types (dimension groups).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    Riasec,
    Aptitude,
    Ocean,
}

impl AssessmentKind {
    pub const ALL: [AssessmentKind; 3] = [
        AssessmentKind::Riasec,
        AssessmentKind::Aptitude,
        AssessmentKind::Ocean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentKind::Riasec => "riasec",
            AssessmentKind::Aptitude => "aptitude",
            AssessmentKind::Ocean => "ocean",
        }
    }

    /// Dimensions of this group in canonical order.
    pub fn dimensions(&self) -> &'static [Dimension] {
        match self {
            AssessmentKind::Riasec => &RIASEC_DIMENSIONS,
            AssessmentKind::Aptitude => &APTITUDE_DIMENSIONS,
            AssessmentKind::Ocean => &OCEAN_DIMENSIONS,
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "riasec" => Ok(AssessmentKind::Riasec),
            "aptitude" => Ok(AssessmentKind::Aptitude),
            "ocean" => Ok(AssessmentKind::Ocean),
            other => Err(format!("unknown assessment type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    // RIASEC
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
    // Aptitude
    Numerical,
    Verbal,
    Spatial,
    Logical,
    Mechanical,
    // OCEAN
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

const RIASEC_DIMENSIONS: [Dimension; 6] = [
    Dimension::Realistic,
    Dimension::Investigative,
    Dimension::Artistic,
    Dimension::Social,
    Dimension::Enterprising,
    Dimension::Conventional,
];

const APTITUDE_DIMENSIONS: [Dimension; 5] = [
    Dimension::Numerical,
    Dimension::Verbal,
    Dimension::Spatial,
    Dimension::Logical,
    Dimension::Mechanical,
];

const OCEAN_DIMENSIONS: [Dimension; 5] = [
    Dimension::Openness,
    Dimension::Conscientiousness,
    Dimension::Extraversion,
    Dimension::Agreeableness,
    Dimension::Neuroticism,
];

impl Dimension {
    pub fn kind(&self) -> AssessmentKind {
        match self {
            Dimension::Realistic
            | Dimension::Investigative
            | Dimension::Artistic
            | Dimension::Social
            | Dimension::Enterprising
            | Dimension::Conventional => AssessmentKind::Riasec,
            Dimension::Numerical
            | Dimension::Verbal
            | Dimension::Spatial
            | Dimension::Logical
            | Dimension::Mechanical => AssessmentKind::Aptitude,
            Dimension::Openness
            | Dimension::Conscientiousness
            | Dimension::Extraversion
            | Dimension::Agreeableness
            | Dimension::Neuroticism => AssessmentKind::Ocean,
        }
    }

    /// The snake_case key used in payloads and jsonb columns.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Realistic => "realistic",
            Dimension::Investigative => "investigative",
            Dimension::Artistic => "artistic",
            Dimension::Social => "social",
            Dimension::Enterprising => "enterprising",
            Dimension::Conventional => "conventional",
            Dimension::Numerical => "numerical",
            Dimension::Verbal => "verbal",
            Dimension::Spatial => "spatial",
            Dimension::Logical => "logical",
            Dimension::Mechanical => "mechanical",
            Dimension::Openness => "openness",
            Dimension::Conscientiousness => "conscientiousness",
            Dimension::Extraversion => "extraversion",
            Dimension::Agreeableness => "agreeableness",
            Dimension::Neuroticism => "neuroticism",
        }
    }

    /// Default trait tag shown on a match: the dimension's own name.
    pub fn trait_label(&self) -> &'static str {
        match self {
            Dimension::Realistic => "Realistic",
            Dimension::Investigative => "Investigative",
            Dimension::Artistic => "Artistic",
            Dimension::Social => "Social",
            Dimension::Enterprising => "Enterprising",
            Dimension::Conventional => "Conventional",
            Dimension::Numerical => "Numerical",
            Dimension::Verbal => "Verbal",
            Dimension::Spatial => "Spatial",
            Dimension::Logical => "Logical",
            Dimension::Mechanical => "Mechanical",
            Dimension::Openness => "Openness",
            Dimension::Conscientiousness => "Conscientiousness",
            Dimension::Extraversion => "Extraversion",
            Dimension::Agreeableness => "Agreeableness",
            Dimension::Neuroticism => "Neuroticism",
        }
    }

    /// Tag for the low end of a "lower is better" dimension. Only used when
    /// the career itself asks for a low score; the score is never flipped.
    pub fn low_pole_label(&self) -> Option<&'static str> {
        match self {
            Dimension::Neuroticism => Some("Emotional Stability"),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_dimension_belongs_to_its_group() {
        for kind in AssessmentKind::ALL {
            for dim in kind.dimensions() {
                assert_eq!(dim.kind(), kind, "{dim} listed under {kind}");
            }
        }
    }

    #[test]
    fn test_group_sizes() {
        assert_eq!(AssessmentKind::Riasec.dimensions().len(), 6);
        assert_eq!(AssessmentKind::Aptitude.dimensions().len(), 5);
        assert_eq!(AssessmentKind::Ocean.dimensions().len(), 5);
    }

    #[test]
    fn test_only_neuroticism_has_a_low_pole() {
        let inverted: Vec<Dimension> = AssessmentKind::ALL
            .iter()
            .flat_map(|k| k.dimensions().iter().copied())
            .filter(|d| d.low_pole_label().is_some())
            .collect();
        assert_eq!(inverted, vec![Dimension::Neuroticism]);
        assert_eq!(Dimension::Neuroticism.trait_label(), "Neuroticism");
        assert_eq!(
            Dimension::Neuroticism.low_pole_label(),
            Some("Emotional Stability")
        );
    }

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!("OCEAN".parse::<AssessmentKind>(), Ok(AssessmentKind::Ocean));
        assert!("holland".parse::<AssessmentKind>().is_err());
    }

    #[test]
    fn test_serde_key_matches_key() {
        let json = serde_json::to_string(&Dimension::Conscientiousness).unwrap();
        assert_eq!(json, "\"conscientiousness\"");
    }
}
