//! Result Assembler: turns ranked careers into the response contract.
//! No scoring happens here.

use serde::{Deserialize, Serialize};

use crate::assessment::dimensions::{AssessmentKind, Dimension};
use crate::matching::aggregator::ScoredCareer;
use crate::matching::normalizer::normalize;

pub const MAX_TRAITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub career_id: i32,
    pub title: String,
    pub description: String,
    pub match_percentage: u8,
    /// Strongest contributing dimensions first, at most three.
    pub traits: Vec<String>,
}

pub fn assemble(ranked: &[ScoredCareer<'_>]) -> Vec<MatchResult> {
    ranked
        .iter()
        .map(|scored| MatchResult {
            career_id: scored.career.id,
            title: scored.career.title.clone(),
            description: scored.career.description.clone(),
            match_percentage: scored.percentage,
            traits: contributing_traits(scored),
        })
        .collect()
}

/// Picks the dimensions that added the most to the career's score.
///
/// Dimensions that added nothing are never tagged. Order: contribution
/// descending, then how strongly the career asks for the dimension (target
/// descending), then canonical dimension order. Tags use the career's own
/// vocabulary and are not repeated.
pub fn contributing_traits(scored: &ScoredCareer<'_>) -> Vec<String> {
    let mut ranked: Vec<(Dimension, f64, f64)> = scored
        .groups
        .iter()
        .flat_map(|group| {
            let target = normalize(&scored.career.target(group.similarity.kind));
            group
                .contributions()
                .filter(|(_, contribution)| *contribution > 0.0)
                .map(move |(dim, contribution)| {
                    (dim, contribution, target.get(dim).unwrap_or(0.0))
                })
                .collect::<Vec<_>>()
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| b.2.total_cmp(&a.2))
            .then_with(|| canonical_index(a.0).cmp(&canonical_index(b.0)))
    });

    let mut traits: Vec<String> = Vec::with_capacity(MAX_TRAITS);
    for (dim, _, _) in ranked {
        if traits.len() == MAX_TRAITS {
            break;
        }
        let label = scored.career.trait_label(dim);
        if !traits.iter().any(|t| t == label) {
            traits.push(label.to_string());
        }
    }
    traits
}

fn canonical_index(dimension: Dimension) -> usize {
    AssessmentKind::ALL
        .iter()
        .flat_map(|k| k.dimensions().iter())
        .position(|d| *d == dimension)
        .unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::scores::{AssessmentScore, OceanScores, RiasecScores};
    use crate::matching::aggregator::{score_career, MatchWeights};
    use crate::matching::catalog::starter_catalog;
    use crate::matching::normalizer::normalize_profile;
    use uuid::Uuid;

    fn user_riasec() -> RiasecScores {
        RiasecScores {
            realistic: 10.0,
            investigative: 90.0,
            artistic: 40.0,
            social: 70.0,
            enterprising: 20.0,
            conventional: 50.0,
        }
    }

    #[test]
    fn test_at_most_three_traits() {
        let catalog = starter_catalog();
        let profile =
            normalize_profile(Uuid::nil(), [AssessmentScore::Riasec(user_riasec())]).unwrap();
        for career in &catalog {
            let scored = score_career(&profile, career, &MatchWeights::default()).unwrap();
            let traits = contributing_traits(&scored);
            assert!(!traits.is_empty());
            assert!(traits.len() <= MAX_TRAITS);
        }
    }

    #[test]
    fn test_closest_dimensions_come_first() {
        let mut career = starter_catalog().remove(0);
        // Exact on investigative and social, far on everything else.
        career.riasec = RiasecScores {
            realistic: 90.0,
            investigative: 90.0,
            artistic: 95.0,
            social: 70.0,
            enterprising: 95.0,
            conventional: 0.0,
        };
        let profile =
            normalize_profile(Uuid::nil(), [AssessmentScore::Riasec(user_riasec())]).unwrap();
        let scored = score_career(&profile, &career, &MatchWeights::default()).unwrap();

        let traits = contributing_traits(&scored);
        assert_eq!(traits[0], "Investigative");
        assert_eq!(traits[1], "Social");
    }

    #[test]
    fn test_equal_contributions_prefer_higher_target() {
        let mut career = starter_catalog().remove(0);
        let scores = RiasecScores {
            realistic: 20.0,
            investigative: 80.0,
            artistic: 20.0,
            social: 60.0,
            enterprising: 20.0,
            conventional: 20.0,
        };
        career.riasec = scores;
        let profile = normalize_profile(Uuid::nil(), [AssessmentScore::Riasec(scores)]).unwrap();
        let scored = score_career(&profile, &career, &MatchWeights::default()).unwrap();

        let traits = contributing_traits(&scored);
        assert_eq!(traits, vec!["Investigative", "Social", "Realistic"]);
    }

    #[test]
    fn test_uses_career_vocabulary_and_inverted_label() {
        let mut career = starter_catalog().remove(0);
        let ocean = OceanScores {
            openness: 0.0,
            conscientiousness: 0.0,
            extraversion: 0.0,
            agreeableness: 0.0,
            neuroticism: 10.0,
        };
        career.ocean = ocean;
        career
            .trait_labels
            .insert(Dimension::Openness, "Curious".to_string());
        let user = OceanScores {
            openness: 0.0,
            conscientiousness: 100.0,
            extraversion: 100.0,
            agreeableness: 100.0,
            neuroticism: 10.0,
        };
        let profile = normalize_profile(Uuid::nil(), [AssessmentScore::Ocean(user)]).unwrap();
        let scored = score_career(&profile, &career, &MatchWeights::default()).unwrap();

        let traits = contributing_traits(&scored);
        assert_eq!(traits, vec!["Emotional Stability", "Curious"]);
    }

    #[test]
    fn test_high_neuroticism_match_is_not_tagged_as_stability() {
        let mut career = starter_catalog().remove(0);
        career.ocean = OceanScores {
            openness: 0.0,
            conscientiousness: 0.0,
            extraversion: 0.0,
            agreeableness: 0.0,
            neuroticism: 95.0,
        };
        let user = OceanScores {
            openness: 100.0,
            conscientiousness: 100.0,
            extraversion: 100.0,
            agreeableness: 100.0,
            neuroticism: 95.0,
        };
        let profile = normalize_profile(Uuid::nil(), [AssessmentScore::Ocean(user)]).unwrap();
        let scored = score_career(&profile, &career, &MatchWeights::default()).unwrap();

        assert_eq!(scored.percentage, 20);
        assert_eq!(contributing_traits(&scored), vec!["Neuroticism"]);
    }

    #[test]
    fn test_assemble_copies_percentage_verbatim() {
        let catalog = starter_catalog();
        let profile =
            normalize_profile(Uuid::nil(), [AssessmentScore::Riasec(user_riasec())]).unwrap();
        let scored = score_career(&profile, &catalog[2], &MatchWeights::default()).unwrap();
        let results = assemble(std::slice::from_ref(&scored));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].career_id, catalog[2].id);
        assert_eq!(results[0].match_percentage, scored.percentage);
        assert_eq!(results[0].title, catalog[2].title);
    }
}
