//! Match Aggregator: folds per-group similarities into one percentage per
//! career, then ranks and trims.
//!
//! Algorithm:
//! 1. For each group the user has taken (and whose weight is > 0), compute
//!    the group similarity against the career's target.
//! 2. overall = Σ(weight × similarity) / Σ(weight) over those groups only
//! 3. percentage = round(overall × 100), clamped to [0, 100]
//! 4. Sort by percentage descending, then catalog id ascending; keep top-N

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::assessment::dimensions::{AssessmentKind, Dimension};
use crate::matching::catalog::CareerProfile;
use crate::matching::normalizer::{normalize, NormalizedProfile};
use crate::matching::similarity::{group_similarity, GroupSimilarity};

pub const DEFAULT_TOP_N: usize = 5;

/// Relative weight of each dimension group. Only groups the user has taken
/// take part, so the effective weights are renormalized per user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub riasec: f64,
    pub aptitude: f64,
    pub ocean: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            riasec: 1.0,
            aptitude: 1.0,
            ocean: 1.0,
        }
    }
}

impl MatchWeights {
    pub fn weight(&self, kind: AssessmentKind) -> f64 {
        match kind {
            AssessmentKind::Riasec => self.riasec,
            AssessmentKind::Aptitude => self.aptitude,
            AssessmentKind::Ocean => self.ocean,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for kind in AssessmentKind::ALL {
            let w = self.weight(kind);
            if !w.is_finite() || w < 0.0 {
                bail!("{kind} weight must be a finite number >= 0, got {w}");
            }
        }
        if AssessmentKind::ALL.iter().all(|k| self.weight(*k) == 0.0) {
            bail!("at least one match weight must be greater than zero");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    pub top_n: usize,
    pub weights: MatchWeights,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            weights: MatchWeights::default(),
        }
    }
}

/// A group that took part in a career's score, with its share of the total
/// weight (shares of one career sum to 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedGroup {
    pub similarity: GroupSimilarity,
    pub share: f64,
}

impl WeightedGroup {
    /// How much each dimension added to the overall score, in [0, 1].
    pub fn contributions(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        let n = self.similarity.per_dimension.len() as f64;
        self.similarity
            .per_dimension
            .iter()
            .map(move |(dim, sim)| (*dim, self.share * sim / n))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCareer<'a> {
    pub career: &'a CareerProfile,
    /// Weighted similarity in [0, 1] before rounding.
    pub overall: f64,
    pub percentage: u8,
    pub groups: Vec<WeightedGroup>,
}

/// Scores one career. `None` when no weighted group is shared with the user
/// (no assessments taken, or only zero-weight ones).
pub fn score_career<'a>(
    profile: &NormalizedProfile,
    career: &'a CareerProfile,
    weights: &MatchWeights,
) -> Option<ScoredCareer<'a>> {
    let mut sims: Vec<(GroupSimilarity, f64)> = Vec::with_capacity(AssessmentKind::ALL.len());

    for kind in AssessmentKind::ALL {
        let weight = weights.weight(kind);
        if weight <= 0.0 {
            continue;
        }
        let Some(user) = profile.group(kind) else {
            continue;
        };
        let target = normalize(&career.target(kind));
        if let Some(sim) = group_similarity(user, &target) {
            sims.push((sim, weight));
        }
    }

    let total_weight: f64 = sims.iter().map(|(_, w)| w).sum();
    if sims.is_empty() || total_weight <= 0.0 {
        return None;
    }

    let weighted: f64 = sims.iter().map(|(s, w)| s.score * w).sum();
    let overall = (weighted / total_weight).clamp(0.0, 1.0);
    let groups = sims
        .into_iter()
        .map(|(similarity, w)| WeightedGroup {
            similarity,
            share: w / total_weight,
        })
        .collect();

    Some(ScoredCareer {
        career,
        overall,
        percentage: to_percentage(overall),
        groups,
    })
}

pub fn to_percentage(overall: f64) -> u8 {
    (overall * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Scores every career in the catalog. Careers that cannot be scored are
/// skipped; nothing is invented.
pub fn score_catalog<'a>(
    profile: &NormalizedProfile,
    catalog: &'a [CareerProfile],
    weights: &MatchWeights,
) -> Vec<ScoredCareer<'a>> {
    catalog
        .iter()
        .filter_map(|career| score_career(profile, career, weights))
        .collect()
}

/// Highest percentage first; equal percentages by catalog id ascending.
/// Returns at most `top_n` entries.
pub fn rank(mut scored: Vec<ScoredCareer<'_>>, top_n: usize) -> Vec<ScoredCareer<'_>> {
    scored.sort_by(|a, b| {
        b.percentage
            .cmp(&a.percentage)
            .then_with(|| a.career.id.cmp(&b.career.id))
    });
    scored.truncate(top_n);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::scores::{AptitudeScores, AssessmentScore, RiasecScores};
    use crate::matching::catalog::starter_catalog;
    use crate::matching::normalizer::{normalize_profile, NormalizedVector};
    use uuid::Uuid;

    fn riasec_score(v: [f64; 6]) -> RiasecScores {
        RiasecScores {
            realistic: v[0],
            investigative: v[1],
            artistic: v[2],
            social: v[3],
            enterprising: v[4],
            conventional: v[5],
        }
    }

    fn riasec_only_profile(v: [f64; 6]) -> NormalizedProfile {
        normalize_profile(Uuid::nil(), [AssessmentScore::Riasec(riasec_score(v))]).unwrap()
    }

    fn scored(career: &CareerProfile, percentage: u8) -> ScoredCareer<'_> {
        ScoredCareer {
            career,
            overall: f64::from(percentage) / 100.0,
            percentage,
            groups: vec![],
        }
    }

    #[test]
    fn test_identical_riasec_only_scores_100() {
        let raw = [80.0, 90.0, 20.0, 70.0, 30.0, 10.0];
        let profile = riasec_only_profile(raw);
        let mut career = starter_catalog().remove(0);
        career.riasec = riasec_score(raw);

        let result = score_career(&profile, &career, &MatchWeights::default()).unwrap();
        assert_eq!(result.percentage, 100);
        assert_eq!(result.groups.len(), 1);
        assert_eq!(result.groups[0].share, 1.0);
    }

    #[test]
    fn test_absent_group_is_not_zero() {
        // Perfect RIASEC match; OCEAN absent. If the absent group counted as
        // zero the score would drop to 50.
        let raw = [50.0; 6];
        let mut career = starter_catalog().remove(0);
        career.riasec = riasec_score(raw);
        let weights = MatchWeights::default();

        let absent = score_career(&riasec_only_profile(raw), &career, &weights).unwrap();
        assert_eq!(absent.percentage, 100);

        let mut with_zero_ocean = riasec_only_profile(raw);
        let ocean_target = normalize(&career.target(AssessmentKind::Ocean));
        with_zero_ocean.ocean = Some(NormalizedVector {
            kind: AssessmentKind::Ocean,
            values: ocean_target
                .values
                .iter()
                .map(|(d, t)| (*d, if *t >= 0.5 { 0.0 } else { 1.0 }))
                .collect(),
        });
        let present = score_career(&with_zero_ocean, &career, &weights).unwrap();
        assert!(present.percentage < absent.percentage);
    }

    #[test]
    fn test_no_assessments_scores_nothing() {
        let catalog = starter_catalog();
        let profile = NormalizedProfile::default();
        assert!(score_catalog(&profile, &catalog, &MatchWeights::default()).is_empty());
    }

    #[test]
    fn test_zero_weight_group_is_ignored() {
        let raw = [50.0; 6];
        let career = starter_catalog().remove(0);
        let weights = MatchWeights {
            riasec: 0.0,
            aptitude: 1.0,
            ocean: 1.0,
        };
        assert!(score_career(&riasec_only_profile(raw), &career, &weights).is_none());
    }

    #[test]
    fn test_weights_shift_the_score() {
        let catalog = starter_catalog();
        let career = &catalog[0];
        let mut profile = riasec_only_profile([
            career.riasec.realistic,
            career.riasec.investigative,
            career.riasec.artistic,
            career.riasec.social,
            career.riasec.enterprising,
            career.riasec.conventional,
        ]);
        profile.aptitude = Some(normalize(&AssessmentScore::Aptitude(AptitudeScores {
            numerical: 0.0,
            verbal: 0.0,
            spatial: 0.0,
            logical: 0.0,
            mechanical: 0.0,
        })));

        let equal = score_career(&profile, career, &MatchWeights::default()).unwrap();
        let riasec_heavy = score_career(
            &profile,
            career,
            &MatchWeights {
                riasec: 3.0,
                aptitude: 1.0,
                ocean: 1.0,
            },
        )
        .unwrap();
        assert!(riasec_heavy.overall > equal.overall);
        let shares: f64 = riasec_heavy.groups.iter().map(|g| g.share).sum();
        assert!((shares - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_percentages_are_bounded() {
        let catalog = starter_catalog();
        for raw in [[0.0; 6], [100.0; 6], [37.5, 12.0, 99.0, 0.5, 64.0, 81.0]] {
            let profile = riasec_only_profile(raw);
            for s in score_catalog(&profile, &catalog, &MatchWeights::default()) {
                assert!(s.percentage <= 100);
                assert!((0.0..=1.0).contains(&s.overall));
            }
        }
    }

    #[test]
    fn test_rank_top_two_with_tie_on_catalog_id() {
        let catalog = starter_catalog();
        // ids 1..=5 scoring [70, 85, 60, 90, 85]
        let fixture = [70, 85, 60, 90, 85];
        let all: Vec<ScoredCareer<'_>> = catalog
            .iter()
            .zip(fixture)
            .map(|(c, p)| scored(c, p))
            .collect();

        let top = rank(all.clone(), 2);
        let picked: Vec<(i32, u8)> = top.iter().map(|s| (s.career.id, s.percentage)).collect();
        assert_eq!(picked, vec![(4, 90), (2, 85)]);

        let top3 = rank(all, 3);
        let picked: Vec<(i32, u8)> = top3.iter().map(|s| (s.career.id, s.percentage)).collect();
        assert_eq!(picked, vec![(4, 90), (2, 85), (5, 85)]);
    }

    #[test]
    fn test_rank_returns_all_when_catalog_is_small() {
        let catalog = starter_catalog();
        let all: Vec<ScoredCareer<'_>> = catalog[..3].iter().map(|c| scored(c, 50)).collect();
        let ranked = rank(all, DEFAULT_TOP_N);
        assert_eq!(ranked.len(), 3);
        let ids: Vec<i32> = ranked.iter().map(|s| s.career.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_weights_validation() {
        assert!(MatchWeights::default().validate().is_ok());
        assert!(MatchWeights {
            riasec: -1.0,
            ..MatchWeights::default()
        }
        .validate()
        .is_err());
        assert!(MatchWeights {
            riasec: 0.0,
            aptitude: 0.0,
            ocean: 0.0
        }
        .validate()
        .is_err());
        assert!(MatchWeights {
            ocean: f64::INFINITY,
            ..MatchWeights::default()
        }
        .validate()
        .is_err());
    }
}
