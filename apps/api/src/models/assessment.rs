use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::assessment::scores::{AptitudeScores, AssessmentScore, OceanScores, RiasecScores};

/// The single live result for one (user, assessment type) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentRecord {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub score: AssessmentScore,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct RiasecResultRow {
    pub user_id: Uuid,
    pub realistic: f64,
    pub investigative: f64,
    pub artistic: f64,
    pub social: f64,
    pub enterprising: f64,
    pub conventional: f64,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct AptitudeResultRow {
    pub user_id: Uuid,
    pub numerical: f64,
    pub verbal: f64,
    pub spatial: f64,
    pub logical: f64,
    pub mechanical: f64,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct OceanResultRow {
    pub user_id: Uuid,
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
    pub completed_at: DateTime<Utc>,
}

impl From<RiasecResultRow> for AssessmentRecord {
    fn from(row: RiasecResultRow) -> Self {
        AssessmentRecord {
            user_id: row.user_id,
            score: AssessmentScore::Riasec(RiasecScores {
                realistic: row.realistic,
                investigative: row.investigative,
                artistic: row.artistic,
                social: row.social,
                enterprising: row.enterprising,
                conventional: row.conventional,
            }),
            completed_at: row.completed_at,
        }
    }
}

impl From<AptitudeResultRow> for AssessmentRecord {
    fn from(row: AptitudeResultRow) -> Self {
        AssessmentRecord {
            user_id: row.user_id,
            score: AssessmentScore::Aptitude(AptitudeScores {
                numerical: row.numerical,
                verbal: row.verbal,
                spatial: row.spatial,
                logical: row.logical,
                mechanical: row.mechanical,
            }),
            completed_at: row.completed_at,
        }
    }
}

impl From<OceanResultRow> for AssessmentRecord {
    fn from(row: OceanResultRow) -> Self {
        AssessmentRecord {
            user_id: row.user_id,
            score: AssessmentScore::Ocean(OceanScores {
                openness: row.openness,
                conscientiousness: row.conscientiousness,
                extraversion: row.extraversion,
                agreeableness: row.agreeableness,
                neuroticism: row.neuroticism,
            }),
            completed_at: row.completed_at,
        }
    }
}
