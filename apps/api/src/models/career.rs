use std::collections::BTreeMap;

use sqlx::types::Json;
use sqlx::FromRow;

use crate::assessment::dimensions::Dimension;
use crate::assessment::scores::{AptitudeScores, OceanScores, RiasecScores};
use crate::matching::catalog::CareerProfile;

/// Row in the `careers` table. Target profiles live in jsonb columns and
/// decode straight into the typed score records.
#[derive(Debug, Clone, FromRow)]
pub struct CareerRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub riasec_profile: Json<RiasecScores>,
    pub aptitude_requirements: Json<AptitudeScores>,
    pub ocean_fit: Json<OceanScores>,
    pub trait_labels: Option<Json<BTreeMap<Dimension, String>>>,
}

impl From<CareerRow> for CareerProfile {
    fn from(row: CareerRow) -> Self {
        CareerProfile {
            id: row.id,
            title: row.title,
            description: row.description,
            riasec: row.riasec_profile.0,
            aptitude: row.aptitude_requirements.0,
            ocean: row.ocean_fit.0,
            trait_labels: row.trait_labels.map(|labels| labels.0).unwrap_or_default(),
        }
    }
}
