use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::assessment::dimensions::AssessmentKind;
use crate::assessment::scores::AssessmentScore;
use crate::matching::catalog::{validate_catalog, CareerProfile};
use crate::models::assessment::{
    AptitudeResultRow, AssessmentRecord, OceanResultRow, RiasecResultRow,
};
use crate::models::career::CareerRow;
use crate::models::user::User;
use crate::models::waitlist::{NewWaitlistEntry, WaitlistEntry};
use crate::storage::AssessmentStore;

/// PostgreSQL-backed store. Each result table has a unique `user_id`, so a
/// retake is an `ON CONFLICT ... DO UPDATE`, never a second row.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentStore for PgStore {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        Ok(sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, created_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Option<User>> {
        Ok(sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, first_name, last_name, email)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, first_name, last_name, email, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn get_assessment_record(
        &self,
        user_id: Uuid,
        kind: AssessmentKind,
    ) -> Result<Option<AssessmentRecord>> {
        let record = match kind {
            AssessmentKind::Riasec => sqlx::query_as::<_, RiasecResultRow>(
                "SELECT * FROM riasec_results WHERE user_id = $1",
            )
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .map(AssessmentRecord::from),
            AssessmentKind::Aptitude => sqlx::query_as::<_, AptitudeResultRow>(
                "SELECT * FROM aptitude_results WHERE user_id = $1",
            )
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .map(AssessmentRecord::from),
            AssessmentKind::Ocean => sqlx::query_as::<_, OceanResultRow>(
                "SELECT * FROM ocean_results WHERE user_id = $1",
            )
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .map(AssessmentRecord::from),
        };
        Ok(record)
    }

    async fn save_assessment_score(
        &self,
        user_id: Uuid,
        score: AssessmentScore,
    ) -> Result<AssessmentRecord> {
        let record = match score {
            AssessmentScore::Riasec(s) => sqlx::query_as::<_, RiasecResultRow>(
                r#"
                INSERT INTO riasec_results
                    (user_id, realistic, investigative, artistic, social, enterprising, conventional, completed_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
                ON CONFLICT (user_id) DO UPDATE SET
                    realistic = EXCLUDED.realistic,
                    investigative = EXCLUDED.investigative,
                    artistic = EXCLUDED.artistic,
                    social = EXCLUDED.social,
                    enterprising = EXCLUDED.enterprising,
                    conventional = EXCLUDED.conventional,
                    completed_at = EXCLUDED.completed_at
                RETURNING *
                "#,
            )
            .bind(user_id)
            .bind(s.realistic)
            .bind(s.investigative)
            .bind(s.artistic)
            .bind(s.social)
            .bind(s.enterprising)
            .bind(s.conventional)
            .fetch_one(&self.pool)
            .await?
            .into(),
            AssessmentScore::Aptitude(s) => sqlx::query_as::<_, AptitudeResultRow>(
                r#"
                INSERT INTO aptitude_results
                    (user_id, numerical, verbal, spatial, logical, mechanical, completed_at)
                VALUES ($1, $2, $3, $4, $5, $6, NOW())
                ON CONFLICT (user_id) DO UPDATE SET
                    numerical = EXCLUDED.numerical,
                    verbal = EXCLUDED.verbal,
                    spatial = EXCLUDED.spatial,
                    logical = EXCLUDED.logical,
                    mechanical = EXCLUDED.mechanical,
                    completed_at = EXCLUDED.completed_at
                RETURNING *
                "#,
            )
            .bind(user_id)
            .bind(s.numerical)
            .bind(s.verbal)
            .bind(s.spatial)
            .bind(s.logical)
            .bind(s.mechanical)
            .fetch_one(&self.pool)
            .await?
            .into(),
            AssessmentScore::Ocean(s) => sqlx::query_as::<_, OceanResultRow>(
                r#"
                INSERT INTO ocean_results
                    (user_id, openness, conscientiousness, extraversion, agreeableness, neuroticism, completed_at)
                VALUES ($1, $2, $3, $4, $5, $6, NOW())
                ON CONFLICT (user_id) DO UPDATE SET
                    openness = EXCLUDED.openness,
                    conscientiousness = EXCLUDED.conscientiousness,
                    extraversion = EXCLUDED.extraversion,
                    agreeableness = EXCLUDED.agreeableness,
                    neuroticism = EXCLUDED.neuroticism,
                    completed_at = EXCLUDED.completed_at
                RETURNING *
                "#,
            )
            .bind(user_id)
            .bind(s.openness)
            .bind(s.conscientiousness)
            .bind(s.extraversion)
            .bind(s.agreeableness)
            .bind(s.neuroticism)
            .fetch_one(&self.pool)
            .await?
            .into(),
        };

        debug!("Upserted {} row for user {user_id}", score.kind());
        Ok(record)
    }

    async fn get_career_catalog(&self) -> Result<Vec<CareerProfile>> {
        let rows = sqlx::query_as::<_, CareerRow>(
            r#"
            SELECT id, title, description, riasec_profile, aptitude_requirements, ocean_fit, trait_labels
            FROM careers
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to load career catalog")?;

        let careers: Vec<CareerProfile> = rows.into_iter().map(CareerProfile::from).collect();
        validate_catalog(&careers)?;
        Ok(careers)
    }

    async fn add_to_waitlist(&self, entry: NewWaitlistEntry) -> Result<Option<WaitlistEntry>> {
        Ok(sqlx::query_as::<_, WaitlistEntry>(
            r#"
            INSERT INTO waitlist (first_name, last_name, email, occupation, interests, newsletter)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (email) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(entry.first_name)
        .bind(entry.last_name)
        .bind(entry.email)
        .bind(entry.occupation)
        .bind(entry.interests)
        .bind(entry.newsletter)
        .fetch_optional(&self.pool)
        .await?)
    }
}
