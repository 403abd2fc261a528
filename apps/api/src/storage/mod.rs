//! Storage boundary for users, assessments, the career catalog and the
//! waitlist.
//!
//! The matching engine only talks to `AssessmentStore`; `AppState` carries an
//! `Arc<dyn AssessmentStore>` chosen at startup (PostgreSQL, or the in-memory
//! demo store when no database is configured).

pub mod memory;
pub mod postgres;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::assessment::dimensions::AssessmentKind;
use crate::assessment::scores::AssessmentScore;
use crate::matching::catalog::CareerProfile;
use crate::models::assessment::AssessmentRecord;
use crate::models::user::User;
use crate::models::waitlist::{NewWaitlistEntry, WaitlistEntry};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait AssessmentStore: Send + Sync {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>>;

    /// Registers a user. `None` when the email is already taken.
    async fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Option<User>>;

    /// The live record for one assessment type, with its completion time.
    async fn get_assessment_record(
        &self,
        user_id: Uuid,
        kind: AssessmentKind,
    ) -> Result<Option<AssessmentRecord>>;

    /// Inserts the user's record for `score.kind()` or overwrites the existing
    /// one. There is never more than one live row per (user, kind).
    async fn save_assessment_score(
        &self,
        user_id: Uuid,
        score: AssessmentScore,
    ) -> Result<AssessmentRecord>;

    /// All careers, ordered by id ascending.
    async fn get_career_catalog(&self) -> Result<Vec<CareerProfile>>;

    /// `None` when the email is already on the waitlist.
    async fn add_to_waitlist(&self, entry: NewWaitlistEntry) -> Result<Option<WaitlistEntry>>;

    async fn get_assessment_score(
        &self,
        user_id: Uuid,
        kind: AssessmentKind,
    ) -> Result<Option<AssessmentScore>> {
        Ok(self
            .get_assessment_record(user_id, kind)
            .await?
            .map(|record| record.score))
    }
}
