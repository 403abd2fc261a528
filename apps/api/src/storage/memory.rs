use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::assessment::dimensions::AssessmentKind;
use crate::assessment::scores::{AptitudeScores, AssessmentScore, OceanScores, RiasecScores};
use crate::matching::catalog::{starter_catalog, validate_catalog, CareerProfile};
use crate::models::assessment::AssessmentRecord;
use crate::models::user::User;
use crate::models::waitlist::{NewWaitlistEntry, WaitlistEntry};
use crate::storage::AssessmentStore;

/// In-process store. Owned by whoever builds it and injected through
/// `AppState`; used by tests and by demo mode.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    results: RwLock<HashMap<(Uuid, AssessmentKind), AssessmentRecord>>,
    careers: RwLock<Vec<CareerProfile>>,
    waitlist: RwLock<Vec<WaitlistEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store with the given catalog, sorted by id.
    pub fn with_catalog(mut careers: Vec<CareerProfile>) -> Result<Self> {
        validate_catalog(&careers)?;
        careers.sort_by_key(|c| c.id);
        Ok(Self {
            careers: RwLock::new(careers),
            ..Self::default()
        })
    }

    /// Starter catalog plus one demo user who has completed all three
    /// assessments. Returns the store and the demo user's id.
    pub async fn demo() -> Result<(Self, Uuid)> {
        let store = Self::with_catalog(starter_catalog())?;
        let user = store.add_user("Demo", "User", "demo@example.com").await;

        let demo_scores = [
            AssessmentScore::Riasec(RiasecScores {
                realistic: 65.0,
                investigative: 82.0,
                artistic: 45.0,
                social: 70.0,
                enterprising: 55.0,
                conventional: 40.0,
            }),
            AssessmentScore::Aptitude(AptitudeScores {
                numerical: 75.0,
                verbal: 82.0,
                spatial: 60.0,
                logical: 88.0,
                mechanical: 50.0,
            }),
            AssessmentScore::Ocean(OceanScores {
                openness: 85.0,
                conscientiousness: 70.0,
                extraversion: 55.0,
                agreeableness: 75.0,
                neuroticism: 40.0,
            }),
        ];
        for score in demo_scores {
            store.save_assessment_score(user.id, score).await?;
        }

        info!("Demo store seeded (demo user {})", user.id);
        Ok((store, user.id))
    }

    pub async fn add_user(&self, first_name: &str, last_name: &str, email: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        self.users.write().await.insert(user.id, user.clone());
        user
    }
}

#[async_trait]
impl AssessmentStore for MemoryStore {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }

    async fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Option<User>> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == email) {
            return Ok(None);
        }
        let user = User {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        Ok(Some(user))
    }

    async fn get_assessment_record(
        &self,
        user_id: Uuid,
        kind: AssessmentKind,
    ) -> Result<Option<AssessmentRecord>> {
        Ok(self.results.read().await.get(&(user_id, kind)).cloned())
    }

    async fn save_assessment_score(
        &self,
        user_id: Uuid,
        score: AssessmentScore,
    ) -> Result<AssessmentRecord> {
        let record = AssessmentRecord {
            user_id,
            score,
            completed_at: Utc::now(),
        };
        self.results
            .write()
            .await
            .insert((user_id, score.kind()), record.clone());
        Ok(record)
    }

    async fn get_career_catalog(&self) -> Result<Vec<CareerProfile>> {
        Ok(self.careers.read().await.clone())
    }

    async fn add_to_waitlist(&self, entry: NewWaitlistEntry) -> Result<Option<WaitlistEntry>> {
        let mut waitlist = self.waitlist.write().await;
        if waitlist.iter().any(|w| w.email == entry.email) {
            return Ok(None);
        }
        let stored = WaitlistEntry {
            id: waitlist.len() as i64 + 1,
            first_name: entry.first_name,
            last_name: entry.last_name,
            email: entry.email,
            occupation: entry.occupation,
            interests: entry.interests,
            newsletter: entry.newsletter,
            created_at: Utc::now(),
        };
        waitlist.push(stored.clone());
        Ok(Some(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ocean(neuroticism: f64) -> AssessmentScore {
        AssessmentScore::Ocean(OceanScores {
            openness: 50.0,
            conscientiousness: 50.0,
            extraversion: 50.0,
            agreeableness: 50.0,
            neuroticism,
        })
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_result() {
        let store = MemoryStore::new();
        let user = store.add_user("Ada", "L", "ada@example.com").await;

        store.save_assessment_score(user.id, ocean(10.0)).await.unwrap();
        store.save_assessment_score(user.id, ocean(90.0)).await.unwrap();

        let score = store
            .get_assessment_score(user.id, AssessmentKind::Ocean)
            .await
            .unwrap();
        assert_eq!(score, Some(ocean(90.0)));
        assert_eq!(store.results.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_assessment_is_none() {
        let store = MemoryStore::new();
        let user = store.add_user("Ada", "L", "ada@example.com").await;
        let score = store
            .get_assessment_score(user.id, AssessmentKind::Riasec)
            .await
            .unwrap();
        assert!(score.is_none());
    }

    #[tokio::test]
    async fn test_catalog_is_sorted_by_id() {
        let mut careers = starter_catalog();
        careers.reverse();
        let store = MemoryStore::with_catalog(careers).unwrap();
        let ids: Vec<i32> = store
            .get_career_catalog()
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn test_create_user_rejects_taken_email() {
        let store = MemoryStore::new();
        let first = store
            .create_user("Ada", "Lovelace", "ada@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(store.get_user(first.id).await.unwrap().is_some());

        let again = store
            .create_user("Ada", "Byron", "ada@example.com")
            .await
            .unwrap();
        assert!(again.is_none());
        assert_eq!(store.users.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_waitlist_is_unique_per_email() {
        let store = MemoryStore::new();
        let entry = || NewWaitlistEntry {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            occupation: None,
            interests: Some("compilers".to_string()),
            newsletter: true,
        };

        let stored = store.add_to_waitlist(entry()).await.unwrap().unwrap();
        assert_eq!(stored.id, 1);
        assert!(stored.newsletter);
        assert!(store.add_to_waitlist(entry()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_demo_user_has_all_assessments() {
        let (store, user_id) = MemoryStore::demo().await.unwrap();
        for kind in AssessmentKind::ALL {
            assert!(store
                .get_assessment_score(user_id, kind)
                .await
                .unwrap()
                .is_some());
        }
    }
}
