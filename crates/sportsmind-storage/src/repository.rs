//! Typed access to the documents the service stores.

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use sportsmind_core::models::comparison::Comparison;
use sportsmind_core::models::question::Question;
use sportsmind_core::models::test_result::TestResult;
use sportsmind_core::s3_keys;

use crate::error::StorageError;
use crate::store::ObjectStore;

#[derive(Debug, Clone)]
pub struct Repository {
    store: ObjectStore,
}

impl Repository {
    pub fn new(store: ObjectStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
        let body = self.store.get(key).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let body = serde_json::to_vec_pretty(value)?;
        self.store.put(key, body).await
    }

    async fn load_all<T: DeserializeOwned>(&self, prefix: &str) -> Result<Vec<T>, StorageError> {
        let keys = self.store.list(prefix).await?;
        let mut values = Vec::with_capacity(keys.len());
        for key in &keys {
            values.push(self.load(key).await?);
        }
        Ok(values)
    }

    // Questions

    /// Every stored question, ordered by number.
    pub async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let mut questions: Vec<Question> = self.load_all(s3_keys::QUESTIONS_PREFIX).await?;
        questions.sort_by_key(|q| q.number);
        Ok(questions)
    }

    pub async fn get_question(&self, id: Uuid) -> Result<Question, StorageError> {
        self.load(&s3_keys::question(id)).await
    }

    pub async fn put_question(&self, question: &Question) -> Result<(), StorageError> {
        self.save(&s3_keys::question(question.id), question).await
    }

    /// Write `questions` when the store holds none yet. Returns how many
    /// were written.
    pub async fn seed_questions(&self, questions: &[Question]) -> Result<usize, StorageError> {
        if !self.store.list(s3_keys::QUESTIONS_PREFIX).await?.is_empty() {
            tracing::debug!("question catalog already present, skipping seed");
            return Ok(0);
        }
        for question in questions {
            self.put_question(question).await?;
        }
        tracing::info!(count = questions.len(), backend = self.store.backend(), "seeded question catalog");
        Ok(questions.len())
    }

    // Results

    pub async fn list_results(&self) -> Result<Vec<TestResult>, StorageError> {
        self.load_all(s3_keys::RESULTS_PREFIX).await
    }

    pub async fn list_results_for_user(&self, user_id: Uuid) -> Result<Vec<TestResult>, StorageError> {
        let mut results = self.list_results().await?;
        results.retain(|r| r.user_id == Some(user_id));
        Ok(results)
    }

    pub async fn get_result(&self, id: Uuid) -> Result<TestResult, StorageError> {
        self.load(&s3_keys::test_result(id)).await
    }

    pub async fn put_result(&self, result: &TestResult) -> Result<(), StorageError> {
        self.save(&s3_keys::test_result(result.id), result).await
    }

    // Comparisons

    pub async fn list_comparisons(&self) -> Result<Vec<Comparison>, StorageError> {
        self.load_all(s3_keys::COMPARISONS_PREFIX).await
    }

    pub async fn get_comparison(&self, id: Uuid) -> Result<Comparison, StorageError> {
        self.load(&s3_keys::comparison(id)).await
    }

    pub async fn put_comparison(&self, comparison: &Comparison) -> Result<(), StorageError> {
        self.save(&s3_keys::comparison(comparison.id), comparison).await
    }
}
