use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quiz_core::model::{
    AnswerRecord, Confidence, JustificationScore, MasteryLevel, MasteryMap, QuestionId,
    SessionStamp, Submission, TopicTag, Verdict,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

//
// ─── MASTERY ───────────────────────────────────────────────────────────────────
//

/// Persisted shape of one mastery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasteryRecord {
    pub id: QuestionId,
    pub level: MasteryLevel,
    pub updated_at: DateTime<Utc>,
}

impl MasteryRecord {
    /// Snapshot every entry of `map`, stamped with `updated_at`.
    #[must_use]
    pub fn from_map(map: &MasteryMap, updated_at: DateTime<Utc>) -> Vec<Self> {
        map.iter()
            .map(|(id, level)| Self {
                id,
                level,
                updated_at,
            })
            .collect()
    }

    /// Rebuild a map from persisted records. Later duplicates win.
    #[must_use]
    pub fn into_map(records: impl IntoIterator<Item = Self>) -> MasteryMap {
        records.into_iter().map(|r| (r.id, r.level)).collect()
    }
}

/// Load/save contract for the mastery map.
#[async_trait]
pub trait MasteryRepository: Send + Sync {
    /// Read every stored mastery entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn load_levels(&self) -> Result<Vec<MasteryRecord>, StorageError>;

    /// Upsert every given entry keyed by id. An empty slice writes nothing.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if any entry cannot be stored.
    async fn save_levels(&self, records: &[MasteryRecord]) -> Result<(), StorageError>;
}

//
// ─── ANSWER LOG ────────────────────────────────────────────────────────────────
//

/// Persisted shape of one answer record, tagged with its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerLogEntry {
    pub session_stamp: SessionStamp,
    /// Bank id or generated template id, as text.
    pub item_key: String,
    /// Mastery key of the item.
    pub base_id: QuestionId,
    pub submission: Submission,
    pub verdict: Verdict,
    pub justification: String,
    pub confidence: Confidence,
    pub tag: TopicTag,
    pub score: JustificationScore,
    pub created_at: DateTime<Utc>,
}

impl AnswerLogEntry {
    #[must_use]
    pub fn from_record(stamp: &SessionStamp, record: &AnswerRecord) -> Self {
        Self {
            session_stamp: stamp.clone(),
            item_key: record.item.item_key(),
            base_id: record.item.mastery_key(),
            submission: record.submission,
            verdict: record.verdict,
            justification: record.justification.clone(),
            confidence: record.confidence,
            tag: record.tag,
            score: record.score,
            created_at: record.recorded_at,
        }
    }
}

/// Append-only durable log of answer records.
#[async_trait]
pub trait AnswerLogRepository: Send + Sync {
    /// Append a batch of entries. Ordering within the batch is not guaranteed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entries cannot be stored.
    async fn append_entries(&self, entries: &[AnswerLogEntry]) -> Result<(), StorageError>;

    /// Entries logged under one session stamp, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn entries_for_session(
        &self,
        stamp: &SessionStamp,
    ) -> Result<Vec<AnswerLogEntry>, StorageError>;
}

//
// ─── IN-MEMORY ─────────────────────────────────────────────────────────────────
//

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    levels: Arc<Mutex<HashMap<QuestionId, MasteryRecord>>>,
    logs: Arc<Mutex<Vec<AnswerLogEntry>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: Arc::new(Mutex::new(HashMap::new())),
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl MasteryRepository for InMemoryRepository {
    async fn load_levels(&self) -> Result<Vec<MasteryRecord>, StorageError> {
        let guard = self
            .levels
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut records: Vec<MasteryRecord> = guard.values().copied().collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    async fn save_levels(&self, records: &[MasteryRecord]) -> Result<(), StorageError> {
        let mut guard = self
            .levels
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        for record in records {
            guard.insert(record.id, *record);
        }
        Ok(())
    }
}

#[async_trait]
impl AnswerLogRepository for InMemoryRepository {
    async fn append_entries(&self, entries: &[AnswerLogEntry]) -> Result<(), StorageError> {
        let mut guard = self
            .logs
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.extend_from_slice(entries);
        Ok(())
    }

    async fn entries_for_session(
        &self,
        stamp: &SessionStamp,
    ) -> Result<Vec<AnswerLogEntry>, StorageError> {
        let guard = self
            .logs
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut found: Vec<AnswerLogEntry> = guard
            .iter()
            .filter(|e| &e.session_stamp == stamp)
            .cloned()
            .collect();
        found.sort_by_key(|e| e.created_at);
        Ok(found)
    }
}

/// Aggregates the persistence collaborators behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub mastery: Arc<dyn MasteryRepository>,
    pub answer_logs: Arc<dyn AnswerLogRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let mastery: Arc<dyn MasteryRepository> = Arc::new(repo.clone());
        let answer_logs: Arc<dyn AnswerLogRepository> = Arc::new(repo);
        Self {
            mastery,
            answer_logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Answer, QuestionItem};
    use quiz_core::time::fixed_now;

    fn level(v: i64) -> MasteryLevel {
        MasteryLevel::new(v).unwrap()
    }

    #[tokio::test]
    async fn save_is_an_idempotent_upsert() {
        let repo = InMemoryRepository::new();
        let mut map = MasteryMap::new();
        map.set(QuestionId::new(1), level(3));
        map.set(QuestionId::new(2), level(5));

        let records = MasteryRecord::from_map(&map, fixed_now());
        repo.save_levels(&records).await.unwrap();
        repo.save_levels(&records).await.unwrap();

        map.set(QuestionId::new(1), level(2));
        repo.save_levels(&MasteryRecord::from_map(&map, fixed_now()))
            .await
            .unwrap();

        let loaded = MasteryRecord::into_map(repo.load_levels().await.unwrap());
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.level(QuestionId::new(1)), level(2));
        assert_eq!(loaded.level(QuestionId::new(2)), level(5));
    }

    #[tokio::test]
    async fn empty_save_writes_nothing() {
        let repo = InMemoryRepository::new();
        repo.save_levels(&[]).await.unwrap();
        assert!(repo.load_levels().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn log_entries_are_grouped_by_stamp() {
        let repo = InMemoryRepository::new();
        let item = QuestionItem::new(QuestionId::new(4), "おりものは、 かべがみには つかわれません。", Answer::False);
        let record = AnswerRecord::skipped(item.into(), TopicTag::Procedure, fixed_now());

        let a = SessionStamp::from_persisted("a-000000");
        let b = SessionStamp::from_persisted("b-000000");
        repo.append_entries(&[
            AnswerLogEntry::from_record(&a, &record),
            AnswerLogEntry::from_record(&b, &record),
            AnswerLogEntry::from_record(&a, &record),
        ])
        .await
        .unwrap();

        let found = repo.entries_for_session(&a).await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|e| e.verdict == Verdict::Skipped));
        assert_eq!(found[0].item_key, "4");
        assert_eq!(found[0].base_id, QuestionId::new(4));
    }
}
