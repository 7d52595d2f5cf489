use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::MasteryMap;
use storage::repository::{MasteryRecord, MasteryRepository, StorageError};

use crate::background::BackgroundWriter;
use crate::error::FailSoft;

/// Mastery map persistence with the load/save contract of the scheduler.
///
/// The map held by the caller is the source of truth; this store only
/// mirrors it to the repository.
#[derive(Clone)]
pub struct MasteryStore {
    clock: Clock,
    repo: Arc<dyn MasteryRepository>,
    writer: BackgroundWriter,
}

impl MasteryStore {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn MasteryRepository>, writer: BackgroundWriter) -> Self {
        Self {
            clock,
            repo,
            writer,
        }
    }

    /// Load the persisted map. Any storage failure yields an empty map.
    pub async fn load(&self) -> MasteryMap {
        let records = self
            .repo
            .load_levels()
            .await
            .fail_soft("loading mastery levels");
        MasteryRecord::into_map(records)
    }

    /// Upsert every entry of `map` and wait for the write. An empty map
    /// performs no write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the repository rejects the write.
    pub async fn save(&self, map: &MasteryMap) -> Result<(), StorageError> {
        if map.is_empty() {
            return Ok(());
        }
        let records = MasteryRecord::from_map(map, self.clock.now());
        self.repo.save_levels(&records).await
    }

    /// Snapshot `map` and persist it without blocking the caller.
    pub fn save_in_background(&self, map: &MasteryMap) {
        if map.is_empty() {
            return;
        }
        let records = MasteryRecord::from_map(map, self.clock.now());
        let repo = Arc::clone(&self.repo);
        self.writer.spawn("mastery", async move {
            repo.save_levels(&records).await
        });
    }
}
