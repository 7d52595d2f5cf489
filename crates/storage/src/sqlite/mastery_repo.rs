use super::{SqliteRepository, mapping::map_mastery_row};
use crate::repository::{MasteryRecord, MasteryRepository, StorageError};

#[async_trait::async_trait]
impl MasteryRepository for SqliteRepository {
    async fn load_levels(&self) -> Result<Vec<MasteryRecord>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT item_id, level, updated_at
                FROM mastery_levels
                ORDER BY item_id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_mastery_row(&row)?);
        }
        Ok(out)
    }

    async fn save_levels(&self, records: &[MasteryRecord]) -> Result<(), StorageError> {
        if records.is_empty() {
            return Ok(());
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        for record in records {
            sqlx::query(
                r"
                    INSERT INTO mastery_levels (item_id, level, updated_at)
                    VALUES (?1, ?2, ?3)
                    ON CONFLICT(item_id) DO UPDATE SET
                        level = excluded.level,
                        updated_at = excluded.updated_at
                ",
            )
            .bind(i64::from(record.id.value()))
            .bind(i64::from(record.level.value()))
            .bind(record.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }
}
