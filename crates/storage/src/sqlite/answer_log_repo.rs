use quiz_core::model::SessionStamp;

use super::{
    SqliteRepository,
    mapping::{map_answer_log_row, verdict_to_i64},
};
use crate::repository::{AnswerLogEntry, AnswerLogRepository, StorageError};

#[async_trait::async_trait]
impl AnswerLogRepository for SqliteRepository {
    async fn append_entries(&self, entries: &[AnswerLogEntry]) -> Result<(), StorageError> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        for entry in entries {
            sqlx::query(
                r"
                    INSERT INTO answer_logs (
                        session_stamp, item_key, base_id, submission, verdict,
                        justification, confidence, tag, justification_score, created_at
                    )
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                ",
            )
            .bind(entry.session_stamp.as_str())
            .bind(entry.item_key.as_str())
            .bind(i64::from(entry.base_id.value()))
            .bind(entry.submission.as_str())
            .bind(verdict_to_i64(entry.verdict))
            .bind(entry.justification.as_str())
            .bind(entry.confidence.as_str())
            .bind(entry.tag.as_str())
            .bind(i64::from(entry.score.value()))
            .bind(entry.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }

    async fn entries_for_session(
        &self,
        stamp: &SessionStamp,
    ) -> Result<Vec<AnswerLogEntry>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT
                    session_stamp, item_key, base_id, submission, verdict,
                    justification, confidence, tag, justification_score, created_at
                FROM answer_logs
                WHERE session_stamp = ?1
                ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(stamp.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_answer_log_row(&row)?);
        }
        Ok(out)
    }
}
