use quiz_core::model::{
    Confidence, JustificationScore, MasteryLevel, QuestionId, SessionStamp, Submission, TopicTag,
    Verdict,
};
use sqlx::Row;

use crate::repository::{AnswerLogEntry, MasteryRecord, StorageError};

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn question_id_from_i64(field: &'static str, v: i64) -> Result<QuestionId, StorageError> {
    u32::try_from(v)
        .map(QuestionId::new)
        .map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

/// Stored levels outside `1..=5` are clamped rather than rejected.
pub(crate) fn map_mastery_row(row: &sqlx::sqlite::SqliteRow) -> Result<MasteryRecord, StorageError> {
    Ok(MasteryRecord {
        id: question_id_from_i64("item_id", row.try_get::<i64, _>("item_id").map_err(ser)?)?,
        level: MasteryLevel::clamped(row.try_get::<i64, _>("level").map_err(ser)?),
        updated_at: row.try_get("updated_at").map_err(ser)?,
    })
}

/// Stored verdict: `1` correct, `0` incorrect, `NULL` skipped.
pub(crate) fn verdict_to_i64(verdict: Verdict) -> Option<i64> {
    verdict.as_bool().map(i64::from)
}

pub(crate) fn verdict_from_i64(value: Option<i64>) -> Result<Verdict, StorageError> {
    let flag = match value {
        None => None,
        Some(0) => Some(false),
        Some(1) => Some(true),
        Some(other) => {
            return Err(StorageError::Serialization(format!(
                "invalid verdict: {other}"
            )));
        }
    };
    Ok(Verdict::from_bool(flag))
}

pub(crate) fn map_answer_log_row(
    row: &sqlx::sqlite::SqliteRow,
) -> Result<AnswerLogEntry, StorageError> {
    let submission: Submission = row
        .try_get::<String, _>("submission")
        .map_err(ser)?
        .parse()
        .map_err(ser)?;
    let confidence: Confidence = row
        .try_get::<String, _>("confidence")
        .map_err(ser)?
        .parse()
        .map_err(ser)?;
    let tag: TopicTag = row
        .try_get::<String, _>("tag")
        .map_err(ser)?
        .parse()
        .map_err(ser)?;
    let raw_score: i64 = row.try_get("justification_score").map_err(ser)?;
    let score = u8::try_from(raw_score)
        .map_err(ser)
        .and_then(|v| JustificationScore::from_u8(v).map_err(ser))?;

    Ok(AnswerLogEntry {
        session_stamp: SessionStamp::from_persisted(
            row.try_get::<String, _>("session_stamp").map_err(ser)?,
        ),
        item_key: row.try_get("item_key").map_err(ser)?,
        base_id: question_id_from_i64("base_id", row.try_get::<i64, _>("base_id").map_err(ser)?)?,
        submission,
        verdict: verdict_from_i64(row.try_get("verdict").map_err(ser)?)?,
        justification: row.try_get("justification").map_err(ser)?,
        confidence,
        tag,
        score,
        created_at: row.try_get("created_at").map_err(ser)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_encoding_round_trips() {
        for verdict in [Verdict::Correct, Verdict::Incorrect, Verdict::Skipped] {
            assert_eq!(verdict_from_i64(verdict_to_i64(verdict)).unwrap(), verdict);
        }
        assert!(verdict_from_i64(Some(2)).is_err());
    }

    #[test]
    fn negative_ids_are_rejected() {
        assert!(question_id_from_i64("item_id", -1).is_err());
        assert_eq!(question_id_from_i64("item_id", 7).unwrap(), QuestionId::new(7));
    }
}
