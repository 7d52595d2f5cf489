use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use quiz_core::model::{
    Answer, AnswerRecord, Confidence, MasteryLevel, SessionStamp, Submission, Verdict,
};
use quiz_core::random::seeded;
use quiz_core::time::fixed_clock;
use quiz_core::{sampler, verifier};
use services::{AnswerStep, SessionError, SessionLoopService, SessionReport};
use storage::repository::{
    AnswerLogEntry, AnswerLogRepository, InMemoryRepository, MasteryRecord, MasteryRepository,
    Storage, StorageError,
};

fn storage_over(repo: &InMemoryRepository) -> Storage {
    Storage {
        mastery: Arc::new(repo.clone()),
        answer_logs: Arc::new(repo.clone()),
    }
}

fn flip(answer: Answer) -> Answer {
    match answer {
        Answer::True => Answer::False,
        Answer::False => Answer::True,
    }
}

#[tokio::test]
async fn correct_high_answer_reweights_the_next_session() {
    let repo = InMemoryRepository::new();
    let loop_svc = SessionLoopService::new(fixed_clock(), &storage_over(&repo));

    let mut ctx = loop_svc.load_context(seeded(7)).await;
    assert!(ctx.mastery().is_empty());

    let first = loop_svc.start_session(&mut ctx).unwrap();
    assert_eq!(first.items().len(), 20);
    let stamp = first.stamp().clone();
    let item = first.current_item().unwrap().clone();
    let key = item.mastery_key();
    assert_eq!(sampler::weight(ctx.mastery().level(key)), 25);

    let answered = loop_svc
        .answer_current(&mut ctx, Submission::Answer(verifier::canonical_answer(&item)))
        .unwrap();
    assert!(matches!(answered.step, AnswerStep::Answered(p) if p.verdict == Verdict::Correct));

    let committed = loop_svc
        .commit_current(&mut ctx, Confidence::High, "")
        .unwrap();
    let change = committed.mastery.unwrap();
    assert_eq!(change.after, MasteryLevel::new(3).unwrap());
    assert_eq!(ctx.mastery().level(key), MasteryLevel::new(3).unwrap());
    assert_eq!(ctx.session().unwrap().records().len(), 1);

    loop_svc.flush().await;
    let persisted = MasteryRecord::into_map(repo.load_levels().await.unwrap());
    assert_eq!(persisted.level(key), MasteryLevel::new(3).unwrap());
    assert_eq!(repo.entries_for_session(&stamp).await.unwrap().len(), 1);

    // Reset: brand-new session, mastery carried over.
    let second = loop_svc.start_session(&mut ctx).unwrap();
    assert_ne!(second.stamp(), &stamp);
    assert_eq!(second.position(), 0);
    assert!(second.records().is_empty());

    let fresh = loop_svc
        .bank()
        .ids()
        .into_iter()
        .find(|id| *id != key)
        .unwrap();
    assert_eq!(sampler::weight(ctx.mastery().level(key)), 9);
    assert_eq!(sampler::weight(ctx.mastery().level(fresh)), 25);
}

#[tokio::test]
async fn skip_commits_without_touching_mastery() {
    let repo = InMemoryRepository::new();
    let loop_svc = SessionLoopService::new(fixed_clock(), &storage_over(&repo));
    let mut ctx = loop_svc.load_context(seeded(11)).await;
    let stamp = loop_svc.start_session(&mut ctx).unwrap().stamp().clone();

    let result = loop_svc.answer_current(&mut ctx, Submission::Skip).unwrap();
    let AnswerStep::Skipped(record) = result.step else {
        panic!("expected a skip, got {:?}", result.step);
    };
    assert_eq!(record.verdict, Verdict::Skipped);
    assert!(ctx.mastery().is_empty());
    assert_eq!(ctx.session().unwrap().position(), 1);

    // Nothing pending after a skip.
    let err = loop_svc
        .commit_current(&mut ctx, Confidence::Medium, "")
        .unwrap_err();
    assert!(matches!(err, SessionError::NotAnswered));

    loop_svc.flush().await;
    assert!(repo.load_levels().await.unwrap().is_empty());
    let logged = repo.entries_for_session(&stamp).await.unwrap();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].submission, Submission::Skip);
    assert_eq!(logged[0].confidence, Confidence::Low);
}

#[tokio::test]
async fn full_session_completes_and_reports() {
    let repo = InMemoryRepository::new();
    let loop_svc = SessionLoopService::new(fixed_clock(), &storage_over(&repo));
    let mut ctx = loop_svc.load_context(seeded(3)).await;
    let stamp = loop_svc.start_session(&mut ctx).unwrap().stamp().clone();

    let mut n = 0;
    loop {
        let item = ctx.session().unwrap().current_item().unwrap().clone();
        let canonical = verifier::canonical_answer(&item);
        let done = match n % 3 {
            0 => loop_svc.answer_current(&mut ctx, Submission::Skip).unwrap().is_complete,
            1 => {
                loop_svc
                    .answer_current(&mut ctx, Submission::Answer(canonical))
                    .unwrap();
                loop_svc
                    .commit_current(&mut ctx, Confidence::Medium, "したじを ならす")
                    .unwrap()
                    .is_complete
            }
            _ => {
                loop_svc
                    .answer_current(&mut ctx, Submission::Answer(flip(canonical)))
                    .unwrap();
                loop_svc
                    .commit_current(&mut ctx, Confidence::Low, "")
                    .unwrap()
                    .is_complete
            }
        };
        n += 1;
        if done {
            break;
        }
    }
    assert_eq!(n, 20);

    let session = ctx.session().unwrap();
    let report = SessionReport::from_session(session).unwrap();
    assert_eq!(report.summary.total(), 20);
    assert_eq!(report.summary.skipped(), 7);
    assert_eq!(report.summary.correct(), 7);
    assert_eq!(report.summary.incorrect(), 6);
    assert_eq!(report.wrong.len(), 6);
    assert!(report.wrong.iter().all(|w| !w.learner_wrote_it));

    let err = loop_svc
        .answer_current(&mut ctx, Submission::Skip)
        .unwrap_err();
    assert!(matches!(err, SessionError::Completed));

    loop_svc.flush().await;
    assert_eq!(repo.entries_for_session(&stamp).await.unwrap().len(), 20);
}

#[tokio::test]
async fn same_seed_composes_the_same_session() {
    let texts = |seed| async move {
        let loop_svc = SessionLoopService::new(fixed_clock(), &Storage::in_memory());
        let mut ctx = loop_svc.load_context(seeded(seed)).await;
        let session = loop_svc.start_session(&mut ctx).unwrap();
        session
            .items()
            .iter()
            .map(|i| i.text().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(texts(99).await, texts(99).await);
    assert_ne!(texts(99).await, texts(100).await);
}

#[tokio::test]
async fn answering_before_start_is_rejected() {
    let loop_svc = SessionLoopService::new(fixed_clock(), &Storage::in_memory());
    let mut ctx = loop_svc.load_context(seeded(1)).await;
    let err = loop_svc
        .answer_current(&mut ctx, Submission::Skip)
        .unwrap_err();
    assert!(matches!(err, SessionError::NotStarted));
}

struct OfflineRepo;

#[async_trait]
impl MasteryRepository for OfflineRepo {
    async fn load_levels(&self) -> Result<Vec<MasteryRecord>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn save_levels(&self, _records: &[MasteryRecord]) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

#[async_trait]
impl AnswerLogRepository for OfflineRepo {
    async fn append_entries(&self, _entries: &[AnswerLogEntry]) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn entries_for_session(
        &self,
        _stamp: &SessionStamp,
    ) -> Result<Vec<AnswerLogEntry>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

#[tokio::test]
async fn persistence_failures_never_reach_the_learner() {
    let storage = Storage {
        mastery: Arc::new(OfflineRepo),
        answer_logs: Arc::new(OfflineRepo),
    };
    let loop_svc = SessionLoopService::new(fixed_clock(), &storage);

    let mut ctx = loop_svc.load_context(seeded(5)).await;
    assert!(ctx.mastery().is_empty());

    let item = loop_svc.start_session(&mut ctx).unwrap().current_item().unwrap().clone();
    loop_svc
        .answer_current(&mut ctx, Submission::Answer(verifier::canonical_answer(&item)))
        .unwrap();
    let committed = loop_svc
        .commit_current(&mut ctx, Confidence::Medium, "")
        .unwrap();
    let record: &AnswerRecord = &committed.record;
    assert_eq!(record.verdict, Verdict::Correct);
    assert_eq!(ctx.mastery().level(item.mastery_key()), MasteryLevel::new(2).unwrap());

    loop_svc.flush().await;
}

/// Rejects its first mastery write, then behaves.
struct DropsFirstSave {
    inner: InMemoryRepository,
    first: AtomicBool,
}

#[async_trait]
impl MasteryRepository for DropsFirstSave {
    async fn load_levels(&self) -> Result<Vec<MasteryRecord>, StorageError> {
        self.inner.load_levels().await
    }

    async fn save_levels(&self, records: &[MasteryRecord]) -> Result<(), StorageError> {
        if self.first.swap(false, Ordering::SeqCst) {
            return Err(StorageError::Connection("busy".into()));
        }
        self.inner.save_levels(records).await
    }
}

#[tokio::test]
async fn close_persists_the_live_mastery_map() {
    let repo = InMemoryRepository::new();
    let storage = Storage {
        mastery: Arc::new(DropsFirstSave {
            inner: repo.clone(),
            first: AtomicBool::new(true),
        }),
        answer_logs: Arc::new(repo.clone()),
    };
    let loop_svc = SessionLoopService::new(fixed_clock(), &storage);
    let mut ctx = loop_svc.load_context(seeded(21)).await;

    let item = loop_svc.start_session(&mut ctx).unwrap().current_item().unwrap().clone();
    loop_svc
        .answer_current(&mut ctx, Submission::Answer(verifier::canonical_answer(&item)))
        .unwrap();
    loop_svc
        .commit_current(&mut ctx, Confidence::High, "")
        .unwrap();

    // The background write was rejected; nothing is stored yet.
    loop_svc.flush().await;
    assert!(repo.load_levels().await.unwrap().is_empty());

    loop_svc.close(&ctx).await;
    let persisted = MasteryRecord::into_map(repo.load_levels().await.unwrap());
    assert_eq!(&persisted, ctx.mastery());
    assert_eq!(persisted.level(item.mastery_key()), MasteryLevel::new(3).unwrap());
}
