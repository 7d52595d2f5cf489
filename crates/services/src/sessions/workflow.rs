use std::sync::Arc;

use quiz_core::bank::QuestionBank;
use quiz_core::model::{AnswerRecord, Confidence, SessionStamp, Submission};
use quiz_core::scheduler::{self, MasteryChange};
use quiz_core::QuizRng;
use storage::repository::{AnswerLogEntry, AnswerLogRepository, Storage};

use super::context::QuizContext;
use super::plan::SessionBuilder;
use super::service::{AnswerStep, SessionService};
use crate::background::BackgroundWriter;
use crate::config::QuizConfig;
use crate::error::SessionError;
use crate::mastery_store::MasteryStore;
use crate::Clock;

/// Result of an answer attempt within a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionAnswerResult {
    pub step: AnswerStep,
    pub is_complete: bool,
}

/// Result of committing the pending answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionCommitResult {
    pub record: AnswerRecord,
    pub mastery: Option<MasteryChange>,
    pub is_complete: bool,
}

/// Orchestrates session start, answering and background persistence.
#[derive(Clone)]
pub struct SessionLoopService {
    clock: Clock,
    config: QuizConfig,
    bank: Arc<QuestionBank>,
    mastery: MasteryStore,
    answer_logs: Arc<dyn AnswerLogRepository>,
    writer: BackgroundWriter,
}

impl SessionLoopService {
    #[must_use]
    pub fn new(clock: Clock, storage: &Storage) -> Self {
        let writer = BackgroundWriter::new();
        Self {
            clock,
            config: QuizConfig::default(),
            bank: Arc::new(QuestionBank::standard()),
            mastery: MasteryStore::new(clock, Arc::clone(&storage.mastery), writer.clone()),
            answer_logs: Arc::clone(&storage.answer_logs),
            writer,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: QuizConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Load the persisted mastery map (empty on failure) into a fresh context.
    pub async fn load_context(&self, rng: QuizRng) -> QuizContext {
        let mastery = self.mastery.load().await;
        tracing::debug!(entries = mastery.len(), "mastery loaded");
        QuizContext::new(mastery, rng)
    }

    /// Start (or restart) a session: compose items, mint a stamp and
    /// discard the previous in-memory session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if nothing could be drawn.
    pub fn start_session<'c>(
        &self,
        ctx: &'c mut QuizContext,
    ) -> Result<&'c SessionService, SessionError> {
        let now = self.clock.now();
        let plan = SessionBuilder::new(&self.bank).with_config(self.config).build(
            &ctx.mastery,
            &mut ctx.generator,
            now,
            &mut ctx.rng,
        );
        let stamp = SessionStamp::mint(now, &mut ctx.rng);

        tracing::debug!(
            stamp = %stamp,
            sampled = plan.sampled,
            generated = plan.generated,
            "session composed"
        );

        let session = SessionService::new(stamp, plan.items, now)?;
        Ok(ctx.session.insert(session))
    }

    /// Submit an answer or skip for the current item. Skips are logged right away.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` without a session, or
    /// `SessionError::Completed` once it is finished.
    pub fn answer_current(
        &self,
        ctx: &mut QuizContext,
        submission: Submission,
    ) -> Result<SessionAnswerResult, SessionError> {
        let session = ctx.session.as_mut().ok_or(SessionError::NotStarted)?;
        let step = session.answer_current(submission, self.clock.now())?;

        if let AnswerStep::Skipped(record) = &step {
            tracing::debug!(item = %record.item.item_key(), "item skipped");
            self.log_in_background(session.stamp(), record);
            self.report_if_complete(session);
        }

        Ok(SessionAnswerResult {
            step,
            is_complete: session.is_complete(),
        })
    }

    /// Commit the pending answer, update mastery and persist both in the background.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted`, `SessionError::Completed` or
    /// `SessionError::NotAnswered` from the session state machine.
    pub fn commit_current(
        &self,
        ctx: &mut QuizContext,
        confidence: Confidence,
        justification: &str,
    ) -> Result<SessionCommitResult, SessionError> {
        let session = ctx.session.as_mut().ok_or(SessionError::NotStarted)?;
        let record = session
            .commit_current(confidence, justification, self.clock.now())?
            .clone();

        let change = scheduler::apply_review(
            &mut ctx.mastery,
            record.item.mastery_key(),
            record.verdict,
            record.confidence,
        );
        if let Some(change) = change {
            self.mastery.save_in_background(&ctx.mastery);
            tracing::debug!(
                item = %record.item.item_key(),
                verdict = ?record.verdict,
                before = change.before.value(),
                after = change.after.value(),
                "answer committed"
            );
        }

        self.log_in_background(session.stamp(), &record);
        self.report_if_complete(session);

        Ok(SessionCommitResult {
            record,
            mastery: change,
            is_complete: session.is_complete(),
        })
    }

    /// Wait for all background writes spawned so far.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    /// Drain background writes, then persist the in-process mastery map one
    /// last time and wait for it. Call before the process exits.
    pub async fn close(&self, ctx: &QuizContext) {
        self.flush().await;
        if let Err(err) = self.mastery.save(&ctx.mastery).await {
            tracing::warn!(error = %err, "final mastery save failed");
        }
    }

    fn log_in_background(&self, stamp: &SessionStamp, record: &AnswerRecord) {
        let entry = AnswerLogEntry::from_record(stamp, record);
        let logs = Arc::clone(&self.answer_logs);
        self.writer.spawn("answer-log", async move {
            logs.append_entries(std::slice::from_ref(&entry)).await
        });
    }

    fn report_if_complete(&self, session: &SessionService) {
        if !session.is_complete() {
            return;
        }
        match session.summary() {
            Ok(summary) => tracing::info!(
                stamp = %summary.stamp(),
                correct = summary.correct(),
                incorrect = summary.incorrect(),
                skipped = summary.skipped(),
                "session complete"
            ),
            Err(err) => tracing::warn!(error = %err, "session complete but summary unavailable"),
        }
    }
}
