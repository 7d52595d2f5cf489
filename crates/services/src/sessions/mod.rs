mod context;
mod plan;
mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use context::QuizContext;
pub use plan::{SessionBuilder, SessionPlan};
pub use progress::SessionProgress;
pub use service::{AnswerStep, PendingAnswer, SessionService};
pub use view::{ReviewEntry, SessionReport};
pub use workflow::{SessionAnswerResult, SessionCommitResult, SessionLoopService};
