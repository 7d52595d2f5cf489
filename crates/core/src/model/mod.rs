mod answer;
mod ids;
mod item;
mod mastery;
mod record;
mod session;
mod tag;

pub use answer::{Answer, AnswerError, Confidence, JustificationScore, Submission, Verdict};
pub use ids::{ParseIdError, QuestionId, SessionStamp, TemplateItemId};
pub use item::{QuestionItem, SessionItem, TemplateItem};
pub use mastery::{MasteryError, MasteryLevel, MasteryMap};
pub use record::AnswerRecord;
pub use session::{SessionSummary, SessionSummaryError};
pub use tag::{TagError, TopicTag};
