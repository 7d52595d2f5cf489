//! Line-oriented quiz front-end over any reader/writer pair.

use std::io::{BufRead, Write};

use anyhow::Result;
use quiz_core::model::{Answer, Confidence, JustificationScore, Submission, TopicTag};
use quiz_core::verifier;
use services::{AnswerStep, QuizContext, SessionLoopService, SessionReport};

const L_CORRECT: &str = "ただしい";
const L_WRONG: &str = "あやまり";
const SEIKAI_LABEL: &str = "せいかい：";
const REASON_LABEL: &str = "りゆう：";
const TAG_LABEL: &str = "たぐ：";
const WRONG_LIST: &str = "まちがい りすと";
const SKIP_LIST: &str = "すきっぷ";

/// How the interactive loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The learner declined another round.
    Done,
    /// The learner typed `q` or input ended mid-session.
    Quit,
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run sessions until the learner stops.
    pub fn run(&mut self, quiz: &SessionLoopService, ctx: &mut QuizContext) -> Result<Exit> {
        loop {
            quiz.start_session(ctx)?;
            if self.play_session(quiz, ctx)? == Exit::Quit {
                return Ok(Exit::Quit);
            }

            let Some(session) = ctx.session() else {
                return Ok(Exit::Quit);
            };
            self.print_report(&SessionReport::from_session(session)?)?;

            let again = self.prompt("もういちど？ (y/n) ")?;
            if !matches!(again.as_deref(), Some("y" | "Y")) {
                return Ok(Exit::Done);
            }
        }
    }

    fn play_session(&mut self, quiz: &SessionLoopService, ctx: &mut QuizContext) -> Result<Exit> {
        loop {
            let Some(session) = ctx.session() else {
                return Ok(Exit::Quit);
            };
            if session.is_complete() {
                return Ok(Exit::Done);
            }
            let Some(item) = session.current_item().cloned() else {
                return Ok(Exit::Done);
            };
            let progress = session.progress();

            writeln!(self.output)?;
            writeln!(
                self.output,
                "[{}/{}] {}",
                progress.answered + 1,
                progress.total,
                item.text()
            )?;

            let submission = loop {
                let Some(line) = self.prompt(&format!(
                    "1) {L_CORRECT}  2) {L_WRONG}  0) {SKIP_LIST}  q) おわる > "
                ))?
                else {
                    return Ok(Exit::Quit);
                };
                match line.as_str() {
                    "1" => break Submission::Answer(Answer::True),
                    "2" => break Submission::Answer(Answer::False),
                    "0" => break Submission::Skip,
                    "q" => return Ok(Exit::Quit),
                    _ => writeln!(self.output, "1 / 2 / 0 / q を えらんでください")?,
                }
            };

            match quiz.answer_current(ctx, submission)?.step {
                AnswerStep::Skipped(_) | AnswerStep::Ignored => continue,
                AnswerStep::Answered(pending) => {
                    let mark = if pending.verdict.as_bool() == Some(true) { "◯" } else { "✕" };
                    writeln!(
                        self.output,
                        "{mark} {SEIKAI_LABEL}{}",
                        answer_label(verifier::canonical_answer(&item))
                    )?;
                }
            }

            let confidence = self
                .prompt("じしん h) たかい  m) ふつう  l) ひくい [m] > ")?
                .and_then(|raw| parse_confidence(&raw))
                .unwrap_or_default();
            let justification = self.prompt(REASON_LABEL)?.unwrap_or_default();
            let committed = quiz.commit_current(ctx, confidence, &justification)?;
            writeln!(self.output, "{}", score_label(committed.record.score))?;
        }
    }

    fn print_report(&mut self, report: &SessionReport) -> Result<()> {
        let summary = &report.summary;
        writeln!(self.output)?;
        writeln!(self.output, "けっか {} / {}", summary.correct(), summary.total())?;

        if !report.wrong.is_empty() {
            writeln!(self.output, "{WRONG_LIST}（{}）", report.wrong.len())?;
            for entry in &report.wrong {
                writeln!(self.output, "- {}", entry.text)?;
                writeln!(self.output, "  {SEIKAI_LABEL}{}", answer_label(entry.canonical))?;
                writeln!(self.output, "  {REASON_LABEL}{}", entry.explanation)?;
                writeln!(
                    self.output,
                    "  {TAG_LABEL}{} / {}",
                    tag_label(entry.tag),
                    score_label(entry.score)
                )?;
            }
        }

        if !report.skipped.is_empty() {
            writeln!(self.output, "{SKIP_LIST}（{}）", report.skipped.len())?;
            for entry in &report.skipped {
                writeln!(self.output, "- {}", entry.text)?;
            }
        }
        Ok(())
    }

    /// Print `label`, read one trimmed line. `None` on end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn parse_confidence(raw: &str) -> Option<Confidence> {
    match raw {
        "h" | "hi" => Some(Confidence::High),
        "m" | "md" => Some(Confidence::Medium),
        "l" | "lo" => Some(Confidence::Low),
        _ => None,
    }
}

fn answer_label(answer: Answer) -> &'static str {
    match answer {
        Answer::True => L_CORRECT,
        Answer::False => L_WRONG,
    }
}

fn tag_label(tag: TopicTag) -> &'static str {
    match tag {
        TopicTag::Safety => "あんぜん",
        TopicTag::Tooling => "どうぐ",
        TopicTag::Procedure => "せこう",
    }
}

fn score_label(score: JustificationScore) -> &'static str {
    match score {
        JustificationScore::Strong => "◎ きーわーど かんせつ",
        JustificationScore::Partial => "○ いちぶん ひっと",
        JustificationScore::Missing => "△ みつからず",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::random::seeded;
    use quiz_core::time::fixed_clock;
    use storage::repository::Storage;

    async fn run_script(script: &str) -> (Exit, String) {
        let quiz = SessionLoopService::new(fixed_clock(), &Storage::in_memory());
        let mut ctx = quiz.load_context(seeded(8)).await;
        let mut out = Vec::new();
        let exit = Terminal::new(script.as_bytes(), &mut out)
            .run(&quiz, &mut ctx)
            .unwrap();
        quiz.flush().await;
        (exit, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn skipping_everything_lists_all_skips() {
        let script = format!("{}n\n", "0\n".repeat(20));
        let (exit, out) = run_script(&script).await;
        assert_eq!(exit, Exit::Done);
        assert!(out.contains("けっか 0 / 20"));
        assert!(out.contains("すきっぷ（20）"));
        assert!(!out.contains(WRONG_LIST));
    }

    #[tokio::test]
    async fn answering_prompts_for_confidence_and_reason() {
        let (exit, out) = run_script("1\nh\nあぶない きけん\nq\n").await;
        assert_eq!(exit, Exit::Quit);
        assert!(out.contains(SEIKAI_LABEL));
        assert!(out.contains("[2/20]"));
    }

    #[tokio::test]
    async fn end_of_input_quits_cleanly() {
        let (exit, _) = run_script("").await;
        assert_eq!(exit, Exit::Quit);
    }

    #[test]
    fn confidence_defaults_are_parsed() {
        assert_eq!(parse_confidence("h"), Some(Confidence::High));
        assert_eq!(parse_confidence("lo"), Some(Confidence::Low));
        assert_eq!(parse_confidence(""), None);
    }
}
