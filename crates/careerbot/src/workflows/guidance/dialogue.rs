use std::fmt::Write as _;
use std::sync::Arc;

use super::advisor::{advice_or_fallback, AdvisorGateway};
use super::catalog::{
    career_field_labels, english_level_labels, points_for_rank, EnglishLevel, QUESTIONS,
    QUESTION_COUNT,
};
use super::report::{render_pdf, ReportArtifact, ReportDocument, ReportError, ReportStore};
use super::scoring::{QuizResult, ScoringEngine};
use super::session::{QuizOutcome, Session, Step};

pub const NAME_PROMPT: &str = "Please tell me your name to get started.";
pub const ENGLISH_PROMPT: &str = "How fluent are you in English?";
pub const BUTTON_NUDGE: &str = "Please tap one of the buttons below.";
pub const RESTART_LABEL: &str = "Restart";

/// Drives a session through name, field, English level, the 25 questions, and results.
#[derive(Debug, Clone)]
pub struct DialogueEngine {
    scoring: ScoringEngine,
    advisor: Arc<dyn AdvisorGateway>,
    reports: Arc<dyn ReportStore>,
}

impl DialogueEngine {
    pub fn new(advisor: Arc<dyn AdvisorGateway>, reports: Arc<dyn ReportStore>) -> Self {
        Self {
            scoring: ScoringEngine::default(),
            advisor,
            reports,
        }
    }

    /// Applies one user turn. Only finalization can fail, and only when the report
    /// cannot be rendered or stored.
    pub fn advance(&self, session: &mut Session, input: &str) -> Result<(), ReportError> {
        let input = input.trim();

        match session.step {
            Step::Name => {
                self.on_name(session, input);
                Ok(())
            }
            Step::Field => {
                session.record_user(input);
                self.on_field(session, input);
                Ok(())
            }
            Step::English => {
                session.record_user(input);
                self.on_english(session, input);
                Ok(())
            }
            Step::Quiz => {
                session.record_user(input);
                self.on_answer(session, input)
            }
            Step::Restart => {
                session.reset();
                Ok(())
            }
        }
    }

    fn on_name(&self, session: &mut Session, input: &str) {
        if input.is_empty() {
            session.offer(NAME_PROMPT, Vec::new());
            return;
        }

        session.record_user(input);
        session.name = input.to_string();
        session.offer(
            format!("Nice to meet you, {input}! Pick a career field:"),
            career_field_labels(),
        );
        session.step = Step::Field;
    }

    // Any text is kept verbatim; the buttons only suggest the known fields.
    fn on_field(&self, session: &mut Session, input: &str) {
        session.field = input.to_string();
        session.offer(ENGLISH_PROMPT, english_level_labels());
        session.step = Step::English;
    }

    fn on_english(&self, session: &mut Session, input: &str) {
        let Some(level) = EnglishLevel::parse(input) else {
            session.offer(
                format!("{BUTTON_NUDGE} {ENGLISH_PROMPT}"),
                english_level_labels(),
            );
            return;
        };

        session.english = level;
        session.step = Step::Quiz;
        session.question_index = 0;
        present_question(session);
    }

    fn on_answer(&self, session: &mut Session, input: &str) -> Result<(), ReportError> {
        let Some(question) = session.current_question() else {
            return self.finalize(session);
        };

        let Some(points) = question.option_rank(input).and_then(points_for_rank) else {
            session.offer(
                format!("{BUTTON_NUDGE} {}", question_prompt(session.question_index)),
                question.option_labels(),
            );
            return Ok(());
        };

        session.scores.award(question.skill, points);
        session.question_index += 1;

        if session.question_index < QUESTION_COUNT {
            present_question(session);
            Ok(())
        } else {
            self.finalize(session)
        }
    }

    fn finalize(&self, session: &mut Session) -> Result<(), ReportError> {
        let result = self.scoring.evaluate(session);
        let advice = advice_or_fallback(self.advisor.as_ref(), &result.advisory_prompt());

        let document = ReportDocument::from_result(&session.name, &result, &advice);
        let pdf = render_pdf(&document)?;
        let report = self.reports.store(&pdf)?;

        tracing::info!(
            personality = result.personality.label(),
            stream = result.stream.label(),
            report = %report.file_name,
            "quiz completed"
        );

        session.offer(
            results_message(&result, &advice, &report),
            vec![RESTART_LABEL.to_string()],
        );
        session.step = Step::Restart;
        session.show_footer = true;
        session.outcome = Some(QuizOutcome {
            result,
            advice,
            report,
        });
        Ok(())
    }
}

fn question_prompt(index: usize) -> String {
    format!("Q{}. {}", index + 1, QUESTIONS[index].prompt)
}

fn present_question(session: &mut Session) {
    let index = session.question_index;
    session.offer(question_prompt(index), QUESTIONS[index].option_labels());
}

fn results_message(result: &QuizResult, advice: &str, report: &ReportArtifact) -> String {
    let mut message = String::from("Results\n");
    for (skill, level) in result.levels.iter() {
        let _ = writeln!(message, "{}: {level}/5", skill.label());
    }

    message.push_str("\nTop Career Matches\n");
    for fit in result.top_matches() {
        let _ = writeln!(message, "{} \u{2013} {}%", fit.field, fit.percentage);
    }

    let _ = write!(
        message,
        "\nSuggested Stream: {}\nPersonality: {}\n\n{advice}\n\nDownload your report: {}",
        result.stream.label(),
        result.personality.label(),
        report.url
    );
    message
}
