use crate::infra::InMemorySessionRepository;
use careerbot::config::AppConfig;
use careerbot::error::AppError;
use careerbot::workflows::guidance::catalog::QUESTION_COUNT;
use careerbot::workflows::guidance::{
    gateway_from_config, AdvisorGateway, FsReportStore, GuidanceService, OfflineAdvisor,
    QuizOutcome, Speaker, TranscriptEntry, QUESTIONS,
};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Name given at the first prompt
    #[arg(long, default_value = "Alex")]
    pub(crate) name: String,
    /// Career field of interest
    #[arg(long, default_value = "Software/IT Field")]
    pub(crate) field: String,
    /// English level (Excellent, Good, Average, Poor)
    #[arg(long, default_value = "Good")]
    pub(crate) english: String,
    /// Option position used for every answer, 0 being the strongest
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub(crate) answer_rank: u8,
    /// Skip the advisor and use the offline placeholder text
    #[arg(long)]
    pub(crate) offline: bool,
    /// Write the report here instead of the configured reports directory
    #[arg(long)]
    pub(crate) reports_dir: Option<PathBuf>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let directory = args
        .reports_dir
        .clone()
        .unwrap_or_else(|| config.reports.directory.clone());

    let advisor: Arc<dyn AdvisorGateway> = if args.offline {
        Arc::new(OfflineAdvisor)
    } else {
        Arc::from(gateway_from_config(&config.advisor))
    };
    let service = GuidanceService::new(
        Arc::new(InMemorySessionRepository::default()),
        advisor,
        Arc::new(FsReportStore::new(directory.clone(), &config.reports.url_prefix)),
        config.sessions.idle_ttl,
    );

    println!("Career guidance demo");
    let conversation = service.open(None)?;
    let id = conversation.id;
    let mut printed = print_new_entries(&conversation.session.transcript, 0);

    let rank = usize::from(args.answer_rank);
    let intro = [args.name.as_str(), args.field.as_str(), args.english.as_str()];
    let answers = QUESTIONS.iter().map(|question| question.options[rank]);

    let mut session = conversation.session;
    for input in intro.into_iter().chain(answers) {
        session = service.respond(Some(&id), input)?.session;
        printed = print_new_entries(&session.transcript, printed);
    }

    match &session.outcome {
        Some(outcome) => render_outcome(outcome, &directory),
        None => println!(
            "\nQuiz stopped at question {} of {QUESTION_COUNT}; check the name, field, and English inputs.",
            session.question_index + 1
        ),
    }
    Ok(())
}

pub(crate) fn print_question_bank() {
    for (index, question) in QUESTIONS.iter().enumerate() {
        println!("Q{}. [{}] {}", index + 1, question.skill.label(), question.prompt);
        for (rank, option) in question.options.iter().enumerate() {
            println!("    {} ({} pts) {}", rank + 1, 4 - rank, option);
        }
    }
}

fn print_new_entries(transcript: &[TranscriptEntry], already_printed: usize) -> usize {
    for entry in transcript.iter().skip(already_printed) {
        let speaker = match entry.speaker {
            Speaker::Bot => "bot",
            Speaker::User => "you",
        };
        for (index, line) in entry.message.lines().enumerate() {
            if index == 0 {
                println!("{speaker:>4}: {line}");
            } else {
                println!("      {line}");
            }
        }
    }
    transcript.len()
}

fn render_outcome(outcome: &QuizOutcome, directory: &std::path::Path) {
    let result = &outcome.result;
    println!("\nSummary");
    println!("  Skill levels: {}", result.levels);
    println!("  Personality: {}", result.personality.label());
    println!("  Stream: {}", result.stream.label());
    println!("  Report file: {}", directory.join(&outcome.report.file_name).display());
}
