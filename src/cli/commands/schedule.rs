//! Schedule command handler

use logger::{verbose, warn};
use registrar::config::Config;
use registrar::core::error::ScheduleError;
use registrar::core::models::{Semester, Student};
use registrar::core::review::{AcceptAll, PromptReviewer, Reviewer};
use registrar::core::schedule::{ScheduleBuilder, ScheduleOutcome, ScheduleRequest};

/// Arguments of the `schedule` subcommand
#[derive(Debug)]
pub struct ScheduleArgs {
    pub student_id: String,
    pub student_name: String,
    pub year: u16,
    pub semester: Semester,
    pub max_credits: Option<f32>,
    pub accept_all: bool,
}

/// Build, review, and commit one student's schedule
pub fn run(args: ScheduleArgs, config: &Config) {
    let max_credits = args.max_credits.unwrap_or(config.scheduling.max_credits);
    if !max_credits.is_finite() || max_credits < 0.0 {
        eprintln!("✗ Invalid credit cap: {max_credits}");
        std::process::exit(1);
    }

    let paths = config.store_paths();
    verbose!(
        "Courses from {}, transcript at {}",
        paths.courses_dir.display(),
        paths.transcripts_file.display()
    );

    let request = ScheduleRequest {
        student: Student::new(args.student_id, args.student_name),
        year: args.year,
        semester: args.semester,
        max_credits,
    };

    let mut accept = AcceptAll;
    let mut prompt = PromptReviewer::stdio();
    let reviewer: &mut dyn Reviewer = if args.accept_all {
        &mut accept
    } else {
        &mut prompt
    };

    let mut builder = ScheduleBuilder::from_paths(&paths);
    match builder.run(&request, reviewer) {
        Ok(outcome) => print_outcome(&request, &outcome),
        Err(e) => {
            eprintln!("✗ {e}");
            if let ScheduleError::Transcript {
                committed,
                failures,
                ..
            } = &e
            {
                for crn in committed {
                    eprintln!("  Enrolled: CRN {crn}");
                }
                for failure in failures {
                    eprintln!("✗ Not enrolled: {failure}");
                }
            }
            std::process::exit(1);
        }
    }
}

fn print_outcome(request: &ScheduleRequest, outcome: &ScheduleOutcome) {
    let report = outcome.report();
    println!(
        "✓ Scheduled {} course(s) for {} ({}) in {} {}: {} credits",
        report.committed().len(),
        request.student.name,
        request.student.id,
        request.semester,
        request.year,
        report.total_credits()
    );
    for course in report.committed() {
        println!("  {course}");
    }

    if !outcome.is_complete() {
        warn!(
            "Schedule for {} committed partially; failed: {}",
            request.student.id,
            report.failed_crns().join(", ")
        );
        for failure in report.failures() {
            eprintln!("✗ Not enrolled: {failure}");
        }
    }
}
