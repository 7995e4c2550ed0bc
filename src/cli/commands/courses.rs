//! Courses command handler

use crate::args::CoursesSubcommand;
use logger::verbose;
use registrar::config::Config;
use registrar::core::admin::AdminRecords;
use registrar::core::models::Course;
use registrar::core::repository::{CourseStore, FileCourseRepository};

/// Dispatch courses subcommands
pub fn run(subcommand: CoursesSubcommand, config: &Config) {
    let paths = config.store_paths();
    let mut repo = FileCourseRepository::new(&paths);

    match subcommand {
        CoursesSubcommand::List => match repo.load_all() {
            Ok(courses) => {
                for course in &courses {
                    println!("{course}");
                }
                println!(
                    "✓ {} course(s) in {}",
                    courses.len(),
                    repo.courses_dir().display()
                );
            }
            Err(e) => fail(&e),
        },
        CoursesSubcommand::Show { crn } => match repo.find(&crn) {
            Ok(Some(course)) => print_details(&course),
            Ok(None) => {
                eprintln!("✗ No course with CRN {crn}");
                std::process::exit(1);
            }
            Err(e) => fail(&e),
        },
        CoursesSubcommand::Add {
            crn,
            name,
            time,
            credits,
            professor,
        } => {
            let course = match Course::new(crn, name, time, credits, professor) {
                Ok(course) => course,
                Err(e) => fail(&e),
            };

            let records = AdminRecords::new(&paths);
            if records.record_exists(course.crn()) {
                eprintln!("✗ A course with CRN {} already exists", course.crn());
                std::process::exit(1);
            }
            match records.register_course(&course) {
                Ok(path) => {
                    println!("✓ Registered {} ({})", course.name, course.crn());
                    verbose!("Course file written to {}", path.display());
                }
                Err(e) => fail(&e),
            }
        }
    }
}

fn print_details(course: &Course) {
    println!("CRN:       {}", course.crn());
    println!("Course:    {}", course.name);
    println!("Time:      {}", course.time);
    println!("Credits:   {}", course.credits());
    println!("Professor: {}", course.professor);
    println!("Students ({}):", course.students().len());
    for student in course.students() {
        println!("  {student}");
    }
}

fn fail(err: &dyn std::error::Error) -> ! {
    eprintln!("✗ {err}");
    std::process::exit(1);
}
