//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gradepulse_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use gradepulse_core::Gradebook;

fn main() {
    let mut book = Gradebook::new();
    book.set_desired_cgpa("9.0");
    book.set_next_sem_credits("19");

    let semester = book.semester_stats();
    let overall = book.overall_stats();

    println!("gradepulse_core version={}", gradepulse_core::core_version());
    println!(
        "semester credits={} sgpa={:.2}",
        semester.total_credits, semester.sgpa
    );
    println!(
        "overall credits={} cgpa={:.2}",
        overall.total_credits, overall.cgpa
    );
    match book.required_next_term_sgpa() {
        Some(outcome) => println!("required next-term sgpa for 9.0 over 19 credits: {outcome}"),
        None => println!("required next-term sgpa: undefined"),
    }
}
