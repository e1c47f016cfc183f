//! Display functions for command results

use super::formatters::{create_progress_bar, length_glyph};
use crate::commands::{CheckResult, SolutionsResult};
use crate::game::SubmitOutcome;
use colored::Colorize;

/// Print the outcome of every submission in a check run
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        match &step.outcome {
            SubmitOutcome::Accepted(word) => println!(
                "  {} {:<12} {}",
                "✓".green().bold(),
                word,
                length_glyph(word.chars().count())
            ),
            SubmitOutcome::Rejected(rejection) => println!(
                "  {} {:<12} {} - {}",
                "✗".red().bold(),
                step.candidate.trim(),
                rejection.title().red(),
                rejection.message()
            ),
            SubmitOutcome::Ignored => println!(
                "  {} {:<12} {}",
                "·".bright_black(),
                format!("{:?}", step.candidate),
                "ignored (blank)".bright_black()
            ),
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} accepted, {} rejected",
            result.accepted.len(),
            result.rejected_count()
        )
        .bold()
    );
}

/// Print every word a root can make, grouped by length
pub fn print_solutions_result(result: &SolutionsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\nNo words can be made from this root.");
        return;
    }

    println!("\n📊 {}", "Distribution:".bright_cyan().bold());
    let most = result.by_length.values().copied().max().unwrap_or(0);
    for (&length, &count) in result.by_length.iter().rev() {
        let bar = create_progress_bar(count, most, 30);
        println!("   {} {} {count:4}", length_glyph(length), bar.green());
    }

    println!("\n📖 {}", "Words:".bright_cyan().bold());
    for word in &result.words {
        println!("   {} {word}", length_glyph(word.chars().count()));
    }

    println!(
        "\n{} words in total",
        result.words.len().to_string().bright_yellow().bold()
    );
}
