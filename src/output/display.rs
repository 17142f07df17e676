//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, feedback_to_emoji};
use crate::commands::{CheckResult, GeneratorStats, ScoreReport};
use colored::Colorize;

/// Print the result of checking a candidate equation
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Checking: {}", result.input.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    match &result.verdict {
        Ok(_) => {
            println!("\n{}", "✅ Valid equation".green().bold());
        }
        Err(reason) => {
            println!("\n{}", "❌ Not a valid equation".red().bold());
            println!("   {reason}");
        }
    }
}

/// Print a scored guess against a known target
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Target: {}", report.target.text().bright_yellow().bold());
    println!("Guess:  {}", report.guess.text().bright_white().bold());
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}  {}",
        colored_row(&report.guess, report.feedback),
        feedback_to_emoji(report.feedback)
    );
    println!(
        "\n  {} correct, {} misplaced",
        report.feedback.count_correct(),
        report.feedback.count_present()
    );

    if report.feedback.is_perfect() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print bulk generation statistics
pub fn print_generator_stats(stats: &GeneratorStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATOR STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Closure property:".bright_cyan().bold());
    println!("   Targets generated: {}", stats.total);
    if stats.invalid == 0 {
        println!("   Re-validated:      {}", "all passed".green().bold());
    } else {
        println!(
            "   Re-validated:      {}",
            format!("{} FAILED", stats.invalid).red().bold()
        );
    }
    println!(
        "   Throughput:        {:.0} targets/s ({:.2}s total)",
        stats.targets_per_second,
        stats.duration.as_secs_f64()
    );

    println!("\n📈 {}", "Operator mix:".bright_cyan().bold());
    let max_count = stats
        .operator_counts
        .values()
        .copied()
        .max()
        .unwrap_or(1)
        .max(1);
    for op in ['+', '-', '*', '/'] {
        let count = stats.operator_counts.get(&op).copied().unwrap_or(0);
        let pct = count as f64 / stats.total as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        println!("   {op}  {} {count:6} ({pct:5.1}%)", bar.green());
    }

    println!("\n🔢 {}", "Digit frequency:".bright_cyan().bold());
    let total_chars: usize = stats.char_counts.values().sum();
    for digit in '0'..='9' {
        let count = stats.char_counts.get(&digit).copied().unwrap_or(0);
        let pct = count as f64 / total_chars as f64 * 100.0;
        println!("   {digit}: {count:6} ({pct:4.1}%)");
    }
}
