//! Display functions for command results

use super::formatters::{encode_letters, render_grid};
use super::records::AnyRecord;
use crate::commands::{GenerateResult, ScrambleResult};
use crate::generator::Waffle;
use crate::scrambler::PuzzleInstance;
use colored::Colorize;

/// Number of sample puzzles printed after a scramble run
const SAMPLE_COUNT: usize = 3;

/// Print one solved waffle with its words
pub fn print_waffle(number: usize, waffle: &Waffle) {
    let across: Vec<&str> = waffle.assignment.across().iter().map(|w| w.text()).collect();
    let down: Vec<&str> = waffle.assignment.down().iter().map(|w| w.text()).collect();

    println!(
        "\n{} across={} down={}",
        format!("Waffle #{number}").bright_cyan().bold(),
        across.join(",").bright_yellow(),
        down.join(",").bright_yellow()
    );
    print!("{}", render_grid(&waffle.grid, &[]));
}

/// Print a scrambled puzzle, hints highlighted
pub fn print_puzzle(number: usize, puzzle: &PuzzleInstance) {
    println!("\n{}", format!("Puzzle #{number}").bright_cyan().bold());
    println!("  Target:   {}", puzzle.target().to_string().green());
    println!("  Shuffled: {}", puzzle.shuffled().to_string().yellow());
    println!("  Fixed positions: {:?}", puzzle.fixed_indices());
    println!("  Misplaced: {}", puzzle.misplaced());
    print!("{}", render_grid(&puzzle.shuffled_grid(), puzzle.fixed_indices()));
}

/// Print the summary of a generation run
pub fn print_generate_result(result: &GenerateResult) {
    let report = &result.report;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Run:".bright_cyan().bold());
    println!("   Word list:        {} words", result.word_count);
    println!("   Seed:             {}", result.seed);
    println!(
        "   Waffles:          {}",
        format!("{}/{}", report.waffles.len(), report.requested)
            .bright_yellow()
            .bold()
    );
    println!("   Tries:            {}", report.tries);
    if report.duplicates > 0 {
        println!("   Repeats skipped:  {}", report.duplicates);
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Output:           {}", result.output.display());

    for (i, waffle) in report.waffles.iter().take(SAMPLE_COUNT).enumerate() {
        print_waffle(i + 1, waffle);
    }

    println!();
    if report.is_complete() {
        println!("{}", "✅ All requested waffles generated".green().bold());
    } else {
        println!(
            "{}",
            format!(
                "⚠️  Shortfall: {} waffles not found within {} tries",
                report.shortfall(),
                report.tries
            )
            .yellow()
            .bold()
        );
    }
}

/// Print the summary of a scramble run
pub fn print_scramble_result(result: &ScrambleResult) {
    println!(
        "\nLoaded {} solved waffles from {}",
        result.puzzles.len(),
        result.input.display()
    );

    for (i, puzzle) in result.puzzles.iter().take(SAMPLE_COUNT).enumerate() {
        print_puzzle(i + 1, puzzle);
    }

    println!("\nSeed: {}", result.seed);
    println!("Fixed letters per puzzle: {}", result.fixed_count);
    if result.unscrambled > 0 {
        println!(
            "{}",
            format!(
                "⚠️  {} puzzles could not be scrambled away from their solution",
                result.unscrambled
            )
            .yellow()
        );
    }
    println!(
        "{}",
        format!("✅ Saved shuffled puzzles to {}", result.output.display())
            .green()
            .bold()
    );
}

/// Print records loaded from a file
///
/// With `encode`, flat letters are also shown as integers (`a` = 1).
pub fn print_records(records: &[AnyRecord], encode: bool) {
    for (i, record) in records.iter().enumerate() {
        match record {
            AnyRecord::Solved(solved) => {
                println!(
                    "\n{} across={} down={}",
                    format!("Waffle #{}", i + 1).bright_cyan().bold(),
                    solved.across.join(",").bright_yellow(),
                    solved.down.join(",").bright_yellow()
                );
                print!("{}", render_grid(&solved.grid, &[]));
                if encode {
                    println!("  Codes: {:?}", encode_letters(&solved.flat21));
                }
            }
            AnyRecord::Scrambled(scrambled) => {
                if let Ok(puzzle) = scrambled.to_puzzle() {
                    print_puzzle(i + 1, &puzzle);
                }
                if encode {
                    println!("  Target codes:   {:?}", encode_letters(&scrambled.target_flat21));
                    println!("  Shuffled codes: {:?}", encode_letters(&scrambled.shuffled_flat21));
                }
            }
        }
    }
}
