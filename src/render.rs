//! Output formatting for the command line.
use colored::Colorize;

use crate::number::FuzzyNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// compact JSON array of [value, grade] pairs
    #[default]
    Json,
    /// indented JSON
    Pretty,
    /// aligned table with a grade bar
    Table,
}

const BAR_WIDTH: usize = 20;

pub fn render(number: &FuzzyNumber, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(number),
        OutputFormat::Pretty => serde_json::to_string_pretty(number),
        OutputFormat::Table => Ok(render_table(number)),
    }
}

fn render_table(number: &FuzzyNumber) -> String {
    if number.is_empty() {
        return format!("{}\n", "(empty)".dimmed());
    }
    let width = number.support().map(|x| x.to_string().len()).max().unwrap_or(0);
    let mut out = String::new();
    for (x, grade) in number.iter() {
        let label = format!("{:>width$}", x.to_string());
        let label = if x.is_finite() { label.normal() } else { label.yellow() };
        let grade_text = if (0.0..=1.0).contains(&grade) {
            format!("{grade:.4}").normal()
        } else {
            format!("{grade:.4}").red()
        };
        out.push_str(&format!("{label}  {grade_text}  {}\n", bar(grade).cyan()));
    }
    out
}

fn bar(grade: f64) -> String {
    let filled = if grade.is_finite() {
        (grade.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    "█".repeat(filled)
}
