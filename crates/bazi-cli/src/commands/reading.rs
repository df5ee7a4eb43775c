use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde_json::json;

use bazi_core::SexagenaryCalendar;
use bazi_core::element::element_symbol;
use bazi_oracle::{
    ReadingConfig, ReadingOutcome, VerificationQuestion, YearLevel, conclude, generate_questions,
};

/// One line of user input to a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reply {
    Yes,
    No,
    Skip,
    Unrecognized,
}

impl Reply {
    fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "" => Self::Skip,
            "y" | "yes" | "是" => Self::Yes,
            "n" | "no" | "否" => Self::No,
            _ => Self::Unrecognized,
        }
    }
}

pub fn run(
    date: &str,
    time: &str,
    on: Option<&str>,
    years: u32,
    json: bool,
) -> Result<(), String> {
    let chart = super::load_chart(date, time)?;
    let today = super::context_date(on)?;
    let questions = generate_questions(&chart, today);

    let stdin = io::stdin();
    let answers = ask(&questions, &mut stdin.lock())?;

    let config = ReadingConfig::default().with_horizon(years);
    let outcome = conclude(
        &chart,
        &questions,
        &answers,
        &SexagenaryCalendar::new(),
        &config,
        today,
    );

    if json {
        let report = json!({
            "chart": chart,
            "pastReview": outcome.past_review,
            "future": outcome.future,
        });
        println!("{}", super::to_json(&report)?);
        return Ok(());
    }

    print_report(&outcome);
    Ok(())
}

/// Prompt for each question on stderr; stops at end of input.
fn ask<R: BufRead>(
    questions: &[VerificationQuestion],
    reader: &mut R,
) -> Result<HashMap<String, bool>, String> {
    let mut answers = HashMap::new();
    let mut line = String::new();
    let total = questions.len();

    'questions: for (i, q) in questions.iter().enumerate() {
        loop {
            eprint!("  [{}/{total}] {} (y/n, Enter to skip): ", i + 1, q.text);
            io::stderr().flush().map_err(|e| e.to_string())?;

            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => {
                    eprintln!();
                    break 'questions; // EOF
                }
                Err(e) => return Err(e.to_string()),
                _ => {}
            }

            match Reply::parse(&line) {
                Reply::Yes => {
                    answers.insert(q.id.clone(), true);
                    break;
                }
                Reply::No => {
                    answers.insert(q.id.clone(), false);
                    break;
                }
                Reply::Skip => break,
                Reply::Unrecognized => eprintln!("  {}", "please answer y or n".yellow()),
            }
        }
    }

    Ok(answers)
}

fn print_report(outcome: &ReadingOutcome) {
    let review = &outcome.past_review;
    let future = &outcome.future;

    println!();
    println!("  {}", "Past review".bold());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Question", "Expected", "Yours", "Match"]);
    for item in &review.items {
        table.add_row(vec![
            item.question.clone(),
            yes_no(item.expected_yes).to_string(),
            yes_no(item.your_answer).to_string(),
            if item.matched { "✓" } else { "✗" }.to_string(),
        ]);
    }
    println!("{table}");
    println!(
        "  answered {}/{}, matched {}, score {:.3}",
        review.answered, review.total, review.matched, review.match_score
    );
    println!();

    let summary = &future.summary;
    println!(
        "  {} confidence {} | 日主 {} {}",
        "Fortune".bold(),
        future.confidence,
        element_symbol(summary.day_master_element),
        summary.day_master_strength
    );
    for line in &summary.focus {
        println!("  • {line}");
    }
    for tip in &summary.tips {
        println!("  → {tip}");
    }
    println!();

    let mut timeline = Table::new();
    timeline.set_content_arrangement(ContentArrangement::Dynamic);
    timeline.set_header(vec!["Year", "五行", "Level", "Advice"]);
    for year in &future.timeline {
        let level = match year.level {
            YearLevel::Favorable => year.level.label().green().to_string(),
            YearLevel::Conservative => year.level.label().yellow().to_string(),
            YearLevel::Neutral => year.level.label().to_string(),
        };
        timeline.add_row(vec![
            year.year.to_string(),
            element_symbol(year.year_element).to_string(),
            level,
            year.advice.clone(),
        ]);
    }
    println!("{timeline}");
    println!();
    println!("  {}", future.note.dimmed());
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
