use comfy_table::{ContentArrangement, Table};
use serde_json::json;

use bazi_oracle::generate_questions;

pub fn run(date: &str, time: &str, on: Option<&str>, json: bool) -> Result<(), String> {
    let chart = super::load_chart(date, time)?;
    let day = super::context_date(on)?;
    let questions = generate_questions(&chart, day);

    if json {
        let views: Vec<_> = questions
            .iter()
            .map(|q| json!({ "id": q.id, "text": q.text }))
            .collect();
        println!("{}", super::to_json(&views)?);
        return Ok(());
    }

    println!("  Questions for {} on {day}", chart.key());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "ID", "Question"]);
    for (i, q) in questions.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), q.id.clone(), q.text.clone()]);
    }
    println!("{table}");

    Ok(())
}
