use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use bazi_core::element::element_symbol;

pub fn run(date: &str, time: &str, json: bool) -> Result<(), String> {
    let chart = super::load_chart(date, time)?;

    if json {
        println!("{}", super::to_json(&chart)?);
        return Ok(());
    }

    println!("  {} {}", "八字".bold(), chart.key());
    println!();

    let mut pillars = Table::new();
    pillars.set_content_arrangement(ContentArrangement::Dynamic);
    pillars.set_header(vec!["柱", "干支", "天干", "地支"]);
    for (kind, pillar) in chart.pillars.iter() {
        pillars.add_row(vec![
            kind.label().to_string(),
            pillar.text.clone(),
            format!("{} {}", pillar.gan, element_symbol(pillar.gan_element)),
            format!("{} {}", pillar.zhi, element_symbol(pillar.zhi_element)),
        ]);
    }
    println!("{pillars}");
    println!();

    let percent = &chart.five_elements.percent;
    let mut elements = Table::new();
    elements.set_content_arrangement(ContentArrangement::Dynamic);
    elements.set_header(vec!["五行", "數量", "比例"]);
    for (element, count) in chart.counts().iter() {
        elements.add_row(vec![
            element.to_string(),
            count.to_string(),
            format!("{:.1}%", percent.get(element)),
        ]);
    }
    println!("{elements}");
    println!();

    println!(
        "  日主: {} ({})",
        chart.day_master.gan.as_str().bold(),
        element_symbol(chart.day_master_element())
    );
    if chart.day_master_element().is_none() {
        println!("  {}", "day master element could not be resolved".dimmed());
    }

    Ok(())
}
