//! flowprint - behavioral questionnaire scoring CLI
//!
//! Scores an answers file against the questionnaire catalog and renders the
//! resulting profile.

use anyhow::{Context, Result};
use clap::Parser;
use flowprint_core::{load_catalog, score_answers, Answer, Catalog, Config, Profile};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flowprint")]
#[command(about = "Flowprint - score a questionnaire into a behavioral profile")]
#[command(version)]
struct Args {
    /// Path to an answers JSON file: [{"slot": "ER-1", "token": "Agree"}, ...]
    #[arg(long)]
    answers: Option<PathBuf>,

    /// Catalog data directory (overrides config and FLOWPRINT_DATA_PATH)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Validate the catalog and print its summary instead of scoring
    #[arg(long)]
    check: bool,

    /// Export format (md = markdown, json = JSON)
    #[arg(long)]
    export: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = flowprint_core::logging::init(&config.logging).ok();

    let data_dir = args.data_dir.clone().unwrap_or_else(|| config.data_path());
    let catalog = load_catalog(&data_dir)
        .with_context(|| format!("failed to load catalog from {}", data_dir.display()))?;

    if args.check {
        print_catalog_summary(&catalog, &data_dir);
        return Ok(());
    }

    let answers_path = args
        .answers
        .as_ref()
        .context("provide --answers <file>, or --check to validate the catalog")?;
    let content = std::fs::read_to_string(answers_path)
        .with_context(|| format!("failed to read {}", answers_path.display()))?;
    let answers: Vec<Answer> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", answers_path.display()))?;

    let profile = score_answers(&catalog, &answers);

    match args.export.as_deref() {
        Some("json") => print_json(&profile)?,
        Some("md") => print_markdown(&profile),
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other),
        None => print_terminal(&profile),
    }

    Ok(())
}

fn print_catalog_summary(catalog: &Catalog, data_dir: &PathBuf) {
    println!("Catalog at {} is valid.", data_dir.display());
    println!();
    println!(
        "  {} categories, {} questions, {} sub-styles",
        catalog.categories().len(),
        catalog.questions().count(),
        catalog.all_sub_styles().count()
    );
    println!();
    for category in catalog.categories() {
        let styles = catalog.sub_styles_of(category);
        println!("  {:<22} {}", category, styles.join(", "));
    }
}

fn print_terminal(profile: &Profile) {
    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", "YOUR FLOWPRINT");
    println!("╰{}╯", "─".repeat(60));
    println!();

    println!("  {}", profile.headline);
    println!("  \"{}\"", profile.signature);
    println!();

    println!("HEADLINE RESULTS");
    println!("   Driver:      {}", profile.driver);
    println!("   Creation:    {}", profile.creation);
    println!("   Growth edge: {}", profile.growth_edge);
    println!();

    println!("CATEGORIES");
    for (category, bar) in &profile.category_bars {
        let dominant = bar.dominant_sub_style.as_deref().unwrap_or("—");
        let strength = profile
            .category_strengths
            .get(category)
            .copied()
            .unwrap_or(0.0);
        println!("   {:<22} {:<16} strength {:.2}", category, dominant, strength);
    }
    println!();

    let mut scored: Vec<(&String, &u32)> = profile
        .sub_style_scores
        .iter()
        .filter(|&(_, &count)| count > 0)
        .collect();
    scored.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    if !scored.is_empty() {
        println!("TOP SUB-STYLES");
        for (name, count) in scored.iter().take(5) {
            println!("   {:<22} {}", name, count);
        }
        println!();
    }

    println!(
        "   Computed {}",
        profile.timestamp.format("%Y-%m-%d %H:%M UTC")
    );
    println!();
}

fn print_markdown(profile: &Profile) {
    println!("# {}", profile.headline);
    println!();
    println!("*\"{}\"*", profile.signature);
    println!();

    println!("## Headline Results");
    println!();
    println!("| Result | Value |");
    println!("|--------|-------|");
    println!("| Driver | {} |", profile.driver);
    println!("| Creation | {} |", profile.creation);
    println!("| Growth edge | {} |", profile.growth_edge);
    println!();

    println!("## Categories");
    println!();
    println!("| Category | Dominant sub-style | Strength |");
    println!("|----------|--------------------|----------|");
    for (category, bar) in &profile.category_bars {
        let dominant = bar.dominant_sub_style.as_deref().unwrap_or("—");
        let strength = profile
            .category_strengths
            .get(category)
            .copied()
            .unwrap_or(0.0);
        println!("| {} | {} | {:.2} |", category, dominant, strength);
    }
    println!();

    println!("---");
    println!("*Computed {}*", profile.timestamp.to_rfc3339());
}

fn print_json(profile: &Profile) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(profile)?);
    Ok(())
}
