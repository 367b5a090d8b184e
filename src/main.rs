//! voces-calma CLI: tag wellness stories with emotions and summarize batches.
//!
//! Usage:
//!   voces-calma detect "I feel so overwhelmed by family expectations"
//!   voces-calma batch --file stories.csv --column story
//!   voces-calma recommend anxiety --top 2
//!   voces-calma sanitize "email me at someone@example.com"

use anyhow::Result;
use clap::{Parser, Subcommand};
use prettytable::{Table, row};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use voces_calma::config::{Config, RuntimeConfig};
use voces_calma::{Emotion, EmotionEngine, Language, display_label, ingest, privacy, recommend};

#[derive(Parser)]
#[command(name = "voces-calma")]
#[command(about = "Emotion tagging and analytics for anonymous wellness stories", long_about = None)]
struct Cli {
    /// Language for display labels (en, es)
    #[arg(long, global = true, default_value = "en")]
    lang: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the emotion of a single story
    Detect {
        text: String,
        /// Strip personal identifiers before analysis
        #[arg(long)]
        sanitize: bool,
    },
    /// Summarize the emotions of many stories
    Batch {
        /// CSV export or text file with one story per line
        #[arg(long)]
        file: PathBuf,
        /// CSV column holding the story text
        #[arg(long)]
        column: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List support types for an emotion label
    Recommend {
        label: String,
        #[arg(long)]
        top: Option<usize>,
    },
    /// Remove personal identifiers from a story
    Sanitize { text: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    voces_calma::load_env();
    let runtime = RuntimeConfig::load_from_env();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&runtime.log_level))
        .with_writer(std::io::stderr)
        .init();

    let lang: Language = cli.lang.parse().map_err(anyhow::Error::msg)?;

    match cli.command {
        Commands::Detect { text, sanitize } => {
            let config = Config::load()?;
            let engine = EmotionEngine::with_config(config.engine.clone());
            detect(&engine, &config, &text, sanitize, lang)
        }
        Commands::Batch { file, column, json } => {
            let config = Config::load()?;
            let engine = EmotionEngine::with_config(config.engine);
            batch(&engine, &file, column.as_deref(), json, lang)
        }
        Commands::Recommend { label, top } => {
            let options = recommend(&label);
            let n = top.unwrap_or(options.len()).min(options.len());
            println!("{}", display_label(&label, lang));
            for (i, option) in options[..n].iter().enumerate() {
                println!("  {}. {}", i + 1, option);
            }
            Ok(())
        }
        Commands::Sanitize { text } => {
            let (cleaned, mut warnings) = privacy::sanitize(&text);
            if let Some(w) = privacy::check_for_names(&cleaned) {
                warnings.push(w);
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "cleaned": cleaned,
                    "warnings": warnings,
                }))?
            );
            Ok(())
        }
    }
}

fn detect(
    engine: &EmotionEngine,
    config: &Config,
    text: &str,
    sanitize: bool,
    lang: Language,
) -> Result<()> {
    if let Err(e) = privacy::validate_story_length(text, &config.privacy) {
        tracing::warn!("{}", e);
    }
    let (text, warnings) = if sanitize {
        privacy::sanitize(text)
    } else {
        (text.to_string(), Vec::new())
    };

    let summary = engine.summarize_text(&text);
    let label = summary.primary_label.as_str();
    let support: Vec<&str> = recommend(label).iter().take(2).copied().collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "display": display_label(label, lang),
            "analysis": summary,
            "recommended_support": support,
            "privacy_warnings": warnings,
        }))?
    );
    Ok(())
}

fn batch(
    engine: &EmotionEngine,
    file: &std::path::Path,
    column: Option<&str>,
    as_json: bool,
    lang: Language,
) -> Result<()> {
    let stories = ingest::load_stories(file, column)?;
    info!("Analyzing {} stories from {}", stories.len(), file.display());

    let summary = engine.analyze_batch(&stories);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["Emotion", "Count", "Share %"]);
    let mut rows: Vec<(Emotion, usize)> = summary.distribution.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    for (emotion, count) in rows {
        table.add_row(row![
            display_label(emotion.as_str(), lang),
            count,
            format!("{:.1}", summary.share(emotion))
        ]);
    }
    table.printstd();

    println!("Total stories: {}", summary.total_items);
    println!("Average confidence: {:.2}", summary.average_confidence);
    match summary.most_common_label {
        Some(top) => println!("Most common: {}", display_label(top.as_str(), lang)),
        None => println!("Most common: n/a"),
    }
    Ok(())
}
