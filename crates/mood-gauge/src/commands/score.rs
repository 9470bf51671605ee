//! Score command: depression-indicator score for a text file.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use mood_gauge_core::config::Config;
use mood_gauge_core::scoring::ScoreBreakdown;
use mood_gauge_core::{Assessment, Band, SentimentJudgment, SentimentLabel};

use super::read_input_file;

/// Confidence assumed when a label is given without one.
const DEFAULT_CONFIDENCE: f64 = 1.0;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Text file to score (`-` reads stdin).
    pub file: Utf8PathBuf,

    /// Sentiment label from the classifier.
    #[arg(long, value_enum, ignore_case = true, conflicts_with = "sentiment")]
    pub label: Option<SentimentLabel>,

    /// Classifier confidence in [0, 1] (default: 1.0).
    #[arg(long, conflicts_with = "sentiment")]
    pub confidence: Option<f64>,

    /// Classifier output JSON (`{"label": "NEGATIVE", "score": 0.93}`).
    #[arg(long, value_name = "FILE")]
    pub sentiment: Option<Utf8PathBuf>,

    /// Show per-theme contributions.
    #[arg(long)]
    pub breakdown: bool,

    /// Fail when the normalized score is above this value.
    #[arg(long)]
    pub max_score: Option<f64>,
}

/// Score a file and print the result.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(
        file = %args.file,
        label = ?args.label,
        breakdown = args.breakdown,
        "executing score command"
    );

    let sentiment = resolve_sentiment(&args, config, max_input_bytes)?;
    let content = read_input_file(&args.file, max_input_bytes)?;
    let max_score = args.max_score.or(config.max_score);

    let assessment = Assessment::build(&content, &sentiment, args.breakdown);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print_assessment(&assessment);
    }

    if let Some(max) = max_score
        && assessment.depression_score > max
    {
        bail!(
            "{} scores {:.1} (max: {:.1})",
            args.file,
            assessment.depression_score,
            max,
        );
    }

    Ok(())
}

/// Sentiment from `--sentiment`, then `--label`/`--confidence`, then config.
fn resolve_sentiment(
    args: &ScoreArgs,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<SentimentJudgment> {
    if let Some(ref path) = args.sentiment {
        if path.as_str() == "-" && args.file.as_str() == "-" {
            bail!("stdin cannot supply both the text and --sentiment");
        }
        let doc = read_input_file(path, max_input_bytes)?;
        return SentimentJudgment::from_json(&doc)
            .with_context(|| format!("invalid sentiment in {path}"));
    }

    let Some(label) = args.label.or(config.default_label) else {
        bail!("no sentiment given. Pass --label or --sentiment, or set default_label in config");
    };
    let confidence = args
        .confidence
        .or(config.default_confidence)
        .unwrap_or(DEFAULT_CONFIDENCE);

    SentimentJudgment::new(label, confidence).context("invalid sentiment")
}

fn print_assessment(assessment: &Assessment) {
    let score = format!("{:.1}/25", assessment.depression_score);
    println!(
        "{} {}",
        colored_by_band(&score, assessment.band),
        assessment.band.as_str().dimmed()
    );
    println!("{}", assessment.interpretations);

    if let Some(ref breakdown) = assessment.breakdown {
        println!();
        print_breakdown(breakdown, &assessment.sentiment);
    }
}

fn print_breakdown(breakdown: &ScoreBreakdown, sentiment: &SentimentJudgment) {
    println!("{:<22} {:>8.2}", "baseline".dimmed(), breakdown.baseline);
    println!(
        "{:<22} {:>+8.2}",
        format!("sentiment {} {:.2}", sentiment.label(), sentiment.confidence()),
        breakdown.sentiment
    );
    for c in &breakdown.contributions {
        println!(
            "{:<22} {:>+8.2}  {}",
            c.theme.as_str(),
            c.contribution,
            format!("{} x {:+.1}", c.matches, c.weight).dimmed()
        );
    }
    println!("{:<22} {:>8.2}", "raw".bold(), breakdown.raw_score);
}

fn colored_by_band(text: &str, band: Band) -> String {
    match band {
        Band::Minimal => text.green().to_string(),
        Band::Mild => text.cyan().to_string(),
        Band::Moderate => text.yellow().to_string(),
        Band::ModeratelySevere | Band::Severe => text.red().bold().to_string(),
    }
}
