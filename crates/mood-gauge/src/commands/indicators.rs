//! Indicators command: print the weighted lexicon.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use mood_gauge_core::lexicon::{self, IndicatorSummary, Polarity};

/// Arguments for the `indicators` subcommand.
#[derive(Args, Debug, Default)]
pub struct IndicatorsArgs {
    /// Only list rules of this polarity.
    #[arg(long, value_enum, ignore_case = true)]
    pub polarity: Option<Polarity>,
}

/// List indicator rules in evaluation order.
#[instrument(name = "cmd_indicators", skip_all)]
pub fn cmd_indicators(args: IndicatorsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(polarity = ?args.polarity, "executing indicators command");

    let rules = selected(args.polarity);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    for rule in &rules {
        let weight = format!("{:+.1}", rule.weight);
        let weight = match rule.polarity {
            Polarity::Negative => weight.red().to_string(),
            Polarity::Positive => weight.green().to_string(),
        };
        println!("{:<20} {}", rule.theme.as_str().bold(), weight);
        println!("    {}", rule.alternatives.join(", ").dimmed());
    }

    Ok(())
}

fn selected(polarity: Option<Polarity>) -> Vec<IndicatorSummary> {
    lexicon::all_indicators()
        .filter(|rule| polarity.is_none_or(|p| rule.polarity == p))
        .map(lexicon::IndicatorRule::summary)
        .collect()
}
