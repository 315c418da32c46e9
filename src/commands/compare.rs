//! Side-by-side comparison of two to five names.

use super::{OutputFormat, to_json};
use crate::compare::{
    Comparison, FelicitationsEntry, PairwiseComparison, RankedEntry, felicitations_ranking,
    pairwise_differences,
};
use crate::context::AppContext;
use crate::error::Result;
use crate::format::{capitalize_first_name, format_percentage_precise};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Serialize)]
struct CompareReport<'a> {
    ranking: Vec<RankedEntry<'a>>,
    felicitations: Vec<FelicitationsEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    head_to_head: Option<PairwiseComparison<'a>>,
}

/// Rank the given names by score and show how they differ.
pub async fn handle_compare(
    ctx: &AppContext,
    names: &[String],
    format: OutputFormat,
) -> Result<String> {
    let mut comparison = Comparison::new();
    for name in names {
        let record = ctx.find_name(name).await?;
        comparison.add(record)?;
    }

    let records = comparison.records();
    let report = CompareReport {
        ranking: comparison.ranked(),
        felicitations: felicitations_ranking(records),
        head_to_head: pairwise_differences(records),
    };

    if format == OutputFormat::Json {
        return to_json(&report);
    }

    let mut output = String::new();
    let _ = writeln!(output, "Scores moyens:");
    for entry in &report.ranking {
        let _ = writeln!(
            output,
            "  {}. {:<20} {:.1}/10  {}",
            entry.rank,
            capitalize_first_name(&entry.record.firstname),
            entry.score,
            entry.color.hex()
        );
    }

    let _ = writeln!(output, "\nTB+ (Félicitations du jury):");
    for entry in &report.felicitations {
        let crown = if entry.crowned { " 👑" } else { "" };
        let _ = writeln!(
            output,
            "  {}. {:<20} {:.1}%{}",
            entry.rank,
            capitalize_first_name(&entry.record.firstname),
            entry.fel_pct,
            crown
        );
    }

    if let Some(pair) = &report.head_to_head {
        let _ = writeln!(
            output,
            "\nDifférences principales ({} vs {}, écart {:.2}):",
            capitalize_first_name(&pair.better.firstname),
            capitalize_first_name(&pair.worse.firstname),
            pair.score_gap
        );
        for difference in &pair.differences {
            let marker = if difference.favors_better() { "+" } else { " " };
            let _ = writeln!(
                output,
                "  {} {:<30} {:>6} vs {:>6}",
                marker,
                difference.mention.label(),
                format_percentage_precise(difference.better),
                format_percentage_precise(difference.worse)
            );
        }
    }
    Ok(output)
}
