//! Dataset summary.

use super::{OutputFormat, to_json};
use crate::context::AppContext;
use crate::dataset::{DataStats, data_stats, top_by_count, top_by_rate};
use crate::error::Result;
use crate::format::{capitalize_first_name, format_percentage_precise, format_thousands};
use crate::record::{DatasetMetadata, Mention, NameRecord};
use crate::scoring::{RankingColor, ranking_color};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy)]
pub struct StatsRequest {
    pub top: usize,
    pub mention: Mention,
}

#[derive(Debug, Serialize)]
struct TopEntry {
    firstname: String,
    count: u64,
    rate: f64,
    color: RankingColor,
}

#[derive(Debug, Serialize)]
struct StatsReport {
    source: String,
    metadata: Option<DatasetMetadata>,
    dropped: usize,
    all: DataStats,
    search_view: usize,
    chart_view: usize,
    mention: Mention,
    top_by_count: Vec<TopEntry>,
    top_by_rate: Vec<TopEntry>,
}

/// Summarize the loaded dataset and its views.
pub async fn handle_stats(
    ctx: &AppContext,
    request: StatsRequest,
    format: OutputFormat,
) -> Result<String> {
    let dataset = ctx.loader().load().await?;
    let search = ctx.search_view().await?;
    let chart = ctx.chart_view().await?;

    let report = StatsReport {
        source: ctx.loader().source_location(),
        metadata: dataset.metadata().cloned(),
        dropped: dataset.dropped(),
        all: data_stats(dataset.records()),
        search_view: search.len(),
        chart_view: chart.len(),
        mention: request.mention,
        top_by_count: top_entries(top_by_count(&search, request.top), request.mention),
        top_by_rate: top_entries(
            top_by_rate(&chart, request.mention, request.top),
            request.mention,
        ),
    };

    if format == OutputFormat::Json {
        return to_json(&report);
    }

    let mut output = String::new();
    let _ = writeln!(output, "Dataset: {}", report.source);
    if let Some(metadata) = &report.metadata {
        let _ = writeln!(
            output,
            "Version {} generated {}",
            metadata.version, metadata.generated_at
        );
    }
    let all = &report.all;
    let _ = writeln!(
        output,
        "{} names, {} candidats ({} dropped)",
        format_thousands(all.total_names as u64),
        format_thousands(all.total_candidates),
        report.dropped
    );
    let _ = writeln!(
        output,
        "Candidats per name: avg {}, min {}, max {}; average TB rate {}%",
        all.avg_count, all.min_count, all.max_count, all.avg_tb_pct
    );
    let _ = writeln!(
        output,
        "Search view: {} names, chart view: {} names",
        report.search_view, report.chart_view
    );

    let _ = writeln!(output, "\nMost frequent:");
    for (position, entry) in report.top_by_count.iter().enumerate() {
        let _ = writeln!(
            output,
            "  {:>2}. {:<20} {}",
            position + 1,
            capitalize_first_name(&entry.firstname),
            format_thousands(entry.count)
        );
    }

    let _ = writeln!(output, "\nHighest {} rate (chart view):", report.mention.label());
    for (position, entry) in report.top_by_rate.iter().enumerate() {
        let _ = writeln!(
            output,
            "  {:>2}. {:<20} {:>6}  {}",
            position + 1,
            capitalize_first_name(&entry.firstname),
            format_percentage_precise(entry.rate),
            entry.color.hex()
        );
    }
    Ok(output)
}

fn top_entries(records: Vec<&NameRecord>, mention: Mention) -> Vec<TopEntry> {
    let total = records.len();
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| TopEntry {
            firstname: record.firstname.clone(),
            count: record.count,
            rate: record.rate(mention),
            color: ranking_color(position, total),
        })
        .collect()
}
