//! Search-as-you-type over the search view.

use super::{OutputFormat, to_json};
use crate::context::AppContext;
use crate::error::Result;
use crate::format::{capitalize_first_name, format_count};
use crate::scoring::{RankingCategory, score};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    /// Defaults to the configured maximum
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct SearchHit<'a> {
    firstname: &'a str,
    count: u64,
    score: f64,
    category: RankingCategory,
}

/// Find names matching a query, prefix matches first.
pub async fn handle_search(
    ctx: &AppContext,
    request: SearchRequest,
    format: OutputFormat,
) -> Result<String> {
    let index = ctx.index().await?;
    let limit = request.limit.unwrap_or(ctx.config().search.max_results);
    let results = index.search(&request.query, limit);

    let hits: Vec<SearchHit<'_>> = results
        .iter()
        .map(|record| {
            let score = score(record);
            SearchHit {
                firstname: &record.firstname,
                count: record.count,
                score,
                category: RankingCategory::from_score(score),
            }
        })
        .collect();

    if format == OutputFormat::Json {
        return to_json(&hits);
    }

    if hits.is_empty() {
        return Ok(format!("No names match '{}'.\n", request.query.trim()));
    }

    let mut output = String::new();
    let _ = writeln!(output, "Names matching '{}' ({}):", request.query.trim(), hits.len());
    for hit in &hits {
        let _ = writeln!(
            output,
            "  • {:<20} {:>7} candidats  {:.1}/10 ({})",
            capitalize_first_name(hit.firstname),
            format_count(hit.count),
            hit.score,
            hit.category
        );
    }
    Ok(output)
}
