//! Names with a similar mention profile.

use super::{OutputFormat, to_json};
use crate::context::AppContext;
use crate::error::Result;
use crate::format::{capitalize_first_name, format_count};
use crate::similarity::{SimilarityResult, find_similar};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Default)]
pub struct SimilarRequest {
    pub name: String,
    pub limit: Option<usize>,
    pub min_similarity: Option<f64>,
    pub include_target: bool,
}

#[derive(Debug, Serialize)]
struct SimilarReport<'a> {
    target: &'a str,
    results: Vec<SimilarityResult<'a>>,
}

/// List the closest profiles to a name within the search view.
pub async fn handle_similar(
    ctx: &AppContext,
    request: SimilarRequest,
    format: OutputFormat,
) -> Result<String> {
    let target = ctx.find_name(&request.name).await?;
    let corpus = ctx.search_view().await?;

    let mut options = ctx.config().similarity.options();
    if let Some(limit) = request.limit {
        options.max_results = limit;
    }
    if let Some(min) = request.min_similarity {
        options.min_similarity_pct = min;
    }
    if request.include_target {
        options.exclude_target = false;
    }

    let results = find_similar(&target, &corpus, &options);
    tracing::debug!(
        "{} similar names for {} (min {}%)",
        results.len(),
        target.firstname,
        options.min_similarity_pct
    );

    if format == OutputFormat::Json {
        return to_json(&SimilarReport {
            target: &target.firstname,
            results,
        });
    }

    let name = capitalize_first_name(&target.firstname);
    if results.is_empty() {
        return Ok(format!(
            "No name is at least {}% similar to {}.\n",
            options.min_similarity_pct, name
        ));
    }

    let mut output = String::new();
    let _ = writeln!(output, "Names similar to {}:", name);
    for result in &results {
        let _ = writeln!(
            output,
            "  • {:<20} {:>6.2}%  {:>7} candidats",
            capitalize_first_name(&result.record.firstname),
            result.similarity,
            format_count(result.record.count)
        );
    }
    Ok(output)
}
