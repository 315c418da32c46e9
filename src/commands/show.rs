//! Detailed statistics for one name.

use super::{OutputFormat, to_json};
use crate::context::AppContext;
use crate::error::Result;
use crate::format::{
    capitalize_first_name, format_percentage_precise, format_thousands, interpretation,
    stats_sentence,
};
use crate::record::{Mention, NameRecord};
use crate::scoring::{MentionProfile, RankingCategory, analyze_profile, mention_score, score};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Serialize)]
struct MentionLine {
    mention: Mention,
    label: &'static str,
    rate: f64,
    /// Contribution to the score
    points: f64,
}

#[derive(Debug, Serialize)]
struct ShowReport {
    record: NameRecord,
    score: f64,
    category: RankingCategory,
    profile: MentionProfile,
    mentions: Vec<MentionLine>,
    /// Whether the name is frequent enough to be drawn on the chart
    in_chart: bool,
    summary: String,
    interpretation: Vec<String>,
}

/// Show a name's mention rates, score and profile.
pub async fn handle_show(ctx: &AppContext, name: &str, format: OutputFormat) -> Result<String> {
    let record = ctx.find_name(name).await?;
    let in_chart = record.count >= ctx.loader().thresholds().chart;

    let score = score(&record);
    let report = ShowReport {
        score,
        category: RankingCategory::from_score(score),
        profile: analyze_profile(&record),
        mentions: Mention::ALL
            .iter()
            .rev()
            .map(|&mention| MentionLine {
                mention,
                label: mention.label(),
                rate: record.rate(mention),
                points: mention_score(&record, mention),
            })
            .collect(),
        in_chart,
        summary: stats_sentence(&record),
        interpretation: interpretation(&record),
        record,
    };

    if format == OutputFormat::Json {
        return to_json(&report);
    }

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{} ({} candidats)",
        capitalize_first_name(&report.record.firstname),
        format_thousands(report.record.count)
    );
    let _ = writeln!(output, "Score: {:.1}/10 ({})", report.score, report.category);
    let _ = writeln!(
        output,
        "Profil: {} (mention dominante: {})",
        report.profile.profile_type.description(),
        report.profile.dominant.label()
    );
    let _ = writeln!(output);
    for line in &report.mentions {
        let _ = writeln!(
            output,
            "  {:<30} {:>6}  (+{:.2})",
            line.label,
            format_percentage_precise(line.rate),
            line.points
        );
    }
    let _ = writeln!(output);
    for paragraph in &report.interpretation {
        let _ = writeln!(output, "{}", paragraph);
    }
    if !report.in_chart {
        let _ = writeln!(
            output,
            "\nMoins de {} candidats : ce prénom n'apparaît pas sur le graphique.",
            ctx.loader().thresholds().chart
        );
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::fixtures::context;
    use assert2::{check, let_assert};

    #[tokio::test]
    async fn test_show_text() {
        let ctx = context();
        let_assert!(Ok(output) = handle_show(&ctx, "LOUISE", OutputFormat::Text).await);
        check!(output.starts_with("Louise (4 200 candidats)"));
        check!(output.contains("Très bien avec félicitations"));
        check!(!output.contains("graphique"));
    }

    #[tokio::test]
    async fn test_show_json() {
        let ctx = context();
        let_assert!(Ok(output) = handle_show(&ctx, "eloane", OutputFormat::Json).await);
        let_assert!(Ok(json) = serde_json::from_str::<serde_json::Value>(&output));
        check!(json["record"]["firstname"] == "eloane");
        check!(json["in_chart"] == false);
        check!(json["mentions"][0]["mention"] == "fel");
        check!(json["mentions"].as_array().map(Vec::len) == Some(5));
    }

    #[tokio::test]
    async fn test_show_unknown_name_suggests() {
        let ctx = context();
        let_assert!(Err(err) = handle_show(&ctx, "huggo", OutputFormat::Text).await);
        check!(err.to_string().contains("hugo"));
    }
}
