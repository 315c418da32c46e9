//! Scatter chart layout for the chart view.

use super::{OutputFormat, to_json};
use crate::chart::ChartLayout;
use crate::context::AppContext;
use crate::error::Result;
use crate::format::capitalize_first_name;
use crate::record::Mention;
use std::fmt::Write as _;

#[derive(Debug, Clone, Default)]
pub struct ChartRequest {
    /// Defaults to the configured mention
    pub mention: Option<Mention>,
    /// Name to highlight
    pub select: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Lay out the chart; JSON output carries every positioned point.
pub async fn handle_chart(
    ctx: &AppContext,
    request: ChartRequest,
    format: OutputFormat,
) -> Result<String> {
    let mut config = ctx.config().chart;
    if let Some(width) = request.width {
        config.plot_width = width;
    }
    if let Some(height) = request.height {
        config.plot_height = height;
    }
    let mention = request.mention.unwrap_or(config.mention);

    let selected = match &request.select {
        Some(name) => Some(ctx.find_name(name).await?),
        None => None,
    };
    let view = ctx.chart_view().await?;
    let layout = ChartLayout::compute(&view, mention, selected.as_ref(), &config);

    if format == OutputFormat::Json {
        return to_json(&layout);
    }

    let mut output = String::new();
    let _ = writeln!(
        output,
        "Chart: {} names, X = taux {} (%), Y = candidats (log)",
        layout.points.len(),
        mention.short_label()
    );
    let _ = writeln!(
        output,
        "Plot {}x{} px, anti-collision: {} iterations{}",
        config.plot_width,
        config.plot_height,
        layout.iterations,
        if layout.converged { "" } else { " (not converged)" }
    );
    let _ = writeln!(output, "X ticks: {}", join(&layout.ticks.x));
    let _ = writeln!(output, "Y ticks: {}", join(&layout.ticks.y));
    if !layout.show_labels {
        let _ = writeln!(output, "Labels hidden (more than 50 names)");
    }

    if let Some(selected) = &selected
        && let Some(point) = layout.point(&selected.firstname)
    {
        let _ = writeln!(
            output,
            "{} at ({:.0}, {:.0}){}",
            capitalize_first_name(&selected.firstname),
            point.display_x,
            point.display_y,
            if point.point.adjusted {
                " (position ajustée)"
            } else {
                ""
            }
        );
    }
    Ok(output)
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::fixtures::context;
    use assert2::{check, let_assert};

    #[tokio::test]
    async fn test_chart_text() {
        let ctx = context();
        let_assert!(
            Ok(output) = handle_chart(&ctx, ChartRequest::default(), OutputFormat::Text).await
        );
        check!(output.starts_with("Chart: 3 names, X = taux TB+"));
        check!(output.contains("Plot 1220x1050 px, anti-collision: 0 iterations"));
    }

    #[tokio::test]
    async fn test_chart_selects_rare_name() {
        let ctx = context();
        let request = ChartRequest {
            mention: Some(Mention::Tb),
            select: Some("anaïs".to_string()),
            ..ChartRequest::default()
        };
        let_assert!(Ok(output) = handle_chart(&ctx, request, OutputFormat::Json).await);
        let_assert!(Ok(json) = serde_json::from_str::<serde_json::Value>(&output));
        check!(json["mention"] == "tb");
        let_assert!(Some(points) = json["points"].as_array());
        check!(points.len() == 4);
        check!(points[3]["firstname"] == "anaïs");
        check!(points[3]["adjusted"] == true);
        check!(points[3]["count"] == 60);
    }

    #[tokio::test]
    async fn test_chart_custom_plot_size() {
        let ctx = context();
        let request = ChartRequest {
            width: Some(600.0),
            height: Some(400.0),
            ..ChartRequest::default()
        };
        let_assert!(Ok(output) = handle_chart(&ctx, request, OutputFormat::Json).await);
        let_assert!(Ok(json) = serde_json::from_str::<serde_json::Value>(&output));
        check!(json["scales"]["plot"]["width"] == 600.0);
    }
}
