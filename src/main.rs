use anyhow::Context;
use brevet_prenoms::cli::{Cli, Commands};
use brevet_prenoms::commands::chart::{ChartRequest, handle_chart};
use brevet_prenoms::commands::compare::handle_compare;
use brevet_prenoms::commands::search::{SearchRequest, handle_search};
use brevet_prenoms::commands::show::handle_show;
use brevet_prenoms::commands::similar::{SimilarRequest, handle_similar};
use brevet_prenoms::commands::stats::{StatsRequest, handle_stats};
use brevet_prenoms::commands::OutputFormat;
use brevet_prenoms::{AppContext, Config};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    brevet_prenoms::tracing::init(cli.verbose);

    let mut config = Config::load_or_default(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;
    if let Some(path) = cli.dataset {
        config.dataset.path = path;
        config.dataset.url = None;
    }
    if let Some(url) = cli.url {
        config.dataset.url = Some(url);
    }

    let ctx = AppContext::from_config(config)?;
    let format = OutputFormat::from_json_flag(cli.json);

    let result = match cli.command {
        Commands::Search { query, limit } => {
            handle_search(&ctx, SearchRequest { query, limit }, format).await
        }
        Commands::Show { name } => handle_show(&ctx, &name, format).await,
        Commands::Similar {
            name,
            limit,
            min_similarity,
            include_target,
        } => {
            let request = SimilarRequest {
                name,
                limit,
                min_similarity,
                include_target,
            };
            handle_similar(&ctx, request, format).await
        }
        Commands::Compare { names } => handle_compare(&ctx, &names, format).await,
        Commands::Chart {
            mention,
            select,
            width,
            height,
        } => {
            let request = ChartRequest {
                mention,
                select,
                width,
                height,
            };
            handle_chart(&ctx, request, format).await
        }
        Commands::Stats { top, mention } => {
            handle_stats(&ctx, StatsRequest { top, mention }, format).await
        }
    };

    let output = result.inspect_err(|e| tracing::error!("{:#}", e))?;
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
