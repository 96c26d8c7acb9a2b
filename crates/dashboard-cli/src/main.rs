// File: crates/dashboard-cli/src/main.rs
// Summary: Submits chart requests for one dashboard page and writes each widget to a PNG.

mod cli;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dashboard_client::{ClientConfig, DashboardController, DrawOutcome, HttpChartApi};
use dashboard_core::ChartType;
use dashboard_render_skia::{theme, RenderOptions, SkiaDocument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chart_dashboard=info,dashboard_client=info,dashboard_render_skia=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = ClientConfig::new(&args.url);
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let api = HttpChartApi::new(&config)
        .with_context(|| format!("invalid backend URL '{}'", args.url))?;

    let opts = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };
    let doc = SkiaDocument::new(&args.out, opts);
    let controller = DashboardController::new(api, doc, &config);

    let first_type = args.charts.first().map(|c| ChartType::from(c.0.chart_type.as_str()));
    controller.init(&first_type.unwrap_or(ChartType::Bar));

    let mut failures = 0usize;
    for chart in &args.charts {
        let form = &chart.0;
        controller.on_chart_type_change(&ChartType::from(form.chart_type.as_str()));
        if let Err(e) = controller.submit(form, &args.page).await {
            failures += 1;
            eprintln!("{} {}: {e}", form.chart_type, form.x_column);
        }
    }

    let mut written = 0usize;
    for (id, outcome) in controller.settle_draws().await {
        match outcome {
            DrawOutcome::Drawn => {
                written += 1;
                println!("{id}: {}", controller.with_document(|d| d.widget_path(&id)).display());
            }
            DrawOutcome::Skipped => {}
            DrawOutcome::Failed(e) => {
                failures += 1;
                eprintln!("{id}: draw failed: {e}");
            }
        }
    }

    println!("Wrote {written} chart(s) to {}", args.out.display());
    if written == 0 {
        anyhow::bail!("no charts generated ({failures} failed)");
    }
    Ok(())
}
