use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use complexity_chart::cli::{self, CliArgs};
use complexity_chart::complexity::{ChartBundle, ComplexityClass};
use complexity_chart::persistence::config::load_config;
use complexity_chart::plot::{render_chart, save_png};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing()?;
    run(args)
}

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "complexity_chart=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = load_config();

    let labels = if args.labels.is_empty() {
        config.default_labels.clone()
    } else {
        args.labels.clone()
    };

    let bundles: Vec<ChartBundle> = labels
        .iter()
        .map(|label| {
            if ComplexityClass::from_label(label).is_none() {
                tracing::warn!(label = %label, "unknown complexity label, drawing as {}", ComplexityClass::FALLBACK);
            }
            ChartBundle::for_label(label)
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bundles)?);
    } else {
        print!("{}", cli::format_table(&bundles));
    }

    if let Some(path) = &args.png {
        let mut options = config.plot_options();
        options.width = args.width.unwrap_or(options.width);
        options.height = args.height.unwrap_or(options.height);

        let rendered = render_chart(&bundles, &options).context("rendering chart")?;
        save_png(&rendered, path)?;
        tracing::info!(path = %path.display(), curves = rendered.labels.len(), "wrote chart");
    }

    Ok(())
}
