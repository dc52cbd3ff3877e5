//! Generate command implementation.

use anyhow::{Context, Result};
use minutebars_config::AppConfig;
use minutebars_monitor::{render_table, PreviewOptions};
use minutebars_session::{run_pipeline, write_session, SessionReport};
use tracing::info;

use crate::cli::{GenerateArgs, OutputFormat};

pub fn run(args: GenerateArgs, mut config: AppConfig) -> Result<()> {
    // Command-line values win over the configuration file.
    if let Some(date) = args.date {
        config.session.date = date;
    }
    if let Some(price) = args.start_price {
        config.session.start_price = price;
    }
    if let Some(mu) = args.mu {
        config.session.mu = mu;
    }
    if let Some(sigma) = args.sigma {
        config.session.sigma = sigma;
    }
    if args.unseeded {
        config.session.seed = None;
    } else if let Some(seed) = args.seed {
        config.session.seed = Some(seed);
    }
    if let Some(out) = args.out {
        config.output.dir = Some(out);
    }

    let params = config
        .session
        .to_params()
        .context("Invalid session parameters")?;

    info!(date = %params.date, seed = ?params.seed, "Generating session");
    let tables = run_pipeline(&params).context("Pipeline failed")?;

    if let Some(dir) = config.output.dir.as_deref().filter(|d| !d.as_os_str().is_empty()) {
        write_session(dir, &tables)
            .with_context(|| format!("Failed to write CSVs to {}", dir.display()))?;
        let shown = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        eprintln!("Saved CSVs to: {}", shown.display());
    }

    let report = SessionReport::new(&params, &tables);

    match args.output {
        OutputFormat::Json => {
            println!("{}", report.to_json()?);
        }
        OutputFormat::Text => {
            let options = PreviewOptions {
                width: config.preview.width,
                max_columns: config.preview.max_columns,
                rows: config.preview.rows,
            };

            println!("{}", report.summary());
            println!("{}", render_table("1-minute (head)", &tables.minute, &PreviewOptions { rows: 3, ..options }));
            println!("{}", render_table("5-minute bars (head)", &tables.five_minute, &options));
            println!("{}", render_table("30-minute bars (head)", &tables.thirty_minute, &PreviewOptions { rows: 3, ..options }));
            println!("{}", render_table("Daily bars", &tables.daily, &options));
        }
    }

    Ok(())
}
