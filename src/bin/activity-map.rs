// ABOUTME: Activity map CLI - renders a standalone map page or serves it over HTTP
// ABOUTME: Reads ACTIVITY_MAP_* configuration, applies flag overrides and initializes logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Fetch activities from a running server and write a standalone page
//! activity-map render --base-url http://127.0.0.1:5000 --output map.html
//!
//! # Serve the map page and the activity API from a JSON snapshot
//! activity-map serve --data ./data/activities.json --port 5000
//! ```

use activity_map::{
    config::AppConfig,
    fetcher::{load_and_render, ActivityFetcher, LoadOutcome},
    logging::LoggingConfig,
    page::MapPage,
    render::{LeafletScript, MapRenderer},
    server,
    stats::summarize_all,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "activity-map",
    about = "Render fitness activities as colored routes on a Leaflet map",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the activity collection once and write a standalone HTML page
    Render {
        /// Base URL of the server exposing /api/all_activities
        #[arg(long)]
        base_url: Option<String>,

        /// Where to write the page
        #[arg(long, short = 'o', default_value = "activity-map.html")]
        output: PathBuf,
    },

    /// Serve the map page and activity API from a JSON snapshot
    Serve {
        /// Snapshot file (JSON array of activities)
        #[arg(long)]
        data: Option<PathBuf>,

        /// HTTP port
        #[arg(long, short = 'p')]
        port: Option<u16>,

        /// Interface to bind
        #[arg(long)]
        host: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = startup(cli.verbose)?;

    match cli.command {
        Command::Render { base_url, output } => {
            if let Some(base_url) = base_url {
                config.client.base_url = base_url;
            }
            info!("{}", config.summary());
            render_page(&config, &output).await
        }
        Command::Serve { data, port, host } => {
            if let Some(data) = data {
                config.server.data_file = data;
            }
            if let Some(port) = port {
                config.server.http_port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            info!("{}", config.summary());
            server::serve(&config).await?;
            Ok(())
        }
    }
}

/// Install the subscriber, then read the configuration so its loading is logged
fn startup(verbose: bool) -> Result<AppConfig> {
    let mut logging = LoggingConfig::from_env();
    if verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    AppConfig::from_env()
}

/// Fetch, render and write the standalone page
async fn render_page(config: &AppConfig, output: &Path) -> Result<()> {
    let fetcher = ActivityFetcher::new(&config.client)?;
    let mut renderer = MapRenderer::new(LeafletScript::default(), &config.map);

    let LoadOutcome::Rendered { activities, report } =
        load_and_render(&fetcher, &mut renderer).await
    else {
        bail!("No activities loaded from {}", fetcher.endpoint());
    };

    let page = MapPage::new(renderer.into_surface().script(), summarize_all(&activities));
    tokio::fs::write(output, page.to_html())
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        output = %output.display(),
        drawn = report.drawn,
        skipped = report.skipped.len(),
        "Map page written"
    );
    Ok(())
}
