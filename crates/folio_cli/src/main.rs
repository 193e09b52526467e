//! `folio` - scaffold, render, test and live-preview the portfolio page

mod config;
mod dev;
mod project;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use folio_core::{Clock, Event, ManualClock, SystemClock};
use folio_site::{HeadlessScenario, HeadlessRunConfig, Page};
use folio_theme::ColorScheme;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::FolioConfig;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Build and preview the Folio portfolio page")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project (folio.toml, smoke scenario, .gitignore)
    Init {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Project name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Render the page to an HTML document
    Render {
        /// Project directory or config file
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Output file (overrides build.output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render the dark scheme regardless of page.default_scheme
        #[arg(long)]
        dark: bool,

        /// Scroll offset to render at, in px
        #[arg(long, default_value_t = 0.0)]
        scroll: f32,

        /// Date to show in the navbar (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Milliseconds of animation to play before rendering
        #[arg(long, default_value_t = 0)]
        elapsed_ms: u64,
    },

    /// Run a headless scenario against the page
    Scenario {
        /// Scenario JSON file
        file: PathBuf,

        /// Project directory or config file
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Write the JSON report to this relative path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Logical milliseconds per frame
        #[arg(long, default_value_t = 16)]
        tick_ms: u64,
    },

    /// Re-render on config changes and on every date refresh
    Dev {
        /// Project directory or config file
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init { path, name } => cmd_init(&path, name.as_deref()),
        Commands::Render {
            dir,
            output,
            dark,
            scroll,
            date,
            elapsed_ms,
        } => cmd_render(&dir, output, dark, scroll, date.as_deref(), elapsed_ms),
        Commands::Scenario {
            file,
            dir,
            report,
            tick_ms,
        } => cmd_scenario(&file, &dir, report.as_deref(), tick_ms),
        Commands::Dev { dir } => dev::run(&dir),
    }
}

fn cmd_init(path: &Path, name: Option<&str>) -> Result<()> {
    let name = match name {
        Some(name) => name.to_string(),
        None => path
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "folio".to_string()),
    };

    project::create_project(path, &name)
        .with_context(|| format!("Failed to create project in {}", path.display()))?;

    info!("Created project '{}' in {}", name, path.display());
    Ok(())
}

fn cmd_render(
    dir: &Path,
    output: Option<PathBuf>,
    dark: bool,
    scroll: f32,
    date: Option<&str>,
    elapsed_ms: u64,
) -> Result<()> {
    let config = FolioConfig::load_from_dir(dir)?;
    let root = project_root(dir);

    let clock: Rc<dyn Clock> = match date {
        Some(date) => {
            let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .with_context(|| format!("Invalid --date '{date}', expected YYYY-MM-DD"))?;
            let noon = day
                .and_hms_opt(12, 0, 0)
                .context("Invalid time of day")?;
            Rc::new(ManualClock::at(noon))
        }
        None => Rc::new(SystemClock),
    };

    let mut page = Page::mount(config.page.clone(), clock)?;
    if dark {
        page.theme().set_scheme(ColorScheme::Dark);
    }
    page.dispatch(&mut Event::scroll(scroll));
    page.advance(Duration::from_millis(elapsed_ms));

    let output = output.unwrap_or_else(|| config.output_path(&root));
    write_document(&output, &page.render_document())?;

    info!(
        "Rendered {} ({}, scrolled: {}, date: {})",
        output.display(),
        page.scheme(),
        page.is_scrolled(),
        page.date_label()
    );
    Ok(())
}

fn cmd_scenario(file: &Path, dir: &Path, report: Option<&Path>, tick_ms: u64) -> Result<()> {
    let page_config = match FolioConfig::load_from_dir(dir) {
        Ok(config) => config.page,
        Err(err) => {
            tracing::debug!("no project config ({err:#}), using page defaults");
            Default::default()
        }
    };

    let scenario = HeadlessScenario::from_path(file)
        .with_context(|| format!("Failed to load scenario {}", file.display()))?;
    let outcome = folio_site::run_loaded_scenario(
        &scenario,
        &page_config,
        HeadlessRunConfig { tick_ms },
    )?;

    outcome.report().write_to_writer(&mut std::io::stdout())?;
    if let Some(path) = report {
        outcome.report().write_to_path(path)?;
        info!("Report written to {}", path.display());
    }

    if outcome.is_failed() {
        anyhow::bail!("scenario {} failed", file.display());
    }
    Ok(())
}

/// Directory that relative paths in folio.toml resolve against
pub(crate) fn project_root(dir: &Path) -> PathBuf {
    if dir.is_file() {
        dir.parent().map(Path::to_path_buf).unwrap_or_default()
    } else {
        dir.to_path_buf()
    }
}

pub(crate) fn write_document(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))
}
