//! Command-line rendering surface.
//!
//! Each flag maps to one controller operation; they are applied in the order
//! search → tags → expand, then the resulting view is rendered.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{info, info_span};

use crate::bootstrap::{build_controller, resolve_config};
use crate::render::{render_json, render_text};

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Render the portfolio project gallery")]
pub struct Cli {
    /// TOML config file (defaults to <config_dir>/portfolio/config.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON catalog file, overrides the config's catalog source
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Free-text search over titles, descriptions and tags
    #[arg(long)]
    pub search: Option<String>,

    /// Tag to select; repeat to require several
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Open the "show all" disclosure
    #[arg(long)]
    pub expand: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the tag vocabulary and exit
    #[arg(long)]
    pub list_tags: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Run one invocation and return what should be printed to stdout.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let span = info_span!("cli.run", format = ?cli.format);
    let _guard = span.enter();

    let config = resolve_config(cli.config.as_deref())?;
    let mut controller = build_controller(&config, cli.catalog.as_deref())?;

    if cli.list_tags {
        let tags: Vec<&str> = controller.vocabulary().iter().collect();
        return Ok(match cli.format {
            OutputFormat::Text => tags.join("\n") + "\n",
            OutputFormat::Json => serde_json::to_string_pretty(&tags)?,
        });
    }

    if let Some(search) = &cli.search {
        controller.set_search_text(search.as_str());
    }
    for tag in &cli.tags {
        controller.toggle_tag(tag.as_str());
    }
    if cli.expand {
        controller.toggle_expanded();
    }

    let view = controller.view();
    info!(
        visible = view.len(),
        matched = view.matched_count,
        filtering = view.is_filtering,
        "Rendering gallery"
    );

    match cli.format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => render_json(view),
    }
}
