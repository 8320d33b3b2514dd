//! # crimestoppers-prerender
//!
//! Renders the CrimeStoppers homepage to a static HTML file.
//!
//! The output is a non-interactive snapshot of one presentation: it carries
//! no script, so it never re-evaluates the layout on resize, the menu never
//! pins and the off-canvas menu never opens. The deployable interactive page
//! is the Trunk build of `site/index.html`.
//!
//! Without `--width` the page is rendered headless, so the layout falls back
//! to the configured default width (desktop presentation by default).
//!
//! ```bash
//! crimestoppers-prerender --config site.toml --out dist/index.html
//! crimestoppers-prerender --width 375 --out dist/mobile.html
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use crimestoppers_site::layout;
use crimestoppers_site::{Headless, SiteConfig, SyntheticViewport, ViewportSource, render_homepage};

#[derive(Parser, Debug)]
#[command(name = "crimestoppers-prerender")]
#[command(about = "Render a non-interactive HTML snapshot of the CrimeStoppers homepage")]
#[command(
    long_about = "Render a non-interactive HTML snapshot of the CrimeStoppers homepage.\n\n\
The snapshot contains one presentation, chosen from --width (or the configured \
fallback width), and no script. Build site/index.html with Trunk for the \
interactive page."
)]
#[command(version)]
struct Args {
    /// Site config (TOML); defaults are used when the file does not exist
    #[arg(long, default_value = "site.toml")]
    config: PathBuf,

    /// Output HTML file
    #[arg(long, short, default_value = "dist/index.html")]
    out: PathBuf,

    /// Render as if the viewport were this many pixels wide
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn viewport_for(width: Option<u32>) -> Arc<dyn ViewportSource> {
    match width {
        Some(width) => Arc::new(SyntheticViewport::with_width(width)),
        None => Arc::new(Headless),
    }
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))
}

fn run(args: Args) -> Result<()> {
    let config = SiteConfig::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;
    debug!(?config, "config loaded");

    let viewport = viewport_for(args.width);
    let presentation = layout::resolve(viewport.as_ref(), &config.layout);
    info!(
        %presentation,
        width = layout::effective_width(viewport.width(), &config.layout),
        "rendering homepage"
    );

    let html = render_homepage(&config, viewport);
    write_output(&args.out, &html)?;

    info!(
        path = %args.out.display(),
        bytes = html.len(),
        "static snapshot written (no script; deploy the Trunk build for interactivity)"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[crimestoppers-prerender] error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_have_sensible_defaults() {
        let args = Args::parse_from(["crimestoppers-prerender"]);
        assert_eq!(args.config, PathBuf::from("site.toml"));
        assert_eq!(args.out, PathBuf::from("dist/index.html"));
        assert_eq!(args.width, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Args::try_parse_from(["crimestoppers-prerender", "--width", "0"]).is_err());
    }

    #[test]
    fn viewport_without_width_is_headless() {
        assert_eq!(viewport_for(None).width(), None);
        assert_eq!(viewport_for(Some(375)).width(), Some(375));
    }
}
