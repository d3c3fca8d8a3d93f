//! # Build Command Implementation
//!
//! The build command runs the complete site pipeline:
//! 1. Loading note records
//! 2. Ordering them by slug
//! 3. Clearing the output directory
//! 4. Rendering the index and note pages
//! 5. Copying static assets
//! 6. Writing the sitemap
//!
//! The base URL is checked before anything else, so a missing `BASEURL`
//! leaves the output directory exactly as it was.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use notesite::config::{SiteConfig, SiteSources};
use notesite::output::{Mark, OutputConfig};
use notesite::phases;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory containing the note records (*.yaml)
    #[arg(long, value_name = "DIR", default_value = "content")]
    pub content: PathBuf,

    /// Directory containing index.html, note.html and footer.html
    #[arg(long, value_name = "DIR", default_value = "templates")]
    pub templates: PathBuf,

    /// Directory whose top-level files are copied into the site root
    #[arg(long = "static", value_name = "DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Output directory; removed and recreated on every build
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    pub output: PathBuf,

    /// Public origin of the site, used for sitemap URLs
    #[arg(long, value_name = "URL", env = "BASEURL")]
    pub base_url: Option<String>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the build command
pub fn execute(args: BuildArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    let config = SiteConfig::new(args.base_url.as_deref(), &args.output)?;
    let sources = SiteSources::load(&args.content, &args.templates, &args.static_dir)?;

    if !args.quiet {
        println!(
            "{} Building site from {}",
            out.mark(Mark::Build),
            args.content.display()
        );
    }

    let summary = phases::generate(&sources, &config)?;

    if !args.quiet {
        println!(
            "{} Generated {} note pages",
            out.mark(Mark::Ok),
            summary.notes
        );
        println!("{} Generated index page", out.mark(Mark::Ok));
        println!(
            "{} Copied {} static files",
            out.mark(Mark::Ok),
            summary.assets
        );
        println!(
            "{} Generated sitemap.xml ({} URLs)",
            out.mark(Mark::Ok),
            summary.sitemap_urls
        );
        println!();
        println!(
            "Build complete! Output is in '{}'.",
            summary.output_dir.display()
        );
    }

    Ok(())
}
