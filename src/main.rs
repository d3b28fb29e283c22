//! vidsource - Video Source Resolution
//!
//! Resolves video URLs into embeddable playback descriptors and prints them
//! as JSON, one line per URL.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, Level};
use vidsource::{PlaybackContext, PlaybackOptions, ResolverSettings, VideoResolver};

#[derive(Parser)]
#[command(name = "vidsource", version, about = "Resolve video URLs into embed descriptors")]
struct Args {
    /// Video URLs to resolve
    #[arg(required = true)]
    urls: Vec<String>,

    /// Playback context: background, embedded or inline
    #[arg(long, default_value = "inline")]
    context: PlaybackContext,

    /// Override autoplay (interactive contexts only)
    #[arg(long)]
    autoplay: Option<bool>,

    /// Override player controls (interactive contexts only)
    #[arg(long)]
    controls: Option<bool>,

    /// Override looping (interactive contexts only)
    #[arg(long = "loop")]
    loop_: Option<bool>,

    /// Override muting (interactive contexts only)
    #[arg(long)]
    muted: Option<bool>,

    /// Settings file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let settings = match &args.config {
        Some(path) => ResolverSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => ResolverSettings::load_or_default(),
    };
    debug!("Using settings: {:?}", settings);

    let resolver = VideoResolver::new(settings);
    let options = PlaybackOptions {
        autoplay: args.autoplay,
        controls: args.controls,
        loop_: args.loop_,
        muted: args.muted,
    };

    for url in &args.urls {
        let video = resolver.resolve_url(url, args.context, options);
        let json = if args.pretty {
            serde_json::to_string_pretty(&video)
        } else {
            serde_json::to_string(&video)
        }
        .context("Failed to serialize descriptor")?;
        println!("{}", json);
    }

    Ok(())
}
