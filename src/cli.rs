// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::config::{consts::LOG_FILE, AppOptions};
use crate::error::Result;
use crate::{export, file, scrape};

/// Label an Audacity album recording from a saved release page.
#[derive(Debug, Parser)]
#[command(name = "vinyl_labels", version, about)]
pub struct Args {
    /// Saved release page (.html), or a directory holding exactly one
    pub input: PathBuf,

    /// Silence before the first track, in seconds [default: 0]
    #[arg(short = 'l', long)]
    pub lead_in: Option<String>,

    /// Silence between tracks, in seconds [default: 4]
    #[arg(short, long)]
    pub gap: Option<String>,

    /// Recording length in minutes, used only when the page lists no track times [default: 46]
    #[arg(short, long)]
    pub total_minutes: Option<String>,

    /// Directory for the label and tag files
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Label file name (default: <artist>-<album>-labels.txt)
    #[arg(long)]
    pub labels_file: Option<String>,

    /// Tag template file name (default: <artist>-<album>-tags.xml)
    #[arg(long)]
    pub tags_file: Option<String>,

    /// TOML options file; command-line values take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print labels and tags instead of writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose { LevelFilter::Debug } else { LevelFilter::Info }
    }

    /// Defaults ← options file ← command line.
    pub fn options(&self) -> Result<AppOptions> {
        let mut opts = match &self.config {
            Some(path) => AppOptions::load(path)?,
            None => AppOptions::default(),
        };
        opts.timing.apply_overrides(
            self.lead_in.as_deref(),
            self.gap.as_deref(),
            self.total_minutes.as_deref(),
        )?;
        if let Some(dir) = &self.out_dir {
            opts.export.out_dir = dir.clone();
        }
        if self.labels_file.is_some() {
            opts.export.labels_file = self.labels_file.clone();
        }
        if self.tags_file.is_some() {
            opts.export.tags_file = self.tags_file.clone();
        }
        Ok(opts)
    }
}

pub fn run(args: &Args) -> Result<()> {
    if let Err(e) = crate::logger::init(&PathBuf::from(LOG_FILE), args.log_level()) {
        eprintln!("Warning: logger not installed: {e}");
    }

    let opts = args.options()?;
    let input = file::resolve_input(&args.input)?;
    let rip = scrape::collect_album_file(&input, &opts.timing)?;

    if rip.estimated {
        println!(
            "NOTE: the page has no track times; labels are spread evenly over {} minutes.",
            opts.timing.total_minutes()
        );
        println!("      Move each label after the first to the start of its track.");
    }

    if args.dry_run {
        print!("{}", export::render_labels(&rip.labels));
        print!("{}", export::render_tags(&rip.metadata));
        return Ok(());
    }

    let labels = file::write_labels_file(&opts.export, &rip.metadata, &rip.labels)?;
    let tags = file::write_tags_file(&opts.export, &rip.metadata)?;
    println!("Wrote {}", labels.display());
    println!("Wrote {}", tags.display());
    Ok(())
}
