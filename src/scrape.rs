// src/scrape.rs
use std::path::Path;

use log::info;
use scraper::Html;

use crate::config::TimingOptions;
use crate::core::html::{load_document, load_document_file};
use crate::error::Result;
use crate::model::{AlbumMetadata, LabelInterval, RawTrack};
use crate::specs::{layout, metadata, tracklist};
use crate::timing;

/// Everything read and computed from one page.
#[derive(Clone, Debug, PartialEq)]
pub struct AlbumRip {
    pub layout: layout::TrackListLayout,
    pub tracks: Vec<RawTrack>,
    pub metadata: AlbumMetadata,
    pub labels: Vec<LabelInterval>,
    /// Durations were spread evenly because the page listed none.
    pub estimated: bool,
}

/// Ordered tracks, with estimated durations when the page has no times at all.
/// A page with times for only some tracks is returned as is.
pub fn collect_tracks(doc: &Html, timing: &TimingOptions) -> Result<(layout::TrackListLayout, Vec<RawTrack>, bool)> {
    let layout = layout::classify(doc)?;
    let list = tracklist::extract(doc, &layout)?;

    if list.any_duration {
        return Ok((layout, list.tracks, false));
    }
    let tracks = timing::estimate_durations(&list.tracks, timing.total_minutes())?;
    Ok((layout, tracks, true))
}

/// Run both extraction branches on a parsed page and lay out the labels.
pub fn collect_album_doc(doc: &Html, timing: &TimingOptions) -> Result<AlbumRip> {
    let (layout, tracks, estimated) = collect_tracks(doc, timing)?;
    let metadata = metadata::extract(doc)?;
    let labels = timing::synthesize(
        &tracks,
        f64::from(timing.lead_in_seconds),
        f64::from(timing.gap_seconds),
    )?;

    info!(
        "{} – {}: {} tracks, {} labels{}",
        metadata.artist(),
        metadata.album(),
        tracks.len(),
        labels.len(),
        if estimated { " (estimated)" } else { "" }
    );

    Ok(AlbumRip { layout, tracks, metadata, labels, estimated })
}

pub fn collect_album(html: &str, timing: &TimingOptions) -> Result<AlbumRip> {
    collect_album_doc(&load_document(html), timing)
}

pub fn collect_album_file(path: &Path, timing: &TimingOptions) -> Result<AlbumRip> {
    info!("reading {}", path.display());
    collect_album_doc(&load_document_file(path)?, timing)
}
