// src/specs/tracklist.rs
//! Track rows from the classified track-list table.
//!
//! Row shape on both layouts:
//! ```text
//! <tr data-track-position="A1">            position (row attribute)
//!   <td class="…pos…">A1</td>              position (cell without spans)
//!   <td><span class="…title…">Name</span>  title (first span has a class)
//!   <td><span>3:30</span></td>             duration (first span, no class)
//! </tr>
//! ```
//! Rows without a position are header/footer/heading rows and are skipped.

use log::debug;
use scraper::{ElementRef, Html};

use super::layout::TrackListLayout;
use crate::config::consts::TRACK_POSITION_ATTR;
use crate::core::html::{attr, element_text, elements_named, first_descendant, has_attr};
use crate::error::{Result, RipError};
use crate::model::RawTrack;

/// Extraction result. `any_duration` is false when not a single row had a
/// time, which is the cue for the duration estimator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackList {
    pub tracks: Vec<RawTrack>,
    pub any_duration: bool,
}

/// Walk the layout's table in row order.
pub fn extract(doc: &Html, layout: &TrackListLayout) -> Result<TrackList> {
    let table = layout.find_table(doc).ok_or(RipError::NoTrackListFound)?;

    let mut out = TrackList::default();
    for row in elements_named(table, &["tr"]) {
        let track = read_row(row);
        if track.position.is_empty() {
            debug!("skipping row without position: {:?}", element_text(row));
            continue;
        }
        if track.duration.is_some() {
            out.any_duration = true;
        }
        out.tracks.push(track);
    }

    debug!("extracted {} tracks (durations: {})", out.tracks.len(), out.any_duration);
    Ok(out)
}

/// A styled position cell overrides the row's `data-track-position`.
fn read_row(row: ElementRef<'_>) -> RawTrack {
    let row_pos = attr(row, TRACK_POSITION_ATTR)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from);

    let mut cell_pos: Option<String> = None;
    let mut title: Option<String> = None;
    let mut duration: Option<String> = None;

    for cell in elements_named(row, &["td"]) {
        match first_descendant(cell, "span") {
            None => {
                // Position cell: styled, no spans, some text
                if has_attr(cell, "class") {
                    let text = element_text(cell);
                    if !text.is_empty() {
                        cell_pos = Some(text);
                    }
                }
            }
            Some(span) if has_attr(span, "class") => {
                title = Some(element_text(span));
            }
            Some(span) => {
                let text = element_text(span);
                if !text.is_empty() {
                    duration = Some(text);
                }
            }
        }
    }

    RawTrack {
        position: cell_pos.or(row_pos).unwrap_or_default(),
        title,
        duration,
    }
}
