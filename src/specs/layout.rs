// src/specs/layout.rs
//! Which track-list table layout a saved page uses.

use log::{debug, warn};
use scraper::{ElementRef, Html};

use crate::core::html::{class_tokens, document_elements};
use crate::error::{Result, RipError};

/// The known track-list table layouts.
///
/// Each variant carries the class token exactly as written in the page; that
/// token is what finds the table again at extraction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackListLayout {
    /// Legacy release page: `<table class="playlist">`.
    Playlist { class: String },
    /// Current release page: generated class such as `tracklist_3QGRS`.
    Tracklist { class: String },
    /// No named layout matched; first table carrying any class at all.
    Classed { class: String },
}

impl TrackListLayout {
    pub fn class(&self) -> &str {
        match self {
            TrackListLayout::Playlist { class }
            | TrackListLayout::Tracklist { class }
            | TrackListLayout::Classed { class } => class,
        }
    }

    /// The first table in `doc` carrying this layout's class token.
    pub fn find_table<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        let want = self.class();
        document_elements(doc, &["table"]).find(|t| class_tokens(*t).any(|c| c == want))
    }

    fn named(table: ElementRef<'_>) -> Option<Self> {
        for token in class_tokens(table) {
            if token.eq_ignore_ascii_case("playlist") {
                return Some(TrackListLayout::Playlist { class: s!(token) });
            }
            if token.to_ascii_lowercase().starts_with("tracklist") {
                return Some(TrackListLayout::Tracklist { class: s!(token) });
            }
        }
        None
    }
}

/// Scan tables in document order. A named layout anywhere beats the generic
/// fallback; the fallback is the first table with a non-empty class.
pub fn classify(doc: &Html) -> Result<TrackListLayout> {
    let mut fallback: Option<TrackListLayout> = None;

    for table in document_elements(doc, &["table"]) {
        if let Some(layout) = TrackListLayout::named(table) {
            debug!("track list layout: {layout:?}");
            return Ok(layout);
        }
        if fallback.is_none() {
            fallback = class_tokens(table)
                .next()
                .map(|first| TrackListLayout::Classed { class: s!(first) });
        }
    }

    match fallback {
        Some(layout) => {
            warn!("no known track list layout; trying first classed table ({})", layout.class());
            Ok(layout)
        }
        None => Err(RipError::NoTrackListFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::load_document;

    #[test]
    fn legacy_playlist_table() {
        let doc = load_document(r#"<table class="playlist"><tr><td>x</td></tr></table>"#);
        assert_eq!(classify(&doc).unwrap(), TrackListLayout::Playlist { class: s!("playlist") });
    }

    #[test]
    fn capitalized_playlist_class_still_finds_its_table() {
        let doc = load_document(r#"<table class="Playlist"><tr data-track-position="A1"><td><span>3:30</span></td></tr></table>"#);
        let layout = classify(&doc).unwrap();
        assert_eq!(layout, TrackListLayout::Playlist { class: s!("Playlist") });
        let list = crate::specs::tracklist::extract(&doc, &layout).unwrap();
        assert_eq!(list.tracks.len(), 1);
        assert_eq!(list.tracks[0].duration.as_deref(), Some("3:30"));
    }

    #[test]
    fn generated_tracklist_class_after_other_tables() {
        let doc = load_document(r#"
            <table class="info_23nnx"><tr><th>Genre:</th><td>Rock</td></tr></table>
            <table class="tracklist_3QGRS"><tr data-track-position="A1"></tr></table>
        "#);
        let layout = classify(&doc).unwrap();
        assert_eq!(layout, TrackListLayout::Tracklist { class: s!("tracklist_3QGRS") });
        assert!(layout.find_table(&doc).is_some());
    }

    #[test]
    fn falls_back_to_first_classed_table() {
        let doc = load_document(r#"
            <table><tr><td>plain</td></tr></table>
            <table class="songs wide"><tr><td>1</td></tr></table>
            <table class="other"></table>
        "#);
        let layout = classify(&doc).unwrap();
        assert_eq!(layout, TrackListLayout::Classed { class: s!("songs") });
    }

    #[test]
    fn no_classed_table_is_fatal() {
        let doc = load_document("<p>nothing</p><table><tr><td>1</td></tr></table>");
        assert!(matches!(classify(&doc), Err(RipError::NoTrackListFound)));
    }
}
