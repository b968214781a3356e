// src/specs/metadata.rs
//! Album tags: artist/album/year from the page title, then every
//! `Label:` / value pair found in the page's info sections.

use log::debug;
use scraper::Html;

use crate::config::consts::{SITE_BRAND, VARIOUS_ARTIST};
use crate::core::html::{document_elements, element_text};
use crate::core::sanitize::{clean_tag_value, strip_paren_suffix};
use crate::error::{Result, RipError};
use crate::model::AlbumMetadata;

/// What the `<title>` string yields on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleParts {
    pub artist: String,
    pub album: String,
    pub year: Option<String>,
}

/// Elements that hold either a field label or its value, depending on layout.
const INFO_BLOCKS: &[&str] = &["div", "th", "td"];

pub fn extract(doc: &Html) -> Result<AlbumMetadata> {
    let title = document_elements(doc, &["title"])
        .next()
        .map(element_text)
        .ok_or(RipError::MissingTitleElement)?;

    let parts = parse_title(&title);
    debug!("title {title:?} -> {parts:?}");

    let mut meta = AlbumMetadata::new();
    meta.insert("ALBUM", clean_tag_value(&parts.album));
    meta.insert("ARTIST", clean_tag_value(&parts.artist));
    let year_found = parts.year.is_some();
    if let Some(year) = parts.year {
        meta.insert("YEAR", year);
    }

    for (label, value) in label_pairs(doc, year_found) {
        meta.insert(&label, clean_tag_value(&value));
    }
    Ok(meta)
}

/// `"Artist – Album (1987, Vinyl) | Site"` → artist, album, year.
///
/// Branding after `" | "` is dropped. An en dash separator is tried before a
/// hyphen. When the right side is just the site name the page is a
/// compilation and the artist is the sentinel.
pub fn parse_title(page_title: &str) -> TitleParts {
    let head = page_title.split(" | ").next().unwrap_or("");

    let split = [" – ", " - "].iter().find_map(|sep| {
        head.find(sep)
            .filter(|&i| i > 0)
            .map(|_| head.split(sep).collect::<Vec<_>>())
    });

    let (artist, album) = match split {
        Some(words) if words.get(1).is_some_and(|w| *w != SITE_BRAND) => {
            (words[0], words[1])
        }
        _ => (VARIOUS_ARTIST, head),
    };

    TitleParts {
        artist: s!(artist.trim()),
        album: s!(strip_paren_suffix(album).trim()),
        year: find_year(head),
    }
}

/// First four-digit token inside a parenthesized, comma-separated group:
/// `(1987, Vinyl)` and `(Reissue, 1987)` both give `1987`.
fn find_year(s: &str) -> Option<String> {
    s.split('(').skip(1).find_map(|group| {
        let group = group.split(')').next().unwrap_or("");
        if !group.contains(',') {
            return None;
        }
        group
            .split(',')
            .map(str::trim)
            .find(|tok| tok.len() == 4 && tok.chars().all(|c| c.is_ascii_digit()))
            .map(String::from)
    })
}

/// Pair every block ending in `:` with the block right after it.
///
/// Rejected: empty values, values equal to the label, values containing a
/// colon (that is the next label), multi-word labels (prose), and
/// year/released when the title already gave the year.
fn label_pairs(doc: &Html, year_found: bool) -> Vec<(String, String)> {
    let texts: Vec<String> = document_elements(doc, INFO_BLOCKS).map(element_text).collect();
    let mut out = Vec::new();

    for (i, label) in texts.iter().enumerate() {
        if !label.ends_with(':') {
            continue;
        }
        let Some(value) = texts.get(i + 1) else { break };

        let lower = label.to_lowercase();
        let year_label = lower == "year:" || lower == "released:";
        let accept = label != value
            && !value.is_empty()
            && !(year_label && year_found)
            && !value.contains(':')
            && label.split_whitespace().count() == 1;

        if accept {
            let key = label[..label.len() - 1].to_string();
            debug!("tag {key} = {value:?}");
            out.push((key, value.clone()));
        }
    }
    out
}
