// src/export.rs
use std::fmt::Write as _;
use std::io::{self, Write};

use crate::model::{AlbumMetadata, LabelInterval};

/* ---------------- Labels ---------------- */

/// Audacity label track text: `start\tend\ttitle`, six decimals, one per line.
pub fn render_labels(labels: &[LabelInterval]) -> String {
    let mut out = String::with_capacity(labels.len() * 48);
    for l in labels {
        let _ = writeln!(out, "{:.6}\t{:.6}\t{}", l.start_seconds, l.end_seconds, one_line(&l.title));
    }
    out
}

pub fn write_labels<W: Write>(w: &mut W, labels: &[LabelInterval]) -> io::Result<()> {
    w.write_all(render_labels(labels).as_bytes())
}

// Tabs and newlines inside a title would split the label line.
fn one_line(s: &str) -> String {
    s.chars().map(|c| if c == '\t' || c == '\n' || c == '\r' { ' ' } else { c }).collect()
}

/* ---------------- Tags ---------------- */

/// Audacity metadata template:
/// ```text
/// <tags>
///     <tag name="ALBUM" value="…"/>
/// </tags>
/// ```
pub fn render_tags(meta: &AlbumMetadata) -> String {
    let mut out = s!("<tags>\n");
    for (name, value) in meta.iter() {
        let _ = writeln!(out, "\t<tag name=\"{}\" value=\"{}\"/>", escape_xml(name), escape_xml(value));
    }
    out.push_str("</tags>\n");
    out
}

pub fn write_tags<W: Write>(w: &mut W, meta: &AlbumMetadata) -> io::Result<()> {
    w.write_all(render_tags(meta).as_bytes())
}

/// Values are already free of quotes; escape what is left that XML cares about.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
