// src/specs/mod.rs
//! # Page “specs”
//!
//! Everything that knows **where the data lives in a saved release page**.
//! Each spec reads one part of the parsed document and returns a freshly built
//! record; none of them touches another spec's output.
//!
//! ## What lives here
//! - `layout` – which track-list table layout the page uses (legacy `playlist`
//!   table, current `tracklist_*` table, or the first classed table as a last
//!   resort). Fails with `NoTrackListFound` when there is nothing to read.
//! - `tracklist` – ordered track rows (position, title, duration) from that table.
//! - `metadata` – album, artist and year from `<title>`, plus `Label:` / value
//!   pairs from the info section.
//!
//! ## What does **not** live here
//! - Duration estimation and label timing (`timing`).
//! - Writing label and tag files (`export`, `file`).
//!
//! ## Call chain
//! ```text
//! scrape::collect_album → specs::layout::classify → specs::tracklist::extract
//!                       ↘ specs::metadata::extract
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against small inline fixtures shaped like the
//! real pages; keep them tolerant of whitespace, attribute order and extra
//! wrapper elements.
pub mod layout;
pub mod metadata;
pub mod tracklist;
