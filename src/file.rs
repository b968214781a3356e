// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::{HTML_EXT, LABELS_EXT, LABELS_SUFFIX, TAGS_EXT, TAGS_SUFFIX};
use crate::config::ExportOptions;
use crate::core::sanitize::sanitize_file_stem;
use crate::error::{Result, RipError};
use crate::export;
use crate::model::{AlbumMetadata, LabelInterval};

/// `<Artist>-<Album>`, spaces as underscores.
fn album_stem(meta: &AlbumMetadata) -> String {
    join!(&sanitize_file_stem(meta.artist()), "-", &sanitize_file_stem(meta.album()))
}

/// `Artist_Name-Album_Title-labels.txt`
pub fn default_labels_filename(meta: &AlbumMetadata) -> String {
    join!(&album_stem(meta), LABELS_SUFFIX, ".", LABELS_EXT)
}

/// `Artist_Name-Album_Title-tags.xml`
pub fn default_tags_filename(meta: &AlbumMetadata) -> String {
    join!(&album_stem(meta), TAGS_SUFFIX, ".", TAGS_EXT)
}

/// A user-supplied name gets the expected extension appended when missing.
pub fn with_extension(name: &str, ext: &str) -> String {
    let name = name.trim();
    let has_ext = Path::new(name)
        .extension()
        .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case(ext));
    if has_ext { s!(name) } else { join!(name, ".", ext) }
}

pub fn labels_path(export: &ExportOptions, meta: &AlbumMetadata) -> PathBuf {
    let name = match &export.labels_file {
        Some(n) if !n.trim().is_empty() => with_extension(n, LABELS_EXT),
        _ => default_labels_filename(meta),
    };
    export.out_dir.join(name)
}

pub fn tags_path(export: &ExportOptions, meta: &AlbumMetadata) -> PathBuf {
    let name = match &export.tags_file {
        Some(n) if !n.trim().is_empty() => with_extension(n, TAGS_EXT),
        _ => default_tags_filename(meta),
    };
    export.out_dir.join(name)
}

/// Write the label file; returns the path written to.
pub fn write_labels_file(
    export: &ExportOptions,
    meta: &AlbumMetadata,
    labels: &[LabelInterval],
) -> Result<PathBuf> {
    let path = labels_path(export, meta);
    let mut out = create_file(&path)?;
    export::write_labels(&mut out, labels)?;
    out.flush()?;
    Ok(path)
}

/// Write the tag template; returns the path written to.
pub fn write_tags_file(export: &ExportOptions, meta: &AlbumMetadata) -> Result<PathBuf> {
    let path = tags_path(export, meta);
    let mut out = create_file(&path)?;
    export::write_tags(&mut out, meta)?;
    out.flush()?;
    Ok(path)
}

/// Ensure parent dir exists; create/truncate file.
fn create_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(RipError::invalid("output directory", dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Saved pages in `dir`, sorted by name.
pub fn list_html_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() { continue; }
        let is_html = path
            .extension()
            .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case(HTML_EXT));
        if is_html { out.push(path); }
    }
    out.sort();
    Ok(out)
}

/// A file is used as is; a directory must hold exactly one saved page.
pub fn resolve_input(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }
    let mut pages = list_html_files(path)?;
    match pages.len() {
        1 => Ok(pages.remove(0)),
        0 => Err(RipError::invalid("input", format!("no .html files in {}", path.display()))),
        _ => {
            let names: Vec<String> = pages.iter().map(|p| p.display().to_string()).collect();
            Err(RipError::invalid("input", format!("several pages, pick one: {}", names.join(", "))))
        }
    }
}
