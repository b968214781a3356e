// src/config/options.rs
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::{Result, RipError};

/// Options file layout (TOML). Every table and key is optional.
///
/// ```toml
/// [timing]
/// lead_in_seconds = 2
/// gap_seconds = 5
///
/// [export]
/// out_dir = "labels"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub timing: TimingOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Load from a TOML file. A missing file is an error; callers only pass
    /// a path the user named.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RipError::Config(e.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingOptions {
    /// Silence recorded before the first track.
    pub lead_in_seconds: u32,
    /// Silence between consecutive tracks.
    pub gap_seconds: u32,
    /// Length of the whole recording; only used when the page has no track times.
    /// `None` or `Some(0)` means the default.
    pub total_length_minutes: Option<u32>,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            lead_in_seconds: DEFAULT_LEAD_IN_SECS,
            gap_seconds: DEFAULT_GAP_SECS,
            total_length_minutes: None,
        }
    }
}

impl TimingOptions {
    pub fn total_minutes(&self) -> u32 {
        match self.total_length_minutes {
            Some(m) if m > 0 => m,
            _ => DEFAULT_TOTAL_MINUTES,
        }
    }

    /// Apply raw user text on top of the current values.
    /// Blank input keeps the current value; anything else must be a
    /// non-negative integer.
    pub fn apply_overrides(
        &mut self,
        lead_in: Option<&str>,
        gap: Option<&str>,
        total_minutes: Option<&str>,
    ) -> Result<()> {
        if let Some(v) = parse_scalar("lead-in seconds", lead_in)? {
            self.lead_in_seconds = v;
        }
        if let Some(v) = parse_scalar("gap seconds", gap)? {
            self.gap_seconds = v;
        }
        if let Some(v) = parse_scalar("total length minutes", total_minutes)? {
            self.total_length_minutes = Some(v);
        }
        Ok(())
    }
}

fn parse_scalar(field: &'static str, raw: Option<&str>) -> Result<Option<u32>> {
    let Some(raw) = raw else { return Ok(None) };
    let t = raw.trim();
    if t.is_empty() {
        return Ok(None);
    }
    t.parse::<u32>()
        .map(Some)
        .map_err(|_| RipError::invalid(field, raw))
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Explicit label file name; default derives from artist and album.
    pub labels_file: Option<String>,
    /// Explicit tag template file name; default derives from artist and album.
    pub tags_file: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            labels_file: None,
            tags_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_common_lp_rip() {
        let t = TimingOptions::default();
        assert_eq!(t.lead_in_seconds, 0);
        assert_eq!(t.gap_seconds, 4);
        assert_eq!(t.total_minutes(), 46);
    }

    #[test]
    fn zero_total_minutes_means_default() {
        let t = TimingOptions { total_length_minutes: Some(0), ..Default::default() };
        assert_eq!(t.total_minutes(), 46);
        let t = TimingOptions { total_length_minutes: Some(38), ..Default::default() };
        assert_eq!(t.total_minutes(), 38);
    }

    #[test]
    fn overrides_blank_keeps_value() {
        let mut t = TimingOptions::default();
        t.apply_overrides(Some(""), Some("  "), None).unwrap();
        assert_eq!(t, TimingOptions::default());

        t.apply_overrides(Some("3"), Some(" 6 "), Some("52")).unwrap();
        assert_eq!(t.lead_in_seconds, 3);
        assert_eq!(t.gap_seconds, 6);
        assert_eq!(t.total_minutes(), 52);
    }

    #[test]
    fn overrides_reject_non_numeric_and_negative() {
        let mut t = TimingOptions::default();
        let err = t.apply_overrides(None, Some("four"), None).unwrap_err();
        assert!(matches!(err, RipError::InvalidInput { field: "gap seconds", .. }));

        let err = t.apply_overrides(Some("-2"), None, None).unwrap_err();
        assert!(matches!(err, RipError::InvalidInput { field: "lead-in seconds", .. }));
        assert_eq!(t, TimingOptions::default());
    }

    #[test]
    fn toml_partial_tables_fill_defaults() {
        let opts = AppOptions::from_toml("[timing]\ngap_seconds = 7\n").unwrap();
        assert_eq!(opts.timing.gap_seconds, 7);
        assert_eq!(opts.timing.lead_in_seconds, 0);
        assert_eq!(opts.export, ExportOptions::default());

        let opts = AppOptions::from_toml("[export]\nout_dir = \"rips\"\ntags_file = \"t.xml\"\n").unwrap();
        assert_eq!(opts.export.out_dir, PathBuf::from("rips"));
        assert_eq!(opts.export.tags_file.as_deref(), Some("t.xml"));
    }

    #[test]
    fn toml_type_errors_are_config_errors() {
        let err = AppOptions::from_toml("[timing]\ngap_seconds = \"x\"\n").unwrap_err();
        assert!(matches!(err, RipError::Config(_)));
    }
}
