// src/config/consts.rs

// Timing defaults
pub const DEFAULT_LEAD_IN_SECS: u32 = 0;
pub const DEFAULT_GAP_SECS: u32 = 4;
pub const DEFAULT_TOTAL_MINUTES: u32 = 46; // one LP, both sides

// Page
pub const SITE_BRAND: &str = "Discogs";
pub const VARIOUS_ARTIST: &str = "various";
pub const TRACK_POSITION_ATTR: &str = "data-track-position";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const LABELS_SUFFIX: &str = "-labels";
pub const LABELS_EXT: &str = "txt";
pub const TAGS_SUFFIX: &str = "-tags";
pub const TAGS_EXT: &str = "xml";
pub const HTML_EXT: &str = "html";

// Logging
pub const LOG_FILE: &str = "vinyl_labels.log";
