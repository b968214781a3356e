// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod specs;
pub mod timing;

pub mod export;
pub mod file;
pub mod logger;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Result, RipError};
pub use model::{AlbumMetadata, LabelInterval, RawTrack};
pub use scrape::{collect_album, collect_album_file, AlbumRip};
