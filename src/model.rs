// src/model.rs
// Records passed between the extractors, the timing core and the writers.

/// One row of the page's track list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTrack {
    /// Side/track notation as printed ("A1", "2", "B3a"). Never empty once emitted.
    pub position: String,
    pub title: Option<String>,
    /// `minutes:seconds`; `None` when the page gives no time for this row.
    pub duration: Option<String>,
}

impl RawTrack {
    pub fn new(position: impl Into<String>, title: impl Into<String>, duration: Option<&str>) -> Self {
        Self {
            position: position.into(),
            title: Some(title.into()),
            duration: duration.map(String::from),
        }
    }
}

/// Album tags keyed by uppercase field name.
///
/// Keeps first-insertion order so the tag template comes out the same way
/// every run; re-inserting a key replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlbumMetadata {
    entries: Vec<(String, String)>,
}

impl AlbumMetadata {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let key = key.trim().to_uppercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_uppercase();
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool { self.get(key).is_some() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn album(&self) -> &str { self.get("ALBUM").unwrap_or("") }
    pub fn artist(&self) -> &str { self.get("ARTIST").unwrap_or("") }
}

/// One Audacity label: a named region of the continuous recording.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelInterval {
    pub start_seconds: f64,
    pub end_seconds: f64,
    pub title: String,
}
