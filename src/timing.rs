// src/timing.rs
// Track durations → label offsets in one continuous recording.
//
//   start[0] = lead_in
//   start[i] = start[i-1] + dur[i-1] + gap
//   end[i]   = start[i] + dur[i]

use log::{info, warn};

use crate::error::{Result, RipError};
use crate::model::{LabelInterval, RawTrack};

/// `"3:30"` → 210. Exactly two numeric components; surrounding whitespace is fine.
pub fn parse_duration(s: &str) -> Option<u32> {
    let (m, sec) = s.trim().split_once(':')?;
    if sec.contains(':') {
        return None;
    }
    let m: u32 = m.trim().parse().ok()?;
    let sec: u32 = sec.trim().parse().ok()?;
    m.checked_mul(60)?.checked_add(sec)
}

/// 276 → `"4:36"`, 27 → `"0:27"`, 66 → `"1:06"`.
pub fn format_duration(total_secs: u32) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

fn track_seconds(track: &RawTrack) -> Result<f64> {
    let raw = track.duration.as_deref().ok_or_else(|| RipError::MissingDuration {
        position: track.position.clone(),
    })?;
    parse_duration(raw)
        .map(f64::from)
        .ok_or_else(|| RipError::MalformedDuration {
            position: track.position.clone(),
            value: s!(raw),
        })
}

/// Spread `total_minutes` evenly over the tracks, overwriting every duration.
///
/// Only a rough placement: each label after the first will need moving by hand.
/// Per-track seconds are truncated, never rounded.
pub fn estimate_durations(tracks: &[RawTrack], total_minutes: u32) -> Result<Vec<RawTrack>> {
    if tracks.is_empty() {
        return Err(RipError::invalid("track count", "0"));
    }
    let count = u32::try_from(tracks.len()).map_err(|_| RipError::invalid("track count", tracks.len().to_string()))?;
    let per_track = format_duration(total_minutes.saturating_mul(60) / count);
    warn!("page has no track times; estimating {per_track} per track over {total_minutes} min");

    Ok(tracks
        .iter()
        .map(|t| RawTrack { duration: Some(per_track.clone()), ..t.clone() })
        .collect())
}

/// Lay the tracks end to end, `gap_seconds` apart, starting at `lead_in_seconds`.
///
/// Negative lead-in or gap is not checked here; option parsing only admits
/// non-negative values. An empty track list gives an empty label list.
pub fn synthesize(tracks: &[RawTrack], lead_in_seconds: f64, gap_seconds: f64) -> Result<Vec<LabelInterval>> {
    let mut labels = Vec::with_capacity(tracks.len());
    let mut start = lead_in_seconds;

    for (i, track) in tracks.iter().enumerate() {
        if i > 0 {
            start += track_seconds(&tracks[i - 1])? + gap_seconds;
        }
        let end = start + track_seconds(track)?;
        labels.push(LabelInterval {
            start_seconds: start,
            end_seconds: end,
            title: track.title.clone().unwrap_or_default(),
        });
    }

    info!("synthesized {} labels", labels.len());
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks(durs: &[&str]) -> Vec<RawTrack> {
        durs.iter()
            .enumerate()
            .map(|(i, d)| RawTrack::new(format!("A{}", i + 1), format!("T{}", i + 1), Some(*d)))
            .collect()
    }

    fn triples(labels: &[LabelInterval]) -> Vec<(f64, f64, &str)> {
        labels.iter().map(|l| (l.start_seconds, l.end_seconds, l.title.as_str())).collect()
    }

    #[test]
    fn three_tracks_default_gap() {
        let labels = synthesize(&tracks(&["3:30", "4:00", "2:45"]), 0.0, 4.0).unwrap();
        assert_eq!(triples(&labels), vec![
            (0.0, 210.0, "T1"),
            (214.0, 454.0, "T2"),
            (458.0, 623.0, "T3"),
        ]);
    }

    #[test]
    fn adjacent_labels_differ_by_exactly_the_gap() {
        let input = tracks(&["1:01", "0:59", "12:00", "3:03", "0:00"]);
        let labels = synthesize(&input, 7.0, 2.5).unwrap();
        assert_eq!(labels.len(), input.len());
        assert_eq!(labels[0].start_seconds, 7.0);
        for w in labels.windows(2) {
            assert_eq!(w[1].start_seconds, w[0].end_seconds + 2.5);
        }
    }

    #[test]
    fn single_track_and_zero_gap() {
        let labels = synthesize(&tracks(&["5:00"]), 3.0, 0.0).unwrap();
        assert_eq!(triples(&labels), vec![(3.0, 303.0, "T1")]);

        let labels = synthesize(&tracks(&["1:00", "1:00"]), 0.0, 0.0).unwrap();
        assert_eq!(labels[1].start_seconds, labels[0].end_seconds);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(synthesize(&[], 0.0, 4.0).unwrap().is_empty());
    }

    #[test]
    fn malformed_duration_names_the_track() {
        let err = synthesize(&tracks(&["3:30", "4m", "1:00"]), 0.0, 4.0).unwrap_err();
        match err {
            RipError::MalformedDuration { position, value } => {
                assert_eq!(position, "A2");
                assert_eq!(value, "4m");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_duration_in_mixed_list() {
        let mut input = tracks(&["3:30", "4:00"]);
        input[1].duration = None;
        let err = synthesize(&input, 0.0, 4.0).unwrap_err();
        assert!(matches!(err, RipError::MissingDuration { ref position } if position == "A2"));
    }

    #[test]
    fn parse_duration_forms() {
        assert_eq!(parse_duration("3:30"), Some(210));
        assert_eq!(parse_duration(" 4:6 "), Some(246));
        assert_eq!(parse_duration("0:27"), Some(27));
        assert_eq!(parse_duration("330"), None);
        assert_eq!(parse_duration("1:02:03"), None);
        assert_eq!(parse_duration("a:10"), None);
        assert_eq!(parse_duration(""), None);
        // Out of range for u32 seconds
        assert_eq!(parse_duration("99999999:00"), None);
        assert_eq!(parse_duration("71582788:16"), None);
        assert_eq!(parse_duration("71582788:15"), Some(u32::MAX));
    }

    #[test]
    fn format_then_parse_is_identity() {
        for secs in [0u32, 1, 27, 59, 60, 61, 276, 599, 3599, 3600, 7261] {
            assert_eq!(parse_duration(&format_duration(secs)), Some(secs));
        }
    }

    #[test]
    fn estimate_ten_tracks_over_46_minutes() {
        let input: Vec<RawTrack> = (1..=10).map(|i| RawTrack::new(i.to_string(), "x", None)).collect();
        let out = estimate_durations(&input, 46).unwrap();
        assert_eq!(out.len(), 10);
        assert!(out.iter().all(|t| t.duration.as_deref() == Some("4:36")));
        assert_eq!(out[3].position, "4");

        let labels = synthesize(&out, 0.0, 4.0).unwrap();
        assert_eq!(labels[0].start_seconds, 0.0);
        assert_eq!(labels[1].start_seconds, 280.0);
    }

    #[test]
    fn estimate_truncates() {
        // 46 * 60 / 7 = 394.28…
        let input: Vec<RawTrack> = (1..=7).map(|i| RawTrack::new(i.to_string(), "x", None)).collect();
        let out = estimate_durations(&input, 46).unwrap();
        assert_eq!(out[0].duration.as_deref(), Some("6:34"));
    }

    #[test]
    fn estimate_rejects_empty_list() {
        let err = estimate_durations(&[], 46).unwrap_err();
        assert!(matches!(err, RipError::InvalidInput { field: "track count", .. }));
    }
}
