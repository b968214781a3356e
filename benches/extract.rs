// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vinyl_labels::config::TimingOptions;
use vinyl_labels::core::html::load_document;
use vinyl_labels::specs::{layout, metadata, tracklist};
use vinyl_labels::{collect_album, timing};

/// A release page with a 40-row legacy track table and a small info section.
fn sample_page() -> String {
    let mut html = String::from(
        "<html><head><title>Bench Artist – Bench Album (1984, Vinyl) | Discogs</title></head><body>\
         <div class=\"profile\"><div class=\"head\">Genre:</div><div class=\"content\">Electronic</div>\
         <div class=\"head\">Style:</div><div class=\"content\">Synth-pop</div></div>\
         <table class=\"playlist\">",
    );
    for i in 0..40 {
        let side = if i < 20 { 'A' } else { 'B' };
        html.push_str(&format!(
            "<tr class=\"tracklist_track track\" data-track-position=\"{side}{n}\">\
             <td class=\"tracklist_track_pos\">{side}{n}</td>\
             <td class=\"track tracklist_track_title\"><span class=\"tracklist_track_title\">Track {i}</span></td>\
             <td class=\"tracklist_track_duration\"><span>{m}:{s:02}</span></td></tr>",
            n = i % 20 + 1,
            m = 2 + i % 5,
            s = (i * 7) % 60,
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let page = sample_page();
    let doc = load_document(&page);
    let timing_opts = TimingOptions::default();

    c.bench_function("parse_document", |b| {
        b.iter(|| black_box(load_document(black_box(&page))))
    });

    c.bench_function("tracklist_extract", |b| {
        b.iter(|| {
            let layout = layout::classify(black_box(&doc)).unwrap();
            let list = tracklist::extract(&doc, &layout).unwrap();
            black_box(list.tracks.len())
        })
    });

    c.bench_function("metadata_extract", |b| {
        b.iter(|| black_box(metadata::extract(black_box(&doc)).unwrap().len()))
    });

    let layout = layout::classify(&doc).unwrap();
    let tracks = tracklist::extract(&doc, &layout).unwrap().tracks;
    c.bench_function("synthesize", |b| {
        b.iter(|| black_box(timing::synthesize(black_box(&tracks), 0.0, 4.0).unwrap().len()))
    });

    c.bench_function("collect_album", |b| {
        b.iter(|| black_box(collect_album(black_box(&page), &timing_opts).unwrap().labels.len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
