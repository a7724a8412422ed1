// File: crates/qae-utils/tests/snapshot.rs
// Purpose: Golden snapshot of a multi-segment time series plot.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; size and first segment color are still checked.

use qae_chart::{LineStyle, Marker};
use qae_utils::{multi_plot_flat_ts, MultiPlotOptions, SeriesParams};

fn render_bytes() -> Vec<u8> {
    let series = vec![
        vec![0.0, 0.4, 0.9, 0.6, 0.3],
        vec![0.35, 0.5, 0.8],
        vec![0.7, 0.2, 0.1, 0.4],
    ];
    let params = SeriesParams::new()
        .line_styles([LineStyle::Solid, LineStyle::Dashed, LineStyle::Dotted])
        .markers([Marker::None, Marker::Circle, Marker::Square]);
    let mut plot = multi_plot_flat_ts(&series, &params, &MultiPlotOptions::default()).expect("plot");
    plot.options.draw_labels = false;
    plot.to_png().expect("render bytes")
}

#[test]
fn golden_multi_segment_plot() {
    let bytes = render_bytes();
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (864, 432));
    let reddish = |p: &image::Rgba<u8>| p.0[0] as i32 - p.0[1] as i32 > 60 && p.0[0] as i32 - p.0[2] as i32 > 60;
    assert!(img.pixels().any(reddish), "first segment not drawn in Set1 red");

    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("multi_segment.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
