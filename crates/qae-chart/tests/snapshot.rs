// File: crates/qae-chart/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; size and segment color are still checked.

use qae_chart::{Axis, Chart, Color, Guide, LineStyle, Marker, RenderOptions, Series, SeriesStyle};

fn render_bytes() -> Vec<u8> {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", -0.5, 7.5);
    chart.y_axis = Axis::new("Y", -0.5, 2.0);
    let red = SeriesStyle::solid(Color::rgb(228, 26, 28));
    let blue = SeriesStyle::solid(Color::rgb(55, 126, 184))
        .with_line_style(LineStyle::Dashed)
        .with_marker(Marker::Circle, Color::rgb(55, 126, 184), Color::WHITE);
    chart.add_series(Series::line_from(0, &[0.0, 1.0, 0.0, 1.5]).with_style(red));
    chart.add_series(Series::line_from(4, &[1.0, 0.5, 1.2, 0.8]).with_style(blue));
    chart.add_guide(Guide::vertical(3.5, Color::LIGHT_GRAY, LineStyle::Dashed));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_segmented_chart() {
    let bytes = render_bytes();
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (576, 432));
    // segment colors are present even without a golden file
    let reddish = |p: &image::Rgba<u8>| p.0[0] as i32 - p.0[1] as i32 > 60 && p.0[0] as i32 - p.0[2] as i32 > 60;
    assert!(img.pixels().any(reddish), "red segment missing");

    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("segmented_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}
