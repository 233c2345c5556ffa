// File: crates/stream-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow for each stacking baseline.
// Behavior:
// - Renders a deterministic small streamgraph to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; the structural layer checks still run either way.

use stream_core::geometry::PlotArea;
use stream_core::{streamgraph, Baseline, Figure, RenderOptions, Smoothing, StreamgraphOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn figure(baseline: Baseline, smoothing: Option<Smoothing>) -> Figure {
    let streams = vec![
        vec![1.0, 1.5, 2.5, 2.0, 3.0, 2.5, 1.5, 1.0],
        vec![0.5, 1.0, 1.0, 2.0, 1.5, 1.0, 2.0, 2.5],
        vec![2.0, 1.5, 1.0, 0.5, 1.0, 2.0, 2.5, 3.0],
    ];
    let mut opts = StreamgraphOptions::default().with_baseline(baseline);
    opts.smoothing = smoothing;
    streamgraph(&streams, &opts).expect("compose")
}

fn render_options() -> RenderOptions {
    let mut render = RenderOptions::default();
    render.width = 400;
    render.height = 240;
    render.draw_labels = false; // avoid text nondeterminism across platforms
    render.draw_legend = false;
    render
}

// Every layer thick enough at the middle column is filled with its own color
// at the midpoint between its boundaries. Returns the number of layers checked.
fn assert_layer_fills(fig: &Figure, render: &RenderOptions) -> usize {
    let (px, _w, _h, stride) = fig.render_to_rgba8(render).expect("rgba render");
    let area = PlotArea::from_insets(render.width, render.height, &render.insets);
    let j = fig.len() / 2;
    let x = area.x_px(&fig.x_axis, fig.x[j]).floor() as usize;

    let mut checked = 0;
    for k in 0..fig.layers.layer_count() {
        let top = area.y_px(&fig.y_axis, fig.layers.upper(k)[j]);
        let bottom = area.y_px(&fig.y_axis, fig.layers.lower(k)[j]);
        if bottom - top < 8.0 {
            continue;
        }
        let y = ((top + bottom) * 0.5).floor() as usize;
        let i = y * stride + x * 4;
        let c = fig.colors[k];
        assert_eq!(&px[i..i + 4], &[c.r(), c.g(), c.b(), c.a()], "layer {k} at ({x}, {y})");
        checked += 1;
    }
    checked
}

fn check_and_snapshot(name: &str, baseline: Baseline, smoothing: Option<Smoothing>) {
    let fig = figure(baseline, smoothing);
    let render = render_options();
    assert!(assert_layer_fills(&fig, &render) >= 2, "{name}: too few layers checked");
    let bytes = fig.render_to_png_bytes(&render).expect("render bytes");
    write_or_compare(&snapshot_path(name), &bytes);
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_zero_baseline() {
    check_and_snapshot("zero.png", Baseline::Zero, None);
}

#[test]
fn golden_symmetric_baseline() {
    check_and_snapshot("symmetric.png", Baseline::Symmetric, None);
}

#[test]
fn golden_wiggle_interpolated() {
    check_and_snapshot("wiggle_interpolated.png", Baseline::Wiggle, Some(Smoothing::interpolation()));
}

#[test]
fn golden_moving_average() {
    check_and_snapshot("moving_average.png", Baseline::Zero, Some(Smoothing::moving_average(3)));
}

#[test]
fn baselines_render_different_pixels() {
    let render = render_options();
    let rgba = |b: Baseline| figure(b, None).render_to_rgba8(&render).expect("rgba render").0;
    let zero = rgba(Baseline::Zero);
    assert_ne!(zero, rgba(Baseline::Symmetric));
    assert_ne!(zero, rgba(Baseline::Wiggle));
}
