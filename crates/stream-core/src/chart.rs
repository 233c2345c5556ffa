// File: crates/stream-core/src/chart.rs
// Summary: Headless rendering of a Figure (stacked areas, axes, title, legend) using Skia CPU raster surfaces.

use log::info;
use skia_safe as skia;

use crate::axis::{format_tick, Axis};
use crate::error::{Result, StreamError};
use crate::geometry::PlotArea;
use crate::streamgraph::Figure;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const X_TICKS: usize = 6;
const Y_TICKS: usize = 6;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis labels and tick labels. Off gives platform-independent pixels.
    pub draw_labels: bool,
    pub draw_legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            draw_legend: true,
        }
    }
}

impl Figure {
    /// Render the figure to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Render the figure and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| StreamError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(StreamError::Render("read pixels failed".into()));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            return Err(StreamError::Render(format!(
                "invalid surface size {}x{}",
                opts.width, opts.height
            )));
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| StreamError::Render("failed to create raster surface".into()))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;

        canvas.clear(theme.background);

        let area = PlotArea::from_insets(opts.width, opts.height, &opts.insets);

        draw_grid(canvas, &area, theme);
        draw_layers(canvas, &area, self);
        draw_axes(canvas, &area, theme);

        if opts.draw_labels {
            draw_tick_labels(canvas, &area, &self.x_axis, &self.y_axis, theme);
            draw_axis_labels(canvas, &area, &self.x_axis, &self.y_axis, theme);
            draw_title(canvas, opts.width, &area, &self.title, theme);
        }
        if opts.draw_legend && self.legend {
            draw_legend(canvas, &area, self, theme, opts.draw_labels);
        }

        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, area: &PlotArea, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (area.left as f64, area.top as f64, area.right as f64, area.bottom as f64);
    // verticals
    for x in crate::grid::linspace(l, r, X_TICKS) {
        canvas.draw_line((x as f32, area.top), (x as f32, area.bottom), &paint);
    }
    // horizontals
    for y in crate::grid::linspace(t, b, Y_TICKS) {
        canvas.draw_line((area.left, y as f32), (area.right, y as f32), &paint);
    }
}

fn draw_layers(canvas: &skia::Canvas, area: &PlotArea, fig: &Figure) {
    if fig.x.is_empty() { return; }

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    canvas.save();
    canvas.clip_rect(
        skia::Rect::from_ltrb(area.left, area.top, area.right, area.bottom),
        skia::ClipOp::Intersect,
        true,
    );

    for k in 0..fig.layers.layer_count() {
        let lower = fig.layers.lower(k);
        let upper = fig.layers.upper(k);

        // Upper edge left to right, lower edge back right to left.
        let mut path = skia::PathBuilder::new();
        path.move_to((area.x_px(&fig.x_axis, fig.x[0]), area.y_px(&fig.y_axis, upper[0])));
        for (x, y) in fig.x.iter().zip(upper).skip(1) {
            path.line_to((area.x_px(&fig.x_axis, *x), area.y_px(&fig.y_axis, *y)));
        }
        for (x, y) in fig.x.iter().zip(lower).rev() {
            path.line_to((area.x_px(&fig.x_axis, *x), area.y_px(&fig.y_axis, *y)));
        }
        path.close();

        if let Some(color) = fig.colors.get(k) {
            fill.set_color(*color);
        }
        canvas.draw_path(&path.detach(), &fill);
    }

    canvas.restore();
}

fn draw_axes(canvas: &skia::Canvas, area: &PlotArea, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((area.left, area.bottom), (area.right, area.bottom), &axis_paint);
    canvas.draw_line((area.left, area.top), (area.left, area.bottom), &axis_paint);
}

fn label_font(size: f32) -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(size);
    font
}

fn text_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint
}

fn draw_tick_labels(canvas: &skia::Canvas, area: &PlotArea, x: &Axis, y: &Axis, theme: &Theme) {
    let font = label_font(12.0);
    let paint = text_paint(theme.tick);

    for v in x.ticks(X_TICKS) {
        let s = format_tick(v);
        let (w, _) = font.measure_str(&s, Some(&paint));
        canvas.draw_str(&s, (area.x_px(x, v) - w * 0.5, area.bottom + 18.0), &font, &paint);
    }
    for v in y.ticks(Y_TICKS) {
        let s = format_tick(v);
        let (w, _) = font.measure_str(&s, Some(&paint));
        canvas.draw_str(&s, (area.left - w - 6.0, area.y_px(y, v) + 4.0), &font, &paint);
    }
}

fn draw_axis_labels(canvas: &skia::Canvas, area: &PlotArea, x: &Axis, y: &Axis, theme: &Theme) {
    let font = label_font(14.0);
    let paint = text_paint(theme.axis_label);

    let (xw, _) = font.measure_str(&x.label, Some(&paint));
    let cx = area.left + area.width() * 0.5 - xw * 0.5;
    canvas.draw_str(&x.label, (cx, area.bottom + 44.0), &font, &paint);

    // Y label rotated to read bottom-up along the left edge.
    let (yw, _) = font.measure_str(&y.label, Some(&paint));
    let cy = area.top + area.height() * 0.5;
    canvas.save();
    canvas.translate((area.left - 56.0, cy + yw * 0.5));
    canvas.rotate(-90.0, None);
    canvas.draw_str(&y.label, (0.0, 0.0), &font, &paint);
    canvas.restore();
}

fn draw_title(canvas: &skia::Canvas, width: i32, area: &PlotArea, title: &str, theme: &Theme) {
    if title.is_empty() { return; }
    let font = label_font(18.0);
    let paint = text_paint(theme.title);
    let (w, _) = font.measure_str(title, Some(&paint));
    canvas.draw_str(title, (width as f32 * 0.5 - w * 0.5, area.top - 18.0), &font, &paint);
}

/// Legend box anchored to the upper-right corner of the plot area; only labelled streams appear.
fn draw_legend(canvas: &skia::Canvas, area: &PlotArea, fig: &Figure, theme: &Theme, draw_text: bool) {
    let entries: Vec<(usize, &str)> = (0..fig.stream_count())
        .filter_map(|k| fig.label(k).filter(|l| !l.is_empty()).map(|l| (k, l)))
        .collect();
    if entries.is_empty() { return; }

    let font = label_font(12.0);
    let paint = text_paint(theme.axis_label);
    let swatch = 12.0f32;
    let row_h = 18.0f32;
    let pad = 8.0f32;
    let text_w = entries
        .iter()
        .map(|(_, l)| font.measure_str(l, Some(&paint)).0)
        .fold(0.0f32, f32::max);

    let box_w = pad * 3.0 + swatch + text_w;
    let box_h = pad * 2.0 + row_h * entries.len() as f32;
    let right = area.right - 10.0;
    let top = area.top + 10.0;
    let frame = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

    let mut bg = skia::Paint::default();
    bg.set_color(theme.legend_background);
    bg.set_style(skia::paint::Style::Fill);
    canvas.draw_rect(frame, &bg);

    let mut border = skia::Paint::default();
    border.set_color(theme.legend_border);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_anti_alias(true);
    canvas.draw_rect(frame, &border);

    let mut sw = skia::Paint::default();
    sw.set_style(skia::paint::Style::Fill);
    for (row, (k, label)) in entries.iter().enumerate() {
        let y = frame.top + pad + row_h * row as f32;
        if let Some(color) = fig.colors.get(*k) {
            sw.set_color(*color);
        }
        let x = frame.left + pad;
        canvas.draw_rect(skia::Rect::from_xywh(x, y + 2.0, swatch, swatch), &sw);
        if draw_text {
            canvas.draw_str(label, (x + swatch + pad, y + swatch), &font, &paint);
        }
    }
}
