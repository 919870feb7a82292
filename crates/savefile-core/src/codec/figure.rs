//! Figure rendering.
//!
//! Every format starts from the same raster pass: the figure is drawn onto a
//! [`Canvas`], and the bounding box of the pixels that differ from the
//! background (plus a small pad) becomes the tight output bounds. Raster
//! formats and PDF crop the canvas to those bounds; SVG is drawn again as
//! vectors and its view box is narrowed to them.
use std::io::Cursor;

use image::{ColorType, ImageFormat};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::codec::pdf;
use crate::kernel::error::Result;
use crate::storage::error::StorageSystemError;
use crate::value::{Canvas, Figure, Rgb, SeriesStyle};

/// Blank border kept around the content when cropping, in pixels
const TIGHT_PAD: u32 = 4;
/// Chart margin inside the canvas, in pixels
const CHART_MARGIN: u32 = 10;

/// Pixel rectangle inside the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Render `figure` in the format named by `extension` (normalized, with dot).
///
/// Consumes the figure; its canvas is released before this returns, whether
/// or not encoding succeeded.
pub fn encode(figure: Figure, extension: &str) -> Result<Vec<u8>> {
    let format = extension.trim_start_matches('.');
    if figure.width() == 0 || figure.height() == 0 {
        return Err(StorageSystemError::serialization(format, "figure has a zero-sized canvas").into());
    }

    let mut canvas = figure.acquire_canvas();
    rasterize(&figure, &mut canvas, format)?;
    let bounds = content_bounds(&canvas, figure.background());
    debug!("Figure content bounds: {:?}", bounds);

    match extension {
        ".png" => encode_raster(&canvas, bounds, ImageFormat::Png, format),
        ".jpg" | ".jpeg" => encode_raster(&canvas, bounds, ImageFormat::Jpeg, format),
        ".tif" | ".tiff" => encode_raster(&canvas, bounds, ImageFormat::Tiff, format),
        ".pdf" => {
            let pixels = crop(&canvas, bounds);
            pdf::single_image(&pixels, bounds.width, bounds.height)
        }
        ".svg" => render_svg(&figure, bounds),
        other => Err(StorageSystemError::serialization(format, format!("no figure encoder for '{}'", other)).into()),
    }
}

fn rasterize(figure: &Figure, canvas: &mut Canvas, format: &str) -> Result<()> {
    let size = (canvas.width(), canvas.height());
    let root = BitMapBackend::with_buffer(canvas.pixels_mut(), size).into_drawing_area();
    draw(&root, figure).map_err(|e| StorageSystemError::serialization(format, e.to_string()))?;
    root.present()
        .map_err(|e| StorageSystemError::serialization(format, e.to_string()))?;
    Ok(())
}

fn render_svg(figure: &Figure, bounds: PixelBounds) -> Result<Vec<u8>> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (figure.width(), figure.height())).into_drawing_area();
        draw(&root, figure).map_err(|e| StorageSystemError::serialization("svg", e.to_string()))?;
        root.present()
            .map_err(|e| StorageSystemError::serialization("svg", e.to_string()))?;
    }
    Ok(narrow_view_box(&svg, figure.width(), figure.height(), bounds).into_bytes())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&color(figure.background()))?;

    let (x_range, y_range) = figure.data_bounds();
    let mut chart = ChartBuilder::on(root)
        .margin(CHART_MARGIN)
        .build_cartesian_2d(x_range, y_range)?;

    for series in figure.series() {
        let style = color(series.color);
        let points = series
            .points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite());
        match series.style {
            SeriesStyle::Line => {
                chart.draw_series(LineSeries::new(points, style.stroke_width(series.size)))?;
            }
            SeriesStyle::Scatter => {
                chart.draw_series(points.map(|p| Circle::new(p, series.size, style.filled())))?;
            }
        }
    }

    Ok(())
}

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

/// Bounding box of every pixel that differs from `background`, grown by
/// [`TIGHT_PAD`]. A blank canvas keeps its full size.
pub fn content_bounds(canvas: &Canvas, background: Rgb) -> PixelBounds {
    let (width, height) = (canvas.width(), canvas.height());
    let bg = [background.0, background.1, background.2];

    let mut found: Option<(u32, u32, u32, u32)> = None;
    for (index, pixel) in canvas.pixels().chunks_exact(3).enumerate() {
        if pixel == &bg[..] {
            continue;
        }
        let x = (index as u32) % width;
        let y = (index as u32) / width;
        found = Some(match found {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    match found {
        None => PixelBounds { x: 0, y: 0, width, height },
        Some((x0, y0, x1, y1)) => {
            let x0 = x0.saturating_sub(TIGHT_PAD);
            let y0 = y0.saturating_sub(TIGHT_PAD);
            let x1 = (x1 + TIGHT_PAD).min(width - 1);
            let y1 = (y1 + TIGHT_PAD).min(height - 1);
            PixelBounds {
                x: x0,
                y: y0,
                width: x1 - x0 + 1,
                height: y1 - y0 + 1,
            }
        }
    }
}

/// Copy the packed RGB pixels inside `bounds`.
pub fn crop(canvas: &Canvas, bounds: PixelBounds) -> Vec<u8> {
    let stride = canvas.width() as usize * 3;
    let row_len = bounds.width as usize * 3;
    let mut out = Vec::with_capacity(row_len * bounds.height as usize);
    for row in bounds.y..bounds.y + bounds.height {
        let start = row as usize * stride + bounds.x as usize * 3;
        out.extend_from_slice(&canvas.pixels()[start..start + row_len]);
    }
    out
}

fn encode_raster(canvas: &Canvas, bounds: PixelBounds, image_format: ImageFormat, format: &str) -> Result<Vec<u8>> {
    let pixels = crop(canvas, bounds);
    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(&mut out, &pixels, bounds.width, bounds.height, ColorType::Rgb8, image_format)
        .map_err(|e| StorageSystemError::serialization(format, e))?;
    Ok(out.into_inner())
}

/// Point the SVG's size and view box at `bounds`. Documents without the
/// expected root attributes are returned unchanged.
pub(crate) fn narrow_view_box(svg: &str, width: u32, height: u32, bounds: PixelBounds) -> String {
    let size_attrs = format!("width=\"{}\" height=\"{}\"", width, height);
    let view_box = format!("viewBox=\"0 0 {} {}\"", width, height);
    if !svg.contains(&size_attrs) || !svg.contains(&view_box) {
        return svg.to_string();
    }

    svg.replacen(
        &size_attrs,
        &format!("width=\"{}\" height=\"{}\"", bounds.width, bounds.height),
        1,
    )
    .replacen(
        &view_box,
        &format!("viewBox=\"{} {} {} {}\"", bounds.x, bounds.y, bounds.width, bounds.height),
        1,
    )
}
