use crate::codec::figure::{PixelBounds, content_bounds, crop, encode, narrow_view_box};
use crate::kernel::error::Result;
use crate::value::{Figure, Rgb};

fn sample_figure() -> Figure {
    Figure::new(200, 120)
        .line([(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)])
        .scatter([(0.5, 0.5), (1.5, 1.5)])
}

#[test]
fn test_png_is_tightly_cropped() -> Result<()> {
    let bytes = encode(sample_figure(), ".png")?;
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));

    let decoded = image::load_from_memory(&bytes).expect("valid png");
    assert!(decoded.width() <= 200 && decoded.height() <= 120);
    assert!(decoded.width() < 200 || decoded.height() < 120, "content should not fill the margins");

    Ok(())
}

#[test]
fn test_raster_and_document_signatures() -> Result<()> {
    let jpg = encode(sample_figure(), ".jpg")?;
    assert!(jpg.starts_with(&[0xFF, 0xD8]));

    let jpeg = encode(sample_figure(), ".jpeg")?;
    assert!(jpeg.starts_with(&[0xFF, 0xD8]));

    for ext in [".tif", ".tiff"] {
        let tiff = encode(sample_figure(), ext)?;
        assert!(tiff.starts_with(b"II*\0") || tiff.starts_with(b"MM\0*"), "{} is not tiff", ext);
    }

    let pdf = encode(sample_figure(), ".pdf")?;
    assert!(pdf.starts_with(b"%PDF-"));

    Ok(())
}

#[test]
fn test_svg_output() -> Result<()> {
    let svg = String::from_utf8(encode(sample_figure(), ".svg")?).expect("svg is utf-8");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
    Ok(())
}

#[test]
fn test_empty_figure_renders() -> Result<()> {
    let bytes = encode(Figure::new(40, 30), ".png")?;
    let decoded = image::load_from_memory(&bytes).expect("valid png");
    // Nothing drawn: the canvas keeps its full size
    assert_eq!((decoded.width(), decoded.height()), (40, 30));
    Ok(())
}

#[test]
fn test_zero_sized_figure_fails() {
    assert!(encode(Figure::new(0, 10), ".png").is_err());
}

#[test]
fn test_unknown_extension_fails() {
    assert!(encode(sample_figure(), ".gif").is_err());
}

#[test]
fn test_content_bounds_pads_and_clamps() {
    let figure = Figure::new(10, 10);
    let mut canvas = figure.acquire_canvas();
    canvas.pixels_mut().fill(255);

    // Blank canvas keeps full bounds
    assert_eq!(
        content_bounds(&canvas, Rgb::WHITE),
        PixelBounds { x: 0, y: 0, width: 10, height: 10 }
    );

    // One red pixel at (5, 5)
    let offset = (5 * 10 + 5) * 3;
    canvas.pixels_mut()[offset..offset + 3].copy_from_slice(&[255, 0, 0]);
    assert_eq!(
        content_bounds(&canvas, Rgb::WHITE),
        PixelBounds { x: 1, y: 1, width: 9, height: 9 }
    );
}

#[test]
fn test_crop_copies_rows() {
    let figure = Figure::new(4, 2);
    let mut canvas = figure.acquire_canvas();
    for (i, byte) in canvas.pixels_mut().iter_mut().enumerate() {
        *byte = i as u8;
    }

    let cropped = crop(&canvas, PixelBounds { x: 1, y: 1, width: 2, height: 1 });
    // Row 1 starts at byte 12; pixel 1 of that row at byte 15
    assert_eq!(cropped, vec![15, 16, 17, 18, 19, 20]);
}

#[test]
fn test_narrow_view_box() {
    let svg = r#"<svg width="200" height="100" viewBox="0 0 200 100" xmlns="http://www.w3.org/2000/svg"></svg>"#;
    let bounds = PixelBounds { x: 6, y: 4, width: 180, height: 90 };

    let narrowed = narrow_view_box(svg, 200, 100, bounds);
    assert!(narrowed.contains(r#"width="180" height="90""#));
    assert!(narrowed.contains(r#"viewBox="6 4 180 90""#));

    // Unexpected documents pass through untouched
    assert_eq!(narrow_view_box("<svg/>", 200, 100, bounds), "<svg/>");
}
