//! Plot descriptions and the drawing surface they are rendered onto.
use std::ops::Range;

use log::debug;

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

/// Colours assigned to series that do not pick one
const PALETTE: [Rgb; 6] = [
    Rgb(31, 119, 180),
    Rgb(255, 127, 14),
    Rgb(44, 160, 44),
    Rgb(214, 39, 40),
    Rgb(148, 103, 189),
    Rgb(140, 86, 75),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    /// Points joined by a polyline
    Line,
    /// Unjoined filled markers
    Scatter,
}

/// One plotted data series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub style: SeriesStyle,
    pub points: Vec<(f64, f64)>,
    pub color: Rgb,
    /// Line width, or marker radius for scatter series, in pixels
    pub size: u32,
}

/// A plot to be rendered by the figure encoder.
///
/// Saving consumes the figure; the pixel surface it is drawn on is a
/// [`Canvas`] that only lives for the duration of the encode.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    width: u32,
    height: u32,
    background: Rgb,
    series: Vec<Series>,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

impl Figure {
    /// Create an empty figure with the given canvas size in pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Rgb::WHITE,
            series: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Add a line series coloured from the default palette
    pub fn line(self, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        self.push_styled(SeriesStyle::Line, points, 2)
    }

    /// Add a scatter series coloured from the default palette
    pub fn scatter(self, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        self.push_styled(SeriesStyle::Scatter, points, 3)
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    fn push_styled(
        mut self,
        style: SeriesStyle,
        points: impl IntoIterator<Item = (f64, f64)>,
        size: u32,
    ) -> Self {
        let color = PALETTE[self.series.len() % PALETTE.len()];
        self.series.push(Series {
            style,
            points: points.into_iter().collect(),
            color,
            size,
        });
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Data ranges covering every finite point. Degenerate or empty ranges
    /// are widened so they can be mapped onto the canvas.
    pub fn data_bounds(&self) -> (Range<f64>, Range<f64>) {
        let finite = self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite());

        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        for &(x, y) in finite {
            bounds = Some(match bounds {
                None => (x, x, y, y),
                Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
            });
        }

        let (x0, x1, y0, y1) = bounds.unwrap_or((0.0, 1.0, 0.0, 1.0));
        (widen(x0, x1), widen(y0, y1))
    }

    /// Allocate the drawing surface for this figure.
    pub fn acquire_canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }
}

fn widen(lo: f64, hi: f64) -> Range<f64> {
    if hi > lo { lo..hi } else { (lo - 0.5)..(hi + 0.5) }
}

/// RGB pixel surface a figure is rasterized onto.
///
/// The buffer is released when the canvas is dropped, on every exit path of
/// the encoder.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        debug!("Acquiring {}x{} drawing surface", width, height);
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

impl Drop for Canvas {
    fn drop(&mut self) {
        debug!("Releasing {}x{} drawing surface", self.width, self.height);
        self.pixels = Vec::new();
    }
}
