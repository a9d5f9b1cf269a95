//! Line charts for tab-separated timing benchmarks.

use plotters::prelude::*;

use std::fmt::Display;
use std::ops::Range;
use std::path::Path;

mod benchmark;
mod error;

pub use benchmark::*;
pub use error::Error;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            (($colour & 0x0000FF) >> 0) as u8,
        )
    };
}

const COLOURS: &[RGBColor] = &[
    hexcolour!(0x1F77B4),
    hexcolour!(0xFF7F0E),
    hexcolour!(0x2CA02C),
    hexcolour!(0xD62728),
    hexcolour!(0x9467BD),
    hexcolour!(0x8C564B),
    hexcolour!(0xE377C2),
    hexcolour!(0x7F7F7F),
    hexcolour!(0xBCBD22),
    hexcolour!(0x17BECF),
];

pub const DEFAULT_Y_DESC: &str = "Время вычисления, мс";

/// Something that turns a parsed benchmark into an image at `filename`.
pub trait Render {
    fn render(&mut self, benchmark: &Benchmark, filename: &Path) -> Result<(), Error>;
}

fn draw_err(e: impl Display) -> Error {
    Error::Draw(e.to_string())
}

/// Vertical range covering every finite value with a 5% margin.
pub fn y_range(benchmark: &Benchmark) -> Range<f64> {
    let (min, max) = benchmark.value_range().unwrap_or((0.0, 1.0));
    let span = if max > min {
        max - min
    } else {
        max.abs().max(1.0)
    };
    let margin = span * 0.05;
    (min - margin)..(max + margin)
}

/// Label for an x position. Categories sit on whole numbers.
pub fn category_label(categories: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    categories.get(index as usize).cloned().unwrap_or_default()
}

pub struct PlotConfig {
    y_desc: String,
    font: String,
    size: (u32, u32),
    grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self {
            y_desc: DEFAULT_Y_DESC.to_owned(),
            font: "sans-serif".to_owned(),
            size: (640, 480),
            grid: true,
        }
    }

    pub fn y_desc(&mut self, y_desc: impl AsRef<str>) -> &mut Self {
        self.y_desc = y_desc.as_ref().to_owned();
        self
    }

    pub fn font(&mut self, font: impl AsRef<str>) -> &mut Self {
        self.font = font.as_ref().to_owned();
        self
    }

    pub fn size(&mut self, size: (u32, u32)) -> &mut Self {
        self.size = size;
        self
    }

    pub fn grid(&mut self, grid: bool) -> &mut Self {
        self.grid = grid;
        self
    }

    /// Draw every series of `benchmark` as a line with point markers and
    /// write the bitmap to `filename`.
    pub fn plot(&self, benchmark: &Benchmark, filename: &Path) -> Result<(), Error> {
        let root = BitMapBackend::new(filename, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let categories = benchmark.categories.len();
        let x_range = -0.5..(categories as f64 - 0.5);

        let mut chart = ChartBuilder::on(&root)
            .caption(&benchmark.title, (self.font.as_str(), 24))
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 50)
            .build_cartesian_2d(x_range, y_range(benchmark))
            .map_err(draw_err)?;

        let formatter = |x: &f64| category_label(&benchmark.categories, *x);
        {
            let mut mesh = chart.configure_mesh();
            mesh.x_desc(benchmark.x_desc.as_str())
                .y_desc(self.y_desc.as_str())
                .x_labels(categories)
                .x_label_formatter(&formatter)
                .label_style((self.font.as_str(), 14))
                .axis_desc_style((self.font.as_str(), 16));
            if !self.grid {
                mesh.disable_mesh();
            }
            mesh.draw().map_err(draw_err)?;
        }

        for (i, series) in benchmark.series.iter().enumerate() {
            let colour = COLOURS[i % COLOURS.len()];
            let points: Vec<(f64, f64)> = series
                .values
                .iter()
                .enumerate()
                .filter(|(_, y)| y.is_finite())
                .map(|(x, y)| (x as f64, *y))
                .collect();

            chart
                .draw_series(LineSeries::new(points.iter().copied(), colour.stroke_width(2)))
                .map_err(draw_err)?
                .label(series.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], colour.stroke_width(2))
                });

            chart
                .draw_series(points.iter().map(|&p| Circle::new(p, 4, colour.filled())))
                .map_err(draw_err)?;
        }

        if !benchmark.series.is_empty() {
            chart
                .configure_series_labels()
                .label_font((self.font.as_str(), 14))
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(draw_err)?;
        }

        root.present().map_err(draw_err)?;
        Ok(())
    }
}

impl Render for PlotConfig {
    fn render(&mut self, benchmark: &Benchmark, filename: &Path) -> Result<(), Error> {
        self.plot(benchmark, filename)
    }
}
