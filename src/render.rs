/*!
Row-by-row rendering.

Every pixel is a pure function of its position, so rows can be computed in
any order. The P6 format is positional though, so rows must reach the writer
top to bottom. The renderer computes a band of `band_height` rows in parallel
with [`rayon`], which collects them back in row order, then writes the band
and advances the progress bar one row at a time before starting the next
band. Only one band is held in memory.
*/

use std::io::Write;

use log::{debug, trace};
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

use crate::{
    colour::Gradient,
    error::Error,
    escape::escape_time,
    pixel::Rgb,
    ppm,
    progress::Progress,
    screen,
};

/// Rows handed to each CPU per band.
pub const ROWS_PER_CPU: u32 = 4;

#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    pub size: screen::Size,
    pub max_iterations: u32,
    pub gradient: Gradient,
    pub band_height: u32,
}

impl Renderer {
    /// Renderer with the default gradient and a band height sized to the machine.
    pub fn new(size: screen::Size, max_iterations: u32) -> Self {
        let cpus = u32::try_from(num_cpus::get()).unwrap_or(u32::MAX);
        Self {
            size,
            max_iterations,
            gradient: Gradient::default(),
            band_height: cpus.saturating_mul(ROWS_PER_CPU).min(size.height).max(1),
        }
    }

    pub fn with_band_height(mut self, band_height: u32) -> Self {
        self.band_height = band_height.max(1);
        self
    }

    pub fn render_pixel(&self, x: u32, y: u32) -> Rgb {
        let iteration_count = escape_time(self.size.point(x, y), self.max_iterations);
        self.gradient.colour(iteration_count, self.max_iterations)
    }

    pub fn render_row(&self, y: u32) -> Vec<Rgb> {
        (0..self.size.width).map(|x| self.render_pixel(x, y)).collect()
    }

    pub fn render<W: Write, P: Write>(
        &self,
        writer: &mut ppm::Writer<W>,
        progress: &mut Progress<P>,
    ) -> Result<(), Error> {
        debug_assert_eq!(writer.size(), self.size);
        debug!(
            "rendering {}x{} with max_iterations={}, band_height={}",
            self.size.width, self.size.height, self.max_iterations, self.band_height
        );

        progress.begin();

        let mut band_start = 0;
        while band_start < self.size.height {
            let band_end = band_start
                .saturating_add(self.band_height)
                .min(self.size.height);

            trace!("begin band {}..{}", band_start, band_end);
            let rows: Vec<Vec<Rgb>> = (band_start..band_end)
                .into_par_iter()
                .map(|y| self.render_row(y))
                .collect();
            trace!("end band {}..{}", band_start, band_end);

            for (y, row) in (band_start..band_end).zip(&rows) {
                writer.write_row(row)?;
                progress.row(y);
            }

            band_start = band_end;
        }

        progress.finish();
        Ok(())
    }
}
