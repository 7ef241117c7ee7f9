//! The per-pixel magnitude field.

use std::sync::atomic::{AtomicBool, Ordering};

use log::trace;
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{
    cancellation::Cancellation, config::ConfigError, double_buffered::DoubleBuffered, escape,
    rect::Rect, screen,
};

/// Inputs to one recompute, captured by value when the pass starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pass {
    pub viewport: Rect<f64>,
    pub steps: u32,
    pub threshold: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassOutcome {
    /// The new field is visible.
    Complete,
    /// The pass was abandoned and the previous field is still visible.
    Cancelled,
}

/// An `H×W` grid of escape magnitudes, stored row-major.
///
/// Only fully computed passes are ever visible through [`MagnitudeField::magnitudes`].
pub struct MagnitudeField {
    size: screen::Size,
    buffers: DoubleBuffered<Vec<f64>>,
}

impl MagnitudeField {
    pub fn new(size: screen::Size) -> Result<Self, ConfigError> {
        if size.width == 0 || size.height == 0 {
            return Err(ConfigError::GridSize {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self {
            size,
            buffers: DoubleBuffered::new(vec![0.0; size.cell_count()]),
        })
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn magnitudes(&self) -> &[f64] {
        self.buffers.front()
    }

    pub fn get(&self, row: u32, col: u32) -> f64 {
        self.magnitudes()[self.size.index(col, row)]
    }

    /**
    Recompute every cell for `pass`, one rayon task per row, on the current pool.

    Cell `(row j, col i)` samples the viewport at proportions `(i / W, j / H)`.
    Rows are written into the hidden buffer and the buffers swap only after every
    row has joined. Once `cancel` reports true, rows that have not started yet
    are skipped and the partial buffer is thrown away. A pass whose rows all
    ran is kept even if `cancel` was raised after the last one started.
    */
    pub fn recompute<C: Cancellation>(&mut self, pass: &Pass, cancel: &C) -> PassOutcome {
        trace!("begin recompute {:?}", pass);

        let width = self.size.width as usize;
        let grid_width = self.size.width as f64;
        let grid_height = self.size.height as f64;
        let skipped = AtomicBool::new(false);

        self.buffers
            .back_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row_index, row)| {
                if cancel.is_cancelled() {
                    skipped.store(true, Ordering::Relaxed);
                    return;
                }

                let y_proportion = row_index as f64 / grid_height;
                for (col_index, cell) in row.iter_mut().enumerate() {
                    let x_proportion = col_index as f64 / grid_width;
                    let point = pass.viewport.to_world(x_proportion, y_proportion);
                    *cell = escape::escape_magnitude_at(point, pass.steps, pass.threshold);
                }
            });

        if skipped.load(Ordering::Relaxed) {
            trace!("recompute cancelled");
            return PassOutcome::Cancelled;
        }

        self.buffers.swap();
        trace!("end recompute");
        PassOutcome::Complete
    }
}
