//! The fractal model: viewport, live parameters and the magnitude field.

use log::debug;

use crate::{
    animation::AnimationClock,
    cancellation::{Cancellation, NeverCancel},
    colour::{self, Palette, RenderError, Rgba},
    config::{Config, ConfigError, Params},
    field::{MagnitudeField, Pass, PassOutcome},
    point::Point,
    rect::Rect,
    screen,
};

/// Width of the initial viewport in world space.
pub const INITIAL_WIDTH: f64 = 2.0;

/**
Owns the viewport currently displayed, the parameters used to evaluate it,
and the magnitude field sized to the output grid.

The grid size is fixed at construction. Field computation runs on a worker
pool owned by the model.
*/
pub struct FractalModel {
    pub(crate) initial_viewport: Rect<f64>,
    pub(crate) viewport: Rect<f64>,
    pub(crate) params: Params,
    field: MagnitudeField,
    pool: rayon::ThreadPool,
}

impl FractalModel {
    pub fn new(size: screen::Size, params: Params, threads: usize) -> Result<Self, ConfigError> {
        let field = MagnitudeField::new(size)?;
        if threads == 0 {
            return Err(ConfigError::Threads);
        }
        params.validate()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("field-worker-{}", index))
            .build()
            .map_err(|error| ConfigError::ThreadPool(error.to_string()))?;

        let viewport = Self::initial_viewport(size);
        debug!(
            "created {}x{} model on {} threads, viewport {:?}",
            size.width, size.height, threads, viewport
        );

        Ok(Self {
            initial_viewport: viewport,
            viewport,
            params,
            field,
            pool,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(
            screen::Size::new(config.width, config.height),
            config.params,
            config.thread_count(),
        )
    }

    /// Centred on the origin, [`INITIAL_WIDTH`] wide, with the grid's aspect ratio.
    /// `size` has already been checked to be non-empty.
    fn initial_viewport(size: screen::Size) -> Rect<f64> {
        let height = size.height as f64 / size.width as f64 * INITIAL_WIDTH;
        Rect::from_centre_and_size(Point::zero(), Point::new(INITIAL_WIDTH, height))
    }

    pub fn size(&self) -> screen::Size {
        self.field.size()
    }

    pub fn viewport(&self) -> Rect<f64> {
        self.viewport
    }

    /// Replace the viewport. It also becomes the target of [`crate::navigation::NavEvent::Reset`].
    pub fn set_viewport(&mut self, viewport: Rect<f64>) {
        self.initial_viewport = viewport;
        self.viewport = viewport;
    }

    pub fn params(&self) -> Params {
        self.params
    }

    /// Takes effect from the next recompute. Invalid parameters leave the current ones in place.
    pub fn set_params(&mut self, params: Params) -> Result<(), ConfigError> {
        params.validate()?;
        debug!("params {:?} -> {:?}", self.params, params);
        self.params = params;
        Ok(())
    }

    pub fn field(&self) -> &MagnitudeField {
        &self.field
    }

    /// The world point at the given proportions of the current viewport.
    pub fn to_world(&self, x_proportion: f64, y_proportion: f64) -> Point<f64> {
        self.viewport.to_world(x_proportion, y_proportion)
    }

    pub fn recompute(&mut self) -> PassOutcome {
        self.recompute_cancellable(&NeverCancel)
    }

    /// See [`MagnitudeField::recompute`]; the viewport and parameters are copied before any row starts.
    pub fn recompute_cancellable<C: Cancellation>(&mut self, cancel: &C) -> PassOutcome {
        let pass = Pass {
            viewport: self.viewport,
            steps: self.params.steps,
            threshold: self.params.threshold,
        };
        let field = &mut self.field;
        self.pool.install(|| field.recompute(&pass, cancel))
    }

    /// Colour the visible field into `pixels`, one entry per cell in row-major order.
    pub fn render<P: Palette>(
        &self,
        palette: &P,
        clock: &AnimationClock,
        pixels: &mut [Rgba],
    ) -> Result<(), RenderError> {
        let magnitudes = self.field.magnitudes();
        self.pool
            .install(|| colour::render(magnitudes, palette, clock, pixels))
    }
}
