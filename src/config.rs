//! Validated parameters for the model and the animation loop.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("steps must be greater than zero")]
    Steps,
    #[error("threshold must be a finite number greater than zero, got {0}")]
    Threshold(f64),
    #[error("zoom scale must be a finite number greater than one, got {0}")]
    ZoomScale(f64),
    #[error("minimum extent must be a finite number no less than zero, got {0}")]
    MinExtent(f64),
    #[error("maximum extent must be finite and greater than the minimum extent, got {0}")]
    MaxExtent(f64),
    #[error("tick max must be greater than zero")]
    TickMax,
    #[error("grid must be at least 1x1, got {width}x{height}")]
    GridSize { width: u32, height: u32 },
    #[error("thread count must be greater than zero")]
    Threads,
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Parameters that may change between passes without rebuilding the model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    /// Iteration budget per point.
    pub steps: u32,
    /// Escape magnitude; escaped points saturate to this value.
    pub threshold: f64,
    /// Magnification per zoom step.
    pub zoom_scale: f64,
    /// Smallest extent zooming in may shrink the shorter viewport axis to.
    pub min_extent: f64,
    /// Largest extent zooming out may grow the longer viewport axis to.
    pub max_extent: f64,
}

impl Params {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::Steps);
        }
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(ConfigError::Threshold(self.threshold));
        }
        if !(self.zoom_scale.is_finite() && self.zoom_scale > 1.0) {
            return Err(ConfigError::ZoomScale(self.zoom_scale));
        }
        if !(self.min_extent.is_finite() && self.min_extent >= 0.0) {
            return Err(ConfigError::MinExtent(self.min_extent));
        }
        if !(self.max_extent.is_finite() && self.max_extent > self.min_extent) {
            return Err(ConfigError::MaxExtent(self.max_extent));
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            steps: 100,
            threshold: 1000.0,
            zoom_scale: 1.2,
            min_extent: 1e-13,
            max_extent: 1e6,
        }
    }
}

/// Everything needed to start a session. The grid size is fixed for the session's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    /// Length of the animation cycle in ticks.
    pub tick_max: u32,
    /// Worker threads for field computation; `None` uses one per logical CPU.
    pub threads: Option<usize>,
    pub params: Params,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::GridSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.tick_max == 0 {
            return Err(ConfigError::TickMax);
        }
        if self.threads == Some(0) {
            return Err(ConfigError::Threads);
        }
        self.params.validate()
    }

    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            tick_max: 100,
            threads: None,
            params: Params::default(),
        }
    }
}
