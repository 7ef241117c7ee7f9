//! Colouring algorithms.

use bytemuck::{Pod, Zeroable};
use log::trace;
use rayon::prelude::{
    IndexedParallelIterator, IntoParallelRefIterator, IntoParallelRefMutIterator, ParallelIterator,
};

use thiserror::Error;

use crate::animation::AnimationClock;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    #[error("pixel buffer holds {actual} pixels but the field has {expected} cells")]
    BufferLength { expected: usize, actual: usize },
}

/// A Y′CbCr colour with full-range 8-bit channels.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct YCbCr {
    pub y: u8,
    pub cb: u8,
    pub cr: u8,
}

/// [`bytemuck`]-compatible RGBA output for a single pixel.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// JFIF full-range conversion.
impl From<YCbCr> for Rgba {
    fn from(colour: YCbCr) -> Self {
        let y = colour.y as f64;
        let cb = colour.cb as f64 - 128.0;
        let cr = colour.cr as f64 - 128.0;
        Rgba {
            r: to_channel(y + 1.402 * cr),
            g: to_channel(y - 0.344136 * cb - 0.714136 * cr),
            b: to_channel(y + 1.772 * cb),
            a: 255,
        }
    }
}

/// Maps an escape magnitude to a colour at a point in the animation cycle.
pub trait Palette: Sync {
    fn colour(&self, magnitude: f64, clock: &AnimationClock) -> YCbCr;
}

/**
Cycling luma palette.

Luma is `255 * min(ln(magnitude / phase), 1)`, clamped to `[0, 255]`, so escaped
points are bright and points that stay near zero are dark, with the boundary
pulsing as the phase moves. The chroma channels are linear in the raw tick
index and wrap at 8 bits: `Cb = 10 * (1 - tick)`, `Cr = 128 * tick`.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct TickPalette;

impl TickPalette {
    /// `ln(magnitude / phase)` values at or above this are full brightness.
    pub const LUMA_SCALE: f64 = 1.0;
}

impl Palette for TickPalette {
    fn colour(&self, magnitude: f64, clock: &AnimationClock) -> YCbCr {
        let adjusted = (magnitude / clock.phase()).ln();
        let f = adjusted.min(Self::LUMA_SCALE);
        let luma = f * (255.0 / Self::LUMA_SCALE);

        let tick = clock.tick() as i64;
        YCbCr {
            y: to_channel(luma),
            cb: (10 * (1 - tick)) as u8,
            cr: (128 * tick) as u8,
        }
    }
}

/// Colour every magnitude into `pixels`. Nothing is written unless the lengths match.
pub fn render<P: Palette>(
    magnitudes: &[f64],
    palette: &P,
    clock: &AnimationClock,
    pixels: &mut [Rgba],
) -> Result<(), RenderError> {
    if magnitudes.len() != pixels.len() {
        return Err(RenderError::BufferLength {
            expected: magnitudes.len(),
            actual: pixels.len(),
        });
    }

    trace!("begin render");

    pixels
        .par_iter_mut()
        .zip(magnitudes.par_iter())
        .for_each(|(pixel, magnitude)| {
            *pixel = Rgba::from(palette.colour(*magnitude, clock));
        });

    trace!("end render");
    Ok(())
}
