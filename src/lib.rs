/*!
Viewport-driven escape-time fractal evaluation.

A [`model::FractalModel`] owns a rectangle of the complex plane and a grid of
escape magnitudes sampled across it. Navigation events move and resize the
rectangle, the field is recomputed in parallel across rows, and a
[`colour::Palette`] turns it into pixels that cycle with an animation tick.
[`session::Session`] ties these together into a per-tick loop.
*/

pub mod animation;
pub mod cancellation;
pub mod colour;
pub mod config;
pub mod double_buffered;
pub mod escape;
pub mod field;
pub mod model;
pub mod navigation;
pub mod point;
pub mod rect;
pub mod screen;
pub mod session;

pub use animation::AnimationClock;
pub use cancellation::{Cancellation, NeverCancel};
pub use colour::{Palette, RenderError, Rgba, TickPalette, YCbCr};
pub use config::{Config, ConfigError, Params};
pub use field::{MagnitudeField, PassOutcome};
pub use model::FractalModel;
pub use navigation::NavEvent;
pub use point::Point;
pub use rect::Rect;
pub use session::{Controller, FrameReport, Session};
