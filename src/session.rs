//! The per-tick animation loop.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    mpsc, Arc,
};

use log::{debug, trace};

use crate::{
    animation::AnimationClock,
    cancellation::{NeverCancel, PendingInput},
    colour::{Palette, RenderError, Rgba, TickPalette},
    config::{Config, ConfigError, Params},
    field::PassOutcome,
    model::FractalModel,
    navigation::NavEvent,
    screen,
};

/// Sends input to a [`Session`] from any thread.
///
/// Input sent while a pass is running cancels that pass, so the next frame reflects it sooner.
#[derive(Clone)]
pub struct Controller {
    sender: mpsc::Sender<NavEvent>,
    sent: Arc<AtomicU64>,
}

impl Controller {
    /// Returns `false` if the session has gone away.
    pub fn send(&self, event: NavEvent) -> bool {
        if self.sender.send(event).is_err() {
            return false;
        }
        // counted only once queued, see `PendingInput`
        self.sent.fetch_add(1, Ordering::Release);
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    /// The tick the frame was coloured at.
    pub tick: u32,
    pub outcome: PassOutcome,
    pub events_applied: usize,
}

pub struct Session<P = TickPalette> {
    model: FractalModel,
    clock: AnimationClock,
    palette: P,
    sender: mpsc::Sender<NavEvent>,
    events: mpsc::Receiver<NavEvent>,
    sent: Arc<AtomicU64>,
    applied: u64,
    last_outcome: PassOutcome,
}

impl Session<TickPalette> {
    pub fn with_default_palette(config: &Config) -> Result<Self, ConfigError> {
        Self::new(config, TickPalette)
    }
}

impl<P: Palette> Session<P> {
    pub fn new(config: &Config, palette: P) -> Result<Self, ConfigError> {
        let model = FractalModel::from_config(config)?;
        let clock = AnimationClock::new(config.tick_max)?;
        let (sender, events) = mpsc::channel();
        Ok(Self {
            model,
            clock,
            palette,
            sender,
            events,
            sent: Arc::new(AtomicU64::new(0)),
            applied: 0,
            last_outcome: PassOutcome::Complete,
        })
    }

    pub fn controller(&self) -> Controller {
        Controller {
            sender: self.sender.clone(),
            sent: Arc::clone(&self.sent),
        }
    }

    pub fn size(&self) -> screen::Size {
        self.model.size()
    }

    pub fn model(&self) -> &FractalModel {
        &self.model
    }

    pub fn clock(&self) -> AnimationClock {
        self.clock
    }

    pub fn set_params(&mut self, params: Params) -> Result<(), ConfigError> {
        self.model.set_params(params)
    }

    /// A buffer of the right length for [`Session::frame`].
    pub fn pixel_buffer(&self) -> Vec<Rgba> {
        vec![Rgba::default(); self.size().cell_count()]
    }

    /**
    Run one tick: apply queued input, recompute the field, colour it into
    `pixels` and advance the clock.

    Input that arrives while the field is being computed abandons the pass,
    `pixels` shows the last complete field and the input is applied next tick.
    A pass following a cancelled one always runs to completion, so steady
    input still produces a new field at least every other frame.

    `pixels` must hold one entry per cell; otherwise nothing happens and the
    clock does not move.
    */
    pub fn frame(&mut self, pixels: &mut [Rgba]) -> Result<FrameReport, RenderError> {
        let expected = self.size().cell_count();
        if pixels.len() != expected {
            return Err(RenderError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }

        let mut events_applied = 0;
        while let Ok(event) = self.events.try_recv() {
            trace!("applying {:?}", event);
            self.model.apply(event);
            events_applied += 1;
        }
        self.applied += events_applied as u64;

        let outcome = if self.last_outcome == PassOutcome::Cancelled {
            self.model.recompute_cancellable(&NeverCancel)
        } else {
            self.model.recompute_cancellable(&PendingInput {
                sent: &self.sent,
                applied: self.applied,
            })
        };
        if outcome == PassOutcome::Cancelled {
            debug!("tick {} cancelled by new input", self.clock.tick());
        }
        self.last_outcome = outcome;

        self.model.render(&self.palette, &self.clock, pixels)?;

        let tick = self.clock.tick();
        self.clock.advance();

        Ok(FrameReport {
            tick,
            outcome,
            events_applied,
        })
    }
}
