use crate::config::ConfigError;

/// A cyclic tick counter that drives the palette animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationClock {
    tick: u32,
    tick_max: u32,
}

impl AnimationClock {
    pub fn new(tick_max: u32) -> Result<Self, ConfigError> {
        if tick_max == 0 {
            return Err(ConfigError::TickMax);
        }
        Ok(Self { tick: 0, tick_max })
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn tick_max(&self) -> u32 {
        self.tick_max
    }

    /// Position in the cycle, in `(0, 1]`. Tick 0 is the end of the previous cycle, so it maps to 1.
    pub fn phase(&self) -> f64 {
        if self.tick == 0 {
            1.0
        } else {
            self.tick as f64 / self.tick_max as f64
        }
    }

    pub fn advance(&mut self) {
        self.tick = (self.tick + 1) % self.tick_max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_cycle() {
        assert_eq!(AnimationClock::new(0), Err(ConfigError::TickMax));
    }

    #[test]
    fn test_wraps_after_tick_max() {
        let mut clock = AnimationClock::new(3).unwrap();
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(clock.tick());
            clock.advance();
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_phase_is_never_zero() {
        let mut clock = AnimationClock::new(4).unwrap();
        assert_eq!(clock.phase(), 1.0);
        clock.advance();
        assert_eq!(clock.phase(), 0.25);
        clock.advance();
        assert_eq!(clock.phase(), 0.5);
    }

    #[test]
    fn test_single_tick_cycle() {
        let mut clock = AnimationClock::new(1).unwrap();
        clock.advance();
        assert_eq!(clock.tick(), 0);
        assert_eq!(clock.phase(), 1.0);
    }
}
