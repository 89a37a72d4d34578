//! Fixed-tick frame timer.

/// Counts external ticks and signals every `delay`-th one as a frame boundary.
///
/// The tick source is external; the clock never looks at wall time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationClock {
    delay: u32,
    elapsed: u32,
}

impl AnimationClock {
    pub fn new(delay: u32) -> Self {
        Self {
            delay: delay.max(1),
            elapsed: 0,
        }
    }

    /// Registers one tick. Returns `true` when a frame boundary was reached.
    pub fn advance(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.delay {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
    }

    /// Ticks since the last boundary. Always below [`Self::delay`].
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_every_delay_ticks() {
        let mut clock = AnimationClock::new(4);
        let signals: Vec<bool> = (0..8).map(|_| clock.advance()).collect();
        assert_eq!(
            signals,
            vec![false, false, false, true, false, false, false, true]
        );
        assert_eq!(clock.elapsed(), 0);
    }

    #[test]
    fn reset_restarts_the_count() {
        let mut clock = AnimationClock::new(4);
        clock.advance();
        clock.advance();
        clock.reset();
        assert_eq!(clock.elapsed(), 0);
        assert!(!clock.advance());
    }

    #[test]
    fn zero_delay_is_clamped() {
        let mut clock = AnimationClock::new(0);
        assert_eq!(clock.delay(), 1);
        assert!(clock.advance());
        assert!(clock.advance());
    }
}
