//! Placeholder waveform for the center view.
//!
//! Nothing is derived from audio: column heights are random and only exist so
//! the view looks like a waveform. A real engine would compute them from
//! decoded samples.

use rand::Rng;

/// Number of columns generated; wider views reuse them cyclically.
pub const COLUMNS: usize = 512;

/// Amplitude range, in percent of half the view height.
pub const MIN_AMPLITUDE: u8 = 20;
pub const MAX_AMPLITUDE: u8 = 80;

/// Beat markers drawn across the view.
pub const BEATS_PER_VIEW: u16 = 10;

/// Time labels along the top edge.
pub const TIME_MARKERS: [&str; 3] = ["30", "35", "40"];

/// Random top (deck 1) and bottom (deck 2) amplitude columns.
#[derive(Debug, Clone)]
pub struct WaveformPlaceholder {
    top: Vec<u8>,
    bottom: Vec<u8>,
}

impl WaveformPlaceholder {
    pub fn new() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Deterministic placeholder for tests.
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        use rand::{SeedableRng, rngs::StdRng};

        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut column = || rng.random_range(MIN_AMPLITUDE..=MAX_AMPLITUDE);
        let top = (0..COLUMNS).map(|_| column()).collect();
        let bottom = (0..COLUMNS).map(|_| column()).collect();
        Self { top, bottom }
    }

    /// Draw new random columns, as a redraw of the stub does.
    pub fn regenerate(&mut self) {
        *self = Self::new();
    }

    /// Top amplitude for view column `x`.
    pub fn top(&self, x: usize) -> u8 {
        self.top[x % COLUMNS]
    }

    /// Bottom amplitude for view column `x`.
    pub fn bottom(&self, x: usize) -> u8 {
        self.bottom[x % COLUMNS]
    }
}

impl Default for WaveformPlaceholder {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether view column `x` of a `width`-wide view carries a beat marker.
pub fn is_beat_column(x: u16, width: u16) -> bool {
    let interval = (width / BEATS_PER_VIEW).max(1);
    x % interval == 0
}
