//! Deterministic random source for reproducing simulation scenarios.

use std::collections::VecDeque;

use rand::RngCore;

/// Replays a fixed sequence of unit draws.
///
/// Each queued value `x` in `[0, 1)` is returned by `rng.random::<f64>()` as
/// (almost exactly) `x`. Once the script is exhausted every draw yields `0.0`,
/// which never crosses any simulation threshold.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    draws: VecDeque<f64>,
}

impl ScriptedRng {
    /// Create a source replaying `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Queue more draws at the end of the script.
    pub fn extend(&mut self, draws: impl IntoIterator<Item = f64>) {
        self.draws.extend(draws);
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let unit = self.draws.pop_front().unwrap_or(0.0).clamp(0.0, 1.0 - f64::EPSILON);
        // f64 sampling keeps the top 53 bits of a u64.
        ((unit * (1u64 << 53) as f64) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_replays_unit_draws() {
        let mut rng = ScriptedRng::new([0.25, 0.86, 0.999]);
        assert_eq!(rng.random::<f64>(), 0.25);
        assert!((rng.random::<f64>() - 0.86).abs() < 1e-12);
        assert!((rng.random::<f64>() - 0.999).abs() < 1e-12);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_exhausted_script_yields_zero() {
        let mut rng = ScriptedRng::default();
        assert_eq!(rng.random::<f64>(), 0.0);
    }
}
