//! Utility functions that may be helpful for implementing
//! and testing the batch engine.

use rand::RngCore;

/// Splits the sequence `1..=samples` into at most `workers` contiguous
/// inclusive ranges.
///
/// Every element lands in exactly one range. The remainder of an uneven
/// split is spread over the leading ranges, so chunk sizes never differ
/// by more than one. Fewer ranges than `workers` come back when there
/// are not enough elements to go around.
pub fn partition(samples: u64, workers: usize) -> Vec<(u64, u64)> {
    let workers = (workers as u64).clamp(1, samples.max(1));
    let chunk = samples / workers;
    let rem = samples % workers;

    let mut ranges = Vec::with_capacity(workers as usize);
    let mut next = 1;
    for i in 0..workers {
        let len = chunk + u64::from(i < rem);
        if len == 0 {
            continue;
        }
        ranges.push((next, next + len - 1));
        next += len;
    }
    ranges
}

/// A [`RngCore`] that yields one constant word over and over.
///
/// [`FixedRng::uniform`] picks the word so that every standard `f64`
/// draw comes out as the requested value, which makes sampling
/// functions fully deterministic in tests.
pub struct FixedRng {
    bits: u64,
}

impl FixedRng {
    /// A source whose every uniform `f64` draw yields `value`.
    ///
    /// `value` must lie in `[0, 1)`. Values needing more than 53
    /// significant bits are truncated toward zero, the same way the
    /// standard uniform distribution truncates its input word.
    pub fn uniform(value: f64) -> Self {
        assert!((0.0..1.0).contains(&value));
        // The standard uniform f64 keeps the top 53 bits of the word.
        let fraction = (value * (1u64 << 53) as f64) as u64;
        Self {
            bits: fraction << 11,
        }
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        (self.bits >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.bits
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = self.bits.to_le_bytes();
        for chunk in dest.chunks_mut(8) {
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
