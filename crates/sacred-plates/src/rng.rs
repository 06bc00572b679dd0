//! Deterministic randomness for plate styling.
//!
//! Two pieces: a stable slug hash that turns a plate's name into a seed,
//! and a small generator that expands that seed into per-element jitter.
//! Neither touches the clock, so a plate always renders the same way.

/// Derive a rendering seed from a slug.
///
/// Polynomial rolling hash (`hash * 31 + code_unit`) over UTF-16 code
/// units with 32-bit signed wrap-around, then the absolute value. Zero
/// maps to 1 so every slug yields a usable, non-zero seed.
///
/// # Example
/// ```
/// use sacred_plates::rng::slug_seed;
///
/// assert_eq!(slug_seed("a"), 97);
/// assert_eq!(slug_seed(""), 1);
/// ```
pub fn slug_seed(slug: &str) -> u64 {
    let hash = slug
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32));
    u64::from(hash.unsigned_abs()).max(1)
}

/// A fast, deterministic pseudo-random number generator.
///
/// Linear Congruential Generator with the Knuth MMIX constants. Plenty
/// for stroke variation; not for anything that needs real randomness.
#[derive(Clone, Debug)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    ///
    /// The same seed will always produce the same sequence of numbers.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed.wrapping_add(1) }
    }

    /// Get the next raw u64 value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Get a random f64 in the range [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        // High bits have the longest period
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Get a random f64 in the range [min, max).
    #[inline]
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}
