//! Seeded stroke variation.
//!
//! Gives engraved plates a slightly hand-inked look without moving any
//! geometry: each element gets its own stroke width and opacity, drawn
//! from an [`Rng`] seeded per plate. Same seed, same strokes.
//!
//! # Example
//! ```
//! use sacred_plates::style::{JitterConfig, jitter_strokes};
//!
//! let config = JitterConfig::new(1.2, 0.85).with_amount(0.1).with_seed(42);
//! let strokes = jitter_strokes(3, &config);
//! assert_eq!(strokes, jitter_strokes(3, &config));
//! ```

use crate::rng::Rng;

/// Lowest opacity a jittered stroke may reach.
const MIN_OPACITY: f64 = 0.05;

/// Configuration for per-element stroke variation.
#[derive(Clone, Debug, PartialEq)]
pub struct JitterConfig {
    /// Stroke width before variation
    pub base_width: f64,
    /// Stroke opacity before variation
    pub base_opacity: f64,
    /// Relative variation (0.0 = uniform strokes, 0.1 = width within ±10%)
    pub amount: f64,
    /// Seed for the variation sequence
    pub seed: u64,
}

impl JitterConfig {
    pub fn new(base_width: f64, base_opacity: f64) -> Self {
        Self {
            base_width,
            base_opacity,
            amount: 0.0,
            seed: 1,
        }
    }

    /// Create a new config with the given variation amount.
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Create a new config with a specific seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Resolved stroke for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub opacity: f64,
}

/// Draw the stroke for the next element.
///
/// Consumes exactly two values from `rng`: a width factor in
/// `[1 - amount, 1 + amount)` and an opacity offset in
/// `[-amount/2, amount/2)`. Opacity is clamped to `[MIN_OPACITY, 1]`.
pub fn jitter_stroke(config: &JitterConfig, rng: &mut Rng) -> StrokeStyle {
    let amount = config.amount.abs();
    let factor = rng.next_range(1.0 - amount, 1.0 + amount);
    let offset = rng.next_range(-0.5 * amount, 0.5 * amount);

    StrokeStyle {
        width: (config.base_width * factor).max(0.0),
        opacity: (config.base_opacity + offset).clamp(MIN_OPACITY, 1.0),
    }
}

/// Strokes for `count` elements, in element order.
pub fn jitter_strokes(count: usize, config: &JitterConfig) -> Vec<StrokeStyle> {
    let mut rng = Rng::new(config.seed);
    (0..count).map(|_| jitter_stroke(config, &mut rng)).collect()
}
