//! Phase-intensity scalar field.
//!
//! Two incommensurate oscillations are superposed:
//!
//! ```text
//! wave(t, c) = sin(t·φ + c) + ½·cos(t·c / φ)
//! I(t, c)    = |wave(t, c)|
//! ```
//!
//! so `I` lies in `[0, 1.5]`.  The interaction solver adds a constant floor
//! downstream; `I` itself may touch zero.

/// φ, as used by the field.  Kept at this literal precision so results are
/// bit-compatible with earlier runs.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_75;

/// Field intensity at time `t` for an agent on leg `cycle`.
#[inline]
pub fn intensity(t: f64, cycle: u32) -> f64 {
    let c = cycle as f64;
    let wave = (t * GOLDEN_RATIO + c).sin() + 0.5 * (t * c / GOLDEN_RATIO).cos();
    wave.abs()
}
