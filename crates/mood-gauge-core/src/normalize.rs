//! Rounding and clamping of raw scores.
//!
//! Raw scores are rounded to the nearest tenth with ties going away from
//! zero (`4.55 -> 4.6`, `7.25 -> 7.3`), then clamped into
//! [`SCORE_MIN`]..=[`SCORE_MAX`]. Because negative values clamp to zero
//! anyway, this behaves as round-half-up over the whole output range.
//!
//! Ties are judged on the binary value of `raw * 10`, so a decimal literal
//! that is not exactly representable may land on either side of `.x5`.

/// Lowest possible normalized score.
pub const SCORE_MIN: f64 = 0.0;

/// Highest possible normalized score.
pub const SCORE_MAX: f64 = 25.0;

/// Round `raw` to one decimal place and clamp it into `[0, 25]`.
///
/// NaN and negative infinity map to `0.0`, positive infinity to `25.0`.
/// Never returns negative zero.
pub fn normalize(raw: f64) -> f64 {
    if raw.is_nan() {
        return SCORE_MIN;
    }
    let rounded = (raw * 10.0).round() / 10.0;
    if rounded <= SCORE_MIN {
        SCORE_MIN
    } else if rounded >= SCORE_MAX {
        SCORE_MAX
    } else {
        rounded
    }
}
