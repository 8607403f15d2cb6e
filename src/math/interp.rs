/// Linear interpolation between `a` and `b`.
///
/// Written as `a + (b - a) * t` so `t == 0` yields `a` exactly. The `t == 1`
/// case is special-cased because the expression can round away from `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    if t >= 1.0 {
        b
    } else {
        a + (b - a) * t
    }
}

/// Clamp to [0, 1]. NaN maps to 0.
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Frame deltas that are negative or non-finite are treated as zero.
#[inline]
pub fn sanitize_delta(delta: f32) -> f32 {
    if delta.is_finite() && delta > 0.0 {
        delta
    } else {
        0.0
    }
}

/// Largest `f32` below 1.
const MAX_BLEND: f32 = 1.0 - f32::EPSILON / 2.0;

/// Frame-rate independent blend weight for exponential smoothing.
///
/// Applying `smoothing_factor(rate, a)` then `smoothing_factor(rate, b)` leaves
/// the same remaining distance as a single step of `a + b`.
///
/// Capped just below 1, so a single long frame never asks for a full jump to
/// the target. The blended position can still round onto the target once the
/// remaining gap is under one ulp.
#[inline]
pub fn smoothing_factor(rate: f32, delta: f32) -> f32 {
    let rate = if rate.is_finite() { rate.max(0.0) } else { 0.0 };
    (1.0 - (-rate * delta).exp()).min(MAX_BLEND)
}
