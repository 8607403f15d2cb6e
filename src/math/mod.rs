mod interp;

pub use interp::{clamp_unit, lerp, sanitize_delta, smoothing_factor};
