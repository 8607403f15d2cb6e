use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::math::clamp_unit;

/// Last-value store for the scroll progress signal.
///
/// Writes keep the raw value verbatim; clamping happens on read. The value is
/// held as `f32` bits in one atomic word so a reader always observes a whole
/// value, even when the writer lives on an input thread.
#[derive(Debug, Default)]
pub struct ProgressCell {
    bits: AtomicU32,
}

impl ProgressCell {
    pub fn new(initial: f32) -> Self {
        Self {
            bits: AtomicU32::new(initial.to_bits()),
        }
    }

    pub fn store(&self, value: f32) {
        self.bits.store(value.to_bits(), Ordering::Release);
    }

    /// Raw value as written by the host.
    pub fn raw(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Clamped snapshot, read once per tick.
    pub fn snapshot(&self) -> f32 {
        clamp_unit(self.raw())
    }
}

/// Cloneable producer side, handed to whatever tracks scroll position.
#[derive(Debug, Clone)]
pub struct ProgressHandle {
    cell: Arc<ProgressCell>,
}

impl ProgressHandle {
    pub(crate) fn new(cell: Arc<ProgressCell>) -> Self {
        Self { cell }
    }

    pub fn set(&self, value: f32) {
        self.cell.store(value);
    }
}
