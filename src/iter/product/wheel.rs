use derive_more::IsVariant;

use crate::ops::positive_mod;

/// The direction in which a [`Wheel`]'s last advance wrapped around, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IsVariant)]
#[repr(i8)]
pub(crate) enum Carry {
    Underflow = -1,
    #[default]
    Clear = 0,
    Overflow = 1,
}

/// One digit of an odometer: a fixed, non-empty list of values and a position within it.
#[derive(Debug, Clone)]
pub(crate) struct Wheel<T> {
    values: Vec<T>,
    position: usize,
    carry: Carry,
}

impl<T> Wheel<T> {
    /// Creates a Wheel at position 0, or [`None`] if there are no `values` to turn through.
    pub fn new(values: Vec<T>) -> Option<Wheel<T>> {
        if values.is_empty() {
            return None;
        }
        Some(Wheel {
            values,
            position: 0,
            carry: Carry::Clear,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub const fn carry(&self) -> Carry {
        self.carry
    }

    pub fn current(&self) -> &T {
        &self.values[self.position]
    }

    pub const fn reset_carry(&mut self) {
        self.carry = Carry::Clear;
    }

    /// Turns the wheel by `steps` in either direction, wrapping back into range and recording which
    /// way it wrapped.
    pub fn advance(&mut self, steps: isize) -> Carry {
        let len = self.len() as i128;
        let raw = self.position as i128 + steps as i128;

        self.carry = if raw < 0 {
            Carry::Underflow
        } else if raw >= len {
            Carry::Overflow
        } else {
            Carry::Clear
        };
        // The result is in [0, len), which came from a usize.
        self.position = positive_mod(raw, len) as usize;
        self.carry
    }
}

/// Advances a row of wheels by one, treating the last as the least significant digit and rippling
/// any carry towards the first. Returns true if the first wheel carried, i.e. every combination
/// has been seen.
pub(crate) fn advance_odometer<T>(wheels: &mut [Wheel<T>]) -> bool {
    for wheel in wheels.iter_mut().rev() {
        wheel.reset_carry();
        wheel.advance(1);
        if wheel.carry().is_clear() {
            return false;
        }
    }
    true
}
