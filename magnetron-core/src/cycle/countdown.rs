//! Borrow-chain countdown for the two-digit cook time
//!
//! The cook time is held as two independent decimal digits and decremented
//! digit-wise: the units digit underflows into the tens digit, and the
//! countdown expires when the tens digit underflows. This mirrors a manual
//! digit clock, not a flat integer: the last visible second (`00`) is
//! consumed before the expiry check fires, so a time of `tens*10 + units`
//! seconds takes exactly `tens*10 + units + 1` steps to expire.

/// Outcome of one countdown step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownState {
    /// Time remains
    Running,
    /// Borrowed past zero on the tens digit
    Expired,
}

impl CountdownState {
    /// Check if the countdown has expired
    pub fn is_expired(&self) -> bool {
        matches!(self, CountdownState::Expired)
    }
}

/// Two-digit decimal countdown
///
/// Digits are signed internally so the borrow can pass through -1 the way
/// the expiry rule requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Countdown {
    tens: i8,
    units: i8,
}

impl Countdown {
    /// Create a countdown at 00
    pub const fn new() -> Self {
        Self { tens: 0, units: 0 }
    }

    /// Load the two cook-time digits (values above 9 are clamped)
    pub fn load(&mut self, tens: u8, units: u8) {
        self.tens = tens.min(9) as i8;
        self.units = units.min(9) as i8;
    }

    /// The remaining digits as rendered on the panel
    pub fn digits(&self) -> (u8, u8) {
        (self.tens.max(0) as u8, self.units.max(0) as u8)
    }

    /// Decrement one second with digit borrow
    ///
    /// Call after rendering: the displayed digits for a tick are the
    /// pre-decrement values.
    pub fn step(&mut self) -> CountdownState {
        self.units -= 1;
        if self.units < 0 {
            self.units = 9;
            self.tens -= 1;
        }

        if self.tens < 0 {
            CountdownState::Expired
        } else {
            CountdownState::Running
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
