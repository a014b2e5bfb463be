//! Turntable motor
//!
//! Single-direction motor behind a driver transistor; on/off only.

use embedded_hal::digital::OutputPin;

/// Turntable motor on a GPIO pin
pub struct Turntable<P: OutputPin> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> Turntable<P> {
    /// Create a turntable driver, starting stopped
    pub fn new(mut pin: P) -> Self {
        let _ = pin.set_low();
        Self { pin, on: false }
    }

    /// Set the motor level
    pub fn set_on(&mut self, on: bool) {
        if on {
            let _ = self.pin.set_high();
        } else {
            let _ = self.pin.set_low();
        }
        self.on = on;
    }

    /// Check if the motor is running
    pub fn is_on(&self) -> bool {
        self.on
    }
}
