//! Door latch servo
//!
//! Positions the latch servo by writing the PWM compare value for the
//! requested position. The PWM slice is configured outside (50 Hz frame,
//! count rate matching the pulse values in [`LatchPulses`]); this driver
//! only moves between the two tuned positions.

use embedded_hal::pwm::SetDutyCycle;

use magnetron_core::config::LatchPulses;
use magnetron_core::cycle::LatchPosition;

/// Latch servo on a PWM channel
///
/// The output idles wherever the PWM was configured until the first
/// command; `position` is `None` until then.
pub struct LatchServo<C: SetDutyCycle> {
    channel: C,
    pulses: LatchPulses,
    position: Option<LatchPosition>,
}

impl<C: SetDutyCycle> LatchServo<C> {
    /// Create a latch servo driver
    pub fn new(channel: C, pulses: LatchPulses) -> Self {
        Self {
            channel,
            pulses,
            position: None,
        }
    }

    /// Command the servo to a position
    ///
    /// Idempotent: re-commanding the current position rewrites the same
    /// compare value.
    pub fn set_position(&mut self, position: LatchPosition) {
        let _ = self.channel.set_duty_cycle(position.pulse(&self.pulses));
        self.position = Some(position);
    }

    /// Last commanded position
    pub fn position(&self) -> Option<LatchPosition> {
        self.position
    }
}
