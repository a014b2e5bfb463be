//! Completion tone sounder
//!
//! Gates a PWM carrier on and off. The slice is configured outside with
//! the tone pitch as the counter top; this driver switches between the
//! on duty (half the top for a square wave) and silence.

use embedded_hal::pwm::SetDutyCycle;

/// Tone sounder on a PWM channel
pub struct Sounder<C: SetDutyCycle> {
    channel: C,
    on_duty: u16,
    sounding: bool,
}

impl<C: SetDutyCycle> Sounder<C> {
    /// Create a sounder, starting silent
    pub fn new(mut channel: C, on_duty: u16) -> Self {
        let _ = channel.set_duty_cycle(0);
        Self {
            channel,
            on_duty,
            sounding: false,
        }
    }

    /// Start the carrier
    pub fn on(&mut self) {
        let _ = self.channel.set_duty_cycle(self.on_duty);
        self.sounding = true;
    }

    /// Silence the carrier
    pub fn off(&mut self) {
        let _ = self.channel.set_duty_cycle(0);
        self.sounding = false;
    }

    /// Check if the carrier is running
    pub fn is_sounding(&self) -> bool {
        self.sounding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPwm {
        duty: u16,
    }

    impl embedded_hal::pwm::ErrorType for MockPwm {
        type Error = core::convert::Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            u16::MAX
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_starts_silent() {
        let sounder = Sounder::new(MockPwm { duty: 123 }, 1138);

        assert!(!sounder.is_sounding());
        assert_eq!(sounder.channel.duty, 0);
    }

    #[test]
    fn test_on_off() {
        let mut sounder = Sounder::new(MockPwm { duty: 0 }, 1138);

        sounder.on();
        assert!(sounder.is_sounding());
        assert_eq!(sounder.channel.duty, 1138);

        sounder.off();
        assert!(!sounder.is_sounding());
        assert_eq!(sounder.channel.duty, 0);
    }
}
