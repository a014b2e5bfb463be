//! Echo pulse to distance conversion

/// Millimeters of object distance per microsecond of echo pulse: 17/100.
///
/// Sound covers ~0.343 mm/µs; the echo pulse spans the round trip, so the
/// object distance is half of that, ~0.17 mm/µs.
const MM_PER_US_NUM: u32 = 17;
const MM_PER_US_DEN: u32 = 100;

/// Convert a captured echo pulse width (µs) to an object distance (mm)
pub fn distance_from_pulse(pulse_width_us: u32) -> u32 {
    pulse_width_us.saturating_mul(MM_PER_US_NUM) / MM_PER_US_DEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        assert_eq!(distance_from_pulse(0), 0);
        assert_eq!(distance_from_pulse(100), 17);
        assert_eq!(distance_from_pulse(1000), 170);
    }

    #[test]
    fn test_alarm_threshold_boundary() {
        // 200 mm sits between 1176 and 1177 µs
        assert_eq!(distance_from_pulse(1176), 199);
        assert_eq!(distance_from_pulse(1177), 200);
    }

    #[test]
    fn test_huge_pulse_does_not_overflow() {
        let distance = distance_from_pulse(u32::MAX);
        assert_eq!(distance, u32::MAX / 100);
    }
}
