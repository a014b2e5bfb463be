//! Events that drive stage transitions

/// Events that can trigger a stage transition
///
/// Produced by the tick engine; the firmware never feeds the state machine
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Both cook-time digits accepted (second key released)
    TimeEntered,
    /// Countdown borrowed past zero on the tens digit
    CountdownExpired,
    /// Cancel button flag observed at a tick boundary
    AbortRequested,
    /// Two-tick abort dwell completed
    DwellElapsed,
}

impl Event {
    /// Returns true if the event originates from the operator rather
    /// than from the passage of time
    pub fn is_user_initiated(&self) -> bool {
        matches!(self, Event::TimeEntered | Event::AbortRequested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_initiated() {
        assert!(Event::TimeEntered.is_user_initiated());
        assert!(Event::AbortRequested.is_user_initiated());
        assert!(!Event::CountdownExpired.is_user_initiated());
        assert!(!Event::DwellElapsed.is_user_initiated());
    }
}
