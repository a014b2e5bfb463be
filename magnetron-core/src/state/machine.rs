//! Stage definition and transitions
//!
//! All motor, latch, light, and tone behavior is a function of the current
//! stage and an event. The abort flag becomes an [`Event::AbortRequested`]
//! at the next tick boundary, so only the engine ever writes the stage.

use super::events::Event;

/// Cook-cycle stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// Prompting for the two cook-time digits
    AwaitingInput,
    /// Countdown running, turntable on, door latched
    Cooking,
    /// Countdown expired; intermittent completion signal until the
    /// operator intervenes (no programmatic exit)
    Done,
    /// Cancelled; holds for a fixed two-tick dwell, then returns to
    /// `AwaitingInput`
    Aborted,
}

impl Stage {
    /// Check if this stage accepts digit input
    pub fn accepts_digits(&self) -> bool {
        matches!(self, Stage::AwaitingInput)
    }

    /// Check if the door latch is held at the cooking angle
    pub fn latch_engaged(&self) -> bool {
        matches!(self, Stage::Cooking)
    }

    /// Check if the chamber light lock is asserted
    pub fn light_locked(&self) -> bool {
        matches!(self, Stage::Cooking)
    }

    /// Process an event and return the next stage
    ///
    /// This is the core transition logic. Events that make no sense for
    /// the current stage leave it unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Stage::*;

        match (self, event) {
            // Digit entry complete: latch and cook
            (AwaitingInput, TimeEntered) => Cooking,

            // Borrow past zero on the tens digit
            (Cooking, CountdownExpired) => Done,

            // Abort preempts every other stage
            (AwaitingInput, AbortRequested) => Aborted,
            (Cooking, AbortRequested) => Aborted,
            (Done, AbortRequested) => Aborted,

            // Two-tick dwell elapsed; session is reinitialized in place
            (Aborted, DwellElapsed) => AwaitingInput,

            // Default: stay in current stage
            _ => self,
        }
    }
}
