//! Status events for the one-directional status stream
//!
//! Each event is emitted exactly once per transition and carries a fixed
//! text line. The transport writes one line per event; the engine never
//! repeats an event for a steady state.

/// A status line for the diagnostic/status serial stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusEvent {
    /// Entered `AwaitingInput` (power-on or abort recovery)
    WaitingForInput,
    /// First cooking tick
    Cooking,
    /// Countdown expired
    FinishedCooking,
    /// Abort handled
    CookingAborted,
    /// Door latched for the cook cycle
    DoorLatched,
    /// Door released (completion or abort)
    DoorUnlatched,
    /// Cabinet lamp toggled on a brightness threshold crossing
    AdjustingLight,
    /// Proximity alarm turned on (object closer than the near limit)
    TooCloseWarning,
    /// Commanded power level differs from the previous tick
    PowerChanged,
}

impl StatusEvent {
    /// The literal line emitted on the status stream
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusEvent::WaitingForInput => "Waiting For Input",
            StatusEvent::Cooking => "Cooking...",
            StatusEvent::FinishedCooking => "Finished Cooking",
            StatusEvent::CookingAborted => "Cooking Aborted",
            StatusEvent::DoorLatched => "Door Latched",
            StatusEvent::DoorUnlatched => "Door Unlatched",
            StatusEvent::AdjustingLight => "Adjusting Light",
            StatusEvent::TooCloseWarning => "Too Close Warning",
            StatusEvent::PowerChanged => "Power Changed",
        }
    }
}
