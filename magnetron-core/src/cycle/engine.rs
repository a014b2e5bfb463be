//! Cook-cycle tick engine
//!
//! Owns the authoritative stage and runs once per tick signal. Each tick
//! consumes an [`Observations`] snapshot and returns the [`TickEffects`]
//! the firmware applies to hardware. Digit input arrives between ticks
//! through [`CookEngine::digit_entered`].

use heapless::Vec;

use magnetron_panel::Screen;

use crate::config::{LatchPulses, OvenConfig, ABORT_DWELL_TICKS};
use crate::ranging::{distance_from_pulse, RangeMonitor};
use crate::sensing::{power_level_from_raw, LampMonitor, PowerTracker};
use crate::state::{Event, Stage};
use crate::status::StatusEvent;

use super::countdown::Countdown;

/// Maximum status events a single tick can produce
pub const MAX_TICK_EVENTS: usize = 6;

/// Door latch servo positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchPosition {
    /// Door held shut for the cook cycle
    Latched,
    /// Door released
    Unlatched,
}

impl LatchPosition {
    /// Servo compare value for this position
    pub fn pulse(self, pulses: &LatchPulses) -> u16 {
        match self {
            LatchPosition::Latched => pulses.latched,
            LatchPosition::Unlatched => pulses.unlatched,
        }
    }
}

/// Snapshot of the observation cells consumed by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Observations {
    /// Last captured echo pulse width (µs)
    pub pulse_width_us: u32,
    /// Latest power dial reading (10-bit raw)
    pub pot_raw: u16,
    /// Latest ambient brightness reading (10-bit raw)
    pub brightness_raw: u16,
    /// Cancel flag state at the tick boundary
    pub abort_pending: bool,
}

/// Hardware-neutral outputs of one engine step
///
/// Levels (`motor_on`, `lamp_on`, `tone_armed`) are absolute and applied
/// every tick. `Option` fields hold the previous hardware state when
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickEffects {
    /// Status lines to emit, in order
    pub events: Vec<StatusEvent, MAX_TICK_EVENTS>,
    /// Panel screen for the current state
    pub screen: Screen,
    /// Turntable motor level
    pub motor_on: bool,
    /// Cabinet lamp level
    pub lamp_on: bool,
    /// Proximity warning lamp level
    pub warn_lamp: Option<bool>,
    /// Chamber light lock level
    pub light_lock: Option<bool>,
    /// Latch servo command
    pub latch: Option<LatchPosition>,
    /// Completion tone arm flag
    pub tone_armed: bool,
}

/// Digit-entry progress while awaiting input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct DigitEntry {
    tens: Option<u8>,
    units: Option<u8>,
}

impl DigitEntry {
    fn clear(&mut self) {
        *self = Self::default();
    }

    /// Accept one digit; returns the completed pair on the second digit
    fn push(&mut self, digit: u8) -> Option<(u8, u8)> {
        match (self.tens, self.units) {
            (None, _) => {
                self.tens = Some(digit);
                None
            }
            (Some(tens), None) => {
                self.units = Some(digit);
                Some((tens, digit))
            }
            (Some(_), Some(_)) => None,
        }
    }
}

/// Cook-cycle engine
///
/// The orchestrator behind the controller task. Consumes digit input and
/// per-tick observations, owns the stage and the countdown, and produces
/// effect commands. Everything here is synchronous and board-agnostic;
/// the firmware applies the effects to pins, PWM, and the panel link.
#[derive(Debug)]
pub struct CookEngine {
    config: OvenConfig,
    stage: Stage,
    countdown: Countdown,
    entry: DigitEntry,
    range: RangeMonitor,
    lamp: LampMonitor,
    power: PowerTracker,
    /// Done-entry actions already performed
    done_acknowledged: bool,
    /// Ticks spent in the current abort dwell
    abort_ticks: u8,
    /// Completion-signal level; motor and tone alternate on it
    signal_on: bool,
    /// First cooking tick has announced itself
    cooking_announced: bool,
    /// Prompt and its status line pending for this `AwaitingInput` entry
    prompt_pending: bool,
}

impl CookEngine {
    /// Create an engine at power-on, awaiting input
    pub fn new(config: OvenConfig) -> Self {
        Self {
            stage: Stage::AwaitingInput,
            countdown: Countdown::new(),
            entry: DigitEntry::default(),
            range: RangeMonitor::new(config.ranging),
            lamp: LampMonitor::new(config.lamp),
            power: PowerTracker::new(),
            done_acknowledged: false,
            abort_ticks: 0,
            signal_on: false,
            cooking_announced: false,
            prompt_pending: true,
            config,
        }
    }

    /// Current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Advance the cycle by one tick
    ///
    /// The abort flag is honored first, then the ranging and lamp
    /// monitors run (in every stage), then the stage itself steps.
    pub fn tick(&mut self, obs: Observations) -> TickEffects {
        if obs.abort_pending {
            self.request_abort();
        }

        let mut events: Vec<StatusEvent, MAX_TICK_EVENTS> = Vec::new();

        let range = self.range.observe(distance_from_pulse(obs.pulse_width_us));
        if range.alarm_raised {
            let _ = events.push(StatusEvent::TooCloseWarning);
        }

        if self.lamp.observe(obs.brightness_raw) {
            let _ = events.push(StatusEvent::AdjustingLight);
        }

        let mut effects = TickEffects {
            events,
            screen: Screen::new(),
            motor_on: false,
            lamp_on: self.lamp.lamp_on(),
            warn_lamp: range.warn_lamp,
            light_lock: None,
            latch: None,
            tone_armed: false,
        };

        match self.stage {
            Stage::AwaitingInput => self.tick_awaiting(&mut effects),
            Stage::Cooking => self.tick_cooking(obs.pot_raw, &mut effects),
            Stage::Done => self.tick_done(&mut effects),
            Stage::Aborted => self.tick_aborted(&mut effects),
        }

        effects
    }

    /// Accept a released digit key
    ///
    /// Outside `AwaitingInput` the digit is ignored and the returned
    /// effects hold the current hardware state. On the second digit the
    /// countdown loads, the power baseline snapshots, the door latches,
    /// and the stage moves to `Cooking`; the motor and servo follow on
    /// the next tick.
    pub fn digit_entered(&mut self, digit: u8, pot_raw: u16) -> TickEffects {
        let mut effects = self.hold_effects();

        if !self.stage.accepts_digits() || digit > 9 {
            return effects;
        }

        if let Some((tens, units)) = self.entry.push(digit) {
            self.countdown.load(tens, units);
            self.power.rebase(power_level_from_raw(pot_raw, &self.config.power));
            self.cooking_announced = false;
            self.stage = self.stage.transition(Event::TimeEntered);
            let _ = effects.events.push(StatusEvent::DoorLatched);
        }

        effects.screen = Screen::time_prompt(self.entry.tens, self.entry.units);
        effects
    }

    /// Handle the cancel flag: preempt the stage and clear the run-once
    /// gates so recovery reruns them. A repeated cancel during the dwell
    /// does not restart it.
    fn request_abort(&mut self) {
        self.stage = self.stage.transition(Event::AbortRequested);
        self.done_acknowledged = false;
        self.signal_on = false;
        self.entry.clear();
        self.countdown = Countdown::new();
    }

    fn tick_awaiting(&mut self, effects: &mut TickEffects) {
        if self.prompt_pending {
            self.prompt_pending = false;
            let _ = effects.events.push(StatusEvent::WaitingForInput);
        }

        effects.screen = Screen::time_prompt(self.entry.tens, self.entry.units);
    }

    fn tick_cooking(&mut self, pot_raw: u16, effects: &mut TickEffects) {
        // Remaining time renders before the decrement
        let (tens, units) = self.countdown.digits();
        let level = power_level_from_raw(pot_raw, &self.config.power);
        effects.screen = Screen::cooking(tens, units, level);

        if !self.cooking_announced {
            self.cooking_announced = true;
            let _ = effects.events.push(StatusEvent::Cooking);
        }

        effects.motor_on = true;
        effects.light_lock = Some(true);
        effects.latch = Some(LatchPosition::Latched);

        if self.power.observe(level) {
            let _ = effects.events.push(StatusEvent::PowerChanged);
        }

        if self.countdown.step().is_expired() {
            self.stage = self.stage.transition(Event::CountdownExpired);
            effects.motor_on = false;
        }
    }

    fn tick_done(&mut self, effects: &mut TickEffects) {
        effects.screen = Screen::done();

        if !self.done_acknowledged {
            self.done_acknowledged = true;
            effects.light_lock = Some(false);
            effects.latch = Some(LatchPosition::Unlatched);
            let _ = effects.events.push(StatusEvent::FinishedCooking);
            let _ = effects.events.push(StatusEvent::DoorUnlatched);
        }

        // Intermittent completion signal, motor and tone in phase
        self.signal_on = !self.signal_on;
        effects.motor_on = self.signal_on;
        effects.tone_armed = self.signal_on;
    }

    fn tick_aborted(&mut self, effects: &mut TickEffects) {
        effects.screen = Screen::aborted();
        effects.latch = Some(LatchPosition::Unlatched);
        effects.light_lock = Some(false);

        if self.abort_ticks == 0 {
            let _ = effects.events.push(StatusEvent::CookingAborted);
            let _ = effects.events.push(StatusEvent::DoorUnlatched);
        }

        self.abort_ticks += 1;
        if self.abort_ticks >= ABORT_DWELL_TICKS {
            self.reset_session();
        }
    }

    /// Reinitialize the session in place and return to `AwaitingInput`
    fn reset_session(&mut self) {
        self.stage = self.stage.transition(Event::DwellElapsed);
        self.countdown = Countdown::new();
        self.entry.clear();
        self.done_acknowledged = false;
        self.abort_ticks = 0;
        self.signal_on = false;
        self.cooking_announced = false;
        self.prompt_pending = true;
    }

    /// Effects that reproduce the current hardware state without
    /// advancing anything
    fn hold_effects(&self) -> TickEffects {
        TickEffects {
            events: Vec::new(),
            screen: self.current_screen(),
            motor_on: self.motor_level(),
            lamp_on: self.lamp.lamp_on(),
            warn_lamp: None,
            light_lock: None,
            latch: None,
            tone_armed: self.stage == Stage::Done && self.signal_on,
        }
    }

    fn current_screen(&self) -> Screen {
        match self.stage {
            Stage::AwaitingInput => Screen::time_prompt(self.entry.tens, self.entry.units),
            Stage::Cooking => {
                let (tens, units) = self.countdown.digits();
                Screen::cooking(tens, units, self.power.level())
            }
            Stage::Done => Screen::done(),
            Stage::Aborted => Screen::aborted(),
        }
    }

    fn motor_level(&self) -> bool {
        match self.stage {
            Stage::Cooking => true,
            Stage::Done => self.signal_on,
            Stage::AwaitingInput | Stage::Aborted => false,
        }
    }
}

impl Default for CookEngine {
    fn default() -> Self {
        Self::new(OvenConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Valid far echo (~499 mm), mid dial (level 7), bright room
    fn quiet() -> Observations {
        Observations {
            pulse_width_us: 2941,
            pot_raw: 600,
            brightness_raw: 50,
            abort_pending: false,
        }
    }

    /// Object inside the alarm distance (~102 mm)
    fn near() -> Observations {
        Observations {
            pulse_width_us: 600,
            ..quiet()
        }
    }

    fn abort() -> Observations {
        Observations {
            abort_pending: true,
            ..quiet()
        }
    }

    /// Engine past the power-on prompt tick
    fn prompted() -> CookEngine {
        let mut engine = CookEngine::new(OvenConfig::default());
        let _ = engine.tick(quiet());
        engine
    }

    /// Engine cooking with the given digits, baseline dial at `quiet()`
    fn cooking(tens: u8, units: u8) -> CookEngine {
        let mut engine = prompted();
        let _ = engine.digit_entered(tens, quiet().pot_raw);
        let _ = engine.digit_entered(units, quiet().pot_raw);
        engine
    }

    #[test]
    fn test_power_on_reports_waiting() {
        let mut engine = CookEngine::new(OvenConfig::default());

        let effects = engine.tick(quiet());
        assert_eq!(effects.events, [StatusEvent::WaitingForInput]);
        assert_eq!(effects.screen, Screen::time_prompt(None, None));
        assert!(!effects.motor_on);
        assert_eq!(effects.latch, None);
        assert_eq!(effects.light_lock, None);

        // Steady state stays silent
        let effects = engine.tick(quiet());
        assert!(effects.events.is_empty());
    }

    #[test]
    fn test_digit_entry_echo_and_latch() {
        let mut engine = prompted();

        let effects = engine.digit_entered(0, 600);
        assert!(effects.events.is_empty());
        assert_eq!(effects.screen, Screen::time_prompt(Some(0), None));
        assert_eq!(engine.stage(), Stage::AwaitingInput);

        let effects = engine.digit_entered(5, 600);
        assert_eq!(effects.events, [StatusEvent::DoorLatched]);
        assert_eq!(effects.screen, Screen::time_prompt(Some(0), Some(5)));
        assert_eq!(engine.stage(), Stage::Cooking);

        // Motor and servo wait for the first cooking tick
        assert!(!effects.motor_on);
        assert_eq!(effects.latch, None);
    }

    #[test]
    fn test_five_second_cook_scenario() {
        let mut engine = cooking(0, 5);

        let expected = [
            "Cooking: 05 sec",
            "Cooking: 04 sec",
            "Cooking: 03 sec",
            "Cooking: 02 sec",
            "Cooking: 01 sec",
            "Cooking: 00 sec",
        ];

        for (index, line) in expected.iter().enumerate() {
            let effects = engine.tick(quiet());
            assert_eq!(effects.screen.get_line(0), *line);
            assert_eq!(effects.screen.get_line(1), "Power: 7");

            if index == 0 {
                assert_eq!(effects.events, [StatusEvent::Cooking]);
                assert_eq!(effects.latch, Some(LatchPosition::Latched));
                assert_eq!(effects.light_lock, Some(true));
            } else {
                assert!(effects.events.is_empty());
            }

            // The motor stops on the expiry tick
            let expiring = index == expected.len() - 1;
            assert_eq!(effects.motor_on, !expiring);
        }

        assert_eq!(engine.stage(), Stage::Done);
    }

    #[test]
    fn test_done_completion_signal() {
        let mut engine = cooking(0, 0);
        let effects = engine.tick(quiet());
        assert_eq!(engine.stage(), Stage::Done);
        assert!(!effects.motor_on);

        // Done entry: release everything, report once, signal on
        let effects = engine.tick(quiet());
        assert_eq!(
            effects.events,
            [StatusEvent::FinishedCooking, StatusEvent::DoorUnlatched]
        );
        assert_eq!(effects.screen, Screen::done());
        assert_eq!(effects.latch, Some(LatchPosition::Unlatched));
        assert_eq!(effects.light_lock, Some(false));
        assert!(effects.motor_on);
        assert!(effects.tone_armed);

        // Signal alternates, no repeated reports
        let effects = engine.tick(quiet());
        assert!(effects.events.is_empty());
        assert!(!effects.motor_on);
        assert!(!effects.tone_armed);
        assert_eq!(effects.latch, None);

        let effects = engine.tick(quiet());
        assert!(effects.motor_on);
        assert!(effects.tone_armed);
    }

    #[test]
    fn test_abort_is_stage_invariant() {
        // From AwaitingInput
        let mut engine = prompted();
        let effects = engine.tick(abort());
        assert_eq!(engine.stage(), Stage::Aborted);
        assert_eq!(
            effects.events,
            [StatusEvent::CookingAborted, StatusEvent::DoorUnlatched]
        );

        // From Cooking
        let mut engine = cooking(9, 9);
        let _ = engine.tick(quiet());
        let effects = engine.tick(abort());
        assert_eq!(engine.stage(), Stage::Aborted);
        assert_eq!(effects.screen, Screen::aborted());
        assert!(!effects.motor_on);
        assert_eq!(effects.latch, Some(LatchPosition::Unlatched));
        assert_eq!(effects.light_lock, Some(false));

        // From Done, with the signal mid-toggle
        let mut engine = cooking(0, 0);
        let _ = engine.tick(quiet());
        let _ = engine.tick(quiet());
        let effects = engine.tick(abort());
        assert_eq!(engine.stage(), Stage::Aborted);
        assert!(!effects.motor_on);
        assert!(!effects.tone_armed);
    }

    #[test]
    fn test_abort_dwell_is_two_ticks() {
        let mut engine = cooking(9, 9);
        let _ = engine.tick(quiet());

        // First aborted tick reports, second stays quiet and resets
        let _ = engine.tick(abort());
        assert_eq!(engine.stage(), Stage::Aborted);

        let effects = engine.tick(quiet());
        assert!(effects.events.is_empty());
        assert_eq!(effects.screen, Screen::aborted());
        assert_eq!(engine.stage(), Stage::AwaitingInput);

        // Recovery prompts again
        let effects = engine.tick(quiet());
        assert_eq!(effects.events, [StatusEvent::WaitingForInput]);
        assert_eq!(effects.screen, Screen::time_prompt(None, None));
    }

    #[test]
    fn test_repeated_cancel_does_not_restart_dwell() {
        let mut engine = cooking(9, 9);
        let _ = engine.tick(quiet());

        let _ = engine.tick(abort());
        let effects = engine.tick(abort());

        // Second press lands mid-dwell: no repeat report, dwell completes
        assert!(effects.events.is_empty());
        assert_eq!(engine.stage(), Stage::AwaitingInput);
    }

    #[test]
    fn test_abort_clears_done_gate() {
        let mut engine = cooking(0, 0);
        let _ = engine.tick(quiet());
        let _ = engine.tick(quiet()); // Done entry consumed the gate

        let _ = engine.tick(abort());
        let _ = engine.tick(quiet()); // dwell ends
        let _ = engine.tick(quiet()); // prompt

        let _ = engine.digit_entered(0, quiet().pot_raw);
        let _ = engine.digit_entered(0, quiet().pot_raw);
        let _ = engine.tick(quiet()); // expires

        // A fresh Done entry reports again
        let effects = engine.tick(quiet());
        assert_eq!(
            effects.events,
            [StatusEvent::FinishedCooking, StatusEvent::DoorUnlatched]
        );
    }

    #[test]
    fn test_abort_during_entry_discards_digits() {
        let mut engine = prompted();
        let _ = engine.digit_entered(7, 600);

        let _ = engine.tick(abort());
        let _ = engine.tick(quiet());

        let effects = engine.tick(quiet());
        assert_eq!(effects.screen, Screen::time_prompt(None, None));

        // A fresh pair is accepted from scratch
        let _ = engine.digit_entered(4, 600);
        let effects = engine.digit_entered(2, 600);
        assert_eq!(effects.events, [StatusEvent::DoorLatched]);
        assert_eq!(engine.stage(), Stage::Cooking);
    }

    #[test]
    fn test_digits_ignored_outside_entry() {
        let mut engine = cooking(9, 9);
        let _ = engine.tick(quiet());

        let effects = engine.digit_entered(3, 600);
        assert!(effects.events.is_empty());
        assert_eq!(engine.stage(), Stage::Cooking);
        assert_eq!(effects.screen.get_line(0), "Cooking: 98 sec");

        // Held effects keep the motor running
        assert!(effects.motor_on);
    }

    #[test]
    fn test_power_changed_reports_once_per_move() {
        let mut engine = cooking(0, 9);

        let effects = engine.tick(quiet());
        assert_eq!(effects.events, [StatusEvent::Cooking]);

        let effects = engine.tick(Observations {
            pot_raw: 900,
            ..quiet()
        });
        assert_eq!(effects.events, [StatusEvent::PowerChanged]);
        assert_eq!(effects.screen.get_line(1), "Power: 10");

        let effects = engine.tick(Observations {
            pot_raw: 900,
            ..quiet()
        });
        assert!(effects.events.is_empty());

        let effects = engine.tick(Observations {
            pot_raw: 100,
            ..quiet()
        });
        assert_eq!(effects.events, [StatusEvent::PowerChanged]);
        assert_eq!(effects.screen.get_line(1), "Power: 2");
    }

    #[test]
    fn test_power_baseline_snapshots_at_entry() {
        let mut engine = prompted();
        let _ = engine.digit_entered(9, 100); // baseline level 2
        let _ = engine.digit_entered(9, 100);

        // Dial moved before the first cooking tick
        let effects = engine.tick(quiet());
        assert_eq!(
            effects.events,
            [StatusEvent::Cooking, StatusEvent::PowerChanged]
        );
    }

    #[test]
    fn test_proximity_warning_edges() {
        let mut engine = prompted();

        let effects = engine.tick(near());
        assert_eq!(effects.events, [StatusEvent::TooCloseWarning]);
        assert_eq!(effects.warn_lamp, Some(true));

        // Holding close: no repeat
        let effects = engine.tick(near());
        assert!(effects.events.is_empty());
        assert_eq!(effects.warn_lamp, Some(true));

        // Clearing is silent
        let effects = engine.tick(quiet());
        assert!(effects.events.is_empty());
        assert_eq!(effects.warn_lamp, Some(false));
    }

    #[test]
    fn test_out_of_window_pulse_holds_warning() {
        let mut engine = prompted();
        let _ = engine.tick(near());

        // 50 µs is ~8 mm, outside the valid window
        let effects = engine.tick(Observations {
            pulse_width_us: 50,
            ..quiet()
        });
        assert_eq!(effects.warn_lamp, None);
        assert!(effects.events.is_empty());

        // Still close when the echo returns: not a new crossing
        let effects = engine.tick(near());
        assert!(effects.events.is_empty());
    }

    #[test]
    fn test_lamp_adjusts_on_threshold_crossing() {
        let mut engine = CookEngine::new(OvenConfig::default());

        // Dark at power-on: lamp change precedes the stage report
        let effects = engine.tick(Observations {
            brightness_raw: 25,
            ..quiet()
        });
        assert_eq!(
            effects.events,
            [StatusEvent::AdjustingLight, StatusEvent::WaitingForInput]
        );
        assert!(effects.lamp_on);

        let effects = engine.tick(Observations {
            brightness_raw: 25,
            ..quiet()
        });
        assert!(effects.events.is_empty());

        // One report for the bright crossing
        let effects = engine.tick(Observations {
            brightness_raw: 35,
            ..quiet()
        });
        assert_eq!(effects.events, [StatusEvent::AdjustingLight]);
        assert!(!effects.lamp_on);

        let effects = engine.tick(Observations {
            brightness_raw: 35,
            ..quiet()
        });
        assert!(effects.events.is_empty());
    }

    #[test]
    fn test_monitors_run_while_cooking() {
        let mut engine = cooking(9, 9);
        let _ = engine.tick(quiet());

        let effects = engine.tick(Observations {
            pulse_width_us: 600,
            brightness_raw: 25,
            ..quiet()
        });
        assert_eq!(
            effects.events,
            [StatusEvent::TooCloseWarning, StatusEvent::AdjustingLight]
        );
        assert!(effects.motor_on);
    }

    #[test]
    fn test_latch_pulse_lookup() {
        let pulses = LatchPulses::default();
        assert_eq!(LatchPosition::Latched.pulse(&pulses), 5500);
        assert_eq!(LatchPosition::Unlatched.pulse(&pulses), 3300);
    }
}
