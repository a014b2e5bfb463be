//! Inter-task communication channels
//!
//! All tasks communicate through the statics defined here. Queued data
//! (key events, screens, status lines) travels over bounded channels;
//! continuously-sampled observations live in atomic cells that the
//! producing task stores and the controller reads on each tick. Each
//! cell carries an independent last-written value with no ordering
//! requirement against the others, and the one-shot flags are claimed
//! with an atomic swap, so relaxed loads and stores are enough.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicBool, AtomicU16, AtomicU32};

use magnetron_core::cycle::LatchPosition;
use magnetron_core::status::StatusEvent;
use magnetron_panel::{KeyEvent, Screen};

/// Queue size for panel key events
const INPUT_QUEUE_SIZE: usize = 8;

/// Queue size for screens awaiting transmission to the panel
const SCREEN_QUEUE_SIZE: usize = 4;

/// Queue size for status events awaiting the diagnostic UART
const STATUS_QUEUE_SIZE: usize = 16;

/// Key events decoded from the panel, both edges of every press.
///
/// Producer: panel RX task. Consumer: controller task.
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, KeyEvent, INPUT_QUEUE_SIZE> =
    Channel::new();

/// Screens to paint on the panel.
///
/// Producers: controller task (every tick) and abort task (immediate
/// abort acknowledgment). Consumer: panel TX task, which drops
/// repaints of identical content.
pub static SCREEN_CHANNEL: Channel<CriticalSectionRawMutex, Screen, SCREEN_QUEUE_SIZE> =
    Channel::new();

/// Status events bound for the diagnostic stream, one line each.
///
/// Producer: controller task. Consumer: status TX task.
pub static STATUS_CHANNEL: Channel<CriticalSectionRawMutex, StatusEvent, STATUS_QUEUE_SIZE> =
    Channel::new();

/// Latch position commands for the door servo.
///
/// A signal rather than a queue: only the most recent position matters.
/// Producer: controller task. Consumer: latch task.
pub static LATCH_CMD: Signal<CriticalSectionRawMutex, LatchPosition> = Signal::new();

/// Most recent echo pulse width from the ranging task, in microseconds.
///
/// Holds the previous value across measurement timeouts.
pub static ECHO_PULSE_US: AtomicU32 = AtomicU32::new(0);

/// Most recent cook-power potentiometer reading, 10-bit.
pub static POT_RAW: AtomicU16 = AtomicU16::new(0);

/// Most recent ambient light reading, 10-bit.
pub static BRIGHTNESS_RAW: AtomicU16 = AtomicU16::new(0);

/// Set by the abort task when the cancel button fires; the controller
/// consumes it on the next tick with a swap to false.
pub static ABORT_PENDING: AtomicBool = AtomicBool::new(false);

/// Whether the sounder should pulse. Written by the controller on
/// stage changes and cleared directly by the abort task so the tone
/// dies without waiting for a tick.
pub static TONE_ARMED: AtomicBool = AtomicBool::new(false);

/// Asks the ranging task to re-prime the trigger line before its next
/// measurement. Set by the abort task.
pub static RANGE_REPRIME: AtomicBool = AtomicBool::new(false);
