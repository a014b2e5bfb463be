//! Controller task
//!
//! Owns the cook engine and applies its effects to hardware. The task
//! wakes on either a panel key event or the cycle tick; everything it
//! knows about the world arrives through the observation cells, and
//! everything it decides leaves through pins, the latch signal, and
//! the screen and status queues.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use portable_atomic::Ordering;

use magnetron_core::config::OvenConfig;
use magnetron_core::cycle::{CookEngine, Observations, TickEffects};
use magnetron_drivers::Turntable;

use crate::channels::{
    ABORT_PENDING, BRIGHTNESS_RAW, ECHO_PULSE_US, INPUT_CHANNEL, LATCH_CMD, POT_RAW,
    SCREEN_CHANNEL, STATUS_CHANNEL, TONE_ARMED,
};
use crate::tasks::tick::TICK_SIGNAL;

/// Output pins owned by the controller
pub struct ControllerPins {
    /// Turntable motor driver
    pub motor: Turntable<Output<'static>>,
    /// Chamber light interlock
    pub light_lock: Output<'static>,
    /// Cabinet lamp
    pub lamp: Output<'static>,
    /// Proximity warning lamp
    pub warn_lamp: Output<'static>,
}

#[embassy_executor::task]
pub async fn controller_task(mut pins: ControllerPins) {
    info!("Controller task started");

    let mut engine = CookEngine::new(OvenConfig::default());

    loop {
        match select(INPUT_CHANNEL.receive(), TICK_SIGNAL.wait()).await {
            Either::First(key) => {
                // Digits count on the release edge
                if !key.is_release() {
                    continue;
                }
                debug!("Digit released: {}", key.digit());

                let pot_raw = POT_RAW.load(Ordering::Relaxed);
                let effects = engine.digit_entered(key.digit(), pot_raw);
                apply_effects(&mut pins, effects);
            }
            Either::Second(count) => {
                trace!("Tick {}", count);

                let obs = Observations {
                    pulse_width_us: ECHO_PULSE_US.load(Ordering::Relaxed),
                    pot_raw: POT_RAW.load(Ordering::Relaxed),
                    brightness_raw: BRIGHTNESS_RAW.load(Ordering::Relaxed),
                    abort_pending: ABORT_PENDING.swap(false, Ordering::Relaxed),
                };
                let effects = engine.tick(obs);
                apply_effects(&mut pins, effects);
            }
        }
    }
}

/// Apply one set of engine effects to pins, flags, and queues
fn apply_effects(pins: &mut ControllerPins, effects: TickEffects) {
    pins.motor.set_on(effects.motor_on);
    drive(&mut pins.lamp, effects.lamp_on);

    if let Some(on) = effects.warn_lamp {
        drive(&mut pins.warn_lamp, on);
    }
    if let Some(on) = effects.light_lock {
        drive(&mut pins.light_lock, on);
    }
    if let Some(position) = effects.latch {
        LATCH_CMD.signal(position);
    }

    TONE_ARMED.store(effects.tone_armed, Ordering::Relaxed);

    for event in &effects.events {
        info!("Status: {}", event.as_str());
        if STATUS_CHANNEL.try_send(*event).is_err() {
            warn!("Status channel full, dropping event");
        }
    }

    // The TX side drops repaints of identical screens
    if SCREEN_CHANNEL.try_send(effects.screen).is_err() {
        warn!("Screen channel full, dropping screen");
    }
}

fn drive(pin: &mut Output<'static>, on: bool) {
    if on {
        pin.set_high();
    } else {
        pin.set_low();
    }
}
