//! Door latch task
//!
//! Drives the latch servo to whichever position the controller last
//! commanded. Repositioning is rare (cook entry, completion, abort),
//! so the task sleeps on the signal in between.

use defmt::*;
use embassy_rp::pwm::Pwm;

use magnetron_drivers::LatchServo;

use crate::channels::LATCH_CMD;

#[embassy_executor::task]
pub async fn latch_task(mut servo: LatchServo<Pwm<'static>>) {
    info!("Latch task started");

    loop {
        let position = LATCH_CMD.wait().await;

        if servo.position() == Some(position) {
            continue;
        }

        info!("Latch -> {:?}", position);
        servo.set_position(position);
    }
}
