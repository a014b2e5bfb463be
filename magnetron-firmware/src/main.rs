//! Magnetron - Microwave Oven Controller Firmware
//!
//! Main firmware binary for the RP2040-based cook-cycle controller.
//!
//! Named after the magnetron, the tube that does the actual cooking.
//! This firmware does everything around it: the countdown, the door
//! latch, the turntable, the panel link, and the proximity and light
//! monitors.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart, UartTx};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use magnetron_core::config::OvenConfig;
use magnetron_drivers::{LatchServo, Sounder, Turntable};

mod channels;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// Static cells for panel UART buffers (must live forever)
static PANEL_TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static PANEL_RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Status stream baud rate
const STATUS_BAUD: u32 = 9600;

/// Divider for the servo PWM slice: 125 MHz / 42 ≈ 3 MHz count clock
const SERVO_PWM_DIVIDER: u8 = 42;

/// Servo counter wrap for a ~50 Hz frame at the divided clock
const SERVO_PWM_TOP: u16 = 59_999;

/// Divider for the sounder PWM slice: 125 MHz / 125 = 1 MHz count clock
const TONE_PWM_DIVIDER: u8 = 125;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Magnetron firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = OvenConfig::default();

    // Front panel link: GPIO0 TX / GPIO1 RX
    let panel_uart_config = UartConfig::default(); // 115200 baud default
    let tx_buf = PANEL_TX_BUF.init([0u8; 256]);
    let rx_buf = PANEL_RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, panel_uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (panel_tx, panel_rx) = uart.split();
    info!("Panel UART initialized");

    // Status stream: GPIO4 TX only (GPIO5 belongs to the cancel button)
    let status_uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = STATUS_BAUD;
        cfg
    };
    let status_tx = UartTx::new(p.UART1, p.PIN_4, p.DMA_CH0, status_uart_config);
    info!("Status UART initialized");

    // Ultrasonic rangefinder: GPIO2 trigger, GPIO3 echo
    let trigger = Output::new(p.PIN_2, Level::Low);
    let echo = Input::new(p.PIN_3, Pull::None);

    // Cancel button: GPIO5, active low
    let cancel = Input::new(p.PIN_5, Pull::Up);

    // Controller outputs: motor GPIO6, light lock GPIO7, lamp GPIO8,
    // warning lamp GPIO9
    let pins = tasks::ControllerPins {
        motor: Turntable::new(Output::new(p.PIN_6, Level::Low)),
        light_lock: Output::new(p.PIN_7, Level::Low),
        lamp: Output::new(p.PIN_8, Level::Low),
        warn_lamp: Output::new(p.PIN_9, Level::Low),
    };

    // Latch servo: PWM slice 5 channel A on GPIO10. The door idles
    // unlatched until the first cook entry commands otherwise.
    let mut servo_config = PwmConfig::default();
    servo_config.divider = SERVO_PWM_DIVIDER.into();
    servo_config.top = SERVO_PWM_TOP;
    servo_config.compare_a = config.latch.unlatched;
    let servo_pwm = Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, servo_config);
    let servo = LatchServo::new(servo_pwm, config.latch);

    // Completion sounder: PWM slice 6 channel A on GPIO12, square wave
    // at the configured pitch
    let mut tone_config = PwmConfig::default();
    tone_config.divider = TONE_PWM_DIVIDER.into();
    tone_config.top = config.tone.pitch;
    let tone_pwm = Pwm::new_output_a(p.PWM_SLICE6, p.PIN_12, tone_config);
    let sounder = Sounder::new(tone_pwm, config.tone.pitch / 2);
    info!("PWM outputs initialized");

    // Analog inputs: power dial on GPIO26, light sensor on GPIO27
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let pot_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let light_channel = Channel::new_pin(p.PIN_27, Pull::None);
    info!("ADC initialized");

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::controller_task(pins)).unwrap();
    spawner.spawn(tasks::ranging_task(trigger, echo)).unwrap();
    spawner
        .spawn(tasks::sensors_task(adc, pot_channel, light_channel))
        .unwrap();
    spawner.spawn(tasks::tone_task(sounder)).unwrap();
    spawner
        .spawn(tasks::abort_task(cancel, tasks::AbortConfig::default()))
        .unwrap();
    spawner.spawn(tasks::latch_task(servo)).unwrap();
    spawner.spawn(tasks::panel_tx_task(panel_tx)).unwrap();
    spawner.spawn(tasks::panel_rx_task(panel_rx)).unwrap();
    spawner.spawn(tasks::status_tx_task(status_tx)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
