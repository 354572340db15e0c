//! SERCOM console firmware
//!
//! Brings up SERCOM1 on PA00/PA01 as an 8N1 UART and echoes input back,
//! logging each completed line over defmt.

#![no_std]
#![no_main]

use core::fmt::Write as _;

use atsamd_hal::clock::GenericClockController;
use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use sercom_core::{ClockConfig, SercomUart, UartSettings, DEFAULT_CLOCK_HZ};
use sercom_hal_samd21::clock::PowerClocks;
use sercom_hal_samd21::nvic::Nvic;
use sercom_hal_samd21::pac;
use sercom_hal_samd21::port::PortMux;
use sercom_hal_samd21::usart::SercomUsart;

use crate::console::{on_rx_byte, with_console, CONSOLE};

mod channels;
mod console;
mod echo;

/// Console settings
const SETTINGS: UartSettings = UartSettings::new(115_200);

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("SERCOM console firmware starting...");

    let mut peripherals = pac::Peripherals::take().unwrap();
    let mut core_peripherals = pac::CorePeripherals::take().unwrap();

    // DFLL48M on GCLK0; the console core clock is routed from it during init
    let clocks = GenericClockController::with_internal_32kosc(
        peripherals.GCLK,
        &mut peripherals.PM,
        &mut peripherals.SYSCTRL,
        &mut peripherals.NVMCTRL,
    );
    info!("Clocks initialized");

    let uart = match SercomUart::new(
        SercomUsart::sercom1(peripherals.SERCOM1),
        PowerClocks::new(peripherals.PM, clocks),
        PortMux::new(peripherals.PORT),
        Nvic::new(&mut core_peripherals.NVIC),
        ClockConfig::gclk0(DEFAULT_CLOCK_HZ),
    ) {
        Ok(uart) => uart,
        Err(e) => {
            error!("Console clock rejected: {:?}", e);
            return;
        }
    };
    uart.set_rx_callback(on_rx_byte);

    // Install and initialise in one critical section so the handler
    // never sees a half-configured driver
    let result = CONSOLE.lock(|cell| {
        let mut slot = cell.borrow_mut();
        let uart = slot.insert(uart);
        uart.apply(&SETTINGS)
    });
    match result {
        Ok(()) => info!("Console ready at {} Bd", SETTINGS.baud_rate),
        Err(e) => {
            error!("Console settings rejected: {:?}", e);
            return;
        }
    }

    let banner = with_console(|uart| {
        write!(uart, "\r\nsercom console, {} Bd\r\n", SETTINGS.baud_rate)
    });
    if let Some(Err(_)) = banner {
        warn!("Failed to write banner");
    }

    spawner.spawn(echo::echo_task()).unwrap();
}
