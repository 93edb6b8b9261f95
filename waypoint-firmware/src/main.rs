//! Waypoint - Companion Display Firmware
//!
//! Main firmware binary for an RP2040 driving a 128x64 SSD1306 OLED.
//! Phone state arrives from a BLE bridge module over UART0; the display
//! shows connection status, notifications, navigation or an idle clock.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use waypoint_core::config::Settings;
use waypoint_core::link::LinkTransport;
use waypoint_display::TickDriver;

use crate::channels::ChannelSource;
use crate::oled::Oled;
use crate::rtc::SoftRtc;

mod channels;
mod oled;
mod rtc;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Compiled-in device settings
const SETTINGS: Settings = Settings::DEFAULT;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 1024]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Waypoint firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // I2C0 for the panel; the typed pins below must match SETTINGS.display
    info!(
        "I2C0 SDA=GP{} SCL=GP{} @ {} Hz",
        SETTINGS.display.sda_pin, SETTINGS.display.scl_pin, SETTINGS.display.i2c_frequency
    );
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = SETTINGS.display.i2c_frequency;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);

    let display = match Oled::new(i2c, SETTINGS.display.i2c_address) {
        Ok(display) => display,
        Err(e) => {
            error!("Display init failed: {:?}", e);
            loop {
                Timer::after_secs(1).await;
            }
        }
    };
    info!("Display initialized");

    // UART0 for the bridge; the typed pins below must match SETTINGS.link
    info!(
        "UART0 TX=GP{} RX=GP{} @ {} baud",
        SETTINGS.link.tx_pin, SETTINGS.link.rx_pin, SETTINGS.link.baudrate
    );
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = SETTINGS.link.baudrate;

    let tx_buf = TX_BUF.init([0u8; 16]);
    let rx_buf = RX_BUF.init([0u8; 1024]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    info!("UART initialized for bridge link");

    let transport = LinkTransport::new(ChannelSource::new());
    let mut driver = TickDriver::new(transport, SoftRtc::new(), display, SETTINGS);
    if let Err(e) = driver.show_splash() {
        warn!(
            "Splash screen failed: {:?} (expected {}x{} panel)",
            e, SETTINGS.display.width, SETTINGS.display.height
        );
    }

    // Spawn tasks
    spawner.spawn(tasks::link_rx_task(rx)).unwrap();
    spawner.spawn(tasks::tick_task(driver)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
