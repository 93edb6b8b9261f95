//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::state::ScreenMode;

/// Display panel and bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Panel width in pixels
    pub width: u16,
    /// Panel height in pixels
    pub height: u16,
    /// 7-bit I2C address of the controller
    pub i2c_address: u8,
    /// I2C SDA GPIO
    pub sda_pin: u8,
    /// I2C SCL GPIO
    pub scl_pin: u8,
    /// I2C bus frequency in Hz
    pub i2c_frequency: u32,
}

impl DisplayConfig {
    /// 128x64 SSD1306 on I2C0 (GP4/GP5)
    pub const DEFAULT: Self = Self {
        width: 128,
        height: 64,
        i2c_address: 0x3C,
        sda_pin: 4,
        scl_pin: 5,
        i2c_frequency: 400_000,
    };
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Bridge module UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkConfig {
    /// UART baud rate
    pub baudrate: u32,
    /// UART TX GPIO
    pub tx_pin: u8,
    /// UART RX GPIO
    pub rx_pin: u8,
}

impl LinkConfig {
    /// UART0 on GP0/GP1 at 115200 baud
    pub const DEFAULT: Self = Self {
        baudrate: 115_200,
        tx_pin: 0,
        rx_pin: 1,
    };
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Screen timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// How long a captured notification stays on screen
    pub notification_ms: u32,
    /// Cycle interval for status, notification and navigation screens
    pub active_interval_ms: u32,
    /// Cycle interval for idle and disconnected screens
    pub idle_interval_ms: u32,
}

impl TimingConfig {
    pub const DEFAULT: Self = Self {
        notification_ms: 5_000,
        active_interval_ms: 120,
        idle_interval_ms: 200,
    };

    /// Sleep budget at the end of a cycle that rendered `mode`
    pub fn cycle_interval_ms(&self, mode: ScreenMode) -> u32 {
        if mode.is_active() {
            self.active_interval_ms
        } else {
            self.idle_interval_ms
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete device settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Name the phone pairs with, shown on the disconnected screen
    pub device_name: &'static str,
    /// strftime-style pattern for the clock on idle and navigation screens
    pub time_format: &'static str,
    pub display: DisplayConfig,
    pub link: LinkConfig,
    pub timing: TimingConfig,
}

impl Settings {
    pub const DEFAULT: Self = Self {
        device_name: "WAYPOINT",
        time_format: "%H:%M",
        display: DisplayConfig::DEFAULT,
        link: LinkConfig::DEFAULT,
        timing: TimingConfig::DEFAULT,
    };
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_follows_mode() {
        let timing = TimingConfig::DEFAULT;
        assert_eq!(timing.cycle_interval_ms(ScreenMode::Notification), 120);
        assert_eq!(timing.cycle_interval_ms(ScreenMode::Navigation), 120);
        assert_eq!(timing.cycle_interval_ms(ScreenMode::Connected), 120);
        assert_eq!(timing.cycle_interval_ms(ScreenMode::Idle), 200);
        assert_eq!(timing.cycle_interval_ms(ScreenMode::Disconnected), 200);
    }

    #[test]
    fn test_default_panel() {
        let settings = Settings::default();
        assert_eq!(settings.display.width, 128);
        assert_eq!(settings.display.height, 64);
        assert_eq!(settings.display.i2c_address, 0x3C);
        assert_eq!(settings.timing.notification_ms, 5_000);
    }

    #[test]
    fn test_default_board_wiring() {
        let settings = Settings::default();
        // I2C0 SDA/SCL and UART0 TX/RX pads on the RP2040
        assert_eq!((settings.display.sda_pin, settings.display.scl_pin), (4, 5));
        assert_eq!((settings.link.tx_pin, settings.link.rx_pin), (0, 1));
        assert_eq!(settings.display.i2c_frequency, 400_000);
        assert_eq!(settings.link.baudrate, 115_200);
    }
}
