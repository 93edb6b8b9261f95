//! Display tick task
//!
//! Runs one display cycle, then sleeps for the cycle budget the mode asks
//! for. A cycle always finishes before the next one starts.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Instant, Timer};

use waypoint_core::link::LinkTransport;
use waypoint_core::state::ScreenMode;
use waypoint_display::TickDriver;

use crate::channels::ChannelSource;
use crate::oled::Oled;
use crate::rtc::SoftRtc;

/// Driver wired to the bridge channel, software clock and SSD1306
pub type Driver = TickDriver<LinkTransport<ChannelSource>, SoftRtc, Oled<I2c<'static, I2C0, Blocking>>>;

/// Tick task - owns all UI state
#[embassy_executor::task]
pub async fn tick_task(mut driver: Driver) {
    info!("Tick task started");

    let start = Instant::now();
    let mut last_mode: Option<ScreenMode> = None;
    let mut last_rejected = 0u32;
    let mut last_events_dropped = 0u32;

    loop {
        let now_ms = start.elapsed().as_millis();
        let report = driver.tick(now_ms);

        if last_mode != Some(report.mode) {
            debug!("Screen mode: {:?}", report.mode);
            last_mode = Some(report.mode);
        }
        if let Some(edge) = report.edge {
            info!("Phone link: {:?}", edge);
        }
        if report.time_synced {
            info!("Time sync: {:?}", driver.time_sync());
        }
        if let Some(e) = report.display_error {
            warn!("Display error: {:?}", e);
        }

        let stats = driver.transport().stats();
        if stats.rejected != last_rejected {
            warn!(
                "Dropped {} undecodable frames (last error: {:?})",
                stats.rejected.wrapping_sub(last_rejected),
                stats.last_error
            );
            last_rejected = stats.rejected;
        }

        let events_dropped = driver.events_dropped();
        if events_dropped != last_events_dropped {
            warn!(
                "Config inbox overflowed, {} events lost",
                events_dropped.wrapping_sub(last_events_dropped)
            );
            last_events_dropped = events_dropped;
        }

        Timer::after_millis(u64::from(report.sleep_ms)).await;
    }
}
