//! Per-cycle tick driver
//!
//! Owns the collaborators and all UI state. One call to
//! [`TickDriver::tick`] runs a complete cycle: pump the transport, apply
//! time sync, pick the screen, render it and flush.

use waypoint_core::config::Settings;
use waypoint_core::model::NavigationSnapshot;
use waypoint_core::state::{EventInbox, LinkEdge, ModeSelector, ScreenMode, TimeSyncState};
use waypoint_core::time::TimeText;
use waypoint_core::traits::{Clock, Transport};

use crate::backend::{DisplayError, FrameBuffer};
use crate::screens::{render, IdleView, NavigationView, Screen, StatusScreen};

/// Outcome of one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Screen shown this cycle
    pub mode: ScreenMode,
    /// Connection edge seen this cycle
    pub edge: Option<LinkEdge>,
    /// How long to wait before the next cycle
    pub sleep_ms: u32,
    /// A time-sync event was applied this cycle
    pub time_synced: bool,
    /// Drawing or flushing failed; the next cycle redraws
    pub display_error: Option<DisplayError>,
}

/// Cooperative display loop body
pub struct TickDriver<T, C, F> {
    transport: T,
    clock: C,
    display: F,
    selector: ModeSelector,
    sync: TimeSyncState,
    inbox: EventInbox,
    settings: Settings,
}

impl<T, C, F> TickDriver<T, C, F>
where
    T: Transport,
    C: Clock,
    F: FrameBuffer,
{
    pub fn new(transport: T, clock: C, display: F, settings: Settings) -> Self {
        Self {
            transport,
            clock,
            display,
            selector: ModeSelector::new(settings.timing.notification_ms),
            sync: TimeSyncState::new(),
            inbox: EventInbox::new(),
            settings,
        }
    }

    /// Check the panel against the configured size, then draw the boot splash
    pub fn show_splash(&mut self) -> Result<(), DisplayError> {
        let panel = &self.settings.display;
        if self.display.dimensions() != (panel.width, panel.height) {
            return Err(DisplayError::InvalidCoordinates);
        }

        let screen = Screen::Status(StatusScreen::splash(self.settings.device_name));
        let list = render(&screen, &self.display);
        list.apply(&mut self.display)
    }

    /// Run one cycle at monotonic time `now_ms`
    pub fn tick(&mut self, now_ms: u64) -> CycleReport {
        self.transport.pump(&mut self.inbox);

        let mut time_synced = false;
        while let Some(event) = self.inbox.pop() {
            time_synced |= self.sync.apply(&event, &mut self.clock);
        }

        let navigation = self.transport.navigation();
        let mode = self
            .selector
            .evaluate(now_ms, &mut self.transport, navigation.active);
        let edge = self.selector.edge();

        let display_error = self.draw(mode, edge, &navigation).err();

        CycleReport {
            mode,
            edge,
            sleep_ms: self.settings.timing.cycle_interval_ms(mode),
            time_synced,
            display_error,
        }
    }

    fn draw(
        &mut self,
        mode: ScreenMode,
        edge: Option<LinkEdge>,
        navigation: &NavigationSnapshot,
    ) -> Result<(), DisplayError> {
        let clock = self.clock_text();
        let screen = match (mode, self.selector.notification()) {
            (ScreenMode::Disconnected, _) if edge == Some(LinkEdge::Dropped) => {
                Screen::Status(StatusScreen::dropped())
            }
            (ScreenMode::Disconnected, _) => {
                Screen::Status(StatusScreen::not_connected(self.settings.device_name))
            }
            (ScreenMode::Connected, _) => Screen::Status(StatusScreen::connected()),
            (ScreenMode::Notification, Some(record)) => Screen::Notification(record),
            (ScreenMode::Navigation, _) => Screen::Navigation(NavigationView { navigation, clock }),
            (ScreenMode::Notification, None) | (ScreenMode::Idle, _) => Screen::Idle(IdleView {
                clock,
                weather: self.transport.weather_at(0),
            }),
        };

        let list = render(&screen, &self.display);
        list.apply(&mut self.display)
    }

    /// Formatted wall clock, once any time sync has arrived
    fn clock_text(&self) -> Option<TimeText> {
        self.sync
            .is_synced()
            .then(|| self.clock.format(self.settings.time_format))
    }

    /// Configuration events lost to inbox overflow
    pub fn events_dropped(&self) -> u32 {
        self.inbox.dropped()
    }

    pub fn time_sync(&self) -> TimeSyncState {
        self.sync
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn display(&self) -> &F {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::model::{field_text, NotificationRecord, WeatherSnapshot};
    use waypoint_core::state::ConfigEvent;

    use crate::testing::RecordingBuffer;

    #[derive(Default)]
    struct FakeLink {
        connected: bool,
        pending: Vec<NotificationRecord>,
        navigation: NavigationSnapshot,
        weather: Vec<WeatherSnapshot>,
        config: Vec<ConfigEvent>,
        pumps: u32,
    }

    impl Transport for FakeLink {
        fn pump(&mut self, inbox: &mut EventInbox) {
            self.pumps += 1;
            for event in self.config.drain(..) {
                inbox.push(event);
            }
        }

        fn is_connected(&self) -> bool {
            self.connected
        }

        fn notification_count(&self) -> usize {
            self.pending.len()
        }

        fn notification_at(&self, index: usize) -> Option<NotificationRecord> {
            self.pending.get(index).cloned()
        }

        fn clear_notifications(&mut self) {
            self.pending.clear();
        }

        fn navigation(&self) -> NavigationSnapshot {
            self.navigation.clone()
        }

        fn weather_count(&self) -> usize {
            self.weather.len()
        }

        fn weather_at(&self, index: usize) -> Option<WeatherSnapshot> {
            self.weather.get(index).copied()
        }
    }

    #[derive(Default)]
    struct FakeClock {
        epoch: u32,
    }

    impl Clock for FakeClock {
        fn set_epoch(&mut self, epoch_s: u32) {
            self.epoch = epoch_s;
        }

        fn now_epoch(&self) -> u32 {
            self.epoch
        }
    }

    type Driver = TickDriver<FakeLink, FakeClock, RecordingBuffer>;

    fn driver(link: FakeLink) -> Driver {
        TickDriver::new(link, FakeClock::default(), RecordingBuffer::new(), Settings::DEFAULT)
    }

    fn connected_driver() -> Driver {
        let mut driver = driver(FakeLink {
            connected: true,
            ..FakeLink::default()
        });
        assert_eq!(driver.tick(0).mode, ScreenMode::Connected);
        driver
    }

    fn link(driver: &mut Driver) -> &mut FakeLink {
        &mut driver.transport
    }

    #[test]
    fn test_splash() {
        let mut driver = driver(FakeLink::default());
        driver.show_splash().unwrap();
        assert_eq!(
            driver.display().texts(),
            vec!["WAYPOINT", "Waiting for phone..."]
        );
    }

    #[test]
    fn test_splash_rejects_wrong_panel_size() {
        let mut settings = Settings::DEFAULT;
        settings.display.height = 32;
        let mut driver = TickDriver::new(
            FakeLink::default(),
            FakeClock::default(),
            RecordingBuffer::new(),
            settings,
        );

        assert_eq!(driver.show_splash(), Err(DisplayError::InvalidCoordinates));
        assert!(driver.display().printed.is_empty());
        assert_eq!(driver.display().flushes, 0);
    }

    #[test]
    fn test_disconnected_screen() {
        let mut driver = driver(FakeLink::default());
        let report = driver.tick(0);

        assert_eq!(report.mode, ScreenMode::Disconnected);
        assert_eq!(report.sleep_ms, 200);
        assert_eq!(
            driver.display().texts(),
            vec!["Not connected.", "Pair in app.", "Device: WAYPOINT"]
        );
    }

    #[test]
    fn test_connect_then_idle_waits_for_sync() {
        let mut driver = connected_driver();
        assert_eq!(driver.display().texts(), vec!["Connected", "Open companion app"]);

        let report = driver.tick(120);
        assert_eq!(report.mode, ScreenMode::Idle);
        assert_eq!(report.sleep_ms, 200);
        assert_eq!(driver.display().texts(), vec!["Waiting time sync"]);
    }

    #[test]
    fn test_time_sync_shows_clock() {
        let mut driver = connected_driver();
        link(&mut driver).config.push(ConfigEvent::TimeSync {
            primary: 1_700_000_000,
            secondary: 0,
        });

        let report = driver.tick(120);
        assert!(report.time_synced);
        assert!(driver.time_sync().is_synced());
        assert_eq!(driver.display().texts(), vec!["22:13"]);
    }

    #[test]
    fn test_implausible_sync_still_shows_clock() {
        let mut driver = connected_driver();
        link(&mut driver).config.push(ConfigEvent::TimeSync {
            primary: 3_600,
            secondary: 0,
        });

        driver.tick(120);
        assert_eq!(driver.time_sync().trusted_epoch(), None);
        assert_eq!(driver.display().texts(), vec!["00:00"]);
    }

    #[test]
    fn test_notification_cycle() {
        let mut driver = connected_driver();
        link(&mut driver)
            .pending
            .push(NotificationRecord::new("Mail", "Invoice", "Due Friday"));

        let report = driver.tick(1_000);
        assert_eq!(report.mode, ScreenMode::Notification);
        assert_eq!(report.sleep_ms, 120);
        assert_eq!(
            driver.display().texts(),
            vec!["NOTIF:", "Mail", "Invoice", "Due Friday"]
        );
        assert!(driver.transport().pending.is_empty());

        assert_eq!(driver.tick(5_999).mode, ScreenMode::Notification);
        assert_eq!(driver.tick(6_000).mode, ScreenMode::Idle);
    }

    #[test]
    fn test_navigation_with_clock() {
        let mut driver = connected_driver();
        let link = link(&mut driver);
        link.navigation = NavigationSnapshot {
            active: true,
            title: field_text("80 m"),
            directions: field_text("Turn left"),
            duration: field_text("3 min"),
            icon: None,
        };
        link.config.push(ConfigEvent::TimeSync {
            primary: 1_700_000_000,
            secondary: 0,
        });

        let report = driver.tick(120);
        assert_eq!(report.mode, ScreenMode::Navigation);
        assert_eq!(report.sleep_ms, 120);
        assert_eq!(
            driver.display().texts(),
            vec!["80 m", "Turn left", "ETA: 3 min", "22:13"]
        );
    }

    #[test]
    fn test_idle_weather() {
        let mut driver = connected_driver();
        link(&mut driver).weather.push(WeatherSnapshot {
            temp: 18,
            high: 20,
            low: 9,
        });

        driver.tick(120);
        assert_eq!(
            driver.display().texts(),
            vec!["Waiting time sync", "18C  H20 L9"]
        );
    }

    #[test]
    fn test_drop_then_steady_disconnect() {
        let mut driver = connected_driver();
        link(&mut driver).connected = false;

        let report = driver.tick(120);
        assert_eq!(report.edge, Some(LinkEdge::Dropped));
        assert_eq!(driver.display().texts(), vec!["Disconnected", "Pair again"]);

        driver.tick(320);
        assert_eq!(driver.display().texts()[0], "Not connected.");
    }

    #[test]
    fn test_display_error_reported_and_recovered() {
        let mut driver = connected_driver();
        driver.display.fail_flush = true;
        assert_eq!(
            driver.tick(120).display_error,
            Some(DisplayError::Communication)
        );

        driver.display.fail_flush = false;
        assert_eq!(driver.tick(320).display_error, None);
    }

    #[test]
    fn test_config_burst_overflows_inbox() {
        let mut driver = connected_driver();
        for minute in 0..10 {
            link(&mut driver).config.push(ConfigEvent::TimeSync {
                primary: 1_700_000_000 + minute * 60,
                secondary: 0,
            });
        }

        let report = driver.tick(120);
        assert!(report.time_synced);
        assert_eq!(driver.events_dropped(), 2);
        // Newest event wins
        assert_eq!(driver.display().texts(), vec!["22:22"]);
    }

    #[test]
    fn test_pumps_once_per_tick() {
        let mut driver = connected_driver();
        driver.tick(120);
        driver.tick(240);
        assert_eq!(driver.transport().pumps, 3);
    }
}
