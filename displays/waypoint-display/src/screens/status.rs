//! Connection status screens

use crate::backend::TextSize;
use crate::command::{DrawList, Label};
use crate::layout::{truncate, LINE_HEIGHT};

/// Characters that fit on one small-font line
const LINE_CHARS: usize = 21;

/// Up to three lines of plain status text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusScreen<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    /// Name shown as "Device: NAME"
    pub device_name: Option<&'a str>,
}

impl<'a> StatusScreen<'a> {
    /// Shown once when the phone connects
    pub const fn connected() -> Self {
        Self {
            title: "Connected",
            subtitle: Some("Open companion app"),
            device_name: None,
        }
    }

    /// Shown once when the phone drops
    pub const fn dropped() -> Self {
        Self {
            title: "Disconnected",
            subtitle: Some("Pair again"),
            device_name: None,
        }
    }

    /// Steady state while no phone is connected
    pub const fn not_connected(device_name: &'a str) -> Self {
        Self {
            title: "Not connected.",
            subtitle: Some("Pair in app."),
            device_name: Some(device_name),
        }
    }

    /// Boot splash before the first cycle
    pub const fn splash(device_name: &'a str) -> Self {
        Self {
            title: device_name,
            subtitle: Some("Waiting for phone..."),
            device_name: None,
        }
    }
}

pub(crate) fn draw<'a>(screen: &'a StatusScreen<'a>, list: &mut DrawList<'a>) {
    list.text_size(TextSize::Small);

    let mut y = 0;
    list.text(0, y, truncate(screen.title, LINE_CHARS));

    if let Some(subtitle) = screen.subtitle {
        y += LINE_HEIGHT;
        list.text(0, y, truncate(subtitle, LINE_CHARS));
    }

    if let Some(name) = screen.device_name {
        y += LINE_HEIGHT;
        list.text(0, y, Label::format(format_args!("Device: {}", truncate(name, LINE_CHARS - 8))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::{render, Screen};
    use crate::testing::RecordingBuffer;

    fn draw_status(screen: StatusScreen<'_>) -> RecordingBuffer {
        let screen = Screen::Status(screen);
        let mut fb = RecordingBuffer::new();
        render(&screen, &fb).apply(&mut fb).unwrap();
        fb
    }

    #[test]
    fn test_connected() {
        let fb = draw_status(StatusScreen::connected());
        assert_eq!(fb.texts(), vec!["Connected", "Open companion app"]);
        assert_eq!(fb.flushes, 1);
    }

    #[test]
    fn test_dropped() {
        let fb = draw_status(StatusScreen::dropped());
        assert_eq!(fb.texts(), vec!["Disconnected", "Pair again"]);
    }

    #[test]
    fn test_not_connected_lines() {
        let fb = draw_status(StatusScreen::not_connected("WAYPOINT"));
        assert_eq!(
            fb.texts(),
            vec!["Not connected.", "Pair in app.", "Device: WAYPOINT"]
        );
        let ys: Vec<_> = fb.printed.iter().map(|p| p.1).collect();
        assert_eq!(ys, vec![0, 10, 20]);
    }

    #[test]
    fn test_splash_uses_device_name() {
        let fb = draw_status(StatusScreen::splash("WAYPOINT"));
        assert_eq!(fb.texts(), vec!["WAYPOINT", "Waiting for phone..."]);
    }

    #[test]
    fn test_long_device_name_fits_line() {
        let fb = draw_status(StatusScreen::not_connected("A-VERY-LONG-DEVICE-NAME"));
        assert!(fb.texts()[2].chars().count() <= LINE_CHARS);
    }
}
