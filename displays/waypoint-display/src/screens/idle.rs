//! Idle clock and weather screen

use waypoint_core::model::WeatherSnapshot;
use waypoint_core::time::TimeText;

use crate::backend::{TextMetrics, TextSize};
use crate::command::{DrawList, Label};

use super::{SCREEN_HEIGHT, SCREEN_WIDTH};

const SYNC_WAIT_TEXT: &str = "Waiting time sync";
const SYNC_WAIT_POS: (i16, i16) = (10, 28);

const WEATHER_Y: i16 = 54;
/// Clock moves up by this much when a weather line is shown
const WEATHER_SHIFT: i16 = 6;

/// Clock (only once time is synced) and the first weather entry
#[derive(Debug, Clone, Default)]
pub struct IdleView {
    pub clock: Option<TimeText>,
    pub weather: Option<WeatherSnapshot>,
}

pub(crate) fn draw<'a, M: TextMetrics + ?Sized>(
    view: &'a IdleView,
    metrics: &M,
    list: &mut DrawList<'a>,
) {
    match &view.clock {
        Some(clock) => {
            let bounds = metrics.measure_text(clock, TextSize::Large);
            let x = centred(SCREEN_WIDTH, bounds.width);
            let mut y = centred(SCREEN_HEIGHT, bounds.height);
            if view.weather.is_some() {
                y = (y - WEATHER_SHIFT).max(0);
            }
            list.text_size(TextSize::Large);
            list.text(x, y, clock.as_str());
        }
        None => {
            list.text_size(TextSize::Small);
            list.text(SYNC_WAIT_POS.0, SYNC_WAIT_POS.1, SYNC_WAIT_TEXT);
        }
    }

    if let Some(weather) = view.weather {
        let line = Label::format(format_args!(
            "{}C  H{} L{}",
            weather.temp, weather.high, weather.low
        ));
        let width = metrics.measure_text(line.as_str(), TextSize::Small).width;
        list.text_size(TextSize::Small);
        list.text(centred(SCREEN_WIDTH, width), WEATHER_Y, line);
    }
}

/// Offset that centres `content` within `total`, clamped to the left edge
fn centred(total: u16, content: u16) -> i16 {
    (total.saturating_sub(content) / 2) as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::{render, Screen};
    use crate::testing::RecordingBuffer;

    fn draw_view(view: IdleView) -> RecordingBuffer {
        let screen = Screen::Idle(view);
        let mut fb = RecordingBuffer::new();
        render(&screen, &fb).apply(&mut fb).unwrap();
        fb
    }

    fn clock(text: &str) -> Option<TimeText> {
        Some(TimeText::try_from(text).unwrap())
    }

    #[test]
    fn test_waiting_for_sync() {
        let fb = draw_view(IdleView::default());
        assert_eq!(
            fb.printed,
            vec![(10, 28, TextSize::Small, SYNC_WAIT_TEXT.to_string())]
        );
    }

    #[test]
    fn test_clock_centred() {
        let fb = draw_view(IdleView {
            clock: clock("12:34"),
            weather: None,
        });
        // 5 chars x 18 px wide, 24 px tall
        assert_eq!(
            fb.printed,
            vec![(19, 20, TextSize::Large, "12:34".to_string())]
        );
    }

    #[test]
    fn test_weather_line_shifts_clock() {
        let fb = draw_view(IdleView {
            clock: clock("12:34"),
            weather: Some(WeatherSnapshot {
                temp: 21,
                high: 25,
                low: -3,
            }),
        });

        assert_eq!(fb.printed[0].1, 14);
        let weather = &fb.printed[1];
        assert_eq!(weather.3, "21C  H25 L-3");
        assert_eq!(weather.2, TextSize::Small);
        assert_eq!((weather.0, weather.1), ((128 - 12 * 6) / 2, WEATHER_Y));
    }

    #[test]
    fn test_weather_without_sync() {
        let fb = draw_view(IdleView {
            clock: None,
            weather: Some(WeatherSnapshot::default()),
        });
        assert_eq!(fb.texts(), vec![SYNC_WAIT_TEXT, "0C  H0 L0"]);
    }

    #[test]
    fn test_centred_clamps() {
        assert_eq!(centred(128, 200), 0);
        assert_eq!(centred(128, 28), 50);
    }
}
