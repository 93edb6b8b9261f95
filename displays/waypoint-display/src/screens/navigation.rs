//! Navigation screen

use waypoint_core::model::{NavigationSnapshot, NAV_ICON_SIZE};
use waypoint_core::time::TimeText;

use crate::backend::{Bitmap, TextMetrics, TextSize};
use crate::command::{DrawCommand, DrawList, Label};
use crate::layout::{truncate, TextBlock, CHAR_CELL_WIDTH};

use super::{or_placeholder, wrapped, PLACEHOLDER, SCREEN_WIDTH};

const DISTANCE_CHARS: usize = 6;
const DISTANCE_PLACEHOLDER: &str = "--";
const DIRECTIONS_PLACEHOLDER: &str = "Next step";

const ICON_X: i16 = (SCREEN_WIDTH - NAV_ICON_SIZE) as i16;
const FOOTER_Y: i16 = 56;
const ETA_PREFIX_CHARS: u16 = 5;

/// Directions beside the icon
const NARROW_BLOCK: TextBlock = TextBlock::new(0, 22, 90, 2);
/// Directions across the full width
const WIDE_BLOCK: TextBlock = TextBlock::new(0, 22, SCREEN_WIDTH, 3);

/// Navigation data plus the formatted clock, if time is synced
#[derive(Debug, Clone)]
pub struct NavigationView<'a> {
    pub navigation: &'a NavigationSnapshot,
    pub clock: Option<TimeText>,
}

pub(crate) fn draw<'a, M: TextMetrics + ?Sized>(
    view: &'a NavigationView<'a>,
    metrics: &M,
    list: &mut DrawList<'a>,
) {
    let nav = view.navigation;

    if !nav.active {
        list.text_size(TextSize::Small);
        list.text(0, 0, "Waiting for");
        list.text(0, 10, "navigation...");
        return;
    }

    list.text_size(TextSize::Medium);
    let distance = truncate(&nav.title, DISTANCE_CHARS);
    list.text(0, 0, or_placeholder(distance, DISTANCE_PLACEHOLDER));
    list.text_size(TextSize::Small);

    let icon = nav
        .icon
        .as_ref()
        .and_then(|icon| Bitmap::new(NAV_ICON_SIZE, NAV_ICON_SIZE, icon.data()));
    let block = match icon {
        Some(bitmap) => {
            list.push(DrawCommand::Bitmap {
                x: ICON_X,
                y: 0,
                bitmap,
            });
            NARROW_BLOCK
        }
        None => WIDE_BLOCK,
    };
    wrapped(list, block, &nav.directions, DIRECTIONS_PLACEHOLDER);

    let clock_x = view.clock.as_ref().map(|clock| {
        let width = metrics.measure_text(clock, TextSize::Small).width;
        SCREEN_WIDTH.saturating_sub(width)
    });

    // ETA stops short of the clock
    let eta_room = clock_x.unwrap_or(SCREEN_WIDTH) / CHAR_CELL_WIDTH;
    let eta_chars = usize::from(eta_room.saturating_sub(ETA_PREFIX_CHARS));
    let eta = or_placeholder(truncate(&nav.duration, eta_chars), PLACEHOLDER);
    list.text(0, FOOTER_Y, Label::format(format_args!("ETA: {}", eta)));

    if let (Some(clock), Some(x)) = (&view.clock, clock_x) {
        list.text(x as i16, FOOTER_Y, clock.as_str());
    }
}
