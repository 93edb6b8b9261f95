//! Screen renderers
//!
//! One pure renderer per screen kind. Each takes a data snapshot and
//! produces a [`DrawList`] that starts with a clear and ends with a flush.

pub mod idle;
pub mod navigation;
pub mod notification;
pub mod status;

pub use idle::IdleView;
pub use navigation::NavigationView;
pub use status::StatusScreen;

use waypoint_core::model::NotificationRecord;

use crate::backend::TextMetrics;
use crate::command::{DrawCommand, DrawList};
use crate::layout::TextBlock;

/// Panel width the layouts are designed for
pub const SCREEN_WIDTH: u16 = 128;

/// Panel height the layouts are designed for
pub const SCREEN_HEIGHT: u16 = 64;

/// Placeholder for an empty text field
pub const PLACEHOLDER: &str = "-";

/// Everything that can be on screen during one cycle
#[derive(Debug, Clone)]
pub enum Screen<'a> {
    /// Connection status and boot messages
    Status(StatusScreen<'a>),
    /// A captured phone notification
    Notification(&'a NotificationRecord),
    /// Turn-by-turn navigation
    Navigation(NavigationView<'a>),
    /// Clock and weather
    Idle(IdleView),
}

/// Render `screen` into a draw list
pub fn render<'a, M: TextMetrics + ?Sized>(screen: &'a Screen<'a>, metrics: &M) -> DrawList<'a> {
    let mut list = DrawList::new();
    list.push(DrawCommand::Clear);

    match screen {
        Screen::Status(status) => status::draw(status, &mut list),
        Screen::Notification(record) => notification::draw(record, &mut list),
        Screen::Navigation(view) => navigation::draw(view, metrics, &mut list),
        Screen::Idle(view) => idle::draw(view, metrics, &mut list),
    }

    list.push(DrawCommand::Flush);
    list
}

/// `text`, or `placeholder` if it is empty
fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.is_empty() {
        placeholder
    } else {
        text
    }
}

/// Wrap `text` into `block`, or print `placeholder` at its origin if no
/// line survives
fn wrapped<'a>(
    list: &mut DrawList<'a>,
    block: TextBlock,
    text: &'a str,
    placeholder: &'a str,
) {
    let mut any = false;
    for line in block.lines(text) {
        list.text(line.x, line.y, line.text);
        any = true;
    }
    if !any {
        list.text(block.x, block.y, placeholder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CellMetrics;

    #[test]
    fn test_every_screen_clears_then_flushes() {
        let record = NotificationRecord::new("Mail", "Hi", "There");
        let screens = [
            Screen::Status(StatusScreen::connected()),
            Screen::Notification(&record),
            Screen::Idle(IdleView::default()),
        ];

        for screen in &screens {
            let list = render(screen, &CellMetrics);
            assert_eq!(list.commands().first(), Some(&DrawCommand::Clear));
            assert_eq!(list.commands().last(), Some(&DrawCommand::Flush));
            assert!(!list.overflowed());
        }
    }
}
