//! Notification screen

use waypoint_core::model::NotificationRecord;

use crate::backend::TextSize;
use crate::command::DrawList;
use crate::layout::{truncate, TextBlock};

use super::{or_placeholder, wrapped, PLACEHOLDER, SCREEN_WIDTH};

const APP_CHARS: usize = 20;
const TITLE_CHARS: usize = 26;

const TITLE_BLOCK: TextBlock = TextBlock::new(0, 22, SCREEN_WIDTH, 2);
const BODY_BLOCK: TextBlock = TextBlock::new(0, 44, SCREEN_WIDTH, 2);

pub(crate) fn draw<'a>(record: &'a NotificationRecord, list: &mut DrawList<'a>) {
    list.text_size(TextSize::Small);
    list.text(0, 0, "NOTIF:");
    list.text(0, 10, or_placeholder(truncate(&record.app, APP_CHARS), PLACEHOLDER));
    wrapped(list, TITLE_BLOCK, truncate(&record.title, TITLE_CHARS), PLACEHOLDER);
    wrapped(list, BODY_BLOCK, &record.body, PLACEHOLDER);
}
