//! UI updates (cursor blink)

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Interval between cursor blink state flips
const BLINK_INTERVAL_MS: u64 = 500;

pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::BlinkCursor => {
            if model
                .ui
                .update_cursor_blink(Duration::from_millis(BLINK_INTERVAL_MS))
            {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
