//! src/view/components/notification_overlay.rs

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use crate::model::ui_state::{Notification, NotificationLevel};
use crate::view::theme;

pub struct NotificationOverlay;

impl NotificationOverlay {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, notification: &Notification, area: Rect) {
        Clear.render(area, frame.buffer_mut());

        let is_error = notification.level == NotificationLevel::Error;
        let title = match notification.level {
            NotificationLevel::Info => " Info ",
            NotificationLevel::Warning => " Warning ",
            NotificationLevel::Error => " Error ",
        };

        Paragraph::new(notification.message.as_str())
            .style(theme::notification_style(is_error))
            .alignment(Alignment::Center)
            .block(Block::default().title(title).borders(Borders::ALL))
            .render(area, frame.buffer_mut());
    }
}

impl Default for NotificationOverlay {
    fn default() -> Self {
        Self::new()
    }
}
