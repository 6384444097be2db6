//! src/model/ui_state.rs
//! ============================================================================
//! UI chrome state: mode, overlay, redraw flags, notifications and the
//! animated banner. Carousel content state lives in [`crate::model::gallery`].

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Instant;

use compact_str::CompactString;

use crate::model::banner::Banner;

/// Atomic redraw flags for lock-free UI updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RedrawFlag {
    Main = 1,
    StatusBar = 2,
    Overlay = 4,
    Notification = 8,
    All = 15,
}

impl RedrawFlag {
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// UI operation modes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum UIMode {
    #[default]
    Browse = 0,
    Help = 1,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NotificationLevel {
    Info = 0,
    Warning = 1,
    Error = 2,
}

/// Compact notification with timestamp
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: CompactString,
    pub level: NotificationLevel,
    pub timestamp: Instant,
    pub auto_dismiss_ms: Option<u32>,
}

#[derive(Debug)]
pub struct UIState {
    // Atomic flags for lock-free updates
    pub redraw_flags: AtomicU32,
    pub frame_count: AtomicU64,

    pub mode: UIMode,
    pub banner: Banner,

    pub notification: Option<Notification>,
}

impl UIState {
    pub fn new(banner_title: &str) -> Self {
        Self {
            redraw_flags: AtomicU32::new(RedrawFlag::All.bits() as u32),
            frame_count: AtomicU64::new(0),
            mode: UIMode::Browse,
            banner: Banner::new(banner_title),
            notification: None,
        }
    }

    // Atomic redraw operations
    #[inline]
    pub fn request_redraw(&self, flag: RedrawFlag) {
        self.redraw_flags
            .fetch_or(flag.bits() as u32, Ordering::Relaxed);
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_flags.load(Ordering::Relaxed) != 0
    }

    #[inline]
    pub fn clear_redraw(&self) {
        self.redraw_flags.store(0, Ordering::Relaxed);
    }

    #[inline]
    pub fn increment_frame(&self) {
        self.frame_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            UIMode::Browse => UIMode::Help,
            UIMode::Help => UIMode::Browse,
        };
        self.request_redraw(RedrawFlag::All);
    }

    // Notification system with inline helpers
    pub fn show_notification(
        &mut self,
        message: impl Into<CompactString>,
        level: NotificationLevel,
        auto_dismiss_ms: Option<u32>,
    ) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
            timestamp: Instant::now(),
            auto_dismiss_ms,
        });
        self.request_redraw(RedrawFlag::Notification);
    }

    #[inline]
    pub fn show_info(&mut self, message: impl Into<CompactString>) {
        self.show_notification(message, NotificationLevel::Info, Some(3000));
    }

    #[inline]
    pub fn show_warning(&mut self, message: impl Into<CompactString>) {
        self.show_notification(message, NotificationLevel::Warning, Some(5000));
    }

    #[inline]
    pub fn show_error(&mut self, message: impl Into<CompactString>) {
        self.show_notification(message, NotificationLevel::Error, None);
    }

    // Auto-dismiss notifications
    pub fn update_notification(&mut self) -> bool {
        if let Some(notification) = &self.notification
            && let Some(auto_dismiss_ms) = notification.auto_dismiss_ms
            && notification.timestamp.elapsed().as_millis() > auto_dismiss_ms as u128
        {
            self.notification = None;
            self.request_redraw(RedrawFlag::Notification);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redraw_flags_set_and_clear() {
        let ui = UIState::new("CARAVEL");
        ui.clear_redraw();
        assert!(!ui.needs_redraw());

        ui.request_redraw(RedrawFlag::Main);
        assert!(ui.needs_redraw());

        ui.clear_redraw();
        assert!(!ui.needs_redraw());

        ui.increment_frame();
        assert_eq!(ui.frame_count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn help_mode_toggles() {
        let mut ui = UIState::new("CARAVEL");
        assert_eq!(ui.mode, UIMode::Browse);
        ui.toggle_help();
        assert_eq!(ui.mode, UIMode::Help);
        ui.toggle_help();
        assert_eq!(ui.mode, UIMode::Browse);
    }

    #[test]
    fn notifications_carry_levels() {
        let mut ui = UIState::new("CARAVEL");
        ui.show_warning("no galleries found");
        let n = ui.notification.as_ref().expect("notification");
        assert_eq!(n.level, NotificationLevel::Warning);
        assert_eq!(n.message, "no galleries found");
    }
}
