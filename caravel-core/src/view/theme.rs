//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha Theme Color Palette
//!
//! Color constants from the official Catppuccin theme specification:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const SURFACE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const ORANGE: Color = Color::Rgb(250, 179, 135); // Peach
pub const PINK: Color = Color::Rgb(245, 194, 231); // Pink
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

pub fn banner_style() -> Style {
    Style::default().fg(PURPLE).add_modifier(Modifier::BOLD)
}

pub fn banner_static_style() -> Style {
    Style::default().fg(COMMENT).add_modifier(Modifier::BOLD)
}

pub fn panel_border_style() -> Style {
    Style::default().fg(SURFACE)
}

pub fn panel_focused_border_style() -> Style {
    Style::default().fg(PURPLE)
}

pub fn slide_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub fn caption_style() -> Style {
    Style::default().fg(YELLOW).add_modifier(Modifier::ITALIC)
}

pub fn indicator_active_style() -> Style {
    Style::default().fg(PINK).add_modifier(Modifier::BOLD)
}

pub fn indicator_idle_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn playback_style() -> Style {
    Style::default().fg(GREEN)
}

pub fn gallery_item_style() -> Style {
    Style::default().fg(FOREGROUND)
}

pub fn gallery_focused_style() -> Style {
    Style::default().bg(SURFACE).fg(PINK).add_modifier(Modifier::BOLD)
}

pub fn status_bar_style() -> Style {
    Style::default().bg(SURFACE).fg(FOREGROUND)
}

pub fn help_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub fn help_border_style() -> Style {
    Style::default().fg(PURPLE)
}

pub fn notification_style(error: bool) -> Style {
    if error {
        Style::default().bg(SURFACE).fg(RED)
    } else {
        Style::default().bg(SURFACE).fg(CYAN)
    }
}
