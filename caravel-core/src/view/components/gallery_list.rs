//! src/view/components/gallery_list.rs
//! ============================================================================
//! Left-hand gallery column: one row per carousel, highlighting the focused
//! one.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
    Frame,
};

use crate::model::gallery::GalleryState;
use crate::view::theme;

pub struct GalleryList;

impl GalleryList {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, gallery: &GalleryState, area: Rect) {
        let items: Vec<ListItem<'_>> = gallery
            .carousels()
            .iter()
            .enumerate()
            .map(|(i, carousel)| {
                let style = if i == gallery.focused_index() {
                    theme::gallery_focused_style()
                } else {
                    theme::gallery_item_style()
                };
                let count = if carousel.is_inert() {
                    "empty".to_string()
                } else {
                    format!("{} slides", carousel.len())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", carousel.name()), style),
                    Span::styled(format!("({count})"), theme::indicator_idle_style()),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Galleries ")
                .borders(Borders::ALL)
                .border_style(theme::panel_border_style()),
        );
        list.render(area, frame.buffer_mut());
    }
}

impl Default for GalleryList {
    fn default() -> Self {
        Self::new()
    }
}
