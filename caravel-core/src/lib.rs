pub mod error;

pub mod config;

pub mod model {
    pub mod banner;
    pub use banner::{Banner, WalkGroup};

    pub mod carousel;
    pub use carousel::{Carousel, Indicator, MediaKind, Playback, Slide};

    pub mod gallery;
    pub use gallery::GalleryState;

    pub mod ui_state;
    pub use ui_state::{Notification, NotificationLevel, RedrawFlag, UIMode, UIState};
}

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod event_loop;
    pub use event_loop::Controller;
}

pub mod media {
    pub mod loader;
    pub mod manifest;
    pub use manifest::{GalleryManifest, SlideEntry};
}

pub mod view {
    pub mod theme;

    pub mod ui;
    pub use ui::UIRenderer;

    pub mod components {
        pub mod carousel_panel;
        pub use carousel_panel::CarouselPanel;
        pub mod gallery_list;
        pub use gallery_list::GalleryList;
        pub mod help_overlay;
        pub use help_overlay::HelpOverlay;
        pub mod notification_overlay;
        pub use notification_overlay::NotificationOverlay;
        pub mod status_bar;
        pub use status_bar::StatusBar;
        pub mod title_banner;
        pub use title_banner::TitleBanner;
    }

    pub use components::*;
}

pub mod logging;
pub use logging::Logger;

pub use error::AppError;

pub use model::{carousel::Carousel, gallery::GalleryState, ui_state::UIState};
