//! src/controller/actions.rs
//! ============================================================================
//! Flat action enum: every state mutation the UI can request.

/// Every action the event loop can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,

    // Carousel navigation (focused instance only)
    NextSlide,
    PrevSlide,
    GoToSlide(usize),

    // Gallery focus
    FocusNextGallery,
    FocusPrevGallery,
    JumpToGallery(usize),

    // Playback
    TogglePlayback,

    // UI controls
    ToggleHelp,
    CloseOverlay,
    Resize(u16, u16),

    // Periodic animation / autoplay step
    Tick,
}
