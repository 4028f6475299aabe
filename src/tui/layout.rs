//! Layout definitions for the TUI
//!
//! One centered form box, a hint line under it, and a toast slot in the
//! top-right corner.

use ratatui::layout::Rect;

/// Width of the centered form box
pub const FORM_WIDTH: u16 = 68;

/// Height of the centered form box
pub const FORM_HEIGHT: u16 = 18;

/// Create a fixed-size centered rect for the form
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// The area the form dialog occupies
pub fn form_area(frame_area: Rect) -> Rect {
    centered_rect_fixed(FORM_WIDTH, FORM_HEIGHT, frame_area)
}

/// Top-right corner slot for toast notifications
pub fn notification_area(frame_area: Rect) -> Rect {
    let width = 36.min(frame_area.width);
    let height = 4.min(frame_area.height);
    Rect::new(
        frame_area.x + frame_area.width.saturating_sub(width + 1),
        frame_area.y + 1,
        width,
        height.min(frame_area.height.saturating_sub(1)),
    )
}
