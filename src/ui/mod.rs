//! UI-state contract consumed by the touch dispatcher, plus the board's own
//! implementation of it.
//!
//! Widget drawing is not done here. Mutators record what changed and queue
//! [`Repaint`] requests; the display task drains them and redraws the
//! affected widgets.

pub mod layout;
mod machine;
mod model;
pub mod types;

pub use layout::{ColorSwatch, Layout, Rect};
pub use model::UiModel;
pub use types::{PopupKind, Region, Repaint, UiMode};

use crate::touch::ScreenPoint;

pub trait UiState {
    fn mode(&self) -> UiMode;

    /// Topmost visible popup; coffee wins when both are up.
    fn visible_popup(&self) -> Option<PopupKind>;
    fn custom_color_active(&self) -> bool;
    fn current_color(&self) -> u16;
    fn eraser_enabled(&self) -> bool;
    fn eraser_radius(&self) -> i32;
    fn eraser_slider_visible(&self) -> bool;
    fn debug_toggle_visible(&self) -> bool;
    fn debug_info_visible(&self) -> bool;

    fn hit(&self, region: Region, point: ScreenPoint) -> bool;
    fn color_swatch_at(&self, point: ScreenPoint) -> Option<u16>;

    fn show_popup(&mut self, kind: PopupKind);
    fn hide_popup(&mut self, kind: PopupKind);
    fn toggle_debug_info(&mut self);
    fn update_current_color(&mut self, color: u16);
    fn set_eraser_enabled(&mut self, enabled: bool);
    fn set_eraser_slider_visible(&mut self, visible: bool);
    /// Opens the custom color overlay: snapshot the covered screen area,
    /// draw the selectors and hide the brush indicator.
    fn enter_custom_color_mode(&mut self);
    fn handle_color_picker_touch(&mut self, point: ScreenPoint);
    fn handle_eraser_slider_touch(&mut self, point: ScreenPoint);
    fn show_peer_info_screen(&mut self);
    fn hide_peer_info_screen(&mut self);
    fn save_screenshot(&mut self);
    fn clear_screen(&mut self);
    fn request_repaint(&mut self, repaint: Repaint);
}
