use heapless::Vec;
use statig::blocking::IntoStateMachineExt as _;

use super::layout::Layout;
use super::machine::{DispatchContext, ScreenApplyStatus, ScreenCommand, ScreenMachine};
use super::types::{PopupKind, Region, Repaint, UiMode};
use super::UiState;
use crate::config::{DEFAULT_BRUSH_COLOR, ERASER_RADIUS_DEFAULT, REPAINT_QUEUE_CAPACITY};
use crate::touch::ScreenPoint;

pub struct UiModel {
    machine: statig::blocking::StateMachine<ScreenMachine>,
    layout: Layout,
    custom_color_active: bool,
    brush_color: u16,
    brush_indicator_visible: bool,
    eraser_enabled: bool,
    eraser_radius: i32,
    eraser_slider_visible: bool,
    debug_toggle_visible: bool,
    debug_info_visible: bool,
    screen_clears: u32,
    screenshot_requests: u32,
    repaints: Vec<Repaint, REPAINT_QUEUE_CAPACITY>,
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new(Layout::new())
    }
}

impl UiModel {
    pub fn new(layout: Layout) -> Self {
        Self {
            machine: ScreenMachine::new().state_machine(),
            layout,
            custom_color_active: false,
            brush_color: DEFAULT_BRUSH_COLOR,
            brush_indicator_visible: true,
            eraser_enabled: false,
            eraser_radius: ERASER_RADIUS_DEFAULT,
            eraser_slider_visible: false,
            debug_toggle_visible: true,
            debug_info_visible: false,
            screen_clears: 0,
            screenshot_requests: 0,
            repaints: Vec::new(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn brush_indicator_visible(&self) -> bool {
        self.brush_indicator_visible
    }

    pub fn screen_clears(&self) -> u32 {
        self.screen_clears
    }

    pub fn screenshot_requests(&self) -> u32 {
        self.screenshot_requests
    }

    pub fn set_debug_toggle_visible(&mut self, visible: bool) {
        self.debug_toggle_visible = visible;
    }

    /// Full-screen picker, entered from outside the main canvas flow.
    pub fn open_color_picker_screen(&mut self) -> bool {
        self.apply(ScreenCommand::OpenColorPicker)
    }

    pub fn take_repaints(&mut self) -> Vec<Repaint, REPAINT_QUEUE_CAPACITY> {
        core::mem::take(&mut self.repaints)
    }

    fn apply(&mut self, command: ScreenCommand) -> bool {
        let mut context = DispatchContext::default();
        self.machine.handle_with_context(&command, &mut context);
        match context.status {
            ScreenApplyStatus::Applied => true,
            ScreenApplyStatus::Unchanged => false,
            ScreenApplyStatus::InvalidTransition => {
                log::debug!("ui: ignored {:?} in {:?}", command, self.mode());
                false
            }
        }
    }

    fn leave_custom_color_mode(&mut self) {
        self.custom_color_active = false;
        self.brush_indicator_visible = true;
        if self.mode() == UiMode::ColorPicker {
            self.apply(ScreenCommand::CloseColorPicker);
        }
        // Restores the area the selectors covered.
        self.request_repaint(Repaint::MainScreen);
    }
}

impl UiState for UiModel {
    fn mode(&self) -> UiMode {
        self.machine.inner().snapshot.mode
    }

    fn visible_popup(&self) -> Option<PopupKind> {
        self.machine.inner().snapshot.visible_popup()
    }

    fn custom_color_active(&self) -> bool {
        self.custom_color_active
    }

    fn current_color(&self) -> u16 {
        self.brush_color
    }

    fn eraser_enabled(&self) -> bool {
        self.eraser_enabled
    }

    fn eraser_radius(&self) -> i32 {
        self.eraser_radius
    }

    fn eraser_slider_visible(&self) -> bool {
        self.eraser_slider_visible
    }

    fn debug_toggle_visible(&self) -> bool {
        self.debug_toggle_visible
    }

    fn debug_info_visible(&self) -> bool {
        self.debug_info_visible
    }

    fn hit(&self, region: Region, point: ScreenPoint) -> bool {
        self.layout.region(region).contains(point)
    }

    fn color_swatch_at(&self, point: ScreenPoint) -> Option<u16> {
        self.layout.swatch_at(point)
    }

    fn show_popup(&mut self, kind: PopupKind) {
        self.apply(ScreenCommand::ShowPopup(kind));
    }

    fn hide_popup(&mut self, kind: PopupKind) {
        if self.apply(ScreenCommand::HidePopup(kind)) {
            self.request_repaint(Repaint::MainScreen);
        }
    }

    fn toggle_debug_info(&mut self) {
        self.debug_info_visible = !self.debug_info_visible;
        self.request_repaint(Repaint::MainScreen);
    }

    fn update_current_color(&mut self, color: u16) {
        self.brush_color = color;
    }

    fn set_eraser_enabled(&mut self, enabled: bool) {
        self.eraser_enabled = enabled;
    }

    fn set_eraser_slider_visible(&mut self, visible: bool) {
        self.eraser_slider_visible = visible;
    }

    fn enter_custom_color_mode(&mut self) {
        self.custom_color_active = true;
        self.brush_indicator_visible = false;
    }

    fn handle_color_picker_touch(&mut self, point: ScreenPoint) {
        if let Some(color) = self.layout.picker_color_at(point) {
            self.brush_color = color;
            self.eraser_enabled = false;
        }
        // Any touch closes the picker; a miss keeps the previous color.
        self.leave_custom_color_mode();
    }

    fn handle_eraser_slider_touch(&mut self, point: ScreenPoint) {
        self.eraser_radius = self.layout.slider_radius_at(point.x);
        self.request_repaint(Repaint::EraserSlider);
    }

    fn show_peer_info_screen(&mut self) {
        self.apply(ScreenCommand::ShowPeerInfo);
    }

    fn hide_peer_info_screen(&mut self) {
        if self.apply(ScreenCommand::HidePeerInfo) {
            self.request_repaint(Repaint::MainScreen);
        }
    }

    fn save_screenshot(&mut self) {
        self.screenshot_requests = self.screenshot_requests.saturating_add(1);
    }

    fn clear_screen(&mut self) {
        self.screen_clears = self.screen_clears.saturating_add(1);
        self.request_repaint(Repaint::MainScreen);
    }

    fn request_repaint(&mut self, repaint: Repaint) {
        if self.repaints.contains(&Repaint::MainScreen) || self.repaints.contains(&repaint) {
            return;
        }
        if repaint == Repaint::MainScreen {
            // A full repaint covers every pending partial one.
            self.repaints.clear();
        }
        if self.repaints.push(repaint).is_err() {
            self.repaints.clear();
            let _ = self.repaints.push(Repaint::MainScreen);
        }
    }
}

#[cfg(test)]
mod tests;
