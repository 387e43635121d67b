use super::DrawAction;
use crate::config::ERASE_COLOR;
use crate::touch::ScreenPoint;
use crate::ui::{PopupKind, Region, UiMode, UiState};

/// What a single valid touch resolves to. Exactly one per contact cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchAction {
    DismissPopup(PopupKind),
    ColorPickerTouch(ScreenPoint),
    ShowPopup(PopupKind),
    ToggleDebugInfo,
    ResetCanvas,
    SelectColor(u16),
    ToggleEraser,
    EraserSlider(ScreenPoint),
    ShowPeerInfo,
    EnterCustomColor,
    SaveScreenshot,
    HidePeerInfo,
    Draw {
        action: DrawAction,
        /// The eraser slider was open and this canvas touch closes it.
        dismiss_slider: bool,
    },
    Ignore,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MainControl {
    CoffeeButton,
    InfoButton,
    DebugPanel,
    DebugToggleButton,
    ResetButton,
    ColorSwatch,
    EraserButton,
    EraserSlider,
    PeerInfoButton,
    CustomColorButton,
    ScreenshotButton,
}

// Main-screen evaluation order. Hit boxes overlap in places (the info
// button sits inside the debug panel, the coffee button shares the debug
// corner); the earlier entry always wins.
const MAIN_CONTROLS: [MainControl; 11] = [
    MainControl::CoffeeButton,
    MainControl::InfoButton,
    MainControl::DebugPanel,
    MainControl::DebugToggleButton,
    MainControl::ResetButton,
    MainControl::ColorSwatch,
    MainControl::EraserButton,
    MainControl::EraserSlider,
    MainControl::PeerInfoButton,
    MainControl::CustomColorButton,
    MainControl::ScreenshotButton,
];

pub struct RegionRouter;

impl RegionRouter {
    pub fn route<U: UiState + ?Sized>(ui: &U, point: ScreenPoint) -> TouchAction {
        if let Some(kind) = ui.visible_popup() {
            return TouchAction::DismissPopup(kind);
        }
        match ui.mode() {
            UiMode::Main => route_main(ui, point),
            UiMode::ColorPicker => TouchAction::ColorPickerTouch(point),
            UiMode::PeerInfo => {
                if ui.hit(Region::PeerInfoBackButton, point) {
                    TouchAction::HidePeerInfo
                } else {
                    TouchAction::Ignore
                }
            }
            // Popup screen with nothing left to dismiss.
            UiMode::PopupOpen => TouchAction::Ignore,
        }
    }
}

fn route_main<U: UiState + ?Sized>(ui: &U, point: ScreenPoint) -> TouchAction {
    if ui.custom_color_active() {
        return TouchAction::ColorPickerTouch(point);
    }
    MAIN_CONTROLS
        .iter()
        .find_map(|&control| claim(control, ui, point))
        .unwrap_or_else(|| canvas_action(ui, point))
}

fn claim<U: UiState + ?Sized>(
    control: MainControl,
    ui: &U,
    point: ScreenPoint,
) -> Option<TouchAction> {
    let hit = |region| ui.hit(region, point);
    match control {
        MainControl::CoffeeButton => (ui.debug_toggle_visible() && hit(Region::CoffeeButton))
            .then_some(TouchAction::ShowPopup(PopupKind::Coffee)),
        MainControl::InfoButton => (ui.debug_info_visible() && hit(Region::InfoButton))
            .then_some(TouchAction::ShowPopup(PopupKind::ProjectInfo)),
        MainControl::DebugPanel => (ui.debug_info_visible()
            && hit(Region::DebugPanel)
            && !hit(Region::InfoButton))
        .then_some(TouchAction::ToggleDebugInfo),
        MainControl::DebugToggleButton => (!ui.debug_info_visible()
            && ui.debug_toggle_visible()
            && hit(Region::DebugToggleButton))
        .then_some(TouchAction::ToggleDebugInfo),
        MainControl::ResetButton => hit(Region::ResetButton).then_some(TouchAction::ResetCanvas),
        MainControl::ColorSwatch => ui.color_swatch_at(point).map(TouchAction::SelectColor),
        MainControl::EraserButton => hit(Region::EraserButton).then_some(TouchAction::ToggleEraser),
        MainControl::EraserSlider => (ui.eraser_slider_visible() && hit(Region::EraserSlider))
            .then_some(TouchAction::EraserSlider(point)),
        MainControl::PeerInfoButton => {
            hit(Region::PeerInfoButton).then_some(TouchAction::ShowPeerInfo)
        }
        MainControl::CustomColorButton => {
            hit(Region::CustomColorButton).then_some(TouchAction::EnterCustomColor)
        }
        MainControl::ScreenshotButton => {
            hit(Region::ScreenshotButton).then_some(TouchAction::SaveScreenshot)
        }
    }
}

fn canvas_action<U: UiState + ?Sized>(ui: &U, point: ScreenPoint) -> TouchAction {
    let is_erase = ui.eraser_enabled();
    TouchAction::Draw {
        action: DrawAction {
            point,
            color: if is_erase {
                ERASE_COLOR
            } else {
                ui.current_color()
            },
            is_erase,
        },
        dismiss_slider: ui.eraser_slider_visible(),
    }
}
