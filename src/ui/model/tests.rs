use super::*;

fn center(layout: &Layout, region: Region) -> ScreenPoint {
    let rect = layout.region(region);
    ScreenPoint::new((rect.x_min + rect.x_max) / 2, (rect.y_min + rect.y_max) / 2)
}

#[test]
fn popup_round_trip_returns_to_main() {
    let mut ui = UiModel::default();
    ui.show_popup(PopupKind::ProjectInfo);
    assert_eq!(ui.mode(), UiMode::PopupOpen);
    assert_eq!(ui.visible_popup(), Some(PopupKind::ProjectInfo));

    ui.hide_popup(PopupKind::ProjectInfo);
    assert_eq!(ui.mode(), UiMode::Main);
    assert_eq!(ui.visible_popup(), None);
    assert_eq!(ui.take_repaints().as_slice(), &[Repaint::MainScreen]);
}

#[test]
fn coffee_popup_takes_precedence_over_project_info() {
    let mut ui = UiModel::default();
    ui.show_popup(PopupKind::ProjectInfo);
    ui.show_popup(PopupKind::Coffee);
    assert_eq!(ui.visible_popup(), Some(PopupKind::Coffee));

    ui.hide_popup(PopupKind::Coffee);
    assert_eq!(ui.mode(), UiMode::PopupOpen);
    assert_eq!(ui.visible_popup(), Some(PopupKind::ProjectInfo));
}

#[test]
fn peer_info_screen_ignores_popup_requests() {
    let mut ui = UiModel::default();
    ui.show_peer_info_screen();
    assert_eq!(ui.mode(), UiMode::PeerInfo);

    ui.show_popup(PopupKind::Coffee);
    assert_eq!(ui.mode(), UiMode::PeerInfo);
    assert_eq!(ui.visible_popup(), None);

    ui.hide_peer_info_screen();
    assert_eq!(ui.mode(), UiMode::Main);
}

#[test]
fn custom_color_overlay_picks_and_closes() {
    let mut ui = UiModel::default();
    ui.set_eraser_enabled(true);
    ui.enter_custom_color_mode();
    assert!(ui.custom_color_active());
    assert!(!ui.brush_indicator_visible());
    assert_eq!(ui.mode(), UiMode::Main);

    let cell = ui.layout().picker[2];
    let point = ScreenPoint::new(cell.rect.x_min + 1, cell.rect.y_min + 1);
    ui.handle_color_picker_touch(point);
    assert_eq!(ui.current_color(), cell.color);
    assert!(!ui.eraser_enabled());
    assert!(!ui.custom_color_active());
    assert!(ui.brush_indicator_visible());
}

#[test]
fn picker_miss_keeps_color() {
    let mut ui = UiModel::default();
    let before = ui.current_color();
    ui.enter_custom_color_mode();
    ui.handle_color_picker_touch(ScreenPoint::new(1, 1));
    assert_eq!(ui.current_color(), before);
    assert!(!ui.custom_color_active());
}

#[test]
fn full_screen_picker_closes_back_to_main() {
    let mut ui = UiModel::default();
    assert!(ui.open_color_picker_screen());
    assert_eq!(ui.mode(), UiMode::ColorPicker);
    let cell = ui.layout().picker[0];
    ui.handle_color_picker_touch(ScreenPoint::new(cell.rect.x_min, cell.rect.y_min));
    assert_eq!(ui.mode(), UiMode::Main);
}

#[test]
fn slider_touch_sets_radius() {
    let mut ui = UiModel::default();
    let track = ui.layout().eraser_slider;
    ui.handle_eraser_slider_touch(ScreenPoint::new(track.x_max, track.y_min));
    assert_eq!(ui.eraser_radius(), ui.layout().eraser_radius_max);
    assert_eq!(ui.take_repaints().as_slice(), &[Repaint::EraserSlider]);
}

#[test]
fn main_screen_repaint_absorbs_partial_repaints() {
    let mut ui = UiModel::default();
    ui.request_repaint(Repaint::EraserButton);
    ui.request_repaint(Repaint::EraserButton);
    ui.request_repaint(Repaint::BrushIndicator);
    ui.clear_screen();
    ui.request_repaint(Repaint::EraserSlider);
    assert_eq!(ui.take_repaints().as_slice(), &[Repaint::MainScreen]);
    assert!(ui.take_repaints().is_empty());
    assert_eq!(ui.screen_clears(), 1);
}

#[test]
fn hit_uses_layout_geometry() {
    let ui = UiModel::default();
    let reset = center(ui.layout(), Region::ResetButton);
    assert!(ui.hit(Region::ResetButton, reset));
    assert!(!ui.hit(Region::EraserButton, reset));
    let swatch = ui.layout().swatches[1];
    assert_eq!(
        ui.color_swatch_at(ScreenPoint::new(swatch.rect.x_min, swatch.rect.y_max)),
        Some(swatch.color)
    );
}
