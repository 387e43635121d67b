use std::vec::Vec;

use super::*;
use crate::config::{COLOR_GREEN, COLOR_RED, COLOR_WHITE, ERASE_COLOR};
use crate::history::DrawingHistory;
use crate::sync::{EnvelopeKind, SyncEnvelope, SyncState};
use crate::touch::RawSample;
use crate::ui::{UiMode, UiModel};

const CANVAS: ScreenPoint = ScreenPoint::new(200, 150);
const RESET: ScreenPoint = ScreenPoint::new(20, 15);
const ERASER: ScreenPoint = ScreenPoint::new(20, 44);
const SLIDER_END: ScreenPoint = ScreenPoint::new(131, 44);
const PEER_INFO: ScreenPoint = ScreenPoint::new(20, 100);
const SCREENSHOT: ScreenPoint = ScreenPoint::new(20, 70);
const RED_SWATCH: ScreenPoint = ScreenPoint::new(300, 44);
const CUSTOM_COLOR: ScreenPoint = ScreenPoint::new(300, 184);
const PEER_INFO_BACK: ScreenPoint = ScreenPoint::new(300, 220);
const DEBUG_TOGGLE: ScreenPoint = ScreenPoint::new(10, 220);
const COFFEE: ScreenPoint = ScreenPoint::new(40, 220);
const INFO: ScreenPoint = ScreenPoint::new(100, 215);
const DEBUG_PANEL: ScreenPoint = ScreenPoint::new(70, 205);
const PICKER_RED: ScreenPoint = ScreenPoint::new(90, 110);
const PICKER_GREEN: ScreenPoint = ScreenPoint::new(160, 110);

struct PanelSensor {
    contact: Option<ScreenPoint>,
    pressure: u16,
}

impl TouchSensor for PanelSensor {
    fn has_pending_touch(&mut self) -> bool {
        self.contact.is_some()
    }

    fn poll_raw_sample(&mut self) -> RawSample {
        let point = self.contact.unwrap_or_default();
        RawSample {
            x: point.x as u16,
            y: point.y as u16,
            pressure: self.pressure,
        }
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

#[derive(Default)]
struct LinkSpy {
    state: SyncState,
    sent: Vec<SyncEnvelope>,
}

impl Replication for LinkSpy {
    fn time_offset_ms(&self) -> i32 {
        self.state.time_offset_ms
    }

    fn reset_sync_state(&mut self) {
        self.state.reset();
    }

    fn broadcast(&mut self, envelope: SyncEnvelope) {
        self.sent.push(envelope);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Pixel(ScreenPoint, u16),
    Line(ScreenPoint, ScreenPoint, u16),
    Disc(ScreenPoint, i32, u16),
}

#[derive(Default)]
struct CanvasSpy {
    marks: Vec<Mark>,
}

impl Raster for CanvasSpy {
    fn draw_pixel(&mut self, point: ScreenPoint, color: u16) {
        self.marks.push(Mark::Pixel(point, color));
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: u16) {
        self.marks.push(Mark::Line(from, to, color));
    }

    fn fill_circle(&mut self, center: ScreenPoint, radius: i32, color: u16) {
        self.marks.push(Mark::Disc(center, radius, color));
    }
}

struct Bench {
    dispatcher: TouchDispatcher,
    sensor: PanelSensor,
    delay: NoDelay,
    ui: UiModel,
    history: DrawingHistory<64>,
    link: LinkSpy,
    canvas: CanvasSpy,
}

impl Bench {
    fn new() -> Self {
        // Identity calibration: raw units equal screen pixels.
        let config = DispatchConfig {
            calibration: TouchCalibration {
                raw_min_x: 0,
                raw_max_x: 320,
                raw_min_y: 0,
                raw_max_y: 240,
                screen_width: 320,
                screen_height: 240,
            },
            ..DispatchConfig::default()
        };
        Self {
            dispatcher: TouchDispatcher::new(config),
            sensor: PanelSensor {
                contact: None,
                pressure: 900,
            },
            delay: NoDelay,
            ui: UiModel::default(),
            history: DrawingHistory::new(),
            link: LinkSpy::default(),
            canvas: CanvasSpy::default(),
        }
    }

    fn touch(&mut self, point: ScreenPoint, now_ms: u32) -> CycleOutcome {
        self.sensor.contact = Some(point);
        self.cycle(now_ms)
    }

    fn release(&mut self, now_ms: u32) -> CycleOutcome {
        self.sensor.contact = None;
        self.cycle(now_ms)
    }

    fn cycle(&mut self, now_ms: u32) -> CycleOutcome {
        let mut ctx = TouchContext {
            sensor: &mut self.sensor,
            delay: &mut self.delay,
            ui: &mut self.ui,
            history: &mut self.history,
            replication: &mut self.link,
            raster: &mut self.canvas,
        };
        self.dispatcher.handle_local_touch(now_ms, &mut ctx)
    }
}

#[test]
fn popup_dismissal_takes_priority_over_reset_button() {
    let mut bench = Bench::new();
    assert_eq!(
        bench.touch(COFFEE, 0),
        CycleOutcome::Control(TouchAction::ShowPopup(PopupKind::Coffee))
    );
    assert_eq!(bench.ui.visible_popup(), Some(PopupKind::Coffee));

    assert_eq!(
        bench.touch(RESET, 500),
        CycleOutcome::PopupDismissed(PopupKind::Coffee)
    );
    assert_eq!(bench.ui.visible_popup(), None);
    assert_eq!(bench.dispatcher.reset_press_count(), 0);
    assert!(bench.link.sent.is_empty());
    assert_eq!(bench.ui.screen_clears(), 0);
}

#[test]
fn coffee_button_needs_debug_toggle_visible() {
    let mut bench = Bench::new();
    bench.ui.set_debug_toggle_visible(false);
    assert!(matches!(bench.touch(COFFEE, 0), CycleOutcome::Stroke(_)));
    assert_eq!(bench.ui.visible_popup(), None);
}

#[test]
fn debug_panel_toggles_but_info_button_opens_popup() {
    let mut bench = Bench::new();
    assert_eq!(
        bench.touch(DEBUG_TOGGLE, 0),
        CycleOutcome::Control(TouchAction::ToggleDebugInfo)
    );
    assert!(bench.ui.debug_info_visible());

    assert_eq!(
        bench.touch(INFO, 100),
        CycleOutcome::Control(TouchAction::ShowPopup(PopupKind::ProjectInfo))
    );
    assert!(bench.ui.debug_info_visible());
    bench.touch(INFO, 200);
    assert_eq!(bench.ui.visible_popup(), None);

    assert_eq!(
        bench.touch(DEBUG_PANEL, 300),
        CycleOutcome::Control(TouchAction::ToggleDebugInfo)
    );
    assert!(!bench.ui.debug_info_visible());
}

#[test]
fn reset_clears_everything_and_broadcasts_zero_offset() {
    let mut bench = Bench::new();
    bench.link.state = SyncState {
        time_offset_ms: 1_500,
        is_time_reference: true,
        requesting_all_data: true,
        initial_sync_processed: true,
    };
    bench.touch(CANVAS, 0);
    bench.touch(RED_SWATCH, 50);
    assert_eq!(bench.history.len(), 1);

    assert_eq!(
        bench.touch(RESET, 2_000),
        CycleOutcome::Control(TouchAction::ResetCanvas)
    );
    assert!(bench.history.is_empty());
    assert_eq!(bench.ui.screen_clears(), 1);
    assert_eq!(bench.link.state, SyncState::default());

    let reset = bench.link.sent.last().copied().unwrap();
    assert_eq!(reset.kind, EnvelopeKind::ResetCanvas);
    assert_eq!(reset.sender_offset_ms, 0);
    assert_eq!(reset.sender_uptime_ms, 2_000);
    assert_eq!(reset.payload.color, COLOR_RED);
    assert_eq!((reset.payload.x, reset.payload.y), (0, 0));
    assert!(reset.payload.is_reset);
}

#[test]
fn ten_rapid_resets_fire_easter_egg_and_wrap() {
    let mut bench = Bench::new();
    for press in 0..9u32 {
        bench.touch(RESET, press * 500);
    }
    assert_eq!(bench.dispatcher.reset_press_count(), 9);
    bench.touch(RESET, 9 * 500);
    assert_eq!(bench.dispatcher.reset_press_count(), 0);

    let counters = bench.dispatcher.counters();
    assert_eq!(counters.easter_eggs, 1);
    // Every press still reset the canvas.
    assert_eq!(counters.resets, 10);
    assert_eq!(bench.link.sent.len(), 10);
}

#[test]
fn slow_resets_keep_press_count_at_one() {
    let mut bench = Bench::new();
    for press in 0..12u32 {
        bench.touch(RESET, press * 1_500);
        assert_eq!(bench.dispatcher.reset_press_count(), 1);
    }
    assert_eq!(bench.dispatcher.counters().easter_eggs, 0);
}

#[test]
fn pen_strokes_join_within_interval() {
    let mut bench = Bench::new();
    let next = ScreenPoint::new(210, 155);
    let far = ScreenPoint::new(230, 160);

    bench.touch(CANVAS, 1_000);
    bench.touch(next, 1_050);
    bench.touch(far, 1_300);

    assert_eq!(
        bench.canvas.marks,
        [
            Mark::Pixel(CANVAS, COLOR_WHITE),
            Mark::Line(CANVAS, next, COLOR_WHITE),
            Mark::Pixel(far, COLOR_WHITE),
        ]
    );
    assert_eq!(bench.history.len(), 3);
    assert_eq!(bench.link.sent.len(), 3);
}

#[test]
fn release_between_touches_starts_new_stroke() {
    let mut bench = Bench::new();
    let next = ScreenPoint::new(205, 150);
    bench.touch(CANVAS, 0);
    assert_eq!(bench.release(10), CycleOutcome::Idle);
    assert!(!bench.dispatcher.last_touch().has_contact);
    assert_eq!(
        bench.touch(next, 20),
        CycleOutcome::Stroke(RenderOp::Point(next))
    );
}

#[test]
fn fly_burst_changes_nothing() {
    let mut bench = Bench::new();
    let next = ScreenPoint::new(205, 150);
    bench.touch(CANVAS, 0);

    bench.sensor.pressure = 150;
    assert_eq!(bench.touch(next, 10), CycleOutcome::Fly);
    assert_eq!(bench.history.len(), 1);
    assert_eq!(bench.canvas.marks.len(), 1);

    bench.sensor.pressure = 900;
    assert_eq!(
        bench.touch(next, 20),
        CycleOutcome::Stroke(RenderOp::Line {
            from: CANVAS,
            to: next
        })
    );
    assert_eq!(bench.dispatcher.counters().fly_bursts, 1);
}

#[test]
fn control_touch_breaks_pen_stroke() {
    let mut bench = Bench::new();
    bench.touch(CANVAS, 0);
    bench.touch(SCREENSHOT, 20);
    assert_eq!(bench.ui.screenshot_requests(), 1);
    assert_eq!(
        bench.touch(CANVAS, 40),
        CycleOutcome::Stroke(RenderOp::Point(CANVAS))
    );
}

#[test]
fn draw_record_matches_broadcast_payload() {
    let mut bench = Bench::new();
    bench.link.state.time_offset_ms = -700;
    bench.touch(CANVAS, 4_321);

    let record = *bench.history.last().unwrap();
    assert_eq!(
        record,
        TouchRecord {
            x: 200,
            y: 150,
            timestamp_ms: 4_321,
            color: COLOR_WHITE,
            is_reset: false,
        }
    );
    let envelope = bench.link.sent[0];
    assert_eq!(envelope.kind, EnvelopeKind::DrawPoint);
    assert_eq!(envelope.sender_offset_ms, -700);
    assert_eq!(envelope.payload, record);
}

#[test]
fn eraser_button_is_debounced() {
    let mut bench = Bench::new();
    assert_eq!(
        bench.touch(ERASER, 1_000),
        CycleOutcome::Control(TouchAction::ToggleEraser)
    );
    assert!(bench.ui.eraser_enabled());
    assert!(bench.ui.eraser_slider_visible());

    // Bounced press is still consumed by the button.
    assert_eq!(
        bench.touch(ERASER, 1_100),
        CycleOutcome::Control(TouchAction::ToggleEraser)
    );
    assert!(bench.ui.eraser_enabled());
    assert!(bench.canvas.marks.is_empty());
    assert_eq!(bench.dispatcher.counters().debounced_presses, 1);

    bench.touch(ERASER, 1_400);
    assert!(!bench.ui.eraser_enabled());
    assert!(!bench.ui.eraser_slider_visible());
}

#[test]
fn swatch_selection_turns_eraser_off() {
    let mut bench = Bench::new();
    bench.touch(ERASER, 0);
    assert!(bench.ui.eraser_enabled());

    assert_eq!(
        bench.touch(RED_SWATCH, 500),
        CycleOutcome::Control(TouchAction::SelectColor(COLOR_RED))
    );
    assert!(!bench.ui.eraser_enabled());
    assert_eq!(bench.ui.current_color(), COLOR_RED);

    // The slider stays up until the next canvas touch, which now draws red.
    assert_eq!(
        bench.touch(CANVAS, 600),
        CycleOutcome::Stroke(RenderOp::Point(CANVAS))
    );
    assert_eq!(bench.canvas.marks, [Mark::Pixel(CANVAS, COLOR_RED)]);
    assert_eq!(bench.history.last().map(|r| r.color), Some(COLOR_RED));
}

#[test]
fn canvas_touch_closes_slider_then_erases() {
    let mut bench = Bench::new();
    bench.touch(ERASER, 0);
    assert_eq!(bench.touch(CANVAS, 500), CycleOutcome::Erased);
    assert!(!bench.ui.eraser_slider_visible());
    assert!(bench.ui.eraser_enabled());
    assert_eq!(
        bench.canvas.marks,
        [Mark::Disc(CANVAS, bench.ui.eraser_radius(), ERASE_COLOR)]
    );
    let record = *bench.history.last().unwrap();
    assert_eq!(record.color, ERASE_COLOR);
    assert_eq!(bench.link.sent.len(), 1);
}

#[test]
fn slider_sets_radius_used_by_next_erase() {
    let mut bench = Bench::new();
    bench.touch(ERASER, 0);
    assert_eq!(
        bench.touch(SLIDER_END, 100),
        CycleOutcome::Control(TouchAction::EraserSlider(SLIDER_END))
    );
    assert_eq!(bench.ui.eraser_radius(), 30);
    bench.touch(CANVAS, 200);
    assert_eq!(bench.canvas.marks, [Mark::Disc(CANVAS, 30, ERASE_COLOR)]);
}

#[test]
fn erase_near_controls_keeps_pixels_but_still_replicates() {
    let mut bench = Bench::new();
    bench.touch(ERASER, 0);
    // Eight pixels right of the left control cluster; default radius is 10.
    let near_controls = ScreenPoint::new(150, 60);
    assert_eq!(
        bench.touch(near_controls, 500),
        CycleOutcome::EraseSuppressed
    );
    assert!(bench.canvas.marks.is_empty());

    let expected = TouchRecord {
        x: 150,
        y: 60,
        timestamp_ms: 500,
        color: ERASE_COLOR,
        is_reset: false,
    };
    assert_eq!(bench.history.len(), 1);
    assert_eq!(bench.history.last(), Some(&expected));
    assert_eq!(bench.link.sent.len(), 1);
    assert_eq!(bench.link.sent[0].kind, EnvelopeKind::DrawPoint);
    assert_eq!(bench.link.sent[0].payload, expected);
    // The slider still closes on that touch.
    assert!(!bench.ui.eraser_slider_visible());
    assert_eq!(bench.dispatcher.counters().suppressed_erasures, 1);
}

#[test]
fn pen_is_not_guarded_near_controls() {
    let mut bench = Bench::new();
    let near_controls = ScreenPoint::new(150, 60);
    assert_eq!(
        bench.touch(near_controls, 0),
        CycleOutcome::Stroke(RenderOp::Point(near_controls))
    );
}

#[test]
fn erasing_does_not_connect_later_pen_stroke() {
    let mut bench = Bench::new();
    bench.touch(CANVAS, 0);
    bench.touch(ERASER, 10);
    bench.touch(CANVAS, 20);
    bench.touch(ERASER, 400);
    assert!(!bench.ui.eraser_enabled());
    let next = ScreenPoint::new(205, 150);
    assert_eq!(
        bench.touch(next, 420),
        CycleOutcome::Stroke(RenderOp::Point(next))
    );
}

#[test]
fn peer_info_screen_only_answers_back_button() {
    let mut bench = Bench::new();
    bench.touch(PEER_INFO, 0);
    assert_eq!(bench.ui.mode(), UiMode::PeerInfo);

    assert_eq!(bench.touch(CANVAS, 100), CycleOutcome::Ignored);
    assert!(bench.canvas.marks.is_empty());

    assert_eq!(
        bench.touch(PEER_INFO_BACK, 200),
        CycleOutcome::Control(TouchAction::HidePeerInfo)
    );
    assert_eq!(bench.ui.mode(), UiMode::Main);
}

#[test]
fn custom_color_overlay_gets_next_touch() {
    let mut bench = Bench::new();
    bench.touch(ERASER, 0);
    bench.touch(CUSTOM_COLOR, 500);
    assert!(bench.ui.custom_color_active());
    assert!(!bench.ui.brush_indicator_visible());

    assert_eq!(
        bench.touch(PICKER_RED, 600),
        CycleOutcome::Control(TouchAction::ColorPickerTouch(PICKER_RED))
    );
    assert!(!bench.ui.custom_color_active());
    assert_eq!(bench.ui.current_color(), COLOR_RED);
    assert!(!bench.ui.eraser_enabled());
}

#[test]
fn full_screen_picker_forwards_and_returns_to_main() {
    let mut bench = Bench::new();
    assert!(bench.ui.open_color_picker_screen());
    assert_eq!(bench.ui.mode(), UiMode::ColorPicker);

    assert_eq!(
        bench.touch(PICKER_GREEN, 0),
        CycleOutcome::Control(TouchAction::ColorPickerTouch(PICKER_GREEN))
    );
    assert_eq!(bench.ui.current_color(), COLOR_GREEN);
    assert_eq!(bench.ui.mode(), UiMode::Main);
}

#[test]
fn idle_cycles_are_counted_but_do_nothing() {
    let mut bench = Bench::new();
    for now in 0..5 {
        assert_eq!(bench.release(now * 5), CycleOutcome::Idle);
    }
    let counters = bench.dispatcher.counters();
    assert_eq!(counters.cycles, 5);
    assert_eq!(counters.strokes, 0);
    assert!(bench.link.sent.is_empty());
}
