//! One pass of the local touch pipeline.
//!
//! Each cycle reads at most one filtered point, routes it to exactly one
//! action and applies that action through the collaborator traits. No
//! cycle blocks on anything but the sensor's inter-sample delay.

pub mod eraser;
pub mod router;
pub mod stroke;
pub mod timing;

#[cfg(test)]
mod tests;

use embedded_hal::delay::DelayNs;

pub use eraser::EraserGuard;
pub use router::{RegionRouter, TouchAction};
pub use stroke::{LastTouchState, RenderOp, StrokeComposer};
pub use timing::{Debounce, EggPress, ResetEasterEgg};

use crate::config::{
    ERASER_BUTTON_DEBOUNCE_MS, RESET_EGG_THRESHOLD, RESET_EGG_WINDOW_MS,
    TOUCH_STROKE_INTERVAL_MS,
};
use crate::history::HistoryLog;
use crate::raster::Raster;
use crate::sync::{Replication, SyncEmitter, TouchRecord};
use crate::touch::{FilterConfig, SampleFilter, ScreenPoint, TouchCalibration, TouchSensor};
use crate::ui::layout::{Layout, Rect};
use crate::ui::{PopupKind, Repaint, UiState};

/// A canvas mark about to be painted, logged and replicated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawAction {
    pub point: ScreenPoint,
    pub color: u16,
    pub is_erase: bool,
}

impl DrawAction {
    pub fn record(&self, timestamp_ms: u32) -> TouchRecord {
        TouchRecord {
            x: saturate_i16(self.point.x),
            y: saturate_i16(self.point.y),
            timestamp_ms,
            color: self.color,
            is_reset: false,
        }
    }
}

fn saturate_i16(value: i32) -> i16 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

#[derive(Clone, Copy, Debug)]
pub struct DispatchConfig {
    pub filter: FilterConfig,
    pub calibration: TouchCalibration,
    pub protected: [Rect; 2],
    pub stroke_interval_ms: u32,
    pub eraser_debounce_ms: u32,
    pub reset_egg_window_ms: u32,
    pub reset_egg_threshold: u8,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::for_layout(&Layout::new())
    }
}

impl DispatchConfig {
    pub fn for_layout(layout: &Layout) -> Self {
        Self {
            filter: FilterConfig::default(),
            calibration: TouchCalibration::default(),
            protected: layout.protected,
            stroke_interval_ms: TOUCH_STROKE_INTERVAL_MS,
            eraser_debounce_ms: ERASER_BUTTON_DEBOUNCE_MS,
            reset_egg_window_ms: RESET_EGG_WINDOW_MS,
            reset_egg_threshold: RESET_EGG_THRESHOLD,
        }
    }
}

/// Everything one cycle touches besides the dispatcher's own state.
pub struct TouchContext<'a, S, D, U, H, P, R> {
    pub sensor: &'a mut S,
    pub delay: &'a mut D,
    pub ui: &'a mut U,
    pub history: &'a mut H,
    pub replication: &'a mut P,
    pub raster: &'a mut R,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Sensor reported nothing pending.
    Idle,
    /// Burst rejected; nothing else happened.
    Fly,
    PopupDismissed(PopupKind),
    /// A button, slider or overlay consumed the touch.
    Control(TouchAction),
    Stroke(RenderOp),
    Erased,
    /// Eraser disc would have reached a control column.
    EraseSuppressed,
    Ignored,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchCounters {
    pub cycles: u32,
    pub fly_bursts: u32,
    pub popups_dismissed: u32,
    pub control_actions: u32,
    pub debounced_presses: u32,
    pub strokes: u32,
    pub erasures: u32,
    pub suppressed_erasures: u32,
    pub resets: u32,
    pub easter_eggs: u32,
}

pub struct TouchDispatcher {
    filter: SampleFilter,
    calibration: TouchCalibration,
    guard: EraserGuard,
    stroke: StrokeComposer,
    reset_egg: ResetEasterEgg,
    eraser_debounce: Debounce,
    counters: TouchCounters,
}

impl Default for TouchDispatcher {
    fn default() -> Self {
        Self::new(DispatchConfig::default())
    }
}

impl TouchDispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            filter: SampleFilter::new(config.filter),
            calibration: config.calibration,
            guard: EraserGuard::new(config.protected),
            stroke: StrokeComposer::new(config.stroke_interval_ms),
            reset_egg: ResetEasterEgg::new(
                config.reset_egg_window_ms,
                config.reset_egg_threshold,
            ),
            eraser_debounce: Debounce::new(config.eraser_debounce_ms),
            counters: TouchCounters::default(),
        }
    }

    pub fn counters(&self) -> TouchCounters {
        self.counters
    }

    pub fn last_touch(&self) -> LastTouchState {
        self.stroke.state()
    }

    pub fn reset_press_count(&self) -> u8 {
        self.reset_egg.count()
    }

    /// Runs one contact cycle at local uptime `now_ms`.
    pub fn handle_local_touch<S, D, U, H, P, R>(
        &mut self,
        now_ms: u32,
        ctx: &mut TouchContext<'_, S, D, U, H, P, R>,
    ) -> CycleOutcome
    where
        S: TouchSensor,
        D: DelayNs,
        U: UiState,
        H: HistoryLog,
        P: Replication,
        R: Raster,
    {
        self.counters.cycles = self.counters.cycles.wrapping_add(1);

        if !ctx.sensor.has_pending_touch() {
            self.stroke.lift();
            return CycleOutcome::Idle;
        }

        let filtered = self.filter.filter(&mut *ctx.sensor, &mut *ctx.delay);
        if filtered.is_fly() {
            bump(&mut self.counters.fly_bursts);
            return CycleOutcome::Fly;
        }

        let point = self.calibration.to_screen(filtered);
        let action = RegionRouter::route(&*ctx.ui, point);
        log::trace!(
            "touch: raw=({}, {}) screen=({}, {}) action={:?}",
            filtered.x,
            filtered.y,
            point.x,
            point.y,
            action
        );

        match action {
            TouchAction::Draw {
                action,
                dismiss_slider,
            } => self.apply_draw(now_ms, action, dismiss_slider, ctx),
            TouchAction::DismissPopup(kind) => {
                self.stroke.lift();
                ctx.ui.hide_popup(kind);
                bump(&mut self.counters.popups_dismissed);
                CycleOutcome::PopupDismissed(kind)
            }
            TouchAction::Ignore => {
                self.stroke.lift();
                CycleOutcome::Ignored
            }
            control => {
                self.stroke.lift();
                self.apply_control(now_ms, control, ctx);
                bump(&mut self.counters.control_actions);
                CycleOutcome::Control(control)
            }
        }
    }

    fn apply_control<S, D, U, H, P, R>(
        &mut self,
        now_ms: u32,
        action: TouchAction,
        ctx: &mut TouchContext<'_, S, D, U, H, P, R>,
    ) where
        U: UiState,
        H: HistoryLog,
        P: Replication,
    {
        match action {
            TouchAction::ShowPopup(kind) => ctx.ui.show_popup(kind),
            TouchAction::ToggleDebugInfo => ctx.ui.toggle_debug_info(),
            TouchAction::ResetCanvas => self.reset_canvas(now_ms, ctx),
            TouchAction::SelectColor(color) => {
                ctx.ui.update_current_color(color);
                ctx.ui.request_repaint(Repaint::BrushIndicator);
                ctx.ui.set_eraser_enabled(false);
                ctx.ui.request_repaint(Repaint::EraserButton);
            }
            TouchAction::ToggleEraser => self.toggle_eraser(now_ms, &mut *ctx.ui),
            TouchAction::EraserSlider(point) => ctx.ui.handle_eraser_slider_touch(point),
            TouchAction::ShowPeerInfo => ctx.ui.show_peer_info_screen(),
            TouchAction::HidePeerInfo => ctx.ui.hide_peer_info_screen(),
            TouchAction::EnterCustomColor => ctx.ui.enter_custom_color_mode(),
            TouchAction::SaveScreenshot => ctx.ui.save_screenshot(),
            TouchAction::ColorPickerTouch(point) => ctx.ui.handle_color_picker_touch(point),
            TouchAction::DismissPopup(_) | TouchAction::Draw { .. } | TouchAction::Ignore => {}
        }
    }

    fn toggle_eraser<U: UiState>(&mut self, now_ms: u32, ui: &mut U) {
        if !self.eraser_debounce.accept(now_ms) {
            bump(&mut self.counters.debounced_presses);
            log::trace!("touch: eraser button bounce ignored at {}ms", now_ms);
            return;
        }
        let enabled = !ui.eraser_enabled();
        ui.set_eraser_enabled(enabled);
        ui.set_eraser_slider_visible(enabled);
        if enabled {
            ui.request_repaint(Repaint::EraserButton);
            ui.request_repaint(Repaint::EraserSlider);
        } else {
            ui.request_repaint(Repaint::MainScreen);
        }
        log::debug!("touch: eraser {}", if enabled { "on" } else { "off" });
    }

    fn reset_canvas<S, D, U, H, P, R>(
        &mut self,
        now_ms: u32,
        ctx: &mut TouchContext<'_, S, D, U, H, P, R>,
    ) where
        U: UiState,
        H: HistoryLog,
        P: Replication,
    {
        let press = self.reset_egg.press(now_ms);
        if press.triggered {
            bump(&mut self.counters.easter_eggs);
            log::info!("reset: {} rapid presses, easter egg", press.streak);
        }

        ctx.history.clear();
        ctx.ui.clear_screen();
        ctx.replication.reset_sync_state();

        // Built after the sync reset so the peer sees a zero offset.
        let envelope =
            SyncEmitter::reset_envelope(&*ctx.replication, ctx.ui.current_color(), now_ms);
        ctx.replication.broadcast(envelope);
        bump(&mut self.counters.resets);
        log::debug!("reset: canvas cleared, peer notified (streak={})", press.streak);
    }

    fn apply_draw<S, D, U, H, P, R>(
        &mut self,
        now_ms: u32,
        action: DrawAction,
        dismiss_slider: bool,
        ctx: &mut TouchContext<'_, S, D, U, H, P, R>,
    ) -> CycleOutcome
    where
        U: UiState,
        H: HistoryLog,
        P: Replication,
        R: Raster,
    {
        if dismiss_slider {
            ctx.ui.set_eraser_slider_visible(false);
            ctx.ui.request_repaint(Repaint::MainScreen);
        }

        let outcome = if action.is_erase {
            // Erasing never extends a pen stroke.
            self.stroke.lift();
            let radius = ctx.ui.eraser_radius();
            if self.guard.would_hit_protected(action.point, radius) {
                // Pixels stay; the erase is still recorded and replicated.
                bump(&mut self.counters.suppressed_erasures);
                log::trace!(
                    "touch: erase at ({}, {}) r={} suppressed near controls",
                    action.point.x,
                    action.point.y,
                    radius
                );
                CycleOutcome::EraseSuppressed
            } else {
                ctx.raster.fill_circle(action.point, radius, action.color);
                bump(&mut self.counters.erasures);
                CycleOutcome::Erased
            }
        } else {
            let op = self.stroke.compose(action.point, now_ms);
            op.render(&mut *ctx.raster, action.color);
            bump(&mut self.counters.strokes);
            CycleOutcome::Stroke(op)
        };

        ctx.history.append(action.record(now_ms));
        let envelope = SyncEmitter::draw_envelope(&*ctx.replication, &action, now_ms);
        ctx.replication.broadcast(envelope);
        outcome
    }
}

fn bump(counter: &mut u32) {
    *counter = counter.saturating_add(1);
}
