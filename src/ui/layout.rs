use super::types::Region;
use crate::config::{
    BUTTON_AREA_RIGHT_X_MIN, BUTTON_AREA_RIGHT_Y_MAX, BUTTON_AREA_RIGHT_Y_MIN,
    BUTTON_AREA_X_MAX, BUTTON_AREA_Y_MAX, COFFEE_BUTTON_X, COLOR_BUTTON_HEIGHT,
    COLOR_BUTTON_PITCH, COLOR_BUTTON_WIDTH, COLOR_BUTTON_X, COLOR_BUTTON_Y, COLOR_SWATCHES,
    CUSTOM_COLOR_BUTTON_Y, CUSTOM_PALETTE, DEBUG_PANEL_X_MAX, DEBUG_PANEL_X_MIN,
    DEBUG_PANEL_Y_MIN, DEBUG_TOGGLE_BUTTON_X, DEBUG_TOGGLE_BUTTON_Y, ERASER_BUTTON_Y,
    ERASER_RADIUS_MAX, ERASER_RADIUS_MIN, ERASER_SLIDER_HANDLE_W, ERASER_SLIDER_HEIGHT,
    ERASER_SLIDER_WIDTH, ERASER_SLIDER_X, ERASER_SLIDER_Y, INFO_BUTTON_X, INFO_BUTTON_Y,
    LEFT_BUTTON_H, LEFT_BUTTON_W, LEFT_BUTTON_X, PEER_INFO_BACK_BUTTON_Y, PEER_INFO_BUTTON_H,
    PEER_INFO_BUTTON_Y, PICKER_CELL_SIZE, PICKER_X, PICKER_Y, RESET_BUTTON_Y,
    SCREENSHOT_BUTTON_Y, SCREEN_HEIGHT, SCREEN_WIDTH, SMALL_BUTTON_SIZE,
};
use crate::touch::ScreenPoint;

/// Axis-aligned rectangle with inclusive bounds on all four edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Rect {
    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub const fn with_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width - 1, y + height - 1)
    }

    pub const fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    /// Squared Euclidean distance from `point` to the nearest point of the
    /// rectangle; zero inside and on the boundary.
    pub fn distance_sq(&self, point: ScreenPoint) -> i64 {
        let dx = axis_gap(point.x, self.x_min, self.x_max);
        let dy = axis_gap(point.y, self.y_min, self.y_max);
        dx * dx + dy * dy
    }
}

fn axis_gap(value: i32, min: i32, max: i32) -> i64 {
    if value < min {
        i64::from(min) - i64::from(value)
    } else if value > max {
        i64::from(value) - i64::from(max)
    } else {
        0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSwatch {
    pub rect: Rect,
    pub color: u16,
}

/// Screen geometry of every control the router knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub coffee_button: Rect,
    pub info_button: Rect,
    pub debug_panel: Rect,
    pub debug_toggle_button: Rect,
    pub reset_button: Rect,
    pub eraser_button: Rect,
    pub eraser_slider: Rect,
    pub peer_info_button: Rect,
    pub custom_color_button: Rect,
    pub screenshot_button: Rect,
    pub peer_info_back_button: Rect,
    pub swatches: [ColorSwatch; COLOR_SWATCHES.len()],
    pub picker: [ColorSwatch; CUSTOM_PALETTE.len()],
    /// Control clusters the eraser fill must not reach.
    pub protected: [Rect; 2],
    pub eraser_radius_min: i32,
    pub eraser_radius_max: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout {
    pub const fn new() -> Self {
        Self {
            coffee_button: Rect::with_size(
                COFFEE_BUTTON_X,
                DEBUG_TOGGLE_BUTTON_Y,
                SMALL_BUTTON_SIZE,
                SMALL_BUTTON_SIZE,
            ),
            info_button: Rect::with_size(
                INFO_BUTTON_X,
                INFO_BUTTON_Y,
                SMALL_BUTTON_SIZE,
                SMALL_BUTTON_SIZE,
            ),
            debug_panel: Rect::new(
                DEBUG_PANEL_X_MIN,
                DEBUG_PANEL_Y_MIN,
                DEBUG_PANEL_X_MAX,
                SCREEN_HEIGHT,
            ),
            debug_toggle_button: Rect::with_size(
                DEBUG_TOGGLE_BUTTON_X,
                DEBUG_TOGGLE_BUTTON_Y,
                SMALL_BUTTON_SIZE,
                SMALL_BUTTON_SIZE,
            ),
            reset_button: Rect::with_size(
                LEFT_BUTTON_X,
                RESET_BUTTON_Y,
                LEFT_BUTTON_W,
                LEFT_BUTTON_H,
            ),
            eraser_button: Rect::with_size(
                LEFT_BUTTON_X,
                ERASER_BUTTON_Y,
                LEFT_BUTTON_W,
                LEFT_BUTTON_H,
            ),
            eraser_slider: Rect::with_size(
                ERASER_SLIDER_X,
                ERASER_SLIDER_Y,
                ERASER_SLIDER_WIDTH + ERASER_SLIDER_HANDLE_W,
                ERASER_SLIDER_HEIGHT,
            ),
            peer_info_button: Rect::with_size(
                LEFT_BUTTON_X,
                PEER_INFO_BUTTON_Y,
                LEFT_BUTTON_W,
                PEER_INFO_BUTTON_H,
            ),
            custom_color_button: Rect::with_size(
                COLOR_BUTTON_X,
                CUSTOM_COLOR_BUTTON_Y,
                COLOR_BUTTON_WIDTH,
                COLOR_BUTTON_HEIGHT,
            ),
            screenshot_button: Rect::with_size(
                LEFT_BUTTON_X,
                SCREENSHOT_BUTTON_Y,
                LEFT_BUTTON_W,
                LEFT_BUTTON_H,
            ),
            peer_info_back_button: Rect::with_size(
                COLOR_BUTTON_X,
                PEER_INFO_BACK_BUTTON_Y,
                COLOR_BUTTON_WIDTH,
                COLOR_BUTTON_HEIGHT,
            ),
            swatches: swatch_column(),
            picker: picker_strip(),
            protected: [
                Rect::new(0, 0, BUTTON_AREA_X_MAX, BUTTON_AREA_Y_MAX),
                Rect::new(
                    BUTTON_AREA_RIGHT_X_MIN,
                    BUTTON_AREA_RIGHT_Y_MIN,
                    SCREEN_WIDTH,
                    BUTTON_AREA_RIGHT_Y_MAX,
                ),
            ],
            eraser_radius_min: ERASER_RADIUS_MIN,
            eraser_radius_max: ERASER_RADIUS_MAX,
        }
    }

    pub const fn region(&self, region: Region) -> Rect {
        match region {
            Region::CoffeeButton => self.coffee_button,
            Region::InfoButton => self.info_button,
            Region::DebugPanel => self.debug_panel,
            Region::DebugToggleButton => self.debug_toggle_button,
            Region::ResetButton => self.reset_button,
            Region::EraserButton => self.eraser_button,
            Region::EraserSlider => self.eraser_slider,
            Region::PeerInfoButton => self.peer_info_button,
            Region::CustomColorButton => self.custom_color_button,
            Region::ScreenshotButton => self.screenshot_button,
            Region::PeerInfoBackButton => self.peer_info_back_button,
        }
    }

    pub fn swatch_at(&self, point: ScreenPoint) -> Option<u16> {
        self.swatches
            .iter()
            .find(|swatch| swatch.rect.contains(point))
            .map(|swatch| swatch.color)
    }

    pub fn picker_color_at(&self, point: ScreenPoint) -> Option<u16> {
        self.picker
            .iter()
            .find(|swatch| swatch.rect.contains(point))
            .map(|swatch| swatch.color)
    }

    /// Radius selected by a touch at `x` along the slider track.
    pub fn slider_radius_at(&self, x: i32) -> i32 {
        let track = self.eraser_slider;
        let span = (track.x_max - track.x_min).max(1);
        let offset = (x - track.x_min).clamp(0, span);
        let range = self.eraser_radius_max - self.eraser_radius_min;
        self.eraser_radius_min + offset * range / span
    }
}

const fn swatch_column() -> [ColorSwatch; COLOR_SWATCHES.len()] {
    let mut swatches = [ColorSwatch {
        rect: Rect::new(0, 0, 0, 0),
        color: 0,
    }; COLOR_SWATCHES.len()];
    let mut idx = 0;
    while idx < COLOR_SWATCHES.len() {
        swatches[idx] = ColorSwatch {
            rect: Rect::with_size(
                COLOR_BUTTON_X,
                COLOR_BUTTON_Y + idx as i32 * COLOR_BUTTON_PITCH,
                COLOR_BUTTON_WIDTH,
                COLOR_BUTTON_HEIGHT,
            ),
            color: COLOR_SWATCHES[idx],
        };
        idx += 1;
    }
    swatches
}

const fn picker_strip() -> [ColorSwatch; CUSTOM_PALETTE.len()] {
    let mut cells = [ColorSwatch {
        rect: Rect::new(0, 0, 0, 0),
        color: 0,
    }; CUSTOM_PALETTE.len()];
    let mut idx = 0;
    while idx < CUSTOM_PALETTE.len() {
        cells[idx] = ColorSwatch {
            rect: Rect::with_size(
                PICKER_X + idx as i32 * PICKER_CELL_SIZE,
                PICKER_Y,
                PICKER_CELL_SIZE,
                PICKER_CELL_SIZE,
            ),
            color: CUSTOM_PALETTE[idx],
        };
        idx += 1;
    }
    cells
}
