// Panel: 320x240 TFT in landscape with an XPT2046 resistive controller.
pub const SCREEN_WIDTH: i32 = 320;
pub const SCREEN_HEIGHT: i32 = 240;

// Raw controller extents measured on the reference panel after rotation.
pub const TOUCH_MIN_X: i32 = 200;
pub const TOUCH_MAX_X: i32 = 3700;
pub const TOUCH_MIN_Y: i32 = 240;
pub const TOUCH_MAX_Y: i32 = 3800;

// A sample at or below this pressure is treated as lift-off mid-burst.
pub const TOUCH_PRESSURE_THRESHOLD: u16 = 200;
pub const TOUCH_BURST_MAX_SAMPLES: usize = 10;
pub const TOUCH_BURST_MIN_SAMPLES: usize = 4;
pub const TOUCH_SAMPLE_DELAY_MS: u32 = 2;

pub const TOUCH_TICK_MS: u64 = 5;
// Consecutive contacts further apart than this start a new stroke.
pub const TOUCH_STROKE_INTERVAL_MS: u32 = 100;

pub const ERASER_BUTTON_DEBOUNCE_MS: u32 = 300;
pub const ERASER_RADIUS_DEFAULT: i32 = 10;
pub const ERASER_RADIUS_MIN: i32 = 2;
pub const ERASER_RADIUS_MAX: i32 = 30;

pub const RESET_EGG_WINDOW_MS: u32 = 1_000;
pub const RESET_EGG_THRESHOLD: u8 = 10;

pub const COLOR_BLACK: u16 = 0x0000;
pub const COLOR_WHITE: u16 = 0xFFFF;
pub const COLOR_RED: u16 = 0xF800;
pub const COLOR_GREEN: u16 = 0x07E0;
pub const COLOR_BLUE: u16 = 0x001F;
pub const COLOR_YELLOW: u16 = 0xFFE0;
pub const COLOR_MAGENTA: u16 = 0xF81F;
pub const COLOR_CYAN: u16 = 0x07FF;
pub const COLOR_ORANGE: u16 = 0xFD20;

/// Canvas background; erasing paints with it.
pub const ERASE_COLOR: u16 = COLOR_BLACK;
pub const DEFAULT_BRUSH_COLOR: u16 = COLOR_WHITE;

pub const COLOR_SWATCHES: [u16; 6] = [
    COLOR_WHITE,
    COLOR_RED,
    COLOR_GREEN,
    COLOR_BLUE,
    COLOR_YELLOW,
    COLOR_MAGENTA,
];
pub const CUSTOM_PALETTE: [u16; 8] = [
    COLOR_WHITE,
    COLOR_RED,
    COLOR_ORANGE,
    COLOR_YELLOW,
    COLOR_GREEN,
    COLOR_CYAN,
    COLOR_BLUE,
    COLOR_MAGENTA,
];

// Left control column.
pub const LEFT_BUTTON_X: i32 = 4;
pub const LEFT_BUTTON_W: i32 = 36;
pub const LEFT_BUTTON_H: i32 = 24;
pub const RESET_BUTTON_Y: i32 = 4;
pub const ERASER_BUTTON_Y: i32 = 32;
pub const SCREENSHOT_BUTTON_Y: i32 = 60;
pub const PEER_INFO_BUTTON_Y: i32 = 88;
pub const PEER_INFO_BUTTON_H: i32 = LEFT_BUTTON_H;
pub const ERASER_SLIDER_X: i32 = 44;
pub const ERASER_SLIDER_Y: i32 = 36;
pub const ERASER_SLIDER_WIDTH: i32 = 80;
pub const ERASER_SLIDER_HEIGHT: i32 = 16;
pub const ERASER_SLIDER_HANDLE_W: i32 = 8;

// Right control column.
pub const COLOR_BUTTON_WIDTH: i32 = 30;
pub const COLOR_BUTTON_HEIGHT: i32 = 24;
pub const COLOR_BUTTON_X: i32 = SCREEN_WIDTH - COLOR_BUTTON_WIDTH - 2;
pub const COLOR_BUTTON_Y: i32 = 4;
pub const COLOR_BUTTON_PITCH: i32 = 28;
pub const CUSTOM_COLOR_BUTTON_Y: i32 =
    COLOR_BUTTON_Y + COLOR_SWATCHES.len() as i32 * COLOR_BUTTON_PITCH;
pub const PEER_INFO_BACK_BUTTON_Y: i32 = SCREEN_HEIGHT - COLOR_BUTTON_HEIGHT - 8;

// Debug corner (bottom left).
pub const DEBUG_PANEL_X_MIN: i32 = 2;
pub const DEBUG_PANEL_X_MAX: i32 = 122;
pub const DEBUG_PANEL_Y_MIN: i32 = SCREEN_HEIGHT - 42;
pub const DEBUG_TOGGLE_BUTTON_X: i32 = 4;
pub const DEBUG_TOGGLE_BUTTON_Y: i32 = SCREEN_HEIGHT - 28;
pub const COFFEE_BUTTON_X: i32 = 32;
pub const INFO_BUTTON_X: i32 = 96;
pub const INFO_BUTTON_Y: i32 = SCREEN_HEIGHT - 36;
pub const SMALL_BUTTON_SIZE: i32 = 24;

// Custom color picker strip.
pub const PICKER_X: i32 = 60;
pub const PICKER_Y: i32 = 100;
pub const PICKER_CELL_SIZE: i32 = 24;

// Eraser protection: the controls the eraser fill must never overwrite.
pub const BUTTON_AREA_X_MAX: i32 =
    ERASER_SLIDER_X + ERASER_SLIDER_WIDTH + ERASER_SLIDER_HANDLE_W + 10;
pub const BUTTON_AREA_Y_MAX: i32 = PEER_INFO_BUTTON_Y + PEER_INFO_BUTTON_H + 10;
pub const BUTTON_AREA_RIGHT_X_MIN: i32 = SCREEN_WIDTH - COLOR_BUTTON_WIDTH - 4;
pub const BUTTON_AREA_RIGHT_Y_MIN: i32 = 4;
pub const BUTTON_AREA_RIGHT_Y_MAX: i32 = SCREEN_HEIGHT - 4;

pub const HISTORY_CAPACITY: usize = 2_048;
pub const OUTBOX_CAPACITY: usize = 16;
pub const REPAINT_QUEUE_CAPACITY: usize = 8;
