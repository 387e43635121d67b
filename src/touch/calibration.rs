use super::types::{FilteredPoint, ScreenPoint};
use crate::config::{
    SCREEN_HEIGHT, SCREEN_WIDTH, TOUCH_MAX_X, TOUCH_MAX_Y, TOUCH_MIN_X, TOUCH_MIN_Y,
};

/// Linear mapping from controller units to display pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchCalibration {
    pub raw_min_x: i32,
    pub raw_max_x: i32,
    pub raw_min_y: i32,
    pub raw_max_y: i32,
    pub screen_width: i32,
    pub screen_height: i32,
}

impl Default for TouchCalibration {
    fn default() -> Self {
        Self {
            raw_min_x: TOUCH_MIN_X,
            raw_max_x: TOUCH_MAX_X,
            raw_min_y: TOUCH_MIN_Y,
            raw_max_y: TOUCH_MAX_Y,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
        }
    }
}

impl TouchCalibration {
    /// Maps a valid filtered point. The fractional part of the filtered
    /// coordinate is truncated before scaling, and the scaled value is not
    /// clamped: readings past the calibrated extents land off-screen and
    /// simply miss every control.
    pub fn to_screen(&self, point: FilteredPoint) -> ScreenPoint {
        ScreenPoint {
            x: map_range(
                point.x as i32,
                self.raw_min_x,
                self.raw_max_x,
                0,
                self.screen_width,
            ),
            y: map_range(
                point.y as i32,
                self.raw_min_y,
                self.raw_max_y,
                0,
                self.screen_height,
            ),
        }
    }
}

fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    let in_span = in_max - in_min;
    if in_span == 0 {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / in_span + out_min
}
