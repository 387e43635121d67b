#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawSample {
    pub x: u16,
    pub y: u16,
    pub pressure: u16,
}

/// Result of one sampling burst. `valid == false` is a "fly" reading: the
/// panel produced no reliable contact this cycle and the coordinates are
/// meaningless.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FilteredPoint {
    pub x: f32,
    pub y: f32,
    pub valid: bool,
}

impl FilteredPoint {
    pub const fn fly() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            valid: false,
        }
    }

    pub const fn contact(x: f32, y: f32) -> Self {
        Self { x, y, valid: true }
    }

    pub const fn is_fly(self) -> bool {
        !self.valid
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(feature = "graphics")]
impl From<ScreenPoint> for embedded_graphics::prelude::Point {
    fn from(point: ScreenPoint) -> Self {
        Self::new(point.x, point.y)
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics::prelude::Point> for ScreenPoint {
    fn from(point: embedded_graphics::prelude::Point) -> Self {
        Self::new(point.x, point.y)
    }
}

/// Touch controller as seen by the sampling loop.
///
/// Bus errors are the driver's concern; a driver that fails a transfer
/// reports a zero-pressure sample, which the filter treats as lift-off.
pub trait TouchSensor {
    /// Cheap presence check (pen IRQ line plus a pressure probe).
    fn has_pending_touch(&mut self) -> bool;

    fn poll_raw_sample(&mut self) -> RawSample;
}
