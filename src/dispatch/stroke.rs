use crate::raster::Raster;
use crate::touch::ScreenPoint;

/// Where the pen was on the previous drawing cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LastTouchState {
    pub point: ScreenPoint,
    pub has_contact: bool,
    pub last_timestamp_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOp {
    Point(ScreenPoint),
    Line { from: ScreenPoint, to: ScreenPoint },
}

impl RenderOp {
    pub fn render<R: Raster + ?Sized>(self, raster: &mut R, color: u16) {
        match self {
            Self::Point(point) => raster.draw_pixel(point, color),
            Self::Line { from, to } => raster.draw_line(from, to, color),
        }
    }
}

/// Turns successive pen positions into points or connecting segments.
#[derive(Clone, Copy, Debug)]
pub struct StrokeComposer {
    interval_ms: u32,
    state: LastTouchState,
}

impl StrokeComposer {
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            state: LastTouchState {
                point: ScreenPoint::new(0, 0),
                has_contact: false,
                last_timestamp_ms: 0,
            },
        }
    }

    pub fn state(&self) -> LastTouchState {
        self.state
    }

    /// A segment joins the previous position only while contact was held
    /// and the gap stays within the stroke interval.
    pub fn compose(&mut self, point: ScreenPoint, timestamp_ms: u32) -> RenderOp {
        let gap_ms = timestamp_ms.wrapping_sub(self.state.last_timestamp_ms);
        let op = if self.state.has_contact && gap_ms <= self.interval_ms {
            RenderOp::Line {
                from: self.state.point,
                to: point,
            }
        } else {
            RenderOp::Point(point)
        };
        self.state = LastTouchState {
            point,
            has_contact: true,
            last_timestamp_ms: timestamp_ms,
        };
        op
    }

    /// Pen left the canvas; the next pen touch starts a fresh stroke.
    pub fn lift(&mut self) {
        self.state.has_contact = false;
    }
}
