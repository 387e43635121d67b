use crate::touch::ScreenPoint;
use crate::ui::layout::Rect;

/// Keeps eraser discs from biting into the control columns. A disc that
/// would overlap any protected rectangle is dropped whole; it is never
/// clipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EraserGuard {
    protected: [Rect; 2],
}

impl EraserGuard {
    pub const fn new(protected: [Rect; 2]) -> Self {
        Self { protected }
    }

    pub fn protected(&self) -> &[Rect; 2] {
        &self.protected
    }

    /// True when some pixel strictly closer than `radius` to `center` lies
    /// inside a protected rectangle. Radius 0 touches nothing.
    pub fn would_hit_protected(&self, center: ScreenPoint, radius: i32) -> bool {
        if radius <= 0 {
            return false;
        }
        let radius_sq = i64::from(radius) * i64::from(radius);
        self.protected
            .iter()
            .any(|rect| rect.distance_sq(center) < radius_sq)
    }
}
