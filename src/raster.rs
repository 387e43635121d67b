use crate::touch::ScreenPoint;

/// Drawing primitives the dispatcher needs. Colors are raw RGB565.
pub trait Raster {
    fn draw_pixel(&mut self, point: ScreenPoint, color: u16);
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: u16);
    /// Filled disc covering every pixel within `radius` of `center`.
    fn fill_circle(&mut self, center: ScreenPoint, radius: i32, color: u16);
}

#[cfg(feature = "graphics")]
pub use graphics::DrawTargetRaster;

#[cfg(feature = "graphics")]
mod graphics {
    use embedded_graphics::{
        pixelcolor::{raw::RawU16, Rgb565},
        prelude::*,
        primitives::{Circle, Line, PrimitiveStyle},
    };

    use super::Raster;
    use crate::touch::ScreenPoint;

    /// Adapts any RGB565 `DrawTarget` (panel driver, framebuffer) to
    /// [`Raster`]. Draw errors are discarded: a failed SPI flush loses one
    /// stroke segment, which the next segment paints over.
    pub struct DrawTargetRaster<D> {
        target: D,
    }

    impl<D> DrawTargetRaster<D>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        pub fn new(target: D) -> Self {
            Self { target }
        }

        pub fn target(&self) -> &D {
            &self.target
        }

        pub fn target_mut(&mut self) -> &mut D {
            &mut self.target
        }

        pub fn into_inner(self) -> D {
            self.target
        }
    }

    fn rgb565(color: u16) -> Rgb565 {
        Rgb565::from(RawU16::new(color))
    }

    impl<D> Raster for DrawTargetRaster<D>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        fn draw_pixel(&mut self, point: ScreenPoint, color: u16) {
            let _ = Pixel(Point::from(point), rgb565(color)).draw(&mut self.target);
        }

        fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: u16) {
            let _ = Line::new(from.into(), to.into())
                .into_styled(PrimitiveStyle::with_stroke(rgb565(color), 1))
                .draw(&mut self.target);
        }

        fn fill_circle(&mut self, center: ScreenPoint, radius: i32, color: u16) {
            if radius < 0 {
                return;
            }
            let diameter = radius as u32 * 2 + 1;
            let _ = Circle::with_center(center.into(), diameter)
                .into_styled(PrimitiveStyle::with_fill(rgb565(color)))
                .draw(&mut self.target);
        }
    }

}
