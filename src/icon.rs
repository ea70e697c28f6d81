//! The icon raster itself: a 16x16 two-tone blue square, lighter in the
//! top-left quadrant.

use crate::pixel::Pixel;

pub const WIDTH: u32 = 16;
pub const HEIGHT: u32 = 16;

pub const LIGHT_BLUE: Pixel = Pixel::new(70, 130, 230);
pub const DARK_BLUE: Pixel = Pixel::new(50, 70, 200);

/// Row-major raster of the icon, `WIDTH * HEIGHT` pixels.
pub fn render() -> Vec<Pixel> {
    let mut pixels = Vec::with_capacity((WIDTH * HEIGHT) as usize);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if x < WIDTH / 2 && y < HEIGHT / 2 {
                pixels.push(LIGHT_BLUE);
            } else {
                pixels.push(DARK_BLUE);
            }
        }
    }
    pixels
}
